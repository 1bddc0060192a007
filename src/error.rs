use thiserror::Error;

use crate::scene::ObjectId;

/// Errors raised by math constructors that reject their inputs.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    #[error("field of view must be between 0 and 179 degrees (exclusive), got {0}")]
    InvalidFieldOfView(f32),
    #[error("aspect ratio must be greater than zero, got {0}")]
    InvalidAspectRatio(f32),
    #[error("near clipping plane must be greater than zero, got {0}")]
    InvalidNearPlane(f32),
    #[error("far clipping plane ({far}) must be greater than the near clipping plane ({near})")]
    InvalidFarPlane { near: f32, far: f32 },
    #[error("cannot invert a quaternion with zero magnitude")]
    ZeroQuaternion,
}

/// Errors from parsing a vector out of its `x,y,z` text form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseVectorError {
    #[error("expected {expected} comma-separated components, got {found}")]
    ComponentCount { expected: usize, found: usize },
    #[error("invalid component `{0}`")]
    InvalidComponent(String),
}

/// Errors raised when a [`Scene`](crate::scene::Scene) operation names an object it cannot use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("no object with id {0} in the scene")]
    UnknownObject(ObjectId),
    #[error("object {0} has no camera attached")]
    NoCamera(ObjectId),
}
