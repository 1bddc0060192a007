//! Core of a small Unity-style engine: 3D math, transforms and cameras.

pub mod demo;
pub mod error;
pub mod math;
pub mod scene;

pub use error::{MathError, ParseVectorError, SceneError};
pub use math::{Color, Matrix4x4, Quaternion, Rect, Vector2, Vector2Int, Vector3, Vector4};
pub use scene::{Camera, CameraSettings, GameObject, ObjectId, Scene, Time, Transform};
