//! Single-precision 3D math: vectors, quaternions and 4x4 matrices, plus the
//! small value types (colors, integer vectors and rects) that travel with them.
//!
//! Matrices follow the column-vector convention (`p' = M * p`) with column-major
//! storage, and the coordinate system is left-handed: +X right, +Y up, +Z forward.
//! `PartialEq` on every type is exact; use the `approx` traits for tolerance.

#[macro_use]
mod macros;

pub mod color;
pub mod interop;
pub mod matrix;
pub mod quaternion;
pub mod rect;
pub mod scalar;
pub mod vector;

pub use color::Color;
pub use matrix::Matrix4x4;
pub use quaternion::Quaternion;
pub use rect::Rect;
pub use vector::{Vector2, Vector2Int, Vector3, Vector4};
