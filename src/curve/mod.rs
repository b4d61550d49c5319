//! Parametric curve evaluation
//!
//! Control points are stored as a [`ControlTensor`] and reduced by
//! [`evaluate`] one axis at a time. A 3D curve is just the rank-2 case
//! `[n, 3]` collapsed along axis 0.

pub mod bezier;
pub mod tensor;

pub use bezier::{Bezier, evaluate};
pub use tensor::ControlTensor;

/// One evaluated point on a curve
pub type CurveSample = glam::Vec3;
