//! Shell sculpture: a rotated family of Bezier curves

pub mod bounds;
pub mod family;

pub use bounds::{ShellBounds, compute_bounds};
pub use family::{Shell, ShellGenerator, ShellLayer, build, random_control_points, rotation_sweep};
