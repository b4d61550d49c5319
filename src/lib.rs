//! Whisper Shell - deterministic procedural generators
//!
//! Core modules:
//! - `grid`: Seeded hidden-word grid ("whisper grid")
//! - `curve`: Multi-affine Bezier evaluation over control tensors
//! - `shell`: Rotated curve families and their bounds
//! - `animation`: Reveal/orbit camera timeline
//! - `renderer`: Draw-list preparation for external rasterizers
//! - `settings`: Serializable configuration

pub mod animation;
pub mod curve;
pub mod error;
pub mod grid;
pub mod renderer;
pub mod settings;
pub mod shell;

pub use error::{CurveError, CurveResult, SettingsError};
pub use settings::{DetailPreset, Settings};

use glam::{Mat3, Vec3};

/// Generator defaults (the original demo constants)
pub mod consts {
    /// Grid dimensions
    pub const GRID_SIZE: usize = 25;
    pub const CELL_SIZE: u32 = 40;
    pub const FONT_SIZE: u32 = 24;
    /// Offset of each glyph inside its cell
    pub const CELL_PADDING: u32 = 5;

    /// Hidden word and its placement budget
    pub const HIDDEN_WORD: &str = "NAMMU";
    pub const MIN_WORDS: u32 = 5;
    pub const MAX_WORDS: u32 = 8;
    pub const MAX_ATTEMPTS: u32 = 100;

    /// Seed slider
    pub const DEFAULT_SEED: u64 = 50;
    pub const SEED_MIN: u64 = 0;
    pub const SEED_MAX: u64 = 100;

    /// ASCII letters followed by digits
    pub const ALPHANUMERIC: &str =
        "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

    /// Shell sculpture
    pub const CONTROL_POINTS: usize = 12;
    /// Control points are drawn from [-extent, extent] on every axis
    pub const CONTROL_EXTENT: f32 = 5.0;
    pub const ROTATION_COUNT: usize = 180;
    pub const SAMPLE_COUNT: usize = 100;
    pub const BOUNDS_MARGIN: f32 = 1.0;

    /// Orbit animation
    pub const ORBIT_FRAMES: u32 = 180;
    pub const FPS: u32 = 30;
    pub const ZOOM_AMPLITUDE: f32 = 0.25;
    pub const ELEVATION_BASE: f32 = 30.0;
    pub const ELEVATION_SWING: f32 = 15.0;
    /// Camera used while the shell is still being revealed
    pub const DEFAULT_ELEVATION: f32 = 30.0;
    pub const DEFAULT_AZIMUTH: f32 = -60.0;
}

/// Rotate a point about the Z axis (XY plane rotation, Z unchanged)
#[inline]
pub fn rotate_about_z(point: Vec3, degrees: f32) -> Vec3 {
    Mat3::from_rotation_z(degrees.to_radians()) * point
}

/// `count` evenly spaced values from `start` to `end` inclusive.
///
/// A single value yields `[start]`; zero yields an empty vector.
pub fn linspace(start: f32, end: f32, count: usize) -> Vec<f32> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f32;
            (0..count)
                .map(|i| if i == count - 1 { end } else { start + step * i as f32 })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let v = linspace(0.0, 1.0, 5);
        assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(0.0, 1.0, 1), vec![0.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_rotate_about_z_quarter_turn() {
        let p = rotate_about_z(Vec3::new(1.0, 0.0, 2.0), 90.0);
        assert!(p.x.abs() < 1e-6);
        assert!((p.y - 1.0).abs() < 1e-6);
        assert_eq!(p.z, 2.0);
    }
}
