//! Families of rotated curves ("shells")
//!
//! The base control points are rotated about Z once per angle, and each
//! rotated set is sampled into one layer. Layer order follows the angle
//! order, which the reveal animation relies on.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bounds::{ShellBounds, compute_bounds};
use crate::curve::{Bezier, CurveSample};
use crate::error::{CurveError, CurveResult};
use crate::settings::ShellSettings;
use crate::{linspace, rotate_about_z};

/// One rotated, sampled curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellLayer {
    /// Rotation applied to the base control points (degrees)
    pub angle_deg: f32,
    pub points: Vec<CurveSample>,
}

impl ShellLayer {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// `count` evenly spaced angles in [0, 360)
pub fn rotation_sweep(count: usize) -> Vec<f32> {
    (0..count)
        .map(|i| 360.0 * i as f32 / count as f32)
        .collect()
}

/// `count` control points uniform in [-extent, extent]³
pub fn random_control_points<R: Rng>(rng: &mut R, count: usize, extent: f32) -> Vec<Vec3> {
    let extent = extent.abs();
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.random_range(-extent..=extent),
                rng.random_range(-extent..=extent),
                rng.random_range(-extent..=extent),
            )
        })
        .collect()
}

/// Build one layer per rotation angle, each sampled at `sample_count`
/// evenly spaced parameters in [0, 1].
pub fn build(
    base_points: &[Vec3],
    rotation_angles: &[f32],
    sample_count: usize,
) -> CurveResult<Vec<ShellLayer>> {
    if base_points.len() < 2 {
        return Err(CurveError::InvalidAxis {
            axis: 0,
            len: base_points.len(),
        });
    }

    let ts = linspace(0.0, 1.0, sample_count);
    let mut rotated = Vec::with_capacity(base_points.len());

    rotation_angles
        .iter()
        .map(|&angle_deg| -> CurveResult<ShellLayer> {
            rotated.clear();
            rotated.extend(base_points.iter().map(|&p| rotate_about_z(p, angle_deg)));
            let points = Bezier::curve(&rotated).sample(&ts)?;
            Ok(ShellLayer { angle_deg, points })
        })
        .collect()
}

/// A generated sculpture: its control points, layers and framing bounds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shell {
    pub control_points: Vec<Vec3>,
    pub layers: Vec<ShellLayer>,
    /// `None` when there are no sampled points
    pub bounds: Option<ShellBounds>,
}

impl Shell {
    /// Total sampled points across all layers
    pub fn point_count(&self) -> usize {
        self.layers.iter().map(ShellLayer::len).sum()
    }
}

/// Shell builder bound to a fixed configuration; only the seed varies
#[derive(Debug, Clone)]
pub struct ShellGenerator {
    pub control_points: usize,
    pub extent: f32,
    pub rotations: usize,
    pub samples: usize,
    pub margin: f32,
}

impl Default for ShellGenerator {
    fn default() -> Self {
        Self::from_settings(&ShellSettings::default())
    }
}

impl ShellGenerator {
    pub fn from_settings(settings: &ShellSettings) -> Self {
        Self {
            control_points: settings.control_points,
            extent: settings.extent,
            rotations: settings.rotations,
            samples: settings.samples,
            margin: settings.margin,
        }
    }

    pub fn generate(&self, seed: u64) -> CurveResult<Shell> {
        let mut rng = Pcg32::seed_from_u64(seed);
        let control_points = random_control_points(&mut rng, self.control_points, self.extent);
        let layers = build(&control_points, &rotation_sweep(self.rotations), self.samples)?;
        let bounds = compute_bounds(&layers, self.margin);

        log::info!(
            "Shell seed={}: {} layers x {} samples from {} control points",
            seed,
            layers.len(),
            self.samples,
            control_points.len()
        );

        Ok(Shell {
            control_points,
            layers,
            bounds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_rotation_sweep_excludes_full_turn() {
        let angles = rotation_sweep(4);
        assert_eq!(angles, vec![0.0, 90.0, 180.0, 270.0]);
        assert!(rotation_sweep(0).is_empty());
    }

    #[test]
    fn test_layer_counts() {
        let base = [Vec3::X, Vec3::Y, Vec3::Z];
        let layers = build(&base, &[0.0, 45.0, 90.0], 7).unwrap();
        assert_eq!(layers.len(), 3);
        assert!(layers.iter().all(|l| l.len() == 7));
        assert_eq!(layers[1].angle_deg, 45.0);
    }

    #[test]
    fn test_layer_endpoints_are_rotated_base_endpoints() {
        let base = [Vec3::new(1.0, 0.0, 0.5), Vec3::new(2.0, 1.0, 0.0), Vec3::new(0.0, 3.0, 1.0)];
        let layers = build(&base, &[90.0], 5).unwrap();
        let first = layers[0].points[0];
        let last = layers[0].points[4];
        assert!((first - rotate_about_z(base[0], 90.0)).length() < 1e-5);
        assert!((last - rotate_about_z(base[2], 90.0)).length() < 1e-5);
        assert_eq!(first.z, 0.5);
    }

    #[test]
    fn test_too_few_control_points() {
        assert_eq!(
            build(&[Vec3::ONE], &[0.0], 10).unwrap_err(),
            CurveError::InvalidAxis { axis: 0, len: 1 }
        );
    }

    #[test]
    fn test_sculpture_scenario() {
        let mut rng = Pcg32::seed_from_u64(42);
        let base = random_control_points(&mut rng, CONTROL_POINTS, CONTROL_EXTENT);
        assert!(base.iter().all(|p| p.abs().max_element() <= CONTROL_EXTENT));

        let layers = build(&base, &rotation_sweep(ROTATION_COUNT), SAMPLE_COUNT).unwrap();
        assert_eq!(layers.len(), 180);
        assert!(layers.iter().all(|l| l.len() == 100));

        let bounds = compute_bounds(&layers, BOUNDS_MARGIN).unwrap();
        let total: usize = layers.iter().map(ShellLayer::len).sum();
        assert_eq!(total, 18_000);
        assert!(layers.iter().flat_map(|l| &l.points).all(|&p| bounds.contains(p)));
    }

    #[test]
    fn test_generator_is_deterministic() {
        let generator = ShellGenerator {
            rotations: 12,
            samples: 20,
            ..ShellGenerator::default()
        };
        let a = generator.generate(7).unwrap();
        let b = generator.generate(7).unwrap();
        assert_eq!(a.control_points, b.control_points);
        assert_eq!(a.layers, b.layers);
        assert_eq!(a.point_count(), 240);
        assert!(a.bounds.is_some());
    }
}
