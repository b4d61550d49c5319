//! Bounding box and centroid of a shell point cloud

use glam::{DVec3, Vec3};
use serde::{Deserialize, Serialize};

use super::family::ShellLayer;

/// Axis-aligned box (margin included) plus the centroid of all points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShellBounds {
    pub min: Vec3,
    pub max: Vec3,
    pub centroid: Vec3,
}

impl ShellBounds {
    #[inline]
    pub fn contains(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Edge lengths of the box
    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }

    /// Box limits scaled about the centroid (1.0 leaves them unchanged)
    pub fn zoomed(&self, factor: f32) -> (Vec3, Vec3) {
        (
            self.centroid + (self.min - self.centroid) * factor,
            self.centroid + (self.max - self.centroid) * factor,
        )
    }
}

/// Bounds over every point of every layer, widened by `margin` on each side.
///
/// Returns `None` if the layers hold no points.
pub fn compute_bounds(layers: &[ShellLayer], margin: f32) -> Option<ShellBounds> {
    let mut points = layers.iter().flat_map(|l| l.points.iter().copied());
    let first = points.next()?;

    let (mut min, mut max) = (first, first);
    let mut sum = first.as_dvec3();
    let mut count = 1usize;
    for p in points {
        min = min.min(p);
        max = max.max(p);
        sum += p.as_dvec3();
        count += 1;
    }

    let centroid: DVec3 = sum / count as f64;
    Some(ShellBounds {
        min: min - Vec3::splat(margin),
        max: max + Vec3::splat(margin),
        centroid: centroid.as_vec3(),
    })
}
