//! Multi-affine Bezier evaluation (generalized de Casteljau)

use glam::Vec3;

use super::tensor::ControlTensor;
use crate::error::{CurveError, CurveResult};

/// Collapse `collapse_axes` of `control_points` at the matching `params`.
///
/// Axes are consumed front to back. After each collapse, the remaining axis
/// indices greater than the collapsed one shift down by one so they keep
/// pointing at the same data in the lower-rank tensor. Axes not listed are
/// left intact in the result.
pub fn evaluate(
    control_points: &ControlTensor,
    collapse_axes: &[usize],
    params: &[f32],
) -> CurveResult<ControlTensor> {
    if params.len() != collapse_axes.len() {
        return Err(CurveError::ParameterMismatch {
            params: params.len(),
            axes: collapse_axes.len(),
        });
    }

    let (Some((&axis, rest_axes)), Some((&t, rest_params))) =
        (collapse_axes.split_first(), params.split_first())
    else {
        return Ok(control_points.clone());
    };

    let reduced = control_points.collapse(axis, t)?;
    if rest_axes.is_empty() {
        return Ok(reduced);
    }

    let renumbered: Vec<usize> = rest_axes
        .iter()
        .map(|&a| if a > axis { a - 1 } else { a })
        .collect();
    evaluate(&reduced, &renumbered, rest_params)
}

/// A control tensor bound to the axes it is evaluated over
#[derive(Debug, Clone)]
pub struct Bezier {
    pub control_points: ControlTensor,
    pub collapse_axes: Vec<usize>,
}

impl Bezier {
    pub fn new(control_points: ControlTensor, collapse_axes: Vec<usize>) -> Self {
        Self {
            control_points,
            collapse_axes,
        }
    }

    /// Single-parameter curve through an ordered list of 3D control points
    pub fn curve(points: &[Vec3]) -> Self {
        Self::new(ControlTensor::from_points(points), vec![0])
    }

    /// Evaluate at one parameter per collapse axis
    pub fn eval(&self, ts: &[f32]) -> CurveResult<ControlTensor> {
        evaluate(&self.control_points, &self.collapse_axes, ts)
    }

    /// Evaluate a single-axis curve at `t` down to a 3D point
    pub fn point_at(&self, t: f32) -> CurveResult<Vec3> {
        self.eval(&[t])?.to_point()
    }

    /// Evaluate a single-axis curve at every parameter in `ts`
    pub fn sample(&self, ts: &[f32]) -> CurveResult<Vec<Vec3>> {
        ts.iter().map(|&t| self.point_at(t)).collect()
    }
}
