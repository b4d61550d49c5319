//! Control-point tensors as a flat buffer plus explicit shape
//!
//! Element `(i0, i1, ..., ik)` lives at the usual row-major offset. Splitting
//! along an axis views the buffer as `[outer, len, inner]`, where `outer` is
//! the product of the leading axes and `inner` the product of the trailing
//! ones.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};

/// An N-dimensional array of control values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawControlTensor")]
pub struct ControlTensor {
    shape: Vec<usize>,
    data: Vec<f32>,
}

/// Unchecked wire form; deserialization goes through [`ControlTensor::new`]
#[derive(Deserialize)]
struct RawControlTensor {
    shape: Vec<usize>,
    data: Vec<f32>,
}

impl TryFrom<RawControlTensor> for ControlTensor {
    type Error = CurveError;

    fn try_from(raw: RawControlTensor) -> CurveResult<Self> {
        Self::new(raw.shape, raw.data)
    }
}

impl ControlTensor {
    /// Build a tensor, checking that the buffer matches the shape.
    ///
    /// A shape whose element count overflows `usize` reports
    /// `expected: usize::MAX`.
    pub fn new(shape: Vec<usize>, data: Vec<f32>) -> CurveResult<Self> {
        let expected = if shape.contains(&0) {
            0
        } else {
            shape
                .iter()
                .try_fold(1usize, |acc, &len| acc.checked_mul(len))
                .unwrap_or(usize::MAX)
        };
        if expected != data.len() {
            return Err(CurveError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// An ordered sequence of 3D points: shape `[n, 3]`
    pub fn from_points(points: &[Vec3]) -> Self {
        let data = points.iter().flat_map(|p| p.to_array()).collect();
        Self {
            shape: vec![points.len(), 3],
            data,
        }
    }

    #[inline]
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn into_data(self) -> Vec<f32> {
        self.data
    }

    /// (outer, len, inner) extents around `axis`
    fn extents(&self, axis: usize) -> (usize, usize, usize) {
        let outer = self.shape[..axis].iter().product();
        let inner = self.shape[axis + 1..].iter().product();
        (outer, self.shape[axis], inner)
    }

    fn shape_without(&self, axis: usize) -> Vec<usize> {
        let mut shape = self.shape.clone();
        shape.remove(axis);
        shape
    }

    /// Flat buffer of slice `index` along `axis`, with `axis` squeezed out
    fn slice_data(&self, axis: usize, index: usize) -> Vec<f32> {
        let (outer, len, inner) = self.extents(axis);
        let mut out = Vec::with_capacity(outer * inner);
        for o in 0..outer {
            let start = (o * len + index) * inner;
            out.extend_from_slice(&self.data[start..start + inner]);
        }
        out
    }

    /// Slice `index` along `axis` (the axis is removed from the result).
    ///
    /// Returns `None` when the axis or index is out of range.
    pub fn slice(&self, axis: usize, index: usize) -> Option<Self> {
        if axis >= self.rank() || index >= self.shape[axis] {
            return None;
        }
        Some(Self {
            shape: self.shape_without(axis),
            data: self.slice_data(axis, index),
        })
    }

    /// Collapse `axis` by repeated pairwise blending at parameter `t`.
    ///
    /// Each round replaces `n` slices with `n - 1` blends of neighbours,
    /// weighting the earlier slice by `1 - t` and the later by `t`, until a
    /// single slice remains.
    pub fn collapse(&self, axis: usize, t: f32) -> CurveResult<Self> {
        if axis >= self.rank() {
            return Err(CurveError::AxisOutOfRange {
                axis,
                rank: self.rank(),
            });
        }
        let len = self.shape[axis];
        if len < 2 {
            return Err(CurveError::InvalidAxis { axis, len });
        }

        let mut work: Vec<Vec<f32>> = (0..len).map(|i| self.slice_data(axis, i)).collect();
        for remaining in (1..len).rev() {
            for i in 0..remaining {
                let (head, tail) = work.split_at_mut(i + 1);
                blend_into(&mut head[i], &tail[0], t);
            }
        }
        work.truncate(1);

        Ok(Self {
            shape: self.shape_without(axis),
            data: work.swap_remove(0),
        })
    }

    /// Interpret a fully collapsed tensor as a 3D point
    pub fn to_point(&self) -> CurveResult<Vec3> {
        match self.data.as_slice() {
            [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
            other => Err(CurveError::ShapeMismatch {
                expected: 3,
                actual: other.len(),
            }),
        }
    }
}

/// `a = (1 - t) * a + t * b`, element-wise
#[inline]
fn blend_into(a: &mut [f32], b: &[f32], t: f32) {
    for (x, y) in a.iter_mut().zip(b) {
        *x = (1.0 - t) * *x + t * *y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube() -> ControlTensor {
        // shape [2, 3, 2], values 0..12
        ControlTensor::new(vec![2, 3, 2], (0..12).map(|v| v as f32).collect()).unwrap()
    }

    #[test]
    fn test_new_rejects_bad_buffer() {
        let err = ControlTensor::new(vec![2, 3], vec![0.0; 5]).unwrap_err();
        assert_eq!(err, CurveError::ShapeMismatch { expected: 6, actual: 5 });
    }

    #[test]
    fn test_new_rejects_overflowing_shape() {
        let err = ControlTensor::new(vec![usize::MAX, 2], Vec::new()).unwrap_err();
        assert_eq!(err, CurveError::ShapeMismatch { expected: usize::MAX, actual: 0 });

        // An empty axis wins over overflow
        assert!(ControlTensor::new(vec![usize::MAX, 2, 0], Vec::new()).is_ok());
    }

    #[test]
    fn test_deserialize_checks_buffer() {
        let bad = serde_json::from_str::<ControlTensor>(r#"{"shape":[3,3],"data":[1.0,2.0]}"#);
        let err = bad.unwrap_err().to_string();
        assert!(err.contains("shape mismatch: expected 9 elements, found 2"), "{}", err);

        let good = cube();
        let json = serde_json::to_string(&good).unwrap();
        assert_eq!(serde_json::from_str::<ControlTensor>(&json).unwrap(), good);
    }

    #[test]
    fn test_slice_middle_axis() {
        let t = cube();
        let s = t.slice(1, 2).unwrap();
        assert_eq!(s.shape(), &[2, 2]);
        assert_eq!(s.data(), &[4.0, 5.0, 10.0, 11.0]);

        let s = t.slice(0, 1).unwrap();
        assert_eq!(s.data(), &[6.0, 7.0, 8.0, 9.0, 10.0, 11.0]);

        assert!(t.slice(3, 0).is_none());
        assert!(t.slice(1, 3).is_none());
    }

    #[test]
    fn test_collapse_removes_axis() {
        let t = cube();
        let c = t.collapse(1, 0.5).unwrap();
        assert_eq!(c.shape(), &[2, 2]);
        // Middle slice dominates at t=0.5: 0.25*a + 0.5*b + 0.25*c
        assert_eq!(c.data(), &[2.0, 3.0, 8.0, 9.0]);
    }

    #[test]
    fn test_collapse_errors() {
        let t = ControlTensor::new(vec![1, 3], vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(
            t.collapse(0, 0.5).unwrap_err(),
            CurveError::InvalidAxis { axis: 0, len: 1 }
        );
        assert_eq!(
            t.collapse(2, 0.5).unwrap_err(),
            CurveError::AxisOutOfRange { axis: 2, rank: 2 }
        );
    }

    #[test]
    fn test_to_point() {
        let p = ControlTensor::new(vec![3], vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(p.to_point().unwrap(), Vec3::new(1.0, 2.0, 3.0));
        assert!(cube().to_point().is_err());
    }
}
