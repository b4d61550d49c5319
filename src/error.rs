//! Error types for curve evaluation and settings loading

pub type CurveResult<T> = Result<T, CurveError>;

/// Failures of the control-tensor evaluator
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    /// Interpolation needs at least two slices along the collapsed axis
    #[error("invalid axis {axis}: length {len} is too short to interpolate (need at least 2)")]
    InvalidAxis { axis: usize, len: usize },

    #[error("parameter mismatch: {params} parameters for {axes} collapse axes")]
    ParameterMismatch { params: usize, axes: usize },

    #[error("axis {axis} out of range for tensor of rank {rank}")]
    AxisOutOfRange { axis: usize, rank: usize },

    #[error("shape mismatch: expected {expected} elements, found {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("settings io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown detail preset '{0}' (expected low, medium or high)")]
    UnknownPreset(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_offending_axis() {
        let err = CurveError::InvalidAxis { axis: 2, len: 1 };
        assert!(err.to_string().contains("invalid axis 2"));

        let err = CurveError::ParameterMismatch { params: 1, axes: 2 };
        assert!(err.to_string().contains("1 parameters for 2 collapse axes"));
    }

    #[test]
    fn test_settings_error_from_serde() {
        let parse = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = SettingsError::from(parse);
        assert!(err.to_string().starts_with("settings parse error"));
    }
}
