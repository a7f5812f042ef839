use crate::error::{ChartError, ChartResult};

/// Maps a measurement onto the vertical axis of a drawing surface.
///
/// Larger values map to smaller `y` (origin at top-left). A zero, negative or
/// non-finite `max_value` is rejected with `DegenerateRange`; callers that
/// need a flat baseline instead use [`ValueScale::for_max`].
pub fn map_value_to_y(value: f64, max_value: f64, height: f64) -> ChartResult<f64> {
    if !max_value.is_finite() || max_value <= 0.0 {
        return Err(ChartError::DegenerateRange { max_value });
    }
    if !value.is_finite() || value < 0.0 {
        return Err(ChartError::InvalidData(
            "value must be finite and >= 0".to_owned(),
        ));
    }
    if !height.is_finite() || height <= 0.0 {
        return Err(ChartError::InvalidData(
            "height must be finite and > 0".to_owned(),
        ));
    }

    Ok(height - (value / max_value) * height)
}

/// Spaces sample indices evenly across the surface width.
///
/// The first sample sits on `x = 0` and the last on `x = width`. A single
/// sample is centered at `width / 2`.
pub fn map_index_to_x(index: usize, sample_count: usize, width: f64) -> ChartResult<f64> {
    if sample_count == 0 {
        return Err(ChartError::InsufficientSamples {
            required: 1,
            actual: 0,
        });
    }
    if index >= sample_count {
        return Err(ChartError::InvalidData(format!(
            "sample index {index} out of range for {sample_count} samples"
        )));
    }
    if !width.is_finite() || width < 0.0 {
        return Err(ChartError::InvalidData(
            "width must be finite and >= 0".to_owned(),
        ));
    }

    if sample_count == 1 {
        return Ok(width / 2.0);
    }

    let step = width / (sample_count - 1) as f64;
    Ok(index as f64 * step)
}

/// Vertical scale resolved once per series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueScale {
    /// Regular proportional mapping against a positive maximum.
    Proportional { max_value: f64 },
    /// Every value sits on the baseline; used when the series maximum is 0.
    Baseline,
}

impl ValueScale {
    /// Resolves the scale for a series maximum, falling back to the baseline
    /// when the maximum is zero.
    pub fn for_max(max_value: f64) -> ChartResult<Self> {
        if !max_value.is_finite() || max_value < 0.0 {
            return Err(ChartError::DegenerateRange { max_value });
        }
        if max_value == 0.0 {
            return Ok(Self::Baseline);
        }
        Ok(Self::Proportional { max_value })
    }

    pub fn value_to_y(self, value: f64, height: f64) -> ChartResult<f64> {
        match self {
            Self::Proportional { max_value } => map_value_to_y(value, max_value, height),
            Self::Baseline => Ok(height),
        }
    }
}
