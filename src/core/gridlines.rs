use serde::{Deserialize, Serialize};

use crate::core::DrawingSurface;
use crate::error::{ChartError, ChartResult};

/// Horizontal gridline with the value it marks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gridline {
    /// Position as a fraction of the surface height, `0.0` at the top.
    pub fraction: f64,
    pub y: f64,
    pub value: f64,
}

/// Builds `divisions + 1` evenly spaced horizontal gridlines.
///
/// Line `i` sits at `i / divisions` of the surface height and is labelled
/// `max_value * (1 - fraction)`, so the top line carries `max_value` and the
/// bottom line carries 0.
pub fn build_gridlines(
    surface: DrawingSurface,
    divisions: usize,
    max_value: f64,
) -> ChartResult<Vec<Gridline>> {
    let surface = surface.validate()?;
    if divisions == 0 {
        return Err(ChartError::InvalidData(
            "gridline divisions must be > 0".to_owned(),
        ));
    }
    if !max_value.is_finite() || max_value < 0.0 {
        return Err(ChartError::InvalidData(
            "gridline max value must be finite and >= 0".to_owned(),
        ));
    }

    let lines = (0..=divisions)
        .map(|step| {
            let fraction = step as f64 / divisions as f64;
            Gridline {
                fraction,
                y: fraction * surface.height,
                value: max_value * (1.0 - fraction),
            }
        })
        .collect();
    Ok(lines)
}
