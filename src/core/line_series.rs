use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::scale::{ValueScale, map_index_to_x};
use crate::core::{DrawingSurface, PathVertex, Series, ValueField};
use crate::error::{ChartError, ChartResult};

/// Polyline through one value field of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePath {
    pub field: ValueField,
    pub vertices: Vec<PathVertex>,
}

impl LinePath {
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Projects one value field of a series into a polyline.
///
/// One vertex per sample, series order preserved, no smoothing. The vertical
/// scale uses the maximum across both fields so primary and secondary paths
/// share an axis. An all-zero series lays every vertex on the baseline.
pub fn build_line_path(
    series: &Series,
    field: ValueField,
    surface: DrawingSurface,
) -> ChartResult<LinePath> {
    let surface = surface.validate()?;
    if series.is_empty() {
        return Err(ChartError::InsufficientSamples {
            required: 1,
            actual: 0,
        });
    }

    let scale = ValueScale::for_max(series.max_value())?;
    let vertices = project_vertices(series, field, surface, scale)?;
    trace!(?field, vertices = vertices.len(), "built line path");

    Ok(LinePath { field, vertices })
}

pub(crate) fn project_vertices(
    series: &Series,
    field: ValueField,
    surface: DrawingSurface,
    scale: ValueScale,
) -> ChartResult<Vec<PathVertex>> {
    let count = series.len();
    let mut vertices = Vec::with_capacity(count);
    for (index, sample) in series.samples().iter().enumerate() {
        let value = sample
            .field(field)
            .ok_or(ChartError::MissingSecondaryValue { index })?;
        let x = map_index_to_x(index, count, surface.width)?;
        let y = scale.value_to_y(value, surface.height)?;
        vertices.push(PathVertex::new(x, y));
    }
    Ok(vertices)
}
