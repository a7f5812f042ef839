use serde::{Deserialize, Serialize};

use crate::core::line_series::project_vertices;
use crate::core::scale::ValueScale;
use crate::core::{DrawingSurface, PathVertex, Series, ValueField};
use crate::error::{ChartError, ChartResult};

/// Deterministic geometry for an area chart.
///
/// `line_points` follows the mapped samples.
/// `fill_polygon` is an explicitly closed polygon against the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaGeometry {
    pub field: ValueField,
    pub line_points: Vec<PathVertex>,
    pub fill_polygon: Vec<PathVertex>,
}

/// Projects one value field into area-chart geometry.
///
/// The baseline is the surface bottom (`surface.height`).
pub fn build_area_path(
    series: &Series,
    field: ValueField,
    surface: DrawingSurface,
) -> ChartResult<AreaGeometry> {
    let surface = surface.validate()?;
    if series.is_empty() {
        return Err(ChartError::InsufficientSamples {
            required: 1,
            actual: 0,
        });
    }

    let scale = ValueScale::for_max(series.max_value())?;
    let line_points = project_vertices(series, field, surface, scale)?;

    let baseline_y = surface.height;
    let first_x = line_points[0].x;
    let last_x = line_points[line_points.len() - 1].x;

    let mut fill_polygon = Vec::with_capacity(line_points.len() + 3);
    fill_polygon.push(PathVertex::new(first_x, baseline_y));
    fill_polygon.extend(line_points.iter().copied());
    fill_polygon.push(PathVertex::new(last_x, baseline_y));
    // Repeat the first baseline vertex so consumers need no implicit closure.
    fill_polygon.push(PathVertex::new(first_x, baseline_y));

    Ok(AreaGeometry {
        field,
        line_points,
        fill_polygon,
    })
}
