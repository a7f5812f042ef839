use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{
    AreaGeometry, Gridline, LinePath, PathVertex, PieShare, PieSlice, Series, SliceArc,
    ValueField, build_area_path, build_gridlines, build_line_path, build_pie_slices, map_index_to_x,
    slice_arc,
};
use crate::error::ChartResult;
use crate::format::format_value;
use crate::source::{ReportingWindow, SeriesSource};

use super::ChartGeometryConfig;

/// Gridline with its rendered value label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridlineLabel {
    pub gridline: Gridline,
    pub text: String,
}

/// Category label placed under one sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTick {
    pub x: f64,
    pub text: String,
}

/// Every primitive needed to draw one line/area analytics chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    pub max_value: f64,
    pub primary: LinePath,
    pub secondary: Option<LinePath>,
    pub area: Option<AreaGeometry>,
    pub gridlines: Vec<GridlineLabel>,
    pub category_ticks: Vec<CategoryTick>,
}

/// Builds the full geometry set for a series in one pure call.
pub fn build_chart_geometry(
    series: &Series,
    config: &ChartGeometryConfig,
) -> ChartResult<ChartGeometry> {
    let config = config.validate()?;
    let surface = config.surface;
    let max_value = series.max_value();

    let primary = build_line_path(series, ValueField::Primary, surface)?;

    let secondary = if !config.show_secondary {
        None
    } else if series.has_secondary() {
        Some(build_line_path(series, ValueField::Secondary, surface)?)
    } else {
        if series.samples().iter().any(|s| s.secondary_value.is_some()) {
            warn!("series has partial secondary values; skipping secondary path");
        }
        None
    };

    let area = if config.show_area {
        Some(build_area_path(series, ValueField::Primary, surface)?)
    } else {
        None
    };

    let gridlines = build_gridlines(surface, config.gridline_divisions, max_value)?
        .into_iter()
        .map(|gridline| GridlineLabel {
            text: format_value(gridline.value, config.label_format),
            gridline,
        })
        .collect();

    let category_ticks = series
        .samples()
        .iter()
        .enumerate()
        .map(|(index, sample)| -> ChartResult<CategoryTick> {
            Ok(CategoryTick {
                x: map_index_to_x(index, series.len(), surface.width)?,
                text: sample.label.clone(),
            })
        })
        .collect::<ChartResult<Vec<_>>>()?;

    debug!(
        samples = series.len(),
        max_value,
        has_secondary = secondary.is_some(),
        "built chart geometry"
    );

    Ok(ChartGeometry {
        max_value,
        primary,
        secondary,
        area,
        gridlines,
        category_ticks,
    })
}

/// Pulls the series for `window` from `source` and builds its geometry.
///
/// Switching windows rebuilds the whole geometry set.
pub fn build_chart_geometry_from_source<S>(
    source: &S,
    window: ReportingWindow,
    config: &ChartGeometryConfig,
) -> ChartResult<ChartGeometry>
where
    S: SeriesSource + ?Sized,
{
    let series = source.series(window)?;
    build_chart_geometry(&series, config)
}

/// Slices plus their outer arcs for one pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChartGeometry {
    pub slices: Vec<PieSlice>,
    pub arcs: Vec<SliceArc>,
}

impl PieChartGeometry {
    /// Sum of all sweep angles in degrees.
    #[must_use]
    pub fn total_sweep(&self) -> f64 {
        self.slices.iter().map(|slice| slice.sweep_angle).sum()
    }
}

pub fn build_pie_chart(
    shares: &[PieShare],
    center: PathVertex,
    radius: f64,
) -> ChartResult<PieChartGeometry> {
    let slices = build_pie_slices(shares)?;
    let arcs = slices
        .iter()
        .map(|slice| slice_arc(slice, center, radius))
        .collect::<ChartResult<Vec<_>>>()?;
    Ok(PieChartGeometry { slices, arcs })
}
