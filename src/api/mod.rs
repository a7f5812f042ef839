mod chart_config;
mod chart_geometry;
mod json_contract;

pub use chart_config::ChartGeometryConfig;
pub use chart_geometry::{
    CategoryTick, ChartGeometry, GridlineLabel, PieChartGeometry, build_chart_geometry,
    build_chart_geometry_from_source, build_pie_chart,
};
pub use json_contract::{CHART_GEOMETRY_JSON_SCHEMA_V1, ChartGeometryJsonContractV1};
