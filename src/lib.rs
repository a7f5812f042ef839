//! kpi-chart-rs: chart geometry for business-intelligence dashboards.
//!
//! Turns ordered KPI samples into line, area, gridline and pie primitives on a
//! logical drawing surface. Every operation is a pure function; rendering the
//! primitives as vector graphics is left to the host.

pub mod api;
pub mod core;
pub mod error;
pub mod format;
pub mod source;
pub mod telemetry;

pub use api::{ChartGeometry, ChartGeometryConfig, build_chart_geometry};
pub use error::{ChartError, ChartResult};
