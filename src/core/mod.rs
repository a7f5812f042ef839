pub mod area_series;
pub mod gridlines;
pub mod line_series;
pub mod pie_series;
pub mod scale;
pub mod types;

pub use area_series::{AreaGeometry, build_area_path};
pub use gridlines::{Gridline, build_gridlines};
pub use line_series::{LinePath, build_line_path};
pub use pie_series::{
    ColorToken, PieShare, PieSlice, ShareBreakdown, SliceArc, build_pie_slices, slice_arc,
};
pub use scale::{ValueScale, map_index_to_x, map_value_to_y};
pub use types::{DrawingSurface, PathVertex, Sample, Series, ValueField};
