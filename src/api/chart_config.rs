use serde::{Deserialize, Serialize};

use crate::core::DrawingSurface;
use crate::error::{ChartError, ChartResult};
use crate::format::NumberFormat;

/// Geometry configuration for one analytics chart.
///
/// Serializable so a dashboard can persist chart setup next to its layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometryConfig {
    pub surface: DrawingSurface,
    #[serde(default = "default_gridline_divisions")]
    pub gridline_divisions: usize,
    #[serde(default = "default_true")]
    pub show_secondary: bool,
    #[serde(default = "default_true")]
    pub show_area: bool,
    #[serde(default)]
    pub label_format: NumberFormat,
}

impl Default for ChartGeometryConfig {
    fn default() -> Self {
        Self::new(DrawingSurface::default())
    }
}

impl ChartGeometryConfig {
    #[must_use]
    pub fn new(surface: DrawingSurface) -> Self {
        Self {
            surface,
            gridline_divisions: default_gridline_divisions(),
            show_secondary: true,
            show_area: true,
            label_format: NumberFormat::default(),
        }
    }

    #[must_use]
    pub fn with_gridline_divisions(mut self, divisions: usize) -> Self {
        self.gridline_divisions = divisions;
        self
    }

    #[must_use]
    pub fn with_secondary(mut self, show_secondary: bool) -> Self {
        self.show_secondary = show_secondary;
        self
    }

    #[must_use]
    pub fn with_area(mut self, show_area: bool) -> Self {
        self.show_area = show_area;
        self
    }

    /// Sets how gridline values are rendered as text.
    #[must_use]
    pub fn with_label_format(mut self, format: NumberFormat) -> Self {
        self.label_format = format;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.surface.validate()?;
        if self.gridline_divisions == 0 {
            return Err(ChartError::InvalidData(
                "gridline divisions must be > 0".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()
    }
}

fn default_gridline_divisions() -> usize {
    4
}

fn default_true() -> bool {
    true
}
