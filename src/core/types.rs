use ordered_float::OrderedFloat;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Logical drawing area in abstract units.
///
/// All geometry is computed in this space; the rendering layer scales it to
/// physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawingSurface {
    pub width: f64,
    pub height: f64,
}

impl DrawingSurface {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height > 0.0
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.is_valid() {
            return Err(ChartError::InvalidSurface {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

impl Default for DrawingSurface {
    fn default() -> Self {
        Self::new(600.0, 200.0)
    }
}

/// Which measurement of a sample a path is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ValueField {
    #[default]
    Primary,
    Secondary,
}

/// One observed data point of a reporting window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub label: String,
    pub value: f64,
    #[serde(default)]
    pub secondary_value: Option<f64>,
}

impl Sample {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            secondary_value: None,
        }
    }

    #[must_use]
    pub fn with_secondary(mut self, secondary_value: f64) -> Self {
        self.secondary_value = Some(secondary_value);
        self
    }

    /// Builds a sample from monetary amounts.
    pub fn from_decimal(
        label: impl Into<String>,
        value: Decimal,
        secondary_value: Option<Decimal>,
    ) -> ChartResult<Self> {
        Ok(Self {
            label: label.into(),
            value: decimal_to_f64(value, "value")?,
            secondary_value: secondary_value
                .map(|amount| decimal_to_f64(amount, "secondary value"))
                .transpose()?,
        })
    }

    #[must_use]
    pub fn field(&self, field: ValueField) -> Option<f64> {
        match field {
            ValueField::Primary => Some(self.value),
            ValueField::Secondary => self.secondary_value,
        }
    }

    fn validate(&self, index: usize) -> ChartResult<()> {
        for (name, value) in [("value", Some(self.value)), ("secondary value", self.secondary_value)]
        {
            let Some(value) = value else {
                continue;
            };
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "sample {index} `{}`: {name} must be finite and >= 0",
                    self.label
                )));
            }
        }
        Ok(())
    }
}

fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Ordered samples for one reporting window.
///
/// A series is immutable once built. Changing the reporting window means
/// building a new series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Sample>", into = "Vec<Sample>")]
pub struct Series {
    samples: Vec<Sample>,
}

impl Series {
    pub fn new(samples: Vec<Sample>) -> ChartResult<Self> {
        for (index, sample) in samples.iter().enumerate() {
            sample.validate(index)?;
        }
        Ok(Self { samples })
    }

    /// Builds a primary-only series from plain values labelled by position.
    pub fn from_values(values: &[f64]) -> ChartResult<Self> {
        Self::new(
            values
                .iter()
                .enumerate()
                .map(|(index, &value)| Sample::new((index + 1).to_string(), value))
                .collect(),
        )
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn has_secondary(&self) -> bool {
        !self.samples.is_empty() && self.samples.iter().all(|s| s.secondary_value.is_some())
    }

    /// Maximum across both value fields of every sample.
    ///
    /// Returns `0.0` for an empty series.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.samples
            .iter()
            .flat_map(|sample| std::iter::once(sample.value).chain(sample.secondary_value))
            .map(OrderedFloat)
            .max()
            .map_or(0.0, |max| max.0)
    }
}

impl TryFrom<Vec<Sample>> for Series {
    type Error = ChartError;

    fn try_from(samples: Vec<Sample>) -> ChartResult<Self> {
        Self::new(samples)
    }
}

impl From<Series> for Vec<Sample> {
    fn from(series: Series) -> Self {
        series.samples
    }
}

/// Vertex in drawing-surface coordinates (origin top-left, y down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathVertex {
    pub x: f64,
    pub y: f64,
}

impl PathVertex {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
