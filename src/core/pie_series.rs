use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::PathVertex;
use crate::error::{ChartError, ChartResult};

const FULL_CIRCLE_DEGREES: f64 = 360.0;
const SHARE_SUM_TOLERANCE: f64 = 1e-6;

/// Palette slot assigned to a slice; the rendering layer resolves it to a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorToken {
    Primary,
    Success,
    Warning,
    Danger,
    Info,
    Neutral,
}

impl ColorToken {
    pub const PALETTE: [Self; 6] = [
        Self::Primary,
        Self::Success,
        Self::Warning,
        Self::Danger,
        Self::Info,
        Self::Neutral,
    ];

    /// Token for the slice at `index`, cycling through the palette.
    #[must_use]
    pub fn for_index(index: usize) -> Self {
        Self::PALETTE[index % Self::PALETTE.len()]
    }
}

/// One category of a pie chart with its percent share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieShare {
    pub label: String,
    pub percent: f64,
}

impl PieShare {
    #[must_use]
    pub fn new(label: impl Into<String>, percent: f64) -> Self {
        Self {
            label: label.into(),
            percent,
        }
    }
}

/// Angular segment of a pie chart, angles in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub start_angle: f64,
    pub sweep_angle: f64,
    pub color: ColorToken,
}

impl PieSlice {
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep_angle
    }
}

/// Lays shares end-to-end around the circle in input order.
///
/// Shares are taken as percentages and are not renormalized: input that does
/// not sum to 100 yields a pie that under- or over-fills the circle.
pub fn build_pie_slices(shares: &[PieShare]) -> ChartResult<Vec<PieSlice>> {
    let mut slices = Vec::with_capacity(shares.len());
    let mut start_angle = 0.0;
    let mut total = 0.0;

    for (index, share) in shares.iter().enumerate() {
        if !share.percent.is_finite() || share.percent < 0.0 {
            return Err(ChartError::InvalidShare {
                label: share.label.clone(),
                share: share.percent,
            });
        }

        let sweep_angle = share.percent * FULL_CIRCLE_DEGREES / 100.0;
        slices.push(PieSlice {
            label: share.label.clone(),
            start_angle,
            sweep_angle,
            color: ColorToken::for_index(index),
        });
        start_angle += sweep_angle;
        total += share.percent;
    }

    if !shares.is_empty() && (total - 100.0).abs() > SHARE_SUM_TOLERANCE {
        warn!(total, "pie shares do not sum to 100; slices are not renormalized");
    }
    debug!(slices = slices.len(), "built pie slices");

    Ok(slices)
}

/// Endpoints of a slice's outer arc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliceArc {
    pub center: PathVertex,
    pub radius: f64,
    pub start: PathVertex,
    pub end: PathVertex,
    /// Set when the sweep exceeds a half circle.
    pub large_arc: bool,
}

/// Resolves the outer arc of a slice around `center`.
///
/// Angles run clockwise from 12 o'clock in a y-down coordinate system.
pub fn slice_arc(slice: &PieSlice, center: PathVertex, radius: f64) -> ChartResult<SliceArc> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(ChartError::InvalidData(
            "pie radius must be finite and > 0".to_owned(),
        ));
    }
    if !center.x.is_finite() || !center.y.is_finite() {
        return Err(ChartError::InvalidData(
            "pie center must be finite".to_owned(),
        ));
    }

    Ok(SliceArc {
        center,
        radius,
        start: point_on_circle(center, radius, slice.start_angle),
        end: point_on_circle(center, radius, slice.end_angle()),
        large_arc: slice.sweep_angle > FULL_CIRCLE_DEGREES / 2.0,
    })
}

fn point_on_circle(center: PathVertex, radius: f64, degrees: f64) -> PathVertex {
    let radians = degrees.to_radians();
    PathVertex::new(
        center.x + radius * radians.sin(),
        center.y - radius * radians.cos(),
    )
}

/// Percent shares aggregated from raw category amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareBreakdown {
    totals: IndexMap<String, f64>,
}

impl ShareBreakdown {
    /// Sums amounts per label, keeping the order in which labels first appear.
    pub fn from_amounts<I, L>(amounts: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = (L, f64)>,
        L: Into<String>,
    {
        let mut totals: IndexMap<String, f64> = IndexMap::new();
        for (label, amount) in amounts {
            let label = label.into();
            if !amount.is_finite() || amount < 0.0 {
                return Err(ChartError::InvalidShare {
                    label,
                    share: amount,
                });
            }
            *totals.entry(label).or_insert(0.0) += amount;
        }
        Ok(Self { totals })
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.totals.values().sum()
    }

    /// Converts category totals into percent shares.
    pub fn shares(&self) -> ChartResult<Vec<PieShare>> {
        let total = self.total();
        if total <= 0.0 {
            return Err(ChartError::DegenerateRange { max_value: total });
        }
        Ok(self
            .totals
            .iter()
            .map(|(label, amount)| PieShare::new(label.clone(), amount / total * 100.0))
            .collect())
    }
}
