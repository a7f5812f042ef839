//! Data sources feeding series into the geometry engine.
//!
//! Sources are injected so tests can supply fixed series and demos can use
//! seeded mock data; nothing in the engine reads a clock or a global RNG.

use chrono::{Days, Months, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Sample, Series};
use crate::error::{ChartError, ChartResult};

/// Time-range selector of a dashboard chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ReportingWindow {
    Last7Days,
    #[default]
    Last30Days,
    Last90Days,
    Last12Months,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cadence {
    Daily,
    Weekly,
    Monthly,
}

impl ReportingWindow {
    pub const ALL: [Self; 4] = [
        Self::Last7Days,
        Self::Last30Days,
        Self::Last90Days,
        Self::Last12Months,
    ];

    #[must_use]
    pub const fn sample_count(self) -> usize {
        match self {
            Self::Last7Days => 7,
            Self::Last30Days => 30,
            Self::Last90Days => 13,
            Self::Last12Months => 12,
        }
    }

    const fn cadence(self) -> Cadence {
        match self {
            Self::Last7Days | Self::Last30Days => Cadence::Daily,
            Self::Last90Days => Cadence::Weekly,
            Self::Last12Months => Cadence::Monthly,
        }
    }

    /// Sample labels, oldest first, with the last label on `anchor`.
    pub fn labels(self, anchor: NaiveDate) -> ChartResult<Vec<String>> {
        let count = self.sample_count();
        (0..count)
            .map(|position| -> ChartResult<String> {
                let steps_back = (count - 1 - position) as u32;
                let date = match self.cadence() {
                    Cadence::Daily => anchor.checked_sub_days(Days::new(u64::from(steps_back))),
                    Cadence::Weekly => {
                        anchor.checked_sub_days(Days::new(u64::from(steps_back) * 7))
                    }
                    Cadence::Monthly => anchor.checked_sub_months(Months::new(steps_back)),
                }
                .ok_or_else(|| {
                    ChartError::InvalidData(format!("{self:?} reaches before the calendar start"))
                })?;

                let pattern = match self.cadence() {
                    Cadence::Daily | Cadence::Weekly => "%b %d",
                    Cadence::Monthly => "%b %Y",
                };
                Ok(date.format(pattern).to_string())
            })
            .collect()
    }

    fn seed_salt(self) -> u64 {
        match self {
            Self::Last7Days => 0x07,
            Self::Last30Days => 0x1e,
            Self::Last90Days => 0x5a,
            Self::Last12Months => 0x0c_0000,
        }
    }
}

/// Supplies the series shown for a reporting window.
pub trait SeriesSource {
    fn series(&self, window: ReportingWindow) -> ChartResult<Series>;
}

impl<F> SeriesSource for F
where
    F: Fn(ReportingWindow) -> ChartResult<Series>,
{
    fn series(&self, window: ReportingWindow) -> ChartResult<Series> {
        self(window)
    }
}

/// Returns the same series for every window.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedSeriesSource {
    series: Series,
}

impl FixedSeriesSource {
    #[must_use]
    pub fn new(series: Series) -> Self {
        Self { series }
    }
}

impl SeriesSource for FixedSeriesSource {
    fn series(&self, _window: ReportingWindow) -> ChartResult<Series> {
        Ok(self.series.clone())
    }
}

/// Deterministic mock data: a bounded random walk with an optional
/// previous-period comparison value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeededSeriesSource {
    pub seed: u64,
    pub anchor: NaiveDate,
    pub base_value: f64,
    /// Maximum relative step between consecutive samples.
    pub volatility: f64,
    pub with_secondary: bool,
}

impl SeededSeriesSource {
    #[must_use]
    pub fn new(seed: u64, anchor: NaiveDate) -> Self {
        Self {
            seed,
            anchor,
            base_value: 1_000.0,
            volatility: 0.15,
            with_secondary: true,
        }
    }

    #[must_use]
    pub fn with_base_value(mut self, base_value: f64) -> Self {
        self.base_value = base_value;
        self
    }

    #[must_use]
    pub fn with_volatility(mut self, volatility: f64) -> Self {
        self.volatility = volatility;
        self
    }

    #[must_use]
    pub fn with_secondary(mut self, with_secondary: bool) -> Self {
        self.with_secondary = with_secondary;
        self
    }

    fn validate(self) -> ChartResult<Self> {
        if !self.base_value.is_finite() || self.base_value < 0.0 {
            return Err(ChartError::InvalidData(
                "mock base value must be finite and >= 0".to_owned(),
            ));
        }
        if !self.volatility.is_finite() || !(0.0..1.0).contains(&self.volatility) {
            return Err(ChartError::InvalidData(
                "mock volatility must be finite and in [0, 1)".to_owned(),
            ));
        }
        Ok(self)
    }
}

impl SeriesSource for SeededSeriesSource {
    fn series(&self, window: ReportingWindow) -> ChartResult<Series> {
        let source = self.validate()?;
        let labels = window.labels(source.anchor)?;
        let mut rng = StdRng::seed_from_u64(source.seed ^ window.seed_salt());

        let mut level = source.base_value;
        let mut samples = Vec::with_capacity(labels.len());
        for label in labels {
            if source.volatility > 0.0 {
                level *= 1.0 + rng.gen_range(-source.volatility..=source.volatility);
            }
            let mut sample = Sample::new(label, round_cents(level.max(0.0)));
            if source.with_secondary {
                let comparison = level * rng.gen_range(0.8..=1.1);
                sample = sample.with_secondary(round_cents(comparison.max(0.0)));
            }
            samples.push(sample);
        }

        debug!(
            ?window,
            seed = source.seed,
            samples = samples.len(),
            "generated mock series"
        );
        Series::new(samples)
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
