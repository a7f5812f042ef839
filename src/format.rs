//! Locale-aware number formatting for KPI widgets and axis labels.
//!
//! Formatting is driven by an explicit [`FormatKind`] rather than format
//! strings so every label in a dashboard goes through the same rules.

use num_format::{Locale, ToFormattedString};
use serde::{Deserialize, Serialize};

const NOT_AVAILABLE: &str = "n/a";

/// Locale controlling separators and currency placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum NumberLocale {
    #[default]
    EnUs,
    EsEs,
    DeDe,
}

impl NumberLocale {
    #[must_use]
    pub const fn decimal_separator(self) -> char {
        match self {
            Self::EnUs => '.',
            Self::EsEs | Self::DeDe => ',',
        }
    }

    /// Grouping rules used for the integer part.
    #[must_use]
    pub fn num_format_locale(self) -> &'static Locale {
        match self {
            Self::EnUs => &Locale::en,
            Self::EsEs => &Locale::es,
            Self::DeDe => &Locale::de,
        }
    }

    const fn symbol_before_amount(self) -> bool {
        matches!(self, Self::EnUs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
}

impl Currency {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
        }
    }
}

/// What a number represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FormatKind {
    Currency(Currency),
    /// The value is already a percentage (`12.5` renders as `12.5%`).
    Percentage,
    #[default]
    PlainNumber,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NumberFormat {
    pub kind: FormatKind,
    pub locale: NumberLocale,
    pub precision: u8,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::plain(0)
    }
}

impl NumberFormat {
    #[must_use]
    pub const fn currency(currency: Currency) -> Self {
        Self {
            kind: FormatKind::Currency(currency),
            locale: NumberLocale::EnUs,
            precision: 2,
        }
    }

    #[must_use]
    pub const fn percentage(precision: u8) -> Self {
        Self {
            kind: FormatKind::Percentage,
            locale: NumberLocale::EnUs,
            precision,
        }
    }

    #[must_use]
    pub const fn plain(precision: u8) -> Self {
        Self {
            kind: FormatKind::PlainNumber,
            locale: NumberLocale::EnUs,
            precision,
        }
    }

    #[must_use]
    pub const fn with_locale(mut self, locale: NumberLocale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub const fn with_precision(mut self, precision: u8) -> Self {
        self.precision = precision;
        self
    }
}

/// Formats `value` according to `format`.
///
/// Non-finite values render as `n/a`.
#[must_use]
pub fn format_value(value: f64, format: NumberFormat) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_owned();
    }

    let (negative, digits) = grouped_digits(value, usize::from(format.precision), format.locale);
    let sign = if negative { "-" } else { "" };
    match format.kind {
        FormatKind::PlainNumber => format!("{sign}{digits}"),
        FormatKind::Percentage => match format.locale {
            NumberLocale::EnUs => format!("{sign}{digits}%"),
            NumberLocale::EsEs | NumberLocale::DeDe => format!("{sign}{digits}\u{a0}%"),
        },
        FormatKind::Currency(currency) => {
            if format.locale.symbol_before_amount() {
                format!("{sign}{}{digits}", currency.symbol())
            } else {
                format!("{sign}{digits}\u{a0}{}", currency.symbol())
            }
        }
    }
}

/// Short axis label such as `1.2K`, `3.4M` or `5B`.
#[must_use]
pub fn format_compact(value: f64, locale: NumberLocale) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_owned();
    }

    let magnitude = value.abs();
    let (scaled, suffix) = if magnitude >= 1_000_000_000.0 {
        (value / 1_000_000_000.0, "B")
    } else if magnitude >= 1_000_000.0 {
        (value / 1_000_000.0, "M")
    } else if magnitude >= 1_000.0 {
        (value / 1_000.0, "K")
    } else {
        (value, "")
    };

    let text = format!("{scaled:.1}");
    let text = text.strip_suffix(".0").unwrap_or(&text);
    let text = if text == "-0" { "0" } else { text };
    let text = text.replace('.', &locale.decimal_separator().to_string());
    format!("{text}{suffix}")
}

fn grouped_digits(value: f64, precision: usize, locale: NumberLocale) -> (bool, String) {
    let text = format!("{:.precision$}", value.abs());
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    // Magnitudes past u128 are printed ungrouped.
    let mut grouped = integer.parse::<u128>().map_or_else(
        |_| integer.to_owned(),
        |digits| digits.to_formatted_string(locale.num_format_locale()),
    );
    if let Some(fraction) = fraction {
        grouped.push(locale.decimal_separator());
        grouped.push_str(fraction);
    }

    // Values that round to zero never carry a sign.
    let negative = value < 0.0 && text.chars().any(|c| c.is_ascii_digit() && c != '0');
    (negative, grouped)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

impl TrendDirection {
    #[must_use]
    pub const fn arrow(self) -> char {
        match self {
            Self::Up => '▲',
            Self::Down => '▼',
            Self::Flat => '▬',
        }
    }
}

/// Period-over-period movement of a KPI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub direction: TrendDirection,
    /// Relative change in percent; `None` when the previous value is 0.
    pub change_percent: Option<f64>,
}

impl Trend {
    #[must_use]
    pub fn between(previous: f64, current: f64) -> Self {
        let direction = if current > previous {
            TrendDirection::Up
        } else if current < previous {
            TrendDirection::Down
        } else {
            TrendDirection::Flat
        };

        let change_percent = (previous != 0.0 && previous.is_finite() && current.is_finite())
            .then(|| (current - previous) / previous.abs() * 100.0);

        Self {
            direction,
            change_percent,
        }
    }

    /// Arrow followed by the absolute percent change, e.g. `▲ 12.5%`.
    #[must_use]
    pub fn label(self, locale: NumberLocale) -> String {
        let arrow = self.direction.arrow();
        match self.change_percent {
            Some(change) => {
                let format = NumberFormat::percentage(1).with_locale(locale);
                format!("{arrow} {}", format_value(change.abs(), format))
            }
            None => arrow.to_string(),
        }
    }
}
