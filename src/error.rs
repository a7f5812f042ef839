use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    #[error("degenerate value range: max value {max_value} cannot scale a vertical axis")]
    DegenerateRange { max_value: f64 },

    #[error("invalid pie share `{label}`: {share} must be finite and >= 0")]
    InvalidShare { label: String, share: f64 },

    #[error("insufficient samples: need at least {required}, got {actual}")]
    InsufficientSamples { required: usize, actual: usize },

    #[error("sample {index} has no secondary value")]
    MissingSecondaryValue { index: usize },

    #[error("invalid drawing surface: width={width}, height={height}")]
    InvalidSurface { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
