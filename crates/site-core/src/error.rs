use thiserror::Error;

/// Rejected overlay configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),
    #[error("scale factor {0} must be finite and non-negative")]
    InvalidScale(f64),
    #[error("attribute `{name}` is not a number: {value:?}")]
    NotANumber { name: &'static str, value: String },
}
