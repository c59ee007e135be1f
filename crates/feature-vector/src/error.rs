//! Validation Error Types

use thiserror::Error;

/// Errors during input validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required factor was not supplied
    #[error("missing required factor: {0}")]
    MissingFactor(&'static str),

    /// A key that is not part of the factor catalog was supplied
    #[error("unknown factor: {0}")]
    UnknownFactor(String),

    /// Rating out of the allowed range
    #[error("{factor} rating {value} is out of range [{min}, {max}]")]
    OutOfRange {
        factor: &'static str,
        value: f64,
        min: i64,
        max: i64,
    },

    /// Rating is not a whole number
    #[error("{factor} rating {value} is not an integer")]
    NotAnInteger { factor: &'static str, value: f64 },

    /// Vector has the wrong number of features
    #[error("feature vector has {actual} values, expected {expected}")]
    WrongLength { expected: usize, actual: usize },
}
