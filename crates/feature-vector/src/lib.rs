//! Feature Vector Assembly
//!
//! Provides the assessment factor catalog and ordered feature vector
//! construction with input validation.

mod builder;
mod error;
mod factor;

pub use builder::FeatureVector;
pub use error::ValidationError;
pub use factor::{
    Factor, FactorGroup, FACTOR_COUNT, VALUE_DEFAULT, VALUE_MAX, VALUE_MIN,
};
