//! Stress Classification Service
//!
//! Wraps the pre-fitted feature scaler and multi-class classifier artifacts
//! behind a single classify operation. Artifacts are loaded once, verified
//! against the factor catalog, and shared read-only for the process lifetime.

mod classifier;
mod scaler;
mod service;
mod tier;

pub use classifier::SoftmaxClassifier;
pub use scaler::StandardScaler;
pub use service::StressClassifier;
pub use tier::{PredictionResult, Tier};

use thiserror::Error;

/// Errors from artifact loading and classification
#[derive(Debug, Error)]
pub enum ModelError {
    /// Artifact file could not be read
    #[error("failed to read model artifact {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Artifact file is not valid JSON for the expected shape
    #[error("failed to parse model artifact {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Artifact contents disagree with the factor catalog or with themselves
    #[error("model artifact schema mismatch: {0}")]
    SchemaMismatch(String),

    /// Input vector has the wrong number of features
    #[error("input vector has {actual} features, expected {expected}")]
    BadInput { expected: usize, actual: usize },

    /// Classifier produced a label with no tier mapping
    #[error("classifier returned unexpected label {0}")]
    UnexpectedLabel(i64),
}
