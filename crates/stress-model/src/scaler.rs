//! Fitted Feature Scaler Artifact

use crate::ModelError;
use feature_vector::{Factor, FACTOR_COUNT};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Standardizing transform fitted on the training data.
///
/// Maps a raw rating vector to `(x[i] - mean[i]) / scale[i]` per feature.
/// The artifact records the feature names it was fitted against; loading
/// fails unless they match the factor catalog order exactly, since a
/// reordered artifact would silently corrupt every prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    feature_names: Vec<String>,
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    /// Load and verify a scaler artifact from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let path_str = path.as_ref().display().to_string();
        let bytes = std::fs::read(&path).map_err(|source| ModelError::Io {
            path: path_str.clone(),
            source,
        })?;
        let scaler = Self::from_slice(&bytes, &path_str)?;
        info!(path = %path_str, "loaded scaler artifact");
        Ok(scaler)
    }

    /// Parse and verify a scaler artifact from raw bytes
    pub fn from_slice(bytes: &[u8], origin: &str) -> Result<Self, ModelError> {
        let scaler: Self = serde_json::from_slice(bytes).map_err(|source| ModelError::Parse {
            path: origin.to_string(),
            source,
        })?;
        scaler.verify_schema()?;
        Ok(scaler)
    }

    fn verify_schema(&self) -> Result<(), ModelError> {
        verify_feature_names("scaler", &self.feature_names)?;

        if self.mean.len() != FACTOR_COUNT {
            return Err(ModelError::SchemaMismatch(format!(
                "scaler has {} means, expected {}",
                self.mean.len(),
                FACTOR_COUNT
            )));
        }
        if self.scale.len() != FACTOR_COUNT {
            return Err(ModelError::SchemaMismatch(format!(
                "scaler has {} scales, expected {}",
                self.scale.len(),
                FACTOR_COUNT
            )));
        }
        for (i, &m) in self.mean.iter().enumerate() {
            if !m.is_finite() {
                return Err(ModelError::SchemaMismatch(format!(
                    "scaler mean[{i}] is not finite"
                )));
            }
        }
        for (i, &s) in self.scale.iter().enumerate() {
            if !s.is_finite() || s == 0.0 {
                return Err(ModelError::SchemaMismatch(format!(
                    "scaler scale[{i}] must be finite and non-zero"
                )));
            }
        }
        Ok(())
    }

    /// Apply the fitted transform, producing a normalized vector of the
    /// same length
    pub fn transform(&self, values: &[f64]) -> Result<Vec<f64>, ModelError> {
        if values.len() != FACTOR_COUNT {
            return Err(ModelError::BadInput {
                expected: FACTOR_COUNT,
                actual: values.len(),
            });
        }
        Ok(values
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(&x, (&m, &s))| (x - m) / s)
            .collect())
    }

    /// Number of features the scaler was fitted on
    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }
}

/// Check an artifact's recorded feature names against the factor catalog
pub(crate) fn verify_feature_names(
    artifact: &str,
    names: &[String],
) -> Result<(), ModelError> {
    if names.len() != FACTOR_COUNT {
        return Err(ModelError::SchemaMismatch(format!(
            "{artifact} lists {} features, expected {}",
            names.len(),
            FACTOR_COUNT
        )));
    }
    for (i, (name, factor)) in names.iter().zip(Factor::ALL).enumerate() {
        if name != factor.key() {
            return Err(ModelError::SchemaMismatch(format!(
                "{artifact} feature {i} is '{name}', expected '{}'",
                factor.key()
            )));
        }
    }
    Ok(())
}
