//! Fitted Multi-Class Classifier Artifact

use crate::scaler::verify_feature_names;
use crate::ModelError;
use feature_vector::FACTOR_COUNT;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Class labels the shipped model was trained on
const EXPECTED_CLASSES: [i64; 3] = [0, 1, 2];

/// Linear multi-class classifier fitted on normalized feature vectors.
///
/// Holds one coefficient row and intercept per class; prediction is the
/// argmax of the per-class linear scores. The softmax itself is monotone, so
/// it is not applied for a plain class decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoftmaxClassifier {
    feature_names: Vec<String>,
    classes: Vec<i64>,
    coefficients: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
}

impl SoftmaxClassifier {
    /// Load and verify a classifier artifact from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let path_str = path.as_ref().display().to_string();
        let bytes = std::fs::read(&path).map_err(|source| ModelError::Io {
            path: path_str.clone(),
            source,
        })?;
        let classifier = Self::from_slice(&bytes, &path_str)?;
        info!(path = %path_str, classes = classifier.classes.len(), "loaded classifier artifact");
        Ok(classifier)
    }

    /// Parse and verify a classifier artifact from raw bytes
    pub fn from_slice(bytes: &[u8], origin: &str) -> Result<Self, ModelError> {
        let classifier: Self =
            serde_json::from_slice(bytes).map_err(|source| ModelError::Parse {
                path: origin.to_string(),
                source,
            })?;
        classifier.verify_schema()?;
        Ok(classifier)
    }

    fn verify_schema(&self) -> Result<(), ModelError> {
        verify_feature_names("classifier", &self.feature_names)?;

        if self.classes != EXPECTED_CLASSES {
            return Err(ModelError::SchemaMismatch(format!(
                "classifier classes are {:?}, expected {:?}",
                self.classes, EXPECTED_CLASSES
            )));
        }
        if self.coefficients.len() != self.classes.len() {
            return Err(ModelError::SchemaMismatch(format!(
                "classifier has {} coefficient rows for {} classes",
                self.coefficients.len(),
                self.classes.len()
            )));
        }
        if self.intercepts.len() != self.classes.len() {
            return Err(ModelError::SchemaMismatch(format!(
                "classifier has {} intercepts for {} classes",
                self.intercepts.len(),
                self.classes.len()
            )));
        }
        for (c, row) in self.coefficients.iter().enumerate() {
            if row.len() != FACTOR_COUNT {
                return Err(ModelError::SchemaMismatch(format!(
                    "coefficient row {c} has {} entries, expected {}",
                    row.len(),
                    FACTOR_COUNT
                )));
            }
            if row.iter().any(|w| !w.is_finite()) {
                return Err(ModelError::SchemaMismatch(format!(
                    "coefficient row {c} contains a non-finite value"
                )));
            }
        }
        if self.intercepts.iter().any(|b| !b.is_finite()) {
            return Err(ModelError::SchemaMismatch(
                "classifier intercepts contain a non-finite value".to_string(),
            ));
        }
        Ok(())
    }

    /// Predict the class label for a normalized feature vector
    pub fn predict(&self, normalized: &[f64]) -> Result<i64, ModelError> {
        if normalized.len() != FACTOR_COUNT {
            return Err(ModelError::BadInput {
                expected: FACTOR_COUNT,
                actual: normalized.len(),
            });
        }

        let mut best = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (i, (row, intercept)) in self.coefficients.iter().zip(&self.intercepts).enumerate() {
            let score: f64 = row
                .iter()
                .zip(normalized)
                .map(|(w, z)| w * z)
                .sum::<f64>()
                + intercept;
            if score > best_score {
                best = i;
                best_score = score;
            }
        }

        Ok(self.classes[best])
    }

    /// Class labels in artifact order
    pub fn classes(&self) -> &[i64] {
        &self.classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feature_vector::Factor;
    use serde_json::json;

    fn catalog_names() -> Vec<String> {
        Factor::ALL.iter().map(|f| f.key().to_string()).collect()
    }

    fn artifact(classes: Vec<i64>, coefficients: Vec<Vec<f64>>, intercepts: Vec<f64>) -> Vec<u8> {
        serde_json::to_vec(&json!({
            "feature_names": catalog_names(),
            "classes": classes,
            "coefficients": coefficients,
            "intercepts": intercepts,
        }))
        .unwrap()
    }

    fn simple_classifier() -> SoftmaxClassifier {
        // Class score depends only on feature 0: negative weight for class 0,
        // neutral for 1, positive for 2.
        let mut row0 = vec![0.0; 20];
        row0[0] = -1.0;
        let row1 = vec![0.0; 20];
        let mut row2 = vec![0.0; 20];
        row2[0] = 1.0;
        let bytes = artifact(vec![0, 1, 2], vec![row0, row1, row2], vec![0.0, 0.5, 0.0]);
        SoftmaxClassifier::from_slice(&bytes, "inline").unwrap()
    }

    #[test]
    fn test_predict_argmax() {
        let classifier = simple_classifier();

        let mut z = vec![0.0; 20];
        z[0] = -2.0;
        assert_eq!(classifier.predict(&z).unwrap(), 0);

        z[0] = 0.1;
        assert_eq!(classifier.predict(&z).unwrap(), 1);

        z[0] = 2.0;
        assert_eq!(classifier.predict(&z).unwrap(), 2);
    }

    #[test]
    fn test_predict_rejects_wrong_length() {
        let classifier = simple_classifier();
        let err = classifier.predict(&[0.0; 21]).unwrap_err();
        assert!(matches!(err, ModelError::BadInput { expected: 20, actual: 21 }));
    }

    #[test]
    fn test_unexpected_classes_rejected() {
        let rows = vec![vec![0.0; 20]; 3];
        let bytes = artifact(vec![0, 1, 3], rows, vec![0.0; 3]);
        let err = SoftmaxClassifier::from_slice(&bytes, "inline").unwrap_err();
        assert!(matches!(err, ModelError::SchemaMismatch(_)));
    }

    #[test]
    fn test_row_dimension_mismatch_rejected() {
        let rows = vec![vec![0.0; 20], vec![0.0; 19], vec![0.0; 20]];
        let bytes = artifact(vec![0, 1, 2], rows, vec![0.0; 3]);
        let err = SoftmaxClassifier::from_slice(&bytes, "inline").unwrap_err();
        assert!(matches!(err, ModelError::SchemaMismatch(_)));
    }

    #[test]
    fn test_intercept_count_mismatch_rejected() {
        let rows = vec![vec![0.0; 20]; 3];
        let bytes = artifact(vec![0, 1, 2], rows, vec![0.0; 2]);
        let err = SoftmaxClassifier::from_slice(&bytes, "inline").unwrap_err();
        assert!(matches!(err, ModelError::SchemaMismatch(_)));
    }
}
