//! Classification Service Implementation

use crate::classifier::SoftmaxClassifier;
use crate::scaler::StandardScaler;
use crate::tier::{PredictionResult, Tier};
use crate::ModelError;
use feature_vector::FeatureVector;
use std::path::Path;
use tracing::{debug, error, info};

/// Pre-fitted scaler and classifier behind one classify operation.
///
/// A constructed `StressClassifier` always holds verified artifacts, so
/// "model not loaded" is unrepresentable past startup. Both artifacts are
/// immutable after load; the service is safe to share across concurrent
/// requests without locking.
pub struct StressClassifier {
    scaler: StandardScaler,
    classifier: SoftmaxClassifier,
}

impl StressClassifier {
    /// Load both artifacts and verify them against the factor catalog.
    ///
    /// Any failure here is fatal to startup: the service must not serve
    /// requests without valid models.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(
        scaler_path: P,
        classifier_path: Q,
    ) -> Result<Self, ModelError> {
        let scaler = StandardScaler::load(scaler_path)?;
        let classifier = SoftmaxClassifier::load(classifier_path)?;
        info!("stress classifier ready");
        Ok(Self { scaler, classifier })
    }

    /// Assemble a service from already-verified artifacts
    pub fn new(scaler: StandardScaler, classifier: SoftmaxClassifier) -> Self {
        Self { scaler, classifier }
    }

    /// Classify a feature vector into a stress tier.
    ///
    /// Scales the raw vector, asks the classifier for a label, and maps the
    /// label through the tier table. A label outside the table is surfaced as
    /// [`ModelError::UnexpectedLabel`] rather than guessed at.
    pub fn classify(&self, vector: &FeatureVector) -> Result<PredictionResult, ModelError> {
        let normalized = self.scaler.transform(vector.values())?;
        let label = self.classifier.predict(&normalized)?;

        let tier = Tier::from_label(label).ok_or_else(|| {
            error!(label, "classifier returned a label outside the tier table");
            ModelError::UnexpectedLabel(label)
        })?;

        debug!(label, tier = tier.name(), "classified assessment");
        Ok(PredictionResult::new(label, tier))
    }
}
