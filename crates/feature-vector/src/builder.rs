//! Ordered Feature Vector Construction

use crate::error::ValidationError;
use crate::factor::{Factor, FACTOR_COUNT, VALUE_DEFAULT, VALUE_MAX, VALUE_MIN};
use serde::Serialize;
use std::collections::BTreeMap;

/// Ordered numeric encoding of the 20 rated factors.
///
/// Position i holds the rating for `Factor::ALL[i]`. Instances are only
/// constructible through validating constructors, so a `FeatureVector` always
/// has exactly [`FACTOR_COUNT`] in-range integral values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVector {
    values: Vec<f64>,
}

impl FeatureVector {
    /// Assemble a feature vector from a key -> rating mapping.
    ///
    /// Every factor in the catalog must be present; ratings must be whole
    /// numbers in `[VALUE_MIN, VALUE_MAX]`. Keys outside the catalog are
    /// rejected rather than ignored, since a misspelled key would otherwise
    /// silently leave a factor at whatever the caller defaulted it to.
    pub fn build(ratings: &BTreeMap<String, f64>) -> Result<Self, ValidationError> {
        for key in ratings.keys() {
            if Factor::from_key(key).is_none() {
                return Err(ValidationError::UnknownFactor(key.clone()));
            }
        }

        let mut values = Vec::with_capacity(FACTOR_COUNT);
        for factor in Factor::ALL {
            let value = *ratings
                .get(factor.key())
                .ok_or(ValidationError::MissingFactor(factor.key()))?;
            Self::check_rating(factor, value)?;
            values.push(value);
        }

        Ok(Self { values })
    }

    /// Build from an already-ordered vector of ratings.
    pub fn from_values(values: Vec<f64>) -> Result<Self, ValidationError> {
        if values.len() != FACTOR_COUNT {
            return Err(ValidationError::WrongLength {
                expected: FACTOR_COUNT,
                actual: values.len(),
            });
        }
        for (factor, &value) in Factor::ALL.iter().zip(&values) {
            Self::check_rating(*factor, value)?;
        }
        Ok(Self { values })
    }

    fn check_rating(factor: Factor, value: f64) -> Result<(), ValidationError> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(ValidationError::NotAnInteger {
                factor: factor.key(),
                value,
            });
        }
        if value < VALUE_MIN as f64 || value > VALUE_MAX as f64 {
            return Err(ValidationError::OutOfRange {
                factor: factor.key(),
                value,
                min: VALUE_MIN,
                max: VALUE_MAX,
            });
        }
        Ok(())
    }

    /// Ratings in canonical order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Rating for a single factor
    pub fn get(&self, factor: Factor) -> f64 {
        self.values[factor.position()]
    }

    /// Number of features
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the vector is empty (never true for a constructed vector)
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Default for FeatureVector {
    /// All factors at the form's default slider position
    fn default() -> Self {
        Self {
            values: vec![VALUE_DEFAULT as f64; FACTOR_COUNT],
        }
    }
}
