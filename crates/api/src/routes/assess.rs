//! Assessment Route

use axum::{extract::State, Json};
use feature_vector::FeatureVector;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::{ApiError, AppState};

/// Request body for an assessment
#[derive(Debug, Deserialize)]
pub struct AssessRequest {
    /// Factor key -> rating mapping, one entry per catalog factor
    pub factors: BTreeMap<String, f64>,
}

/// Response body for an assessment
#[derive(Debug, Serialize)]
pub struct AssessResponse {
    pub label: i64,
    pub tier: &'static str,
    pub advisory: &'static str,
}

/// Evaluate a submitted form: build the feature vector, classify it, and
/// return the tier with its advisory.
pub async fn assess(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AssessRequest>,
) -> Result<Json<AssessResponse>, ApiError> {
    let vector = FeatureVector::build(&request.factors)?;
    let result = state.classifier.classify(&vector)?;

    Ok(Json(AssessResponse {
        label: result.label,
        tier: result.tier.name(),
        advisory: result.advisory,
    }))
}
