//! Factor Catalog Route

use axum::Json;
use feature_vector::{Factor, FactorGroup, FACTOR_COUNT, VALUE_DEFAULT, VALUE_MAX, VALUE_MIN};
use serde::Serialize;

/// Per-factor metadata for form rendering
#[derive(Debug, Serialize)]
pub struct FactorInfo {
    pub key: &'static str,
    pub name: &'static str,
    pub group: FactorGroup,
    pub min: i64,
    pub max: i64,
    pub default: i64,
}

/// Headline counts shown above the form
#[derive(Debug, Serialize)]
pub struct CatalogSummary {
    pub total_factors: usize,
    pub psychological: usize,
    pub academic_environmental: usize,
    pub prediction_classes: usize,
}

/// Response for the factor catalog endpoint
#[derive(Debug, Serialize)]
pub struct FactorCatalogResponse {
    pub summary: CatalogSummary,
    pub factors: Vec<FactorInfo>,
}

/// Factor catalog in canonical order
pub async fn get_factors() -> Json<FactorCatalogResponse> {
    let factors: Vec<FactorInfo> = Factor::ALL
        .iter()
        .map(|factor| FactorInfo {
            key: factor.key(),
            name: factor.display_name(),
            group: factor.group(),
            min: VALUE_MIN,
            max: VALUE_MAX,
            default: VALUE_DEFAULT,
        })
        .collect();

    let psychological = factors
        .iter()
        .filter(|f| f.group == FactorGroup::Psychological)
        .count();

    Json(FactorCatalogResponse {
        summary: CatalogSummary {
            total_factors: FACTOR_COUNT,
            psychological,
            academic_environmental: FACTOR_COUNT - psychological,
            prediction_classes: 3,
        },
        factors,
    })
}
