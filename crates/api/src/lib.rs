//! Stress Assessment API Server
//!
//! REST boundary between the stress evaluation form and the classification
//! core. The loaded models are shared read-only across all requests.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use feature_vector::ValidationError;
use serde::Serialize;
use std::sync::Arc;
use stress_model::{ModelError, StressClassifier};
use thiserror::Error;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod config;
mod routes;

pub use crate::config::{ModelConfig, ServiceConfig, WellnessConfig};

/// Application state shared across handlers
pub struct AppState {
    /// Loaded classification service, immutable after startup
    pub classifier: StressClassifier,
    /// Service configuration
    pub config: ServiceConfig,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create new application state
    pub fn new(classifier: StressClassifier, config: ServiceConfig) -> Self {
        Self {
            classifier,
            config,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
        }
    }
}

/// Errors surfaced to API clients
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or incomplete form input
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Internal classification failure
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// JSON error envelope
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // Validation failures are the user's to fix; report them verbatim.
            ApiError::Validation(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
            ApiError::Model(err) => {
                tracing::error!(error = %err, "classification request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal model error".to_string(),
                )
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: u64,
    pub version: String,
    pub uptime_seconds: u64,
    pub components: ComponentStatus,
}

/// Component status
#[derive(Debug, Serialize)]
pub struct ComponentStatus {
    pub model: ComponentHealth,
}

/// Individual component health
#[derive(Debug, Serialize)]
pub struct ComponentHealth {
    pub status: String,
    pub scaler_path: String,
    pub classifier_path: String,
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/assess", post(routes::assess::assess))
        .route("/api/v1/factors", get(routes::factors::get_factors))
        .route("/api/v1/wellness", get(routes::wellness::get_wellness))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp,
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        components: ComponentStatus {
            model: ComponentHealth {
                status: "loaded".to_string(),
                scaler_path: state.config.model.scaler_path.clone(),
                classifier_path: state.config.model.classifier_path.clone(),
            },
        },
    };

    Json(response)
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Run the server
pub async fn run_server(
    config: ServiceConfig,
    classifier: StressClassifier,
) -> std::io::Result<()> {
    let addr = config.listen_addr.clone();
    let state = Arc::new(AppState::new(classifier, config));
    let app = create_router(state);

    info!("starting API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use feature_vector::Factor;
    use tower::ServiceExt;

    const SCALER_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../models/scaler.json");
    const MODEL_PATH: &str =
        concat!(env!("CARGO_MANIFEST_DIR"), "/../../models/stress_model.json");

    fn test_router(config: ServiceConfig) -> Router {
        let classifier =
            StressClassifier::load(SCALER_PATH, MODEL_PATH).expect("shipped artifacts load");
        create_router(Arc::new(AppState::new(classifier, config)))
    }

    fn assess_body(value: i64) -> String {
        let factors: serde_json::Map<String, serde_json::Value> = Factor::ALL
            .iter()
            .map(|f| (f.key().to_string(), serde_json::json!(value)))
            .collect();
        serde_json::json!({ "factors": factors }).to_string()
    }

    async fn response_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_assess(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/assess")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_loaded_model() {
        let router = test_router(ServiceConfig::default());
        let response = router
            .oneshot(Request::get("/api/v1/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["components"]["model"]["status"], "loaded");
    }

    #[tokio::test]
    async fn test_assess_default_ratings() {
        let router = test_router(ServiceConfig::default());
        let response = router.oneshot(post_assess(assess_body(5))).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        let label = body["label"].as_i64().unwrap();
        assert!((0..=2).contains(&label));
        assert!(!body["tier"].as_str().unwrap().is_empty());
        assert!(!body["advisory"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_assess_max_ratings_high_tier() {
        let router = test_router(ServiceConfig::default());
        let response = router.oneshot(post_assess(assess_body(30))).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["label"], 2);
        assert_eq!(body["tier"], "High");
    }

    #[tokio::test]
    async fn test_assess_missing_factor_rejected() {
        let router = test_router(ServiceConfig::default());
        let factors: serde_json::Map<String, serde_json::Value> = Factor::ALL
            .iter()
            .skip(1)
            .map(|f| (f.key().to_string(), serde_json::json!(5)))
            .collect();
        let body = serde_json::json!({ "factors": factors }).to_string();

        let response = router.oneshot(post_assess(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = response_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("anxiety_level"));
    }

    #[tokio::test]
    async fn test_assess_out_of_range_rejected() {
        let router = test_router(ServiceConfig::default());
        let mut factors: serde_json::Map<String, serde_json::Value> = Factor::ALL
            .iter()
            .map(|f| (f.key().to_string(), serde_json::json!(5)))
            .collect();
        factors.insert("depression".to_string(), serde_json::json!(31));
        let body = serde_json::json!({ "factors": factors }).to_string();

        let response = router.oneshot(post_assess(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_factor_catalog() {
        let router = test_router(ServiceConfig::default());
        let response = router
            .oneshot(Request::get("/api/v1/factors").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["summary"]["total_factors"], 20);
        assert_eq!(body["summary"]["psychological"], 10);
        assert_eq!(body["summary"]["academic_environmental"], 10);
        assert_eq!(body["summary"]["prediction_classes"], 3);
        assert_eq!(body["factors"].as_array().unwrap().len(), 20);
        assert_eq!(body["factors"][0]["key"], "anxiety_level");
        assert_eq!(body["factors"][0]["default"], 5);
    }

    #[tokio::test]
    async fn test_wellness_falls_back_to_remote_image() {
        let mut config = ServiceConfig::default();
        config.wellness.image_path = "/nonexistent/wellness.jpg".to_string();

        let router = test_router(config);
        let response = router
            .oneshot(Request::get("/api/v1/wellness").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["tips"].as_array().unwrap().len(), 18);
        assert_eq!(body["image"]["source"], "remote");
    }

    #[tokio::test]
    async fn test_wellness_serves_local_image_when_present() {
        let mut config = ServiceConfig::default();
        // Any file known to exist works for the presence check.
        config.wellness.image_path =
            concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml").to_string();

        let router = test_router(config);
        let response = router
            .oneshot(Request::get("/api/v1/wellness").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let body = response_json(response).await;
        assert_eq!(body["image"]["source"], "local");
    }
}
