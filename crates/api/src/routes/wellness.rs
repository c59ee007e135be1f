//! Wellness Content Route

use axum::{extract::State, Json};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

use crate::AppState;

/// Wellness tips shown beside the evaluation form
const WELLNESS_TIPS: [&str; 18] = [
    "Maintain a consistent sleep schedule",
    "Practice breathing or meditation exercises",
    "Manage academic workload effectively",
    "Exercise regularly",
    "Eat a balanced and healthy diet",
    "Stay hydrated",
    "Stay socially connected with friends and family",
    "Engage in hobbies or creative activities",
    "Take breaks during study sessions",
    "Plan and prioritize tasks",
    "Speak to a counselor or mentor when needed",
    "Limit excessive screen time",
    "Spend time outdoors in nature",
    "Listen to calming music",
    "Keep a journal to track thoughts and feelings",
    "Participate in group activities or clubs",
    "Avoid procrastination and last-minute stress",
    "Practice positive self-talk and mindfulness",
];

/// Where the client should fetch the tip image from
#[derive(Debug, Serialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum ImageSource {
    Local { path: String },
    Remote { url: String },
}

/// Response for the wellness endpoint
#[derive(Debug, Serialize)]
pub struct WellnessResponse {
    pub tips: Vec<&'static str>,
    pub image: ImageSource,
}

/// Wellness tips and the tip-image location. The configured local image is
/// preferred; the remote fallback is used when it is absent on disk.
pub async fn get_wellness(State(state): State<Arc<AppState>>) -> Json<WellnessResponse> {
    let wellness = &state.config.wellness;
    let image = if Path::new(&wellness.image_path).exists() {
        ImageSource::Local {
            path: wellness.image_path.clone(),
        }
    } else {
        ImageSource::Remote {
            url: wellness.image_fallback_url.clone(),
        }
    };

    Json(WellnessResponse {
        tips: WELLNESS_TIPS.to_vec(),
        image,
    })
}
