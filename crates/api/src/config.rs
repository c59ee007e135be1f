//! Service Configuration

use ::config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Top-level service configuration.
///
/// Resolution order: built-in defaults, then an optional `stress-assess.toml`
/// file in the working directory, then `STRESS_ASSESS_*` environment
/// variables (nested keys use `__`, e.g. `STRESS_ASSESS_MODEL__SCALER_PATH`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Socket address the HTTP server binds
    pub listen_addr: String,
    /// Model artifact locations
    pub model: ModelConfig,
    /// Wellness sidebar content
    pub wellness: WellnessConfig,
}

/// Model artifact locations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Path to the fitted scaler artifact
    pub scaler_path: String,
    /// Path to the fitted classifier artifact
    pub classifier_path: String,
}

/// Wellness-tip image configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WellnessConfig {
    /// Local tip image, used when present on disk
    pub image_path: String,
    /// Remote image used when the local path is absent
    pub image_fallback_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            model: ModelConfig::default(),
            wellness: WellnessConfig::default(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            scaler_path: "models/scaler.json".to_string(),
            classifier_path: "models/stress_model.json".to_string(),
        }
    }
}

impl Default for WellnessConfig {
    fn default() -> Self {
        Self {
            image_path: "assets/mentalwellness.jpg".to_string(),
            image_fallback_url: "https://i.imgur.com/0Z8iF4V.png".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from defaults, file, and environment
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("stress-assess").required(false))
            .add_source(Environment::with_prefix("STRESS_ASSESS").separator("__"))
            .build()?
            .try_deserialize()
    }
}
