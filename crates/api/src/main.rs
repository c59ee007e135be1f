//! Stress Assessment Pipeline - Main Entry Point

use anyhow::Context;
use api::{init_logging, run_server, ServiceConfig};
use stress_model::StressClassifier;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    info!("=== Stress Assessment Pipeline v{} ===", env!("CARGO_PKG_VERSION"));

    let config = ServiceConfig::load().context("failed to load service configuration")?;

    // Model load failure is fatal: the service must not start serving
    // requests without valid artifacts.
    let classifier =
        StressClassifier::load(&config.model.scaler_path, &config.model.classifier_path)
            .context("failed to load model artifacts")?;

    run_server(config, classifier)
        .await
        .context("server terminated")?;

    Ok(())
}
