mod config;
mod error;
mod routes;
mod services;
mod state;
mod views;

use std::sync::Arc;

use crate::config::{AppConfig, CLASSIFIER_API_KEY_VAR};
use crate::services::classifier::RandomClassifier;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Missing .env is fine; the process environment still applies.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    if config.classifier_api_key_present {
        tracing::warn!(var = CLASSIFIER_API_KEY_VAR, "remote classification not enabled; key ignored");
    }

    let addr = config.bind_addr()?;
    let state = state::AppState::new(config, Arc::new(RandomClassifier));

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "decision-twin listening");
    axum::serve(listener, app).await?;
    Ok(())
}
