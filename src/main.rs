mod config;
mod error;
mod handlers;
mod llm;
mod prompts;
mod routes;
mod state;
mod templates;
mod validation;

use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("translate_form=debug,tower_http=debug")
        .init();

    // Optional file layer; defaults and environment still apply without it
    let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "translate".to_string());
    let config = Config::load(&config_path)?;

    info!(
        "Loaded configuration (file: {}, endpoint: {}, mock_mode: {})",
        config_path, config.endpoint, config.mock_mode
    );
    if config.api_key.is_none() {
        info!("MENTORPIECE_API_KEY not set in environment.");
    }

    let app_state = AppState::new(config.clone())?;
    let app = routes::build_app(app_state);

    info!("Starting server on {}:{}", config.host, config.port);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
