//! Hullcheck Server
//!
//! HTTP front end for the extraction-then-validation pipeline.
//! Wires the Groq-backed extractor and the rule validator together and
//! exposes them over axum.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod handlers;
pub mod pipeline;

use config::ServerConfig;
use handlers::{create_router, AppState};
use hullcheck_extractor::Extractor;
use hullcheck_gatekeeper::DocumentValidator;
use hullcheck_llm::{GroqProvider, LlmError};
use pipeline::ValidationPipeline;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

pub use cli::{Cli, Command};

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The completion client could not be constructed
    #[error("LLM client error: {0}")]
    Llm(#[from] LlmError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Build the pipeline described by `config`
///
/// Fails before any request is sent if the API key is unusable. A missing or
/// malformed vessels file is not an error; the validator starts with an empty
/// list.
pub fn build_pipeline(config: &ServerConfig) -> Result<ValidationPipeline, ServerError> {
    let provider = GroqProvider::new(
        config.groq_api_key.clone(),
        config.llm_endpoint.clone(),
        config.llm_timeout(),
    )?;
    let extractor = Extractor::new(provider, config.extractor_config());
    let validator = DocumentValidator::from_file(&config.valid_vessels_file);

    Ok(ValidationPipeline::new(Arc::new(extractor), Arc::new(validator)))
}

/// Start the HTTP server
///
/// Builds the pipeline, binds the configured address and serves until
/// Ctrl+C or SIGTERM.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    info!("Starting {} v{}", config.app_name, config.app_version);
    info!("AI model: {}", config.ai_model);

    let pipeline = build_pipeline(&config)?;
    info!(
        "Approved vessels loaded: {}",
        pipeline.validator().vessels().len()
    );

    let state = AppState {
        pipeline: Arc::new(pipeline),
        app_name: config.app_name.clone(),
        app_version: config.app_version.clone(),
    };

    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received terminate signal, shutting down"),
    }
}
