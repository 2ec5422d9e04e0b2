//! pagesplit Server
//!
//! HTTP boundary for the page_content split custom skill: one POST route
//! taking a batch envelope and returning the extracted fields per record,
//! plus a health check.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use config::ServerConfig;
use handlers::{create_router, AppState};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `default_filter` when set. Calling this twice is a
/// no-op.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Start the HTTP server
///
/// Validates configuration, builds the router and serves until Ctrl-C.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    config.validate()?;

    info!("Starting pagesplit server");
    info!("Bind address: {}", config.bind_addr());
    info!("Skill route: POST {}", config.route_path);
    info!("Body limit: {} bytes", config.max_body_bytes);
    if let Some(max) = config.extractor.max_content_length {
        info!("page_content limit: {} chars", max);
    }

    let state = AppState::new(config.extractor.clone());
    let app = create_router(state, &config);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
