mod config;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use content::{ContentError, ContentSource, FileContentSource, StaticContentSource};

use crate::config::{ConfigError, ServerConfig};

/// Errors that stop the server before it starts serving.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error("{0}")]
    Leptos(String),
    #[error("server I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

fn content_source(config: &ServerConfig) -> Result<Arc<dyn ContentSource + Send + Sync>, ContentError> {
    match &config.content_path {
        Some(path) => Ok(Arc::new(FileContentSource::new(path)?)),
        None => Ok(Arc::new(StaticContentSource::new())),
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;

    let source = content_source(&config)?;
    tracing::info!(source = %source.describe(), "loading homepage content");
    let state = state::AppState::new(source)?;

    let app = routes::leptos_app(state, &config.assets_dir).map_err(StartupError::Leptos)?;
    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "storefront listening");
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    // A missing .env file is fine; real deployments set the environment.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "storefront failed to start");
        std::process::exit(1);
    }
}
