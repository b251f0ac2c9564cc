mod config;
mod routes;
mod state;

use client::state::catalog::{CatalogError, Catalogs};
use client::state::dashboard::DashboardConfig;
use leptos::prelude::get_configuration;

use crate::config::{ConfigError, ServerConfig};

/// Startup failures. Any of these stops the process before it listens.
#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenv {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    if let Err(e) = run().await {
        tracing::error!(error = %e, "fusion-diagnostics failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;

    // Duplicate keys in the catalogs are a startup error, not a render error.
    let catalogs = Catalogs::seed()?;
    tracing::info!(checks = catalogs.checks.len(), guides = catalogs.guides.len(), "catalogs loaded");

    let state = state::AppState::new(DashboardConfig { catalogs, utc_offset: config.utc_offset });

    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let mut leptos_options = conf.leptos_options;
    leptos_options.site_addr = config.site_addr();
    let app = routes::app(state, leptos_options);

    let listener = tokio::net::TcpListener::bind(config.site_addr()).await?;
    tracing::info!(addr = %config.site_addr(), utc_offset = %config.utc_offset, "fusion-diagnostics listening");
    axum::serve(listener, app).await?;
    Ok(())
}
