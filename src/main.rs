use std::time::Instant;

use folio::config::{Config, ConfigError};
use folio::data::{Catalog, CatalogError};
use folio::AppState;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Error)]
enum InitError {
    #[error("Error loading configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Error loading post catalog: {0}")]
    Catalog(#[from] CatalogError),
    #[error("Error binding tcp listener: {0}")]
    TcpBind(std::io::Error),
    #[error("Error serving server: {0}")]
    TcpServe(std::io::Error),
}

fn install_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "folio=debug,tower_http=debug,axum::rejection=trace".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<(), InitError> {
    install_tracing();
    let config = Config::load()?;

    let catalog_load_start = Instant::now();
    let catalog = Catalog::embedded()?;
    info!(
        posts = catalog.len(),
        elapsed = ?catalog_load_start.elapsed(),
        "Catalog loaded"
    );

    let app = folio::app(AppState::new(catalog, &config));

    let listener = TcpListener::bind(config.socket_addr())
        .await
        .map_err(InitError::TcpBind)?;
    info!(address = %config.socket_addr(), "Listening");
    axum::serve(listener, app)
        .await
        .map_err(InitError::TcpServe)?;

    Ok(())
}
