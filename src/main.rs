use anyhow::Result;
use emploi_romand::{start_web_server, ConfigManager};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

#[tokio::main]
async fn main() -> Result<()> {
    Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or(EnvFilter::new("emploi_romand=INFO,rocket::server=OFF")),
        )
        .init();

    let config = ConfigManager::load()?;
    config.ensure_directories().await?;

    tracing::info!("Starting Emploi Romand API server");
    tracing::info!(
        "Environment: {}",
        std::env::var("ENVIRONMENT").unwrap_or_else(|_| "local".to_string())
    );
    tracing::info!(
        "Database: {}",
        config.environment.database_path.display()
    );

    start_web_server(config).await
}
