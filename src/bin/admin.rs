use anyhow::Result;
use clap::Parser;
use emploi_romand::admin_cli::{handle_admin_command, AdminCli};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

#[tokio::main]
async fn main() -> Result<()> {
    Registry::default()
        .with(tracing_subscriber::fmt::layer().without_time())
        .with(
            EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new("emploi_romand=INFO")),
        )
        .init();

    let cli = AdminCli::parse();
    handle_admin_command(cli).await
}
