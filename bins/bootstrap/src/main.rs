//! Bookholder bootstrap
//!
//! Creates the database when missing and brings the schema up to date.

use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use bookholder_db::bootstrap;
use bookholder_shared::{AppConfig, LogConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    init_tracing(&config.log);

    info!(
        host = %config.database.host,
        database = %config.database.name,
        "bootstrapping ledger"
    );
    let ledger = bootstrap(&config.database).await?;

    let accounts = ledger.accounts().list().await?;
    info!(accounts = accounts.len(), "ledger ready");

    ledger.connection().clone().close().await?;
    Ok(())
}

fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(log.json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!log.json).then(tracing_subscriber::fmt::layer))
        .init();
}
