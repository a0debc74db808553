//! Cold start: make sure the database and schema exist, then open the pool.

use bookholder_shared::DatabaseConfig;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr, Statement,
};
use sea_orm_migration::MigratorTrait;
use tracing::{debug, info};

use crate::ledger::Ledger;
use crate::migration::Migrator;

/// Creates the configured Postgres database if it is missing.
///
/// Connects to the `postgres` maintenance database to do so. A no-op when an
/// explicit URL is configured or the backend is not Postgres; SQLite creates
/// its file on connect.
///
/// # Errors
///
/// Returns an error if the maintenance database is unreachable or the
/// database cannot be created.
pub async fn ensure_database(config: &DatabaseConfig) -> Result<(), DbErr> {
    let Some(maintenance_url) = config.maintenance_url() else {
        debug!("skipping database creation");
        return Ok(());
    };

    let admin = Database::connect(&maintenance_url).await?;

    let exists = admin
        .query_one(Statement::from_sql_and_values(
            DbBackend::Postgres,
            "SELECT 1 FROM pg_database WHERE datname = $1",
            [config.name.clone().into()],
        ))
        .await?
        .is_some();

    if exists {
        debug!(database = %config.name, "database already exists");
    } else {
        info!(database = %config.name, "creating database");
        admin
            .execute_unprepared(&format!(
                "CREATE DATABASE \"{}\"",
                config.name.replace('"', "\"\"")
            ))
            .await?;
    }

    admin.close().await
}

/// Opens the application pool with the configured bounds.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect_pool(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.connection_url());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .sqlx_logging(false);

    Database::connect(options).await
}

/// Ensures the database, opens the pool, applies pending migrations and
/// returns the ledger facade.
///
/// Safe to run against an already initialized database.
///
/// # Errors
///
/// Returns an error if any step fails.
pub async fn bootstrap(config: &DatabaseConfig) -> Result<Ledger, DbErr> {
    ensure_database(config).await?;

    let db = connect_pool(config).await?;
    info!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "connected to database"
    );

    Migrator::up(&db, None).await?;
    info!("schema is up to date");

    Ok(Ledger::new(db))
}
