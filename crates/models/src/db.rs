use std::time::Duration;

use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

/// Open a pool from config and, when `auto_migrate` is set, bring the schema up to date.
///
/// In-memory SQLite lives only as long as its connection, so it is pinned to a
/// single pooled connection.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    let (max, min) = if cfg.is_in_memory() { (1, 1) } else { (cfg.max_connections, cfg.min_connections) };
    opts.max_connections(max)
        .min_connections(min)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    // recycling the only in-memory connection would drop the database
    if !cfg.is_in_memory() {
        opts.idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs));
    } else {
        let year = Duration::from_secs(60 * 60 * 24 * 365);
        opts.idle_timeout(year).max_lifetime(year);
    }

    let db = Database::connect(opts).await?;
    if cfg.auto_migrate {
        migration::Migrator::up(&db, None).await?;
        info!(backend = ?db.get_database_backend(), "schema migrated");
    }
    Ok(db)
}

/// Fresh, migrated in-memory database. Each call is isolated from the others.
pub async fn connect_in_memory() -> anyhow::Result<DatabaseConnection> {
    connect_with_config(&DatabaseConfig::in_memory()).await
}
