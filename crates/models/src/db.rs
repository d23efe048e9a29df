use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

/// Build pool options from config. In-memory SQLite is pinned to a single
/// connection, since every new connection would open an empty database.
pub fn connect_options(cfg: &DatabaseConfig) -> ConnectOptions {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .sqlx_logging(cfg.sqlx_logging);
    if is_sqlite_memory(&cfg.url) {
        opt.max_connections(1).min_connections(1);
    }
    opt
}

pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(connect_options(cfg)).await?;
    info!(max_connections = cfg.max_connections, "database connected");
    Ok(db)
}

fn is_sqlite_memory(url: &str) -> bool {
    url.starts_with("sqlite:") && url.contains(":memory:")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_memory_is_pinned_to_one_connection() {
        let cfg = DatabaseConfig { url: "sqlite::memory:".into(), max_connections: 10, ..Default::default() };
        let opt = connect_options(&cfg);
        assert_eq!(opt.get_max_connections(), Some(1));
        assert_eq!(opt.get_min_connections(), Some(1));
    }

    #[test]
    fn postgres_keeps_configured_pool() {
        let cfg = DatabaseConfig { url: "postgres://localhost/db".into(), max_connections: 12, ..Default::default() };
        let opt = connect_options(&cfg);
        assert_eq!(opt.get_max_connections(), Some(12));
    }
}
