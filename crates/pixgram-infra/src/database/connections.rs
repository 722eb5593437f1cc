use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Configuration for the database connection pool.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Create missing tables on startup.
    pub auto_migrate: bool,
}

impl DatabaseConfig {
    /// A private in-memory SQLite database. One connection, since every
    /// SQLite memory connection is its own database.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            auto_migrate: true,
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.starts_with("sqlite::memory:") || self.url.contains("mode=memory")
    }
}

/// Open the connection pool described by `config`.
pub async fn connect(config: &DatabaseConfig) -> Result<DbConn, DbErr> {
    tracing::info!("Initializing database connection...");

    let max_connections = if config.is_in_memory() {
        1
    } else {
        config.max_connections
    };

    let mut opts = ConnectOptions::new(&config.url);
    opts.max_connections(max_connections)
        .min_connections(config.min_connections.min(max_connections))
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);
    // Closing the only in-memory connection would drop the whole database.
    if !config.is_in_memory() {
        opts.idle_timeout(Duration::from_secs(300));
    }

    let db = Database::connect(opts).await?;
    tracing::info!(pool = max_connections, "Database connected");

    if config.auto_migrate {
        super::schema::create_schema(&db).await?;
    }

    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_detection() {
        assert!(DatabaseConfig::in_memory().is_in_memory());

        let postgres = DatabaseConfig {
            url: "postgres://localhost/pixgram".to_string(),
            max_connections: 100,
            min_connections: 10,
            auto_migrate: false,
        };
        assert!(!postgres.is_in_memory());
    }
}
