//! Application configuration loaded from environment variables.

use chrono::TimeDelta;
use pixgram_infra::database::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    /// Items per page on every list endpoint.
    pub page_size: u64,
    pub session_ttl: TimeDelta,
    pub session_cookie_secure: bool,
    pub scheduler_enabled: bool,
    /// Six-field cron expression for the expired-session sweep.
    pub session_sweep_cron: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`. Unparsable values fall back to
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let mut database = DatabaseConfig {
            url,
            max_connections: parsed(&lookup, "DB_MAX_CONNECTIONS", 100),
            min_connections: parsed(&lookup, "DB_MIN_CONNECTIONS", 10),
            auto_migrate: flag(&lookup, "DB_AUTO_MIGRATE", false),
        };
        // A fresh in-memory database has no tables to serve from.
        if database.is_in_memory() {
            database.auto_migrate = true;
        }

        let ttl_hours: i64 = parsed(&lookup, "SESSION_TTL_HOURS", 336);

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parsed(&lookup, "PORT", 8080),
            database,
            page_size: parsed(&lookup, "PAGE_SIZE", 10).max(1),
            session_ttl: TimeDelta::try_hours(ttl_hours.max(1))
                .unwrap_or_else(|| TimeDelta::hours(336)),
            session_cookie_secure: flag(&lookup, "SESSION_COOKIE_SECURE", false),
            scheduler_enabled: flag(&lookup, "SCHEDULER_ENABLED", true),
            session_sweep_cron: lookup("SESSION_SWEEP_CRON")
                .unwrap_or_else(|| "0 0 * * * *".to_string()),
        })
    }
}

fn parsed<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    lookup(key)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

fn flag(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: bool) -> bool {
    lookup(key)
        .map(|v| {
            let v = v.trim().to_ascii_lowercase();
            v != "false" && v != "0"
        })
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("DATABASE_URL", "postgres://localhost/pixgram")]).unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.page_size, 10);
        assert_eq!(config.database.max_connections, 100);
        assert_eq!(config.database.min_connections, 10);
        assert!(!config.database.auto_migrate);
        assert_eq!(config.session_ttl, TimeDelta::hours(336));
        assert!(!config.session_cookie_secure);
        assert!(config.scheduler_enabled);
        assert_eq!(config.session_sweep_cron, "0 0 * * * *");
    }

    #[test]
    fn test_database_url_is_required() {
        assert!(matches!(
            load(&[]),
            Err(ConfigError::Missing("DATABASE_URL"))
        ));
    }

    #[test]
    fn test_overrides_and_bad_values() {
        let config = load(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("PORT", "not-a-port"),
            ("PAGE_SIZE", "25"),
            ("SESSION_COOKIE_SECURE", "true"),
            ("SCHEDULER_ENABLED", "0"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.page_size, 25);
        assert!(config.session_cookie_secure);
        assert!(!config.scheduler_enabled);
        assert!(config.database.auto_migrate);
    }
}
