//! Application settings loaded from environment variables.

use std::env;
use std::time::Duration;

use super::constants::{
    DEFAULT_DB_HOST, DEFAULT_DB_NAME, DEFAULT_DB_PORT, DEFAULT_DB_USER,
    DEFAULT_QUERY_TIMEOUT_MS, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub query_timeout: Duration,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("query_timeout", &self.query_timeout)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `DATABASE_URL` wins when set; otherwise the URL is assembled from
    /// `DB`, `DB_HOST`, `DB_PORT`, `DB_USER` and `DB_PSWD`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            mysql_url(
                &env::var("DB_USER").unwrap_or_else(|_| DEFAULT_DB_USER.to_string()),
                &env::var("DB_PSWD").unwrap_or_default(),
                &env::var("DB_HOST").unwrap_or_else(|_| DEFAULT_DB_HOST.to_string()),
                env::var("DB_PORT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_DB_PORT),
                &env::var("DB").unwrap_or_else(|_| DEFAULT_DB_NAME.to_string()),
            )
        });

        Self {
            database_url,
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("PORT")
                .or_else(|_| env::var("SERVER_PORT"))
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            query_timeout: Duration::from_millis(
                env::var("QUERY_TIMEOUT_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .filter(|ms| *ms > 0)
                    .unwrap_or(DEFAULT_QUERY_TIMEOUT_MS),
            ),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: mysql_url(DEFAULT_DB_USER, "", DEFAULT_DB_HOST, DEFAULT_DB_PORT, DEFAULT_DB_NAME),
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            query_timeout: Duration::from_millis(DEFAULT_QUERY_TIMEOUT_MS),
        }
    }
}

/// Build a MySQL connection URL. An empty password is left out entirely.
fn mysql_url(user: &str, password: &str, host: &str, port: u16, database: &str) -> String {
    if password.is_empty() {
        format!("mysql://{}@{}:{}/{}", user, host, port, database)
    } else {
        format!("mysql://{}:{}@{}:{}/{}", user, password, host, port, database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mysql_url_without_password() {
        assert_eq!(
            mysql_url("root", "", "localhost", 3306, "mindlog"),
            "mysql://root@localhost:3306/mindlog"
        );
    }

    #[test]
    fn test_mysql_url_with_password() {
        assert_eq!(
            mysql_url("app", "s3cret", "db", 3307, "clinic"),
            "mysql://app:s3cret@db:3307/clinic"
        );
    }

    #[test]
    fn test_debug_redacts_database_url() {
        let config = Config::default();
        let rendered = format!("{:?}", config);
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("mysql://"));
    }

    #[test]
    fn test_server_addr() {
        let config = Config::default();
        assert_eq!(config.server_addr(), "0.0.0.0:5000");
    }
}
