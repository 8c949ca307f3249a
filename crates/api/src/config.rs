use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;
use axum::http::HeaderValue;
use sqlx::mysql::MySqlConnectOptions;

/// Server configuration loaded from environment variables.
///
/// Built once at startup and shared read-only through `AppState`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Origins allowed to make cross-origin requests.
    pub cors_origins: CorsOrigins,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub database: DatabaseConfig,
}

/// Parsed `CORS_ORIGINS`: `*` allows every origin.
#[derive(Debug, Clone, PartialEq)]
pub enum CorsOrigins {
    Any,
    List(Vec<HeaderValue>),
}

/// MySQL connection parameters plus pool bounds.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                   | Default     |
    /// |---------------------------|-------------|
    /// | `HOST`                    | `0.0.0.0`   |
    /// | `PORT`                    | `5000`      |
    /// | `CORS_ORIGINS`            | `*`         |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`        |
    /// | `DB_HOST`                 | `localhost` |
    /// | `DB_PORT`                 | `3306`      |
    /// | `DB_USER`                 | `root`      |
    /// | `DB_PASSWORD`             | (empty)     |
    /// | `DB_NAME`                 | `sakila`    |
    /// | `DB_MAX_CONNECTIONS`      | `10`        |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `5`         |
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let string_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.into());

        let database = DatabaseConfig {
            host: string_or("DB_HOST", "localhost"),
            port: parse_or(&lookup, "DB_PORT", 3306)?,
            user: string_or("DB_USER", "root"),
            password: string_or("DB_PASSWORD", ""),
            name: string_or("DB_NAME", "sakila"),
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 10)?,
            acquire_timeout_secs: parse_or(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", 5)?,
        };

        Ok(Self {
            host: string_or("HOST", "0.0.0.0"),
            port: parse_or(&lookup, "PORT", 5000)?,
            cors_origins: parse_cors_origins(&string_or("CORS_ORIGINS", "*"))?,
            request_timeout_secs: parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30)?,
            database,
        })
    }
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout_secs", &self.acquire_timeout_secs)
            .finish()
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has invalid value '{raw}'")),
        None => Ok(default),
    }
}

fn parse_cors_origins(raw: &str) -> anyhow::Result<CorsOrigins> {
    let origins: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if origins.is_empty() || origins.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    origins
        .into_iter()
        .map(|o| {
            HeaderValue::from_str(o).with_context(|| format!("Invalid CORS origin '{o}'"))
        })
        .collect::<anyhow::Result<Vec<_>>>()
        .map(CorsOrigins::List)
}
