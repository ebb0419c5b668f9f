//! Server configuration from environment variables.

use crate::error::ConfigError;
use axum::http::HeaderValue;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/dnd_companion";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Single origin allowed for cross-origin requests (credentials enabled).
    pub cors_origin: HeaderValue,
    pub max_connections: u32,
    pub body_limit_bytes: usize,
}

impl ServerConfig {
    /// Read from process env. Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let cors_origin = match get("CORS_ORIGIN") {
            Some(v) => HeaderValue::from_str(&v).map_err(|_| ConfigError::Invalid {
                key: "CORS_ORIGIN",
                value: v.clone(),
            })?,
            None => HeaderValue::from_static(DEFAULT_CORS_ORIGIN),
        };

        Ok(ServerConfig {
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.into()),
            port: parse_or("PORT", get("PORT"), DEFAULT_PORT)?,
            cors_origin,
            max_connections: parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), DEFAULT_MAX_CONNECTIONS)?,
            body_limit_bytes: parse_or("BODY_LIMIT_BYTES", get("BODY_LIMIT_BYTES"), DEFAULT_BODY_LIMIT_BYTES)?,
        })
    }

    /// `host:port` for `TcpListener::bind`; host may be a name such as `localhost`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            database_url: DEFAULT_DATABASE_URL.into(),
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            cors_origin: HeaderValue::from_static(DEFAULT_CORS_ORIGIN),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}

fn parse_or<T: std::str::FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(v) => v.parse().map_err(|_| ConfigError::Invalid { key, value: v }),
        None => Ok(default),
    }
}
