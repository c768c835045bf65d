//! Runtime configuration.
//!
//! Values come from the process environment, after an optional `.env` file in
//! the working directory has been loaded.
//!
//! | Variable       | Default   | Description                               |
//! |----------------|-----------|-------------------------------------------|
//! | `LIBRARY_HOST` | `0.0.0.0` | Address the HTTP server binds to          |
//! | `PORT`         | `3000`    | Port the HTTP server binds to             |
//! | `LIBRARY_SEED` | `true`    | Start from the seed catalog (else empty)  |
//!
//! Log filtering is left to `RUST_LOG`, read by the tracing subscriber.

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}: expected {expected}")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub seed_catalog: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed_catalog: true,
        }
    }
}

impl AppConfig {
    /// Load `.env` (if present) and read the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let env_file_loaded = dotenvy::dotenv().map(|_| true).or_else(|err| match err {
            dotenvy::Error::Io(_) => Ok(false),
            _ => Err(err),
        })?;
        tracing::debug!(env_file_loaded, "loading configuration");

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("LIBRARY_HOST").unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value: raw,
                expected: "a port number",
            })?,
            None => defaults.port,
        };

        let seed_catalog = match lookup("LIBRARY_SEED") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidValue {
                key: "LIBRARY_SEED",
                value: raw,
                expected: "true or false",
            })?,
            None => defaults.seed_catalog,
        };

        Ok(Self {
            host,
            port,
            seed_catalog,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
