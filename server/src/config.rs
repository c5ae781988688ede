//! Server configuration parsed from environment variables.

use std::net::IpAddr;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ASSETS_DIR: &str = "assets";

/// Errors produced while reading server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: '{value}'")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Content document to load; the built-in catalogue when absent.
    pub content_path: Option<PathBuf>,
    /// Directory served under `/assets`.
    pub assets_dir: PathBuf,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `CONTENT_PATH`: `.yaml`/`.yml`/`.json` content document
    /// - `ASSETS_DIR`: default `assets`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `HOST` or `PORT` does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `HOST` or `PORT` does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = parse_var("HOST", non_blank("HOST"), DEFAULT_HOST.parse().ok())?;
        let port = parse_var("PORT", non_blank("PORT"), Some(DEFAULT_PORT))?;
        let content_path = non_blank("CONTENT_PATH").map(PathBuf::from);
        let assets_dir = non_blank("ASSETS_DIR").map_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR), PathBuf::from);

        Ok(Self { host, port, content_path, assets_dir })
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: Option<T>) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { var, value }),
        None => default.ok_or(ConfigError::Invalid { var, value: String::new() }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
