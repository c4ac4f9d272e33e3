//! Configuration loading and representation.
//!
//! Everything comes from environment variables, read once at startup. Missing
//! variables fall back to defaults; malformed ones are errors. Loading happens
//! before tracing is initialised, so nothing here logs.

use std::path::PathBuf;
use std::str::FromStr;

pub use citypages_observability::LogFormat;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_BASE_URL: &str = "https://cities.janvipackaging.online";
pub const DEFAULT_PUBLIC_DIR: &str = "public";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Postgres URL. `None` runs against the built-in in-memory catalogue.
    pub database_url: Option<String>,
    pub port: u16,
    /// Base of every absolute URL in sitemaps. Never taken from requests.
    pub site_base_url: String,
    /// Static assets directory; batch-mode sitemaps are written here too.
    pub public_dir: PathBuf,
    pub max_db_connections: u32,
    /// Reject per-product sitemap requests for slugs that are not products.
    pub validate_product_slugs: bool,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            port: DEFAULT_PORT,
            site_base_url: DEFAULT_SITE_BASE_URL.to_string(),
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            max_db_connections: DEFAULT_MAX_CONNECTIONS,
            validate_product_slugs: false,
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variable names.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        Ok(Self {
            database_url: lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()),
            port: parse_or(&lookup, "PORT", defaults.port)?,
            site_base_url: lookup("SITE_BASE_URL").unwrap_or(defaults.site_base_url),
            public_dir: lookup("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.public_dir),
            max_db_connections: parse_or(
                &lookup,
                "DATABASE_MAX_CONNECTIONS",
                defaults.max_db_connections,
            )?,
            validate_product_slugs: parse_or(
                &lookup,
                "SITEMAP_VALIDATE_PRODUCTS",
                defaults.validate_product_slugs,
            )?,
            log_format: parse_or(&lookup, "LOG_FORMAT", defaults.log_format)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(load(&[]).unwrap(), Config::default());
    }

    #[test]
    fn reads_every_variable() {
        let cfg = load(&[
            ("DATABASE_URL", "postgres://localhost/citypages"),
            ("PORT", "8080"),
            ("SITE_BASE_URL", "https://example.com"),
            ("PUBLIC_DIR", "/srv/public"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
            ("SITEMAP_VALIDATE_PRODUCTS", "true"),
            ("LOG_FORMAT", "pretty"),
        ])
        .unwrap();

        assert_eq!(cfg.database_url.as_deref(), Some("postgres://localhost/citypages"));
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.site_base_url, "https://example.com");
        assert_eq!(cfg.public_dir, PathBuf::from("/srv/public"));
        assert_eq!(cfg.max_db_connections, 12);
        assert!(cfg.validate_product_slugs);
        assert_eq!(cfg.log_format, LogFormat::Pretty);
    }

    #[test]
    fn blank_database_url_means_in_memory() {
        let cfg = load(&[("DATABASE_URL", "  ")]).unwrap();
        assert_eq!(cfg.database_url, None);
    }

    #[test]
    fn malformed_values_are_errors() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        match err {
            ConfigError::Invalid { key, value, .. } => {
                assert_eq!(key, "PORT");
                assert_eq!(value, "eighty");
            }
        }

        assert!(load(&[("SITEMAP_VALIDATE_PRODUCTS", "maybe")]).is_err());
        assert!(load(&[("LOG_FORMAT", "xml")]).is_err());
    }
}
