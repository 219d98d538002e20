use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SCHEMA: &str = "catalog";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    /// PostgreSQL schema holding the catalog tables
    pub database_schema: String,
    pub bind_addr: SocketAddr,
    pub seed_sample_data: bool,
    pub max_connections: u32,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

impl Config {
    /// Reads the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        Ok(Self {
            database_url,
            database_schema: lookup("DATABASE_SCHEMA").unwrap_or_else(|| DEFAULT_SCHEMA.to_owned()),
            bind_addr: parse_or(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR.parse().ok())?,
            seed_sample_data: parse_or(&lookup, "SEED_SAMPLE_DATA", Some(true))?,
            max_connections: parse_or(
                &lookup,
                "DATABASE_MAX_CONNECTIONS",
                Some(DEFAULT_MAX_CONNECTIONS),
            )?,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: Option<T>,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => default.ok_or(ConfigError::Missing(key)),
    }
}
