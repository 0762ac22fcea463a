//! Seed program configuration, read from the environment.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `BEANMARKET_FIXTURES_DIR` | `fixtures` |
//! | `BEANMARKET_SETTLE_MS` | `2000` |
//! | `BEANMARKET_STORE_CAPACITY` | `32` |
//!
//! A `.env` file in the working directory is loaded first; variables already set
//! in the environment take precedence over it.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

pub const FIXTURES_DIR_VAR: &str = "BEANMARKET_FIXTURES_DIR";
pub const SETTLE_MS_VAR: &str = "BEANMARKET_SETTLE_MS";
pub const STORE_CAPACITY_VAR: &str = "BEANMARKET_STORE_CAPACITY";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeedConfig {
    /// Directory holding `users.json`, `coffees.json`, `pictures.json` and `transactions.json`.
    pub fixtures_dir: PathBuf,
    /// Pause between starting the stores and inserting the first record.
    pub settle_delay: Duration,
    /// Request channel capacity of every store.
    pub store_capacity: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            fixtures_dir: PathBuf::from("fixtures"),
            settle_delay: Duration::from_millis(2000),
            store_capacity: 32,
        }
    }
}

impl SeedConfig {
    /// Loads `.env` (if any) and reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "Loaded .env"),
            Err(_) => debug!("No .env file found, using environment only"),
        }
        let config = Self::from_lookup(|var| std::env::var(var).ok())?;
        info!(
            fixtures_dir = %config.fixtures_dir.display(),
            settle_ms = config.settle_delay.as_millis() as u64,
            store_capacity = config.store_capacity,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Builds the config from any variable source; unset variables take their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let fixtures_dir = lookup(FIXTURES_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or(defaults.fixtures_dir);

        let settle_delay = match lookup(SETTLE_MS_VAR) {
            Some(value) => Duration::from_millis(parse_number(SETTLE_MS_VAR, &value)?),
            None => defaults.settle_delay,
        };

        let store_capacity = match lookup(STORE_CAPACITY_VAR) {
            Some(value) => parse_number(STORE_CAPACITY_VAR, &value)?,
            None => defaults.store_capacity,
        };
        // tokio::sync::mpsc::channel panics on a zero buffer
        if store_capacity == 0 {
            return Err(ConfigError::Zero(STORE_CAPACITY_VAR));
        }

        Ok(Self {
            fixtures_dir,
            settle_delay,
            store_capacity,
        })
    }
}

fn parse_number<N: FromStr>(var: &'static str, value: &str) -> Result<N, ConfigError> {
    match value.trim().parse() {
        Ok(number) => Ok(number),
        Err(_) => Err(ConfigError::InvalidNumber {
            var,
            value: value.to_string(),
        }),
    }
}
