//! Server configuration, read from `GROCERY_*` environment variables

use anyhow::{Context, Result};
use ::config::{Config as ConfigSource, Environment};
use serde::Deserialize;

const ENV_PREFIX: &str = "GROCERY";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Path of the SQLite database file (`GROCERY_DATABASE_PATH`)
    pub database_path: String,
    /// Address the HTTP server binds to (`GROCERY_BIND_ADDRESS`)
    pub bind_address: String,
    /// Debug/production toggle (`GROCERY_DEBUG`)
    pub debug: bool,
    /// Reject missing items and unknown users on create (`GROCERY_STRICT_VALIDATION`)
    pub strict_validation: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::load(Environment::with_prefix(ENV_PREFIX))
    }

    /// Load from an explicit variable map instead of the process environment.
    #[cfg(test)]
    pub fn from_vars(vars: std::collections::HashMap<String, String>) -> Result<Self> {
        Self::load(Environment::with_prefix(ENV_PREFIX).source(Some(vars)))
    }

    fn load(env: Environment) -> Result<Self> {
        ConfigSource::builder()
            .set_default("database_path", "grocery.db")?
            .set_default("bind_address", "127.0.0.1:5000")?
            .set_default("debug", false)?
            .set_default("strict_validation", false)?
            .add_source(env.try_parsing(true))
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Default tracing filter when `RUST_LOG` is not set
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "grocery_server=debug,tower_http=debug"
        } else {
            "grocery_server=info,tower_http=info"
        }
    }
}
