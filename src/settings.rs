//! Environment-provided configuration.
//!
//! Every key maps to an upper-case environment variable of the same name,
//! e.g. `database_url` is read from `DATABASE_URL`.

use config::{Config, Environment};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

use crate::database::Backend;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/solar-system";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_APP_ENV: &str = "development";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// `sqlite:`, `postgres:` or `memory:` URL of the record store
    pub database_url: String,
    pub database_username: Option<String>,
    pub database_password: Option<String>,
    pub database_max_connections: u32,
    /// HTTP listening port
    pub port: u16,
    /// Deployment environment name reported by `GET /os`
    pub app_env: String,
    /// Directory holding `index.html` and its assets
    pub static_dir: PathBuf,
}

impl Settings {
    /// Load from the process environment
    pub fn load() -> Result<Self, SettingsError> {
        Self::build(Environment::default())
    }

    /// Load from an explicit variable map instead of the process environment
    pub fn from_source(vars: HashMap<String, String>) -> Result<Self, SettingsError> {
        Self::build(Environment::default().source(Some(vars)))
    }

    fn build(environment: Environment) -> Result<Self, SettingsError> {
        let settings: Settings = Config::builder()
            .set_default("database_url", DEFAULT_DATABASE_URL)?
            .set_default("database_max_connections", 5)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("app_env", DEFAULT_APP_ENV)?
            .set_default("static_dir", "static")?
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if Backend::from_url(&self.database_url).is_none() {
            return Err(SettingsError::InvalidValue(format!(
                "DATABASE_URL must start with sqlite:, postgres: or memory: (got '{}')",
                self.database_url
            )));
        }
        if self.database_max_connections == 0 {
            return Err(SettingsError::InvalidValue(
                "DATABASE_MAX_CONNECTIONS must be > 0".to_string(),
            ));
        }
        if self.app_env.trim().is_empty() {
            return Err(SettingsError::InvalidValue("APP_ENV must not be empty".to_string()));
        }
        Ok(())
    }

    /// Username and password, only when both are set and non-empty
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let username = self.database_username.as_deref().filter(|u| !u.is_empty())?;
        let password = self.database_password.as_deref().filter(|p| !p.is_empty())?;
        Some((username, password))
    }
}
