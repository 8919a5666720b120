//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{DEFAULT_HASH_COST, DEFAULT_TOKEN_EXPIRY_DAYS};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub auth: AuthSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

impl AppSettings {
    pub fn is_development(&self) -> bool {
        self.env == "development"
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthSettings {
    /// Signing secret for session tokens. Required: there is no default,
    /// and startup fails when it is missing or empty.
    pub token_secret: String,
    pub token_expiry_days: i64,
    pub hash_cost: u32,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "ident-server")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("auth.token_expiry_days", DEFAULT_TOKEN_EXPIRY_DAYS)?
            .set_default("auth.hash_cost", DEFAULT_HASH_COST as i64)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;

        let config: AppConfig = config.try_deserialize()?;

        if config.auth.token_secret.trim().is_empty() {
            return Err(ConfigError::Message(
                "auth.token_secret must be set to a non-empty value".into(),
            ));
        }

        Ok(config)
    }
}
