use crate::core::{AppError, Credentials, Result};
use std::env;

pub mod api;
pub mod database;

pub use api::ApiConfig;
pub use database::{DatabaseConfig, PriceColumn};

/// Main harness configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub super_admin: Credentials,
    /// Absent when the movies database is not reachable from this environment
    pub database: Option<DatabaseConfig>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let super_admin = Credentials::new(
            env::var("SUPER_ADMIN_USERNAME").map_err(|_| {
                AppError::Configuration("SUPER_ADMIN_USERNAME not set".to_string())
            })?,
            env::var("SUPER_ADMIN_PASSWORD").map_err(|_| {
                AppError::Configuration("SUPER_ADMIN_PASSWORD not set".to_string())
            })?,
        );

        let database = match env::var("DB_MOVIES_HOST") {
            Ok(_) => Some(DatabaseConfig::from_env()?),
            Err(_) => None,
        };

        Ok(Config {
            api: ApiConfig::from_env()?,
            super_admin,
            database,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.api.validate()?;

        if self.super_admin.email.is_empty() {
            return Err(AppError::Configuration(
                "Super admin email must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Database settings, or a configuration error naming the missing variable
    pub fn database(&self) -> Result<&DatabaseConfig> {
        self.database
            .as_ref()
            .ok_or_else(|| AppError::Configuration("DB_MOVIES_HOST not set".to_string()))
    }
}
