use crate::core::{AppError, Result};
use secrecy::{ExposeSecret, SecretString};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::env;
use std::time::Duration;

/// Declared type of `movies.price`, which decides how prices are bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceColumn {
    /// `double precision` / `real`
    #[default]
    Float,
    /// `numeric(p, s)`
    Numeric,
}

impl std::str::FromStr for PriceColumn {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "float" | "double" | "real" => Ok(PriceColumn::Float),
            "numeric" | "decimal" => Ok(PriceColumn::Numeric),
            _ => Err(format!("Invalid price column type: {}", s)),
        }
    }
}

/// Connection parameters of the movies database
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub username: String,
    pub password: SecretString,
    pub max_connections: u32,
    pub price_column: PriceColumn,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        Ok(DatabaseConfig {
            host: env::var("DB_MOVIES_HOST")
                .map_err(|_| AppError::Configuration("DB_MOVIES_HOST not set".to_string()))?,
            port: env::var("DB_MOVIES_PORT")
                .unwrap_or_else(|_| "5432".to_string())
                .parse()
                .map_err(|_| AppError::Configuration("Invalid DB_MOVIES_PORT".to_string()))?,
            name: env::var("DB_MOVIES_NAME")
                .map_err(|_| AppError::Configuration("DB_MOVIES_NAME not set".to_string()))?,
            username: env::var("DB_MOVIES_USERNAME")
                .map_err(|_| AppError::Configuration("DB_MOVIES_USERNAME not set".to_string()))?,
            password: env::var("DB_MOVIES_PASSWORD")
                .map(SecretString::from)
                .map_err(|_| AppError::Configuration("DB_MOVIES_PASSWORD not set".to_string()))?,
            max_connections: env::var("DB_MOVIES_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid DB_MOVIES_MAX_CONNECTIONS".to_string())
                })?,
            price_column: env::var("DB_MOVIES_PRICE_COLUMN")
                .unwrap_or_else(|_| "float".to_string())
                .parse()
                .map_err(AppError::Configuration)?,
        })
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.name)
            .username(&self.username)
            .password(self.password.expose_secret())
    }

    /// Create a PostgreSQL connection pool
    pub async fn create_pool(&self) -> Result<PgPool> {
        tracing::debug!(host = %self.host, port = self.port, db = %self.name, "connecting to movies database");

        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .connect_with(self.connect_options())
            .await
            .map_err(AppError::Database)
    }
}
