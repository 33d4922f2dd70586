use crate::core::{AppError, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_AUTH_URL: &str = "https://auth.dev-cinescope.coconutqa.ru";
pub const DEFAULT_MOVIES_URL: &str = "https://api.dev-cinescope.coconutqa.ru";

/// Base URLs of the services under test
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub auth_base_url: String,
    pub movies_base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(auth_base_url: impl Into<String>, movies_base_url: impl Into<String>) -> Self {
        Self {
            auth_base_url: trim_base(auth_base_url.into()),
            movies_base_url: trim_base(movies_base_url.into()),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn from_env() -> Result<Self> {
        let timeout_secs: u64 = env::var("HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .map_err(|_| AppError::Configuration("Invalid HTTP_TIMEOUT_SECS".to_string()))?;

        let mut config = ApiConfig::new(
            env::var("CINESCOPE_AUTH_URL").unwrap_or_else(|_| DEFAULT_AUTH_URL.to_string()),
            env::var("CINESCOPE_API_URL").unwrap_or_else(|_| DEFAULT_MOVIES_URL.to_string()),
        );
        config.timeout = Duration::from_secs(timeout_secs);
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for url in [&self.auth_base_url, &self.movies_base_url] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(AppError::Configuration(format!(
                    "Base URL must be absolute http(s): {}",
                    url
                )));
            }
        }
        if self.timeout.is_zero() {
            return Err(AppError::Configuration(
                "HTTP timeout must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
