use reqwest::{Method, StatusCode};

/// Harness-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main harness error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// The service answered with a status outside the expected set
    #[error(
        "Unexpected status for {method} {url}: expected {expected}, got {actual}. Body: {body}"
    )]
    StatusMismatch {
        method: Method,
        url: String,
        expected: String,
        actual: StatusCode,
        body: String,
    },

    /// A response body did not match its declared model
    #[error("Schema mismatch for {model}: {reason}")]
    Schema { model: &'static str, reason: String },

    /// Request payload failed field or cross-field validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Login succeeded but carried no access token
    #[error("Access token is missing from the login response")]
    MissingToken,

    /// Request issued over a session that was already closed
    #[error("HTTP session is closed")]
    SessionClosed,

    /// Database operation errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Transfer source holds less than the requested amount
    #[error("Insufficient funds on account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        account: String,
        balance: i32,
        requested: i32,
    },

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn schema(model: &'static str, reason: impl Into<String>) -> Self {
        AppError::Schema {
            model,
            reason: reason.into(),
        }
    }

    /// Status code carried by a status mismatch, if any
    pub fn actual_status(&self) -> Option<StatusCode> {
        match self {
            AppError::StatusMismatch { actual, .. } => Some(*actual),
            _ => None,
        }
    }
}
