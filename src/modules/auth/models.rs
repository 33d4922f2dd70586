use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::timestamps::deserialize_future_expiry;
use crate::core::{validate_request, Credentials, Result, Role};
use crate::impl_model_payload;

fn default_roles() -> Vec<Role> {
    vec![Role::User]
}

/// Body of `POST /register`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub full_name: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    #[validate(
        length(min = 8, message = "Password must be at least 8 characters"),
        must_match(other = "password", message = "Passwords do not match")
    )]
    pub password_repeat: String,

    #[serde(default = "default_roles")]
    pub roles: Vec<Role>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub banned: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

impl RegisterUserRequest {
    pub fn new(
        email: impl Into<String>,
        full_name: impl Into<String>,
        password: impl Into<String>,
        password_repeat: impl Into<String>,
    ) -> Result<Self> {
        let request = Self {
            email: email.into(),
            full_name: full_name.into(),
            password: password.into(),
            password_repeat: password_repeat.into(),
            roles: default_roles(),
            banned: None,
            verified: None,
        };
        validate_request(&request)?;
        Ok(request)
    }

    pub fn with_roles(mut self, roles: Vec<Role>) -> Self {
        self.roles = roles;
        self
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.email, &self.password)
    }
}

/// Body of a successful `POST /register`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserResponse {
    pub id: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 100))]
    pub full_name: String,
    #[serde(default)]
    pub verified: bool,
    pub roles: Vec<Role>,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /login`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        let request = Self {
            email: email.into(),
            password: password.into(),
        };
        validate_request(&request)?;
        Ok(request)
    }
}

impl From<&Credentials> for LoginRequest {
    fn from(credentials: &Credentials) -> Self {
        Self {
            email: credentials.email.clone(),
            password: credentials.password().to_string(),
        }
    }
}

/// User summary embedded in a login response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginUser {
    pub id: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 100))]
    pub full_name: String,
    pub roles: Vec<Role>,
}

/// Body of a successful `POST /login`
///
/// `expiresIn` arrives as epoch milliseconds and must still be in the future,
/// otherwise the whole response fails to decode.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[validate(nested)]
    pub user: LoginUser,
    pub access_token: String,
    pub refresh_token: String,
    #[serde(deserialize_with = "deserialize_future_expiry")]
    pub expires_in: DateTime<Utc>,
}

impl_model_payload!(RegisterUserRequest, LoginRequest);
