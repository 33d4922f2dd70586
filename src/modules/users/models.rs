use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::core::{validate_request, Credentials, Result, Role};
use crate::impl_model_payload;

/// Body of the admin-only `POST /user`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, max = 100, message = "Full name must be 1-100 characters"))]
    pub full_name: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    pub verified: bool,
    pub banned: bool,
    pub roles: Vec<Role>,
}

impl CreateUserRequest {
    /// Verified, not banned, `USER` role
    pub fn new(
        email: impl Into<String>,
        full_name: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        let request = Self {
            email: email.into(),
            full_name: full_name.into(),
            password: password.into(),
            verified: true,
            banned: false,
            roles: vec![Role::User],
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

/// User as returned by `POST /user` and `GET /user/{locator}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 100))]
    pub full_name: String,
    pub roles: Vec<Role>,
    pub verified: bool,
    pub banned: bool,
    pub created_at: DateTime<Utc>,
}

pub type CreateUserResponse = UserResponse;
pub type GetUserResponse = UserResponse;

impl_model_payload!(CreateUserRequest);

/// Row of the `users` table
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct UserRow {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub verified: bool,
    pub banned: bool,
    pub roles: String,
}

/// Values for inserting a `users` row directly
#[derive(Debug, Clone, PartialEq)]
pub struct NewUserRow {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub verified: bool,
    pub banned: bool,
    pub roles: String,
}
