use reqwest::{Method, StatusCode};

use serde_json::json;

use super::models::LoginResponse;
use crate::core::{AppError, Credentials, Result};
use crate::requester::{HttpSession, IntoPayload, PendingRequest, Requester};

pub const REGISTER_ENDPOINT: &str = "/register";
pub const LOGIN_ENDPOINT: &str = "/login";

/// Client for the registration and login endpoints
#[derive(Clone)]
pub struct AuthClient {
    requester: Requester,
}

impl AuthClient {
    pub fn new(session: HttpSession, base_url: impl Into<String>) -> Self {
        Self {
            requester: Requester::new(session, base_url),
        }
    }

    pub fn session(&self) -> &HttpSession {
        self.requester.session()
    }

    /// `POST /register`, expecting 201 by default
    pub fn register_user(&self, user: impl IntoPayload) -> PendingRequest<'_> {
        self.requester
            .send_request(Method::POST, REGISTER_ENDPOINT)
            .body(user)
            .expect(StatusCode::CREATED)
    }

    /// `POST /login`, expecting 200 or 201 by default
    pub fn login_user(&self, login: impl IntoPayload) -> PendingRequest<'_> {
        self.requester
            .send_request(Method::POST, LOGIN_ENDPOINT)
            .body(login)
            .expect([200, 201])
    }

    /// Log in and install the bearer token on the shared session
    ///
    /// Every client bound to the same session is authorized afterwards.
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<LoginResponse> {
        // sent raw: configured credentials are not held to the request model's policy
        let login = json!({
            "email": credentials.email,
            "password": credentials.password(),
        });
        let response = self.login_user(login).send().await?;

        let body = response.json()?;
        let token = body
            .get("accessToken")
            .and_then(|t| t.as_str())
            .filter(|t| !t.is_empty())
            .ok_or(AppError::MissingToken)?;
        let login: LoginResponse = response.decode_valid()?;

        self.session().set_bearer_token(token)?;
        tracing::info!(email = %credentials.email, "session authenticated");

        Ok(login)
    }
}
