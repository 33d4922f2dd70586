use reqwest::{Method, StatusCode};

use crate::requester::{HttpSession, IntoPayload, PendingRequest, Requester};

pub const USER_ENDPOINT: &str = "/user";

/// Client for the user administration endpoints
#[derive(Clone)]
pub struct UserClient {
    requester: Requester,
}

impl UserClient {
    pub fn new(session: HttpSession, base_url: impl Into<String>) -> Self {
        Self {
            requester: Requester::new(session, base_url),
        }
    }

    /// `GET /user/{locator}` where the locator is an id or an email
    pub fn get_user(&self, locator: &str) -> PendingRequest<'_> {
        self.requester
            .send_request(Method::GET, format!("{}/{}", USER_ENDPOINT, locator))
    }

    /// `POST /user`, expecting 201 by default
    pub fn create_user(&self, user: impl IntoPayload) -> PendingRequest<'_> {
        self.requester
            .send_request(Method::POST, USER_ENDPOINT)
            .body(user)
            .expect(StatusCode::CREATED)
    }

    /// `DELETE /user/{id}`, expecting 200 or 204 by default
    pub fn delete_user(&self, user_id: &str) -> PendingRequest<'_> {
        self.requester
            .send_request(Method::DELETE, format!("{}/{}", USER_ENDPOINT, user_id))
            .expect([200, 204])
    }
}
