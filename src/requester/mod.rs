//! Request executor shared by every domain client.
//!
//! A [`Requester`] binds a session to a base URL. Each call goes through
//! [`PendingRequest::send`], which checks the response status against the
//! expected set and hands back the raw [`ApiResponse`].

pub mod expected;
pub mod payload;
pub mod query;
pub mod response;
pub mod session;

pub use expected::ExpectedStatus;
pub use payload::{IntoPayload, Payload};
pub use query::{IntoQuery, QueryPairs};
pub use response::ApiResponse;
pub use session::HttpSession;

use reqwest::{Method, StatusCode};

use crate::core::{AppError, Result};

/// Executor for one base URL over one session
#[derive(Clone)]
pub struct Requester {
    session: HttpSession,
    base_url: String,
}

impl Requester {
    pub fn new(session: HttpSession, base_url: impl Into<String>) -> Self {
        Self {
            session,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn session(&self) -> &HttpSession {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start a request; the expected status defaults to 200
    pub fn send_request(&self, method: Method, endpoint: impl AsRef<str>) -> PendingRequest<'_> {
        PendingRequest {
            requester: self,
            method,
            url: format!("{}{}", self.base_url, endpoint.as_ref()),
            body: None,
            query: Vec::new(),
            expected: StatusCode::OK.into(),
        }
    }
}

/// A request being assembled; nothing is sent until [`send`](Self::send)
#[must_use = "requests do nothing until `.send().await` is called"]
pub struct PendingRequest<'a> {
    requester: &'a Requester,
    method: Method,
    url: String,
    body: Option<Result<Payload>>,
    query: QueryPairs,
    expected: ExpectedStatus,
}

impl<'a> PendingRequest<'a> {
    pub fn body(mut self, payload: impl IntoPayload) -> Self {
        self.body = Some(payload.into_payload());
        self
    }

    pub fn query(mut self, query: impl IntoQuery) -> Self {
        self.query.extend(query.into_query());
        self
    }

    /// Replace the expected status set
    pub fn expect(mut self, expected: impl Into<ExpectedStatus>) -> Self {
        self.expected = expected.into();
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issue the call and enforce the expected status
    pub async fn send(self) -> Result<ApiResponse> {
        let PendingRequest {
            requester,
            method,
            url,
            body,
            query,
            expected,
        } = self;

        let client = requester.session.client()?;
        let mut builder = client
            .request(method.clone(), &url)
            .headers(requester.session.headers());

        if !query.is_empty() {
            builder = builder.query(&query);
        }
        if let Some(payload) = body.transpose()? {
            tracing::debug!(%method, %url, body = %serde_json::Value::Object(payload.as_map().clone()), "sending request");
            builder = builder.json(&payload.into_value());
        } else {
            tracing::debug!(%method, %url, ?query, "sending request");
        }

        let response = builder.send().await?;
        let status = response.status();
        let final_url = response.url().to_string();
        let text = response.text().await?;

        tracing::debug!(%method, url = %final_url, status = status.as_u16(), "received response");

        if !expected.contains(status) {
            tracing::warn!(
                %method,
                url = %final_url,
                expected = %expected,
                actual = status.as_u16(),
                "unexpected response status"
            );
            return Err(AppError::StatusMismatch {
                method,
                url: final_url,
                expected: expected.to_string(),
                actual: status,
                body: text,
            });
        }

        Ok(ApiResponse {
            status,
            url: final_url,
            body: text,
        })
    }
}
