use parking_lot::RwLock;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::core::{AppError, Result};

/// One HTTP session: a pooled client plus the headers every request carries
///
/// Clones share the same client and header map, so a token installed through
/// one handle is seen by all of them.
#[derive(Clone)]
pub struct HttpSession {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    client: Client,
    headers: RwLock<HeaderMap>,
    closed: AtomicBool,
}

impl HttpSession {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Self {
            inner: Arc::new(SessionInner {
                client,
                headers: RwLock::new(headers),
                closed: AtomicBool::new(false),
            }),
        }
    }

    pub(crate) fn client(&self) -> Result<&Client> {
        if self.is_closed() {
            return Err(AppError::SessionClosed);
        }
        Ok(&self.inner.client)
    }

    /// Snapshot of the persistent headers
    pub fn headers(&self) -> HeaderMap {
        self.inner.headers.read().clone()
    }

    pub fn set_header(&self, name: HeaderName, value: &str) -> Result<()> {
        let value = HeaderValue::from_str(value)
            .map_err(|e| AppError::validation(format!("header {}: {}", name, e)))?;
        self.inner.headers.write().insert(name, value);
        Ok(())
    }

    /// Install `Authorization: Bearer <token>` for every later request
    pub fn set_bearer_token(&self, token: &str) -> Result<()> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| AppError::validation(format!("bearer token: {}", e)))?;
        value.set_sensitive(true);
        self.inner.headers.write().insert(AUTHORIZATION, value);
        Ok(())
    }

    pub fn clear_authorization(&self) {
        self.inner.headers.write().remove(AUTHORIZATION);
    }

    pub fn is_authorized(&self) -> bool {
        self.inner.headers.read().contains_key(AUTHORIZATION)
    }

    /// Refuse further requests; pooled connections go with the last handle
    pub fn close(&self) {
        if !self.inner.closed.swap(true, Ordering::SeqCst) {
            tracing::debug!("HTTP session closed");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::SeqCst)
    }

    /// Whether two handles point at the same session
    pub fn same_session(&self, other: &HttpSession) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
