//! Role-scoped API principals.
//!
//! An [`ApiManager`] owns one session and the three domain clients bound to
//! it. An [`Actor`] is a manager that has logged in with a given role.

use reqwest::StatusCode;
use std::fmt;

use crate::config::ApiConfig;
use crate::core::{Credentials, Operation, PermissionMatrix, Result, Role};
use crate::modules::auth::{AuthClient, LoginResponse};
use crate::modules::movies::MoviesClient;
use crate::modules::users::UserClient;
use crate::requester::HttpSession;

/// One session and the clients sharing it
#[derive(Clone)]
pub struct ApiManager {
    session: HttpSession,
    pub auth: AuthClient,
    pub users: UserClient,
    pub movies: MoviesClient,
}

impl ApiManager {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let session = HttpSession::new(config.timeout)?;
        Ok(Self::with_session(session, config))
    }

    pub fn with_session(session: HttpSession, config: &ApiConfig) -> Self {
        Self {
            auth: AuthClient::new(session.clone(), &config.auth_base_url),
            users: UserClient::new(session.clone(), &config.auth_base_url),
            movies: MoviesClient::new(session.clone(), &config.movies_base_url),
            session,
        }
    }

    pub fn session(&self) -> &HttpSession {
        &self.session
    }

    pub fn close_session(&self) {
        self.session.close();
    }
}

impl fmt::Debug for ApiManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiManager")
            .field("authorized", &self.session.is_authorized())
            .field("closed", &self.session.is_closed())
            .finish_non_exhaustive()
    }
}

/// Lifecycle of an actor's session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorState {
    Unauthenticated,
    Authenticating,
    Authenticated,
}

impl fmt::Display for ActorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self {
            ActorState::Unauthenticated => "unauthenticated",
            ActorState::Authenticating => "authenticating",
            ActorState::Authenticated => "authenticated",
        };
        f.write_str(state)
    }
}

/// A logged-in principal with a fixed role
pub struct Actor {
    credentials: Credentials,
    role: Role,
    api: ApiManager,
    login: LoginResponse,
}

impl Actor {
    /// Open a fresh session and authenticate it
    ///
    /// A failed login aborts construction; no half-authenticated actor is
    /// ever handed out.
    pub async fn login(config: &ApiConfig, credentials: Credentials, role: Role) -> Result<Self> {
        let api = ApiManager::new(config)?;
        Self::login_with(api, credentials, role).await
    }

    /// Authenticate an existing manager's session
    pub async fn login_with(api: ApiManager, credentials: Credentials, role: Role) -> Result<Self> {
        log_transition(&credentials, role, ActorState::Authenticating);

        let login = match api.auth.authenticate(&credentials).await {
            Ok(login) => login,
            Err(e) => {
                tracing::warn!(email = %credentials.email, %role, error = %e, "login failed");
                api.close_session();
                return Err(e);
            }
        };

        log_transition(&credentials, role, ActorState::Authenticated);

        Ok(Self {
            credentials,
            role,
            api,
            login,
        })
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn email(&self) -> &str {
        &self.credentials.email
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn api(&self) -> &ApiManager {
        &self.api
    }

    pub fn auth(&self) -> &AuthClient {
        &self.api.auth
    }

    pub fn users(&self) -> &UserClient {
        &self.api.users
    }

    pub fn movies(&self) -> &MoviesClient {
        &self.api.movies
    }

    /// Login body received when the actor authenticated
    pub fn login_response(&self) -> &LoginResponse {
        &self.login
    }

    pub fn user_id(&self) -> &str {
        &self.login.user.id
    }

    /// Status the service must answer with when this actor performs `operation`
    pub fn expected_status(&self, operation: Operation) -> StatusCode {
        PermissionMatrix::expected_status(Some(self.role), operation)
    }

    pub fn close(self) {
        self.api.close_session();
        log_transition(&self.credentials, self.role, ActorState::Unauthenticated);
    }
}

impl fmt::Debug for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Actor")
            .field("email", &self.credentials.email)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

fn log_transition(credentials: &Credentials, role: Role, state: ActorState) {
    tracing::debug!(email = %credentials.email, %role, %state, "actor state changed");
}
