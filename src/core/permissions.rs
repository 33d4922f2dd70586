//! Role × operation table for the Cinescope API.
//!
//! Tests ask this table which status an operation must produce for a given
//! caller instead of hard-coding 200/403 pairs in every case.

use reqwest::StatusCode;

use super::role::Role;

/// Every endpoint operation exercised by the harness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Register,
    Login,
    /// `GET /user/{locator}`, including the caller's own account
    GetUser,
    CreateUser,
    DeleteUser,
    ListMovies,
    GetMovie,
    CreateMovie,
    UpdateMovie,
    DeleteMovie,
}

impl Operation {
    pub fn all() -> &'static [Operation] {
        &[
            Operation::Register,
            Operation::Login,
            Operation::GetUser,
            Operation::CreateUser,
            Operation::DeleteUser,
            Operation::ListMovies,
            Operation::GetMovie,
            Operation::CreateMovie,
            Operation::UpdateMovie,
            Operation::DeleteMovie,
        ]
    }

    /// Status returned when the caller is allowed to perform the operation
    pub fn success_status(&self) -> StatusCode {
        match self {
            Operation::Register | Operation::CreateUser | Operation::CreateMovie => {
                StatusCode::CREATED
            }
            _ => StatusCode::OK,
        }
    }

    /// Operations open to anonymous callers
    pub fn is_public(&self) -> bool {
        matches!(
            self,
            Operation::Register | Operation::Login | Operation::ListMovies | Operation::GetMovie
        )
    }

    fn allowed_roles(&self) -> &'static [Role] {
        match self {
            Operation::Register
            | Operation::Login
            | Operation::ListMovies
            | Operation::GetMovie => Role::all(),
            Operation::CreateMovie | Operation::UpdateMovie => &[Role::Admin, Role::SuperAdmin],
            Operation::DeleteMovie
            | Operation::GetUser
            | Operation::CreateUser
            | Operation::DeleteUser => &[Role::SuperAdmin],
        }
    }
}

/// Central permission table
pub struct PermissionMatrix;

impl PermissionMatrix {
    pub fn is_allowed(role: Role, operation: Operation) -> bool {
        operation.allowed_roles().contains(&role)
    }

    /// Status the service must answer with for `principal` performing `operation`
    ///
    /// `None` stands for an unauthenticated session.
    pub fn expected_status(principal: Option<Role>, operation: Operation) -> StatusCode {
        match principal {
            None if operation.is_public() => operation.success_status(),
            None => StatusCode::UNAUTHORIZED,
            Some(role) if Self::is_allowed(role, operation) => operation.success_status(),
            Some(_) => StatusCode::FORBIDDEN,
        }
    }
}
