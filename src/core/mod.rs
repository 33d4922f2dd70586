pub mod api_errors;
pub mod credentials;
pub mod error;
pub mod permissions;
pub mod role;
pub mod timestamps;
pub mod validation;

pub use api_errors::{
    BadRequestResponse, ConflictResponse, ErrorShape, ForbiddenResponse, NotFoundResponse,
    UnauthorizedResponse,
};
pub use credentials::Credentials;
pub use error::{AppError, Result};
pub use permissions::{Operation, PermissionMatrix};
pub use role::Role;
pub use validation::validate_request;
