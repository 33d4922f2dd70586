pub mod client;
pub mod models;

pub use client::{AuthClient, LOGIN_ENDPOINT, REGISTER_ENDPOINT};
pub use models::{LoginRequest, LoginResponse, LoginUser, RegisterUserRequest, RegisterUserResponse};
