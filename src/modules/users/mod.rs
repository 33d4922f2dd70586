pub mod client;
pub mod models;
pub mod repository;

pub use client::{UserClient, USER_ENDPOINT};
pub use models::{
    CreateUserRequest, CreateUserResponse, GetUserResponse, NewUserRow, UserResponse, UserRow,
};
pub use repository::UserRepository;
