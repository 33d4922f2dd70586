pub mod accounts;
pub mod auth;
pub mod movies;
pub mod users;
