//! Cinescope test harness
//!
//! Typed HTTP clients, role-scoped actors and database cross-checks for
//! exercising the Cinescope auth and movies services as a black box.

pub mod actor;
pub mod cleanup;
pub mod config;
pub mod core;
pub mod db;
pub mod fixtures;
pub mod generator;
pub mod modules;
pub mod requester;
pub mod telemetry;

// Re-export commonly used types
pub use actor::{Actor, ActorState, ApiManager};
pub use config::{ApiConfig, Config, DatabaseConfig};
pub use crate::core::{AppError, Credentials, Operation, PermissionMatrix, Result, Role};
pub use db::DbHelper;
pub use fixtures::{CreatedMovie, CreatedUser, Fixtures};
pub use generator::DataGenerator;
pub use modules::{accounts, auth, movies, users};
pub use requester::{ApiResponse, ExpectedStatus, HttpSession, Payload, Requester};
