pub mod models;
pub mod repository;

pub use models::{AccountRow, TransferOutcome};
pub use repository::AccountRepository;
