pub mod error;
pub mod matches_repo;
pub mod models;
pub mod players_repo;
pub mod unlocks_repo;

pub use error::StoreError;
