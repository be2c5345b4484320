pub mod manager;
pub mod models;
pub mod org_units;

pub use manager::{DatabaseError, DatabaseManager};
