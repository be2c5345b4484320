pub mod auth;
pub mod network;
pub mod response;

pub use auth::AuthUser;
pub use response::{ApiResponse, ApiResult};
