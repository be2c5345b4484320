use serde::Serialize;
use sqlx::FromRow;

/// Member summary attached to an org unit response. The member's own org
/// assignment column is deliberately not selected.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserSummary {
    pub id: i32,
    pub membership_number: Option<String>,
    pub first_name: String,
    pub last_name: String,
}
