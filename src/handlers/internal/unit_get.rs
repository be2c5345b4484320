use axum::extract::Path;

use crate::database::{org_units, DatabaseManager};
use crate::error::ApiError;
use crate::middleware::response::{success, ApiResult};
use crate::services::org_unit_service::{self, UnitChainResponse};

/// GET /org-units/internal/:id - chain lookup by numeric id for other
/// services. No relations are attached.
pub async fn unit_get(Path(id): Path<String>) -> ApiResult<UnitChainResponse> {
    let id: i32 = id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid org id"))?;

    let pool = DatabaseManager::main_pool().await?;
    let unit = org_units::fetch_by_id(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Org unit not found"))?;

    let response = org_unit_service::unit_with_chain(&pool, &unit).await?;
    success(response)
}
