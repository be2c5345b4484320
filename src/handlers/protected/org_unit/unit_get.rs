use axum::extract::Path;

use crate::database::{org_units, DatabaseManager};
use crate::error::ApiError;
use crate::middleware::response::{success, ApiResult};
use crate::services::org_unit_service::{self, UnitChainResponse};

use super::is_unit_code;

/// GET /org-units/:code - unit with members, offices and its hierarchy chain
pub async fn unit_get(Path(code): Path<String>) -> ApiResult<UnitChainResponse> {
    // Codes that don't fit the route shape would never match a unit; treat
    // them the same as a miss.
    if !is_unit_code(&code) {
        return Err(ApiError::not_found("Org unit not found"));
    }

    let pool = DatabaseManager::main_pool().await?;
    let unit = org_units::fetch_by_code(&pool, &code)
        .await?
        .ok_or_else(|| ApiError::not_found("Org unit not found"))?;

    let response = org_unit_service::unit_with_chain_and_relations(&pool, &unit).await?;
    success(response)
}
