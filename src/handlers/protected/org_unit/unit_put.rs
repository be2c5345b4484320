use axum::{extract::Path, Extension, Json};

use crate::database::models::org_unit::OrgUnit;
use crate::database::{org_units, DatabaseManager};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::{success, ApiResult};
use crate::permissions;
use crate::validation::OrgUnitUpdate;

/// PUT /org-units/:id - update a unit's attributes. `:id` may be a numeric
/// id or a unit code.
pub async fn unit_put(
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(update): Json<OrgUnitUpdate>,
) -> ApiResult<OrgUnit> {
    if update.is_empty() {
        return Err(ApiError::bad_request("No data provided"));
    }

    let pool = DatabaseManager::main_pool().await?;
    let unit = match id.parse::<i32>() {
        Ok(num) => org_units::fetch_by_id(&pool, num).await?,
        Err(_) => org_units::fetch_by_code(&pool, &id).await?,
    }
    .ok_or_else(|| ApiError::not_found("Org unit not found"))?;

    permissions::has_over_unit(&auth, &unit, permissions::ORG_UPDATE)?;
    update.validate()?;

    let updated = org_units::update_attributes(&pool, unit.id, &update).await?;
    success(updated)
}
