// Assembles the {unit, parents, children} view of an org unit from its
// nested-set chain.
use serde::Serialize;
use serde_json::{json, Value};
use sqlx::PgPool;

use crate::chain::{self, ChainEntry};
use crate::database::models::org_unit::OrgUnit;
use crate::database::org_units;
use crate::error::ApiError;

#[derive(Debug, Serialize)]
pub struct UnitChainResponse {
    pub unit: Value,
    pub parents: Vec<ChainEntry>,
    pub children: Vec<ChainEntry>,
}

/// Chain view of a unit: ancestors flat, descendants nested by type depth.
pub async fn unit_with_chain(pool: &PgPool, unit: &OrgUnit) -> Result<UnitChainResponse, ApiError> {
    let chain_rows = org_units::fetch_chain(pool, unit).await?;
    let split = chain::resolve(unit, &chain_rows)?;

    Ok(UnitChainResponse {
        unit: to_value(unit)?,
        parents: split.parents,
        children: split.children,
    })
}

/// Chain view plus the unit's members and offices, for the public code route.
pub async fn unit_with_chain_and_relations(
    pool: &PgPool,
    unit: &OrgUnit,
) -> Result<UnitChainResponse, ApiError> {
    let mut response = unit_with_chain(pool, unit).await?;

    let users = org_units::users_for_unit(pool, unit.id).await?;
    let offices = org_units::offices_for_unit(pool, unit.id).await?;
    response.unit["users"] = json!(users);
    response.unit["offices"] = json!(offices);

    Ok(response)
}

fn to_value(unit: &OrgUnit) -> Result<Value, ApiError> {
    serde_json::to_value(unit).map_err(|e| {
        tracing::error!("Failed to serialize org unit {}: {}", unit.id, e);
        ApiError::internal_server_error("Failed to format response")
    })
}
