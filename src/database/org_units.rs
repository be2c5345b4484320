// Org unit queries. All queries are runtime-built with bound parameters.
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::database::manager::DatabaseError;
use crate::database::models::office::{Office, OfficeRow};
use crate::database::models::org_unit::OrgUnit;
use crate::database::models::user::UserSummary;
use crate::validation::OrgUnitUpdate;

const UNIT_COLUMNS: &str =
    r#"id, name, code, "type", venue_type, location, def_doc, website, lft, rgt"#;

/// Fetch a unit by code. Codes are stored uppercase; the comparison is
/// case-insensitive on our side so callers can pass the raw path segment.
pub async fn fetch_by_code(pool: &PgPool, code: &str) -> Result<Option<OrgUnit>, DatabaseError> {
    let sql = format!("SELECT {} FROM org_units WHERE code = $1", UNIT_COLUMNS);
    let unit = sqlx::query_as::<_, OrgUnit>(&sql)
        .bind(code.to_uppercase())
        .fetch_optional(pool)
        .await?;
    Ok(unit)
}

pub async fn fetch_by_id(pool: &PgPool, id: i32) -> Result<Option<OrgUnit>, DatabaseError> {
    let sql = format!("SELECT {} FROM org_units WHERE id = $1", UNIT_COLUMNS);
    let unit = sqlx::query_as::<_, OrgUnit>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(unit)
}

/// Fetch the full ancestor/descendant chain of a unit, ordered by `lft`.
///
/// Ancestors strictly contain the focal interval; descendants are strictly
/// contained by it. The focal unit itself matches neither predicate.
pub async fn fetch_chain(pool: &PgPool, focal: &OrgUnit) -> Result<Vec<OrgUnit>, DatabaseError> {
    let sql = format!(
        "SELECT {} FROM org_units \
         WHERE (lft < $1 AND rgt > $2) OR (lft > $1 AND rgt < $2) \
         ORDER BY lft",
        UNIT_COLUMNS
    );
    let chain = sqlx::query_as::<_, OrgUnit>(&sql)
        .bind(focal.lft)
        .bind(focal.rgt)
        .fetch_all(pool)
        .await?;
    Ok(chain)
}

/// Members assigned to the unit.
pub async fn users_for_unit(pool: &PgPool, unit_id: i32) -> Result<Vec<UserSummary>, DatabaseError> {
    let users = sqlx::query_as::<_, UserSummary>(
        "SELECT id, membership_number, first_name, last_name \
         FROM users WHERE org_unit = $1 \
         ORDER BY last_name, first_name",
    )
    .bind(unit_id)
    .fetch_all(pool)
    .await?;
    Ok(users)
}

/// Offices attached to the unit, with holder columns joined in and folded
/// into each office's nested user object.
pub async fn offices_for_unit(pool: &PgPool, unit_id: i32) -> Result<Vec<Office>, DatabaseError> {
    let rows = sqlx::query_as::<_, OfficeRow>(
        r#"SELECT o.id, o.name, o."type", o.user_id,
                  u.membership_number, u.first_name, u.last_name
           FROM offices o
           LEFT JOIN users u ON o.user_id = u.id
           WHERE o.parent_org_id = $1
           ORDER BY o.id"#,
    )
    .bind(unit_id)
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(Office::from).collect())
}

/// Apply a validated attribute update and return the fresh row.
/// Callers guarantee at least one field is present.
pub async fn update_attributes(
    pool: &PgPool,
    id: i32,
    update: &OrgUnitUpdate,
) -> Result<OrgUnit, DatabaseError> {
    let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE org_units SET ");
    {
        let mut sets = qb.separated(", ");
        if let Some(v) = &update.name {
            sets.push("name = ").push_bind_unseparated(v);
        }
        if let Some(v) = &update.code {
            sets.push("code = ").push_bind_unseparated(v.to_uppercase());
        }
        if let Some(v) = &update.unit_type {
            sets.push("\"type\" = ").push_bind_unseparated(v);
        }
        if let Some(v) = &update.venue_type {
            sets.push("venue_type = ").push_bind_unseparated(v);
        }
        if let Some(v) = &update.location {
            sets.push("location = ").push_bind_unseparated(v);
        }
        if let Some(v) = &update.def_doc {
            sets.push("def_doc = ").push_bind_unseparated(v);
        }
        if let Some(v) = &update.website {
            sets.push("website = ").push_bind_unseparated(v);
        }
    }
    qb.push(" WHERE id = ").push_bind(id);
    qb.push(" RETURNING ").push(UNIT_COLUMNS);

    match qb.build_query_as::<OrgUnit>().fetch_one(pool).await {
        Ok(unit) => Ok(unit),
        Err(sqlx::Error::RowNotFound) => Err(DatabaseError::NotFound("Org unit not found".to_string())),
        Err(other) => Err(other.into()),
    }
}
