// Authorization boundary. Real role resolution (offices held over a unit)
// lives in the membership service; the API only enforces the access level
// carried in the token.
use crate::database::models::org_unit::OrgUnit;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

pub const ORG_UPDATE: &str = "org_update";

/// Check that `user` may perform `role` over `unit`.
pub fn has_over_unit(user: &AuthUser, unit: &OrgUnit, role: &str) -> Result<(), ApiError> {
    let allowed = match user.access.as_str() {
        "root" | "full" => true,
        "edit" => role == ORG_UPDATE,
        _ => false,
    };

    if allowed {
        Ok(())
    } else {
        tracing::warn!(
            "User {} (access '{}') denied '{}' on unit {}",
            user.user,
            user.access,
            role,
            unit.code
        );
        Err(ApiError::forbidden("Authentication failed"))
    }
}
