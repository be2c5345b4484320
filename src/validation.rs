// Update-payload validation for org units.
use serde::Deserialize;
use std::collections::HashMap;
use url::Url;

use crate::chain::depth_of;
use crate::error::ApiError;

/// Updatable attribute set for PUT /org-units/:id. Absent fields are left
/// untouched; unknown fields in the body are ignored.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct OrgUnitUpdate {
    pub name: Option<String>,
    pub code: Option<String>,
    #[serde(rename = "type")]
    pub unit_type: Option<String>,
    pub venue_type: Option<String>,
    pub location: Option<String>,
    pub def_doc: Option<String>,
    pub website: Option<String>,
}

impl OrgUnitUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.code.is_none()
            && self.unit_type.is_none()
            && self.venue_type.is_none()
            && self.location.is_none()
            && self.def_doc.is_none()
            && self.website.is_none()
    }

    /// Field-level constraints: non-empty name/code, well-formed website
    /// URL, type from the canonical hierarchy.
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut field_errors: HashMap<String, String> = HashMap::new();

        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                field_errors.insert("name".to_string(), "must not be empty".to_string());
            }
        }
        if let Some(code) = &self.code {
            if code.trim().is_empty() {
                field_errors.insert("code".to_string(), "must not be empty".to_string());
            }
        }
        if let Some(website) = &self.website {
            if Url::parse(website).is_err() {
                field_errors.insert("website".to_string(), "must be a valid URL".to_string());
            }
        }
        if let Some(unit_type) = &self.unit_type {
            if depth_of(unit_type).is_none() {
                field_errors.insert(
                    "type".to_string(),
                    "must be one of Nation, Region, Domain, Venue".to_string(),
                );
            }
        }

        if field_errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::validation_error(
                "Invalid data provided",
                Some(field_errors),
            ))
        }
    }
}
