use serde::Serialize;
use sqlx::FromRow;

/// One organizational unit in the nested-set tree.
///
/// `lft`/`rgt` define subtree membership: A is a descendant of B iff
/// `B.lft < A.lft < A.rgt < B.rgt`. The bounds are query plumbing only
/// and are never serialized into responses.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OrgUnit {
    pub id: i32,
    pub name: String,
    pub code: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub unit_type: String,
    pub venue_type: Option<String>,
    pub location: Option<String>,
    pub def_doc: Option<String>,
    pub website: Option<String>,
    #[serde(skip_serializing)]
    pub lft: i32,
    #[serde(skip_serializing)]
    pub rgt: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialization_hides_bounds_and_renames_type() {
        let unit = OrgUnit {
            id: 1,
            name: "United States".to_string(),
            code: "US".to_string(),
            unit_type: "Nation".to_string(),
            venue_type: None,
            location: None,
            def_doc: None,
            website: Some("https://example.com".to_string()),
            lft: 1,
            rgt: 100,
        };
        let json = serde_json::to_value(&unit).unwrap();
        assert_eq!(json["type"], "Nation");
        assert!(json.get("lft").is_none());
        assert!(json.get("rgt").is_none());
        assert!(json.get("unit_type").is_none());
    }
}
