use serde::Serialize;
use sqlx::FromRow;

/// Raw office row joined with its holder's user columns.
#[derive(Debug, Clone, FromRow)]
pub struct OfficeRow {
    pub id: i32,
    pub name: String,
    #[sqlx(rename = "type")]
    pub office_type: String,
    pub user_id: Option<i32>,
    pub membership_number: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Office as exposed in responses: holder columns folded into a nested
/// `user` object, parent linkage stripped.
#[derive(Debug, Clone, Serialize)]
pub struct Office {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub office_type: String,
    pub user: Option<OfficeHolder>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OfficeHolder {
    pub user_id: i32,
    pub membership_number: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl From<OfficeRow> for Office {
    fn from(row: OfficeRow) -> Self {
        let user = row.user_id.map(|user_id| OfficeHolder {
            user_id,
            membership_number: row.membership_number,
            first_name: row.first_name,
            last_name: row.last_name,
        });
        Self {
            id: row.id,
            name: row.name,
            office_type: row.office_type,
            user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vacant_office_has_no_user() {
        let row = OfficeRow {
            id: 1,
            name: "Coordinator".to_string(),
            office_type: "Primary".to_string(),
            user_id: None,
            membership_number: None,
            first_name: None,
            last_name: None,
        };
        let office = Office::from(row);
        assert!(office.user.is_none());
    }

    #[test]
    fn holder_columns_fold_into_user() {
        let row = OfficeRow {
            id: 2,
            name: "Storyteller".to_string(),
            office_type: "Assistant".to_string(),
            user_id: Some(42),
            membership_number: Some("US2024010042".to_string()),
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
        };
        let office = Office::from(row);
        let user = office.user.clone().expect("holder expected");
        assert_eq!(user.user_id, 42);
        assert_eq!(user.membership_number.as_deref(), Some("US2024010042"));

        let json = serde_json::to_value(&office).unwrap();
        assert!(json.get("parent_org_id").is_none());
        assert!(json.get("membership_number").is_none());
        assert_eq!(json["user"]["first_name"], "Ada");
    }
}
