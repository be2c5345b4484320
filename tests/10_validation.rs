use anyhow::Result;

use orgtree_api::validation::OrgUnitUpdate;

// Body-level behavior of PUT /org-units/:id payloads, exercised through the
// library surface.

#[test]
fn full_valid_payload_passes() -> Result<()> {
    let update: OrgUnitUpdate = serde_json::from_value(serde_json::json!({
        "name": "Domain of the Lake",
        "code": "ME-012",
        "type": "Domain",
        "location": "Portland, ME",
        "website": "https://example.org/me-012"
    }))?;

    assert!(!update.is_empty());
    assert!(update.validate().is_ok());
    Ok(())
}

#[test]
fn validation_failure_reports_every_bad_field() -> Result<()> {
    let update: OrgUnitUpdate = serde_json::from_value(serde_json::json!({
        "name": "",
        "type": "Galaxy",
        "website": "::not-a-url::"
    }))?;

    let err = update.validate().unwrap_err();
    let body = err.to_json();
    assert_eq!(body["code"], "VALIDATION_ERROR");
    let fields = body["field_errors"].as_object().expect("field_errors object");
    assert!(fields.contains_key("name"));
    assert!(fields.contains_key("type"));
    assert!(fields.contains_key("website"));
    Ok(())
}

#[test]
fn empty_object_counts_as_no_data() -> Result<()> {
    let update: OrgUnitUpdate = serde_json::from_str("{}")?;
    assert!(update.is_empty());
    Ok(())
}
