use anyhow::Result;

use orgtree_api::chain::{resolve, sort_chain, split, ChainEntry};
use orgtree_api::database::models::org_unit::OrgUnit;

// End-to-end behavior of the chain reshaping pipeline: partitioning a
// nested-set chain around a focal unit and nesting the descendants by
// organizational type depth.

fn unit(id: i32, code: &str, unit_type: &str, lft: i32, rgt: i32) -> OrgUnit {
    OrgUnit {
        id,
        name: format!("Unit {}", code),
        code: code.to_string(),
        unit_type: unit_type.to_string(),
        venue_type: None,
        location: None,
        def_doc: None,
        website: None,
        lft,
        rgt,
    }
}

fn entry(unit: &OrgUnit) -> ChainEntry {
    ChainEntry::from(unit)
}

#[test]
fn us_subtree_scenario() -> Result<()> {
    // Focal code="US" at lft=10: one Nation ancestor, a Region holding a
    // Venue, and a sibling Region.
    let focal = unit(100, "US", "Region", 10, 35);
    let chain = vec![
        unit(1, "NA", "Nation", 1, 50),
        unit(11, "US-R1", "Domain", 11, 20),
        unit(12, "US-R1-V1", "Venue", 12, 15),
        unit(21, "US-R2", "Domain", 21, 30),
    ];

    let result = resolve(&focal, &chain)?;

    assert_eq!(result.parents.len(), 1);
    assert_eq!(result.parents[0].code, "NA");

    let top: Vec<&str> = result.children.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(top, vec!["US-R1", "US-R2"]);
    assert_eq!(result.children[0].children.len(), 1);
    assert_eq!(result.children[0].children[0].code, "US-R1-V1");
    assert!(result.children[1].children.is_empty());
    Ok(())
}

#[test]
fn response_json_never_leaks_bounds() -> Result<()> {
    let focal = unit(100, "US", "Region", 10, 35);
    let chain = vec![
        unit(1, "NA", "Nation", 1, 50),
        unit(11, "US-R1", "Domain", 11, 20),
    ];

    let result = resolve(&focal, &chain)?;
    let json = serde_json::to_value(&result)?;

    fn assert_no_bounds(value: &serde_json::Value) {
        if let Some(obj) = value.as_object() {
            assert!(obj.get("lft").is_none(), "lft leaked: {}", value);
            assert!(obj.get("rgt").is_none(), "rgt leaked: {}", value);
            for v in obj.values() {
                assert_no_bounds(v);
            }
        } else if let Some(arr) = value.as_array() {
            for v in arr {
                assert_no_bounds(v);
            }
        }
    }
    assert_no_bounds(&json);
    Ok(())
}

#[test]
fn unordered_chain_input_still_nests_correctly() -> Result<()> {
    // Upstream order is scrambled; split re-sorts by lft before nesting.
    let focal = unit(100, "US", "Region", 10, 35);
    let chain = vec![
        unit(21, "US-R2", "Domain", 21, 30),
        unit(12, "US-R1-V1", "Venue", 12, 15),
        unit(1, "NA", "Nation", 1, 50),
        unit(11, "US-R1", "Domain", 11, 20),
    ];

    let result = resolve(&focal, &chain)?;
    let top: Vec<&str> = result.children.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(top, vec!["US-R1", "US-R2"]);
    assert_eq!(result.children[0].children[0].code, "US-R1-V1");
    Ok(())
}

#[test]
fn focal_with_no_relatives_yields_empty_sides() -> Result<()> {
    let focal = unit(100, "US", "Region", 10, 35);
    let result = resolve(&focal, &[])?;
    assert!(result.parents.is_empty());
    assert!(result.children.is_empty());
    Ok(())
}

#[test]
fn corrupt_type_surfaces_as_error_not_silent_nesting() {
    let units = vec![
        entry(&unit(11, "US-R1", "Domain", 11, 20)),
        entry(&unit(12, "XX", "Galaxy", 12, 15)),
    ];
    let err = sort_chain(units).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("Galaxy"), "message should name the type: {}", msg);
    assert!(msg.contains("XX"), "message should name the unit: {}", msg);
}

#[test]
fn partition_is_total_over_non_focal_nodes() -> Result<()> {
    let focal = unit(100, "US", "Region", 10, 35);
    let chain = vec![
        focal.clone(),
        unit(1, "NA", "Nation", 1, 50),
        unit(11, "US-R1", "Domain", 11, 20),
        unit(21, "US-R2", "Domain", 21, 30),
    ];

    let result = split(&focal, &chain);
    assert_eq!(result.parents.len() + result.children.len(), chain.len() - 1);
    for node in chain.iter().filter(|n| n.id != focal.id) {
        let in_parents = result.parents.iter().any(|p| p.id == node.id);
        let in_children = result.children.iter().any(|c| c.id == node.id);
        assert!(
            in_parents ^ in_children,
            "node {} must land on exactly one side",
            node.code
        );
    }
    Ok(())
}
