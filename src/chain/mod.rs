// Chain reshaping core: splits a nested-set ancestor/descendant chain into
// parents and children, then nests the children by organizational type depth.
use serde::Serialize;
use thiserror::Error;

use crate::database::models::org_unit::OrgUnit;

/// Canonical organizational type hierarchy, outermost to innermost.
/// Must stay consistent with the `type` values the persistence layer accepts.
pub const TYPE_ORDER: [&str; 4] = ["Nation", "Region", "Domain", "Venue"];

/// Depth of a type within the hierarchy (0 = outermost). `None` for types
/// outside the canonical list.
pub fn depth_of(unit_type: &str) -> Option<usize> {
    TYPE_ORDER.iter().position(|t| *t == unit_type)
}

#[derive(Debug, Error)]
pub enum ChainError {
    #[error("unknown org unit type '{unit_type}' on unit {id} ({code})")]
    UnknownType {
        id: i32,
        code: String,
        unit_type: String,
    },
}

/// A chain node as exposed to callers: the unit's public attributes plus a
/// nested `children` forest. Nested-set bounds never appear here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainEntry {
    pub id: i32,
    pub name: String,
    pub code: String,
    #[serde(rename = "type")]
    pub unit_type: String,
    pub venue_type: Option<String>,
    pub location: Option<String>,
    pub def_doc: Option<String>,
    pub website: Option<String>,
    pub children: Vec<ChainEntry>,
}

impl From<&OrgUnit> for ChainEntry {
    fn from(unit: &OrgUnit) -> Self {
        Self {
            id: unit.id,
            name: unit.name.clone(),
            code: unit.code.clone(),
            unit_type: unit.unit_type.clone(),
            venue_type: unit.venue_type.clone(),
            location: unit.location.clone(),
            def_doc: unit.def_doc.clone(),
            website: unit.website.clone(),
            children: Vec::new(),
        }
    }
}

/// Result of partitioning a chain around a focal unit.
#[derive(Debug, Default, Serialize)]
pub struct ChainSplit {
    pub parents: Vec<ChainEntry>,
    pub children: Vec<ChainEntry>,
}

/// Partition `chain` into ancestors and descendants of `focal`.
///
/// A node is a parent iff its `lft` is below the focal unit's; the focal
/// unit itself is excluded from both sides. Children are sorted by
/// ascending `lft` here rather than trusting the upstream query order,
/// since `sort_chain` depends on it.
pub fn split(focal: &OrgUnit, chain: &[OrgUnit]) -> ChainSplit {
    let left = focal.lft;
    let mut parents = Vec::new();
    let mut children: Vec<&OrgUnit> = Vec::new();

    for unit in chain {
        if unit.id == focal.id {
            continue;
        }
        if unit.lft < left {
            parents.push(ChainEntry::from(unit));
        } else {
            children.push(unit);
        }
    }

    children.sort_by_key(|u| u.lft);

    ChainSplit {
        parents,
        children: children.into_iter().map(ChainEntry::from).collect(),
    }
}

/// Nest a flat, `lft`-ordered list of descendants into a forest.
///
/// Walks right to left; each node attaches to the nearest preceding node
/// with a strictly shallower type depth. Equal depths stay siblings. Nodes
/// with no shallower predecessor remain at the top level, preserving their
/// relative order.
pub fn sort_chain(units: Vec<ChainEntry>) -> Result<Vec<ChainEntry>, ChainError> {
    if units.len() <= 1 {
        return Ok(units);
    }

    let depths = units
        .iter()
        .map(|u| {
            depth_of(&u.unit_type).ok_or_else(|| ChainError::UnknownType {
                id: u.id,
                code: u.code.clone(),
                unit_type: u.unit_type.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut slots: Vec<Option<ChainEntry>> = units.into_iter().map(Some).collect();
    for i in (1..slots.len()).rev() {
        for u in (0..i).rev() {
            if depths[i] > depths[u] {
                // Indexes below i have not been consumed yet, so both slots
                // are still populated.
                let child = slots[i].take();
                if let (Some(child), Some(parent)) = (child, slots[u].as_mut()) {
                    parent.children.push(child);
                }
                break;
            }
        }
    }

    Ok(slots.into_iter().flatten().collect())
}

/// Split the chain around `focal` and nest the resulting children.
pub fn resolve(focal: &OrgUnit, chain: &[OrgUnit]) -> Result<ChainSplit, ChainError> {
    let mut result = split(focal, chain);
    if result.children.len() > 1 {
        result.children = sort_chain(result.children)?;
    }
    Ok(result)
}
