//! Structural validation of the raw dataset document.
//!
//! `serde` enforces shapes, types, and role-enum membership during
//! parsing; this pass adds the numeric-range and non-empty checks the
//! type system cannot express, collecting every violation rather than
//! stopping at the first. Referential checks come later and only run
//! on structurally sound documents.
#![forbid(unsafe_code)]

use compsage_core::{
    Champion, Comp, Item, MAX_CHAMPION_COST, MIN_CHAMPION_COST,
};
use serde::{Deserialize, Serialize};

use crate::error::SchemaViolation;

/// Top-level shape of the external dataset document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetDocument {
    /// Champion records.
    pub champions: Vec<Champion>,
    /// Item records.
    pub items: Vec<Item>,
    /// Comp records.
    pub comps: Vec<Comp>,
}

/// Collect every structural violation in the document.
#[must_use]
pub fn check_document(document: &DatasetDocument) -> Vec<SchemaViolation> {
    let mut violations = Vec::new();

    for (index, champion) in document.champions.iter().enumerate() {
        check_champion(index, champion, &mut violations);
    }
    for (index, item) in document.items.iter().enumerate() {
        check_item(index, item, &mut violations);
    }
    for (index, comp) in document.comps.iter().enumerate() {
        check_comp(index, comp, &mut violations);
    }

    violations
}

fn require_non_empty(value: &str, path: String, violations: &mut Vec<SchemaViolation>) {
    if value.is_empty() {
        violations.push(SchemaViolation::new(path, "must not be empty"));
    }
}

fn check_champion(index: usize, champion: &Champion, violations: &mut Vec<SchemaViolation>) {
    require_non_empty(&champion.id, format!("champions[{index}].id"), violations);
    require_non_empty(&champion.name, format!("champions[{index}].name"), violations);
    if !(MIN_CHAMPION_COST..=MAX_CHAMPION_COST).contains(&champion.cost) {
        violations.push(SchemaViolation::new(
            format!("champions[{index}].cost"),
            format!(
                "cost {} outside {MIN_CHAMPION_COST}..={MAX_CHAMPION_COST}",
                champion.cost
            ),
        ));
    }
}

fn check_item(index: usize, item: &Item, violations: &mut Vec<SchemaViolation>) {
    require_non_empty(&item.id, format!("items[{index}].id"), violations);
    require_non_empty(&item.name, format!("items[{index}].name"), violations);
}

fn check_comp(index: usize, comp: &Comp, violations: &mut Vec<SchemaViolation>) {
    require_non_empty(&comp.id, format!("comps[{index}].id"), violations);
    require_non_empty(&comp.name, format!("comps[{index}].name"), violations);
    require_non_empty(&comp.set, format!("comps[{index}].set"), violations);
    require_non_empty(&comp.patch, format!("comps[{index}].patch"), violations);

    if comp.units.is_empty() {
        violations.push(SchemaViolation::new(
            format!("comps[{index}].units"),
            "must contain at least one unit",
        ));
    }
    for (unit_index, unit) in comp.units.iter().enumerate() {
        require_non_empty(
            &unit.champion_id,
            format!("comps[{index}].units[{unit_index}].championId"),
            violations,
        );
    }

    if comp.positioning.is_empty() {
        violations.push(SchemaViolation::new(
            format!("comps[{index}].positioning"),
            "must contain at least one position",
        ));
    }
    for (pos_index, position) in comp.positioning.iter().enumerate() {
        require_non_empty(
            &position.champion_id,
            format!("comps[{index}].positioning[{pos_index}].championId"),
            violations,
        );
        if !position.in_bounds() {
            violations.push(SchemaViolation::new(
                format!("comps[{index}].positioning[{pos_index}]"),
                format!("cell ({}, {}) is off the 7x4 board", position.x, position.y),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compsage_core::test_support::{sample_champions, sample_comp, sample_items};

    fn valid_document() -> DatasetDocument {
        DatasetDocument {
            champions: sample_champions(),
            items: sample_items(),
            comps: vec![sample_comp()],
        }
    }

    #[test]
    fn valid_document_has_no_violations() {
        assert!(check_document(&valid_document()).is_empty());
    }

    #[test]
    fn violations_are_collected_not_short_circuited() {
        let mut document = valid_document();
        if let Some(champion) = document.champions.first_mut() {
            champion.id.clear();
            champion.cost = 9;
        }
        if let Some(position) = document
            .comps
            .first_mut()
            .and_then(|comp| comp.positioning.first_mut())
        {
            position.x = 7;
        }

        let violations = check_document(&document);
        let paths: Vec<&str> = violations.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "champions[0].id",
                "champions[0].cost",
                "comps[0].positioning[0]"
            ]
        );
    }

    #[test]
    fn empty_unit_list_is_a_violation() {
        let mut document = valid_document();
        if let Some(comp) = document.comps.first_mut() {
            comp.units.clear();
        }
        let violations = check_document(&document);
        assert!(violations.iter().any(|v| v.path == "comps[0].units"));
    }
}
