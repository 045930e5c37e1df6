//! Pre-authored team compositions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{BoardPosition, CompUnit};

/// A complete team composition recommended as a cohesive strategy.
///
/// Comps are authored externally and loaded through the dataset
/// pipeline; once validated they are immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Comp {
    /// Unique identifier, e.g. `"set16-ahri-reroll"`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Set or season the comp belongs to, e.g. `"16"`.
    pub set: String,
    /// Patch the comp was authored against, e.g. `"14.24"`.
    pub patch: String,
    /// Free-form strategy description.
    pub description: String,
    /// Free-form tags, e.g. `"Reroll"`, `"AP"`, `"Late Game"`.
    pub tags: Vec<String>,
    /// Unit slots; at least one, each champion at most once.
    pub units: Vec<CompUnit>,
    /// Board placement; at least one cell, no cell used twice.
    pub positioning: Vec<BoardPosition>,
}

impl Comp {
    /// Iterate over the comp's carry-role units.
    pub fn core_units(&self) -> impl Iterator<Item = &CompUnit> {
        self.units.iter().filter(|u| u.role.is_core())
    }

    /// Iterate over the comp's non-carry units.
    pub fn optional_units(&self) -> impl Iterator<Item = &CompUnit> {
        self.units.iter().filter(|u| !u.role.is_core())
    }

    /// Whether any of the comp's tags appears in `wanted` (exact match).
    #[must_use]
    pub fn has_any_tag(&self, wanted: &[String]) -> bool {
        self.tags.iter().any(|tag| wanted.contains(tag))
    }
}

#[cfg(test)]
mod tests {
    use crate::UnitRole;
    use crate::test_support::sample_comp;

    #[test]
    fn core_units_are_the_carries() {
        let comp = sample_comp();
        assert!(comp.core_units().all(|u| u.role == UnitRole::Carry));
        assert!(comp.optional_units().all(|u| u.role != UnitRole::Carry));
        assert_eq!(
            comp.core_units().count() + comp.optional_units().count(),
            comp.units.len()
        );
    }

    #[test]
    fn tag_match_is_exact() {
        let comp = sample_comp();
        assert!(comp.has_any_tag(&["Reroll".to_owned()]));
        assert!(!comp.has_any_tag(&["reroll".to_owned()]));
    }
}
