//! The user's owned champions and items.
//!
//! An [`Inventory`] is the sole input driving personalized scoring.
//! Membership tests are set lookups so scoring stays linear in comp
//! size.

use std::collections::HashSet;

/// Champion and item ids the user currently possesses.
///
/// # Examples
/// ```
/// use compsage_core::Inventory;
///
/// let inventory = Inventory::new()
///     .with_champion("ahri")
///     .with_item("rabadons-cap");
/// assert!(inventory.owns_champion("ahri"));
/// assert!(!inventory.owns_item("infinity-edge"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Inventory {
    champions: HashSet<String>,
    items: HashSet<String>,
}

impl Inventory {
    /// Construct an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an inventory from id lists, e.g. request parameters.
    pub fn from_ids<C, I, CId, IId>(champion_ids: C, item_ids: I) -> Self
    where
        C: IntoIterator<Item = CId>,
        I: IntoIterator<Item = IId>,
        CId: Into<String>,
        IId: Into<String>,
    {
        Self {
            champions: champion_ids.into_iter().map(Into::into).collect(),
            items: item_ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Add an owned champion while returning `self` for chaining.
    #[must_use]
    pub fn with_champion(mut self, id: impl Into<String>) -> Self {
        self.champions.insert(id.into());
        self
    }

    /// Add an owned item while returning `self` for chaining.
    #[must_use]
    pub fn with_item(mut self, id: impl Into<String>) -> Self {
        self.items.insert(id.into());
        self
    }

    /// Whether the user owns the champion.
    #[must_use]
    pub fn owns_champion(&self, id: &str) -> bool {
        self.champions.contains(id)
    }

    /// Whether the user owns the item.
    #[must_use]
    pub fn owns_item(&self, id: &str) -> bool {
        self.items.contains(id)
    }

    /// Number of owned champions.
    #[must_use]
    pub fn champion_count(&self) -> usize {
        self.champions.len()
    }

    /// Number of owned items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Whether the user has selected nothing at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.champions.is_empty() && self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_inventory_owns_nothing() {
        let inventory = Inventory::new();
        assert!(inventory.is_empty());
        assert!(!inventory.owns_champion("ahri"));
        assert!(!inventory.owns_item("infinity-edge"));
    }

    #[test]
    fn from_ids_deduplicates() {
        let inventory = Inventory::from_ids(["ahri", "ahri"], ["cap"]);
        assert_eq!(inventory.champion_count(), 1);
        assert_eq!(inventory.item_count(), 1);
        assert!(!inventory.is_empty());
    }
}
