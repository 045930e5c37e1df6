//! Champions and items: the two record kinds a comp may reference.
//!
//! Both are immutable once loaded. Field names on the wire are
//! camelCase to match the external JSON document.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cheapest purchasable champion tier.
pub const MIN_CHAMPION_COST: u8 = 1;
/// Most expensive purchasable champion tier.
pub const MAX_CHAMPION_COST: u8 = 5;

/// A purchasable champion.
///
/// # Examples
///
/// ```
/// use compsage_core::Champion;
///
/// let champ = Champion::new("ahri", "Ahri", 4, ["Mage", "Spirit"]);
/// assert_eq!(champ.cost, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Champion {
    /// Unique identifier, e.g. `"ahri"`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Shop cost in the inclusive range `1..=5`.
    pub cost: u8,
    /// Trait names in declaration order.
    pub traits: Vec<String>,
    /// Optional explicit CDN slug for sprite resolution; display hint only.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub cdn_slug: Option<String>,
}

impl Champion {
    /// Construct a champion record.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        cost: u8,
        traits: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cost,
            traits: traits.into_iter().map(Into::into).collect(),
            cdn_slug: None,
        }
    }
}

/// A completed item a unit may equip.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Item {
    /// Unique identifier, e.g. `"infinity-edge"`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Optional explicit CDN slug for sprite resolution; display hint only.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub cdn_slug: Option<String>,
}

impl Item {
    /// Construct an item record.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cdn_slug: None,
        }
    }
}
