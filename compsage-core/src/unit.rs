//! Unit roles and per-comp unit entries.
//!
//! [`UnitRole`] offers compile-time safety for role comparisons; the
//! lowercase wire form matches the external JSON document.
//!
//! # Examples
//! ```
//! use compsage_core::UnitRole;
//!
//! assert_eq!(UnitRole::Carry.as_str(), "carry");
//! assert_eq!(UnitRole::Tank.to_string(), "tank");
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Role a unit plays within a comp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum UnitRole {
    /// Primary damage dealer; treated as "core" for scoring.
    Carry,
    /// Frontline damage soak.
    Tank,
    /// Utility and enabler units.
    Support,
    /// Interchangeable filler whose exact identity matters less.
    Flex,
}

impl UnitRole {
    /// Return the role as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use compsage_core::UnitRole;
    ///
    /// assert_eq!(UnitRole::Flex.as_str(), "flex");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Carry => "carry",
            Self::Tank => "tank",
            Self::Support => "support",
            Self::Flex => "flex",
        }
    }

    /// Whether the role counts as a core unit for scoring.
    #[must_use]
    pub const fn is_core(self) -> bool {
        matches!(self, Self::Carry)
    }

    /// Whether the role counts towards the support-items score.
    #[must_use]
    pub const fn holds_support_items(self) -> bool {
        matches!(self, Self::Tank | Self::Support)
    }
}

impl std::fmt::Display for UnitRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UnitRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "carry" => Ok(Self::Carry),
            "tank" => Ok(Self::Tank),
            "support" => Ok(Self::Support),
            "flex" => Ok(Self::Flex),
            _ => Err(format!("unknown unit role '{s}'")),
        }
    }
}

/// One unit slot inside a comp.
///
/// References a [`Champion`](crate::Champion) by id; item lists hold
/// [`Item`](crate::Item) ids in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CompUnit {
    /// Champion this slot is built around.
    pub champion_id: String,
    /// Role the unit plays in the comp.
    pub role: UnitRole,
    /// Item ids the unit wants, in priority order; may be empty.
    pub recommended_items: Vec<String>,
    /// Situational item ids; absent on the wire deserialises to empty.
    #[cfg_attr(feature = "serde", serde(default))]
    pub optional_items: Vec<String>,
}

impl CompUnit {
    /// Construct a unit with no items.
    pub fn new(champion_id: impl Into<String>, role: UnitRole) -> Self {
        Self {
            champion_id: champion_id.into(),
            role,
            recommended_items: Vec::new(),
            optional_items: Vec::new(),
        }
    }

    /// Add a recommended item while returning `self` for chaining.
    #[must_use]
    pub fn with_recommended_item(mut self, item_id: impl Into<String>) -> Self {
        self.recommended_items.push(item_id.into());
        self
    }

    /// Add an optional item while returning `self` for chaining.
    #[must_use]
    pub fn with_optional_item(mut self, item_id: impl Into<String>) -> Self {
        self.optional_items.push(item_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("carry", UnitRole::Carry)]
    #[case("TANK", UnitRole::Tank)]
    #[case("Support", UnitRole::Support)]
    #[case("flex", UnitRole::Flex)]
    fn parsing_is_case_insensitive(#[case] input: &str, #[case] expected: UnitRole) {
        assert_eq!(UnitRole::from_str(input).expect("role should parse"), expected);
    }

    #[test]
    fn parsing_rejects_unknown() {
        let err = UnitRole::from_str("jungler").expect_err("unknown role should fail");
        assert!(err.contains("unknown unit role"));
    }

    #[test]
    fn only_carry_is_core() {
        assert!(UnitRole::Carry.is_core());
        assert!(!UnitRole::Tank.is_core());
        assert!(UnitRole::Tank.holds_support_items());
        assert!(UnitRole::Support.holds_support_items());
        assert!(!UnitRole::Flex.holds_support_items());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_optional_items_deserialises_empty() {
        let json = r#"{"championId":"ahri","role":"carry","recommendedItems":["cap"]}"#;
        let unit: CompUnit = serde_json::from_str(json).expect("unit should deserialise");
        assert!(unit.optional_items.is_empty());
    }
}
