//! Output and filter types for the recommendation engine.
#![forbid(unsafe_code)]

use compsage_core::Comp;
use serde::{Deserialize, Serialize};

/// Coarse confidence bucket derived from score thresholds.
///
/// Used by presentation layers for display emphasis only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Below the minimum-recommend threshold.
    Low,
    /// At or above the minimum-recommend threshold.
    Medium,
    /// At or above the high-confidence threshold.
    High,
    /// At or above the near-perfect threshold.
    Perfect,
}

impl Confidence {
    /// Return the tier as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Perfect => "perfect",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bonuses awarded for a single comp/inventory pairing.
///
/// The bonus set is closed, so this is a fixed struct rather than a
/// dynamic map; `None` means the bonus was not awarded.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BonusAwards {
    /// Every carry-role unit is owned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_core_units: Option<f32>,
    /// At least one carry has every one of its recommended items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_carry_items: Option<f32>,
    /// The comp's mean champion cost is low.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_efficiency: Option<f32>,
}

impl BonusAwards {
    /// Sum of the awarded bonuses.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "bonuses are additive by design")]
    pub fn total(self) -> f32 {
        self.all_core_units.unwrap_or(0.0_f32)
            + self.all_carry_items.unwrap_or(0.0_f32)
            + self.cost_efficiency.unwrap_or(0.0_f32)
    }
}

/// Per-component score breakdown for one comp against one inventory.
///
/// A pure value, recomputed on demand and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Weighted score from owned carry-role units.
    pub core_units_score: f32,
    /// Weighted score from owned non-carry units.
    pub optional_units_score: f32,
    /// Weighted score from owned carry items.
    pub carry_items_score: f32,
    /// Weighted score from owned tank/support items.
    pub support_items_score: f32,
    /// Which bonuses were awarded, and their values.
    pub bonuses: BonusAwards,
    /// Sum of the awarded bonuses.
    pub total_bonus: f32,
}

impl ScoreBreakdown {
    /// Sum of the four weighted components, before bonuses.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the base score is the sum of the weighted components"
    )]
    pub const fn base_score(&self) -> f32 {
        self.core_units_score
            + self.optional_units_score
            + self.carry_items_score
            + self.support_items_score
    }
}

/// A comp augmented with its personalized score and diagnostics.
///
/// Derived per query against one inventory; never cache across
/// different inventories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompRecommendation {
    /// The scored comp.
    #[serde(flatten)]
    pub comp: Comp,
    /// Final score in `0..=100`, rounded.
    pub score: u8,
    /// Mirrors `score`; kept for display call sites.
    pub match_percentage: u8,
    /// Component-level breakdown behind the score.
    pub breakdown: ScoreBreakdown,
    /// Human-readable reasons, joined with a visible separator.
    pub explanation: String,
    /// Confidence tier derived from the score.
    pub confidence: Confidence,
    /// Champion ids of units the user does not own, in comp order.
    pub missing_units: Vec<String>,
    /// Recommended item ids the user does not own, de-duplicated in
    /// first-seen order. Optional items are excluded.
    pub missing_items: Vec<String>,
}

/// A comp scored by the coarse legacy scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredComp {
    /// The scored comp.
    #[serde(flatten)]
    pub comp: Comp,
    /// Coarse score in `0..=100`.
    pub score: u8,
    /// Mirrors `score`.
    pub match_percentage: u8,
}

/// Filter options for [`RecommendationEngine::recommendations`].
///
/// All fields are optional; the defaults recommend everything above
/// the configured minimum-recommend threshold.
///
/// [`RecommendationEngine::recommendations`]: crate::RecommendationEngine::recommendations
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecommendationFilters {
    /// Minimum score threshold; `None` uses the configured
    /// minimum-recommend threshold, `Some(0.0)` disables filtering.
    pub min_score: Option<f32>,
    /// Keep only comps whose units are all owned.
    pub owned_units_only: bool,
    /// Cap on the number of results, applied after ranking;
    /// `None` or `Some(0)` means unlimited.
    pub max_results: Option<usize>,
    /// Allow-list of set identifiers; empty means no set filtering.
    pub sets: Vec<String>,
    /// Allow-list of tags (exact match, ANY semantics); empty means
    /// no tag filtering.
    pub tags: Vec<String>,
}

impl RecommendationFilters {
    /// Filters that keep every comp regardless of score.
    #[must_use]
    pub fn unfiltered() -> Self {
        Self {
            min_score: Some(0.0_f32),
            ..Self::default()
        }
    }
}
