//! The multi-factor recommendation engine.
//!
//! Scoring is a pure function over the immutable dataset and one
//! inventory: four weighted components, three additive bonuses, a
//! confidence tier, and a short explanation. The companion quick
//! scorer implements the older coarse 60/40 formula; the two coexist
//! and may disagree for the same inputs.
#![forbid(unsafe_code)]

use std::collections::HashSet;

use compsage_core::{Comp, CompUnit, Dataset, Inventory};
use log::warn;

use crate::config::{COST_EFFICIENT_MEAN, DEFAULT_CHAMPION_COST, ScoringConfig, ScoringConfigError};
use crate::recommendation::{
    BonusAwards, CompRecommendation, Confidence, RecommendationFilters, ScoreBreakdown, ScoredComp,
};

/// Separator between explanation reasons.
const REASON_SEPARATOR: &str = " \u{2022} ";
/// Explanations carry at most this many reasons.
const MAX_REASONS: usize = 3;
/// Champion-ownership weight of the legacy quick scorer.
const QUICK_CHAMPION_WEIGHT: f32 = 60.0_f32;
/// Item-pool weight of the legacy quick scorer.
const QUICK_ITEM_WEIGHT: f32 = 40.0_f32;

/// Scores comps from one dataset against user inventories.
///
/// # Examples
///
/// ```
/// use compsage_core::{Inventory, test_support::sample_dataset};
/// use compsage_scorer::RecommendationEngine;
///
/// let dataset = sample_dataset();
/// let engine = RecommendationEngine::new(&dataset);
/// let inventory = Inventory::new().with_champion("ahri");
/// let rec = engine.score_comp(&dataset.comps()[0], &inventory);
/// assert!(rec.score <= 100);
/// ```
#[derive(Debug, Clone)]
pub struct RecommendationEngine<'a> {
    dataset: &'a Dataset,
    config: ScoringConfig,
}

impl<'a> RecommendationEngine<'a> {
    /// Construct an engine with the default scoring configuration.
    #[must_use]
    pub fn new(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            config: ScoringConfig::default(),
        }
    }

    /// Construct an engine with a custom configuration.
    ///
    /// # Errors
    /// Returns [`ScoringConfigError`] when the weights do not close to
    /// 100.
    pub fn with_config(
        dataset: &'a Dataset,
        config: ScoringConfig,
    ) -> Result<Self, ScoringConfigError> {
        Ok(Self {
            dataset,
            config: config.validate()?,
        })
    }

    /// The active scoring configuration.
    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score one comp against the inventory, producing the full
    /// recommendation with breakdown, explanation, confidence tier,
    /// and missing-unit/item lists.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "combining component scores and bonuses is floating point by design"
    )]
    pub fn score_comp(&self, comp: &Comp, inventory: &Inventory) -> CompRecommendation {
        let breakdown = self.breakdown(comp, inventory);
        // Bonuses may push a sub-100 base up to, but never past, 100.
        let total = (breakdown.base_score() + breakdown.total_bonus).min(100.0_f32);

        let confidence = self.confidence(total);
        let missing_units = missing_units(comp, inventory);
        let missing_items = missing_items(comp, inventory);
        let explanation = self.explanation(comp, &breakdown, inventory);
        let score = round_score(total);

        CompRecommendation {
            comp: comp.clone(),
            score,
            match_percentage: score,
            breakdown,
            explanation,
            confidence,
            missing_units,
            missing_items,
        }
    }

    /// Filter, score, rank, and truncate all comps in the dataset.
    ///
    /// Stages apply in a fixed order: set filter, tag filter, scoring,
    /// minimum-score filter, owned-units-only filter, stable
    /// descending sort, truncation. Cheap filters run before scoring;
    /// the result cap applies only after ranking.
    #[must_use]
    pub fn recommendations(
        &self,
        inventory: &Inventory,
        filters: &RecommendationFilters,
    ) -> Vec<CompRecommendation> {
        let candidates = self
            .dataset
            .comps()
            .iter()
            .filter(|comp| filters.sets.is_empty() || filters.sets.contains(&comp.set))
            .filter(|comp| filters.tags.is_empty() || comp.has_any_tag(&filters.tags));

        let min_score = filters
            .min_score
            .unwrap_or(self.config.thresholds.min_recommend);

        let mut recommendations: Vec<CompRecommendation> = candidates
            .map(|comp| self.score_comp(comp, inventory))
            .filter(|rec| f32::from(rec.score) >= min_score)
            .filter(|rec| !filters.owned_units_only || rec.missing_units.is_empty())
            .collect();

        // Stable sort: ties keep dataset order.
        recommendations.sort_by(|a, b| b.score.cmp(&a.score));

        if let Some(max) = filters.max_results
            && max > 0
        {
            recommendations.truncate(max);
        }
        recommendations
    }

    /// Legacy coarse score: 60% champion ownership, 40% item-pool
    /// ownership (recommended and optional items, de-duplicated).
    ///
    /// An empty inventory counts as "no filter" and scores 100.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the coarse formula blends two weighted fractions"
    )]
    pub fn quick_score(&self, comp: &Comp, inventory: &Inventory) -> u8 {
        if inventory.is_empty() {
            return 100;
        }

        let champion_total = comp.units.len();
        let champion_owned = comp
            .units
            .iter()
            .filter(|unit| inventory.owns_champion(&unit.champion_id))
            .count();
        let champion_score = ratio(champion_owned, champion_total) * QUICK_CHAMPION_WEIGHT;

        let item_pool: HashSet<&String> = comp
            .units
            .iter()
            .flat_map(|unit| unit.recommended_items.iter().chain(&unit.optional_items))
            .collect();
        let item_owned = item_pool
            .iter()
            .filter(|item_id| inventory.owns_item(item_id))
            .count();
        let item_score = ratio(item_owned, item_pool.len()) * QUICK_ITEM_WEIGHT;

        round_score(champion_score + item_score)
    }

    /// Score every comp with the quick scorer, filter by `min_score`,
    /// and sort descending (stable).
    #[must_use]
    pub fn quick_recommendations(&self, inventory: &Inventory, min_score: u8) -> Vec<ScoredComp> {
        let mut scored: Vec<ScoredComp> = self
            .dataset
            .comps()
            .iter()
            .map(|comp| {
                let score = self.quick_score(comp, inventory);
                ScoredComp {
                    comp: comp.clone(),
                    score,
                    match_percentage: score,
                }
            })
            .filter(|comp| comp.score >= min_score)
            .collect();
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "component scores are weighted ownership fractions"
    )]
    fn breakdown(&self, comp: &Comp, inventory: &Inventory) -> ScoreBreakdown {
        let weights = self.config.weights;
        let bonuses = self.config.bonuses;

        let core_total = comp.core_units().count();
        let core_owned = comp
            .core_units()
            .filter(|unit| inventory.owns_champion(&unit.champion_id))
            .count();
        let core_units_score = ratio(core_owned, core_total) * weights.core_units;

        let optional_total = comp.optional_units().count();
        let optional_owned = comp
            .optional_units()
            .filter(|unit| inventory.owns_champion(&unit.champion_id))
            .count();
        let optional_units_score = ratio(optional_owned, optional_total) * weights.optional_units;

        let (carry_owned_items, carry_total_items) = item_counts(comp.core_units(), inventory);
        let carry_items_score =
            ratio(carry_owned_items, carry_total_items) * weights.carry_items;

        let (support_owned_items, support_total_items) = item_counts(
            comp.units.iter().filter(|u| u.role.holds_support_items()),
            inventory,
        );
        let support_items_score =
            ratio(support_owned_items, support_total_items) * weights.support_items;

        let mut awards = BonusAwards::default();
        if core_total > 0 && core_owned == core_total {
            awards.all_core_units = Some(bonuses.all_core_units);
        }
        if core_total > 0
            && comp
                .core_units()
                .any(|unit| owns_all_recommended(unit, inventory))
        {
            awards.all_carry_items = Some(bonuses.all_carry_items);
        }
        if self.mean_cost(comp) <= COST_EFFICIENT_MEAN {
            awards.cost_efficiency = Some(bonuses.cost_efficiency);
        }

        ScoreBreakdown {
            core_units_score,
            optional_units_score,
            carry_items_score,
            support_items_score,
            bonuses: awards,
            total_bonus: awards.total(),
        }
    }

    /// Mean shop cost across the comp's units.
    ///
    /// Falls back to [`DEFAULT_CHAMPION_COST`] on a lookup miss, which
    /// cannot happen after referential validation; a warning is logged
    /// if it ever does.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "unit counts and costs are small; a float mean is exact enough"
    )]
    fn mean_cost(&self, comp: &Comp) -> f32 {
        if comp.units.is_empty() {
            return f32::INFINITY;
        }
        let total: u32 = comp
            .units
            .iter()
            .map(|unit| {
                self.dataset
                    .champion(&unit.champion_id)
                    .map_or_else(
                        || {
                            warn!(
                                "champion {} missing from dataset while costing comp {}; \
                                 assuming cost {DEFAULT_CHAMPION_COST}",
                                unit.champion_id, comp.id
                            );
                            u32::from(DEFAULT_CHAMPION_COST)
                        },
                        |champion| u32::from(champion.cost),
                    )
            })
            .sum();
        total as f32 / comp.units.len() as f32
    }

    fn confidence(&self, total: f32) -> Confidence {
        let thresholds = self.config.thresholds;
        if total >= thresholds.perfect_match {
            Confidence::Perfect
        } else if total >= thresholds.high_confidence {
            Confidence::High
        } else if total >= thresholds.min_recommend {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }

    /// Up to three short reasons, in priority order: core-unit
    /// ownership, carry-item status, cost-efficiency bonus. Falls back
    /// to a generic unit count when nothing else qualifies.
    fn explanation(
        &self,
        comp: &Comp,
        breakdown: &ScoreBreakdown,
        inventory: &Inventory,
    ) -> String {
        let mut reasons: Vec<String> = Vec::new();

        let core_total = comp.core_units().count();
        let core_owned = comp
            .core_units()
            .filter(|unit| inventory.owns_champion(&unit.champion_id))
            .count();
        if core_total > 0 && core_owned == core_total {
            reasons.push(format!("You own all {core_total} core units"));
        } else if core_owned > 0 {
            reasons.push(format!("You own {core_owned}/{core_total} core units"));
        }

        if let Some(unit) = comp
            .core_units()
            .find(|unit| owns_all_recommended(unit, inventory))
        {
            reasons.push(format!("Perfect items for {}", unit.champion_id));
        } else {
            let (owned, total) = item_counts(comp.core_units(), inventory);
            if owned > 0 {
                reasons.push(format!("{owned}/{total} key items available"));
            }
        }

        if breakdown.bonuses.cost_efficiency.is_some() {
            reasons.push("Low-cost units (easy to build)".to_owned());
        }

        if reasons.is_empty() {
            let owned = comp
                .units
                .iter()
                .filter(|unit| inventory.owns_champion(&unit.champion_id))
                .count();
            reasons.push(format!("{owned}/{} units available", comp.units.len()));
        }

        reasons.truncate(MAX_REASONS);
        reasons.join(REASON_SEPARATOR)
    }
}

/// Weighted-fraction helper with an explicit divide-by-zero guard.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "ownership fractions over small counts"
)]
fn ratio(owned: usize, total: usize) -> f32 {
    if total == 0 {
        0.0_f32
    } else {
        owned as f32 / total as f32
    }
}

/// Count owned and total recommended items over a set of units.
fn item_counts<'u>(
    units: impl Iterator<Item = &'u CompUnit>,
    inventory: &Inventory,
) -> (usize, usize) {
    let mut owned = 0_usize;
    let mut total = 0_usize;
    for unit in units {
        total += unit.recommended_items.len();
        owned += unit
            .recommended_items
            .iter()
            .filter(|item_id| inventory.owns_item(item_id))
            .count();
    }
    (owned, total)
}

/// Whether every recommended item on the unit is owned.
///
/// Vacuously true for a unit with no recommended items; the
/// all-carry-items bonus deliberately preserves that behaviour.
fn owns_all_recommended(unit: &CompUnit, inventory: &Inventory) -> bool {
    unit.recommended_items
        .iter()
        .all(|item_id| inventory.owns_item(item_id))
}

/// Champion ids of unowned units, in comp order.
fn missing_units(comp: &Comp, inventory: &Inventory) -> Vec<String> {
    comp.units
        .iter()
        .filter(|unit| !inventory.owns_champion(&unit.champion_id))
        .map(|unit| unit.champion_id.clone())
        .collect()
}

/// Unowned recommended item ids, de-duplicated in first-seen order.
/// Optional items are excluded.
fn missing_items(comp: &Comp, inventory: &Inventory) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut missing = Vec::new();
    for unit in &comp.units {
        for item_id in &unit.recommended_items {
            if seen.insert(item_id.clone()) && !inventory.owns_item(item_id) {
                missing.push(item_id.clone());
            }
        }
    }
    missing
}

/// Round a capped score into the `0..=100` integer range.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the input is clamped to 0..=100 before the cast"
)]
fn round_score(total: f32) -> u8 {
    total.clamp(0.0_f32, 100.0_f32).round() as u8
}
