//! Tunable scoring configuration: weights, confidence thresholds, and
//! bonus values.
//!
//! The four weights are percentages and must sum to exactly 100 so the
//! base score reads as a percentage match. They are configuration, not
//! per-call parameters; callers pick a config once when constructing
//! the engine.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Mean-cost ceiling below which a comp earns the cost-efficiency
/// bonus.
pub const COST_EFFICIENT_MEAN: f32 = 2.5;

/// Defensive fallback cost applied when a champion lookup misses.
///
/// Unreachable after referential validation; the engine logs a warning
/// if it ever fires.
pub const DEFAULT_CHAMPION_COST: u8 = 3;

/// Errors raised when validating a [`ScoringConfig`].
#[derive(Debug, Error, PartialEq)]
pub enum ScoringConfigError {
    /// The four weights did not sum to exactly 100.
    #[error("scoring weights must sum to 100, got {total}")]
    WeightsNotClosed {
        /// The offending sum.
        total: f32,
    },
    /// A weight was negative or non-finite.
    #[error("scoring weights must be finite and non-negative")]
    InvalidWeight,
}

/// Relative weighting of the four score components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Weight for owned carry-role units.
    pub core_units: f32,
    /// Weight for owned non-carry units.
    pub optional_units: f32,
    /// Weight for owned items recommended on carries.
    pub carry_items: f32,
    /// Weight for owned items recommended on tanks and supports.
    pub support_items: f32,
}

impl ScoreWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ScoringConfigError`] when a weight is negative or
    /// non-finite, or when the total is not exactly 100.
    pub fn validate(self) -> Result<Self, ScoringConfigError> {
        if !self.has_finite_non_negative_values() {
            return Err(ScoringConfigError::InvalidWeight);
        }
        let total = self.total();
        if total == 100.0_f32 {
            Ok(self)
        } else {
            Err(ScoringConfigError::WeightsNotClosed { total })
        }
    }

    /// Sum of the four weights.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "weight closure requires a simple sum"
    )]
    pub const fn total(self) -> f32 {
        self.core_units + self.optional_units + self.carry_items + self.support_items
    }

    const fn has_finite_non_negative_values(self) -> bool {
        self.core_units.is_finite()
            && self.optional_units.is_finite()
            && self.carry_items.is_finite()
            && self.support_items.is_finite()
            && self.core_units >= 0.0_f32
            && self.optional_units >= 0.0_f32
            && self.carry_items >= 0.0_f32
            && self.support_items >= 0.0_f32
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            core_units: 50.0_f32,
            optional_units: 15.0_f32,
            carry_items: 25.0_f32,
            support_items: 10.0_f32,
        }
    }
}

/// Score thresholds mapping to confidence tiers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreThresholds {
    /// Minimum score for a comp to be recommended at all.
    pub min_recommend: f32,
    /// Score above which the recommendation is considered strong.
    pub high_confidence: f32,
    /// Near-perfect match threshold.
    pub perfect_match: f32,
}

impl Default for ScoreThresholds {
    fn default() -> Self {
        Self {
            min_recommend: 30.0_f32,
            high_confidence: 70.0_f32,
            perfect_match: 95.0_f32,
        }
    }
}

/// Additive bonus values; each is awarded independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BonusValues {
    /// Awarded when every carry-role unit is owned.
    pub all_core_units: f32,
    /// Awarded when at least one carry has every recommended item.
    pub all_carry_items: f32,
    /// Awarded when the comp's mean champion cost is low.
    pub cost_efficiency: f32,
}

impl Default for BonusValues {
    fn default() -> Self {
        Self {
            all_core_units: 10.0_f32,
            all_carry_items: 8.0_f32,
            cost_efficiency: 5.0_f32,
        }
    }
}

/// Complete scoring configuration.
///
/// # Examples
/// ```
/// use compsage_scorer::ScoringConfig;
///
/// let config = ScoringConfig::default();
/// assert_eq!(config.weights.total(), 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoringConfig {
    /// Component weights; must sum to 100.
    pub weights: ScoreWeights,
    /// Confidence tier thresholds.
    pub thresholds: ScoreThresholds,
    /// Bonus values.
    pub bonuses: BonusValues,
}

impl ScoringConfig {
    /// Validate the configuration and return a copy.
    ///
    /// # Errors
    /// Propagates [`ScoreWeights::validate`] failures.
    pub fn validate(self) -> Result<Self, ScoringConfigError> {
        self.weights.validate()?;
        Ok(self)
    }
}
