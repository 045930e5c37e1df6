//! Recommendation scoring for Compsage team compositions.
//!
//! The crate provides two complementary capabilities:
//! - **Detailed scoring** computes a weighted four-component score
//!   breakdown, additive bonuses, a confidence tier, a human-readable
//!   explanation, and missing-unit/item lists for one comp against one
//!   [`Inventory`](compsage_core::Inventory), then filters, ranks, and
//!   truncates across the whole dataset.
//! - **Quick scoring** implements the older coarse 60/40 formula kept
//!   for search and listing call sites. The two scorers coexist and may
//!   diverge for the same inputs.
//!
//! Scoring performs no I/O and never fails under a validated dataset;
//! divide-by-zero guards make degenerate comps score zero rather than
//! propagate NaN.
//!
//! # Examples
//!
//! ```
//! use compsage_core::{Inventory, test_support::sample_dataset};
//! use compsage_scorer::{RecommendationEngine, RecommendationFilters};
//!
//! let dataset = sample_dataset();
//! let engine = RecommendationEngine::new(&dataset);
//! let inventory = Inventory::new().with_champion("warwick");
//! let recs = engine.recommendations(&inventory, &RecommendationFilters::unfiltered());
//! assert_eq!(recs.len(), dataset.comps().len());
//! ```

#![forbid(unsafe_code)]

mod config;
mod engine;
mod recommendation;

pub use config::{
    BonusValues, COST_EFFICIENT_MEAN, DEFAULT_CHAMPION_COST, ScoreThresholds, ScoreWeights,
    ScoringConfig, ScoringConfigError,
};
pub use engine::RecommendationEngine;
pub use recommendation::{
    BonusAwards, CompRecommendation, Confidence, RecommendationFilters, ScoreBreakdown, ScoredComp,
};

#[cfg(test)]
mod tests;
