//! Facade crate for the Compsage comp recommendation engine.
//!
//! Re-exports the full public surface a presentation layer needs:
//! dataset loading and caching, query helpers on the validated
//! [`Dataset`], and the recommendation engine. Consumers go through
//! these entry points only; the validator and cache internals are not
//! reachable any other way.
//!
//! # Examples
//!
//! ```no_run
//! use compsage::{
//!     DatasetCache, HttpDatasetSource, Inventory, RecommendationEngine,
//!     RecommendationFilters,
//! };
//!
//! # async fn demo() -> Result<(), compsage::DatasetError> {
//! let cache = DatasetCache::new();
//! let source = HttpDatasetSource::new("https://example.org/data/comps.json");
//! let dataset = cache.load(&source).await?;
//!
//! let inventory = Inventory::from_ids(["ahri", "shen"], ["rabadons-cap"]);
//! let engine = RecommendationEngine::new(&dataset);
//! for rec in engine.recommendations(&inventory, &RecommendationFilters::default()) {
//!     println!("{} ({}): {}", rec.comp.name, rec.score, rec.explanation);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub use compsage_core::{
    BOARD_COLUMNS, BOARD_ROWS, BoardPosition, Champion, Comp, CompUnit, Dataset,
    DatasetIntegrityError, Inventory, Item, MAX_CHAMPION_COST, MIN_CHAMPION_COST, UnitRole,
};

pub use compsage_data::{
    DatasetCache, DatasetDocument, DatasetError, DatasetSource, FileDatasetSource,
    HttpDatasetSource, SchemaViolation, TransportError, load_dataset, parse_dataset,
};

pub use compsage_scorer::{
    BonusAwards, BonusValues, CompRecommendation, Confidence, RecommendationEngine,
    RecommendationFilters, ScoreBreakdown, ScoreThresholds, ScoreWeights, ScoredComp,
    ScoringConfig, ScoringConfigError,
};
