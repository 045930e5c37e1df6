//! Unit coverage for the recommendation engine and quick scorer.
#![forbid(unsafe_code)]

use compsage_core::test_support::{cheap_comp, sample_comp, sample_dataset};
use compsage_core::{BoardPosition, Comp, CompUnit, Dataset, Inventory, UnitRole};
use proptest::prelude::*;
use rstest::{fixture, rstest};

use crate::{
    Confidence, RecommendationEngine, RecommendationFilters, ScoreWeights, ScoringConfig,
    ScoringConfigError,
};

#[fixture]
fn dataset() -> Dataset {
    sample_dataset()
}

fn all_owned_inventory(dataset: &Dataset) -> Inventory {
    Inventory::from_ids(
        dataset.champions().iter().map(|c| c.id.clone()),
        dataset.items().iter().map(|i| i.id.clone()),
    )
}

/// One carry with three recommended items plus three flex units each
/// holding one of those items, so owning the carry package leaves no
/// missing items.
fn carry_package_comp() -> Comp {
    Comp {
        id: "test-carry-package".to_owned(),
        name: "Carry Package".to_owned(),
        set: "16".to_owned(),
        patch: "14.24".to_owned(),
        description: "Scenario comp for scoring tests.".to_owned(),
        tags: vec!["Test".to_owned()],
        units: vec![
            CompUnit::new("ahri", UnitRole::Carry)
                .with_recommended_item("rabadons-cap")
                .with_recommended_item("jeweled-gauntlet")
                .with_recommended_item("blue-buff"),
            CompUnit::new("kindred", UnitRole::Flex).with_recommended_item("rabadons-cap"),
            CompUnit::new("jinx", UnitRole::Flex).with_recommended_item("jeweled-gauntlet"),
            CompUnit::new("braum", UnitRole::Flex).with_recommended_item("blue-buff"),
        ],
        positioning: vec![
            BoardPosition::new("ahri", 3, 2),
            BoardPosition::new("kindred", 0, 3),
            BoardPosition::new("jinx", 6, 3),
            BoardPosition::new("braum", 3, 0),
        ],
    }
}

#[test]
fn default_weights_close_to_one_hundred() {
    assert!(ScoreWeights::default().validate().is_ok());
    assert_eq!(ScoreWeights::default().total(), 100.0_f32);
}

#[test]
fn unbalanced_weights_are_rejected() {
    let weights = ScoreWeights {
        core_units: 60.0_f32,
        ..ScoreWeights::default()
    };
    assert!(matches!(
        weights.validate(),
        Err(ScoringConfigError::WeightsNotClosed { .. })
    ));

    let config = ScoringConfig {
        weights,
        ..ScoringConfig::default()
    };
    let dataset = sample_dataset();
    assert!(RecommendationEngine::with_config(&dataset, config).is_err());
}

#[rstest]
fn carry_package_scenario(dataset: Dataset) {
    let engine = RecommendationEngine::new(&dataset);
    let comp = carry_package_comp();
    let inventory = Inventory::from_ids(
        ["ahri"],
        ["rabadons-cap", "jeweled-gauntlet", "blue-buff"],
    );

    let rec = engine.score_comp(&comp, &inventory);

    assert_eq!(rec.breakdown.core_units_score, 50.0_f32);
    assert_eq!(rec.breakdown.carry_items_score, 25.0_f32);
    assert_eq!(rec.breakdown.optional_units_score, 0.0_f32);
    assert_eq!(rec.breakdown.support_items_score, 0.0_f32);
    assert_eq!(rec.breakdown.bonuses.all_core_units, Some(10.0_f32));
    assert_eq!(rec.breakdown.bonuses.all_carry_items, Some(8.0_f32));
    assert_eq!(rec.breakdown.bonuses.cost_efficiency, None);
    assert_eq!(rec.score, 93);
    assert_eq!(rec.match_percentage, 93);
    assert_eq!(rec.confidence, Confidence::High);
    assert_eq!(
        rec.missing_units,
        vec!["kindred".to_owned(), "jinx".to_owned(), "braum".to_owned()]
    );
    assert!(rec.missing_items.is_empty());
}

#[rstest]
fn empty_inventory_scores_zero(dataset: Dataset) {
    let engine = RecommendationEngine::new(&dataset);
    let rec = engine.score_comp(&sample_comp(), &Inventory::new());

    assert_eq!(rec.score, 0);
    assert_eq!(rec.confidence, Confidence::Low);
    assert_eq!(
        rec.missing_units,
        vec![
            "ahri".to_owned(),
            "shen".to_owned(),
            "lulu".to_owned(),
            "kindred".to_owned()
        ]
    );
    // Recommended items only, de-duplicated in first-seen order.
    assert_eq!(
        rec.missing_items,
        vec![
            "rabadons-cap".to_owned(),
            "jeweled-gauntlet".to_owned(),
            "blue-buff".to_owned(),
            "sunfire-cape".to_owned(),
            "protectors-vow".to_owned(),
            "guinsoos-rageblade".to_owned()
        ]
    );
    assert_eq!(rec.explanation, "0/4 units available");
}

#[rstest]
fn full_ownership_caps_at_one_hundred(dataset: Dataset) {
    let engine = RecommendationEngine::new(&dataset);
    let inventory = all_owned_inventory(&dataset);
    let rec = engine.score_comp(&sample_comp(), &inventory);

    // Base 100 plus bonuses still caps at 100.
    assert_eq!(rec.score, 100);
    assert_eq!(rec.confidence, Confidence::Perfect);
    assert!(rec.missing_units.is_empty());
    assert!(rec.missing_items.is_empty());
}

#[rstest]
fn owning_only_the_carry_is_medium_confidence(dataset: Dataset) {
    let engine = RecommendationEngine::new(&dataset);
    let inventory = Inventory::new().with_champion("ahri");
    let rec = engine.score_comp(&sample_comp(), &inventory);

    // Core 50 plus the all-core-units bonus.
    assert_eq!(rec.score, 60);
    assert_eq!(rec.confidence, Confidence::Medium);
}

#[rstest]
fn cheap_comp_earns_cost_efficiency_bonus(dataset: Dataset) {
    let engine = RecommendationEngine::new(&dataset);
    let rec = engine.score_comp(&cheap_comp(), &Inventory::new());

    assert_eq!(rec.breakdown.bonuses.cost_efficiency, Some(5.0_f32));
    assert_eq!(rec.score, 5);
    assert_eq!(rec.explanation, "Low-cost units (easy to build)");
}

#[rstest]
fn carry_without_items_awards_vacuous_item_bonus(dataset: Dataset) {
    // A carry with zero recommended items trivially "has all of them";
    // the bonus deliberately keeps that behaviour.
    let engine = RecommendationEngine::new(&dataset);
    let mut comp = cheap_comp();
    if let Some(unit) = comp.units.first_mut() {
        unit.recommended_items.clear();
    }
    let rec = engine.score_comp(&comp, &Inventory::new());
    assert_eq!(rec.breakdown.bonuses.all_carry_items, Some(8.0_f32));
}

#[rstest]
fn explanation_reports_partial_items(dataset: Dataset) {
    let engine = RecommendationEngine::new(&dataset);
    let inventory = Inventory::from_ids(["ahri"], ["rabadons-cap"]);
    let rec = engine.score_comp(&sample_comp(), &inventory);

    assert_eq!(
        rec.explanation,
        "You own all 1 core units \u{2022} 1/3 key items available"
    );
}

#[rstest]
fn explanation_reports_perfect_items(dataset: Dataset) {
    let engine = RecommendationEngine::new(&dataset);
    let inventory = Inventory::from_ids(
        Vec::<String>::new(),
        ["rabadons-cap", "jeweled-gauntlet", "blue-buff"],
    );
    let rec = engine.score_comp(&sample_comp(), &inventory);

    assert_eq!(rec.explanation, "Perfect items for ahri");
}

#[rstest]
fn results_are_sorted_descending_with_stable_ties(dataset: Dataset) {
    let engine = RecommendationEngine::new(&dataset);
    let recs = engine.recommendations(&Inventory::new(), &RecommendationFilters::unfiltered());

    assert_eq!(recs.len(), dataset.comps().len());
    for pair in recs.windows(2) {
        if let [a, b] = pair {
            assert!(a.score >= b.score);
        }
    }
    // The cheap comp's cost bonus wins; the two zero-score ties keep
    // dataset order.
    let ids: Vec<&str> = recs.iter().map(|rec| rec.comp.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "set16-warwick-brawlers",
            "set16-ahri-burst",
            "set15-jinx-snipers"
        ]
    );
}

#[rstest]
fn max_results_keeps_the_top_comp(dataset: Dataset) {
    let engine = RecommendationEngine::new(&dataset);
    let filters = RecommendationFilters {
        max_results: Some(1),
        ..RecommendationFilters::unfiltered()
    };
    let recs = engine.recommendations(&Inventory::new(), &filters);

    assert_eq!(recs.len(), 1);
    assert_eq!(recs.first().map(|r| r.comp.id.as_str()), Some("set16-warwick-brawlers"));
}

#[rstest]
fn zero_max_results_means_unlimited(dataset: Dataset) {
    let engine = RecommendationEngine::new(&dataset);
    let filters = RecommendationFilters {
        max_results: Some(0),
        ..RecommendationFilters::unfiltered()
    };
    let recs = engine.recommendations(&Inventory::new(), &filters);
    assert_eq!(recs.len(), dataset.comps().len());
}

#[rstest]
fn default_min_score_filters_everything_for_empty_inventory(dataset: Dataset) {
    let engine = RecommendationEngine::new(&dataset);
    let recs = engine.recommendations(&Inventory::new(), &RecommendationFilters::default());
    assert!(recs.is_empty());
}

#[rstest]
fn owned_units_only_keeps_fully_owned_comps(dataset: Dataset) {
    let engine = RecommendationEngine::new(&dataset);
    let inventory = Inventory::from_ids(["warwick", "nasus", "singed"], Vec::<String>::new());
    let filters = RecommendationFilters {
        owned_units_only: true,
        ..RecommendationFilters::unfiltered()
    };
    let recs = engine.recommendations(&inventory, &filters);

    assert_eq!(recs.len(), 1);
    assert_eq!(recs.first().map(|r| r.comp.id.as_str()), Some("set16-warwick-brawlers"));
}

#[rstest]
#[case::by_set(RecommendationFilters {
    sets: vec!["15".to_owned()],
    ..RecommendationFilters::unfiltered()
}, vec!["set15-jinx-snipers"])]
#[case::by_tag(RecommendationFilters {
    tags: vec!["Reroll".to_owned()],
    ..RecommendationFilters::unfiltered()
}, vec!["set16-ahri-burst"])]
#[case::tag_match_is_exact(RecommendationFilters {
    tags: vec!["reroll".to_owned()],
    ..RecommendationFilters::unfiltered()
}, Vec::new())]
fn set_and_tag_filters_run_before_scoring(
    dataset: Dataset,
    #[case] filters: RecommendationFilters,
    #[case] expected: Vec<&str>,
) {
    let engine = RecommendationEngine::new(&dataset);
    let recs = engine.recommendations(&Inventory::new(), &filters);
    let ids: Vec<&str> = recs.iter().map(|rec| rec.comp.id.as_str()).collect();
    assert_eq!(ids, expected);
}

#[rstest]
fn quick_score_treats_empty_selection_as_full_match(dataset: Dataset) {
    let engine = RecommendationEngine::new(&dataset);
    assert_eq!(engine.quick_score(&sample_comp(), &Inventory::new()), 100);

    let scored = engine.quick_recommendations(&Inventory::new(), 0);
    assert_eq!(scored.len(), dataset.comps().len());
    assert!(scored.iter().all(|comp| comp.score == 100));
}

#[rstest]
fn quick_score_blends_champion_and_item_fractions(dataset: Dataset) {
    let engine = RecommendationEngine::new(&dataset);

    // 1/4 champions = 15; no items.
    let champs_only = Inventory::new().with_champion("ahri");
    assert_eq!(engine.quick_score(&sample_comp(), &champs_only), 15);

    // 15 + one of six pooled items (40/6 ~ 6.67) rounds to 22.
    let with_item = champs_only.with_item("rabadons-cap");
    assert_eq!(engine.quick_score(&sample_comp(), &with_item), 22);
}

#[rstest]
fn quick_recommendations_filter_and_sort(dataset: Dataset) {
    let engine = RecommendationEngine::new(&dataset);
    let inventory = Inventory::from_ids(["warwick", "nasus", "singed"], Vec::<String>::new());
    let scored = engine.quick_recommendations(&inventory, 50);

    // Only the fully-owned brawler comp clears 50: 3/3 champions = 60.
    assert_eq!(scored.len(), 1);
    assert_eq!(scored.first().map(|c| c.comp.id.as_str()), Some("set16-warwick-brawlers"));
    assert_eq!(scored.first().map(|c| c.score), Some(60));
}

#[test]
fn recommendation_serialises_camel_case() {
    let dataset = sample_dataset();
    let engine = RecommendationEngine::new(&dataset);
    let rec = engine.score_comp(&sample_comp(), &Inventory::new());
    let value = serde_json::to_value(&rec).expect("recommendation should serialise");

    assert!(value.get("matchPercentage").is_some());
    assert!(value.get("missingUnits").is_some());
    // The comp flattens into the recommendation, matching the wire shape.
    assert_eq!(value.get("id").and_then(|v| v.as_str()), Some("set16-ahri-burst"));
    assert_eq!(value.get("confidence").and_then(|v| v.as_str()), Some("low"));
}

fn champion_ids() -> Vec<String> {
    sample_dataset()
        .champions()
        .iter()
        .map(|c| c.id.clone())
        .collect()
}

fn item_ids() -> Vec<String> {
    sample_dataset()
        .items()
        .iter()
        .map(|i| i.id.clone())
        .collect()
}

proptest! {
    /// Scores stay within 0..=100 for arbitrary inventories.
    #[test]
    fn scores_stay_in_bounds(
        champs in proptest::sample::subsequence(champion_ids(), 0..=9),
        items in proptest::sample::subsequence(item_ids(), 0..=9),
    ) {
        let dataset = sample_dataset();
        let engine = RecommendationEngine::new(&dataset);
        let inventory = Inventory::from_ids(champs, items);
        for comp in dataset.comps() {
            let rec = engine.score_comp(comp, &inventory);
            prop_assert!(rec.score <= 100);
            prop_assert_eq!(rec.score, rec.match_percentage);
        }
    }

    /// Adding an owned champion or item never decreases any score.
    #[test]
    fn scores_are_monotone_in_ownership(
        champs in proptest::sample::subsequence(champion_ids(), 0..=9),
        items in proptest::sample::subsequence(item_ids(), 0..=9),
        extra_champ in proptest::sample::select(champion_ids()),
        extra_item in proptest::sample::select(item_ids()),
    ) {
        let dataset = sample_dataset();
        let engine = RecommendationEngine::new(&dataset);
        let base = Inventory::from_ids(champs.clone(), items.clone());
        let grown = Inventory::from_ids(champs, items)
            .with_champion(extra_champ)
            .with_item(extra_item);
        for comp in dataset.comps() {
            let before = engine.score_comp(comp, &base).score;
            let after = engine.score_comp(comp, &grown).score;
            prop_assert!(after >= before);
        }
    }
}
