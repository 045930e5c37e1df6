//! Test-only sample data used by unit and behaviour tests across the
//! workspace.
//!
//! The fixtures model a small but realistic dataset: three comps over
//! two sets with overlapping champions and items, so filter, ranking,
//! and integrity tests all have something to bite on.

use crate::{BoardPosition, Champion, Comp, CompUnit, Dataset, Item, UnitRole};

/// Champions referenced by the sample comps.
#[must_use]
pub fn sample_champions() -> Vec<Champion> {
    vec![
        Champion::new("ahri", "Ahri", 4, ["Mage", "Spirit"]),
        Champion::new("shen", "Shen", 1, ["Bastion"]),
        Champion::new("lulu", "Lulu", 2, ["Support"]),
        Champion::new("kindred", "Kindred", 4, ["Sniper"]),
        Champion::new("warwick", "Warwick", 1, ["Brawler"]),
        Champion::new("nasus", "Nasus", 1, ["Bastion"]),
        Champion::new("singed", "Singed", 2, ["Brawler"]),
        Champion::new("jinx", "Jinx", 5, ["Sniper"]),
        Champion::new("braum", "Braum", 2, ["Bastion"]),
    ]
}

/// Items referenced by the sample comps.
#[must_use]
pub fn sample_items() -> Vec<Item> {
    vec![
        Item::new("rabadons-cap", "Rabadon's Deathcap"),
        Item::new("jeweled-gauntlet", "Jeweled Gauntlet"),
        Item::new("blue-buff", "Blue Buff"),
        Item::new("sunfire-cape", "Sunfire Cape"),
        Item::new("protectors-vow", "Protector's Vow"),
        Item::new("guinsoos-rageblade", "Guinsoo's Rageblade"),
        Item::new("titans-resolve", "Titan's Resolve"),
        Item::new("infinity-edge", "Infinity Edge"),
        Item::new("last-whisper", "Last Whisper"),
    ]
}

/// A four-unit AP comp with one carry, used wherever a single comp is
/// enough.
#[must_use]
pub fn sample_comp() -> Comp {
    Comp {
        id: "set16-ahri-burst".to_owned(),
        name: "Ahri Burst".to_owned(),
        set: "16".to_owned(),
        patch: "14.24".to_owned(),
        description: "Burst mage comp built around Ahri.".to_owned(),
        tags: vec!["Reroll".to_owned(), "AP".to_owned()],
        units: vec![
            CompUnit::new("ahri", UnitRole::Carry)
                .with_recommended_item("rabadons-cap")
                .with_recommended_item("jeweled-gauntlet")
                .with_recommended_item("blue-buff"),
            CompUnit::new("shen", UnitRole::Tank).with_recommended_item("sunfire-cape"),
            CompUnit::new("lulu", UnitRole::Support).with_recommended_item("protectors-vow"),
            CompUnit::new("kindred", UnitRole::Flex)
                .with_recommended_item("guinsoos-rageblade"),
        ],
        positioning: vec![
            BoardPosition::new("ahri", 3, 2),
            BoardPosition::new("shen", 3, 0),
            BoardPosition::new("lulu", 4, 3),
            BoardPosition::new("kindred", 0, 3),
        ],
    }
}

/// A cheap three-unit tempo comp whose mean cost clears the
/// cost-efficiency threshold.
#[must_use]
pub fn cheap_comp() -> Comp {
    Comp {
        id: "set16-warwick-brawlers".to_owned(),
        name: "Warwick Brawlers".to_owned(),
        set: "16".to_owned(),
        patch: "14.24".to_owned(),
        description: "Early tempo brawler comp that snowballs with Warwick.".to_owned(),
        tags: vec!["Early Game".to_owned(), "AD".to_owned()],
        units: vec![
            CompUnit::new("warwick", UnitRole::Carry)
                .with_recommended_item("guinsoos-rageblade")
                .with_recommended_item("titans-resolve"),
            CompUnit::new("nasus", UnitRole::Tank).with_recommended_item("sunfire-cape"),
            CompUnit::new("singed", UnitRole::Flex),
        ],
        positioning: vec![
            BoardPosition::new("warwick", 2, 0),
            BoardPosition::new("nasus", 3, 0),
            BoardPosition::new("singed", 4, 0),
        ],
    }
}

/// A two-unit late-game comp from an older set.
#[must_use]
pub fn late_game_comp() -> Comp {
    Comp {
        id: "set15-jinx-snipers".to_owned(),
        name: "Jinx Snipers".to_owned(),
        set: "15".to_owned(),
        patch: "14.20".to_owned(),
        description: "Backline artillery scaling into the late game.".to_owned(),
        tags: vec!["AD".to_owned(), "Late Game".to_owned()],
        units: vec![
            CompUnit::new("jinx", UnitRole::Carry)
                .with_recommended_item("infinity-edge")
                .with_recommended_item("last-whisper"),
            CompUnit::new("braum", UnitRole::Tank).with_recommended_item("protectors-vow"),
        ],
        positioning: vec![
            BoardPosition::new("jinx", 6, 3),
            BoardPosition::new("braum", 3, 0),
        ],
    }
}

/// The full three-comp dataset.
///
/// # Panics
/// Panics if the sample data is internally inconsistent, which would
/// be a bug in the fixtures themselves.
#[must_use]
pub fn sample_dataset() -> Dataset {
    match Dataset::new(
        sample_champions(),
        sample_items(),
        vec![sample_comp(), cheap_comp(), late_game_comp()],
    ) {
        Ok(dataset) => dataset,
        Err(err) => panic!("sample dataset must validate: {err}"),
    }
}
