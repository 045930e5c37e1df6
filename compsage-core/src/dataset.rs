//! The validated dataset and its query helpers.
//!
//! [`Dataset::new`] is the only way to obtain a [`Dataset`], so every
//! instance is referentially sound: comps never reference unknown
//! champions or items, and no comp places two champions on the same
//! board cell. Lookup helpers are plain indexed reads over the
//! in-memory collections; the dataset is small enough that nothing
//! fancier is warranted.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::{Champion, Comp, Item};

/// Referential-integrity failures raised by [`Dataset::new`].
///
/// Validation stops at the first failing comp; each variant carries
/// the offending comp's identity so the error renders a usable
/// diagnostic on its own.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum DatasetIntegrityError {
    /// Two champion records share an id.
    #[error("duplicate champion id: {champion_id}")]
    DuplicateChampionId {
        /// The repeated champion id.
        champion_id: String,
    },
    /// Two item records share an id.
    #[error("duplicate item id: {item_id}")]
    DuplicateItemId {
        /// The repeated item id.
        item_id: String,
    },
    /// Two comp records share an id.
    #[error("duplicate comp id: {comp_id}")]
    DuplicateCompId {
        /// The repeated comp id.
        comp_id: String,
    },
    /// A unit references a champion absent from the champion set.
    #[error("comp \"{comp_name}\" ({comp_id}) references unknown champion: {champion_id}")]
    UnknownChampion {
        /// Id of the offending comp.
        comp_id: String,
        /// Name of the offending comp.
        comp_name: String,
        /// The dangling champion reference.
        champion_id: String,
    },
    /// A unit's recommended or optional item list references an
    /// item absent from the item set.
    #[error(
        "comp \"{comp_name}\" ({comp_id}) references unknown item: {item_id} \
         on champion {champion_id}"
    )]
    UnknownItem {
        /// Id of the offending comp.
        comp_id: String,
        /// Name of the offending comp.
        comp_name: String,
        /// Champion whose item list holds the dangling reference.
        champion_id: String,
        /// The dangling item reference.
        item_id: String,
    },
    /// A board position references a champion absent from the
    /// champion set.
    #[error(
        "comp \"{comp_name}\" ({comp_id}) positioning references unknown champion: {champion_id}"
    )]
    UnknownPositionChampion {
        /// Id of the offending comp.
        comp_id: String,
        /// Name of the offending comp.
        comp_name: String,
        /// The dangling champion reference.
        champion_id: String,
    },
    /// Two board positions within one comp share a cell.
    #[error("comp \"{comp_name}\" ({comp_id}) has duplicate board position ({x}, {y})")]
    DuplicatePosition {
        /// Id of the offending comp.
        comp_id: String,
        /// Name of the offending comp.
        comp_name: String,
        /// Column of the repeated cell.
        x: u8,
        /// Row of the repeated cell.
        y: u8,
    },
}

/// Immutable, referentially validated collection of champions, items,
/// and comps.
///
/// # Examples
///
/// ```
/// use compsage_core::{Champion, Comp, Dataset, Item};
///
/// let dataset = Dataset::new(
///     vec![Champion::new("ahri", "Ahri", 4, Vec::<String>::new())],
///     vec![Item::new("rabadons-cap", "Rabadon's Deathcap")],
///     Vec::<Comp>::new(),
/// )?;
/// assert_eq!(dataset.champion("ahri").map(|c| c.cost), Some(4));
/// # Ok::<(), compsage_core::DatasetIntegrityError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    champions: Vec<Champion>,
    items: Vec<Item>,
    comps: Vec<Comp>,
    champion_index: HashMap<String, usize>,
    item_index: HashMap<String, usize>,
    comp_index: HashMap<String, usize>,
}

impl Dataset {
    /// Validate cross-references and construct a [`Dataset`].
    ///
    /// Checks run per comp in a fixed order: unit champion references,
    /// unit item references (recommended before optional), positioning
    /// champion references, then duplicate-cell detection. The first
    /// failing comp aborts the whole construction; there is no partial
    /// acceptance.
    ///
    /// # Errors
    /// Returns [`DatasetIntegrityError`] naming the offending comp and
    /// reference.
    pub fn new(
        champions: Vec<Champion>,
        items: Vec<Item>,
        comps: Vec<Comp>,
    ) -> Result<Self, DatasetIntegrityError> {
        let mut champion_index = HashMap::with_capacity(champions.len());
        for (position, champion) in champions.iter().enumerate() {
            if champion_index.insert(champion.id.clone(), position).is_some() {
                return Err(DatasetIntegrityError::DuplicateChampionId {
                    champion_id: champion.id.clone(),
                });
            }
        }

        let mut item_index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if item_index.insert(item.id.clone(), position).is_some() {
                return Err(DatasetIntegrityError::DuplicateItemId {
                    item_id: item.id.clone(),
                });
            }
        }

        let mut comp_index = HashMap::with_capacity(comps.len());
        for (position, comp) in comps.iter().enumerate() {
            if comp_index.insert(comp.id.clone(), position).is_some() {
                return Err(DatasetIntegrityError::DuplicateCompId {
                    comp_id: comp.id.clone(),
                });
            }
            check_comp_references(comp, &champion_index, &item_index)?;
        }

        Ok(Self {
            champions,
            items,
            comps,
            champion_index,
            item_index,
            comp_index,
        })
    }

    /// All champions in dataset order.
    #[must_use]
    pub fn champions(&self) -> &[Champion] {
        &self.champions
    }

    /// All items in dataset order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// All comps in dataset order.
    #[must_use]
    pub fn comps(&self) -> &[Comp] {
        &self.comps
    }

    /// Look up a champion by id.
    #[must_use]
    pub fn champion(&self, id: &str) -> Option<&Champion> {
        self.champion_index
            .get(id)
            .and_then(|&position| self.champions.get(position))
    }

    /// Look up an item by id.
    #[must_use]
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.item_index
            .get(id)
            .and_then(|&position| self.items.get(position))
    }

    /// Look up a comp by id.
    #[must_use]
    pub fn comp(&self, id: &str) -> Option<&Comp> {
        self.comp_index
            .get(id)
            .and_then(|&position| self.comps.get(position))
    }

    /// Comps belonging to the given set, in dataset order.
    #[must_use]
    pub fn comps_by_set(&self, set: &str) -> Vec<&Comp> {
        self.comps.iter().filter(|comp| comp.set == set).collect()
    }

    /// Comps carrying any of the given tags, case-insensitively.
    ///
    /// An empty tag list matches every comp.
    #[must_use]
    pub fn comps_by_tags(&self, tags: &[String]) -> Vec<&Comp> {
        if tags.is_empty() {
            return self.comps.iter().collect();
        }
        let wanted: HashSet<String> = tags.iter().map(|tag| tag.to_lowercase()).collect();
        self.comps
            .iter()
            .filter(|comp| {
                comp.tags
                    .iter()
                    .any(|tag| wanted.contains(&tag.to_lowercase()))
            })
            .collect()
    }

    /// Comps whose name or description contains `query`,
    /// case-insensitively. A blank query matches every comp.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Comp> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return self.comps.iter().collect();
        }
        let needle = trimmed.to_lowercase();
        self.comps
            .iter()
            .filter(|comp| {
                comp.name.to_lowercase().contains(&needle)
                    || comp.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Distinct tags across all comps, sorted.
    #[must_use]
    pub fn tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self
            .comps
            .iter()
            .flat_map(|comp| comp.tags.iter().cloned())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        tags.sort();
        tags
    }

    /// Distinct set identifiers across all comps, sorted.
    #[must_use]
    pub fn sets(&self) -> Vec<String> {
        let mut sets: Vec<String> = self
            .comps
            .iter()
            .map(|comp| comp.set.clone())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        sets.sort();
        sets
    }
}

fn check_comp_references(
    comp: &Comp,
    champion_index: &HashMap<String, usize>,
    item_index: &HashMap<String, usize>,
) -> Result<(), DatasetIntegrityError> {
    for unit in &comp.units {
        if !champion_index.contains_key(&unit.champion_id) {
            return Err(DatasetIntegrityError::UnknownChampion {
                comp_id: comp.id.clone(),
                comp_name: comp.name.clone(),
                champion_id: unit.champion_id.clone(),
            });
        }
    }

    for unit in &comp.units {
        for item_id in unit.recommended_items.iter().chain(&unit.optional_items) {
            if !item_index.contains_key(item_id) {
                return Err(DatasetIntegrityError::UnknownItem {
                    comp_id: comp.id.clone(),
                    comp_name: comp.name.clone(),
                    champion_id: unit.champion_id.clone(),
                    item_id: item_id.clone(),
                });
            }
        }
    }

    for position in &comp.positioning {
        if !champion_index.contains_key(&position.champion_id) {
            return Err(DatasetIntegrityError::UnknownPositionChampion {
                comp_id: comp.id.clone(),
                comp_name: comp.name.clone(),
                champion_id: position.champion_id.clone(),
            });
        }
    }

    let mut seen = HashSet::with_capacity(comp.positioning.len());
    for position in &comp.positioning {
        if !seen.insert(position.cell()) {
            return Err(DatasetIntegrityError::DuplicatePosition {
                comp_id: comp.id.clone(),
                comp_name: comp.name.clone(),
                x: position.x,
                y: position.y,
            });
        }
    }

    Ok(())
}
