//! Core domain types for the Compsage recommendation engine.
//!
//! These models describe champions, items, and pre-authored team
//! compositions ("comps"), together with the validated [`Dataset`]
//! collection every other component reads from. Constructors return
//! `Result` to surface invalid input early; a [`Dataset`] can only be
//! built through its referential validator, so downstream code never
//! sees a dangling champion or item reference.

#![forbid(unsafe_code)]

mod board;
mod champion;
mod comp;
mod dataset;
mod inventory;
mod unit;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use board::{BOARD_COLUMNS, BOARD_ROWS, BoardPosition};
pub use champion::{Champion, Item, MAX_CHAMPION_COST, MIN_CHAMPION_COST};
pub use comp::Comp;
pub use dataset::{Dataset, DatasetIntegrityError};
pub use inventory::Inventory;
pub use unit::{CompUnit, UnitRole};
