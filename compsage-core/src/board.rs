//! Board placement for comp units.
//!
//! The board is a fixed 7x4 hex grid; columns run 0..=6 and rows 0..=3.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of columns on the board.
pub const BOARD_COLUMNS: u8 = 7;
/// Number of rows on the board.
pub const BOARD_ROWS: u8 = 4;

/// Placement of a single champion on the board.
///
/// Within one comp no two positions may share a cell; the
/// [`Dataset`](crate::Dataset) validator enforces this.
///
/// # Examples
///
/// ```
/// use compsage_core::BoardPosition;
///
/// let pos = BoardPosition::new("ahri", 3, 2);
/// assert!(pos.in_bounds());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BoardPosition {
    /// Champion placed at this cell.
    pub champion_id: String,
    /// Column in `0..=6`.
    pub x: u8,
    /// Row in `0..=3`.
    pub y: u8,
}

impl BoardPosition {
    /// Construct a board position.
    pub fn new(champion_id: impl Into<String>, x: u8, y: u8) -> Self {
        Self {
            champion_id: champion_id.into(),
            x,
            y,
        }
    }

    /// Whether the cell lies on the 7x4 board.
    #[must_use]
    pub const fn in_bounds(&self) -> bool {
        self.x < BOARD_COLUMNS && self.y < BOARD_ROWS
    }

    /// The `(x, y)` cell key used for duplicate detection.
    #[must_use]
    pub const fn cell(&self) -> (u8, u8) {
        (self.x, self.y)
    }
}
