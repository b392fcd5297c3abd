//! The 8x8 visitation board.

use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::constants::{BOARD_HEIGHT, BOARD_WIDTH, EMPTY};
use super::knight::Knight;
use super::types::Position;

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Move indices per square, indexed `[x][y]`.
///
/// A cell holds [`EMPTY`] until the knight lands on it, then the number of
/// the move that brought it there.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Visits {
    cells: [[i32; HEIGHT]; WIDTH],
}

impl Visits {
    #[must_use]
    pub(crate) fn new() -> Self {
        Visits {
            cells: [[EMPTY; HEIGHT]; WIDTH],
        }
    }

    /// Value at `(x, y)`; `None` off the board.
    #[must_use]
    pub fn cell(&self, x: i32, y: i32) -> Option<i32> {
        if !Position::new(x, y).is_on_board() {
            return None;
        }
        Some(self.cells[x as usize][y as usize])
    }

    #[must_use]
    pub fn at(&self, pos: Position) -> Option<i32> {
        self.cell(pos.x(), pos.y())
    }

    /// True for an on-board square that has not been visited.
    #[must_use]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.at(pos) == Some(EMPTY)
    }

    /// Callers pass on-board squares only.
    pub(crate) fn mark(&mut self, pos: Position, move_number: u32) {
        debug_assert!(pos.is_on_board(), "marking off-board square {pos}");
        self.cells[pos.x() as usize][pos.y() as usize] = move_number as i32;
    }

    /// Rows in x order; each row holds the y cells.
    #[must_use]
    pub fn rows(&self) -> &[[i32; HEIGHT]; WIDTH] {
        &self.cells
    }

    /// Visited squares with their move numbers, in board order.
    pub fn iter_visited(&self) -> impl Iterator<Item = (Position, u32)> + '_ {
        self.cells.iter().enumerate().flat_map(|(x, row)| {
            row.iter().enumerate().filter_map(move |(y, &cell)| {
                (cell != EMPTY).then(|| (Position::new(x as i32, y as i32), cell as u32))
            })
        })
    }

    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.iter_visited().count()
    }

    /// Unvisited squares one knight move away from `from`.
    #[must_use]
    pub fn count_unvisited_from(&self, from: &Position) -> u8 {
        Knight::destinations(*from)
            .iter()
            .filter(|&&p| self.is_empty_at(p))
            .count() as u8
    }
}

impl Default for Visits {
    fn default() -> Self {
        Visits::new()
    }
}

impl Index<(usize, usize)> for Visits {
    type Output = i32;

    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        &self.cells[x][y]
    }
}
