//! The knight piece: its square and its L-shaped move geometry.

use super::attack_tables::KNIGHT_DESTINATIONS;
use super::types::{Destinations, Position};

/// Check that `from -> to` is a single knight move with both ends on the
/// board.
#[must_use]
pub fn is_knight_move(from: Position, to: Position) -> bool {
    if !from.is_on_board() || !to.is_on_board() {
        return false;
    }
    let dx = (from.x() - to.x()).abs();
    let dy = (from.y() - to.y()).abs();
    matches!((dx, dy), (1, 2) | (2, 1))
}

/// A knight and its current square.
///
/// The constructors do not validate the square; an off-board knight simply
/// has no destinations and refuses every move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Knight {
    position: Position,
}

impl Knight {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Knight {
            position: Position::new(x, y),
        }
    }

    #[must_use]
    pub const fn at(position: Position) -> Self {
        Knight { position }
    }

    /// Destinations reachable from `(x, y)`, in offset order.
    ///
    /// Empty when the source itself is off the board.
    #[must_use]
    pub fn moves_from(&self, x: i32, y: i32) -> Destinations {
        Self::destinations(Position::new(x, y))
    }

    #[must_use]
    pub fn moves_from_position(&self, from: &Position) -> Destinations {
        Self::destinations(*from)
    }

    /// Destinations from the knight's current square.
    #[must_use]
    pub fn possible_moves(&self) -> Destinations {
        Self::destinations(self.position)
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Move to `(x, y)` if that is a legal knight move from here.
    ///
    /// Returns `false` and leaves the knight in place otherwise.
    pub fn move_to(&mut self, x: i32, y: i32) -> bool {
        self.move_to_position(&Position::new(x, y))
    }

    pub fn move_to_position(&mut self, to: &Position) -> bool {
        if !is_knight_move(self.position, *to) {
            return false;
        }
        self.position = *to;
        true
    }

    pub(crate) fn destinations(from: Position) -> Destinations {
        match from.index() {
            Some(idx) => KNIGHT_DESTINATIONS[idx],
            None => Destinations::new(),
        }
    }
}
