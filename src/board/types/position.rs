//! Board coordinates.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::constants::{BOARD_HEIGHT, BOARD_WIDTH};

/// A pair of board coordinates.
///
/// Positions are plain values and may lie off the board; whether a
/// square is reachable is decided by the knight, not here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    x: i32,
    y: i32,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    #[inline]
    #[must_use]
    pub const fn x(self) -> i32 {
        self.x
    }

    #[inline]
    #[must_use]
    pub const fn y(self) -> i32 {
        self.y
    }

    pub fn set_x(&mut self, x: i32) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: i32) {
        self.y = y;
    }

    /// Replace both coordinates.
    pub fn move_to(&mut self, x: i32, y: i32) {
        self.set_x(x);
        self.set_y(y);
    }

    /// True when both coordinates fall inside the 8x8 board.
    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < BOARD_WIDTH && self.y < BOARD_HEIGHT
    }

    /// Flat index `y * 8 + x`, or `None` off the board.
    #[inline]
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        if self.is_on_board() {
            Some((self.y * BOARD_WIDTH + self.x) as usize)
        } else {
            None
        }
    }

    /// Inverse of [`Position::index`]. Callers pass `idx < 64`.
    #[inline]
    #[must_use]
    pub(crate) const fn from_index(idx: usize) -> Self {
        Position::new(idx as i32 % BOARD_WIDTH, idx as i32 / BOARD_WIDTH)
    }

    /// Offset by `(dx, dy)` without any bounds check.
    #[inline]
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Position::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Position::new(x, y)
    }
}

impl From<Position> for (i32, i32) {
    fn from(pos: Position) -> Self {
        (pos.x, pos.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_to_replaces_both_coordinates() {
        let mut pos = Position::new(3, 4);
        pos.move_to(-2, 9);
        assert_eq!(pos.x(), -2);
        assert_eq!(pos.y(), 9);
    }

    #[test]
    fn test_setters_touch_one_axis() {
        let mut pos = Position::new(1, 1);
        pos.set_x(5);
        assert_eq!(pos, Position::new(5, 1));
        pos.set_y(6);
        assert_eq!(pos, Position::new(5, 6));
    }

    #[test]
    fn test_on_board_bounds() {
        assert!(Position::new(0, 0).is_on_board());
        assert!(Position::new(7, 7).is_on_board());
        assert!(!Position::new(8, 0).is_on_board());
        assert!(!Position::new(0, -1).is_on_board());
    }

    #[test]
    fn test_index_roundtrip_covers_board() {
        for idx in 0..64 {
            let pos = Position::from_index(idx);
            assert_eq!(pos.index(), Some(idx));
        }
        assert_eq!(Position::new(-1, 3).index(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(2, 7).to_string(), "(2,7)");
    }

    #[test]
    fn test_tuple_conversion() {
        let pos: Position = (4, 5).into();
        assert_eq!(pos, Position::new(4, 5));
        let pair: (i32, i32) = pos.into();
        assert_eq!(pair, (4, 5));
    }
}
