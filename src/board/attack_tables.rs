//! Precomputed knight destinations for every square of the board.

use once_cell::sync::Lazy;

use super::constants::{BOARD_SQUARES, KNIGHT_OFFSETS};
use super::types::{Destinations, Position};

/// Destinations per square, indexed by [`Position::index`], each list in
/// `KNIGHT_OFFSETS` order.
pub(crate) static KNIGHT_DESTINATIONS: Lazy<[Destinations; BOARD_SQUARES]> = Lazy::new(|| {
    let mut table = [Destinations::new(); BOARD_SQUARES];
    for (idx, slot) in table.iter_mut().enumerate() {
        let from = Position::from_index(idx);
        for (dx, dy) in KNIGHT_OFFSETS {
            let to = from.offset(dx, dy);
            if to.is_on_board() {
                slot.push(to);
            }
        }
    }
    table
});
