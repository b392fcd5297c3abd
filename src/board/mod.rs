//! Knight-tour engine.
//!
//! A [`Solver`] owns an 8x8 [`Visits`] board and a [`Knight`], and walks the
//! knight around the board one move at a time with Warnsdorff's rule.
//!
//! # Example
//! ```
//! use lonely_knight::board::{Position, Solver};
//!
//! let mut solver = Solver::new(0, 0).unwrap();
//! assert_eq!(solver.next_move(), Some(Position::new(1, 2)));
//! println!("knight is on {}", solver.knight_position());
//! ```

mod attack_tables;
mod constants;
mod error;
mod knight;
pub mod prelude;
mod solver;
mod types;
mod visits;

#[cfg(test)]
mod tests;

pub use constants::{
    BOARD_HEIGHT, BOARD_SQUARES, BOARD_WIDTH, EMPTY, INITIAL_X, INITIAL_Y, KNIGHT_OFFSETS,
    MAX_DESTINATIONS,
};
pub use error::SolverError;
pub use knight::{is_knight_move, Knight};
pub use solver::{Candidate, Solver, Tour, TourState, TourSummary};
pub use types::{Destinations, DestinationsIntoIter, Position};
pub use visits::Visits;
