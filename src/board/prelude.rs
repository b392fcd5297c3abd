//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use lonely_knight::board::prelude::*;
//!
//! let solver = Solver::new(INITIAL_X, INITIAL_Y).unwrap();
//! assert_eq!(solver.board().cell(0, 0), Some(0));
//! ```

pub use super::{
    Knight, Position, Solver, SolverError, TourState, Visits, BOARD_HEIGHT, BOARD_WIDTH, EMPTY,
    INITIAL_X, INITIAL_Y,
};
