pub mod board;
pub mod play;

pub use board::{Knight, Position, Solver, SolverError, TourState, Visits};
