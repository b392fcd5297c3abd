//! Error types for the tour engine.

use std::fmt;

/// Error type for solver construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Starting square is not on the 8x8 board
    StartOutOfBounds { x: i32, y: i32 },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverError::StartOutOfBounds { x, y } => {
                write!(f, "Starting square ({x},{y}) is off the board (must be 0-7)")
            }
        }
    }
}

impl std::error::Error for SolverError {}
