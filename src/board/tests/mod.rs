//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `edge_cases.rs` - Construction, dead ends and knight edge cases
//! - `tour.rs` - Golden tours that must match move for move
//! - `proptest.rs` - Property-based tests over every starting square


use crate::board::{is_knight_move, Position, Solver, EMPTY};

/// Assert every structural invariant of a solver's board.
pub(super) fn assert_consistent(solver: &Solver) {
    let n = solver.number_of_moves();
    let mut by_move: Vec<Option<Position>> = vec![None; n as usize + 1];

    for (pos, k) in solver.board().iter_visited() {
        assert!(k <= n, "cell {pos} holds {k} beyond move {n}");
        assert!(by_move[k as usize].is_none(), "move {k} recorded twice");
        by_move[k as usize] = Some(pos);
    }

    let path: Vec<Position> = by_move
        .into_iter()
        .enumerate()
        .map(|(k, pos)| pos.unwrap_or_else(|| panic!("move {k} missing")))
        .collect();

    for pair in path.windows(2) {
        assert!(is_knight_move(pair[0], pair[1]), "{} -> {}", pair[0], pair[1]);
    }
    assert_eq!(path.last().copied(), Some(solver.knight_position()));

    let unvisited = solver
        .board()
        .rows()
        .iter()
        .flatten()
        .filter(|&&c| c == EMPTY)
        .count();
    assert_eq!(unvisited + path.len(), 64);
}
