//! Greedy knight-tour solver using Warnsdorff's rule.
//!
//! Each step takes the unvisited destination with the fewest unvisited
//! onward squares. Ties go to the earliest destination in
//! [`KNIGHT_OFFSETS`](super::constants::KNIGHT_OFFSETS) order; changing that
//! order changes the tours produced.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::constants::{BOARD_SQUARES, INITIAL_X, INITIAL_Y, WEIGHT_SENTINEL};
use super::error::SolverError;
use super::knight::Knight;
use super::types::{Destinations, Position};
use super::visits::Visits;

/// Where the tour stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TourState {
    /// `next_move` may still succeed
    InTour,
    /// No unvisited destination remained; terminal
    DeadEnd,
}

/// An unvisited destination and its onward weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub position: Position,
    pub weight: u8,
}

/// Result of running a tour until it stops.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TourSummary {
    pub start: Position,
    /// Every square in visiting order, start included
    pub path: Vec<Position>,
    pub moves: u32,
    pub complete: bool,
}

/// Owns the visitation board and the knight, and advances the tour one
/// move at a time.
#[derive(Clone, Debug)]
pub struct Solver {
    visits: Visits,
    knight: Knight,
    number_of_moves: u32,
    state: TourState,
}

impl Solver {
    /// Place the knight on `(x, y)` and mark it as move 0.
    pub fn new(x: i32, y: i32) -> Result<Self, SolverError> {
        let start = Position::new(x, y);
        if !start.is_on_board() {
            return Err(SolverError::StartOutOfBounds { x, y });
        }

        #[cfg(feature = "logging")]
        log::debug!("solver starting at {start}");

        Ok(Solver::placed(start))
    }

    fn placed(start: Position) -> Self {
        let mut visits = Visits::new();
        visits.mark(start, 0);
        Solver {
            visits,
            knight: Knight::at(start),
            number_of_moves: 0,
            state: TourState::InTour,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Visits {
        &self.visits
    }

    #[must_use]
    pub fn knight_position(&self) -> Position {
        self.knight.position()
    }

    #[must_use]
    pub fn number_of_moves(&self) -> u32 {
        self.number_of_moves
    }

    #[must_use]
    pub fn state(&self) -> TourState {
        self.state
    }

    /// True once every square has been visited.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.number_of_moves as usize + 1 == BOARD_SQUARES
    }

    /// Unvisited destinations from the knight's square with their weights,
    /// in offset order.
    #[must_use]
    pub fn candidates(&self) -> Vec<Candidate> {
        self.scored().collect()
    }

    /// Advance one move, returning the square moved to.
    ///
    /// Returns `None` once no unvisited destination is left; from then on
    /// the solver stays in [`TourState::DeadEnd`] and never changes.
    pub fn next_move(&mut self) -> Option<Position> {
        if self.state == TourState::DeadEnd {
            return None;
        }

        let mut best: Option<Candidate> = None;
        let mut smallest = WEIGHT_SENTINEL;
        for candidate in self.scored() {
            #[cfg(feature = "logging")]
            log::trace!(
                "move {}: candidate {} weight {}",
                self.number_of_moves + 1,
                candidate.position,
                candidate.weight
            );
            // Strict comparison keeps the earliest of equal weights.
            if candidate.weight < smallest {
                smallest = candidate.weight;
                best = Some(candidate);
            }
        }

        let Some(chosen) = best else {
            self.state = TourState::DeadEnd;
            #[cfg(feature = "logging")]
            log::info!(
                "dead end at {} after {} moves",
                self.knight.position(),
                self.number_of_moves
            );
            return None;
        };
        let position = chosen.position;

        // Candidates come from the knight's own destinations.
        let moved = self.knight.move_to_position(&position);
        debug_assert!(moved, "knight refused generated move to {position}");
        self.number_of_moves += 1;
        self.visits.mark(position, self.number_of_moves);

        #[cfg(feature = "logging")]
        log::debug!(
            "move {}: {} (weight {})",
            self.number_of_moves,
            position,
            chosen.weight
        );

        Some(position)
    }

    /// Iterator over the remaining moves of the tour.
    pub fn tour(&mut self) -> Tour<'_> {
        Tour { solver: self }
    }

    /// Play the tour out and summarise it.
    pub fn run_to_end(&mut self) -> TourSummary {
        let mut path = self.path();
        path.extend(self.tour());
        TourSummary {
            start: path[0],
            path,
            moves: self.number_of_moves,
            complete: self.is_complete(),
        }
    }

    /// Squares visited so far, in order.
    #[must_use]
    pub fn path(&self) -> Vec<Position> {
        let mut visited: Vec<(Position, u32)> = self.visits.iter_visited().collect();
        visited.sort_unstable_by_key(|&(_, k)| k);
        visited.into_iter().map(|(pos, _)| pos).collect()
    }

    fn unvisited_moves(&self) -> Destinations {
        self.knight
            .possible_moves()
            .filtered(|pos| self.visits.is_empty_at(pos))
    }

    fn scored(&self) -> impl Iterator<Item = Candidate> + '_ {
        self.unvisited_moves().into_iter().map(move |position| Candidate {
            position,
            weight: self.visits.count_unvisited_from(&position),
        })
    }
}

impl Default for Solver {
    fn default() -> Self {
        Solver::placed(Position::new(INITIAL_X, INITIAL_Y))
    }
}

/// Yields each successful move until the tour dead-ends.
pub struct Tour<'a> {
    solver: &'a mut Solver,
}

impl Iterator for Tour<'_> {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        self.solver.next_move()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = BOARD_SQUARES - 1 - self.solver.number_of_moves as usize;
        (0, Some(remaining))
    }
}

impl std::iter::FusedIterator for Tour<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::constants::EMPTY;

    #[test]
    fn test_new_marks_only_start() {
        let solver = Solver::new(3, 5).unwrap();
        for (x, row) in solver.board().rows().iter().enumerate() {
            for (y, &cell) in row.iter().enumerate() {
                let expected = if (x, y) == (3, 5) { 0 } else { EMPTY };
                assert_eq!(cell, expected, "cell ({x},{y})");
            }
        }
        assert_eq!(solver.knight_position(), Position::new(3, 5));
        assert_eq!(solver.number_of_moves(), 0);
        assert_eq!(solver.state(), TourState::InTour);
    }

    #[test]
    fn test_new_rejects_off_board_start() {
        assert_eq!(
            Solver::new(8, 0).unwrap_err(),
            SolverError::StartOutOfBounds { x: 8, y: 0 }
        );
        assert!(Solver::new(0, -1).is_err());
    }

    #[test]
    fn test_default_starts_in_corner() {
        let solver = Solver::default();
        assert_eq!(solver.knight_position(), Position::new(0, 0));
        assert_eq!(solver.board()[(0, 0)], 0);
    }

    #[test]
    fn test_first_move_from_corner_breaks_tie_by_order() {
        let mut solver = Solver::new(0, 0).unwrap();
        let candidates = solver.candidates();
        assert_eq!(
            candidates,
            vec![
                Candidate { position: Position::new(1, 2), weight: 5 },
                Candidate { position: Position::new(2, 1), weight: 5 },
            ]
        );
        assert_eq!(solver.next_move(), Some(Position::new(1, 2)));
        assert_eq!(solver.board()[(1, 2)], 1);
        assert_eq!(solver.knight_position(), Position::new(1, 2));
        assert_eq!(solver.number_of_moves(), 1);
    }

    #[test]
    fn test_path_follows_move_numbers() {
        let mut solver = Solver::new(0, 0).unwrap();
        solver.next_move();
        solver.next_move();
        assert_eq!(
            solver.path(),
            vec![Position::new(0, 0), Position::new(1, 2), Position::new(0, 4)]
        );
    }

    #[test]
    fn test_tour_iterator_stops_at_dead_end() {
        let mut solver = Solver::new(0, 0).unwrap();
        let moves: Vec<Position> = solver.tour().collect();
        assert_eq!(moves.len(), 63);
        assert_eq!(solver.state(), TourState::DeadEnd);
        assert!(solver.is_complete());
        assert!(solver.tour().next().is_none());
    }

    #[test]
    fn test_run_to_end_summary() {
        let mut solver = Solver::new(7, 7).unwrap();
        let summary = solver.run_to_end();
        assert_eq!(summary.start, Position::new(7, 7));
        assert_eq!(summary.moves, 63);
        assert_eq!(summary.path.len(), 64);
        assert!(summary.complete);
    }
}
