//! Board printing for the interactive front-end.

use std::fmt::Write as _;
use std::io::{self, Write};

use crate::board::{Visits, EMPTY};

/// Render the board with each square's move number.
///
/// The square holding `move_number` is the knight and shows as `**`.
/// Rows run along x, columns along y.
#[must_use]
pub fn render_board(visits: &Visits, move_number: u32) -> String {
    let mut out = String::with_capacity(300);
    for row in visits.rows() {
        for &cell in row {
            match cell {
                EMPTY => out.push_str("[  ]"),
                k if k == move_number as i32 => out.push_str("[**]"),
                k => {
                    let _ = write!(out, "[{k:02}]");
                }
            }
        }
        out.push('\n');
    }
    let _ = write!(out, "\nMove number:  {move_number}\n");
    out
}

pub fn print_board(out: &mut impl Write, visits: &Visits, move_number: u32) -> io::Result<()> {
    out.write_all(render_board(visits, move_number).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Solver;

    #[test]
    fn test_initial_board_shows_knight_only() {
        let solver = Solver::new(0, 0).unwrap();
        let text = render_board(solver.board(), 0);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "[**][  ][  ][  ][  ][  ][  ][  ]");
        assert!(lines[1..8].iter().all(|l| *l == "[  ]".repeat(8)));
        assert_eq!(lines[8], "");
        assert_eq!(lines[9], "Move number:  0");
    }

    #[test]
    fn test_single_digit_moves_are_padded() {
        let mut solver = Solver::new(0, 0).unwrap();
        solver.next_move();
        solver.next_move();
        let text = render_board(solver.board(), solver.number_of_moves());
        let lines: Vec<&str> = text.lines().collect();
        // (0,0)=0, (0,4)=2 (knight), (1,2)=1
        assert_eq!(lines[0], "[00][  ][  ][  ][**][  ][  ][  ]");
        assert_eq!(lines[1], "[  ][  ][01][  ][  ][  ][  ][  ]");
        assert!(text.ends_with("Move number:  2\n"));
    }

    #[test]
    fn test_two_digit_moves_unpadded() {
        let mut solver = Solver::new(0, 0).unwrap();
        solver.tour().for_each(drop);
        let text = render_board(solver.board(), solver.number_of_moves());
        let first = text.lines().next().unwrap();
        assert_eq!(first, "[00][15][26][21][02][17][62][47]");
        assert_eq!(text.matches("[**]").count(), 1);
    }
}
