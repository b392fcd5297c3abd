//! Interactive command-line front-end.
//!
//! Reads an optional starting square from the arguments, then advances
//! the tour one move per line of input and prints the board after each.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use crate::board::{Position, Solver, SolverError, BOARD_HEIGHT, BOARD_WIDTH};

pub mod print;

pub use print::{print_board, render_board};

/// Offset between the 1-based user coordinates and the board's.
const INPUT_OFFSET: i32 = 1;

const PROMPT: &str = "Hit enter to continue (^D to exit): ";

/// Error type for command-line argument parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    /// Neither zero nor two positional arguments
    WrongCount { found: usize },
    /// Argument is not an integer
    NotANumber { arg: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::WrongCount { found } => {
                write!(f, "Expected 0 or 2 arguments, found {found}")
            }
            ArgsError::NotANumber { arg } => {
                write!(f, "Invalid coordinate '{arg}', expected an integer")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

/// Error type for an interactive session
#[derive(Debug)]
pub enum PlayError {
    /// Bad command-line arguments
    Args(ArgsError),
    /// Starting square rejected by the solver
    Solver(SolverError),
    /// Reading input or writing output failed
    Io(io::Error),
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayError::Args(e) => write!(f, "{e}"),
            PlayError::Solver(e) => write!(f, "{e}"),
            PlayError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for PlayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlayError::Args(e) => Some(e),
            PlayError::Solver(e) => Some(e),
            PlayError::Io(e) => Some(e),
        }
    }
}

impl From<ArgsError> for PlayError {
    fn from(e: ArgsError) -> Self {
        PlayError::Args(e)
    }
}

impl From<SolverError> for PlayError {
    fn from(e: SolverError) -> Self {
        PlayError::Solver(e)
    }
}

impl From<io::Error> for PlayError {
    fn from(e: io::Error) -> Self {
        PlayError::Io(e)
    }
}

/// Where the knight starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartArgs {
    /// No arguments: the default corner
    Default,
    /// Two arguments, already converted to board coordinates
    Custom(Position),
}

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The knight had nowhere left to go
    OutOfMoves,
    /// Input reached end-of-file
    InputClosed,
}

/// Convert one 1-based user coordinate to a board coordinate.
///
/// Negative values are mirrored, positive values shifted down by one, and
/// anything past `limit` pulled back to `limit - 1`. A value of exactly
/// `limit` after the shift is left alone and later rejected by the solver.
#[must_use]
pub fn sanitize_coordinate(value: i32, limit: i32) -> i32 {
    let mut value = value.saturating_abs();
    if value > 0 {
        value -= INPUT_OFFSET;
    }
    if value > limit {
        value = limit - INPUT_OFFSET;
    }
    value
}

/// Parse the positional arguments (program name excluded).
pub fn parse_start<S: AsRef<str>>(args: &[S]) -> Result<StartArgs, ArgsError> {
    match args {
        [] => Ok(StartArgs::Default),
        [x, y] => {
            let x = parse_coordinate(x.as_ref())?;
            let y = parse_coordinate(y.as_ref())?;
            Ok(StartArgs::Custom(Position::new(
                sanitize_coordinate(x, BOARD_WIDTH),
                sanitize_coordinate(y, BOARD_HEIGHT),
            )))
        }
        _ => Err(ArgsError::WrongCount { found: args.len() }),
    }
}

fn parse_coordinate(arg: &str) -> Result<i32, ArgsError> {
    arg.trim().parse().map_err(|_| ArgsError::NotANumber {
        arg: arg.to_string(),
    })
}

#[must_use]
pub fn usage(program: &str) -> String {
    format!(
        "usage:        {program}\n              {program} starting_x_position starting_y_position\n"
    )
}

/// Drive `solver` from `input`, one move per line, printing to `out`.
///
/// Prints the starting board first. Stops at end of input or when the
/// knight runs out of moves.
pub fn run_session(
    solver: &mut Solver,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<SessionEnd, PlayError> {
    print_board(out, solver.board(), solver.number_of_moves())?;

    let mut line = String::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            #[cfg(feature = "logging")]
            log::debug!("input closed after {} moves", solver.number_of_moves());
            return Ok(SessionEnd::InputClosed);
        }
        writeln!(out, "\n\n")?;

        if solver.next_move().is_none() {
            writeln!(out, "Out of Moves!")?;
            print_board(out, solver.board(), solver.number_of_moves())?;
            return Ok(SessionEnd::OutOfMoves);
        }
        print_board(out, solver.board(), solver.number_of_moves())?;
    }
}

/// Entry point for the `lonely_knight` binary. `args` includes the
/// program name.
pub fn run(args: &[String]) -> ExitCode {
    let program = args.first().map_or("lonely_knight", String::as_str);
    let stdin = io::stdin();
    let stdout = io::stdout();

    let rest = args.get(1..).unwrap_or_default();

    let result = play(rest, &mut stdin.lock(), &mut stdout.lock());
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(PlayError::Args(ArgsError::WrongCount { .. })) => {
            print!("{}", usage(program));
            ExitCode::SUCCESS
        }
        Err(e @ (PlayError::Args(_) | PlayError::Solver(_))) => {
            eprintln!("error: {e}");
            eprint!("{}", usage(program));
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn play(
    args: &[String],
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<SessionEnd, PlayError> {
    let mut solver = match parse_start(args)? {
        StartArgs::Default => Solver::default(),
        StartArgs::Custom(start) => {
            writeln!(out, "Custom starting location:  {start}")?;
            Solver::new(start.x(), start.y())?
        }
    };
    run_session(&mut solver, input, out)
}
