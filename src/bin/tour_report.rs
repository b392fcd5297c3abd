use std::env;
use std::process::ExitCode;

use lonely_knight::board::Solver;
use lonely_knight::play::render_board;

const USAGE: &str = "usage: tour_report [x y]   (0-based board coordinates)";

fn main() -> ExitCode {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (x, y) = match args.as_slice() {
        [] => (0, 0),
        [x, y] => match (x.parse(), y.parse()) {
            (Ok(x), Ok(y)) => (x, y),
            _ => {
                eprintln!("{USAGE}");
                return ExitCode::FAILURE;
            }
        },
        _ => {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let mut solver = match Solver::new(x, y) {
        Ok(solver) => solver,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let summary = solver.run_to_end();
    println!("start: {}", summary.start);
    println!("moves: {}", summary.moves);
    println!("complete: {}", summary.complete);
    let path: Vec<String> = summary.path.iter().map(ToString::to_string).collect();
    println!("path: {}", path.join(" "));
    print!("{}", render_board(solver.board(), solver.number_of_moves()));
    ExitCode::SUCCESS
}
