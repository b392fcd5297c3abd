use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    lonely_knight::play::run(&args)
}
