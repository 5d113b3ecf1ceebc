use chess_movegen::{
    protocol::{handle_command, parse_command, Command, Flow},
    Engine,
};
use std::io::{self, BufRead};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let input = match line {
            Ok(input) => input,
            Err(err) => {
                eprintln!("{}", err);
                return ExitCode::FAILURE;
            }
        };

        let Some(input) = parse_command(&input) else {
            continue;
        };

        let result = input
            .parse::<Command>()
            .and_then(|cmd| handle_command(&cmd, &mut engine, &mut stdout));

        match result {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(err) => {
                eprintln!("{}", err);
                if engine.options.strict_mode {
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    ExitCode::SUCCESS
}
