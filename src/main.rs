use anyhow::Result;

use fermi_calibration::cli::Command;
use fermi_calibration::{
    handle_completions, handle_inspect, handle_replay, handle_score, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(command)
}

fn execute_command(command: Command) -> Result<()> {
    match command {
        Command::Score {
            confidence,
            lower,
            upper,
            answer,
            unit,
            rating,
        } => handle_score(confidence, lower, upper, &answer, unit.as_deref(), rating),
        Command::Replay { file, rating, json } => handle_replay(&file, rating, json),
        Command::Inspect { file } => handle_inspect(file.as_deref()),
        Command::Completions { shell } => handle_completions(shell),
    }
}
