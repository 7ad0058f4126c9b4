pub mod cli;
pub mod config;
pub mod domain;
pub mod questions;
pub mod rating;
pub mod report;
pub mod scoring;
pub mod services;

use std::path::Path;

use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;

use crate::cli::{Cli, Command};
use crate::config::settings::AppConfig;
use crate::domain::answers::AnswerParser;
use crate::rating::elo;
use crate::scoring::{ConfidenceLevel, Interval};
use crate::services::inspect::InspectService;
use crate::services::replay::{self, ReplayService};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_score(
    confidence: u8,
    lower: f64,
    upper: f64,
    answer: &str,
    unit: Option<&str>,
    rating: Option<f64>,
) -> Result<()> {
    let confidence = ConfidenceLevel::from_percent(confidence).ok_or_else(|| {
        anyhow!("Unsupported confidence level: {confidence} (expected one of 50, 60, 70, 80, 90)")
    })?;

    let parsed = AnswerParser::new()?
        .parse(answer)
        .ok_or_else(|| anyhow!("Failed to parse answer value from: {answer}"))?;
    let unit = unit.unwrap_or(&parsed.unit);

    let interval = Interval::new(lower, upper);
    let result = scoring::calculate_score(confidence, interval, parsed.value, unit);
    report::print_score(&result, parsed.value, unit);

    if let Some(current) = rating {
        let updated = elo::update_rating(current, result.points);
        report::print_rating_change(current, updated);
    }

    Ok(())
}

pub fn handle_replay(file: &Path, rating: f64, json: bool) -> Result<()> {
    let entries = replay::load_session(file)?;
    let service = ReplayService::new(rating);
    let session = service.run(&entries)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&session.summary)?);
    } else {
        report::print_session_report(&session);
    }

    Ok(())
}

pub fn handle_inspect(file: Option<&Path>) -> Result<()> {
    let config = AppConfig::new();
    let service = InspectService::new(config);
    service.run(file)
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
