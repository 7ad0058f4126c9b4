use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::rating::elo::INITIAL_RATING;

#[derive(Parser, Debug)]
#[command(author, version, about = "fermi-calibration game backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Score a single interval estimate against the true answer
    Score {
        /// Declared confidence percentage (50, 60, 70, 80 or 90)
        #[arg(short, long, default_value_t = 80)]
        confidence: u8,
        /// Lower bound of the interval
        #[arg(short, long)]
        lower: f64,
        /// Upper bound of the interval
        #[arg(short, long)]
        upper: f64,
        /// True answer, optionally with its unit, e.g. "3.2e13 km"
        #[arg(short, long)]
        answer: String,
        /// Unit override (percent quantities always score on the raw scale)
        #[arg(long)]
        unit: Option<String>,
        /// Current rating; when given, the rating update is shown as well
        #[arg(short, long)]
        rating: Option<f64>,
    },
    /// Replay a recorded session through the scoring and rating engines
    Replay {
        /// Session file (JSON list of question/confidence/interval entries)
        #[arg(short, long)]
        file: PathBuf,
        /// Starting rating
        #[arg(short, long, default_value_t = INITIAL_RATING)]
        rating: f64,
        /// Emit the summary as JSON instead of the text report
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Summarize a question-set file
    Inspect {
        /// Question file (defaults to the configured question set)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}
