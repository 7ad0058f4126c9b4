use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::ScoringRule;

/// A Fermi estimation question with its sourced answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FermiQuestion {
    pub question: String,
    pub answer: f64,
    #[serde(default)]
    pub units: String,
    #[serde(default)]
    pub source_text: String,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub difficulty: Option<String>,
}

/// A raw answer string split into numeric value and unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedAnswer {
    pub value: f64,
    pub unit: String,
}

/// One answered question in a recorded session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEntry {
    pub question: FermiQuestion,
    pub confidence: u8,
    pub lower: f64,
    pub upper: f64,
}

/// Per-question feedback shown to the player after scoring.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionFeedback {
    pub question: String,
    pub points: f64,
    pub hit: bool,
    pub true_exponent: f64,
    pub rule: ScoringRule,
    pub raw_answer: f64,
    pub units: String,
    pub source_text: String,
    pub source_url: String,
    pub rating_delta: f64,
}

/// Answered/hit tally for one declared confidence level, compared against
/// the stated percentage to judge calibration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalibrationBucket {
    pub confidence: u8,
    pub answered: usize,
    pub hits: usize,
    pub hit_rate: f64,
}

/// End-of-session rollup.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub questions_played: usize,
    pub total_points: f64,
    pub average_points: f64,
    pub hits: usize,
    pub starting_rating: f64,
    pub final_rating: f64,
    pub played_at: DateTime<Utc>,
    pub calibration: Vec<CalibrationBucket>,
}
