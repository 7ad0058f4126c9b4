use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::domain::models::FermiQuestion;

/// Load a question-set file, keeping only questions that can be scored.
pub fn load_questions(path: &Path) -> Result<Vec<FermiQuestion>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read question file: {}", path.display()))?;
    let questions = decode_questions(&json)
        .with_context(|| format!("Failed to parse question file: {}", path.display()))?;
    Ok(retain_answerable(questions))
}

pub fn decode_questions(json: &str) -> Result<Vec<FermiQuestion>> {
    serde_json::from_str(json).context("Failed to deserialize question data")
}

/// A question needs a finite positive answer to be scorable.
pub fn is_answerable(question: &FermiQuestion) -> bool {
    question.answer.is_finite() && question.answer > 0.0
}

fn retain_answerable(questions: Vec<FermiQuestion>) -> Vec<FermiQuestion> {
    let total = questions.len();
    let valid: Vec<FermiQuestion> = questions.into_iter().filter(is_answerable).collect();

    let dropped = total - valid.len();
    if dropped > 0 {
        info!("Dropped {} of {} questions with unscorable answers", dropped, total);
    }

    valid
}
