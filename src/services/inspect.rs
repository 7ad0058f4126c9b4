use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::config::settings::AppConfig;
use crate::domain::models::FermiQuestion;
use crate::questions::loader;
use crate::report;
use crate::scoring::ScoringRule;

/// Summarizes a question-set file before it is used for play.
pub struct InspectService {
    config: AppConfig,
}

pub struct QuestionSetSummary {
    pub total: usize,
    pub scorable: usize,
    pub dropped: usize,
    pub distance_scored: usize,
    pub order_of_magnitude_scored: usize,
    pub categories: Vec<CategoryCount>,
}

pub struct CategoryCount {
    pub name: String,
    pub questions: usize,
}

impl InspectService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self, file: Option<&Path>) -> Result<()> {
        let default_path = Path::new(self.config.game.questions_file);
        let path = file.unwrap_or(default_path);
        info!("Inspecting question set: {}", path.display());

        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read question file: {}", path.display()))?;
        let questions = loader::decode_questions(&json)
            .with_context(|| format!("Failed to parse question file: {}", path.display()))?;

        let summary = summarize_questions(&questions);
        report::print_question_set_summary(&summary);
        Ok(())
    }
}

fn summarize_questions(questions: &[FermiQuestion]) -> QuestionSetSummary {
    let total = questions.len();
    let scorable: Vec<&FermiQuestion> = questions
        .iter()
        .filter(|q| loader::is_answerable(q))
        .collect();

    let distance_scored = scorable
        .iter()
        .filter(|q| ScoringRule::select(q.answer, &q.units) == ScoringRule::Distance)
        .count();

    QuestionSetSummary {
        total,
        scorable: scorable.len(),
        dropped: total - scorable.len(),
        distance_scored,
        order_of_magnitude_scored: scorable.len() - distance_scored,
        categories: tally_categories(&scorable),
    }
}

fn tally_categories(questions: &[&FermiQuestion]) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for question in questions {
        let name = if question.category.is_empty() {
            "uncategorized"
        } else {
            question.category.as_str()
        };
        *counts.entry(name).or_insert(0) += 1;
    }

    let mut categories: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(name, questions)| CategoryCount {
            name: name.to_string(),
            questions,
        })
        .collect();
    categories.sort_by(|a, b| b.questions.cmp(&a.questions).then(a.name.cmp(&b.name)));
    categories
}
