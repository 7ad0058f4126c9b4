use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use log::info;

use crate::domain::models::{
    CalibrationBucket, QuestionFeedback, SessionEntry, SessionSummary,
};
use crate::rating::elo;
use crate::scoring;
use crate::scoring::{ConfidenceLevel, Interval};

/// Replays a recorded session through the scoring and rating engines.
pub struct ReplayService {
    starting_rating: f64,
}

pub struct SessionReport {
    pub feedback: Vec<QuestionFeedback>,
    pub summary: SessionSummary,
}

/// Load a recorded session file (JSON list of question/answer entries).
pub fn load_session(path: &Path) -> Result<Vec<SessionEntry>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read session file: {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse session file: {}", path.display()))
}

impl ReplayService {
    pub fn new(starting_rating: f64) -> Self {
        Self {
            starting_rating: starting_rating.clamp(elo::MIN_RATING, elo::MAX_RATING),
        }
    }

    pub fn run(&self, entries: &[SessionEntry]) -> Result<SessionReport> {
        info!("Replaying session with {} questions", entries.len());

        let mut rating = self.starting_rating;
        let mut feedback = Vec::with_capacity(entries.len());

        for (idx, entry) in entries.iter().enumerate() {
            let (item, new_rating) = self
                .score_entry(entry, rating)
                .with_context(|| format!("Failed to score question {}", idx + 1))?;
            rating = new_rating;
            feedback.push(item);
        }

        let summary = self.summarize(entries, &feedback, rating);
        info!(
            "Session complete: {} points over {} questions, rating {} → {}",
            summary.total_points, summary.questions_played, self.starting_rating, rating
        );

        Ok(SessionReport { feedback, summary })
    }

    fn score_entry(
        &self,
        entry: &SessionEntry,
        rating: f64,
    ) -> Result<(QuestionFeedback, f64)> {
        let confidence = ConfidenceLevel::from_percent(entry.confidence).ok_or_else(|| {
            anyhow!(
                "Unsupported confidence level: {} (expected one of 50, 60, 70, 80, 90)",
                entry.confidence
            )
        })?;

        let interval = Interval::new(entry.lower, entry.upper);
        let result = scoring::calculate_score(
            confidence,
            interval,
            entry.question.answer,
            &entry.question.units,
        );
        let new_rating = elo::update_rating(rating, result.points);

        let item = QuestionFeedback {
            question: entry.question.question.clone(),
            points: result.points,
            hit: result.hit,
            true_exponent: result.true_exponent,
            rule: result.rule,
            raw_answer: entry.question.answer,
            units: entry.question.units.clone(),
            source_text: entry.question.source_text.clone(),
            source_url: entry.question.source_url.clone(),
            rating_delta: round_to_hundredths(new_rating - rating),
        };

        Ok((item, new_rating))
    }

    fn summarize(
        &self,
        entries: &[SessionEntry],
        feedback: &[QuestionFeedback],
        final_rating: f64,
    ) -> SessionSummary {
        let total: f64 = feedback.iter().map(|f| f.points).sum();
        let hits = feedback.iter().filter(|f| f.hit).count();
        let average = if feedback.is_empty() {
            0.0
        } else {
            total / feedback.len() as f64
        };

        SessionSummary {
            questions_played: feedback.len(),
            total_points: round_to_hundredths(total),
            average_points: round_to_hundredths(average),
            hits,
            starting_rating: self.starting_rating,
            final_rating,
            played_at: Utc::now(),
            calibration: calibration_buckets(entries, feedback),
        }
    }
}

/// Answered/hit tallies per declared confidence level, skipping levels the
/// session never used.
fn calibration_buckets(
    entries: &[SessionEntry],
    feedback: &[QuestionFeedback],
) -> Vec<CalibrationBucket> {
    ConfidenceLevel::ALL
        .iter()
        .filter_map(|level| {
            let percent = level.percent();
            let answered = entries
                .iter()
                .filter(|e| e.confidence == percent)
                .count();
            if answered == 0 {
                return None;
            }

            let hits = entries
                .iter()
                .zip(feedback.iter())
                .filter(|(e, f)| e.confidence == percent && f.hit)
                .count();

            Some(CalibrationBucket {
                confidence: percent,
                answered,
                hits,
                hit_rate: hits as f64 / answered as f64,
            })
        })
        .collect()
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
