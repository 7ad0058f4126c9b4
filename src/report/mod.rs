use colored::{ColoredString, Colorize};

use crate::domain::answers::{format_answer, format_exponent};
use crate::scoring::ScoreResult;
use crate::services::inspect::QuestionSetSummary;
use crate::services::replay::SessionReport;

pub fn print_score(result: &ScoreResult, answer: f64, unit: &str) {
    println!("Rule:     {}", result.rule.as_str());
    println!(
        "Answer:   {} {} ({})",
        format_answer(answer),
        unit,
        format_exponent(result.true_exponent)
    );
    println!("Outcome:  {}", hit_marker(result.hit));
    println!("Points:   {}", points_text(result.points));
}

pub fn print_rating_change(current: f64, updated: f64) {
    println!(
        "Rating:   {:.2} → {:.2} ({})",
        current,
        updated,
        delta_text(updated - current)
    );
}

pub fn print_session_report(report: &SessionReport) {
    println!();
    for (idx, item) in report.feedback.iter().enumerate() {
        println!(
            "{:>3}. {} {:>8}  Δ{:>8.2}  {}",
            idx + 1,
            hit_marker(item.hit),
            points_text(item.points),
            item.rating_delta,
            item.question
        );
    }

    let summary = &report.summary;
    println!();
    println!("Questions:     {}", summary.questions_played);
    println!("Total points:  {}", points_text(summary.total_points));
    println!("Average:       {}", points_text(summary.average_points));
    println!(
        "Hits:          {} of {}",
        summary.hits, summary.questions_played
    );
    println!(
        "Rating:        {:.2} → {:.2} ({})",
        summary.starting_rating,
        summary.final_rating,
        delta_text(summary.final_rating - summary.starting_rating)
    );

    if !summary.calibration.is_empty() {
        println!();
        println!("Calibration:");
        for bucket in &summary.calibration {
            println!(
                "  {:>2}%  {} answered, {} hit ({:.0}%)",
                bucket.confidence,
                bucket.answered,
                bucket.hits,
                bucket.hit_rate * 100.0
            );
        }
    }
}

pub fn print_question_set_summary(summary: &QuestionSetSummary) {
    println!("Questions:           {}", summary.total);
    println!("Scorable:            {}", summary.scorable);
    println!("Dropped:             {}", summary.dropped);
    println!("Distance rule:       {}", summary.distance_scored);
    println!("Order-of-magnitude:  {}", summary.order_of_magnitude_scored);

    if !summary.categories.is_empty() {
        println!("Categories:");
        for category in &summary.categories {
            println!("  {:<20} {}", category.name, category.questions);
        }
    }
}

fn hit_marker(hit: bool) -> ColoredString {
    if hit {
        "HIT ".green()
    } else {
        "MISS".red()
    }
}

fn points_text(points: f64) -> ColoredString {
    let text = format!("{points:+.2}");
    if points >= 0.0 {
        text.green()
    } else {
        text.red()
    }
}

fn delta_text(delta: f64) -> ColoredString {
    let text = format!("{delta:+.2}");
    if delta >= 0.0 {
        text.green()
    } else {
        text.red()
    }
}
