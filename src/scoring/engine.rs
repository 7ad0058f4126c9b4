use super::rule::ScoringRule;
use super::types::{ConfidenceLevel, Interval, ScoreResult};
use crate::domain::answers::answer_to_exponent;

/// Best attainable score, approached by a tight interval centered on the
/// true value.
pub const SMAX: f64 = 10.0;

/// Provable worst case of the scoring rule; every result is floored here so
/// one catastrophic miss cannot dominate a session.
pub const SMIN: f64 = -57.26893683880667;

/// Relative half-spread substituted for a zero-width interval.
const DEGENERATE_SPREAD: f64 = 1e-3;

/// Score one interval estimate against the true answer.
///
/// `hit` is judged against the interval as declared (normalized but not
/// δ-expanded); it feeds feedback display only, never the score.
pub fn calculate_score(
    confidence: ConfidenceLevel,
    interval: Interval,
    answer: f64,
    unit: &str,
) -> ScoreResult {
    let rule = ScoringRule::select(answer, unit);
    let hit = interval.contains(answer);
    let true_exponent = answer_to_exponent(answer);

    let scored = widen_if_degenerate(interval);
    let raw = raw_score(rule, confidence.beta(), &scored, answer);

    ScoreResult {
        points: finalize_points(raw),
        hit,
        true_exponent,
        rule,
    }
}

fn raw_score(rule: ScoringRule, beta: f64, interval: &Interval, answer: f64) -> f64 {
    let (lower, upper) = rule.expand(interval);

    // Log-ratios need strictly positive operands; everything else is floored.
    if rule == ScoringRule::OrderOfMagnitude
        && (lower <= 0.0 || upper <= 0.0 || answer <= 0.0)
    {
        return SMIN;
    }

    let c = rule.scale();
    let s = rule.distance(upper, lower) / c;
    if !s.is_finite() || s <= 0.0 {
        return SMIN;
    }

    let raw = if answer < lower {
        miss_penalty(rule.distance(lower, answer) / c, s, beta)
    } else if answer > upper {
        miss_penalty(rule.distance(answer, upper) / c, s, beta)
    } else {
        containment_reward(
            rule.distance(answer, lower) / c,
            rule.distance(upper, answer) / c,
            s,
        )
    };

    raw.max(SMIN)
}

/// Reward for a true value inside the expanded interval; peaks for a tight,
/// well-centered interval and never exceeds SMAX.
fn containment_reward(r: f64, t: f64, s: f64) -> f64 {
    4.0 * SMAX * (r * t / (s * s)) * (1.0 - s / (1.0 + s))
}

/// Penalty at normalized miss distance `d`; grows with the declared
/// confidence and with the stated interval width.
fn miss_penalty(d: f64, s: f64, beta: f64) -> f64 {
    -(2.0 / (1.0 - beta)) * d - (d / (1.0 + d)) * s
}

fn widen_if_degenerate(interval: Interval) -> Interval {
    if !interval.is_degenerate() {
        return interval;
    }
    let value = interval.lower();
    let spread = value.abs() * DEGENERATE_SPREAD;
    Interval::new(value - spread, value + spread)
}

/// Round to two decimals for display determinism. Rounding happens after
/// the floor and is floored again, so `points >= SMIN` holds exactly.
fn finalize_points(raw: f64) -> f64 {
    let rounded = (raw * 100.0).round() / 100.0;
    rounded.max(SMIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(confidence: u8, lower: f64, upper: f64, answer: f64) -> ScoreResult {
        let level = ConfidenceLevel::from_percent(confidence).unwrap();
        calculate_score(level, Interval::new(lower, upper), answer, "")
    }

    #[test]
    fn containing_interval_earns_positive_points() {
        let result = score(80, 100.0, 10000.0, 1000.0);
        assert_eq!(result.rule, ScoringRule::Distance);
        assert!(result.hit);
        assert!(result.points > 0.0);
        assert!((result.true_exponent - 3.0).abs() < 1e-9);
    }

    #[test]
    fn tighter_containing_interval_earns_more() {
        let wide = score(80, 100.0, 10000.0, 1000.0);
        let tight = score(80, 500.0, 2000.0, 1000.0);
        assert!(tight.points > wide.points);
    }

    #[test]
    fn interval_entirely_above_truth_is_a_floored_miss() {
        let result = score(80, 1e5, 1e6, 1000.0);
        assert!(!result.hit);
        assert!(result.points < 0.0);
        assert!(result.points >= SMIN);
    }

    #[test]
    fn higher_declared_confidence_pays_more_for_the_same_miss() {
        let low = score(50, 1010.0, 1100.0, 1000.0);
        let high = score(90, 1010.0, 1100.0, 1000.0);
        assert!(high.points < low.points);
    }

    #[test]
    fn farther_misses_are_penalized_harder() {
        let near = score(80, 1010.0, 1100.0, 1000.0);
        let far = score(80, 2000.0, 2100.0, 1000.0);
        assert!(far.points < near.points);
    }

    #[test]
    fn very_large_answers_use_the_order_of_magnitude_rule() {
        let result = calculate_score(
            ConfidenceLevel::P80,
            Interval::new(1e13, 1e14),
            3.2e13,
            "km",
        );
        assert_eq!(result.rule, ScoringRule::OrderOfMagnitude);
        assert!(result.hit);
        assert!(result.points > 0.0);
        assert!((result.true_exponent - 13.505).abs() < 0.01);
    }

    #[test]
    fn non_positive_bounds_under_the_log_rule_floor_the_score() {
        let result = calculate_score(ConfidenceLevel::P80, Interval::new(-5.0, 10.0), 1e6, "");
        assert_eq!(result.points, SMIN);
        assert!(!result.hit);
    }

    #[test]
    fn non_positive_answer_under_the_log_rule_floors_the_score() {
        let result = calculate_score(ConfidenceLevel::P80, Interval::new(1.0, 2.0), 0.0, "");
        assert_eq!(result.points, SMIN);
        assert_eq!(result.true_exponent, 0.0);
    }

    #[test]
    fn degenerate_interval_scores_finite_and_high_when_exact() {
        let result = score(80, 1000.0, 1000.0, 1000.0);
        assert!(result.points.is_finite());
        assert!(result.hit);
        assert!(result.points > 0.0);
        assert!(result.points <= SMAX);
    }

    #[test]
    fn inverted_bounds_are_normalized_before_scoring() {
        let normal = score(80, 100.0, 10000.0, 1000.0);
        let inverted = score(80, 10000.0, 100.0, 1000.0);
        assert_eq!(normal.points, inverted.points);
        assert!(inverted.hit);
    }

    #[test]
    fn hit_is_judged_on_the_unexpanded_interval() {
        // Truth just outside the declared bounds but inside the expanded ones:
        // lenient on points, still a miss for feedback.
        let result = score(80, 1000.2, 1001.0, 1000.0);
        assert!(!result.hit);
        assert!(result.points > 0.0);
    }

    #[test]
    fn points_stay_within_bounds_across_inputs() {
        let answers = [0.001, 0.5, 3.0, 1000.0, 54321.0, 8.8e12];
        let bounds = [
            (0.1, 0.2),
            (0.5, 0.5),
            (1.0, 1e6),
            (900.0, 1100.0),
            (1e12, 1e13),
        ];
        for confidence in [50u8, 60, 70, 80, 90] {
            for &answer in &answers {
                for &(lower, upper) in &bounds {
                    let result = score(confidence, lower, upper, answer);
                    assert!(
                        result.points.is_finite(),
                        "non-finite points for answer {answer} in [{lower}, {upper}]"
                    );
                    assert!(
                        result.points >= SMIN && result.points <= SMAX,
                        "points {} out of range for answer {answer} in [{lower}, {upper}]",
                        result.points
                    );
                }
            }
        }
    }
}
