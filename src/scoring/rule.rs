use serde::Serialize;

use super::types::Interval;

/// Leniency margin applied to the declared interval before scoring, so a
/// near miss is not punished like a distant one.
pub const DELTA: f64 = 0.4;

/// Scale constant for the linear rule.
const C_DISTANCE: f64 = 100.0;

/// Answers in this value band (decimal exponents -2..4) are scored on raw
/// differences; everything else is scored on log-ratios.
const DISTANCE_MIN_VALUE: f64 = 1e-2;
const DISTANCE_MAX_VALUE: f64 = 1e4;

/// Which distance metric scores the question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringRule {
    /// Raw differences, for answers of everyday magnitude.
    Distance,
    /// Log-ratios, so errors are judged multiplicatively.
    OrderOfMagnitude,
}

impl ScoringRule {
    /// Pick the rule from the true value's magnitude. Percentage quantities
    /// always score on the raw scale regardless of magnitude.
    pub fn select(answer: f64, unit: &str) -> Self {
        if unit.contains('%') {
            return ScoringRule::Distance;
        }
        if (DISTANCE_MIN_VALUE..=DISTANCE_MAX_VALUE).contains(&answer) {
            ScoringRule::Distance
        } else {
            ScoringRule::OrderOfMagnitude
        }
    }

    pub fn scale(&self) -> f64 {
        match self {
            ScoringRule::Distance => C_DISTANCE,
            // ln(100): two decades of error count as one scale unit
            ScoringRule::OrderOfMagnitude => 2.0 * std::f64::consts::LN_10,
        }
    }

    /// Signed distance from `b` up to `a` under this rule's metric.
    pub fn distance(&self, a: f64, b: f64) -> f64 {
        match self {
            ScoringRule::Distance => a - b,
            ScoringRule::OrderOfMagnitude => (a / b).ln(),
        }
    }

    /// Expanded bounds: additive for the linear rule, multiplicative for the
    /// order-of-magnitude rule.
    pub fn expand(&self, interval: &Interval) -> (f64, f64) {
        match self {
            ScoringRule::Distance => (interval.lower() - DELTA, interval.upper() + DELTA),
            ScoringRule::OrderOfMagnitude => (
                interval.lower() * (1.0 - DELTA),
                interval.upper() * (1.0 + DELTA),
            ),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ScoringRule::Distance => "distance",
            ScoringRule::OrderOfMagnitude => "order_of_magnitude",
        }
    }
}
