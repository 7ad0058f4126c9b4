use serde::Serialize;

use super::rule::ScoringRule;

/// Declared confidence that the true value falls inside the stated interval.
///
/// The game offers a fixed ladder of levels; the miss penalty of the scoring
/// rule grows with the declared level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfidenceLevel {
    P50,
    P60,
    P70,
    P80,
    P90,
}

impl ConfidenceLevel {
    pub const ALL: [ConfidenceLevel; 5] = [
        ConfidenceLevel::P50,
        ConfidenceLevel::P60,
        ConfidenceLevel::P70,
        ConfidenceLevel::P80,
        ConfidenceLevel::P90,
    ];

    /// Map a raw percentage to a level. Anything outside the ladder is None.
    pub fn from_percent(percent: u8) -> Option<Self> {
        match percent {
            50 => Some(ConfidenceLevel::P50),
            60 => Some(ConfidenceLevel::P60),
            70 => Some(ConfidenceLevel::P70),
            80 => Some(ConfidenceLevel::P80),
            90 => Some(ConfidenceLevel::P90),
            _ => None,
        }
    }

    pub fn percent(&self) -> u8 {
        match self {
            ConfidenceLevel::P50 => 50,
            ConfidenceLevel::P60 => 60,
            ConfidenceLevel::P70 => 70,
            ConfidenceLevel::P80 => 80,
            ConfidenceLevel::P90 => 90,
        }
    }

    /// Declared confidence as a fraction in (0, 1).
    pub fn beta(&self) -> f64 {
        f64::from(self.percent()) / 100.0
    }
}

impl Default for ConfidenceLevel {
    fn default() -> Self {
        ConfidenceLevel::P80
    }
}

/// A player's interval estimate, normalized so lower <= upper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    lower: f64,
    upper: f64,
}

impl Interval {
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { lower: a, upper: b }
        } else {
            Self { lower: b, upper: a }
        }
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn is_degenerate(&self) -> bool {
        self.lower == self.upper
    }

    /// Containment in the interval as declared, bounds inclusive.
    pub fn contains(&self, x: f64) -> bool {
        self.lower <= x && x <= self.upper
    }
}

/// Outcome of scoring a single question.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub points: f64,
    pub hit: bool,
    pub true_exponent: f64,
    pub rule: ScoringRule,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_levels_round_trip_percentages() {
        for level in ConfidenceLevel::ALL {
            assert_eq!(ConfidenceLevel::from_percent(level.percent()), Some(level));
        }
    }

    #[test]
    fn confidence_rejects_values_off_the_ladder() {
        for percent in [0u8, 49, 55, 85, 95, 100] {
            assert_eq!(ConfidenceLevel::from_percent(percent), None);
        }
    }

    #[test]
    fn beta_is_the_declared_fraction() {
        assert!((ConfidenceLevel::P80.beta() - 0.8).abs() < 1e-12);
        assert!((ConfidenceLevel::P50.beta() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn default_confidence_is_eighty_percent() {
        assert_eq!(ConfidenceLevel::default(), ConfidenceLevel::P80);
    }

    #[test]
    fn interval_normalizes_inverted_bounds() {
        let interval = Interval::new(10.0, 2.0);
        assert_eq!(interval.lower(), 2.0);
        assert_eq!(interval.upper(), 10.0);
    }

    #[test]
    fn interval_contains_is_inclusive() {
        let interval = Interval::new(2.0, 10.0);
        assert!(interval.contains(2.0));
        assert!(interval.contains(10.0));
        assert!(interval.contains(5.0));
        assert!(!interval.contains(1.999));
        assert!(!interval.contains(10.001));
    }

    #[test]
    fn degenerate_interval_is_detected() {
        assert!(Interval::new(3.0, 3.0).is_degenerate());
        assert!(!Interval::new(3.0, 3.1).is_degenerate());
    }
}
