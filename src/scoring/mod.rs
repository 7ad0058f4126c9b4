pub mod engine;
pub mod rule;
pub mod types;

pub use engine::{calculate_score, SMAX, SMIN};
pub use rule::ScoringRule;
pub use types::{ConfidenceLevel, Interval, ScoreResult};
