/// Starting rating for a fresh profile.
pub const INITIAL_RATING: f64 = 1000.0;

pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 10000.0;

/// Sigmoid slope; keeps the playable score range (~-57 to 10) from
/// saturating the normalization.
const NORMALIZATION_SLOPE: f64 = 4.0;

/// Offset in the expected-score curve; R=1000 expects exactly 0.5.
const EXPECTATION_SCALE: f64 = 1000.0;

/// Gain factor shape: ~100 at R=0, ~83 at R=1000, 50 at R=5000, ~33 at
/// R=10000.
const GAIN_BASE: f64 = 100.0;
const GAIN_DAMPING: f64 = 5000.0;

/// Sigmoid normalization of a raw score to (0, 1), with n(0) = 0.5.
pub fn normalize_score(score: f64) -> f64 {
    1.0 / (1.0 + (-score / NORMALIZATION_SLOPE).exp())
}

/// Expected normalized score at a given rating. Rises steeply at low
/// ratings and flattens out: R=1000 → 0.5, R=2000 → ~0.67, R=10000 → ~0.91.
pub fn expected_score(rating: f64) -> f64 {
    rating / (rating + EXPECTATION_SCALE)
}

/// Step-size multiplier for a single update, shrinking as skill grows.
pub fn gain_factor(rating: f64) -> f64 {
    GAIN_BASE / (1.0 + rating / GAIN_DAMPING)
}

/// Fold one question's score into the rating:
///
/// R_new = clamp(R + K(R) * (n(score) - E(R)), 0, 10000)
///
/// Monotonically increasing in the raw score at every rating level, so a
/// better-calibrated answer never yields a lower rating.
pub fn update_rating(current_rating: f64, score: f64) -> f64 {
    let n = normalize_score(score);
    let e = expected_score(current_rating);
    let k = gain_factor(current_rating);

    let updated = current_rating + k * (n - e);
    round_to_hundredths(updated.clamp(MIN_RATING, MAX_RATING))
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
