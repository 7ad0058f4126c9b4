use anyhow::{Context, Result};
use regex::Regex;

use super::models::ParsedAnswer;

/// Values outside this band are displayed in scientific notation.
const PLAIN_DISPLAY_MIN: f64 = 1e-2;
const PLAIN_DISPLAY_MAX: f64 = 1e6;

/// Splits raw answer strings like "3.2e13 km" into value and unit.
pub struct AnswerParser {
    value_regex: Regex,
}

impl AnswerParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            value_regex: Self::compile_regex()?,
        })
    }

    fn compile_regex() -> Result<Regex> {
        Regex::new(r"^\s*([+-]?[0-9][0-9,]*(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?)\s*(.*)$")
            .context("Failed to compile answer value regex")
    }

    /// Parse a raw answer string. Returns None when no leading numeric value
    /// is present.
    pub fn parse(&self, raw: &str) -> Option<ParsedAnswer> {
        let captures = self.value_regex.captures(raw)?;
        let number = captures.get(1)?.as_str().replace(',', "");
        let value: f64 = number.parse().ok()?;
        let unit = captures
            .get(2)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();
        Some(ParsedAnswer { value, unit })
    }
}

/// Decimal exponent (log10) of an answer: 3.2e13 → ~13.5, 500 → ~2.7.
/// Zero and NaN map to 0 so feedback stays finite.
pub fn answer_to_exponent(answer: f64) -> f64 {
    if answer == 0.0 || answer.is_nan() {
        return 0.0;
    }
    answer.abs().log10()
}

/// Exponent rendered the way feedback displays it, e.g. "10^3.0".
pub fn format_exponent(exponent: f64) -> String {
    format!("10^{exponent:.1}")
}

/// Format an answer for display: scientific notation outside
/// [0.01, 1e6), plain decimal otherwise.
pub fn format_answer(value: f64) -> String {
    if value != 0.0 && (value.abs() >= PLAIN_DISPLAY_MAX || value.abs() < PLAIN_DISPLAY_MIN) {
        format!("{value:.2e}")
    } else if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> AnswerParser {
        AnswerParser::new().unwrap()
    }

    #[test]
    fn parses_scientific_notation_with_unit() {
        let parsed = parser().parse("3.2e13 km").unwrap();
        assert_eq!(parsed.value, 3.2e13);
        assert_eq!(parsed.unit, "km");
    }

    #[test]
    fn parses_grouped_digits() {
        let parsed = parser().parse("1,200 people").unwrap();
        assert_eq!(parsed.value, 1200.0);
        assert_eq!(parsed.unit, "people");
    }

    #[test]
    fn parses_bare_numbers_with_empty_unit() {
        let parsed = parser().parse("42").unwrap();
        assert_eq!(parsed.value, 42.0);
        assert_eq!(parsed.unit, "");
    }

    #[test]
    fn parses_percent_values() {
        let parsed = parser().parse("70%").unwrap();
        assert_eq!(parsed.value, 70.0);
        assert_eq!(parsed.unit, "%");
    }

    #[test]
    fn parses_signed_decimals() {
        let parsed = parser().parse("-12.5 °C").unwrap();
        assert_eq!(parsed.value, -12.5);
        assert_eq!(parsed.unit, "°C");
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert!(parser().parse("about a million").is_none());
        assert!(parser().parse("").is_none());
    }

    #[test]
    fn exponent_of_everyday_values() {
        assert!((answer_to_exponent(500.0) - 2.69897).abs() < 1e-5);
        assert!((answer_to_exponent(3.2e13) - 13.50515).abs() < 1e-5);
    }

    #[test]
    fn exponent_of_zero_is_zero() {
        assert_eq!(answer_to_exponent(0.0), 0.0);
        assert_eq!(answer_to_exponent(f64::NAN), 0.0);
    }

    #[test]
    fn exponent_uses_the_magnitude_of_negatives() {
        assert!((answer_to_exponent(-1000.0) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn formats_exponents_to_one_decimal() {
        assert_eq!(format_exponent(3.0), "10^3.0");
        assert_eq!(format_exponent(13.505), "10^13.5");
    }

    #[test]
    fn formats_everyday_values_plainly() {
        assert_eq!(format_answer(1000.0), "1000");
        assert_eq!(format_answer(12.5), "12.50");
        assert_eq!(format_answer(0.0), "0");
    }

    #[test]
    fn formats_extreme_values_scientifically() {
        assert_eq!(format_answer(2.5e7), "2.50e7");
        assert_eq!(format_answer(0.001), "1.00e-3");
    }
}
