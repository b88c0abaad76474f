//! Weighted-condition scoring.
//!
//! Each category score is a sum of fixed, non-negative contributions whose
//! maximum is 100. Nothing ever subtracts.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::scoring::{MAX_SCORE, grade};
use crate::types::{Result, ValidationError, ValidationErrorKind};

/// Accumulator for one category's weighted conditions
#[derive(Debug, Clone, Default)]
pub struct ScoreSheet {
    points: f64,
}

impl ScoreSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contribute `when_true` or `when_false` depending on the condition.
    pub fn award(mut self, condition: bool, when_true: u32, when_false: u32) -> Self {
        self.points += f64::from(if condition { when_true } else { when_false });
        self
    }

    /// Contribute a fixed amount.
    pub fn add(mut self, points: u32) -> Self {
        self.points += f64::from(points);
        self
    }

    /// Contribute a fractional amount (e.g. a ratio of a weight). Negative input counts as 0.
    pub fn add_fraction(mut self, points: f64) -> Self {
        self.points += points.max(0.0);
        self
    }

    /// Rounded total, clamped to `0..=100`.
    pub fn total(&self) -> u32 {
        (self.points.round() as u32).min(MAX_SCORE)
    }
}

/// Rounded mean of a non-empty set of scores.
///
/// An empty set is a precondition violation rather than a division by zero.
pub fn mean_score(scores: &[u32]) -> Result<u32> {
    if scores.is_empty() {
        return Err(ValidationError::new(
            ValidationErrorKind::Precondition,
            "cannot aggregate an empty set of scores",
        )
        .into());
    }
    let sum: u64 = scores.iter().map(|&s| u64::from(s)).sum();
    Ok((sum as f64 / scores.len() as f64).round() as u32)
}

/// Letter grade from the fixed threshold ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= grade::A_PLUS => Self::APlus,
            s if s >= grade::A => Self::A,
            s if s >= grade::B => Self::B,
            s if s >= grade::C => Self::C,
            s if s >= grade::D => Self::D,
            _ => Self::F,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_sums_and_rounds() {
        let sheet = ScoreSheet::new()
            .award(true, 20, 10)
            .award(false, 15, 0)
            .add_fraction(7.0 / 9.0 * 35.0)
            .add(15);
        // 20 + 0 + 27.22 + 15
        assert_eq!(sheet.total(), 62);
    }

    #[test]
    fn test_sheet_never_negative_or_above_max() {
        assert_eq!(ScoreSheet::new().add_fraction(-12.0).total(), 0);
        assert_eq!(ScoreSheet::new().add(80).add(80).total(), 100);
    }

    #[test]
    fn test_half_rounds_up() {
        assert_eq!(ScoreSheet::new().add_fraction(62.5).total(), 63);
        assert_eq!(mean_score(&[62, 63]).unwrap(), 63);
    }

    #[test]
    fn test_mean_score() {
        assert_eq!(mean_score(&[100]).unwrap(), 100);
        assert_eq!(mean_score(&[70, 80, 91]).unwrap(), 80);
    }

    #[test]
    fn test_mean_of_nothing_is_rejected() {
        let err = mean_score(&[]).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_grade_ladder_boundaries() {
        let cases = [
            (100, "A+"),
            (90, "A+"),
            (89, "A"),
            (80, "A"),
            (79, "B"),
            (70, "B"),
            (69, "C"),
            (60, "C"),
            (59, "D"),
            (50, "D"),
            (49, "F"),
            (0, "F"),
        ];
        for (score, expected) in cases {
            assert_eq!(Grade::from_score(score).as_str(), expected, "score {}", score);
        }
    }

    #[test]
    fn test_grade_serializes_as_letter() {
        assert_eq!(serde_json::to_string(&Grade::APlus).unwrap(), "\"A+\"");
        assert_eq!(serde_json::to_string(&Grade::F).unwrap(), "\"F\"");
    }
}
