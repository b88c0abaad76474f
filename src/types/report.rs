//! Shared report vocabulary used by both engines.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tri-state status of a single metric line
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MetricStatus {
    Good,
    Warning,
    Error,
}

impl MetricStatus {
    /// `Good` when the condition holds, otherwise the given fallback
    pub fn good_or(condition: bool, otherwise: MetricStatus) -> Self {
        if condition { Self::Good } else { otherwise }
    }
}

/// One labeled line inside a category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetricItem {
    pub label: String,
    pub value: String,
    pub status: MetricStatus,
}

impl MetricItem {
    pub fn new(label: impl Into<String>, value: impl Into<String>, status: MetricStatus) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            status,
        }
    }
}

/// Issue severity, totally ordered: critical sorts first
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl Severity {
    /// Sort rank (critical = 0, warning = 1, info = 2)
    pub const fn rank(self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::Warning => 1,
            Self::Info => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three-level tier shared by suggestion impact, risk level, and agent complexity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Low,
    Medium,
    High,
}

impl Tier {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse band of a 0-100 score, used for coloring gauges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// 80 and above
    Strong,
    /// 60-79
    Fair,
    /// 40-59
    Weak,
    /// Below 40
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => Self::Strong,
            60..=79 => Self::Fair,
            40..=59 => Self::Weak,
            _ => Self::Poor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_rank_matches_ord() {
        let mut all = vec![Severity::Info, Severity::Critical, Severity::Warning];
        all.sort();
        assert_eq!(all, vec![Severity::Critical, Severity::Warning, Severity::Info]);
        assert!(Severity::Critical.rank() < Severity::Warning.rank());
        assert!(Severity::Warning.rank() < Severity::Info.rank());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&Severity::Critical).unwrap(),
            "\"critical\""
        );
        assert_eq!(serde_json::to_string(&Tier::High).unwrap(), "\"high\"");
        assert_eq!(
            serde_json::to_string(&MetricStatus::Warning).unwrap(),
            "\"warning\""
        );
    }

    #[test]
    fn test_score_band_edges() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Strong);
        assert_eq!(ScoreBand::from_score(80), ScoreBand::Strong);
        assert_eq!(ScoreBand::from_score(79), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(60), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(59), ScoreBand::Weak);
        assert_eq!(ScoreBand::from_score(40), ScoreBand::Weak);
        assert_eq!(ScoreBand::from_score(39), ScoreBand::Poor);
    }

    #[test]
    fn test_good_or() {
        assert_eq!(
            MetricStatus::good_or(true, MetricStatus::Error),
            MetricStatus::Good
        );
        assert_eq!(
            MetricStatus::good_or(false, MetricStatus::Warning),
            MetricStatus::Warning
        );
    }
}
