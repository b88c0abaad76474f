use console::{StyledObject, style};

use crate::types::{ScoreBand, Tier};

pub struct Output {
    quiet: bool,
}

impl Output {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    /// Suppress everything except errors
    pub fn quiet(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn success(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", style("✓").green(), message);
        }
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red(), message);
    }

    pub fn warning(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", style("⚠").yellow(), message);
        }
    }

    pub fn info(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", style("ℹ").blue(), message);
        }
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

/// Color a piece of text by the band its score falls in.
pub fn score_style<D>(score: u32, text: D) -> StyledObject<D> {
    match ScoreBand::from_score(score) {
        ScoreBand::Strong => style(text).green(),
        ScoreBand::Fair => style(text).yellow(),
        ScoreBand::Weak => style(text).color256(208),
        ScoreBand::Poor => style(text).red(),
    }
}

/// Risk reads inversely: high risk is red
pub fn risk_style(tier: Tier) -> StyledObject<&'static str> {
    let label = tier.as_str();
    match tier {
        Tier::Low => style(label).green(),
        Tier::Medium => style(label).yellow(),
        Tier::High => style(label).red(),
    }
}
