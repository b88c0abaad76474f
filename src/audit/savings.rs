//! Time and money summaries derived from agent recommendations.

use std::sync::LazyLock;

use regex::Regex;

use super::agents::AgentRecommendation;
use crate::constants::audit::DEFAULT_HOURS_SAVED;

static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)").expect("valid number regex"));

/// First integer in a time-saved string such as `"15-20 hrs/week"`.
fn leading_hours(text: &str) -> u32 {
    LEADING_NUMBER
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(DEFAULT_HOURS_SAVED)
}

/// Sum of the lower bounds of each agent's estimated weekly savings.
pub fn weekly_hours_saved(agents: &[AgentRecommendation]) -> u32 {
    agents
        .iter()
        .map(|a| leading_hours(&a.estimated_time_saved))
        .sum()
}

/// Format whole dollars with thousands separators: `12345` becomes `$12,345`.
pub fn format_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${}", grouped)
}
