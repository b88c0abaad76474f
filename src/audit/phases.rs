//! Rollout plan derived from the priority-ordered departments.

use serde::{Deserialize, Serialize};

use crate::constants::audit::{
    ADVANCED_MIN_DEPARTMENTS, EXPANSION_COUNT, EXPANSION_MIN_DEPARTMENTS, QUICK_WIN_COUNT,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImplementationPhase {
    /// 1-based, sequential over the phases actually emitted
    pub phase: u32,
    pub name: String,
    pub duration: String,
    pub departments: Vec<String>,
    pub description: String,
}

/// Build phases from department display names already in priority order.
pub fn plan_phases(ranked: &[&str]) -> Vec<ImplementationPhase> {
    let mut phases = Vec::new();
    let mut push = |name: &str, duration: &str, departments: Vec<String>, description: &str| {
        let phase = phases.len() as u32 + 1;
        phases.push(ImplementationPhase {
            phase,
            name: name.to_string(),
            duration: duration.to_string(),
            departments,
            description: description.to_string(),
        });
    };
    let names = |slice: &[&str]| slice.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    let quick_end = QUICK_WIN_COUNT.min(ranked.len());
    if !ranked.is_empty() {
        push(
            "Quick Wins",
            "2-3 weeks",
            names(&ranked[..quick_end]),
            "Deploy low-complexity, high-impact GPTs in departments with the highest automation scores. Focus on FAQ bots and document assistants.",
        );
    }

    let expansion_end = (QUICK_WIN_COUNT + EXPANSION_COUNT).min(ranked.len());
    if ranked.len() >= EXPANSION_MIN_DEPARTMENTS {
        push(
            "Expansion",
            "4-6 weeks",
            names(&ranked[quick_end..expansion_end]),
            "Roll out medium-complexity agents. Begin training agents on department-specific data and integrate with existing tools.",
        );
    }

    if ranked.len() >= ADVANCED_MIN_DEPARTMENTS {
        push(
            "Advanced Deployment",
            "6-8 weeks",
            names(&ranked[expansion_end..]),
            "Deploy advanced agents with higher complexity, requiring more robust training data and compliance reviews.",
        );
    }

    push(
        "Optimization & Scaling",
        "Ongoing",
        vec!["All Departments".to_string()],
        "Monitor agent performance, refine training data, expand capabilities, and measure ROI against baseline metrics.",
    );

    phases
}

#[cfg(test)]
mod tests {
    use super::*;

    const RANKED: [&str; 7] = ["A", "B", "C", "D", "E", "F", "G"];

    fn phase_names(phases: &[ImplementationPhase]) -> Vec<&str> {
        phases.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_single_department() {
        let phases = plan_phases(&RANKED[..1]);
        assert_eq!(phase_names(&phases), vec!["Quick Wins", "Optimization & Scaling"]);
        assert_eq!(phases[0].departments, vec!["A"]);
        assert_eq!(phases[1].phase, 2);
        assert_eq!(phases[1].departments, vec!["All Departments"]);
    }

    #[test]
    fn test_four_departments_skip_expansion() {
        let phases = plan_phases(&RANKED[..4]);
        assert_eq!(phase_names(&phases), vec!["Quick Wins", "Optimization & Scaling"]);
        assert_eq!(phases[0].departments, vec!["A", "B"]);
    }

    #[test]
    fn test_five_departments() {
        let phases = plan_phases(&RANKED[..5]);
        assert_eq!(
            phase_names(&phases),
            vec!["Quick Wins", "Expansion", "Optimization & Scaling"]
        );
        assert_eq!(phases[1].departments, vec!["C", "D", "E"]);
        assert_eq!(phases[2].phase, 3);
    }

    #[test]
    fn test_six_departments_emit_all_four_phases() {
        let phases = plan_phases(&RANKED[..6]);
        assert_eq!(
            phase_names(&phases),
            vec![
                "Quick Wins",
                "Expansion",
                "Advanced Deployment",
                "Optimization & Scaling"
            ]
        );
        let numbers: Vec<u32> = phases.iter().map(|p| p.phase).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert_eq!(phases[2].departments, vec!["F"]);
    }

    #[test]
    fn test_advanced_takes_the_remainder() {
        let phases = plan_phases(&RANKED);
        assert_eq!(phases[2].departments, vec!["F", "G"]);
        assert_eq!(phases[2].duration, "6-8 weeks");
    }

    #[test]
    fn test_no_departments_still_plans_optimization() {
        let phases = plan_phases(&[]);
        assert_eq!(phase_names(&phases), vec!["Optimization & Scaling"]);
        assert_eq!(phases[0].phase, 1);
    }
}
