//! Synthetic AI-adoption audit
//!
//! ```text
//! company + industry + dept ids ─▶ seed ─▶ stream
//!     for each department (caller order):
//!         progress ─▶ latency draw ─▶ scores ─▶ opportunities ─▶ workflows
//!     ─▶ re-rank by automation ─▶ phases ─▶ savings draw ─▶ report
//! ```
//!
//! Department inputs (workflows, challenges, data sources) are carried for
//! display and persistence only; scores depend on the seed alone.

pub mod agents;
pub mod department;
pub mod phases;
pub mod savings;

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::constants::audit::{SAVINGS_BASE_PER_AGENT, SAVINGS_JITTER_PER_AGENT};
use crate::constants::latency::{AUDIT_BASE_MS, AUDIT_JITTER_MS};
use crate::engine::{DeterministicStream, SimulatedLatency, mean_score, seed_from_parts};
use crate::types::{Result, Tier, ValidationError, ValidationErrorKind};

pub use agents::{AgentRecommendation, AgentTemplate, recommend_agents};
pub use department::{DepartmentId, DepartmentPreset};
pub use phases::{ImplementationPhase, plan_phases};
pub use savings::{format_usd, weekly_hours_saved};

// =============================================================================
// Input
// =============================================================================

/// Free-text description of one department
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentInput {
    pub id: DepartmentId,
    pub workflows: String,
    pub challenges: String,
    pub data_sources: String,
}

impl DepartmentInput {
    /// Input pre-filled from the department's preset
    pub fn with_defaults(id: DepartmentId) -> Self {
        let preset = id.preset();
        Self {
            id,
            workflows: preset.default_workflows.to_string(),
            challenges: preset.default_challenges.to_string(),
            data_sources: preset.default_data_sources.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuditRequest {
    pub company_name: String,
    pub industry: String,
    pub company_size: String,
    pub departments: Vec<DepartmentInput>,
}

impl AuditRequest {
    pub fn new(
        company_name: impl Into<String>,
        industry: impl Into<String>,
        company_size: impl Into<String>,
        departments: Vec<DepartmentInput>,
    ) -> Self {
        Self {
            company_name: company_name.into(),
            industry: industry.into(),
            company_size: company_size.into(),
            departments,
        }
    }

    /// Reject requests the dashboard form would not submit.
    pub fn validate(&self) -> Result<()> {
        if self.company_name.trim().is_empty() {
            return Err(ValidationError::missing("company_name", "Company name is required").into());
        }
        if self.industry.trim().is_empty() {
            return Err(ValidationError::missing("industry", "Industry is required").into());
        }
        if self.departments.is_empty() {
            return Err(ValidationError::new(
                ValidationErrorKind::Precondition,
                "Select at least one department",
            )
            .with_field("departments")
            .into());
        }
        let mut seen = HashSet::new();
        for dept in &self.departments {
            if !seen.insert(dept.id) {
                return Err(ValidationError::new(
                    ValidationErrorKind::Consistency,
                    format!("Department '{}' selected more than once", dept.id),
                )
                .with_field("departments")
                .into());
            }
        }
        Ok(())
    }

    /// Seed text: company, industry, then department ids, with no separators
    fn seed(&self) -> u64 {
        let ids = self.departments.iter().map(|d| d.id.as_str());
        seed_from_parts(
            [self.company_name.as_str(), self.industry.as_str()]
                .into_iter()
                .chain(ids),
        )
    }
}

// =============================================================================
// Output
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentAudit {
    pub department_id: DepartmentId,
    pub department_name: String,
    pub automation_score: u32,
    pub ai_readiness_score: u32,
    pub risk_level: Tier,
    pub risk_flags: Vec<String>,
    pub workflows_analyzed: u32,
    pub automation_opportunities: Vec<String>,
    #[serde(rename = "recommendedGpts")]
    pub recommended_agents: Vec<AgentRecommendation>,
    /// 1-based rank by descending automation score
    pub priority: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub company_name: String,
    pub industry: String,
    pub company_size: String,
    pub analyzed_at: DateTime<Utc>,
    pub overall_readiness_score: u32,
    #[serde(rename = "totalGptsRecommended")]
    pub total_agents_recommended: u32,
    /// Display string such as `$12,345`
    pub estimated_monthly_savings: String,
    pub departments: Vec<DepartmentAudit>,
    pub implementation_phases: Vec<ImplementationPhase>,
}

// =============================================================================
// Generation
// =============================================================================

/// Run the audit, reporting `(department name, percent complete)` before each department.
#[instrument(
    skip_all,
    fields(company = %request.company_name, departments = request.departments.len())
)]
pub async fn run_audit<F>(
    request: &AuditRequest,
    latency: &SimulatedLatency,
    mut on_progress: F,
) -> Result<AuditReport>
where
    F: FnMut(&str, f64),
{
    request.validate()?;

    let seed = request.seed();
    debug!("Audit seed: {}", seed);
    let mut stream = DeterministicStream::new(seed);

    let total = request.departments.len();
    let mut audits = Vec::with_capacity(total);
    let mut total_agents: u32 = 0;

    for (index, input) in request.departments.iter().enumerate() {
        let id = input.id;
        let name = id.display_name();

        on_progress(name, (index + 1) as f64 / total as f64 * 100.0);
        let delay_draw = stream.next_f64();
        latency.pause(AUDIT_BASE_MS, AUDIT_JITTER_MS, delay_draw).await;

        let audit = audit_department(id, index, &request.company_name, &mut stream);
        total_agents += audit.recommended_agents.len() as u32;
        debug!(
            "{}: automation {}, readiness {}",
            name, audit.automation_score, audit.ai_readiness_score
        );
        audits.push(audit);
    }

    finish(request, audits, total_agents, &mut stream)
}

fn audit_department(
    id: DepartmentId,
    index: usize,
    company: &str,
    stream: &mut DeterministicStream,
) -> DepartmentAudit {
    let name = id.display_name();
    let agents = recommend_agents(id, company);

    let automation_score = stream.float_in(45.0, 50.0).round() as u32;
    let ai_readiness_score = stream.float_in(35.0, 55.0).round() as u32;

    let automate_percent = stream.int_in(30, 40);
    let response_reduction = stream.int_in(30, 50);
    let automation_opportunities = vec![
        format!(
            "Automate {}% of repetitive {} queries",
            automate_percent,
            name.to_lowercase()
        ),
        format!(
            "Reduce response time by {}% with AI-assisted processing",
            response_reduction
        ),
        format!(
            "Save {}+ hours/week across {} AI agents",
            weekly_hours_saved(&agents),
            agents.len()
        ),
    ];

    DepartmentAudit {
        department_id: id,
        department_name: name.to_string(),
        automation_score,
        ai_readiness_score,
        risk_level: id.risk_level(),
        risk_flags: id.risk_flags(),
        workflows_analyzed: stream.int_in(3, 5),
        automation_opportunities,
        recommended_agents: agents,
        priority: index as u32 + 1,
    }
}

fn finish(
    request: &AuditRequest,
    mut departments: Vec<DepartmentAudit>,
    total_agents: u32,
    stream: &mut DeterministicStream,
) -> Result<AuditReport> {
    // Stable: ties keep caller order
    departments.sort_by(|a, b| b.automation_score.cmp(&a.automation_score));
    for (rank, dept) in departments.iter_mut().enumerate() {
        dept.priority = rank as u32 + 1;
    }

    let readiness: Vec<u32> = departments.iter().map(|d| d.ai_readiness_score).collect();
    let overall_readiness_score = mean_score(&readiness)?;

    let ranked: Vec<&str> = departments
        .iter()
        .map(|d| d.department_name.as_str())
        .collect();
    let implementation_phases = plan_phases(&ranked);

    let per_agent = stream.float_in(SAVINGS_BASE_PER_AGENT, SAVINGS_JITTER_PER_AGENT);
    let monthly_savings = (f64::from(total_agents) * per_agent).round() as u64;

    info!(
        "Audit for {}: readiness {}/100, {} agents, {}/month",
        request.company_name,
        overall_readiness_score,
        total_agents,
        format_usd(monthly_savings)
    );

    Ok(AuditReport {
        company_name: request.company_name.clone(),
        industry: request.industry.clone(),
        company_size: request.company_size.clone(),
        analyzed_at: Utc::now(),
        overall_readiness_score,
        total_agents_recommended: total_agents,
        estimated_monthly_savings: format_usd(monthly_savings),
        departments,
        implementation_phases,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn request(ids: &[DepartmentId]) -> AuditRequest {
        AuditRequest::new(
            "Acme Corp",
            "Construction",
            "51-200",
            ids.iter().copied().map(DepartmentInput::with_defaults).collect(),
        )
    }

    async fn run(req: &AuditRequest) -> AuditReport {
        run_audit(req, &SimulatedLatency::disabled(), |_, _| {})
            .await
            .expect("audit succeeds")
    }

    fn without_timestamp(mut report: AuditReport) -> AuditReport {
        report.analyzed_at = DateTime::<Utc>::default();
        report
    }

    #[tokio::test]
    async fn test_priorities_follow_automation_score() {
        let report = run(&request(&DepartmentId::ALL)).await;
        assert_eq!(report.departments.len(), 10);

        let priorities: Vec<u32> = report.departments.iter().map(|d| d.priority).collect();
        assert_eq!(priorities, (1..=10).collect::<Vec<_>>());

        let scores: Vec<u32> = report.departments.iter().map(|d| d.automation_score).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[tokio::test]
    async fn test_single_department_phases() {
        let report = run(&request(&[DepartmentId::Legal])).await;
        let names: Vec<&str> = report
            .implementation_phases
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Quick Wins", "Optimization & Scaling"]);
        assert_eq!(report.implementation_phases[0].departments, vec!["Legal & Compliance"]);
        assert_eq!(report.departments[0].risk_level, Tier::High);
        assert_eq!(report.departments[0].risk_flags.len(), 2);
    }

    #[tokio::test]
    async fn test_six_departments_emit_four_phases() {
        let ids = &DepartmentId::ALL[..6];
        let report = run(&request(ids)).await;
        let numbers: Vec<u32> = report.implementation_phases.iter().map(|p| p.phase).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert_eq!(
            report.implementation_phases[0].departments,
            vec![
                report.departments[0].department_name.clone(),
                report.departments[1].department_name.clone()
            ]
        );
    }

    #[tokio::test]
    async fn test_progress_is_strictly_increasing() {
        let req = request(&[DepartmentId::Hr, DepartmentId::Sales, DepartmentId::Support]);
        let mut events = Vec::new();
        run_audit(&req, &SimulatedLatency::disabled(), |name, pct| {
            events.push((name.to_string(), pct))
        })
        .await
        .expect("audit succeeds");

        assert_eq!(events.len(), 3);
        assert_eq!(events[0].0, "Human Resources");
        assert_eq!(events[2].0, "Customer Support");
        assert!(events.windows(2).all(|w| w[0].1 < w[1].1));
        assert!((events[2].1 - 100.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_totals_and_opportunities() {
        let report = run(&request(&[DepartmentId::Hr, DepartmentId::Marketing])).await;
        assert_eq!(report.total_agents_recommended, 5);
        assert!(report.estimated_monthly_savings.starts_with('$'));

        let hr = report
            .departments
            .iter()
            .find(|d| d.department_id == DepartmentId::Hr)
            .expect("hr present");
        assert_eq!(hr.automation_opportunities.len(), 3);
        assert!(
            hr.automation_opportunities[0].ends_with("% of repetitive human resources queries")
        );
        assert_eq!(hr.automation_opportunities[2], "Save 33+ hours/week across 3 AI agents");
        assert!(hr.recommended_agents[0].instructions_preview.contains("Acme Corp"));
        assert!((3..8).contains(&hr.workflows_analyzed));
    }

    #[tokio::test]
    async fn test_json_uses_dashboard_field_names() {
        let report = run(&request(&[DepartmentId::Sales])).await;
        let json = serde_json::to_value(&report).unwrap();

        assert!(json.get("totalGptsRecommended").is_some());
        let dept = &json["departments"][0];
        assert_eq!(dept["departmentId"], "sales");
        let agent = &dept["recommendedGpts"][0];
        assert!(agent["systemPromptPreview"].as_str().unwrap().contains("Acme Corp"));
        assert!(agent.get("trainingData").is_some());

        let back: AuditReport = serde_json::from_value(json).unwrap();
        assert_eq!(back, report);
    }

    #[tokio::test]
    async fn test_validation_errors() {
        let latency = SimulatedLatency::disabled();

        let mut blank = request(&[DepartmentId::Hr]);
        blank.company_name = "  ".to_string();
        let err = run_audit(&blank, &latency, |_, _| {}).await.unwrap_err();
        assert!(err.is_validation());

        let empty = request(&[]);
        assert!(run_audit(&empty, &latency, |_, _| {}).await.is_err());

        let dup = request(&[DepartmentId::Hr, DepartmentId::Hr]);
        let err = run_audit(&dup, &latency, |_, _| {}).await.unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_seed_depends_on_department_order() {
        let forward = request(&[DepartmentId::Hr, DepartmentId::Sales]).seed();
        let reversed = request(&[DepartmentId::Sales, DepartmentId::Hr]).seed();
        assert_eq!(forward, seed_from_parts(["Acme Corp", "Construction", "hr", "sales"]));
        assert_ne!(forward, reversed);
    }

    proptest! {
        #[test]
        fn prop_audit_is_deterministic(company in "[A-Za-z ]{1,20}", count in 1usize..=10) {
            let rt = tokio::runtime::Runtime::new().expect("runtime");
            let mut req = request(&DepartmentId::ALL[..count]);
            req.company_name = format!("X{}", company);
            let a = without_timestamp(rt.block_on(run(&req)));
            let b = without_timestamp(rt.block_on(run(&req)));
            prop_assert!(a.overall_readiness_score <= 100);
            prop_assert!(a.departments.iter().all(|d| (45..=95).contains(&d.automation_score)));
            prop_assert_eq!(a, b);
        }
    }
}
