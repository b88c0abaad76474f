//! Plain-text and JSON renderings of finished reports.
//!
//! The text layouts match the dashboard's "copy full report" output line for
//! line, so pasted reports look the same whichever front end produced them.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::audit::AuditReport;
use crate::seo::SeoReport;
use crate::types::Result;

/// Output format for rendered reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Text => write!(f, "text"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!(
                "Unknown output format: {}. Valid values: text, json",
                s
            )),
        }
    }
}

/// Anything that can be exported in both formats
pub trait Exportable: Serialize {
    fn to_text(&self) -> String;

    fn render(&self, format: ExportFormat) -> Result<String> {
        match format {
            ExportFormat::Text => Ok(self.to_text()),
            ExportFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl Exportable for SeoReport {
    fn to_text(&self) -> String {
        render_seo_text(self)
    }
}

impl Exportable for AuditReport {
    fn to_text(&self) -> String {
        render_audit_text(self)
    }
}

/// Month/day/year with a 12-hour clock, in UTC
fn display_timestamp(at: &DateTime<Utc>) -> String {
    at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

pub fn render_seo_text(report: &SeoReport) -> String {
    let mut lines = vec![
        format!("SEO Analysis Report for {}", report.url),
        format!("Analyzed: {}", display_timestamp(&report.analyzed_at)),
        format!("Overall Score: {}/100 ({})", report.overall_score, report.grade),
        String::new(),
        "═══ CATEGORY SCORES ═══".to_string(),
    ];
    lines.extend(
        report
            .categories
            .iter()
            .map(|c| format!("  {}: {}/{}", c.name, c.score, c.max_score)),
    );

    lines.push(String::new());
    lines.push("═══ ISSUES ═══".to_string());
    lines.extend(report.issues.iter().map(|i| {
        format!(
            "  [{}] {}\n    {}\n    Fix: {}",
            i.severity.as_str().to_uppercase(),
            i.title,
            i.description,
            i.fix
        )
    }));

    lines.push(String::new());
    lines.push("═══ SUGGESTIONS ═══".to_string());
    lines.extend(report.suggestions.iter().map(|s| {
        format!(
            "  [{} IMPACT] {}\n    {}",
            s.impact.as_str().to_uppercase(),
            s.title,
            s.description
        )
    }));

    lines.join("\n")
}

pub fn render_audit_text(report: &AuditReport) -> String {
    let mut lines = vec![
        "AI INFRASTRUCTURE AUDIT REPORT".to_string(),
        format!("Company: {}", report.company_name),
        format!(
            "Industry: {} | Size: {}",
            report.industry, report.company_size
        ),
        format!("Date: {}", display_timestamp(&report.analyzed_at)),
        format!(
            "Overall AI Readiness: {}/100",
            report.overall_readiness_score
        ),
        format!("GPTs Recommended: {}", report.total_agents_recommended),
        format!("Est. Monthly Savings: {}", report.estimated_monthly_savings),
        String::new(),
        "═══ DEPARTMENT ANALYSIS ═══".to_string(),
    ];

    for dept in &report.departments {
        lines.push(format!(
            "\n▸ {} (Priority #{})",
            dept.department_name, dept.priority
        ));
        lines.push(format!("  Automation Score: {}/100", dept.automation_score));
        lines.push(format!("  AI Readiness: {}/100", dept.ai_readiness_score));
        lines.push(format!("  Risk: {}", dept.risk_level.as_str().to_uppercase()));
        lines.push("  Recommended GPTs:".to_string());
        lines.extend(
            dept.recommended_agents
                .iter()
                .map(|a| format!("    - {}: {}", a.name, a.purpose)),
        );
    }

    lines.push(String::new());
    lines.push("═══ IMPLEMENTATION PHASES ═══".to_string());
    lines.extend(report.implementation_phases.iter().map(|p| {
        format!(
            "  Phase {}: {} ({})\n    {}\n    {}",
            p.phase,
            p.name,
            p.duration,
            p.departments.join(", "),
            p.description
        )
    }));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{AuditRequest, DepartmentId, DepartmentInput, run_audit};
    use crate::engine::SimulatedLatency;
    use crate::seo::synthesize_report;
    use chrono::TimeZone;

    #[test]
    fn test_seo_text_layout() {
        let mut report = synthesize_report("example.com");
        report.analyzed_at = Utc.with_ymd_and_hms(2025, 3, 7, 14, 5, 9).unwrap();
        let text = render_seo_text(&report);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "SEO Analysis Report for example.com");
        assert_eq!(lines[1], "Analyzed: 3/7/2025, 2:05:09 PM");
        assert_eq!(
            lines[2],
            format!("Overall Score: {}/100 ({})", report.overall_score, report.grade)
        );
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "═══ CATEGORY SCORES ═══");
        assert!(lines[5].starts_with("  Meta Tags: "));
        assert!(text.contains("═══ ISSUES ═══"));
        assert!(
            text.contains("  [MEDIUM IMPACT] Add Blog Section\n    Create a blog on example.com")
        );
    }

    #[test]
    fn test_issue_block_shape() {
        let report = synthesize_report("http://insecure.example");
        let text = render_seo_text(&report);
        assert!(text.contains(
            "  [CRITICAL] No HTTPS\n    This site does not use HTTPS. Search engines penalize non-secure sites.\n    Fix: Install an SSL certificate"
        ));
    }

    #[tokio::test]
    async fn test_audit_text_layout() {
        let request = AuditRequest::new(
            "Acme Corp",
            "Construction",
            "11-50",
            vec![DepartmentInput::with_defaults(DepartmentId::Support)],
        );
        let report = run_audit(&request, &SimulatedLatency::disabled(), |_, _| {})
            .await
            .unwrap();
        let text = render_audit_text(&report);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "AI INFRASTRUCTURE AUDIT REPORT");
        assert_eq!(lines[1], "Company: Acme Corp");
        assert_eq!(lines[2], "Industry: Construction | Size: 11-50");
        assert_eq!(lines[5], "GPTs Recommended: 2");
        assert_eq!(lines[8], "═══ DEPARTMENT ANALYSIS ═══");
        assert_eq!(lines[9], "");
        assert_eq!(lines[10], "▸ Customer Support (Priority #1)");
        assert_eq!(lines[13], "  Risk: LOW");
        assert!(lines[15].starts_with("    - Customer Support Agent: Handle Tier-1"));
        assert!(text.contains("  Phase 1: Quick Wins (2-3 weeks)\n    Customer Support\n"));
        assert!(text.ends_with("measure ROI against baseline metrics."));
    }

    #[test]
    fn test_json_export_round_trips() {
        let report = synthesize_report("example.com");
        let json = report.render(ExportFormat::Json).unwrap();
        let back: SeoReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("JSON".parse::<ExportFormat>(), Ok(ExportFormat::Json));
        assert_eq!("text".parse::<ExportFormat>(), Ok(ExportFormat::Text));
        assert!("yaml".parse::<ExportFormat>().is_err());
        assert_eq!(ExportFormat::default(), ExportFormat::Text);
    }
}
