//! Audit Command
//!
//! Run the AI infrastructure audit for a company and a set of departments.
//!
//! Usage:
//!   webhunt audit --company <name> --industry <industry> [--size <size>]
//!                 --departments hr,sales,support [-f text|json] [--save] [-o <file>]

use crate::audit::{AuditRequest, DepartmentId, DepartmentInput, run_audit};
use crate::cli::progress::ProgressRenderer;
use crate::cli::util::{CommandContext, ReportOptions, deliver};
use crate::storage::SavedReport;
use crate::types::Result;

/// Company profile and department selection from the command line
#[derive(Debug, Clone)]
pub struct AuditArgs {
    pub company: String,
    pub industry: String,
    pub size: String,
    pub departments: Vec<DepartmentId>,
}

impl AuditArgs {
    /// Request with each department's preset workflows, challenges, and data sources
    pub fn into_request(self) -> AuditRequest {
        let departments = self
            .departments
            .into_iter()
            .map(DepartmentInput::with_defaults)
            .collect();
        AuditRequest::new(
            self.company.trim(),
            self.industry.trim(),
            self.size.trim(),
            departments,
        )
    }
}

pub async fn run(
    ctx: &CommandContext,
    args: AuditArgs,
    options: &ReportOptions,
    show_progress: bool,
) -> Result<()> {
    let request = args.into_request();
    request.validate()?;

    ctx.output.info(&format!(
        "Auditing {} department{} for {}...",
        request.departments.len(),
        if request.departments.len() == 1 { "" } else { "s" },
        request.company_name
    ));

    let mut progress = ProgressRenderer::new(request.departments.len(), show_progress);
    let report = run_audit(&request, &ctx.latency, |name, percent| {
        progress.update(name, percent)
    })
    .await?;
    progress.finish();

    ctx.output.success(&format!(
        "{} GPTs recommended, est. {} per month",
        report.total_agents_recommended, report.estimated_monthly_savings
    ));

    deliver(ctx, &report, SavedReport::from_audit, options)
}
