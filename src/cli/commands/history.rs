//! History Commands
//!
//! Browse and manage saved reports.
//!
//! Usage:
//!   webhunt history [--kind seo|audit] [--search <text>] [--limit <n>] [-f text|json]
//!   webhunt show <id> [-f text|json] [-o <file>]
//!   webhunt label <id> [<text>]
//!   webhunt delete <id>

use console::style;

use crate::cli::ui::output::score_style;
use crate::cli::util::{CommandContext, emit};
use crate::export::{ExportFormat, Exportable};
use crate::storage::{ReportFilter, ReportKind, ReportStore, SavedReport};
use crate::types::Result;

/// List saved reports, newest first
pub fn list(
    ctx: &CommandContext,
    filter: &ReportFilter,
    format: Option<ExportFormat>,
) -> Result<()> {
    let store = ctx.open_store()?;
    let reports = store.list(filter)?;

    match ctx.format(format) {
        ExportFormat::Json => {
            let summaries: Vec<_> = reports.iter().map(summary_json).collect();
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
        ExportFormat::Text => {
            if reports.is_empty() {
                ctx.output.info("No saved reports");
                return Ok(());
            }
            for report in &reports {
                println!("{}", summary_line(report));
            }
            println!();
            println!("{} report{}", reports.len(), if reports.len() == 1 { "" } else { "s" });
        }
    }
    Ok(())
}

/// Render one saved report in full
pub fn show(
    ctx: &CommandContext,
    id: &str,
    format: Option<ExportFormat>,
    output: Option<&std::path::Path>,
) -> Result<()> {
    let saved = ctx.open_store()?.get(id)?;
    let format = ctx.format(format);
    let rendered = match saved.kind {
        ReportKind::Seo => saved.seo_report()?.render(format)?,
        ReportKind::Audit => saved.audit_report()?.render(format)?,
    };
    emit(&rendered, output)
}

/// Set or clear (when `text` is `None` or blank) a report's label
pub fn label(ctx: &CommandContext, id: &str, text: Option<&str>) -> Result<()> {
    let text = text.map(str::trim).filter(|t| !t.is_empty());
    ctx.open_store()?.update_label(id, text)?;
    match text {
        Some(text) => ctx.output.success(&format!("Labeled {} \"{}\"", id, text)),
        None => ctx.output.success(&format!("Cleared label of {}", id)),
    }
    Ok(())
}

pub fn delete(ctx: &CommandContext, id: &str) -> Result<()> {
    ctx.open_store()?.delete(id)?;
    ctx.output.success(&format!("Deleted {}", id));
    Ok(())
}

fn summary_line(report: &SavedReport) -> String {
    let label = report
        .label
        .as_deref()
        .map(|l| format!(" {}", style(format!("\"{}\"", l)).italic()))
        .unwrap_or_default();
    format!(
        "{}  {:<5}  {}  {}{}  {}",
        style(&report.id).dim(),
        report.kind.as_str(),
        score_style(report.overall_score, format!("{:>3}", report.overall_score)),
        report.target,
        label,
        style(report.created_at.format("%Y-%m-%d %H:%M")).dim()
    )
}

fn summary_json(report: &SavedReport) -> serde_json::Value {
    serde_json::json!({
        "id": report.id,
        "kind": report.kind,
        "target": report.target,
        "overallScore": report.overall_score,
        "label": report.label,
        "createdAt": report.created_at,
    })
}
