//! SEO Command
//!
//! Generate a synthetic SEO report for one URL.
//!
//! Usage:
//!   webhunt seo <url> [-f text|json] [--save] [-o <file>]

use crate::cli::util::{CommandContext, ReportOptions, deliver};
use crate::seo::{analyze_seo, validate_url};
use crate::storage::SavedReport;
use crate::types::Result;

pub async fn run(ctx: &CommandContext, url: &str, options: &ReportOptions) -> Result<()> {
    let url = url.trim();
    validate_url(url)?;

    ctx.output.info(&format!("Analyzing {}...", url));
    let report = analyze_seo(url, &ctx.latency).await;

    let critical = report.critical_count();
    if critical > 0 {
        ctx.output.warning(&format!(
            "{} critical issue{} found",
            critical,
            if critical == 1 { "" } else { "s" }
        ));
    }

    deliver(ctx, &report, SavedReport::from_seo, options)
}
