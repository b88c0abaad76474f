//! CLI Common Utilities
//!
//! Shared initialization and context management for CLI commands.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{Config, ConfigLoader};
use crate::engine::SimulatedLatency;
use crate::export::{ExportFormat, Exportable};
use crate::storage::{Database, ReportStore, SavedReport};
use crate::types::{Result, WebHuntError};

use super::ui::output::Output;

/// Command execution context
///
/// Loaded configuration plus the flags every command shares.
pub struct CommandContext {
    pub config: Config,
    pub latency: SimulatedLatency,
    pub output: Output,
}

impl CommandContext {
    /// Load configuration; `no_delay` overrides the configured latency scale.
    pub fn load(no_delay: bool, quiet: bool) -> Result<Self> {
        let config = ConfigLoader::load()?;
        Ok(Self::from_config(config, no_delay, quiet))
    }

    pub fn from_config(config: Config, no_delay: bool, quiet: bool) -> Self {
        let latency = if no_delay {
            SimulatedLatency::disabled()
        } else {
            config.latency()
        };
        Self {
            config,
            latency,
            output: Output::quiet(quiet),
        }
    }

    /// Open (and create if needed) the saved-report database.
    pub fn open_store(&self) -> Result<Database> {
        open_store(&self.config.storage.path)
    }

    /// Format from the flag, falling back to `output.format`
    pub fn format(&self, flag: Option<ExportFormat>) -> ExportFormat {
        flag.unwrap_or(self.config.output.format)
    }

    /// Whether a generated report is persisted
    pub fn should_save(&self, flag: bool) -> bool {
        flag || self.config.storage.auto_save
    }
}

/// Flags shared by report-producing commands
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    pub format: Option<ExportFormat>,
    pub save: bool,
    pub output: Option<PathBuf>,
}

/// Open the report database at `path` and bring its schema up to date.
pub fn open_store(path: &Path) -> Result<Database> {
    let db = Database::open(path)?;
    db.initialize()?;
    Ok(db)
}

/// Render, write, and optionally save a finished report.
pub fn deliver<R: Exportable>(
    ctx: &CommandContext,
    report: &R,
    saved: impl FnOnce(&R) -> Result<SavedReport>,
    options: &ReportOptions,
) -> Result<()> {
    let rendered = report.render(ctx.format(options.format))?;
    emit(&rendered, options.output.as_deref())?;
    if let Some(path) = &options.output {
        ctx.output
            .success(&format!("Report written to {}", path.display()));
    }

    if ctx.should_save(options.save) {
        let record = saved(report)?;
        ctx.open_store()?.insert(&record)?;
        ctx.output.success(&format!("Saved report {}", record.id));
    }
    Ok(())
}

/// Follow-up advice printed under a failed command's error
pub fn error_hint(err: &WebHuntError) -> Option<&'static str> {
    if err.is_retryable() {
        Some("This looks temporary (storage or I/O). Try the command again.")
    } else if matches!(err, WebHuntError::Config(_)) {
        Some("Run 'webhunt config path' to see which config files are loaded.")
    } else if matches!(err, WebHuntError::NotFound { .. }) {
        Some("Run 'webhunt history' to list saved report ids.")
    } else {
        None
    }
}

/// Write to `path` when given, otherwise to stdout.
pub fn emit(content: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, content)?;
            debug!("Wrote {} bytes to {}", content.len(), path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::ReportFilter;
    use crate::seo::synthesize_report;
    use tempfile::TempDir;

    fn context(dir: &TempDir, auto_save: bool) -> CommandContext {
        let mut config = Config::default();
        config.storage.path = dir.path().join("reports.db");
        config.storage.auto_save = auto_save;
        CommandContext::from_config(config, true, true)
    }

    #[test]
    fn test_error_hints() {
        let storage = WebHuntError::Storage("database is locked".to_string());
        assert!(error_hint(&storage).unwrap().contains("Try the command again"));

        let missing = WebHuntError::NotFound { id: "x".to_string() };
        assert!(error_hint(&missing).unwrap().contains("webhunt history"));

        let invalid: WebHuntError =
            crate::types::ValidationError::format("url", "Please enter a valid URL").into();
        assert_eq!(error_hint(&invalid), None);
    }

    #[test]
    fn test_no_delay_overrides_config() {
        let ctx = CommandContext::from_config(Config::default(), true, true);
        assert!(!ctx.latency.is_enabled());
        let ctx = CommandContext::from_config(Config::default(), false, true);
        assert!(ctx.latency.is_enabled());
    }

    #[test]
    fn test_format_falls_back_to_config() {
        let mut config = Config::default();
        config.output.format = ExportFormat::Json;
        let ctx = CommandContext::from_config(config, true, true);
        assert_eq!(ctx.format(None), ExportFormat::Json);
        assert_eq!(ctx.format(Some(ExportFormat::Text)), ExportFormat::Text);
    }

    #[test]
    fn test_deliver_writes_file_and_saves() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir, false);
        let out = dir.path().join("out/report.txt");
        let options = ReportOptions {
            format: None,
            save: true,
            output: Some(out.clone()),
        };

        let report = synthesize_report("example.com");
        deliver(&ctx, &report, SavedReport::from_seo, &options).unwrap();

        let text = fs::read_to_string(&out).unwrap();
        assert!(text.starts_with("SEO Analysis Report for example.com"));
        let saved = ctx.open_store().unwrap().list(&ReportFilter::default()).unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].target, "example.com");
    }

    #[test]
    fn test_auto_save_from_config() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir, true);
        let options = ReportOptions {
            output: Some(dir.path().join("r.json")),
            format: Some(ExportFormat::Json),
            ..Default::default()
        };

        deliver(&ctx, &synthesize_report("a.io"), SavedReport::from_seo, &options).unwrap();
        let saved = ctx.open_store().unwrap().list(&ReportFilter::default()).unwrap();
        assert_eq!(saved.len(), 1);
    }
}
