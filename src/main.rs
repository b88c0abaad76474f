use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::runtime::Runtime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use webhunt::cli::commands::audit::AuditArgs;
use webhunt::cli::ui::Output;
use webhunt::cli::util::error_hint;
use webhunt::cli::{CommandContext, ReportOptions};
use webhunt::storage::{ReportFilter, ReportKind};
use webhunt::{DepartmentId, ExportFormat, WebHuntError};

/// Parse department id from string
fn parse_department(s: &str) -> Result<DepartmentId, String> {
    s.trim().parse()
}

/// Parse output format from string
fn parse_format(s: &str) -> Result<ExportFormat, String> {
    s.parse()
}

/// Parse report kind from string
fn parse_kind(s: &str) -> Result<ReportKind, String> {
    s.parse()
}

#[derive(Parser)]
#[command(name = "webhunt")]
#[command(
    version,
    about = "Deterministic SEO analysis and AI infrastructure audit reports"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, global = true)]
    verbose: bool,

    #[arg(long, short, global = true)]
    quiet: bool,

    #[arg(
        long = "no-delay",
        global = true,
        help = "Skip simulated analysis time (results are unchanged)"
    )]
    no_delay: bool,
}

#[derive(clap::Args)]
struct OutputArgs {
    #[arg(short = 'f', long, value_parser = parse_format, help = "Output format: text, json")]
    format: Option<ExportFormat>,
    #[arg(long, help = "Save a copy of the report")]
    save: bool,
    #[arg(short = 'o', long, help = "Write the report to a file instead of stdout")]
    output: Option<PathBuf>,
}

impl From<OutputArgs> for ReportOptions {
    fn from(args: OutputArgs) -> Self {
        Self {
            format: args.format,
            save: args.save,
            output: args.output,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a website's SEO
    Seo {
        #[arg(help = "Website URL, e.g. example.com")]
        url: String,
        #[command(flatten)]
        out: OutputArgs,
    },

    /// Run an AI infrastructure audit
    Audit {
        #[arg(long, help = "Company name")]
        company: String,
        #[arg(long, help = "Industry")]
        industry: String,
        #[arg(long, default_value = "", help = "Company size, e.g. 50-200")]
        size: String,
        #[arg(
            long,
            required = true,
            value_delimiter = ',',
            value_parser = parse_department,
            help = "Comma-separated department ids (see `webhunt departments`)"
        )]
        departments: Vec<DepartmentId>,
        #[command(flatten)]
        out: OutputArgs,
    },

    /// List auditable departments
    Departments {
        #[arg(short = 'f', long, value_parser = parse_format, default_value = "text", help = "Output format: text, json")]
        format: ExportFormat,
    },

    /// List saved reports
    History {
        #[arg(long, value_parser = parse_kind, help = "Only seo or audit reports")]
        kind: Option<ReportKind>,
        #[arg(long, short, help = "Match target or label (case-insensitive)")]
        search: Option<String>,
        #[arg(long, short = 'n', help = "Maximum rows")]
        limit: Option<usize>,
        #[arg(short = 'f', long, value_parser = parse_format, help = "Output format: text, json")]
        format: Option<ExportFormat>,
    },

    /// Show a saved report
    Show {
        id: String,
        #[arg(short = 'f', long, value_parser = parse_format, help = "Output format: text, json")]
        format: Option<ExportFormat>,
        #[arg(short = 'o', long, help = "Write the report to a file instead of stdout")]
        output: Option<PathBuf>,
    },

    /// Set or clear a saved report's label
    Label {
        id: String,
        #[arg(help = "New label; omit to clear")]
        text: Option<String>,
    },

    /// Delete a saved report
    Delete { id: String },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(short = 'g', long, help = "Show global config file only")]
        global: bool,
        #[arg(short = 'f', long, value_parser = parse_format, default_value = "text", help = "Output format: text, json")]
        format: ExportFormat,
    },
    /// Show configuration file paths
    Path,
    /// Initialize configuration
    Init {
        #[arg(long, short, help = "Initialize global config")]
        global: bool,
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31mWebHunt encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }
        eprintln!();

        // Backtrace when RUST_BACKTRACE=1
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let output = Output::new();
            output.error(&format!("Error: {:#}", e));
            if let Some(hint) = e.downcast_ref::<WebHuntError>().and_then(error_hint) {
                output.info(hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Seo { url, out } => {
            let ctx = CommandContext::load(cli.no_delay, cli.quiet)?;
            let rt = Runtime::new()?;
            rt.block_on(webhunt::cli::commands::seo::run(&ctx, &url, &out.into()))?;
        }
        Commands::Audit {
            company,
            industry,
            size,
            departments,
            out,
        } => {
            let ctx = CommandContext::load(cli.no_delay, cli.quiet)?;
            let args = AuditArgs {
                company,
                industry,
                size,
                departments,
            };
            let rt = Runtime::new()?;
            rt.block_on(webhunt::cli::commands::audit::run(
                &ctx,
                args,
                &out.into(),
                !cli.quiet,
            ))?;
        }
        Commands::Departments { format } => {
            webhunt::cli::commands::departments::run(format)?;
        }
        Commands::History {
            kind,
            search,
            limit,
            format,
        } => {
            let ctx = CommandContext::load(cli.no_delay, cli.quiet)?;
            let filter = ReportFilter {
                kind,
                search,
                limit,
            };
            webhunt::cli::commands::history::list(&ctx, &filter, format)?;
        }
        Commands::Show { id, format, output } => {
            let ctx = CommandContext::load(cli.no_delay, cli.quiet)?;
            webhunt::cli::commands::history::show(&ctx, &id, format, output.as_deref())?;
        }
        Commands::Label { id, text } => {
            let ctx = CommandContext::load(cli.no_delay, cli.quiet)?;
            webhunt::cli::commands::history::label(&ctx, &id, text.as_deref())?;
        }
        Commands::Delete { id } => {
            let ctx = CommandContext::load(cli.no_delay, cli.quiet)?;
            webhunt::cli::commands::history::delete(&ctx, &id)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { global, format } => {
                webhunt::cli::commands::config::show(global, format)?;
            }
            ConfigAction::Path => {
                webhunt::cli::commands::config::path()?;
            }
            ConfigAction::Init { global, force } => {
                if global {
                    webhunt::cli::commands::config::init_global(force)?;
                } else {
                    webhunt::cli::commands::config::init_project(force)?;
                }
            }
        },
    }

    Ok(())
}
