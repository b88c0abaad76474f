//! WebHunt - Deterministic Synthetic Report Engine
//!
//! Turns free text into realistic-looking reports that are identical every time
//! the same text is given. Two report generators share one pipeline:
//!
//! ```text
//! text ─▶ seed ─▶ stream ─▶ metrics ─▶ scores ─▶ findings ─▶ report
//! ```
//!
//! - **SEO analysis**: a URL becomes eight scored categories, severity-sorted
//!   issues, and a fixed suggestion list.
//! - **AI infrastructure audit**: a company profile and department selection
//!   become per-department scores, recommended GPT agents, and a phased rollout.
//!
//! ## Quick Start
//!
//! ```ignore
//! use webhunt::{SimulatedLatency, analyze_seo};
//!
//! let report = analyze_seo("example.com", &SimulatedLatency::disabled()).await;
//! println!("{} ({})", report.overall_score, report.grade);
//! ```
//!
//! ## Modules
//!
//! - [`engine`]: seed hash, deterministic stream, scoring, simulated latency
//! - [`seo`]: SEO report generator
//! - [`audit`]: AI infrastructure audit generator
//! - [`export`]: plain-text and JSON renderings
//! - [`storage`]: SQLite persistence of saved reports
//! - [`config`]: layered configuration

pub mod audit;
pub mod cli;
pub mod config;
pub mod constants;
pub mod engine;
pub mod export;
pub mod seo;
pub mod storage;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader};

// Error Types
pub use types::error::{Result, ResultExt, ValidationError, WebHuntError};

// Engine
pub use engine::{DeterministicStream, Grade, SimulatedLatency};

// Storage
pub use storage::database::PoolConfig;
pub use storage::{Database, ReportStore};

// =============================================================================
// Report Re-exports
// =============================================================================

pub use audit::{AuditReport, AuditRequest, DepartmentId, DepartmentInput, run_audit};
pub use export::{ExportFormat, Exportable};
pub use seo::{SeoReport, analyze_seo, synthesize_report};
