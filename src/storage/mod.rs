pub mod database;
pub mod reports;

pub use database::{Database, PoolConfig};
pub use reports::{ReportFilter, ReportKind, ReportStore, SavedReport};
