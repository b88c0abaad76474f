//! Saved report copies and the persistence seam the front ends talk to.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rusqlite::{Row, params};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::database::Database;
use crate::audit::AuditReport;
use crate::constants::storage::MAX_LIST_ROWS;
use crate::seo::SeoReport;
use crate::types::{ReportId, Result, ResultExt, WebHuntError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Seo,
    Audit,
}

impl ReportKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ReportKind::Seo => "seo",
            ReportKind::Audit => "audit",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "seo" => Ok(ReportKind::Seo),
            "audit" => Ok(ReportKind::Audit),
            _ => Err(format!("Unknown report kind: {}. Valid values: seo, audit", s)),
        }
    }
}

/// One persisted report with its summary columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedReport {
    pub id: String,
    pub kind: ReportKind,
    /// URL for SEO reports, company name for audits
    pub target: String,
    pub overall_score: u32,
    pub label: Option<String>,
    /// Full report body as JSON
    pub report: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl SavedReport {
    pub fn from_seo(report: &SeoReport) -> Result<Self> {
        Ok(Self {
            id: ReportId::generate().into_inner(),
            kind: ReportKind::Seo,
            target: report.url.clone(),
            overall_score: report.overall_score,
            label: None,
            report: serde_json::to_value(report)?,
            created_at: report.analyzed_at,
        })
    }

    pub fn from_audit(report: &AuditReport) -> Result<Self> {
        Ok(Self {
            id: ReportId::generate().into_inner(),
            kind: ReportKind::Audit,
            target: report.company_name.clone(),
            overall_score: report.overall_readiness_score,
            label: None,
            report: serde_json::to_value(report)?,
            created_at: report.analyzed_at,
        })
    }

    /// Decode the body back into an SEO report
    pub fn seo_report(&self) -> Result<SeoReport> {
        Ok(serde_json::from_value(self.report.clone())?)
    }

    /// Decode the body back into an audit report
    pub fn audit_report(&self) -> Result<AuditReport> {
        Ok(serde_json::from_value(self.report.clone())?)
    }
}

/// Listing filter; empty fields match everything
#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    pub kind: Option<ReportKind>,
    /// Case-insensitive substring of target or label
    pub search: Option<String>,
    pub limit: Option<usize>,
}

impl ReportFilter {
    pub fn kind(mut self, kind: ReportKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }
}

/// Persistence operations for saved reports
pub trait ReportStore {
    fn insert(&self, report: &SavedReport) -> Result<()>;

    /// Newest first
    fn list(&self, filter: &ReportFilter) -> Result<Vec<SavedReport>>;

    fn get(&self, id: &str) -> Result<SavedReport>;

    /// Fails with `NotFound` when no row has this id
    fn update_label(&self, id: &str, label: Option<&str>) -> Result<()>;

    /// Fails with `NotFound` when no row has this id
    fn delete(&self, id: &str) -> Result<()>;
}

const SELECT_COLUMNS: &str =
    "SELECT id, kind, target, overall_score, label, report_json, created_at FROM saved_reports";

type SavedReportRow = (String, String, String, i64, Option<String>, String, String);

fn read_row(row: &Row<'_>) -> rusqlite::Result<SavedReportRow> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
        row.get(6)?,
    ))
}

fn decode_row(raw: SavedReportRow) -> Result<SavedReport> {
    let (id, kind, target, score, label, body, created) = raw;
    let kind = kind
        .parse::<ReportKind>()
        .map_err(|e| WebHuntError::Storage(format!("Corrupted row {}: {}", id, e)))?;
    let report = serde_json::from_str(&body)
        .with_context_fn(|| format!("Corrupted report JSON for {}", id))?;
    let created_at = DateTime::parse_from_rfc3339(&created)
        .with_context_fn(|| format!("Corrupted timestamp for {}", id))?
        .with_timezone(&Utc);

    Ok(SavedReport {
        id,
        kind,
        target,
        overall_score: score.clamp(0, i64::from(u32::MAX)) as u32,
        label,
        report,
        created_at,
    })
}

/// Search text as a LIKE pattern body matching itself literally.
///
/// SQLite's `LOWER()` folds ASCII only, so the text is folded the same way.
fn like_literal(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c.to_ascii_lowercase());
    }
    escaped
}

impl ReportStore for Database {
    fn insert(&self, report: &SavedReport) -> Result<()> {
        let body = serde_json::to_string(&report.report)?;
        self.transaction(|conn| {
            conn.execute(
                "INSERT INTO saved_reports
                 (id, kind, target, overall_score, label, report_json, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    report.id,
                    report.kind.as_str(),
                    report.target,
                    i64::from(report.overall_score),
                    report.label,
                    body,
                    report.created_at.to_rfc3339(),
                ],
            )
            .with_context("Failed to save report")?;
            Ok(())
        })?;

        info!("Saved {} report {} for {}", report.kind, report.id, report.target);
        Ok(())
    }

    fn list(&self, filter: &ReportFilter) -> Result<Vec<SavedReport>> {
        let conn = self.connection()?;

        let mut sql = format!("{} WHERE 1 = 1", SELECT_COLUMNS);
        let mut args: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(kind) = filter.kind {
            args.push(Box::new(kind.as_str()));
            sql.push_str(&format!(" AND kind = ?{}", args.len()));
        }
        if let Some(search) = filter.search.as_deref().filter(|s| !s.trim().is_empty()) {
            args.push(Box::new(format!("%{}%", like_literal(search.trim()))));
            let n = args.len();
            sql.push_str(&format!(
                " AND (LOWER(target) LIKE ?{n} ESCAPE '\\' \
                 OR LOWER(COALESCE(label, '')) LIKE ?{n} ESCAPE '\\')"
            ));
        }
        let limit = filter.limit.unwrap_or(MAX_LIST_ROWS).min(MAX_LIST_ROWS);
        sql.push_str(&format!(" ORDER BY created_at DESC, id LIMIT {}", limit));

        let arg_refs: Vec<&dyn rusqlite::ToSql> = args.iter().map(|a| a.as_ref()).collect();
        let mut stmt = conn
            .prepare(&sql)
            .with_context("Failed to prepare report listing")?;
        let rows = stmt
            .query_map(arg_refs.as_slice(), read_row)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .with_context("Failed to list reports")?;

        debug!("Listed {} saved reports", rows.len());
        rows.into_iter().map(decode_row).collect()
    }

    fn get(&self, id: &str) -> Result<SavedReport> {
        let conn = self.connection()?;
        let mut stmt = conn
            .prepare(&format!("{} WHERE id = ?1", SELECT_COLUMNS))
            .with_context("Failed to prepare report lookup")?;
        let mut rows = stmt.query_map(params![id], read_row)?;

        match rows.next() {
            Some(row) => decode_row(row?),
            None => Err(WebHuntError::NotFound { id: id.to_string() }),
        }
    }

    fn update_label(&self, id: &str, label: Option<&str>) -> Result<()> {
        let label = label.map(str::trim).filter(|l| !l.is_empty());
        let changed = self
            .connection()?
            .execute(
                "UPDATE saved_reports SET label = ?1 WHERE id = ?2",
                params![label, id],
            )
            .with_context("Failed to update report label")?;

        if changed == 0 {
            return Err(WebHuntError::NotFound { id: id.to_string() });
        }
        debug!("Relabeled report {}", id);
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<()> {
        let removed = self
            .connection()?
            .execute("DELETE FROM saved_reports WHERE id = ?1", params![id])
            .with_context("Failed to delete report")?;

        if removed == 0 {
            return Err(WebHuntError::NotFound { id: id.to_string() });
        }
        info!("Deleted report {}", id);
        Ok(())
    }
}
