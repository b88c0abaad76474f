//! Synthetic SEO report generation
//!
//! ```text
//! url ─▶ SiteTarget ─▶ seed ─▶ stream ─┬─▶ latency draw
//!                                      └─▶ SeoMetrics ─▶ categories ─▶ overall/grade
//!                                                     ├─▶ issues (severity sorted)
//!                                                     └─▶ suggestions
//! ```
//!
//! Nothing is fetched; every metric is derived from the input text, so the
//! same URL always produces the same report apart from `analyzed_at`.

pub mod categories;
pub mod issues;
pub mod metrics;
pub mod suggestions;
pub mod target;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::constants::latency::{SEO_BASE_MS, SEO_JITTER_MS};
use crate::engine::{DeterministicStream, Grade, SimulatedLatency, mean_score, seed_from_text};

pub use categories::{SeoAspect, SeoCategory, build_categories};
pub use issues::{SeoIssue, detect_issues};
pub use metrics::SeoMetrics;
pub use suggestions::{SeoSuggestion, build_suggestions};
pub use target::{SiteTarget, validate_url};

/// Complete SEO report for one URL
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeoReport {
    /// Input echoed verbatim
    pub url: String,
    pub analyzed_at: DateTime<Utc>,
    pub overall_score: u32,
    pub grade: Grade,
    pub categories: Vec<SeoCategory>,
    pub issues: Vec<SeoIssue>,
    pub suggestions: Vec<SeoSuggestion>,
}

impl SeoReport {
    pub fn category(&self, aspect: SeoAspect) -> Option<&SeoCategory> {
        self.categories.iter().find(|c| c.aspect == aspect)
    }

    pub fn critical_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == crate::types::Severity::Critical)
            .count()
    }
}

/// Generate the report, pausing for the simulated analysis time first.
#[instrument(skip(latency), fields(scale = latency.scale()))]
pub async fn analyze_seo(url: &str, latency: &SimulatedLatency) -> SeoReport {
    let target = SiteTarget::parse(url);
    let mut stream = DeterministicStream::new(seed_from_text(url));

    let delay_draw = stream.next_f64();
    latency.pause(SEO_BASE_MS, SEO_JITTER_MS, delay_draw).await;

    assemble(target, &mut stream)
}

/// Same pipeline as [`analyze_seo`] without sleeping.
pub fn synthesize_report(url: &str) -> SeoReport {
    let target = SiteTarget::parse(url);
    let mut stream = DeterministicStream::new(seed_from_text(url));
    let _delay_draw = stream.next_f64();
    assemble(target, &mut stream)
}

fn assemble(target: SiteTarget, stream: &mut DeterministicStream) -> SeoReport {
    debug!(
        "Synthesizing metrics for {} (https: {})",
        target.hostname, target.is_https
    );
    let metrics = SeoMetrics::synthesize(stream, target.is_https);

    let categories = build_categories(&metrics, &target);
    let scores: Vec<u32> = categories.iter().map(|c| c.score).collect();
    // Eight categories are always present, so the mean is defined
    let overall_score = mean_score(&scores).unwrap_or_default();
    let grade = Grade::from_score(overall_score);

    let issues = detect_issues(&metrics);
    let suggestions = build_suggestions(&target);

    info!(
        "SEO report for {}: {}/100 ({}), {} issues",
        target.raw,
        overall_score,
        grade,
        issues.len()
    );

    SeoReport {
        url: target.raw,
        analyzed_at: Utc::now(),
        overall_score,
        grade,
        categories,
        issues,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn without_timestamp(mut report: SeoReport) -> SeoReport {
        report.analyzed_at = DateTime::<Utc>::default();
        report
    }

    #[test]
    fn test_example_com() {
        let report = synthesize_report("example.com");
        assert_eq!(report.url, "example.com");
        assert_eq!(report.categories.len(), 8);
        assert_eq!(report.suggestions.len(), 8);

        let technical = report.category(SeoAspect::Technical).expect("technical");
        assert_eq!(technical.items[0].value, "HTTPS enabled");
        assert!(report.issues.iter().all(|i| i.title != "No HTTPS"));
        assert!(report.suggestions[0].description.contains("example.com"));
    }

    #[test]
    fn test_same_url_same_report() {
        let a = without_timestamp(synthesize_report("https://acme-roofing.com.au"));
        let b = without_timestamp(synthesize_report("https://acme-roofing.com.au"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_urls_differ() {
        let a = without_timestamp(synthesize_report("alpha.com"));
        let b = without_timestamp(synthesize_report("beta.com"));
        assert_ne!(a.categories, b.categories);
    }

    #[test]
    fn test_overall_is_rounded_mean() {
        let report = synthesize_report("mean-check.org");
        let sum: u32 = report.categories.iter().map(|c| c.score).sum();
        let expected = (f64::from(sum) / 8.0).round() as u32;
        assert_eq!(report.overall_score, expected);
        let scores: Vec<u32> = report.categories.iter().map(|c| c.score).collect();
        assert_eq!(mean_score(&scores).unwrap(), report.overall_score);
        assert_eq!(report.grade, Grade::from_score(expected));
    }

    #[tokio::test]
    async fn test_async_path_matches_sync_path() {
        let latency = SimulatedLatency::disabled();
        let async_report = without_timestamp(analyze_seo("shop.example.net", &latency).await);
        let sync_report = without_timestamp(synthesize_report("shop.example.net"));
        assert_eq!(async_report, sync_report);
    }

    #[test]
    fn test_json_uses_camel_case() {
        let report = synthesize_report("example.com");
        let json = serde_json::to_value(&report).expect("serialize");
        assert!(json.get("overallScore").is_some());
        assert!(json.get("analyzedAt").is_some());
        assert_eq!(json["categories"][0]["maxScore"], 100);
        assert_eq!(json["grade"].as_str(), Some(report.grade.as_str()));
    }

    proptest! {
        #[test]
        fn prop_scores_are_bounded(url in "[a-z]{1,12}\\.(com|org|io)(/[a-z]{0,8})?") {
            let report = synthesize_report(&url);
            prop_assert!(report.overall_score <= 100);
            for category in &report.categories {
                prop_assert!(category.score <= category.max_score);
            }
            let ranks: Vec<u8> = report.issues.iter().map(|i| i.severity.rank()).collect();
            prop_assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
        }

        #[test]
        fn prop_reports_are_deterministic(url in ".{0,40}") {
            let a = without_timestamp(synthesize_report(&url));
            let b = without_timestamp(synthesize_report(&url));
            prop_assert_eq!(a, b);
        }
    }
}
