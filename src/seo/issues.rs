//! Issue detection rules.
//!
//! Rules are evaluated in a fixed order and ids are assigned in that order
//! (`i0`, `i1`, ...). The final list is then stably sorted by severity, so
//! ids are not necessarily ascending after sorting.

use serde::{Deserialize, Serialize};

use super::metrics::SeoMetrics;
use crate::types::Severity;

/// One detected problem
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeoIssue {
    pub id: String,
    pub severity: Severity,
    pub category: String,
    pub title: String,
    pub description: String,
    pub fix: String,
}

struct IssueCollector {
    issues: Vec<SeoIssue>,
}

impl IssueCollector {
    fn new() -> Self {
        Self { issues: Vec::new() }
    }

    fn flag(
        &mut self,
        condition: bool,
        severity: Severity,
        category: &str,
        title: impl Into<String>,
        description: impl Into<String>,
        fix: &str,
    ) {
        if !condition {
            return;
        }
        let id = format!("i{}", self.issues.len());
        self.issues.push(SeoIssue {
            id,
            severity,
            category: category.to_string(),
            title: title.into(),
            description: description.into(),
            fix: fix.to_string(),
        });
    }

    fn finish(mut self) -> Vec<SeoIssue> {
        // sort_by_key is stable: equal severities keep evaluation order
        self.issues.sort_by_key(|issue| issue.severity.rank());
        self.issues
    }
}

/// Evaluate every rule against the metrics.
pub fn detect_issues(m: &SeoMetrics) -> Vec<SeoIssue> {
    let mut found = IssueCollector::new();

    found.flag(
        m.headings.h1_count == 0,
        Severity::Critical,
        "Headings",
        "Missing H1 Tag",
        "No H1 heading was found on this page. Every page should have exactly one H1 tag.",
        "Add a single <h1> element containing your primary keyword to the page.",
    );
    found.flag(
        m.headings.h1_count > 1,
        Severity::Warning,
        "Headings",
        "Multiple H1 Tags",
        format!(
            "{} H1 tags found. Best practice is to have exactly one H1 per page.",
            m.headings.h1_count
        ),
        "Keep only one <h1> tag and convert the others to <h2> headings.",
    );
    found.flag(
        !m.meta.has_canonical,
        Severity::Critical,
        "Meta Tags",
        "Missing Canonical URL",
        "No canonical URL was detected. This can lead to duplicate content issues.",
        "Add a <link rel=\"canonical\" href=\"https://yoursite.com/page\"> tag to the <head> section.",
    );
    found.flag(
        !m.meta.has_open_graph,
        Severity::Warning,
        "Meta Tags",
        "Missing Open Graph Tags",
        "Open Graph meta tags are not configured. Social media shares will not display rich previews.",
        "Add og:title, og:description, og:image, and og:url meta tags to improve social sharing.",
    );
    found.flag(
        !m.technical.has_ssl,
        Severity::Critical,
        "Technical",
        "No HTTPS",
        "This site does not use HTTPS. Search engines penalize non-secure sites.",
        "Install an SSL certificate and redirect all HTTP traffic to HTTPS.",
    );
    found.flag(
        m.links.broken > 0,
        Severity::Critical,
        "Links",
        format!(
            "{} Broken Link{} Detected",
            m.links.broken,
            if m.links.broken > 1 { "s" } else { "" }
        ),
        "Broken links hurt user experience and crawlability.",
        "Fix or remove the broken links. Use a link checker tool to identify all broken URLs.",
    );
    found.flag(
        !m.technical.has_sitemap,
        Severity::Warning,
        "Technical",
        "Missing XML Sitemap",
        "No XML Sitemap was found. Sitemaps help search engines discover and crawl your pages.",
        "Create a sitemap.xml file listing all your important pages and submit it to Google Search Console.",
    );
    found.flag(
        m.images.with_alt < m.images.total,
        Severity::Warning,
        "Images",
        "Images Missing Alt Text",
        format!(
            "{} out of {} images are missing alt attributes.",
            m.images.total.saturating_sub(m.images.with_alt),
            m.images.total
        ),
        "Add descriptive alt text to all images. This improves accessibility and image search visibility.",
    );
    found.flag(
        m.content.word_count < 300,
        Severity::Warning,
        "Content",
        "Thin Content",
        format!(
            "Only {} words detected. Pages with thin content tend to rank poorly.",
            m.content.word_count
        ),
        "Expand your content to at least 600+ words with valuable, relevant information.",
    );
    found.flag(
        m.images.avg_size_kb > 400,
        Severity::Warning,
        "Performance",
        "Large Image Files",
        format!(
            "Average image size is ~{}KB. This slows down page load.",
            m.images.avg_size_kb
        ),
        "Compress images using tools like TinyPNG or convert to WebP format for faster loading.",
    );
    found.flag(
        !m.performance.has_gzip,
        Severity::Warning,
        "Performance",
        "Gzip Not Enabled",
        "Server-side compression is not detected, resulting in larger file transfers.",
        "Enable Gzip or Brotli compression on your web server to reduce transfer sizes by 60-80%.",
    );
    found.flag(
        !m.mobile.has_viewport,
        Severity::Critical,
        "Mobile",
        "Missing Viewport Meta Tag",
        "The viewport meta tag is missing, which means the page won't render correctly on mobile devices.",
        "Add <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"> to your <head>.",
    );
    found.flag(
        m.meta.title_length < 20 || m.meta.title_length > 65,
        Severity::Warning,
        "Meta Tags",
        "Title Tag Length",
        format!(
            "Title is {} characters. Ideal length is 30-60 characters.",
            m.meta.title_length
        ),
        "Rewrite your title tag to be between 30-60 characters, including your primary keyword.",
    );

    found.finish()
}
