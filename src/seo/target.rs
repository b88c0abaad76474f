//! Target URL handling: validation before synthesis, lenient parsing during it.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::types::{Result, ValidationError};

static URL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?[\w\-]+(\.[\w\-]+)+[/#?]?.*$").expect("valid URL shape regex")
});

static SCHEME_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://").expect("valid scheme regex"));

/// Reject input that does not look like a site address.
///
/// Called by front ends before synthesis starts; the analyzer itself never fails.
pub fn validate_url(input: &str) -> Result<()> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::missing("url", "Please enter a website URL").into());
    }
    if !URL_SHAPE.is_match(trimmed) {
        return Err(ValidationError::format(
            "url",
            "Please enter a valid URL (e.g. example.com or https://example.com)",
        )
        .into());
    }
    Ok(())
}

/// Site facts derived from the raw input text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteTarget {
    /// Input exactly as given
    pub raw: String,
    pub hostname: String,
    pub pathname: String,
    pub has_www: bool,
    /// Anything not explicitly `http://` is treated as HTTPS
    pub is_https: bool,
    /// First hostname label after dropping `www.`, or `website`
    pub domain_name: String,
}

impl SiteTarget {
    /// Parse leniently: a scheme-less input is read as `https://<input>`, and
    /// an unparseable one falls back to the text before the first `/`.
    pub fn parse(raw: &str) -> Self {
        let candidate = if raw.starts_with("http") {
            raw.to_string()
        } else {
            format!("https://{}", raw)
        };

        let (hostname, pathname) = match Url::parse(&candidate) {
            Ok(parsed) => (
                parsed.host_str().unwrap_or_default().to_string(),
                parsed.path().to_string(),
            ),
            Err(_) => (fallback_hostname(raw), "/".to_string()),
        };

        let has_www = hostname.starts_with("www.");
        let is_https = raw.starts_with("https://") || !raw.starts_with("http://");
        let domain_name = hostname
            .strip_prefix("www.")
            .unwrap_or(&hostname)
            .split('.')
            .next()
            .filter(|label| !label.is_empty())
            .unwrap_or("website")
            .to_string();

        Self {
            raw: raw.to_string(),
            hostname,
            pathname,
            has_www,
            is_https,
            domain_name,
        }
    }
}

fn fallback_hostname(raw: &str) -> String {
    let stripped = SCHEME_PREFIX.replace(raw, "");
    stripped.split('/').next().unwrap_or_default().to_string()
}

/// Uppercase the first character
pub(crate) fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
