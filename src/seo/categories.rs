//! Category scoring and metric lines for the eight SEO aspects.

use serde::{Deserialize, Serialize};

use super::metrics::{
    ContentMetrics, HeadingMetrics, ImageMetrics, LinkMetrics, MetaMetrics, MobileMetrics,
    PerformanceMetrics, SeoMetrics, TechnicalMetrics,
};
use super::target::{SiteTarget, capitalize};
use crate::constants::scoring::MAX_SCORE;
use crate::engine::ScoreSheet;
use crate::types::{MetricItem, MetricStatus};

/// The fixed set of scored SEO aspects, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeoAspect {
    MetaTags,
    Headings,
    Content,
    Links,
    Images,
    Mobile,
    Performance,
    Technical,
}

impl SeoAspect {
    pub const ALL: [SeoAspect; 8] = [
        Self::MetaTags,
        Self::Headings,
        Self::Content,
        Self::Links,
        Self::Images,
        Self::Mobile,
        Self::Performance,
        Self::Technical,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::MetaTags => "Meta Tags",
            Self::Headings => "Headings Structure",
            Self::Content => "Content Quality",
            Self::Links => "Links Analysis",
            Self::Images => "Image Optimization",
            Self::Mobile => "Mobile Friendliness",
            Self::Performance => "Performance Hints",
            Self::Technical => "Technical SEO",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::MetaTags => "tag",
            Self::Headings => "heading",
            Self::Content => "file-text",
            Self::Links => "link",
            Self::Images => "image",
            Self::Mobile => "smartphone",
            Self::Performance => "zap",
            Self::Technical => "settings",
        }
    }
}

/// One scored aspect of the report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeoCategory {
    pub aspect: SeoAspect,
    pub name: String,
    pub icon: String,
    pub score: u32,
    pub max_score: u32,
    pub items: Vec<MetricItem>,
}

impl SeoCategory {
    fn new(aspect: SeoAspect, score: u32, items: Vec<MetricItem>) -> Self {
        Self {
            aspect,
            name: aspect.name().to_string(),
            icon: aspect.icon().to_string(),
            score,
            max_score: MAX_SCORE,
            items,
        }
    }
}

/// Score every aspect, in [`SeoAspect::ALL`] order.
pub fn build_categories(metrics: &SeoMetrics, target: &SiteTarget) -> Vec<SeoCategory> {
    SeoAspect::ALL
        .iter()
        .map(|&aspect| match aspect {
            SeoAspect::MetaTags => meta_category(&metrics.meta, target),
            SeoAspect::Headings => headings_category(&metrics.headings),
            SeoAspect::Content => content_category(&metrics.content),
            SeoAspect::Links => links_category(&metrics.links),
            SeoAspect::Images => images_category(&metrics.images),
            SeoAspect::Mobile => mobile_category(&metrics.mobile),
            SeoAspect::Performance => performance_category(&metrics.performance),
            SeoAspect::Technical => technical_category(&metrics.technical, target),
        })
        .collect()
}

fn meta_category(m: &MetaMetrics, target: &SiteTarget) -> SeoCategory {
    let score = ScoreSheet::new()
        .award(m.title_in_range(), 20, 10)
        .award(m.has_title_keyword, 15, 0)
        .award(m.description_in_range(), 20, 10)
        .award(m.has_open_graph, 15, 0)
        .award(m.has_twitter_card, 10, 0)
        .award(m.has_canonical, 10, 0)
        .award(m.has_favicon, 10, 0)
        .total();

    let title_status = if m.title_in_range() {
        MetricStatus::Good
    } else if m.title_length < 20 {
        MetricStatus::Error
    } else {
        MetricStatus::Warning
    };
    let description_status = if m.description_in_range() {
        MetricStatus::Good
    } else if m.description_length < 80 {
        MetricStatus::Error
    } else {
        MetricStatus::Warning
    };

    let items = vec![
        MetricItem::new(
            "Title Tag",
            format!(
                "{} characters — \"{} | {}\"",
                m.title_length,
                capitalize(&target.domain_name),
                m.title_suffix
            ),
            title_status,
        ),
        MetricItem::new(
            "Title Keyword",
            if m.has_title_keyword {
                "Primary keyword found in title"
            } else {
                "No keyword detected in title"
            },
            MetricStatus::good_or(m.has_title_keyword, MetricStatus::Warning),
        ),
        MetricItem::new(
            "Meta Description",
            format!("{} characters", m.description_length),
            description_status,
        ),
        MetricItem::new(
            "Open Graph Tags",
            if m.has_open_graph {
                "og:title, og:description, og:image present"
            } else {
                "Missing Open Graph tags"
            },
            MetricStatus::good_or(m.has_open_graph, MetricStatus::Warning),
        ),
        MetricItem::new(
            "Twitter Card",
            if m.has_twitter_card {
                "summary_large_image card configured"
            } else {
                "No Twitter Card meta tags"
            },
            MetricStatus::good_or(m.has_twitter_card, MetricStatus::Warning),
        ),
        MetricItem::new(
            "Canonical URL",
            if m.has_canonical {
                format!("https://{}{}", target.hostname, target.pathname)
            } else {
                "No canonical URL set".to_string()
            },
            MetricStatus::good_or(m.has_canonical, MetricStatus::Error),
        ),
        MetricItem::new(
            "Favicon",
            if m.has_favicon {
                "Favicon detected"
            } else {
                "No favicon found"
            },
            MetricStatus::good_or(m.has_favicon, MetricStatus::Warning),
        ),
    ];

    SeoCategory::new(SeoAspect::MetaTags, score, items)
}

fn headings_category(m: &HeadingMetrics) -> SeoCategory {
    let h1_points = match m.h1_count {
        1 => 40,
        0 => 0,
        _ => 15,
    };
    let score = ScoreSheet::new()
        .add(h1_points)
        .award(m.h2_count >= 2, 25, 10)
        .award(m.h3_count >= 1, 15, 5)
        .award(m.has_proper_hierarchy(), 20, 0)
        .total();

    let items = vec![
        MetricItem::new(
            "H1 Tags",
            format!("{} found", m.h1_count),
            MetricStatus::good_or(m.h1_count == 1, MetricStatus::Error),
        ),
        MetricItem::new(
            "H2 Tags",
            format!("{} found", m.h2_count),
            MetricStatus::good_or(m.h2_count >= 2, MetricStatus::Warning),
        ),
        MetricItem::new(
            "H3 Tags",
            format!("{} found", m.h3_count),
            MetricStatus::good_or(m.h3_count >= 1, MetricStatus::Warning),
        ),
        MetricItem::new(
            "Heading Hierarchy",
            if m.has_proper_hierarchy() {
                "Proper H1 → H2 → H3 structure"
            } else {
                "Heading hierarchy has gaps"
            },
            MetricStatus::good_or(m.has_proper_hierarchy(), MetricStatus::Warning),
        ),
    ];

    SeoCategory::new(SeoAspect::Headings, score, items)
}

fn content_category(m: &ContentMetrics) -> SeoCategory {
    let word_points = match m.word_count {
        600.. => 30,
        300..=599 => 20,
        _ => 5,
    };
    let score = ScoreSheet::new()
        .add(word_points)
        .award(m.readability_in_range(), 25, 10)
        .award(m.density_in_range(), 25, 10)
        .award(m.has_structured_data, 20, 0)
        .total();

    let word_status = match m.word_count {
        600.. => MetricStatus::Good,
        300..=599 => MetricStatus::Warning,
        _ => MetricStatus::Error,
    };
    let readability_label = match m.readability_grade {
        0..=8 => "Easy",
        9..=12 => "Moderate",
        _ => "Difficult",
    };
    let density_status = if m.density_in_range() {
        MetricStatus::Good
    } else if m.keyword_density > 3.0 {
        MetricStatus::Error
    } else {
        MetricStatus::Warning
    };

    let items = vec![
        MetricItem::new("Word Count", format!("{} words", m.word_count), word_status),
        MetricItem::new(
            "Readability",
            format!("Grade {} ({})", m.readability_grade, readability_label),
            MetricStatus::good_or(m.readability_in_range(), MetricStatus::Warning),
        ),
        MetricItem::new(
            "Keyword Density",
            format!("{:.1}%", m.keyword_density),
            density_status,
        ),
        MetricItem::new(
            "Structured Data",
            if m.has_structured_data {
                "Schema.org markup detected"
            } else {
                "No structured data found"
            },
            MetricStatus::good_or(m.has_structured_data, MetricStatus::Warning),
        ),
    ];

    SeoCategory::new(SeoAspect::Content, score, items)
}

fn links_category(m: &LinkMetrics) -> SeoCategory {
    let broken_points = match m.broken {
        0 => 30,
        1..=2 => 15,
        _ => 0,
    };
    let score = ScoreSheet::new()
        .award(m.internal >= 5, 30, 15)
        .award(m.external >= 1, 20, 5)
        .add(broken_points)
        .award(m.has_nofollow_on_external, 20, 10)
        .total();

    let items = vec![
        MetricItem::new(
            "Internal Links",
            format!("{} links", m.internal),
            MetricStatus::good_or(m.internal >= 5, MetricStatus::Warning),
        ),
        MetricItem::new(
            "External Links",
            format!("{} links", m.external),
            MetricStatus::good_or(m.external >= 1, MetricStatus::Warning),
        ),
        MetricItem::new(
            "Broken Links",
            if m.broken == 0 {
                "None detected".to_string()
            } else {
                format!("{} broken links found", m.broken)
            },
            MetricStatus::good_or(m.broken == 0, MetricStatus::Error),
        ),
        MetricItem::new(
            "Nofollow Attributes",
            if m.has_nofollow_on_external {
                "External links have rel=\"nofollow\""
            } else {
                "External links missing nofollow"
            },
            MetricStatus::good_or(m.has_nofollow_on_external, MetricStatus::Warning),
        ),
    ];

    SeoCategory::new(SeoAspect::Links, score, items)
}

fn images_category(m: &ImageMetrics) -> SeoCategory {
    let size_points = match m.avg_size_kb {
        0..=200 => 25,
        201..=400 => 15,
        _ => 5,
    };
    let alt_points = if m.all_have_alt() {
        35.0
    } else {
        m.alt_ratio() * 35.0
    };
    let score = ScoreSheet::new()
        .add_fraction(alt_points)
        .award(m.mostly_lazy(), 25, 10)
        .add(size_points)
        .award(m.total >= 1, 15, 0)
        .total();

    let alt_status = if m.all_have_alt() {
        MetricStatus::Good
    } else if m.alt_ratio() >= 0.5 {
        MetricStatus::Warning
    } else {
        MetricStatus::Error
    };
    let size_status = match m.avg_size_kb {
        0..=200 => MetricStatus::Good,
        201..=400 => MetricStatus::Warning,
        _ => MetricStatus::Error,
    };

    let items = vec![
        MetricItem::new(
            "Images Found",
            format!("{} images", m.total),
            MetricStatus::Good,
        ),
        MetricItem::new(
            "Alt Attributes",
            format!("{}/{} have alt text", m.with_alt, m.total),
            alt_status,
        ),
        MetricItem::new(
            "Lazy Loading",
            format!("{}/{} use lazy loading", m.with_lazy, m.total),
            MetricStatus::good_or(m.mostly_lazy(), MetricStatus::Warning),
        ),
        MetricItem::new(
            "Average Size",
            format!("~{}KB per image", m.avg_size_kb),
            size_status,
        ),
    ];

    SeoCategory::new(SeoAspect::Images, score, items)
}

fn mobile_category(m: &MobileMetrics) -> SeoCategory {
    let score = ScoreSheet::new()
        .award(m.has_viewport, 30, 0)
        .award(m.has_responsive, 30, 0)
        .award(m.has_tap_targets, 20, 5)
        .award(m.font_size_ok, 20, 5)
        .total();

    let items = vec![
        MetricItem::new(
            "Viewport Meta",
            if m.has_viewport {
                "viewport meta tag present"
            } else {
                "Missing viewport meta tag"
            },
            MetricStatus::good_or(m.has_viewport, MetricStatus::Error),
        ),
        MetricItem::new(
            "Responsive Design",
            if m.has_responsive {
                "Media queries detected"
            } else {
                "No responsive indicators"
            },
            MetricStatus::good_or(m.has_responsive, MetricStatus::Error),
        ),
        MetricItem::new(
            "Tap Targets",
            if m.has_tap_targets {
                "Buttons/links properly sized"
            } else {
                "Some tap targets too small"
            },
            MetricStatus::good_or(m.has_tap_targets, MetricStatus::Warning),
        ),
        MetricItem::new(
            "Font Sizes",
            if m.font_size_ok {
                "Readable on mobile"
            } else {
                "Some text too small for mobile"
            },
            MetricStatus::good_or(m.font_size_ok, MetricStatus::Warning),
        ),
    ];

    SeoCategory::new(SeoAspect::Mobile, score, items)
}

fn performance_category(m: &PerformanceMetrics) -> SeoCategory {
    let size_points = match m.page_size_kb {
        0..=1000 => 25,
        1001..=2000 => 15,
        _ => 5,
    };
    let request_points = match m.requests {
        0..=30 => 20,
        31..=50 => 10,
        _ => 0,
    };
    let score = ScoreSheet::new()
        .add(size_points)
        .add(request_points)
        .award(m.has_minified_css, 15, 0)
        .award(m.has_minified_js, 15, 0)
        .award(m.has_gzip, 25, 5)
        .total();

    let size_status = match m.page_size_kb {
        0..=1000 => MetricStatus::Good,
        1001..=2000 => MetricStatus::Warning,
        _ => MetricStatus::Error,
    };
    let request_status = match m.requests {
        0..=30 => MetricStatus::Good,
        31..=50 => MetricStatus::Warning,
        _ => MetricStatus::Error,
    };

    let items = vec![
        MetricItem::new(
            "Page Size",
            megabytes(m.page_size_kb),
            size_status,
        ),
        MetricItem::new(
            "HTTP Requests",
            format!("{} requests", m.requests),
            request_status,
        ),
        MetricItem::new(
            "CSS Minification",
            if m.has_minified_css {
                "CSS is minified"
            } else {
                "CSS not minified"
            },
            MetricStatus::good_or(m.has_minified_css, MetricStatus::Warning),
        ),
        MetricItem::new(
            "JS Minification",
            if m.has_minified_js {
                "JavaScript is minified"
            } else {
                "JavaScript not minified"
            },
            MetricStatus::good_or(m.has_minified_js, MetricStatus::Warning),
        ),
        MetricItem::new(
            "Gzip Compression",
            if m.has_gzip {
                "Gzip enabled"
            } else {
                "Gzip not detected"
            },
            MetricStatus::good_or(m.has_gzip, MetricStatus::Error),
        ),
    ];

    SeoCategory::new(SeoAspect::Performance, score, items)
}

fn technical_category(m: &TechnicalMetrics, target: &SiteTarget) -> SeoCategory {
    let score = ScoreSheet::new()
        .award(m.has_robots_txt, 20, 0)
        .award(m.has_sitemap, 25, 0)
        .award(m.has_ssl, 25, 0)
        .award(m.has_custom_404, 15, 0)
        .award(m.has_hreflang, 15, 5)
        .total();

    let items = vec![
        MetricItem::new(
            "SSL Certificate",
            if m.has_ssl {
                "HTTPS enabled"
            } else {
                "No HTTPS — site is insecure"
            },
            MetricStatus::good_or(m.has_ssl, MetricStatus::Error),
        ),
        MetricItem::new(
            "Robots.txt",
            if m.has_robots_txt {
                format!("Found at {}/robots.txt", target.hostname)
            } else {
                "No robots.txt found".to_string()
            },
            MetricStatus::good_or(m.has_robots_txt, MetricStatus::Warning),
        ),
        MetricItem::new(
            "XML Sitemap",
            if m.has_sitemap {
                format!("Found at {}/sitemap.xml", target.hostname)
            } else {
                "No sitemap detected".to_string()
            },
            MetricStatus::good_or(m.has_sitemap, MetricStatus::Error),
        ),
        MetricItem::new(
            "Custom 404",
            if m.has_custom_404 {
                "Custom 404 page detected"
            } else {
                "Using default 404 page"
            },
            MetricStatus::good_or(m.has_custom_404, MetricStatus::Warning),
        ),
        MetricItem::new(
            "Hreflang Tags",
            if m.has_hreflang {
                "Multi-language support detected"
            } else {
                "No hreflang tags"
            },
            MetricStatus::good_or(m.has_hreflang, MetricStatus::Warning),
        ),
    ];

    SeoCategory::new(SeoAspect::Technical, score, items)
}

/// Kilobytes as one-decimal megabytes, e.g. `2.3 MB`.
///
/// Exact halves (`kb` a multiple of 125 ending in 50) round up. Everything
/// else rounds the binary value of `kb / 1000`, so 1150 KB is `1.1 MB`.
fn megabytes(kb: u32) -> String {
    if kb % 125 == 0 && kb % 100 == 50 {
        let tenths = (kb + 50) / 100;
        format!("{}.{} MB", tenths / 10, tenths % 10)
    } else {
        format!("{:.1} MB", f64::from(kb) / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perfect_metrics() -> SeoMetrics {
        SeoMetrics {
            meta: MetaMetrics {
                title_length: 45,
                has_title_keyword: true,
                description_length: 140,
                has_open_graph: true,
                has_twitter_card: true,
                has_canonical: true,
                has_favicon: true,
                title_suffix: "Home",
            },
            headings: HeadingMetrics {
                h1_count: 1,
                h2_count: 4,
                h3_count: 3,
            },
            content: ContentMetrics {
                word_count: 1200,
                readability_grade: 8,
                keyword_density: 2.0,
                has_structured_data: true,
            },
            links: LinkMetrics {
                internal: 12,
                external: 3,
                broken: 0,
                has_nofollow_on_external: true,
            },
            images: ImageMetrics {
                total: 10,
                with_alt: 10,
                with_lazy: 8,
                avg_size_kb: 120,
            },
            mobile: MobileMetrics {
                has_viewport: true,
                has_responsive: true,
                has_tap_targets: true,
                font_size_ok: true,
            },
            performance: PerformanceMetrics {
                page_size_kb: 800,
                requests: 20,
                has_minified_css: true,
                has_minified_js: true,
                has_gzip: true,
            },
            technical: TechnicalMetrics {
                has_robots_txt: true,
                has_sitemap: true,
                has_ssl: true,
                has_custom_404: true,
                has_hreflang: true,
            },
        }
    }

    #[test]
    fn test_best_case_scores_are_exactly_max() {
        let target = SiteTarget::parse("example.com");
        let categories = build_categories(&perfect_metrics(), &target);
        assert_eq!(categories.len(), 8);
        for category in &categories {
            assert_eq!(category.score, 100, "{}", category.name);
            assert_eq!(category.max_score, 100);
            assert!(
                category.items.iter().all(|i| i.status == MetricStatus::Good),
                "{}",
                category.name
            );
        }
    }

    #[test]
    fn test_category_order_and_names() {
        let target = SiteTarget::parse("example.com");
        let names: Vec<String> = build_categories(&perfect_metrics(), &target)
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "Meta Tags",
                "Headings Structure",
                "Content Quality",
                "Links Analysis",
                "Image Optimization",
                "Mobile Friendliness",
                "Performance Hints",
                "Technical SEO",
            ]
        );
    }

    #[test]
    fn test_partial_alt_coverage_is_proportional() {
        let mut metrics = perfect_metrics();
        metrics.images = ImageMetrics {
            total: 9,
            with_alt: 7,
            with_lazy: 2,
            avg_size_kb: 450,
        };
        let category = images_category(&metrics.images);
        // 27.22 + 10 + 5 + 15
        assert_eq!(category.score, 57);
        assert_eq!(category.items[1].status, MetricStatus::Warning);
        assert_eq!(category.items[3].status, MetricStatus::Error);
    }

    #[test]
    fn test_heading_penalties() {
        let none = headings_category(&HeadingMetrics {
            h1_count: 0,
            h2_count: 2,
            h3_count: 0,
        });
        // 0 + 25 + 5 + 0
        assert_eq!(none.score, 30);

        let many = headings_category(&HeadingMetrics {
            h1_count: 2,
            h2_count: 3,
            h3_count: 1,
        });
        // 15 + 25 + 15 + 0
        assert_eq!(many.score, 55);
        assert_eq!(many.items[0].status, MetricStatus::Error);
    }

    #[test]
    fn test_title_item_mentions_capitalized_domain() {
        let target = SiteTarget::parse("https://www.roofers.com.au");
        let meta = meta_category(&perfect_metrics().meta, &target);
        assert_eq!(meta.items[0].value, "45 characters — \"Roofers | Home\"");
        assert_eq!(meta.items[5].value, "https://www.roofers.com.au/");
    }

    #[test]
    fn test_megabytes_rounding() {
        assert_eq!(megabytes(2250), "2.3 MB");
        assert_eq!(megabytes(2750), "2.8 MB");
        assert_eq!(megabytes(1150), "1.1 MB");
        assert_eq!(megabytes(1350), "1.4 MB");
        assert_eq!(megabytes(300), "0.3 MB");
        assert_eq!(megabytes(4299), "4.3 MB");
    }
}
