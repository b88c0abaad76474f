//! Fixed improvement suggestions, personalized with the site's names.

use serde::{Deserialize, Serialize};

use super::target::SiteTarget;
use crate::types::Tier;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeoSuggestion {
    pub id: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub impact: Tier,
}

fn suggestion(
    id: &str,
    category: &str,
    title: &str,
    description: String,
    impact: Tier,
) -> SeoSuggestion {
    SeoSuggestion {
        id: id.to_string(),
        category: category.to_string(),
        title: title.to_string(),
        description,
        impact,
    }
}

/// The eight suggestions `s1..s8`, always in the same order.
pub fn build_suggestions(target: &SiteTarget) -> Vec<SeoSuggestion> {
    let hostname = &target.hostname;
    let domain_name = &target.domain_name;

    vec![
        suggestion(
            "s1",
            "Content",
            "Add FAQ Schema Markup",
            format!(
                "Add FAQ structured data to your {hostname} pages to appear in Google's rich results with expandable Q&A sections. This can increase click-through rates by up to 30%."
            ),
            Tier::High,
        ),
        suggestion(
            "s2",
            "Performance",
            "Implement Image CDN",
            "Serve images through a CDN like Cloudflare or imgix with automatic format conversion (WebP/AVIF) and responsive sizing for faster load times.".to_string(),
            Tier::High,
        ),
        suggestion(
            "s3",
            "Meta Tags",
            "Optimize Meta Descriptions for CTR",
            "Include a clear call-to-action and unique value proposition in your meta descriptions. Use power words and keep within 150-160 characters.".to_string(),
            Tier::Medium,
        ),
        suggestion(
            "s4",
            "Content",
            "Internal Linking Strategy",
            format!(
                "Create a hub-and-spoke internal linking structure with {domain_name}'s most important pages as hubs. Link related content together to distribute page authority."
            ),
            Tier::High,
        ),
        suggestion(
            "s5",
            "Technical",
            "Implement Core Web Vitals Optimization",
            "Focus on LCP (Largest Contentful Paint), FID (First Input Delay), and CLS (Cumulative Layout Shift) to meet Google's Core Web Vitals thresholds.".to_string(),
            Tier::High,
        ),
        suggestion(
            "s6",
            "Content",
            "Add Blog Section",
            format!(
                "Create a blog on {hostname} targeting long-tail keywords in your niche. Publish 2-4 articles per month with 1500+ words each."
            ),
            Tier::Medium,
        ),
        suggestion(
            "s7",
            "Local SEO",
            "Set Up Google Business Profile",
            "If applicable, create and optimize a Google Business Profile for local search visibility. Add photos, business hours, and respond to reviews.".to_string(),
            Tier::Medium,
        ),
        suggestion(
            "s8",
            "Technical",
            "Add Breadcrumb Navigation",
            "Implement breadcrumb navigation with BreadcrumbList schema markup. This improves both user navigation and search appearance.".to_string(),
            Tier::Low,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestions_are_personalized() {
        let target = SiteTarget::parse("https://www.acme.io/shop");
        let suggestions = build_suggestions(&target);
        assert_eq!(suggestions.len(), 8);

        let ids: Vec<&str> = suggestions.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s2", "s3", "s4", "s5", "s6", "s7", "s8"]);

        assert!(suggestions[0].description.contains("your www.acme.io pages"));
        assert!(suggestions[3].description.contains("acme's most important pages"));
        assert!(suggestions[5].description.starts_with("Create a blog on www.acme.io"));
        assert_eq!(suggestions[6].category, "Local SEO");
        assert_eq!(suggestions[7].impact, Tier::Low);
    }
}
