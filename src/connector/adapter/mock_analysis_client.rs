use async_trait::async_trait;
use tracing::debug;

use crate::application::AnalysisService;
use crate::domain::{AnalysisReport, DomainError, ProductProfile};

/// An [`AnalysisService`] that fabricates a deterministic markdown report
/// without any network access.
///
/// The report follows the same outline the real service produces — target
/// audience, strengths, weaknesses, recommendations, risks — so the whole
/// rendering path is exercised realistically in demos and tests.
pub struct MockAnalysisClient;

impl MockAnalysisClient {
    pub fn new() -> Self {
        Self
    }

    fn build_report(profile: &ProductProfile) -> String {
        let keywords: Vec<&str> = profile
            .keywords()
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .collect();

        let mut content = String::new();
        content.push_str(&format!("# Analysis: {}\n\n", profile.name()));
        content.push_str(&format!(
            "A quick assessment of **{}** in the *{}* category.\n\n",
            profile.name(),
            profile.category()
        ));

        content.push_str("## Target audience\n\n");
        content.push_str(&format!(
            "Shoppers browsing the {} segment, discovered through searches for:\n\n",
            profile.category()
        ));
        for keyword in &keywords {
            content.push_str(&format!("- `{keyword}`\n"));
        }
        content.push('\n');

        content.push_str("## Strengths\n\n");
        content.push_str(&format!(
            "- Clear positioning inside **{}**\n- Keyword coverage across {} search terms\n\n",
            profile.category(),
            keywords.len()
        ));

        content.push_str("## Weaknesses\n\n");
        content.push_str("- No differentiation signal beyond the listed keywords\n\n");

        content.push_str("## Recommendations\n\n");
        content.push_str(&format!(
            "1. Sharpen the title around `{}`\n2. Expand the keyword set beyond the current {}\n\n",
            keywords.first().copied().unwrap_or("the product name"),
            keywords.len()
        ));

        content.push_str("## Risks\n\n");
        content.push_str("- Crowded category; ranking depends on review velocity\n");

        content
    }
}

impl Default for MockAnalysisClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalysisService for MockAnalysisClient {
    async fn analyze(&self, profile: &ProductProfile) -> Result<AnalysisReport, DomainError> {
        let content = Self::build_report(profile);

        debug!(
            "Generated mock analysis for '{}' ({} chars)",
            profile.name(),
            content.len()
        );

        Ok(AnalysisReport::new(content, "assistant"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> ProductProfile {
        ProductProfile::validate("Trail Shoes", "Sportswear", "running, trail, waterproof")
            .expect("valid profile")
    }

    #[tokio::test]
    async fn test_mock_report_is_deterministic() {
        let service = MockAnalysisClient::new();

        let first = service.analyze(&profile()).await.expect("analysis");
        let second = service.analyze(&profile()).await.expect("analysis");

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_mock_report_mentions_product_and_keywords() {
        let service = MockAnalysisClient::new();

        let report = service.analyze(&profile()).await.expect("analysis");

        assert_eq!(report.role(), "assistant");
        assert!(report.content().contains("Trail Shoes"));
        assert!(report.content().contains("`running`"));
        assert!(report.content().contains("`waterproof`"));
    }

    #[tokio::test]
    async fn test_mock_report_has_all_sections() {
        let service = MockAnalysisClient::new();

        let report = service.analyze(&profile()).await.expect("analysis");

        for section in [
            "## Target audience",
            "## Strengths",
            "## Weaknesses",
            "## Recommendations",
            "## Risks",
        ] {
            assert!(
                report.content().contains(section),
                "missing section {section}"
            );
        }
    }
}
