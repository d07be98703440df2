use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use crate::application::AnalysisService;
use crate::domain::{AnalysisReport, DomainError, ProductProfile};

/// Orchestrates one product analysis round trip.
///
/// Validation has already happened at profile construction; this use case
/// forwards the profile to the [`AnalysisService`] port, times the call,
/// and hands the report back unchanged.
pub struct AnalyzeProductUseCase {
    service: Arc<dyn AnalysisService>,
}

impl AnalyzeProductUseCase {
    pub fn new(service: Arc<dyn AnalysisService>) -> Self {
        Self { service }
    }

    pub async fn execute(&self, profile: &ProductProfile) -> Result<AnalysisReport, DomainError> {
        info!(
            "Requesting analysis for '{}' in category '{}'",
            profile.name(),
            profile.category()
        );

        let start = Instant::now();
        let report = self.service.analyze(profile).await?;

        info!(
            "Analysis completed in {:.1?} ({} chars from {})",
            start.elapsed(),
            report.content().len(),
            report.role()
        );

        Ok(report)
    }
}
