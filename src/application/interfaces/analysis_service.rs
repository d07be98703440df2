use async_trait::async_trait;

use crate::domain::{AnalysisReport, DomainError, ProductProfile};

/// An interface for submitting a product profile to an analysis collaborator
/// and receiving its markdown report.
///
/// Implementors encapsulate transport, serialization, and service-specific
/// details. Consumers (e.g. [`crate::application::AnalyzeProductUseCase`])
/// remain decoupled from any particular backend or HTTP client library.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Submit `profile` and return the resulting report.
    ///
    /// A single best-effort call: implementors do not retry, and any
    /// transport or service failure surfaces as a [`DomainError`].
    async fn analyze(&self, profile: &ProductProfile) -> Result<AnalysisReport, DomainError>;
}
