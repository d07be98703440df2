use async_trait::async_trait;
use tracing::{debug, warn};

use crate::application::AnalysisService;
use crate::domain::{AnalysisReport, DomainError, ProductProfile};

/// Default target: the analysis service running locally on its standard port.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const ANALYZE_PATH: &str = "/analyze";

/// HTTP adapter for the remote analysis service.
///
/// Implements [`AnalysisService`] over `POST /analyze`: the profile
/// serializes to the JSON body `{name, category, keywords}` and a 2xx reply
/// deserializes into [`AnalysisReport`]. Transport failures, non-2xx
/// statuses, and malformed bodies all map to [`DomainError::ServiceError`] —
/// the caller sees a single failure path, per the service contract.
///
/// A single best-effort request per call: no retry, no timeout beyond the
/// HTTP client's defaults, no cancellation.
///
/// **Base URL**: defaults to `http://localhost:8080`. Override via the
/// `ANALYZE_BASE_URL` environment variable or an explicit constructor
/// argument.
pub struct HttpAnalysisClient {
    client: reqwest::Client,
    /// Full endpoint URL (base + ANALYZE_PATH).
    url: String,
    base_url: String,
}

impl HttpAnalysisClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        let trimmed = base.trim_end_matches('/');
        let url = format!("{trimmed}{ANALYZE_PATH}");
        Self {
            client: reqwest::Client::new(),
            url,
            base_url: trimmed.to_string(),
        }
    }

    /// Convenience constructor that reads `ANALYZE_BASE_URL` from the
    /// environment, falling back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        let base =
            std::env::var("ANALYZE_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base)
    }

    /// The configured base URL (for logging purposes).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisClient {
    async fn analyze(&self, profile: &ProductProfile) -> Result<AnalysisReport, DomainError> {
        debug!("POST {} for product '{}'", self.url, profile.name());

        let response = self
            .client
            .post(&self.url)
            .json(profile)
            .send()
            .await
            .map_err(|e| DomainError::service(format!("request to analysis service failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let body = body.trim();
            warn!("Analysis service returned {status}: {body}");
            return Err(if body.is_empty() {
                DomainError::service(format!("analysis service returned {status}"))
            } else {
                DomainError::service(format!("analysis service returned {status}: {body}"))
            });
        }

        let report: AnalysisReport = response
            .json()
            .await
            .map_err(|e| DomainError::service(format!("failed to parse analysis response: {e}")))?;

        Ok(report)
    }
}
