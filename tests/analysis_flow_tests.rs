use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use marketlens::tui::{render_markdown, AppState, UiEvent};
use marketlens::{
    AnalysisReport, AnalysisService, AnalyzeProductUseCase, DomainError, MockAnalysisClient,
    ProductProfile, ProfileField,
};

/// Counts calls so the tests can prove how often the port was hit.
struct CountingService {
    calls: AtomicUsize,
    fail_with: Option<String>,
}

impl CountingService {
    fn succeeding() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_with: None,
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_with: Some(message.to_string()),
        }
    }
}

#[async_trait]
impl AnalysisService for CountingService {
    async fn analyze(&self, profile: &ProductProfile) -> Result<AnalysisReport, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.fail_with {
            Some(message) => Err(DomainError::service(message.clone())),
            None => Ok(AnalysisReport::new(
                format!("# {}\n\n**ready**", profile.name()),
                "assistant",
            )),
        }
    }
}

fn fill(app: &mut AppState) {
    app.form.name = "Trail Shoes".to_string();
    app.form.category = "Sportswear".to_string();
    app.form.keywords = "running, trail".to_string();
}

/// Run one submission round trip the way the event loop does: submit, call
/// the use case, feed the outcome back into the app state.
async fn submit_once(app: &mut AppState, use_case: &AnalyzeProductUseCase) {
    if let Some(profile) = app.submit() {
        let event = match use_case.execute(&profile).await {
            Ok(report) => UiEvent::ReportReady(report),
            Err(e) => UiEvent::AnalysisFailed(e.to_string()),
        };
        app.handle_event(event);
    }
}

#[tokio::test]
async fn mock_analysis_round_trip_produces_a_renderable_report() {
    let use_case = AnalyzeProductUseCase::new(Arc::new(MockAnalysisClient::new()));
    let mut app = AppState::default();
    fill(&mut app);

    submit_once(&mut app, &use_case).await;

    let report = app.report().expect("report after success");
    assert_eq!(report.role(), "assistant");
    assert!(report.content().contains("Trail Shoes"));

    let lines = render_markdown(report.content());
    assert!(!lines.is_empty());
}

#[tokio::test]
async fn empty_field_blocks_submission_and_never_hits_the_service() {
    let service = Arc::new(CountingService::succeeding());
    let use_case = AnalyzeProductUseCase::new(service.clone());
    let mut app = AppState::default();
    fill(&mut app);
    app.form.category = String::new();

    submit_once(&mut app, &use_case).await;

    assert_eq!(service.calls.load(Ordering::SeqCst), 0);
    assert!(app.report().is_none());
    assert_eq!(
        app.form.error_for(ProfileField::Category),
        Some("Enter a category")
    );
}

#[tokio::test]
async fn complete_form_hits_the_service_exactly_once() {
    let service = Arc::new(CountingService::succeeding());
    let use_case = AnalyzeProductUseCase::new(service.clone());
    let mut app = AppState::default();
    fill(&mut app);

    submit_once(&mut app, &use_case).await;

    assert_eq!(service.calls.load(Ordering::SeqCst), 1);
    assert!(app.report().is_some());
}

#[tokio::test]
async fn failed_analysis_keeps_previous_report_and_reports_the_error() {
    let ok = AnalyzeProductUseCase::new(Arc::new(CountingService::succeeding()));
    let bad = AnalyzeProductUseCase::new(Arc::new(CountingService::failing("Network Error")));
    let mut app = AppState::default();
    fill(&mut app);

    submit_once(&mut app, &ok).await;
    let first = app.report().expect("first report").content().to_string();

    submit_once(&mut app, &bad).await;

    assert_eq!(app.report().expect("report").content(), first);
    assert!(app.alert().expect("alert").contains("Network Error"));
    assert!(!app.is_busy());
}

#[tokio::test]
async fn second_success_replaces_the_first_report() {
    let use_case = AnalyzeProductUseCase::new(Arc::new(MockAnalysisClient::new()));
    let mut app = AppState::default();
    fill(&mut app);

    submit_once(&mut app, &use_case).await;

    app.form.name = "Road Shoes".to_string();
    submit_once(&mut app, &use_case).await;

    let report = app.report().expect("report");
    assert!(report.content().contains("Road Shoes"));
    assert!(!report.content().contains("Trail Shoes"));
}
