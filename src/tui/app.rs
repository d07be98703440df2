use crate::domain::{AnalysisReport, ProductProfile};

use super::form::FormState;

/// Completion events delivered from the spawned analysis task back to the
/// UI loop.
pub enum UiEvent {
    ReportReady(AnalysisReport),
    AnalysisFailed(String),
}

/// Screen state: the form, the current report, the busy flag spanning one
/// outstanding request, and an optional modal alert.
#[derive(Default)]
pub struct AppState {
    pub form: FormState,
    report: Option<AnalysisReport>,
    busy: bool,
    alert: Option<String>,
    pub(crate) result_scroll: usize,
    result_max_scroll: usize,
    result_view_height: u16,
}

impl AppState {
    /// Validate the form and, when it passes and no request is outstanding,
    /// flip the busy flag and hand back the profile to submit.
    ///
    /// Returns `None` while a request is pending (the submit control is
    /// disabled) or when validation fails; in the latter case the field
    /// messages are stored on the form for the renderer.
    pub fn submit(&mut self) -> Option<ProductProfile> {
        if self.busy {
            return None;
        }
        let profile = self.form.try_profile()?;
        self.busy = true;
        Some(profile)
    }

    pub fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::ReportReady(report) => {
                self.busy = false;
                self.report = Some(report);
                self.result_scroll = 0;
            }
            UiEvent::AnalysisFailed(message) => {
                // The previously displayed report stays untouched.
                self.busy = false;
                self.alert = Some(message);
            }
        }
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        self.report.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub(crate) fn set_result_metrics(&mut self, total_lines: usize, view_height: u16) {
        let total_lines = total_lines.max(1);
        self.result_view_height = view_height;
        self.result_max_scroll = total_lines.saturating_sub(view_height as usize);
        if self.result_scroll > self.result_max_scroll {
            self.result_scroll = self.result_max_scroll;
        }
    }

    pub(crate) fn scroll_down(&mut self, lines: usize) {
        self.result_scroll = (self.result_scroll + lines).min(self.result_max_scroll);
    }

    pub(crate) fn scroll_up(&mut self, lines: usize) {
        self.result_scroll = self.result_scroll.saturating_sub(lines);
    }

    pub(crate) fn page_size(&self) -> usize {
        let height = self.result_view_height.max(1) as usize;
        height.saturating_sub(1).max(1)
    }
}
