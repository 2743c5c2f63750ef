//! UI state that does not depend on egui
//!
//! `App` owns one `UiState` and mutates it only from the update loop. Network
//! outcomes are applied here, which keeps the page/loading/toast rules testable
//! without a window.

use super::analyze::validate_input;
use super::toast::{ToastIcon, ToastSlot};
use crate::constants::*;
use crate::error::AppError;
use crate::types::{BackendStatus, HealthStatus, Page, SourceCatalog, VerificationResult};
use crate::view_model::ResultView;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Default)]
pub struct UiState {
    pub page: Page,
    pub input: String,
    pub loading: bool,
    pub result: Option<ResultView>,
    pub toast: ToastSlot,
    pub dark_mode: bool,
    pub backend: BackendStatus,
    pub catalog: Option<SourceCatalog>,
    /// Set when the input should grab keyboard focus on the next frame
    pub focus_input: bool,
}

impl UiState {
    pub fn new(dark_mode: bool) -> Self {
        Self {
            dark_mode,
            ..Self::default()
        }
    }

    pub fn show_page(&mut self, page: Page) {
        self.page = page;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Icon and text of the analyze button for the current loading state
    pub fn analyze_button(&self) -> (&'static str, &'static str) {
        if self.loading {
            (egui_phosphor::regular::SPINNER, "Analyzing...")
        } else {
            (egui_phosphor::regular::MAGNIFYING_GLASS, "Analyze Now")
        }
    }

    /// Validate the input and enter the loading state.
    /// Returns the text to submit, or `None` if nothing should be sent.
    pub fn begin_analysis(&mut self) -> Option<String> {
        if self.loading {
            return None;
        }
        match validate_input(&self.input) {
            Ok(text) => {
                self.set_loading(true);
                Some(text)
            }
            Err(rejection) => {
                let (message, icon) = rejection.toast();
                self.toast.show_default(message, icon);
                self.focus_input = rejection.wants_focus();
                None
            }
        }
    }

    /// Apply the outcome of an analysis. Always leaves the loading state.
    /// Returns true when the backend answered and the source catalog is still missing.
    pub fn finish_analysis(&mut self, outcome: Result<VerificationResult, AppError>) -> bool {
        self.set_loading(false);
        match outcome {
            Ok(result) => {
                if !matches!(self.backend, BackendStatus::Online { .. }) {
                    self.backend = BackendStatus::Online { model_loaded: None };
                }
                self.result = Some(ResultView::from_result(&result));
                self.show_page(Page::Result);
                self.toast.show_default("Analysis complete!", ToastIcon::Check);
                return self.catalog.is_none();
            }
            Err(AppError::BackendUnreachable(reason)) => {
                warn!(reason = %reason, "Analysis aborted, backend unreachable");
                self.backend = BackendStatus::Offline;
                self.toast.show(
                    "Cannot connect to server. Please ensure backend is running.",
                    ToastIcon::Warning,
                    Duration::from_millis(TOAST_LONG_MS),
                );
            }
            Err(AppError::AnalysisFailed(message)) => {
                warn!(error = %message, "Analysis failed");
                let message = if message.trim().is_empty() {
                    "Analysis failed. Please try again.".to_string()
                } else {
                    message
                };
                self.toast.show_default(message, ToastIcon::Warning);
            }
            Err(AppError::Client(reason)) => {
                warn!(reason = %reason, "HTTP client unusable");
                self.toast
                    .show_default("Analysis failed. Please try again.", ToastIcon::Warning);
            }
        }
        false
    }

    /// Startup probe: only affects messaging, never blocks input.
    pub fn record_startup_health(&mut self, outcome: Result<HealthStatus, AppError>) {
        match outcome {
            Ok(health) => {
                info!(
                    status = ?health.status,
                    model_loaded = ?health.model_loaded,
                    server_time = ?health.timestamp,
                    "Backend connected"
                );
                self.backend = BackendStatus::Online {
                    model_loaded: health.model_loaded,
                };
                self.toast.show(
                    "Connected to FactScope server",
                    ToastIcon::Check,
                    Duration::from_millis(TOAST_CONNECTED_MS),
                );
            }
            Err(e) => {
                warn!(error = %e, "Backend not connected");
                self.backend = BackendStatus::Offline;
                self.toast.show(
                    "Running in offline mode. Some features may be limited.",
                    ToastIcon::Info,
                    Duration::from_millis(TOAST_LONG_MS),
                );
            }
        }
    }

    pub fn go_back(&mut self) {
        self.show_page(Page::Home);
    }

    pub fn analyze_another(&mut self) {
        self.input.clear();
        self.focus_input = true;
        self.show_page(Page::Home);
    }

    /// Flip the theme. Returns the new value.
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }

    pub fn dark_toggle_icon(&self) -> &'static str {
        if self.dark_mode {
            egui_phosphor::regular::SUN
        } else {
            egui_phosphor::regular::MOON
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::analyze::enter_submits;
    use crate::types::VerifyEnvelope;
    use serde_json::json;

    fn sample(is_fake: bool, sources: serde_json::Value) -> VerificationResult {
        serde_json::from_value::<VerifyEnvelope>(json!({
            "success": true,
            "input_text": "BREAKING: miracle cure found",
            "final_verdict": { "is_fake": is_fake, "confidence": 93.1, "explanation": "Sensational" },
            "sentiment_analysis": {
                "sentiment": "Negative (Sensational)",
                "sentiment_score": -0.8,
                "sensational_words": ["breaking", "miracle", "cure"]
            },
            "source_verification": sources
        }))
        .unwrap()
        .into_result()
        .unwrap()
    }

    fn toast_text(state: &UiState) -> Option<&str> {
        state.toast.current().map(|t| t.message.as_str())
    }

    #[test]
    fn empty_input_is_rejected_and_focused() {
        let mut state = UiState::new(false);
        state.input = "   ".into();
        assert_eq!(state.begin_analysis(), None);
        assert!(!state.loading);
        assert!(state.focus_input);
        assert_eq!(toast_text(&state), Some("Please enter news content to analyze"));
    }

    #[test]
    fn short_input_never_starts_a_request() {
        let mut state = UiState::new(false);
        state.input = "  too short ".into();
        assert_eq!(state.begin_analysis(), None);
        assert!(!state.loading);
        assert_eq!(
            toast_text(&state),
            Some("Please enter more text for accurate analysis")
        );
    }

    #[test]
    fn valid_input_enters_loading_with_trimmed_text() {
        let mut state = UiState::new(false);
        state.input = "  Scientists discover new species  ".into();
        assert_eq!(
            state.begin_analysis().as_deref(),
            Some("Scientists discover new species")
        );
        assert!(state.loading);
        assert_eq!(state.analyze_button().1, "Analyzing...");
    }

    #[test]
    fn second_click_while_loading_is_ignored() {
        let mut state = UiState::new(false);
        state.input = "Scientists discover new species".into();
        assert!(state.begin_analysis().is_some());
        assert!(state.begin_analysis().is_none());
        assert!(state.loading);
    }

    #[test]
    fn success_shows_result_page() {
        let mut state = UiState::new(false);
        state.set_loading(true);
        state.finish_analysis(Ok(sample(true, json!(null))));
        assert!(!state.loading);
        assert_eq!(state.page, Page::Result);
        assert_eq!(state.result.as_ref().unwrap().label, "FAKE NEWS DETECTED");
        assert_eq!(toast_text(&state), Some("Analysis complete!"));
        assert_eq!(state.analyze_button().1, "Analyze Now");
    }

    #[test]
    fn server_error_message_is_shown_verbatim() {
        let mut state = UiState::new(false);
        state.set_loading(true);
        state.finish_analysis(Err(AppError::AnalysisFailed("model unavailable".into())));
        assert!(!state.loading);
        assert_eq!(state.page, Page::Home);
        assert_eq!(toast_text(&state), Some("model unavailable"));
    }

    #[test]
    fn unreachable_backend_gets_specific_message() {
        let mut state = UiState::new(false);
        state.set_loading(true);
        state.finish_analysis(Err(AppError::BackendUnreachable("connection refused".into())));
        assert!(!state.loading);
        assert_eq!(state.backend, BackendStatus::Offline);
        let toast = state.toast.current().unwrap();
        assert_eq!(
            toast.message,
            "Cannot connect to server. Please ensure backend is running."
        );
        assert_eq!(toast.duration, Duration::from_millis(4000));
    }

    #[test]
    fn empty_failure_message_uses_generic_text() {
        let mut state = UiState::new(false);
        state.finish_analysis(Err(AppError::AnalysisFailed(String::new())));
        assert_eq!(toast_text(&state), Some("Analysis failed. Please try again."));
    }

    #[test]
    fn failure_after_a_result_keeps_previous_result_off_screen() {
        let mut state = UiState::new(false);
        state.finish_analysis(Ok(sample(false, json!(null))));
        state.analyze_another();
        state.finish_analysis(Err(AppError::AnalysisFailed("model unavailable".into())));
        assert_eq!(state.page, Page::Home);
    }

    #[test]
    fn rerender_leaves_exactly_one_sources_block() {
        let mut state = UiState::new(false);
        state.finish_analysis(Ok(sample(
            true,
            json!({ "trusted_sources": [{ "title": "First", "url": "https://bbc.com/1" }] }),
        )));
        state.finish_analysis(Ok(sample(
            true,
            json!({ "fact_checks": [{ "text": "Second", "rating": "False" }] }),
        )));
        let sources = state.result.as_ref().unwrap().sources.as_ref().unwrap();
        assert!(sources.trusted.is_empty());
        assert_eq!(sources.fact_checks.len(), 1);
        assert_eq!(sources.fact_checks[0].text, "Second");

        state.finish_analysis(Ok(sample(true, json!(null))));
        assert!(state.result.as_ref().unwrap().sources.is_none());
    }

    #[test]
    fn success_after_offline_start_asks_for_catalog() {
        let mut state = UiState::new(false);
        state.record_startup_health(Err(AppError::BackendUnreachable("refused".into())));
        assert!(state.finish_analysis(Ok(sample(false, json!(null)))));
        assert_eq!(state.backend, BackendStatus::Online { model_loaded: None });

        state.catalog = Some(SourceCatalog::default());
        assert!(!state.finish_analysis(Ok(sample(false, json!(null)))));
    }

    #[test]
    fn failures_never_ask_for_catalog() {
        let mut state = UiState::new(false);
        assert!(!state.finish_analysis(Err(AppError::AnalysisFailed("model unavailable".into()))));
        assert!(!state.finish_analysis(Err(AppError::BackendUnreachable("refused".into()))));
    }

    #[test]
    fn client_error_uses_generic_text() {
        let mut state = UiState::new(false);
        state.set_loading(true);
        state.finish_analysis(Err(AppError::Client("tls backend missing".into())));
        assert!(!state.loading);
        assert_eq!(toast_text(&state), Some("Analysis failed. Please try again."));
        assert_eq!(state.backend, BackendStatus::Checking);
    }

    #[test]
    fn enter_while_loading_starts_nothing() {
        let mut state = UiState::new(false);
        state.input = "Scientists discover new species".into();
        assert!(enter_submits(true, false, true));
        assert!(state.begin_analysis().is_some());
        assert!(enter_submits(true, false, true));
        assert!(state.begin_analysis().is_none());
        assert!(state.loading);
    }

    #[test]
    fn navigation_between_pages() {
        let mut state = UiState::new(false);
        state.finish_analysis(Ok(sample(false, json!(null))));
        state.go_back();
        assert_eq!(state.page, Page::Home);

        state.show_page(Page::Result);
        state.input = "old text that was analyzed".into();
        state.analyze_another();
        assert_eq!(state.page, Page::Home);
        assert!(state.input.is_empty());
        assert!(state.focus_input);
    }

    #[test]
    fn startup_health_sets_status_and_toast() {
        let mut state = UiState::new(false);
        state.record_startup_health(Ok(HealthStatus {
            model_loaded: Some(true),
            ..HealthStatus::default()
        }));
        assert_eq!(
            state.backend,
            BackendStatus::Online {
                model_loaded: Some(true)
            }
        );
        assert_eq!(toast_text(&state), Some("Connected to FactScope server"));

        state.record_startup_health(Err(AppError::BackendUnreachable("refused".into())));
        assert_eq!(state.backend, BackendStatus::Offline);
        assert_eq!(
            toast_text(&state),
            Some("Running in offline mode. Some features may be limited.")
        );
    }

    #[test]
    fn dark_mode_toggle_swaps_icon() {
        let mut state = UiState::new(false);
        assert_eq!(state.dark_toggle_icon(), egui_phosphor::regular::MOON);
        assert!(state.toggle_dark_mode());
        assert_eq!(state.dark_toggle_icon(), egui_phosphor::regular::SUN);
    }
}
