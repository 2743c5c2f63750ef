//! Analyze flow: input validation, then health check followed by verification

use super::toast::ToastIcon;
use super::App;
use crate::api::ApiClient;
use crate::constants::MIN_INPUT_CHARS;
use crate::error::{AppError, Result};
use crate::types::VerificationResult;
use crate::utils::char_len;
use eframe::egui;
use tracing::{error, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputRejection {
    Empty,
    TooShort,
}

impl InputRejection {
    pub fn toast(self) -> (&'static str, ToastIcon) {
        match self {
            InputRejection::Empty => ("Please enter news content to analyze", ToastIcon::Warning),
            InputRejection::TooShort => {
                ("Please enter more text for accurate analysis", ToastIcon::Info)
            }
        }
    }

    pub fn wants_focus(self) -> bool {
        matches!(self, InputRejection::Empty)
    }
}

/// Trimmed text if it is long enough to be worth a request
pub fn validate_input(raw: &str) -> std::result::Result<String, InputRejection> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(InputRejection::Empty);
    }
    if char_len(text) < MIN_INPUT_CHARS {
        return Err(InputRejection::TooShort);
    }
    Ok(text.to_string())
}

/// Enter in the focused input submits; Shift+Enter is left to the editor as a newline.
/// While a request is in flight the key is still taken and `begin_analysis` ignores it.
pub fn enter_submits(focused: bool, shift: bool, enter_pressed: bool) -> bool {
    focused && enter_pressed && !shift
}

/// Health check gates the verify call; a failed probe means no verify request.
pub async fn run_analysis(client: &ApiClient, text: &str) -> Result<VerificationResult> {
    client.check_health().await?;
    client.verify_news(text).await?.into_result()
}

impl App {
    /// Analyze button / Enter key handler
    pub fn start_analysis(&mut self, ctx: &egui::Context) {
        let Some(text) = self.state.begin_analysis() else {
            return;
        };

        info!(chars = text.chars().count(), "Starting analysis");
        let client = self.client.clone();
        let ctx = ctx.clone();
        self.pending_analysis = Some(self.runtime.spawn(async move {
            let outcome = run_analysis(&client, &text).await;
            ctx.request_repaint();
            outcome
        }));
    }

    /// Apply a finished analysis task. A panicked or cancelled task still ends the loading state.
    pub fn poll_analysis(&mut self, ctx: &egui::Context) {
        let Some(handle) = self.pending_analysis.take_if(|h| h.is_finished()) else {
            return;
        };

        let outcome = match self.runtime.block_on(handle) {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(error = %e, "Analysis task did not complete");
                Err(AppError::AnalysisFailed(String::new()))
            }
        };
        if outcome.is_ok() {
            info!("Analysis complete");
        }
        let wants_catalog = self.state.finish_analysis(outcome);
        if wants_catalog && self.pending_catalog.is_none() {
            self.fetch_catalog(ctx);
        }
    }
}
