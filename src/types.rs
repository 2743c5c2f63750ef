//! Common types and data structures

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};

/// The two views of the app
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Result,
}

/// Reachability of the backend as last observed
#[derive(Clone, Debug, Default, PartialEq)]
pub enum BackendStatus {
    #[default]
    Checking,
    Online { model_loaded: Option<bool> },
    Offline,
}

impl BackendStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BackendStatus::Checking => "Connecting...",
            BackendStatus::Online {
                model_loaded: Some(false),
            } => "Online, model not loaded",
            BackendStatus::Online { .. } => "Online",
            BackendStatus::Offline => "Offline",
        }
    }
}

/// Body of `GET /health`. Every field is optional; any JSON counts as healthy.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HealthStatus {
    pub status: Option<String>,
    pub timestamp: Option<String>,
    pub model_loaded: Option<bool>,
}

/// Body of `GET /sources`
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SourceCatalog {
    pub trusted_sources: Vec<String>,
    pub suspicious_sources: Vec<String>,
}

/// Request body of `POST /verify`
#[derive(Debug, Serialize)]
pub struct VerifyRequest<'a> {
    pub text: &'a str,
}

/// Body of `POST /verify`: a `success` flag wrapping the result fields.
#[derive(Debug, Deserialize)]
pub struct VerifyEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(flatten)]
    pub body: serde_json::Map<String, serde_json::Value>,
}

impl VerifyEnvelope {
    /// Unwrap the envelope, turning `success: false` into `AnalysisFailed`.
    pub fn into_result(self) -> Result<VerificationResult> {
        if !self.success {
            return Err(AppError::analysis_failed(self.error));
        }
        serde_json::from_value(serde_json::Value::Object(self.body))
            .map_err(|e| AppError::AnalysisFailed(format!("Malformed analysis response: {}", e)))
    }
}

/// Error body of a non-2xx response
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    pub error: Option<String>,
}

/// One complete analysis as returned by the backend
#[derive(Clone, Debug, Deserialize)]
pub struct VerificationResult {
    #[serde(default)]
    pub input_text: String,
    pub final_verdict: FinalVerdict,
    pub sentiment_analysis: SentimentAnalysis,
    #[serde(default)]
    pub source_verification: Option<SourceVerification>,
    #[serde(default)]
    pub ml_prediction: Option<MlPrediction>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct FinalVerdict {
    pub is_fake: bool,
    pub confidence: f64,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SentimentAnalysis {
    #[serde(default)]
    pub sentiment: String,
    #[serde(default)]
    pub sentiment_score: f64,
    #[serde(default)]
    pub sensational_words: Option<Vec<String>>,
    #[serde(default)]
    pub factual_words: Option<Vec<String>>,
    #[serde(default)]
    pub sensational_score: Option<f64>,
    #[serde(default)]
    pub factual_score: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SourceVerification {
    #[serde(default)]
    pub trusted_sources: Option<Vec<SourceArticle>>,
    #[serde(default)]
    pub fact_checks: Option<Vec<FactCheck>>,
    #[serde(default)]
    pub contradictory_sources: Option<Vec<SourceArticle>>,
}

/// A news article matched against the trusted (or suspicious) domain lists
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SourceArticle {
    pub url: Option<String>,
    pub title: Option<String>,
    pub source: Option<String>,
    pub published: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct FactCheck {
    pub rating: Option<String>,
    pub text: Option<String>,
    pub publisher: Option<String>,
    pub claimant: Option<String>,
}

/// Raw classifier output, before sentiment and source adjustments
#[derive(Clone, Debug, Deserialize)]
pub struct MlPrediction {
    pub is_fake: bool,
    pub confidence: f64,
    #[serde(default)]
    pub fake_probability: Option<f64>,
    #[serde(default)]
    pub real_probability: Option<f64>,
}

/// Non-empty prefix of an optional list; `None` when absent or empty.
pub fn leading<T>(list: Option<&[T]>, max: usize) -> Option<&[T]> {
    match list {
        Some(items) if !items.is_empty() => Some(&items[..items.len().min(max)]),
        _ => None,
    }
}
