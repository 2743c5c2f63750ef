//! Result page view-model
//!
//! Everything the result page shows is computed here from a
//! [`VerificationResult`], so the egui code only paints strings and colors.
//! A new analysis always produces a whole new [`ResultView`].

use crate::constants::*;
use crate::types::{leading, FactCheck, SourceArticle, VerificationResult};
use crate::utils::format_published_date;
use tracing::warn;

const UNKNOWN: &str = "Unknown";

/// Which of the two verdict branches a result falls into
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Fake,
    Real,
}

impl Verdict {
    pub fn from_is_fake(is_fake: bool) -> Self {
        if is_fake {
            Verdict::Fake
        } else {
            Verdict::Real
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Verdict::Fake => "FAKE NEWS DETECTED",
            Verdict::Real => "REAL NEWS VERIFIED",
        }
    }

    pub fn badge(self) -> &'static str {
        match self {
            Verdict::Fake => "FAKE",
            Verdict::Real => "REAL",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Verdict::Fake => egui_phosphor::regular::WARNING,
            Verdict::Real => egui_phosphor::regular::CHECK_CIRCLE,
        }
    }
}

/// Confidence as received. The number is never altered; only the bar is clamped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Confidence(pub f64);

impl Confidence {
    pub fn text(self) -> String {
        format!("{}%", self.0)
    }

    pub fn in_range(self) -> bool {
        (0.0..=100.0).contains(&self.0)
    }

    /// Progress bar fill in [0, 1]
    pub fn bar_fraction(self) -> f32 {
        if self.0.is_nan() {
            return 0.0;
        }
        (self.0 / 100.0).clamp(0.0, 1.0) as f32
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SourceLine {
    pub title: String,
    pub url: Option<String>,
    pub source: String,
    pub published: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FactCheckLine {
    pub rating: String,
    pub text: String,
    pub publisher: String,
    pub claimant: Option<String>,
}

/// "Source Verification" card. Only built when there is something to show.
#[derive(Clone, Debug, PartialEq)]
pub struct SourcesBlock {
    pub trusted: Vec<SourceLine>,
    pub fact_checks: Vec<FactCheckLine>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MlBreakdown {
    pub verdict: Verdict,
    pub confidence: Confidence,
    pub fake_probability: Option<f64>,
    pub real_probability: Option<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultView {
    pub verdict: Verdict,
    pub preview: String,
    pub label: String,
    pub badge: String,
    pub confidence: Confidence,
    pub confidence_text: String,
    pub explanation: String,
    pub sentiment: String,
    pub sentiment_details: String,
    pub keywords: String,
    pub sentiment_score: String,
    /// Word-list scores, shown only when the backend sends them
    pub sensational_score: Option<String>,
    pub factual_score: Option<String>,
    pub sources: Option<SourcesBlock>,
    pub ml: Option<MlBreakdown>,
    pub contradictory_count: usize,
    pub analyzed_at: Option<String>,
}

impl ResultView {
    pub fn from_result(data: &VerificationResult) -> Self {
        let verdict = Verdict::from_is_fake(data.final_verdict.is_fake);
        let sentiment = &data.sentiment_analysis;
        let confidence = Confidence(data.final_verdict.confidence);

        if !confidence.in_range() {
            warn!(confidence = confidence.0, "Confidence outside 0-100, rendering as received");
        }

        let branch_words = match verdict {
            Verdict::Fake => sentiment.sensational_words.as_deref(),
            Verdict::Real => sentiment.factual_words.as_deref(),
        };

        let sentiment_details = match verdict {
            Verdict::Fake => format!(
                "⚠️ Suspicious: {}",
                joined_or(branch_words, MAX_SENTIMENT_WORDS, "emotional tone detected")
            ),
            Verdict::Real => format!(
                "✅ Factual: {}",
                joined_or(branch_words, MAX_SENTIMENT_WORDS, "neutral reporting style")
            ),
        };

        let keywords = match verdict {
            Verdict::Fake => joined_or(branch_words, MAX_KEYWORDS, "sensational language"),
            Verdict::Real => joined_or(branch_words, MAX_KEYWORDS, "factual terms"),
        };

        let contradictory_count = data
            .source_verification
            .as_ref()
            .and_then(|s| s.contradictory_sources.as_ref())
            .map_or(0, Vec::len);

        Self {
            verdict,
            preview: data.input_text.clone(),
            label: verdict.label().to_string(),
            badge: verdict.badge().to_string(),
            confidence,
            confidence_text: confidence.text(),
            explanation: data.final_verdict.explanation.clone(),
            sentiment: sentiment.sentiment.clone(),
            sentiment_details,
            keywords,
            sentiment_score: sentiment.sentiment_score.to_string(),
            sensational_score: sentiment.sensational_score.map(|v| v.to_string()),
            factual_score: sentiment.factual_score.map(|v| v.to_string()),
            sources: build_sources(data),
            ml: data.ml_prediction.as_ref().map(|ml| MlBreakdown {
                verdict: Verdict::from_is_fake(ml.is_fake),
                confidence: Confidence(ml.confidence),
                fake_probability: ml.fake_probability,
                real_probability: ml.real_probability,
            }),
            contradictory_count,
            analyzed_at: data.timestamp.as_deref().map(format_published_date),
        }
    }
}

fn joined_or(words: Option<&[String]>, max: usize, fallback: &str) -> String {
    match leading(words, max) {
        Some(words) => words.join(", "),
        None => fallback.to_string(),
    }
}

fn build_sources(data: &VerificationResult) -> Option<SourcesBlock> {
    let sv = data.source_verification.as_ref()?;
    let trusted = leading(sv.trusted_sources.as_deref(), MAX_TRUSTED_SOURCES);
    let checks = leading(sv.fact_checks.as_deref(), MAX_FACT_CHECKS);

    if trusted.is_none() && checks.is_none() {
        return None;
    }

    Some(SourcesBlock {
        trusted: trusted.unwrap_or_default().iter().map(source_line).collect(),
        fact_checks: checks.unwrap_or_default().iter().map(fact_check_line).collect(),
    })
}

fn source_line(article: &SourceArticle) -> SourceLine {
    SourceLine {
        title: article.title.clone().unwrap_or_else(|| "Untitled".to_string()),
        url: article.url.clone().filter(|u| !u.is_empty()),
        source: article.source.clone().unwrap_or_default(),
        published: article
            .published
            .as_deref()
            .map(format_published_date)
            .unwrap_or_else(|| "Unknown date".to_string()),
    }
}

fn fact_check_line(check: &FactCheck) -> FactCheckLine {
    let non_empty = |v: &Option<String>| v.clone().filter(|s| !s.is_empty());
    FactCheckLine {
        rating: non_empty(&check.rating).unwrap_or_else(|| UNKNOWN.to_string()),
        text: check.text.clone().unwrap_or_default(),
        publisher: non_empty(&check.publisher).unwrap_or_else(|| UNKNOWN.to_string()),
        claimant: non_empty(&check.claimant),
    }
}
