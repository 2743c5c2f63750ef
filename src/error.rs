//! Error taxonomy for backend communication

use thiserror::Error;

pub const GENERIC_ANALYSIS_ERROR: &str = "Analysis failed";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// Transport failure, or the health endpoint answered with something that is not JSON.
    #[error("Backend server not reachable: {0}")]
    BackendUnreachable(String),

    /// Carries the message the server provided (or a generic one).
    #[error("{0}")]
    AnalysisFailed(String),

    /// Local HTTP client setup (TLS backend, proxy config); the server was never contacted.
    #[error("HTTP client setup failed: {0}")]
    Client(String),
}

impl AppError {
    pub fn analysis_failed(message: Option<String>) -> Self {
        match message {
            Some(msg) if !msg.trim().is_empty() => AppError::AnalysisFailed(msg),
            _ => AppError::AnalysisFailed(GENERIC_ANALYSIS_ERROR.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_failed_keeps_server_message() {
        let err = AppError::analysis_failed(Some("model unavailable".into()));
        assert_eq!(err.to_string(), "model unavailable");
    }

    #[test]
    fn client_error_is_not_reported_as_unreachable() {
        let err = AppError::Client("no TLS backend".into());
        assert_eq!(err.to_string(), "HTTP client setup failed: no TLS backend");
        assert!(!matches!(err, AppError::BackendUnreachable(_)));
    }

    #[test]
    fn analysis_failed_falls_back_when_missing_or_blank() {
        assert_eq!(
            AppError::analysis_failed(None),
            AppError::AnalysisFailed("Analysis failed".into())
        );
        assert_eq!(
            AppError::analysis_failed(Some("  ".into())),
            AppError::AnalysisFailed("Analysis failed".into())
        );
    }
}
