//! HTTP client for the analysis backend
//!
//! Three endpoints under a configurable base URL:
//! - `GET  {base}/health`  reachability probe, any JSON body counts as healthy
//! - `POST {base}/verify`  `{ "text": ... }` -> [`VerifyEnvelope`]
//! - `GET  {base}/sources` trusted/suspicious domain lists
//!
//! No retries. No timeout unless one is configured.

use crate::error::{AppError, Result};
use crate::types::{ErrorBody, HealthStatus, SourceCatalog, VerifyEnvelope, VerifyRequest};
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| AppError::Client(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    pub async fn check_health(&self) -> Result<HealthStatus> {
        let url = self.url("health");
        debug!(url = %url, "Checking backend health");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::BackendUnreachable(e.to_string()))?;

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::BackendUnreachable(format!("invalid health response: {}", e)))?;

        Ok(serde_json::from_value(body).unwrap_or_default())
    }

    pub async fn verify_news(&self, text: &str) -> Result<VerifyEnvelope> {
        let url = self.url("verify");
        debug!(url = %url, chars = text.chars().count(), "Submitting text for verification");

        let response = self
            .http
            .post(&url)
            .json(&VerifyRequest { text })
            .send()
            .await
            .map_err(|e| AppError::BackendUnreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error);
            warn!(status = %status, error = ?message, "Verification request rejected");
            return Err(AppError::analysis_failed(message));
        }

        response
            .json::<VerifyEnvelope>()
            .await
            .map_err(|e| AppError::AnalysisFailed(format!("Malformed analysis response: {}", e)))
    }

    pub async fn source_catalog(&self) -> Result<SourceCatalog> {
        let url = self.url("sources");
        debug!(url = %url, "Fetching source catalog");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::BackendUnreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::AnalysisFailed(format!("HTTP {}", status)));
        }

        response
            .json::<SourceCatalog>()
            .await
            .map_err(|e| AppError::AnalysisFailed(format!("Malformed source catalog: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(&format!("{}/api/", server.uri()), None).expect("client")
    }

    #[tokio::test]
    async fn health_reads_optional_fields() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "healthy",
                "timestamp": "2024-05-01T12:00:00",
                "model_loaded": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let health = client_for(&server).await.check_health().await.unwrap();
        assert_eq!(health.status.as_deref(), Some("healthy"));
        assert_eq!(health.model_loaded, Some(true));
    }

    #[tokio::test]
    async fn health_accepts_any_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(ResponseTemplate::new(503).set_body_json(json!(["up"])))
            .mount(&server)
            .await;

        let health = client_for(&server).await.check_health().await.unwrap();
        assert_eq!(health, HealthStatus::default());
    }

    #[tokio::test]
    async fn health_with_non_json_body_is_unreachable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).await.check_health().await.unwrap_err();
        assert!(matches!(err, AppError::BackendUnreachable(_)));
    }

    #[tokio::test]
    async fn health_without_server_is_unreachable() {
        let client = ApiClient::new("http://127.0.0.1:9/api", None).unwrap();
        let err = client.check_health().await.unwrap_err();
        assert!(matches!(err, AppError::BackendUnreachable(_)));
    }

    #[tokio::test]
    async fn verify_posts_text_as_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/verify"))
            .and(body_json(json!({ "text": "The Federal Reserve raised rates" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "input_text": "The Federal Reserve raised rates",
                "final_verdict": { "is_fake": false, "confidence": 90, "explanation": "" },
                "sentiment_analysis": { "sentiment": "Positive (Factual)", "sentiment_score": 0.6 }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server)
            .await
            .verify_news("The Federal Reserve raised rates")
            .await
            .unwrap()
            .into_result()
            .unwrap();
        assert!(!result.final_verdict.is_fake);
        assert_eq!(result.sentiment_analysis.sentiment, "Positive (Factual)");
    }

    #[tokio::test]
    async fn verify_server_error_carries_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/verify"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({ "error": "model unavailable" })),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).await.verify_news("some news text").await.unwrap_err();
        assert_eq!(err, AppError::AnalysisFailed("model unavailable".into()));
    }

    #[tokio::test]
    async fn verify_error_without_body_is_generic() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/verify"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let err = client_for(&server).await.verify_news("some news text").await.unwrap_err();
        assert_eq!(err, AppError::AnalysisFailed("Analysis failed".into()));
    }

    #[tokio::test]
    async fn source_catalog_lists_domains() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/sources"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "trusted_sources": ["reuters.com", "apnews.com"],
                "suspicious_sources": ["infowars.com"]
            })))
            .mount(&server)
            .await;

        let catalog = client_for(&server).await.source_catalog().await.unwrap();
        assert_eq!(catalog.trusted_sources.len(), 2);
        assert_eq!(catalog.suspicious_sources, vec!["infowars.com".to_string()]);
    }
}
