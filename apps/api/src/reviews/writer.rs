//! Review writers — pluggable backends that turn a request into finished text.
//!
//! `AppState` holds an `Arc<dyn ReviewWriter>`, chosen at startup: the assisted
//! writer when an API key is configured, the local writer otherwise.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::reviews::assembler;
use crate::reviews::models::ReviewRequest;
use crate::reviews::prompts::{build_review_prompt, REVIEW_SYSTEM};

/// Which path produced a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewSource {
    Ai,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenReview {
    pub text: String,
    pub source: ReviewSource,
}

#[async_trait]
pub trait ReviewWriter: Send + Sync {
    async fn write(&self, request: &ReviewRequest, seed: u64) -> Result<WrittenReview, AppError>;

    /// Short name for logs and the health endpoint.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// LocalReviewWriter — assembler only
// ────────────────────────────────────────────────────────────────────────────

/// Never leaves the process. Deterministic for a given seed.
pub struct LocalReviewWriter;

#[async_trait]
impl ReviewWriter for LocalReviewWriter {
    async fn write(&self, request: &ReviewRequest, seed: u64) -> Result<WrittenReview, AppError> {
        write_locally(request, seed)
    }

    fn backend(&self) -> &'static str {
        "local"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// AssistedReviewWriter — AI first, assembler on any failure
// ────────────────────────────────────────────────────────────────────────────

pub struct AssistedReviewWriter(pub LlmClient);

#[async_trait]
impl ReviewWriter for AssistedReviewWriter {
    async fn write(&self, request: &ReviewRequest, seed: u64) -> Result<WrittenReview, AppError> {
        request.validate()?;

        let prompt = build_review_prompt(request);
        match self.0.call_text(&prompt, REVIEW_SYSTEM).await {
            Ok(text) => {
                info!(
                    "AI review written for {:?} ({} chars)",
                    request.facts.business_name,
                    text.len()
                );
                Ok(WrittenReview {
                    text,
                    source: ReviewSource::Ai,
                })
            }
            Err(e) => {
                warn!("AI review failed, using local assembler (seed={seed}): {e}");
                write_locally(request, seed)
            }
        }
    }

    fn backend(&self) -> &'static str {
        "assisted"
    }
}

fn write_locally(request: &ReviewRequest, seed: u64) -> Result<WrittenReview, AppError> {
    let review = assembler::generate(request, seed)?;
    Ok(WrittenReview {
        text: review.text,
        source: ReviewSource::Fallback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reviews::models::{BusinessFacts, ReviewLength, ReviewVariant, Tone};

    fn request() -> ReviewRequest {
        ReviewRequest {
            tone: Tone::Casual,
            length: ReviewLength::Medium,
            variant: ReviewVariant::Standard,
            facts: BusinessFacts {
                business_name: "ASAP".to_string(),
                business_type: "Agency".to_string(),
                would_recommend: true,
                ..Default::default()
            },
        }
    }

    #[tokio::test]
    async fn test_local_writer_matches_assembler() {
        let req = request();
        let written = LocalReviewWriter.write(&req, 17).await.unwrap();
        assert_eq!(written.source, ReviewSource::Fallback);
        assert_eq!(written.text, assembler::generate(&req, 17).unwrap().text);
    }

    #[tokio::test]
    async fn test_local_writer_maps_invalid_request_to_validation() {
        let mut req = request();
        req.facts.business_name.clear();
        let err = LocalReviewWriter.write(&req, 1).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_assisted_writer_rejects_invalid_request_before_calling_out() {
        let llm = LlmClient::new("test-key".to_string()).unwrap();
        let mut req = request();
        req.facts.business_type = "  ".to_string();
        let err = AssistedReviewWriter(llm).write(&req, 1).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_assisted_writer_falls_back_when_ai_unreachable() {
        // Nothing listens on the discard port; every attempt fails to connect.
        let llm =
            LlmClient::with_endpoint("test-key".to_string(), "http://127.0.0.1:9/v1/messages".to_string())
                .unwrap();
        let req = request();
        let written = AssistedReviewWriter(llm).write(&req, 42).await.unwrap();
        assert_eq!(written.source, ReviewSource::Fallback);
        assert_eq!(written.text, assembler::generate(&req, 42).unwrap().text);
    }

    #[test]
    fn test_review_source_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ReviewSource::Ai).unwrap(), "\"ai\"");
        assert_eq!(serde_json::to_string(&ReviewSource::Fallback).unwrap(), "\"fallback\"");
    }
}
