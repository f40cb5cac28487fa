//! Axum route handlers for the Reviews API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::reviews::assembler::{generate, seed_from_clock};
use crate::reviews::links::write_review_url;
use crate::reviews::models::{Fragment, PhraseSlot, ReviewRequest, Tone};
use crate::reviews::phrase_bank::inventory;
use crate::reviews::writer::ReviewSource;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReviewBody {
    #[serde(flatten)]
    pub request: ReviewRequest,
    /// Fixes the phrase choices; derived from the clock when omitted.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReviewResponse {
    pub review_id: Uuid,
    pub text: String,
    pub source: ReviewSource,
    pub seed: u64,
    pub generated_at: DateTime<Utc>,
    pub review_url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewReviewResponse {
    pub text: String,
    pub seed: u64,
    pub fragments: Vec<Fragment>,
}

#[derive(Debug, Serialize)]
pub struct PhraseCount {
    pub slot: PhraseSlot,
    pub tone: Tone,
    pub count: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/reviews/generate
///
/// Writes a review with the configured writer (AI first, local fallback) and
/// returns it with the Google Maps link the page should open after copying.
pub async fn handle_generate_review(
    State(state): State<AppState>,
    Json(body): Json<GenerateReviewBody>,
) -> Result<Json<GenerateReviewResponse>, AppError> {
    check_variant_fields(&body.request)?;

    let seed = body.seed.unwrap_or_else(seed_from_clock);
    let written = state.writer.write(&body.request, seed).await?;

    let review_url = match state.config.google_place_id.as_deref() {
        Some(place_id) => match write_review_url(place_id) {
            Ok(url) => Some(url),
            Err(e) => {
                warn!("Could not build review link for place id {place_id:?}: {e}");
                None
            }
        },
        None => None,
    };

    info!(
        "Review generated via {} writer: source={:?}, seed={seed}",
        state.writer.backend(),
        written.source
    );

    Ok(Json(GenerateReviewResponse {
        review_id: Uuid::new_v4(),
        text: written.text,
        source: written.source,
        seed,
        generated_at: Utc::now(),
        review_url,
    }))
}

/// POST /api/v1/reviews/preview
///
/// Local assembler only. Never calls the AI backend.
pub async fn handle_preview_review(
    Json(body): Json<GenerateReviewBody>,
) -> Result<Json<PreviewReviewResponse>, AppError> {
    check_variant_fields(&body.request)?;

    let seed = body.seed.unwrap_or_else(seed_from_clock);
    let review = generate(&body.request, seed)?;

    Ok(Json(PreviewReviewResponse {
        text: review.text,
        seed,
        fragments: review.fragments,
    }))
}

/// GET /api/v1/reviews/phrases
///
/// Template counts per slot and tone.
pub async fn handle_phrase_inventory() -> Json<Vec<PhraseCount>> {
    Json(
        inventory()
            .into_iter()
            .map(|(slot, tone, count)| PhraseCount { slot, tone, count })
            .collect(),
    )
}

/// Page-specific required fields, on top of the assembler's own validation.
fn check_variant_fields(request: &ReviewRequest) -> Result<(), AppError> {
    if request.variant.requires_highlight() && request.facts.service_highlight.trim().is_empty() {
        return Err(AppError::Validation(
            "serviceHighlight is required for this review page".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reviews::models::{ReviewLength, ReviewVariant};

    #[test]
    fn test_generate_body_flattens_request_fields() {
        let json = serde_json::json!({
            "tone": "professional",
            "length": "short",
            "variant": "spotlight",
            "facts": {"businessName": "ASAP", "businessType": "Agency"},
            "seed": 4821
        });
        let body: GenerateReviewBody = serde_json::from_value(json).unwrap();
        assert_eq!(body.seed, Some(4821));
        assert_eq!(body.request.tone, Tone::Professional);
        assert_eq!(body.request.length, ReviewLength::Short);
        assert_eq!(body.request.variant, ReviewVariant::Spotlight);
    }

    #[test]
    fn test_spotlight_requires_highlight() {
        let json = serde_json::json!({
            "tone": "casual",
            "length": "medium",
            "variant": "spotlight",
            "facts": {"businessName": "ASAP", "businessType": "Agency"}
        });
        let body: GenerateReviewBody = serde_json::from_value(json).unwrap();
        assert!(body.seed.is_none());
        assert!(matches!(check_variant_fields(&body.request), Err(AppError::Validation(_))));
    }
}
