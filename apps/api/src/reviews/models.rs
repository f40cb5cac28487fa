use serde::{Deserialize, Serialize};
use thiserror::Error;

// ────────────────────────────────────────────────────────────────────────────
// Request-side data models
// ────────────────────────────────────────────────────────────────────────────

/// Writing style that decides which phrase set each slot draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Enthusiastic,
    Professional,
    Casual,
}

impl Tone {
    pub const ALL: [Tone; 3] = [Tone::Enthusiastic, Tone::Professional, Tone::Casual];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Enthusiastic => "enthusiastic",
            Tone::Professional => "professional",
            Tone::Casual => "casual",
        }
    }
}

/// Requested size tier for the finished review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewLength {
    Short,
    Medium,
    Long,
}

impl ReviewLength {
    /// Human wording used when asking the AI backend for a given size.
    pub fn guidance(&self) -> &'static str {
        match self {
            ReviewLength::Short => "2-3 sentences",
            ReviewLength::Medium => "4-6 sentences",
            ReviewLength::Long => "7-10 sentences",
        }
    }
}

/// Which review-generator page the request came from.
///
/// Pages differ only in which optional form fields they expose:
/// `Timely` asks about punctuality, `Spotlight` insists on a highlight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewVariant {
    #[default]
    Standard,
    Timely,
    Spotlight,
}

impl ReviewVariant {
    pub fn supports_timeliness(&self) -> bool {
        matches!(self, ReviewVariant::Timely)
    }

    pub fn requires_highlight(&self) -> bool {
        matches!(self, ReviewVariant::Spotlight)
    }
}

/// Facts about the visit, supplied by the reviewer through the form.
/// Empty strings mean "not provided".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessFacts {
    pub business_name: String,
    pub business_type: String,
    pub service_used: String,
    pub staff_member: String,
    pub service_highlight: String,
    pub additional_comments: String,
    pub would_recommend: bool,
    pub would_visit_again: bool,
    pub was_service_timely: bool,
}

impl BusinessFacts {
    /// Value for `{{service}}`: the named service, or the business type when unset.
    pub fn service(&self) -> &str {
        let service = self.service_used.trim();
        if service.is_empty() {
            self.business_type.trim()
        } else {
            service
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    pub tone: Tone,
    pub length: ReviewLength,
    #[serde(default)]
    pub variant: ReviewVariant,
    pub facts: BusinessFacts,
}

impl ReviewRequest {
    /// Rejects requests the assembler cannot turn into a review.
    pub fn validate(&self) -> Result<(), ReviewError> {
        if self.facts.business_name.trim().is_empty() {
            return Err(ReviewError::InvalidRequest(
                "businessName cannot be empty".to_string(),
            ));
        }
        if self.facts.business_type.trim().is_empty() {
            return Err(ReviewError::InvalidRequest(
                "businessType cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Semantic category a fragment was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PhraseSlot {
    Opening,
    ServiceDescription,
    StaffMention,
    Timeliness,
    Highlight,
    Recommendation,
    ReturnIntent,
    Closing,
    ExtraDetail,
}

impl PhraseSlot {
    pub const ALL: [PhraseSlot; 9] = [
        PhraseSlot::Opening,
        PhraseSlot::ServiceDescription,
        PhraseSlot::StaffMention,
        PhraseSlot::Timeliness,
        PhraseSlot::Highlight,
        PhraseSlot::Recommendation,
        PhraseSlot::ReturnIntent,
        PhraseSlot::Closing,
        PhraseSlot::ExtraDetail,
    ];
}

/// Where a fragment's text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "slot")]
pub enum FragmentSource {
    Slot(PhraseSlot),
    /// The reviewer's own words, passed through untouched.
    Comments,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    pub source: FragmentSource,
    pub text: String,
}

impl Fragment {
    pub fn from_slot(slot: PhraseSlot, text: String) -> Self {
        Self {
            source: FragmentSource::Slot(slot),
            text,
        }
    }

    pub fn is_slot(&self, slot: PhraseSlot) -> bool {
        self.source == FragmentSource::Slot(slot)
    }
}

/// A finished (or draft) review. `text` is always the fragments joined by a space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComposedReview {
    pub text: String,
    #[serde(skip)]
    pub fragments: Vec<Fragment>,
}

impl ComposedReview {
    pub fn from_fragments(fragments: Vec<Fragment>) -> Self {
        let text = fragments
            .iter()
            .map(|f| f.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Self { text, fragments }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Errors
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    #[error("Invalid review request: {0}")]
    InvalidRequest(String),

    /// Bad phrase-bank data. Unreachable for any request the bank ships with.
    #[error("No phrase variants for slot {slot:?} in {tone:?} tone")]
    EmptyVariants { slot: PhraseSlot, tone: Tone },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facts(name: &str, kind: &str) -> BusinessFacts {
        BusinessFacts {
            business_name: name.to_string(),
            business_type: kind.to_string(),
            ..Default::default()
        }
    }

    fn request(facts: BusinessFacts) -> ReviewRequest {
        ReviewRequest {
            tone: Tone::Casual,
            length: ReviewLength::Medium,
            variant: ReviewVariant::Standard,
            facts,
        }
    }

    #[test]
    fn test_validate_rejects_blank_business_name() {
        let err = request(facts("   ", "Bakery")).validate().unwrap_err();
        assert!(matches!(err, ReviewError::InvalidRequest(ref m) if m.contains("businessName")));
    }

    #[test]
    fn test_validate_rejects_blank_business_type() {
        let err = request(facts("ASAP", "")).validate().unwrap_err();
        assert!(matches!(err, ReviewError::InvalidRequest(ref m) if m.contains("businessType")));
    }

    #[test]
    fn test_validate_accepts_minimal_request() {
        assert!(request(facts("ASAP", "Agency")).validate().is_ok());
    }

    #[test]
    fn test_service_falls_back_to_business_type() {
        let mut f = facts("ASAP", "Digital Marketing Agency");
        assert_eq!(f.service(), "Digital Marketing Agency");
        f.service_used = "SEO audit".to_string();
        assert_eq!(f.service(), "SEO audit");
    }

    #[test]
    fn test_request_deserializes_camel_case_with_defaults() {
        let json = serde_json::json!({
            "tone": "enthusiastic",
            "length": "long",
            "facts": {
                "businessName": "ASAP",
                "businessType": "Agency",
                "wouldRecommend": true
            }
        });
        let req: ReviewRequest = serde_json::from_value(json).unwrap();
        assert_eq!(req.tone, Tone::Enthusiastic);
        assert_eq!(req.length, ReviewLength::Long);
        assert_eq!(req.variant, ReviewVariant::Standard);
        assert!(req.facts.would_recommend);
        assert!(req.facts.staff_member.is_empty());
    }

    #[test]
    fn test_only_timely_variant_supports_timeliness() {
        assert!(ReviewVariant::Timely.supports_timeliness());
        assert!(!ReviewVariant::Standard.supports_timeliness());
        assert!(ReviewVariant::Spotlight.requires_highlight());
        assert!(!ReviewVariant::Timely.requires_highlight());
    }
}
