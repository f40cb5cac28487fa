// Prompt constants for AI-written reviews.
// The local assembler is the fallback when this path fails.

use crate::reviews::models::ReviewRequest;

/// System prompt for review writing — plain text only.
pub const REVIEW_SYSTEM: &str = "You write short, natural-sounding customer reviews \
    for local businesses based on facts a real customer supplied. \
    Respond with the review text only. \
    Do NOT wrap it in quotes or markdown. \
    Do NOT add a title, star rating, or signature. \
    Do NOT invent facts that were not provided.";

/// Review prompt template.
/// Replace: {tone}, {length}, {business}, {business_type}, {service}, {details}
pub const REVIEW_PROMPT_TEMPLATE: &str = r#"Write a {tone} customer review of {business}, a {business_type}.

The customer used: {service}
Target length: {length}

Facts from the customer (use every one, add nothing else):
{details}

Write in first person, as the customer."#;

/// Fills the review template from the request facts.
pub fn build_review_prompt(request: &ReviewRequest) -> String {
    let facts = &request.facts;
    let mut details: Vec<String> = Vec::new();

    if !facts.staff_member.trim().is_empty() {
        details.push(format!("- Staff member who helped: {}", facts.staff_member.trim()));
    }
    if !facts.service_highlight.trim().is_empty() {
        details.push(format!("- What stood out: {}", facts.service_highlight.trim()));
    }
    if request.variant.supports_timeliness() {
        details.push(format!(
            "- Service was on time: {}",
            if facts.was_service_timely { "yes" } else { "no" }
        ));
    }
    details.push(format!(
        "- Would recommend: {}",
        if facts.would_recommend { "yes" } else { "no" }
    ));
    details.push(format!(
        "- Would return: {}",
        if facts.would_visit_again { "yes" } else { "no" }
    ));
    if !facts.additional_comments.trim().is_empty() {
        details.push(format!(
            "- Customer's own words (keep their meaning): {}",
            facts.additional_comments.trim()
        ));
    }

    let details = details.join("\n");
    fill_template(
        REVIEW_PROMPT_TEMPLATE,
        &[
            ("tone", request.tone.as_str()),
            ("length", request.length.guidance()),
            ("business", facts.business_name.trim()),
            ("business_type", facts.business_type.trim()),
            ("service", facts.service()),
            ("details", &details),
        ],
    )
}

/// Replaces `{name}` fields in one left-to-right pass.
///
/// Inserted values are never rescanned, so customer text containing `{business}`
/// or `{details}` reaches the model as typed. Unknown fields are kept verbatim.
fn fill_template(template: &str, fields: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 256);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let value = after.find('}').and_then(|end| {
            let name = &after[..end];
            fields
                .iter()
                .find(|(field, _)| *field == name)
                .map(|(_, value)| (*value, end))
        });
        match value {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reviews::models::{BusinessFacts, ReviewLength, ReviewVariant, Tone};

    fn request(variant: ReviewVariant) -> ReviewRequest {
        ReviewRequest {
            tone: Tone::Professional,
            length: ReviewLength::Short,
            variant,
            facts: BusinessFacts {
                business_name: "ASAP".to_string(),
                business_type: "Digital Marketing Agency".to_string(),
                staff_member: "Priya".to_string(),
                would_recommend: true,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_prompt_fills_every_template_field() {
        let prompt = build_review_prompt(&request(ReviewVariant::Standard));
        for field in ["{tone}", "{length}", "{business}", "{business_type}", "{service}", "{details}"] {
            assert!(!prompt.contains(field), "unfilled {field}");
        }
        assert!(prompt.contains("professional customer review of ASAP, a Digital Marketing Agency"));
        assert!(prompt.contains("2-3 sentences"));
        assert!(prompt.contains("Staff member who helped: Priya"));
        assert!(prompt.contains("Would recommend: yes"));
        assert!(prompt.contains("Would return: no"));
    }

    #[test]
    fn test_prompt_skips_absent_optional_facts() {
        let prompt = build_review_prompt(&request(ReviewVariant::Standard));
        assert!(!prompt.contains("What stood out"));
        assert!(!prompt.contains("Customer's own words"));
        assert!(!prompt.contains("on time"));
    }

    #[test]
    fn test_customer_text_with_field_names_is_not_expanded() {
        let mut req = request(ReviewVariant::Standard);
        req.facts.additional_comments = "I typed {business} literally".to_string();
        req.facts.service_used = "{details}".to_string();
        let prompt = build_review_prompt(&req);
        assert!(prompt.contains("Customer's own words (keep their meaning): I typed {business} literally"));
        assert!(prompt.contains("The customer used: {details}\n"));
        assert_eq!(prompt.matches("Would recommend: yes").count(), 1);
    }

    #[test]
    fn test_fill_template_keeps_unknown_and_unclosed_fields() {
        let out = fill_template("{a} {zzz} {a", &[("a", "x")]);
        assert_eq!(out, "x {zzz} {a");
    }

    #[test]
    fn test_timely_variant_asks_about_punctuality() {
        let prompt = build_review_prompt(&request(ReviewVariant::Timely));
        assert!(prompt.contains("Service was on time: no"));
    }
}
