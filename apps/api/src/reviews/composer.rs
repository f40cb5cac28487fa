//! Composer — decides which slots appear, in which order, and renders them.
//!
//! Slot order is fixed: opening, staff mention, service description, timeliness,
//! highlight, recommendation, return intent, the reviewer's comments, closing.
//! Optional slots appear only when the matching fact is present or true.

use crate::reviews::models::{
    BusinessFacts, ComposedReview, Fragment, FragmentSource, PhraseSlot, ReviewError,
    ReviewRequest, Tone,
};
use crate::reviews::selector::{offsets, pick_slot};

/// Below this many fragments ahead of the closing, an extra detail is added.
const MIN_BODY_FRAGMENTS: usize = 3;

/// Builds the draft review for `request` using `seed` for every slot choice.
pub fn compose(request: &ReviewRequest, seed: u64) -> Result<ComposedReview, ReviewError> {
    request.validate()?;

    let facts = &request.facts;
    let tone = request.tone;
    let mut body: Vec<Fragment> = Vec::new();

    body.push(slot_fragment(PhraseSlot::Opening, tone, seed, offsets::OPENING, facts)?);

    if has_text(&facts.staff_member) {
        body.push(slot_fragment(
            PhraseSlot::StaffMention,
            tone,
            seed,
            offsets::STAFF_MENTION,
            facts,
        )?);
    }

    body.push(slot_fragment(
        PhraseSlot::ServiceDescription,
        tone,
        seed,
        offsets::SERVICE_DESCRIPTION,
        facts,
    )?);

    if request.variant.supports_timeliness() && facts.was_service_timely {
        body.push(slot_fragment(
            PhraseSlot::Timeliness,
            tone,
            seed,
            offsets::TIMELINESS,
            facts,
        )?);
    }

    if has_text(&facts.service_highlight) {
        body.push(slot_fragment(
            PhraseSlot::Highlight,
            tone,
            seed,
            offsets::HIGHLIGHT,
            facts,
        )?);
    }

    if facts.would_recommend {
        body.push(slot_fragment(
            PhraseSlot::Recommendation,
            tone,
            seed,
            offsets::RECOMMENDATION,
            facts,
        )?);
    }

    if facts.would_visit_again {
        body.push(slot_fragment(
            PhraseSlot::ReturnIntent,
            tone,
            seed,
            offsets::RETURN_INTENT,
            facts,
        )?);
    }

    // Outer whitespace only; the reviewer's wording is never rewritten.
    if has_text(&facts.additional_comments) {
        body.push(Fragment {
            source: FragmentSource::Comments,
            text: facts.additional_comments.trim().to_string(),
        });
    }

    if body.len() < MIN_BODY_FRAGMENTS {
        body.push(slot_fragment(
            PhraseSlot::ExtraDetail,
            tone,
            seed,
            offsets::PADDING_DETAIL,
            facts,
        )?);
    }

    body.push(slot_fragment(PhraseSlot::Closing, tone, seed, offsets::CLOSING, facts)?);

    Ok(ComposedReview::from_fragments(body))
}

/// Picks a template for `slot` and fills in its placeholders.
pub fn slot_fragment(
    slot: PhraseSlot,
    tone: Tone,
    seed: u64,
    offset: u64,
    facts: &BusinessFacts,
) -> Result<Fragment, ReviewError> {
    let template = pick_slot(slot, tone, seed, offset)?;
    Ok(Fragment::from_slot(slot, render(template, facts)))
}

/// Substitutes every `{{placeholder}}` in a single left-to-right pass and
/// capitalises the first letter, since every template is a whole sentence.
///
/// Substituted values are never rescanned, so user text that happens to look
/// like a placeholder is left as typed. Unknown placeholders are kept verbatim.
pub fn render(template: &str, facts: &BusinessFacts) -> String {
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return capitalize_first(out);
        };
        let name = &after[..end];
        match placeholder_value(name, facts) {
            Some(value) => out.push_str(value),
            None => {
                out.push_str("{{");
                out.push_str(name);
                out.push_str("}}");
            }
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    capitalize_first(out)
}

fn capitalize_first(mut text: String) -> String {
    if let Some(first) = text.chars().next() {
        if first.is_lowercase() {
            let upper: String = first.to_uppercase().collect();
            text.replace_range(..first.len_utf8(), &upper);
        }
    }
    text
}

fn placeholder_value<'a>(name: &str, facts: &'a BusinessFacts) -> Option<&'a str> {
    match name {
        "business" => Some(facts.business_name.trim()),
        "type" => Some(facts.business_type.trim()),
        "service" => Some(facts.service()),
        "staffMember" => Some(facts.staff_member.trim()),
        "highlight" => Some(facts.service_highlight.trim()),
        _ => None,
    }
}

fn has_text(value: &str) -> bool {
    !value.trim().is_empty()
}
