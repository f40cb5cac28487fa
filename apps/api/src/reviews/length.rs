//! Length adjuster — trims or pads a composed draft toward the requested size tier.

use crate::reviews::composer::slot_fragment;
use crate::reviews::models::{
    ComposedReview, Fragment, PhraseSlot, ReviewError, ReviewLength, ReviewRequest, Tone,
};
use crate::reviews::selector::offsets;

/// Short reviews keep at most this many sentences.
pub const SHORT_MAX_SENTENCES: usize = 3;

/// Sentence separator used for the short-length cap.
const SEGMENT_SEPARATOR: &str = ". ";

/// Long reviews below this many characters get two extra details.
pub const LONG_MIN_CHARS: usize = 400;

/// Resizes `draft` for `length`. `medium` is a no-op.
pub fn adjust(
    draft: ComposedReview,
    length: ReviewLength,
    tone: Tone,
    request: &ReviewRequest,
    seed: u64,
) -> Result<ComposedReview, ReviewError> {
    match length {
        ReviewLength::Medium => Ok(draft),
        ReviewLength::Short => Ok(shorten(draft)),
        ReviewLength::Long => lengthen(draft, tone, request, seed),
    }
}

/// Keeps opening, highlight (or service description), and closing.
///
/// User text containing `". "` (a dotted name, "p.m.") can still leave more
/// than three segments; those drafts are cut down segment by segment.
fn shorten(draft: ComposedReview) -> ComposedReview {
    if sentence_count(&draft.text) <= SHORT_MAX_SENTENCES {
        return draft;
    }

    let find = |slot: PhraseSlot| draft.fragments.iter().find(|f| f.is_slot(slot)).cloned();

    let middle = find(PhraseSlot::Highlight).or_else(|| find(PhraseSlot::ServiceDescription));
    let kept: Vec<Fragment> = [find(PhraseSlot::Opening), middle, find(PhraseSlot::Closing)]
        .into_iter()
        .flatten()
        .collect();

    if kept.is_empty() {
        return draft;
    }

    let short = ComposedReview::from_fragments(kept);
    if short.text.split(SEGMENT_SEPARATOR).count() > SHORT_MAX_SENTENCES {
        keep_three_segments(&short)
    } else {
        short
    }
}

/// Keeps the first segment, the segment where the second fragment starts, and
/// the last segment, re-joined with `". "` and a trailing period.
fn keep_three_segments(review: &ComposedReview) -> ComposedReview {
    // Byte offset of each fragment in `text` (fragments are joined by one space).
    let fragment_starts: Vec<usize> = review
        .fragments
        .iter()
        .scan(0, |pos, f| {
            let start = *pos;
            *pos += f.text.len() + 1;
            Some(start)
        })
        .collect();

    let mut segments: Vec<(usize, &str)> = Vec::new();
    let mut pos = 0;
    for segment in review.text.split(SEGMENT_SEPARATOR) {
        segments.push((pos, segment));
        pos += segment.len() + SEGMENT_SEPARATOR.len();
    }

    let segment_at = |offset: usize| {
        segments
            .partition_point(|(start, _)| *start <= offset)
            .saturating_sub(1)
    };
    let last = segments.len() - 1;
    let middle = fragment_starts
        .get(1)
        .map_or(1.min(last), |&offset| segment_at(offset));

    let mut picks = vec![0, middle, last];
    picks.dedup();

    let fragments = picks
        .iter()
        .enumerate()
        .map(|(i, &idx)| {
            let (start, segment) = segments[idx];
            let owner = fragment_starts
                .partition_point(|s| *s <= start)
                .saturating_sub(1);
            let mut text = segment.trim().to_string();
            let is_last = i + 1 == picks.len();
            if !is_last || !text.ends_with(|c| matches!(c, '.' | '!' | '?')) {
                text.push('.');
            }
            Fragment {
                source: review.fragments[owner].source,
                text,
            }
        })
        .collect();

    ComposedReview::from_fragments(fragments)
}

/// Splices two distinct extra details in front of the closing.
fn lengthen(
    draft: ComposedReview,
    tone: Tone,
    request: &ReviewRequest,
    seed: u64,
) -> Result<ComposedReview, ReviewError> {
    if draft.text.chars().count() >= LONG_MIN_CHARS {
        return Ok(draft);
    }

    let mut extras = Vec::with_capacity(offsets::LONG_DETAILS.len());
    for offset in offsets::LONG_DETAILS {
        extras.push(slot_fragment(
            PhraseSlot::ExtraDetail,
            tone,
            seed,
            offset,
            &request.facts,
        )?);
    }

    let mut fragments = draft.fragments;
    let at = fragments
        .iter()
        .rposition(|f| f.is_slot(PhraseSlot::Closing))
        .unwrap_or(fragments.len());
    let tail = fragments.split_off(at);
    fragments.extend(extras);
    fragments.extend(tail);

    Ok(ComposedReview::from_fragments(fragments))
}

/// Counts sentence-like segments: text split after `.`, `!` or `?` followed by a space.
pub fn sentence_count(text: &str) -> usize {
    let text = text.trim();
    if text.is_empty() {
        return 0;
    }
    let breaks = text
        .as_bytes()
        .windows(2)
        .filter(|w| matches!(w[0], b'.' | b'!' | b'?') && w[1] == b' ')
        .count();
    breaks + 1
}
