//! Local review assembler — compose then resize, no I/O.
//!
//! Used directly by the preview endpoint and as the fallback path when the AI
//! backend is unavailable.

use crate::reviews::composer::compose;
use crate::reviews::length::adjust;
use crate::reviews::models::{ComposedReview, ReviewError, ReviewRequest};

/// Seed derived from wall-clock milliseconds, kept in `0..10_000`.
pub fn seed_from_clock() -> u64 {
    chrono::Utc::now().timestamp_millis().rem_euclid(10_000) as u64
}

/// Composes a draft for `request` and adjusts it to the requested length.
pub fn generate(request: &ReviewRequest, seed: u64) -> Result<ComposedReview, ReviewError> {
    let draft = compose(request, seed)?;
    adjust(draft, request.length, request.tone, request, seed)
}
