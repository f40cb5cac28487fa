//! Selector — deterministic, seed-driven choice of one template per slot.

use crate::reviews::models::{PhraseSlot, ReviewError, Tone};
use crate::reviews::phrase_bank;

/// Fixed per-slot offsets. Distinct offsets keep slots decorrelated when only the seed varies.
pub mod offsets {
    pub const OPENING: u64 = 1;
    pub const STAFF_MENTION: u64 = 2;
    pub const SERVICE_DESCRIPTION: u64 = 3;
    pub const TIMELINESS: u64 = 4;
    pub const HIGHLIGHT: u64 = 5;
    pub const RECOMMENDATION: u64 = 6;
    pub const RETURN_INTENT: u64 = 7;
    pub const CLOSING: u64 = 8;
    pub const PADDING_DETAIL: u64 = 9;
    pub const LONG_DETAILS: [u64; 2] = [10, 11];
}

/// Returns `variants[(seed + offset) mod len]`.
///
/// The sum is reduced piecewise so any `u64` seed works without overflow.
pub fn pick<'a>(variants: &[&'a str], seed: u64, offset: u64) -> Option<&'a str> {
    if variants.is_empty() {
        return None;
    }
    let len = variants.len() as u64;
    let index = ((seed % len) + (offset % len)) % len;
    Some(variants[index as usize])
}

/// Picks a template for `slot` in `tone` straight from the phrase bank.
pub fn pick_slot(
    slot: PhraseSlot,
    tone: Tone,
    seed: u64,
    offset: u64,
) -> Result<&'static str, ReviewError> {
    pick(phrase_bank::variants(slot, tone), seed, offset)
        .ok_or(ReviewError::EmptyVariants { slot, tone })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABC: &[&str] = &["a", "b", "c"];

    #[test]
    fn test_pick_uses_seed_plus_offset_modulo_len() {
        assert_eq!(pick(ABC, 0, 0), Some("a"));
        assert_eq!(pick(ABC, 0, 1), Some("b"));
        assert_eq!(pick(ABC, 1, 1), Some("c"));
        assert_eq!(pick(ABC, 4821, 5), Some(ABC[(4821 + 5) % 3]));
    }

    #[test]
    fn test_pick_is_deterministic() {
        for seed in 0..50 {
            assert_eq!(pick(ABC, seed, 7), pick(ABC, seed, 7));
        }
    }

    #[test]
    fn test_pick_empty_returns_none() {
        assert_eq!(pick(&[], 42, 1), None);
    }

    #[test]
    fn test_pick_handles_max_seed_without_overflow() {
        let expected = ((u64::MAX as u128 + 2) % 3) as usize;
        assert_eq!(pick(ABC, u64::MAX, 2), Some(ABC[expected]));
    }

    #[test]
    fn test_different_offsets_decorrelate_choices() {
        // Same seed, adjacent offsets, must land on different elements.
        assert_ne!(pick(ABC, 10, offsets::OPENING), pick(ABC, 10, offsets::STAFF_MENTION));
    }

    #[test]
    fn test_long_detail_offsets_are_distinct_from_padding() {
        let [a, b] = offsets::LONG_DETAILS;
        assert_ne!(a, b);
        assert_ne!(a, offsets::PADDING_DETAIL);
        assert_ne!(b, offsets::PADDING_DETAIL);
    }

    #[test]
    fn test_pick_slot_never_fails_for_shipped_bank() {
        for slot in PhraseSlot::ALL {
            for tone in Tone::ALL {
                assert!(pick_slot(slot, tone, 1234, 1).is_ok(), "{slot:?}/{tone:?}");
            }
        }
    }

    #[test]
    fn test_seed_sweep_reaches_every_variant() {
        for slot in PhraseSlot::ALL {
            for tone in Tone::ALL {
                let bank = phrase_bank::variants(slot, tone);
                let mut seen = vec![false; bank.len()];
                for seed in 0..1000 {
                    let chosen = pick_slot(slot, tone, seed, 3).unwrap();
                    let idx = bank.iter().position(|t| *t == chosen).unwrap();
                    seen[idx] = true;
                }
                assert!(seen.iter().all(|s| *s), "{slot:?}/{tone:?} left a variant unused");
            }
        }
    }
}
