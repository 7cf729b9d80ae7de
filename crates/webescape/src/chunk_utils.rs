//! Test helpers for splitting inputs into chunks.

use alloc::vec::Vec;

/// Split `payload` into approximately equal-sized chunks without breaking
/// UTF-8 code points.
///
/// # Panics
///
/// Panics if `parts` is zero.
#[must_use]
pub fn produce_chunks(payload: &str, parts: usize) -> Vec<&str> {
    assert!(parts > 0);
    let len = payload.len();
    let chunk_size = len.div_ceil(parts);
    let mut chunks = Vec::new();
    let mut start = 0;
    while start < len {
        let mut end = core::cmp::min(start + chunk_size, len);
        while end < len && !payload.is_char_boundary(end) {
            end += 1;
        }
        chunks.push(&payload[start..end]);
        start = end;
    }
    chunks
}

/// Every split of `units` into two halves, including the empty ones.
#[must_use]
pub fn all_splits(units: &[u16]) -> Vec<(&[u16], &[u16])> {
    (0..=units.len()).map(|i| units.split_at(i)).collect()
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::{all_splits, produce_chunks};

    #[test]
    fn chunks_respect_char_boundaries() {
        let payload = "f😊o bar";
        let chunks = produce_chunks(payload, 4);
        let mut idx = 0;
        for chunk in &chunks {
            idx += chunk.len();
            assert!(payload.is_char_boundary(idx));
        }
        assert_eq!(chunks.concat(), payload);
    }

    #[test]
    fn splits_cover_both_extremes() {
        let units = vec![1u16, 2, 3];
        let splits = all_splits(&units);
        assert_eq!(splits.len(), 4);
        assert!(splits[0].0.is_empty());
        assert!(splits[3].1.is_empty());
    }
}
