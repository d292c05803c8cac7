//! Atomic membership bitmap used to count distinct labels.

use std::{
    ops::Range,
    sync::atomic::{AtomicU64, Ordering},
};

use crate::{Result, error::ComponentsError};

const WORD_BITS: usize = u64::BITS as usize;

pub(crate) struct AtomicBitmap {
    words: Vec<AtomicU64>,
}

impl AtomicBitmap {
    /// Allocates a cleared bitmap able to hold `bits` members.
    pub(crate) fn try_new(bits: usize) -> Result<Self> {
        let len = bits.div_ceil(WORD_BITS);
        let mut words = Vec::new();
        words
            .try_reserve_exact(len)
            .map_err(|_| ComponentsError::Allocation {
                buffer: "bitmap",
                len,
            })?;
        words.resize_with(len, AtomicU64::default);
        Ok(Self { words })
    }

    pub(crate) fn word_count(&self) -> usize {
        self.words.len()
    }

    pub(crate) fn insert(&self, bit: usize) {
        let mask = 1_u64 << (bit % WORD_BITS);
        self.words[bit / WORD_BITS].fetch_or(mask, Ordering::Relaxed);
    }

    /// Population count over the words in `words`.
    pub(crate) fn count_ones(&self, words: Range<usize>) -> usize {
        self.words[words]
            .iter()
            .map(|word| word.load(Ordering::Relaxed).count_ones() as usize)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_distinct_members() {
        let bitmap = AtomicBitmap::try_new(130).expect("small bitmap");
        assert_eq!(bitmap.word_count(), 3);
        for bit in [0, 0, 63, 64, 129, 64] {
            bitmap.insert(bit);
        }
        assert_eq!(bitmap.count_ones(0..bitmap.word_count()), 4);
        assert_eq!(bitmap.count_ones(1..2), 1);
    }

    #[test]
    fn empty_bitmap_has_no_words() {
        let bitmap = AtomicBitmap::try_new(0).expect("empty bitmap");
        assert_eq!(bitmap.word_count(), 0);
        assert_eq!(bitmap.count_ones(0..0), 0);
    }
}
