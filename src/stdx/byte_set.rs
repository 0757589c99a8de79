//! Fixed 256-bit membership set over byte values.
//!
//! Backs byte-needle searches with many needles and [`SearchValues`] for
//! one-byte element types: membership is a shift and a mask instead of a
//! loop over the needle list.
//!
//! Stored as four `u64` words; bit `b % 64` of word `b / 64` is set when byte
//! `b` is a member. Every bit is addressable, so there is no padding to keep
//! clear.
//!
//! [`SearchValues`]: crate::SearchValues

const WORDS: usize = 4;

/// Set of byte values.
///
/// # Examples
/// ```
/// use span_scan::stdx::ByteSet;
///
/// let digits = ByteSet::from_bytes(b"0123456789");
/// assert!(digits.contains(b'7'));
/// assert!(!digits.contains(b'x'));
/// assert_eq!(digits.count(), 10);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ByteSet {
    words: [u64; WORDS],
}

impl ByteSet {
    /// Creates an empty set.
    #[inline]
    pub const fn new() -> Self {
        Self { words: [0; WORDS] }
    }

    /// Creates a set holding every byte in `bytes`; duplicates are ignored.
    #[inline]
    pub const fn from_bytes(bytes: &[u8]) -> Self {
        let mut set = Self::new();
        let mut i = 0;
        while i < bytes.len() {
            set.insert(bytes[i]);
            i += 1;
        }
        set
    }

    /// Adds `b`; returns `true` if it was not present.
    #[inline]
    pub const fn insert(&mut self, b: u8) -> bool {
        let (word_idx, mask) = Self::slot(b);
        let fresh = self.words[word_idx] & mask == 0;
        self.words[word_idx] |= mask;
        debug_assert!(self.contains(b));
        fresh
    }

    /// Removes `b`; returns `true` if it was present.
    #[inline]
    pub const fn remove(&mut self, b: u8) -> bool {
        let (word_idx, mask) = Self::slot(b);
        let present = self.words[word_idx] & mask != 0;
        self.words[word_idx] &= !mask;
        debug_assert!(!self.contains(b));
        present
    }

    /// Returns whether `b` is a member.
    #[inline(always)]
    pub const fn contains(&self, b: u8) -> bool {
        let (word_idx, mask) = Self::slot(b);
        self.words[word_idx] & mask != 0
    }

    /// Number of members; never exceeds 256.
    #[inline]
    pub const fn count(&self) -> usize {
        let mut total = 0;
        let mut i = 0;
        while i < WORDS {
            total += self.words[i].count_ones() as usize;
            i += 1;
        }
        total
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        let mut i = 0;
        while i < WORDS {
            if self.words[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Returns the complement: every byte not in `self`.
    #[inline]
    pub const fn complement(&self) -> Self {
        let mut words = self.words;
        let mut i = 0;
        while i < WORDS {
            words[i] = !words[i];
            i += 1;
        }
        Self { words }
    }

    /// Iterates members in ascending order over a snapshot of the set.
    #[inline]
    pub const fn iter(&self) -> ByteSetIter {
        ByteSetIter {
            words: self.words,
            word_idx: 0,
            current_word: self.words[0],
        }
    }

    #[inline(always)]
    const fn slot(b: u8) -> (usize, u64) {
        ((b / 64) as usize, 1u64 << (b % 64))
    }
}

impl FromIterator<u8> for ByteSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for b in iter {
            set.insert(b);
        }
        set
    }
}

/// Iterator over members in ascending order, produced by [`ByteSet::iter`].
#[derive(Clone, Copy, Debug)]
pub struct ByteSetIter {
    words: [u64; WORDS],
    word_idx: usize,
    current_word: u64,
}

impl Iterator for ByteSetIter {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<u8> {
        loop {
            if self.current_word != 0 {
                let bit_idx = self.current_word.trailing_zeros() as usize;
                // Clear the lowest set bit.
                self.current_word &= self.current_word.wrapping_sub(1);
                return Some((self.word_idx * 64 + bit_idx) as u8);
            }

            self.word_idx += 1;
            if self.word_idx >= WORDS {
                return None;
            }
            self.current_word = self.words[self.word_idx];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ByteSet;
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    const PROPTEST_CASES: u32 = 16;

    #[test]
    fn empty_and_full_extremes() {
        let empty = ByteSet::new();
        assert!(empty.is_empty());
        assert_eq!(empty.iter().next(), None);

        let full = empty.complement();
        assert_eq!(full.count(), 256);
        assert!(full.contains(0));
        assert!(full.contains(255));
        assert_eq!(full.iter().count(), 256);
        assert_eq!(full.iter().last(), Some(255));
    }

    #[test]
    fn insert_and_remove_report_changes() {
        let mut set = ByteSet::new();
        assert!(set.insert(b'a'));
        assert!(!set.insert(b'a'));
        assert!(set.remove(b'a'));
        assert!(!set.remove(b'a'));
        assert!(set.is_empty());
    }

    #[test]
    fn word_boundaries() {
        let set = ByteSet::from_bytes(&[63, 64, 127, 128, 191, 192]);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![63, 64, 127, 128, 191, 192]
        );
        assert!(!set.contains(65));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(
            crate::test_utils::proptest_cases(PROPTEST_CASES)
        ))]

        #[test]
        fn matches_btreeset_model(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
            let set: ByteSet = bytes.iter().copied().collect();
            let model: BTreeSet<u8> = bytes.iter().copied().collect();

            prop_assert_eq!(set.count(), model.len());
            prop_assert_eq!(set.iter().collect::<Vec<_>>(), model.iter().copied().collect::<Vec<_>>());
            for b in 0..=255u8 {
                prop_assert_eq!(set.contains(b), model.contains(&b));
            }
        }

        #[test]
        fn complement_partitions_bytes(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
            let set = ByteSet::from_bytes(&bytes);
            let inv = set.complement();
            prop_assert_eq!(set.count() + inv.count(), 256);
            for b in 0..=255u8 {
                prop_assert_ne!(set.contains(b), inv.contains(b));
            }
        }
    }
}
