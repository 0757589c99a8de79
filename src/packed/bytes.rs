//! One-byte words: `memchr` for up to three needles, `memmem` for
//! subsequences, [`ByteSet`] for larger needle sets.

use memchr::memmem;

use super::PackedWord;
use crate::kernels::{find, search, Direction};
use crate::needles::Needles;
use crate::stdx::ByteSet;

/// Membership set for four or more byte needles.
#[inline]
fn needle_set(needles: Needles<'_, u8>) -> Option<ByteSet> {
    match needles {
        Needles::Four(a, b, c, d) => Some(ByteSet::from_bytes(&[*a, *b, *c, *d])),
        Needles::Many(values) => Some(ByteSet::from_bytes(values)),
        _ => None,
    }
}

impl PackedWord for u8 {
    #[inline]
    fn index_of(s: &[u8], value: u8, dir: Direction) -> Option<usize> {
        match dir {
            Direction::First => memchr::memchr(value, s),
            Direction::Last => memchr::memrchr(value, s),
        }
    }

    fn any(s: &[u8], needles: Needles<'_, u8>, dir: Direction) -> Option<usize> {
        match (needles, dir) {
            (Needles::Zero, _) => None,
            (Needles::One(&a), _) => Self::index_of(s, a, dir),
            (Needles::Two(&a, &b), Direction::First) => memchr::memchr2(a, b, s),
            (Needles::Two(&a, &b), Direction::Last) => memchr::memrchr2(a, b, s),
            (Needles::Three(&a, &b, &c), Direction::First) => memchr::memchr3(a, b, c, s),
            (Needles::Three(&a, &b, &c), Direction::Last) => memchr::memrchr3(a, b, c, s),
            (Needles::Four(..) | Needles::Many(_), _) => match needle_set(needles) {
                Some(set) => find(s, dir, |&x| set.contains(x)),
                None => None,
            },
        }
    }

    fn any_except(s: &[u8], needles: Needles<'_, u8>, dir: Direction) -> Option<usize> {
        match needle_set(needles) {
            Some(set) => find(s, dir, |&x| !set.contains(x)),
            None => search::any_except(s, needles, &crate::kernels::eq, dir),
        }
    }

    #[inline]
    fn index_of_seq(s: &[u8], needle: &[u8]) -> Option<usize> {
        if needle.is_empty() {
            return Some(0);
        }
        memmem::find(s, needle)
    }

    #[inline]
    fn last_index_of_seq(s: &[u8], needle: &[u8]) -> Option<usize> {
        if needle.is_empty() {
            return Some(s.len());
        }
        memmem::rfind(s, needle)
    }

    #[inline]
    fn count(s: &[u8], value: u8) -> usize {
        memchr::memchr_iter(value, s).count()
    }

    fn count_seq(s: &[u8], needle: &[u8]) -> usize {
        match needle {
            [] => 0,
            [value] => Self::count(s, *value),
            // `find_iter` reports non-overlapping matches.
            _ => memmem::find_iter(s, needle).count(),
        }
    }

    fn count_any(s: &[u8], needles: Needles<'_, u8>) -> usize {
        match needles {
            Needles::Zero => 0,
            Needles::One(&a) => Self::count(s, a),
            Needles::Two(&a, &b) => memchr::memchr2_iter(a, b, s).count(),
            Needles::Three(&a, &b, &c) => memchr::memchr3_iter(a, b, c, s).count(),
            Needles::Four(..) | Needles::Many(_) => match needle_set(needles) {
                Some(set) => s.iter().filter(|&&x| set.contains(x)).count(),
                None => 0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::{count, eq, subsequence};
    use proptest::prelude::*;

    const PROPTEST_CASES: u32 = 64;

    fn small_bytes() -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(0u8..6, 0..64)
    }

    #[test]
    fn memchr_arities() {
        let s = b"hello, world";
        assert_eq!(u8::any(s, Needles::from_slice(b"o"), Direction::First), Some(4));
        assert_eq!(u8::any(s, Needles::from_slice(b"wl"), Direction::First), Some(2));
        assert_eq!(u8::any(s, Needles::from_slice(b"wl"), Direction::Last), Some(10));
        assert_eq!(u8::any(s, Needles::from_slice(b",dx"), Direction::Last), Some(11));
        assert_eq!(u8::any(s, Needles::from_slice(b"zyxw"), Direction::First), Some(7));
        assert_eq!(u8::any(s, Needles::Zero, Direction::First), None);
    }

    #[test]
    fn except_with_byte_set() {
        let s = b"aaabbbccc!";
        let n = Needles::from_slice(b"abcde");
        assert_eq!(u8::any_except(s, n, Direction::First), Some(9));
        assert_eq!(u8::any_except(b"abc", n, Direction::Last), None);
        assert_eq!(u8::any_except(s, Needles::Zero, Direction::Last), Some(9));
    }

    #[test]
    fn empty_subsequence_positions() {
        assert_eq!(u8::index_of_seq(b"abc", b""), Some(0));
        assert_eq!(u8::last_index_of_seq(b"abc", b""), Some(3));
        assert_eq!(u8::last_index_of_seq(b"", b""), Some(0));
        assert_eq!(u8::count_seq(b"abc", b""), 0);
    }

    #[test]
    fn subsequence_counts() {
        assert_eq!(u8::count_seq(b"banana", b"ana"), 1);
        assert_eq!(u8::count_seq(b"aaaaa", b"aa"), 2);
        assert_eq!(u8::count_any(b"banana", Needles::from_slice(b"nb")), 3);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(
            crate::test_utils::proptest_cases(PROPTEST_CASES)
        ))]

        #[test]
        fn byte_kernels_match_scalar(
            hay in small_bytes(),
            needles in prop::collection::vec(0u8..6, 0..7),
        ) {
            let n = Needles::from_slice(&needles);
            for dir in [Direction::First, Direction::Last] {
                prop_assert_eq!(u8::any(&hay, n, dir), search::any(&hay, n, &eq, dir));
                prop_assert_eq!(
                    u8::any_except(&hay, n, dir),
                    search::any_except(&hay, n, &eq, dir)
                );
            }
            prop_assert_eq!(u8::count_any(&hay, n), count::count_any(&hay, n, &eq));
        }

        #[test]
        fn memmem_matches_scalar(hay in small_bytes(), needle in prop::collection::vec(0u8..3, 0..4)) {
            prop_assert_eq!(
                u8::index_of_seq(&hay, &needle),
                subsequence::index_of_seq(&hay, &needle, &eq)
            );
            prop_assert_eq!(
                u8::last_index_of_seq(&hay, &needle),
                subsequence::last_index_of_seq(&hay, &needle, &eq)
            );
            prop_assert_eq!(u8::count_seq(&hay, &needle), count::count_seq(&hay, &needle, &eq));
        }
    }
}
