//! Bitwise fast path: kernels over reinterpreted integer words.
//!
//! Dispatch reinterprets a bitwise element slice as `&[u8]`, `&[u16]`,
//! `&[u32]` or `&[u64]` and calls the matching [`PackedWord`] method. The
//! default methods run the general kernels with integer `==`, which the
//! compiler turns into tight (and usually vectorized) loops; `u8` overrides
//! most of them with `memchr`/`memmem`.
//!
//! Every method must return exactly what the general kernel would.

mod bytes;
mod prefix;

pub(crate) use prefix::common_prefix_bytes;

use crate::kernels::{self, count, search, subsequence, Direction};
use crate::needles::Needles;
use crate::util::reinterpret::Word;

pub(crate) trait PackedWord: Word {
    #[inline]
    fn index_of(s: &[Self], value: Self, dir: Direction) -> Option<usize> {
        search::index_of(s, &value, &kernels::eq, dir)
    }

    #[inline]
    fn any(s: &[Self], needles: Needles<'_, Self>, dir: Direction) -> Option<usize> {
        search::any(s, needles, &kernels::eq, dir)
    }

    #[inline]
    fn any_except(s: &[Self], needles: Needles<'_, Self>, dir: Direction) -> Option<usize> {
        search::any_except(s, needles, &kernels::eq, dir)
    }

    #[inline]
    fn index_of_seq(s: &[Self], needle: &[Self]) -> Option<usize> {
        subsequence::index_of_seq(s, needle, &kernels::eq)
    }

    #[inline]
    fn last_index_of_seq(s: &[Self], needle: &[Self]) -> Option<usize> {
        subsequence::last_index_of_seq(s, needle, &kernels::eq)
    }

    #[inline]
    fn count(s: &[Self], value: Self) -> usize {
        count::count(s, &value, &kernels::eq)
    }

    #[inline]
    fn count_seq(s: &[Self], needle: &[Self]) -> usize {
        count::count_seq(s, needle, &kernels::eq)
    }

    #[inline]
    fn count_any(s: &[Self], needles: Needles<'_, Self>) -> usize {
        count::count_any(s, needles, &kernels::eq)
    }

    /// Branch-free select per word.
    #[inline]
    fn replace(src: &[Self], dst: &mut [Self], old: Self, new: Self) {
        debug_assert!(dst.len() >= src.len());
        for (out, &x) in dst.iter_mut().zip(src) {
            *out = if x == old { new } else { x };
        }
    }

    #[inline]
    fn replace_in_place(buf: &mut [Self], old: Self, new: Self) {
        for x in buf.iter_mut() {
            if *x == old {
                *x = new;
            }
        }
    }
}

impl PackedWord for u16 {}
impl PackedWord for u32 {}
impl PackedWord for u64 {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_word_defaults() {
        let s = [7u32, 8, 9, 8];
        assert_eq!(u32::index_of(&s, 8, Direction::First), Some(1));
        assert_eq!(u32::index_of(&s, 8, Direction::Last), Some(3));
        assert_eq!(u32::count(&s, 8), 2);
        assert_eq!(u32::index_of_seq(&s, &[8, 9]), Some(1));
        assert_eq!(u32::last_index_of_seq(&s, &[8]), Some(3));

        let mut dst = [0u32; 4];
        u32::replace(&s, &mut dst, 8, 1);
        assert_eq!(dst, [7, 1, 9, 1]);
    }

    #[test]
    fn in_place_replace_words() {
        let mut buf = [u64::MAX, 0, u64::MAX];
        u64::replace_in_place(&mut buf, u64::MAX, 5);
        assert_eq!(buf, [5, 0, 5]);
    }
}
