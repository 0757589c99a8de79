//! Common prefix length and ordinal comparison.

use core::cmp::Ordering;

use crate::comparer::Comparer;

/// Number of leading positions where `a` and `b` match; at most
/// `min(a.len(), b.len())`.
#[inline]
pub(crate) fn common_prefix_len<T, E>(a: &[T], b: &[T], eq: &E) -> usize
where
    E: Fn(&T, &T) -> bool,
{
    a.iter().zip(b).take_while(|&(x, y)| eq(x, y)).count()
}

/// Lexicographic order of `a` and `b` given the length of their common
/// prefix under the same order's notion of equality.
///
/// The first differing element decides; if one slice is a prefix of the
/// other, the shorter orders first.
#[inline]
pub(crate) fn compare_after_prefix<T, C>(a: &[T], b: &[T], prefix: usize, cmp: &C) -> Ordering
where
    C: Comparer<T> + ?Sized,
{
    match (a.get(prefix), b.get(prefix)) {
        (Some(x), Some(y)) => cmp.compare(x, y),
        _ => a.len().cmp(&b.len()),
    }
}
