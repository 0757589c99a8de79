//! Subsequence search: scan for the needle head, then verify the tail.
//!
//! Worst case is O(n * m). Empty needles match at the start (forward) or at
//! `s.len()` (backward), including against an empty haystack.

use super::{find, Direction};

/// `true` if the slices have equal length and match pairwise.
#[inline]
pub(crate) fn sequence_equal<T, E>(a: &[T], b: &[T], eq: &E) -> bool
where
    E: Fn(&T, &T) -> bool,
{
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| eq(x, y))
}

/// First index at which `needle` occurs in `s`.
pub(crate) fn index_of_seq<T, E>(s: &[T], needle: &[T], eq: &E) -> Option<usize>
where
    E: Fn(&T, &T) -> bool,
{
    let Some((head, tail)) = needle.split_first() else {
        return Some(0);
    };
    if tail.is_empty() {
        return find(s, Direction::First, |x| eq(x, head));
    }

    // Candidate starts are `0..starts_end`; later starts leave no room for the tail.
    let starts_end = s.len().checked_sub(tail.len())?;
    let mut index = 0;
    while index < starts_end {
        let relative = find(&s[index..starts_end], Direction::First, |x| eq(x, head))?;
        index += relative;
        let tail_start = index + 1;
        if sequence_equal(&s[tail_start..tail_start + tail.len()], tail, eq) {
            return Some(index);
        }
        index += 1;
    }
    None
}

/// Last index at which `needle` occurs in `s`.
pub(crate) fn last_index_of_seq<T, E>(s: &[T], needle: &[T], eq: &E) -> Option<usize>
where
    E: Fn(&T, &T) -> bool,
{
    let Some((head, tail)) = needle.split_first() else {
        return Some(s.len());
    };
    if tail.is_empty() {
        return find(s, Direction::Last, |x| eq(x, head));
    }

    let mut starts_end = s.len().checked_sub(tail.len())?;
    while starts_end > 0 {
        let index = find(&s[..starts_end], Direction::Last, |x| eq(x, head))?;
        let tail_start = index + 1;
        if sequence_equal(&s[tail_start..tail_start + tail.len()], tail, eq) {
            return Some(index);
        }
        starts_end = index;
    }
    None
}
