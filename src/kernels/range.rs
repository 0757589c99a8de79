//! Inclusive-range membership search.
//!
//! `low <= x <= high` under a three-way comparer. When `low > high` the range
//! is empty: in-range searches find nothing and except-in-range searches
//! match every element. No folding and no bitwise fast path apply.

use core::cmp::Ordering;

use super::{find, Direction};
use crate::comparer::Comparer;

#[inline(always)]
fn in_range<T, C>(x: &T, low: &T, high: &T, cmp: &C) -> bool
where
    C: Comparer<T> + ?Sized,
{
    cmp.compare(x, low) != Ordering::Less && cmp.compare(x, high) != Ordering::Greater
}

/// First/last index of an element inside `[low, high]`.
pub(crate) fn any_in_range<T, C>(
    s: &[T],
    low: &T,
    high: &T,
    cmp: &C,
    dir: Direction,
) -> Option<usize>
where
    C: Comparer<T> + ?Sized,
{
    find(s, dir, |x| in_range(x, low, high, cmp))
}

/// First/last index of an element outside `[low, high]`.
pub(crate) fn any_except_in_range<T, C>(
    s: &[T],
    low: &T,
    high: &T,
    cmp: &C,
    dir: Direction,
) -> Option<usize>
where
    C: Comparer<T> + ?Sized,
{
    find(s, dir, |x| !in_range(x, low, high, cmp))
}
