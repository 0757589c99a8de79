//! Scalar kernels driven by an equality (or ordering) closure.
//!
//! These are the general path: always correct for any element type and any
//! comparer, never specialized. The bitwise fast path in [`crate::packed`]
//! reuses them for word types where no better kernel exists, so every
//! observable result is defined here.
//!
//! Equality closures are always called as `eq(element, needle)`.

pub(crate) mod count;
pub(crate) mod prefix;
pub(crate) mod range;
pub(crate) mod replace;
pub(crate) mod search;
pub(crate) mod subsequence;

/// Scan direction: lowest matching index or highest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    First,
    Last,
}

/// Index of the first or last element satisfying `pred`.
#[inline(always)]
pub(crate) fn find<T>(s: &[T], dir: Direction, pred: impl FnMut(&T) -> bool) -> Option<usize> {
    match dir {
        Direction::First => s.iter().position(pred),
        Direction::Last => s.iter().rposition(pred),
    }
}

/// Intrinsic equality as a function item, for kernels that take a closure.
#[inline(always)]
pub(crate) fn eq<T: PartialEq + ?Sized>(a: &T, b: &T) -> bool {
    a == b
}
