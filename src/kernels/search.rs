//! Value and needle-set search: first/last, any/except.
//!
//! Intrinsic-equality callers fold the needle set before calling in; comparer
//! callers pass it as given. These kernels assume nothing about duplicates and
//! always call `eq(element, needle)`.
//!
//! Empty needle set conventions:
//! - `any`: nothing can match, so `None`.
//! - `any_except`: every element matches "none of zero needles", so the first
//!   (or last) index of a non-empty slice, `None` for an empty one.

use super::{find, Direction};
use crate::needles::Needles;

/// First/last index of an element equal to `value`.
#[inline]
pub(crate) fn index_of<T, E>(s: &[T], value: &T, eq: &E, dir: Direction) -> Option<usize>
where
    E: Fn(&T, &T) -> bool,
{
    find(s, dir, |x| eq(x, value))
}

/// First/last index of an element equal to any needle.
pub(crate) fn any<T, E>(s: &[T], needles: Needles<'_, T>, eq: &E, dir: Direction) -> Option<usize>
where
    E: Fn(&T, &T) -> bool,
{
    match needles {
        Needles::Zero => None,
        Needles::One(a) => find(s, dir, |x| eq(x, a)),
        Needles::Two(a, b) => find(s, dir, |x| eq(x, a) || eq(x, b)),
        Needles::Three(a, b, c) => find(s, dir, |x| eq(x, a) || eq(x, b) || eq(x, c)),
        Needles::Four(a, b, c, d) => {
            find(s, dir, |x| eq(x, a) || eq(x, b) || eq(x, c) || eq(x, d))
        }
        Needles::Many(values) => find(s, dir, |x| values.iter().any(|v| eq(x, v))),
    }
}

/// First/last index of an element equal to none of the needles.
pub(crate) fn any_except<T, E>(
    s: &[T],
    needles: Needles<'_, T>,
    eq: &E,
    dir: Direction,
) -> Option<usize>
where
    E: Fn(&T, &T) -> bool,
{
    match needles {
        Needles::Zero => find(s, dir, |_| true),
        Needles::One(a) => find(s, dir, |x| !eq(x, a)),
        Needles::Two(a, b) => find(s, dir, |x| !eq(x, a) && !eq(x, b)),
        Needles::Three(a, b, c) => find(s, dir, |x| !eq(x, a) && !eq(x, b) && !eq(x, c)),
        Needles::Four(a, b, c, d) => {
            find(s, dir, |x| !eq(x, a) && !eq(x, b) && !eq(x, c) && !eq(x, d))
        }
        Needles::Many(values) => find(s, dir, |x| !values.iter().any(|v| eq(x, v))),
    }
}
