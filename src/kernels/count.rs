//! Occurrence counting.
//!
//! - values: every matching element counts.
//! - subsequences: non-overlapping; after a match the scan resumes past the
//!   whole match. An empty needle counts zero.
//! - needle sets: repeated `any` search advancing one element per hit.

use super::search;
use super::subsequence::index_of_seq;
use super::Direction;
use crate::needles::Needles;

#[inline]
pub(crate) fn count<T, E>(s: &[T], value: &T, eq: &E) -> usize
where
    E: Fn(&T, &T) -> bool,
{
    s.iter().filter(|&x| eq(x, value)).count()
}

pub(crate) fn count_seq<T, E>(s: &[T], needle: &[T], eq: &E) -> usize
where
    E: Fn(&T, &T) -> bool,
{
    match needle {
        [] => 0,
        [value] => count(s, value, eq),
        _ => {
            let mut total = 0;
            let mut rest = s;
            while let Some(pos) = index_of_seq(rest, needle, eq) {
                total += 1;
                rest = &rest[pos + needle.len()..];
            }
            total
        }
    }
}

pub(crate) fn count_any<T, E>(s: &[T], needles: Needles<'_, T>, eq: &E) -> usize
where
    E: Fn(&T, &T) -> bool,
{
    let mut total = 0;
    let mut rest = s;
    while let Some(pos) = search::any(rest, needles, eq, Direction::First) {
        total += 1;
        rest = &rest[pos + 1..];
    }
    total
}
