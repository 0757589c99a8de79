//! Fast-path selection for intrinsic-equality operations.
//!
//! Each function matches on `T::CLASS.width()`, a constant per
//! monomorphization, so only one arm survives codegen. Bitwise arms view the
//! haystack and needles as `u8`/`u16`/`u32`/`u64` words and run the
//! [`PackedWord`] kernel for that width; the general arm runs the scalar kernel
//! with `PartialEq`.
//!
//! Comparer-driven (`_by`) operations never come through here: a custom
//! comparer always takes the general path, see [`by`].

use core::mem::size_of;

use crate::comparer::EqualityComparer;
use crate::element::{SpanElement, Width};
use crate::error::SpanError;
use crate::kernels::{self, count, prefix, replace, search, subsequence, Direction};
use crate::needles::Needles;
use crate::packed::{common_prefix_bytes, PackedWord};
use crate::perf;
use crate::util::reinterpret::{bytes, word, words, words_mut, Word};

/// Runs `$fast` with `$w` bound to the word type matching `$t`'s width, or
/// `$general` when `$t` is not bitwise.
macro_rules! bitwise_dispatch {
    ($t:ty, |$w:ident| $fast:expr, $general:expr $(,)?) => {
        match <$t as SpanElement>::CLASS.width() {
            Some(Width::One) => {
                type $w = u8;
                perf::record_fast();
                $fast
            }
            Some(Width::Two) => {
                type $w = u16;
                perf::record_fast();
                $fast
            }
            Some(Width::Four) => {
                type $w = u32;
                perf::record_fast();
                $fast
            }
            Some(Width::Eight) => {
                type $w = u64;
                perf::record_fast();
                $fast
            }
            None => {
                perf::record_general();
                $general
            }
        }
    };
}

/// Word view of a needle set; duplicates are folded on the words.
#[inline(always)]
fn packed_needles<'a, T: SpanElement, W: Word>(needles: Needles<'a, T>) -> Needles<'a, W> {
    needles
        .map(word::<T, W>, words::<T, W>)
        .fold(kernels::eq::<W>)
}

pub(crate) fn index_of<T: SpanElement>(s: &[T], value: &T, dir: Direction) -> Option<usize> {
    bitwise_dispatch!(
        T,
        |W| <W as PackedWord>::index_of(words::<T, W>(s), *word::<T, W>(value), dir),
        search::index_of(s, value, &kernels::eq, dir),
    )
}

pub(crate) fn any<T: SpanElement>(s: &[T], needles: Needles<'_, T>, dir: Direction) -> Option<usize> {
    bitwise_dispatch!(
        T,
        |W| <W as PackedWord>::any(words::<T, W>(s), packed_needles::<T, W>(needles), dir),
        search::any(s, needles.fold(kernels::eq::<T>), &kernels::eq, dir),
    )
}

pub(crate) fn any_except<T: SpanElement>(
    s: &[T],
    needles: Needles<'_, T>,
    dir: Direction,
) -> Option<usize> {
    bitwise_dispatch!(
        T,
        |W| <W as PackedWord>::any_except(
            words::<T, W>(s),
            packed_needles::<T, W>(needles),
            dir
        ),
        search::any_except(s, needles.fold(kernels::eq::<T>), &kernels::eq, dir),
    )
}

pub(crate) fn index_of_seq<T: SpanElement>(s: &[T], needle: &[T]) -> Option<usize> {
    bitwise_dispatch!(
        T,
        |W| <W as PackedWord>::index_of_seq(words::<T, W>(s), words::<T, W>(needle)),
        subsequence::index_of_seq(s, needle, &kernels::eq),
    )
}

pub(crate) fn last_index_of_seq<T: SpanElement>(s: &[T], needle: &[T]) -> Option<usize> {
    bitwise_dispatch!(
        T,
        |W| <W as PackedWord>::last_index_of_seq(words::<T, W>(s), words::<T, W>(needle)),
        subsequence::last_index_of_seq(s, needle, &kernels::eq),
    )
}

pub(crate) fn count<T: SpanElement>(s: &[T], value: &T) -> usize {
    bitwise_dispatch!(
        T,
        |W| <W as PackedWord>::count(words::<T, W>(s), *word::<T, W>(value)),
        count::count(s, value, &kernels::eq),
    )
}

pub(crate) fn count_seq<T: SpanElement>(s: &[T], needle: &[T]) -> usize {
    bitwise_dispatch!(
        T,
        |W| <W as PackedWord>::count_seq(words::<T, W>(s), words::<T, W>(needle)),
        count::count_seq(s, needle, &kernels::eq),
    )
}

pub(crate) fn count_any<T: SpanElement>(s: &[T], needles: Needles<'_, T>) -> usize {
    bitwise_dispatch!(
        T,
        |W| <W as PackedWord>::count_any(words::<T, W>(s), packed_needles::<T, W>(needles)),
        count::count_any(s, needles.fold(kernels::eq::<T>), &kernels::eq),
    )
}

/// Caller has checked `dst.len() >= src.len()`.
pub(crate) fn replace<T: SpanElement + Clone>(src: &[T], dst: &mut [T], old: &T, new: &T) {
    bitwise_dispatch!(
        T,
        |W| <W as PackedWord>::replace(
            words::<T, W>(src),
            words_mut::<T, W>(dst),
            *word::<T, W>(old),
            *word::<T, W>(new)
        ),
        replace::replace(src, dst, old, new, &kernels::eq),
    )
}

pub(crate) fn replace_in_place<T: SpanElement + Clone>(buf: &mut [T], old: &T, new: &T) {
    bitwise_dispatch!(
        T,
        |W| <W as PackedWord>::replace_in_place(
            words_mut::<T, W>(buf),
            *word::<T, W>(old),
            *word::<T, W>(new)
        ),
        replace::replace_in_place(buf, old, new, &kernels::eq),
    )
}

pub(crate) fn common_prefix_len<T: SpanElement>(a: &[T], b: &[T]) -> usize {
    if T::CLASS.is_bitwise() {
        perf::record_fast();
        common_prefix_bytes(bytes(a), bytes(b)) / size_of::<T>()
    } else {
        perf::record_general();
        prefix::common_prefix_len(a, b, &kernels::eq)
    }
}

pub(crate) fn sequence_equal<T: SpanElement>(a: &[T], b: &[T]) -> bool {
    if T::CLASS.is_bitwise() {
        perf::record_fast();
        bytes(a) == bytes(b)
    } else {
        perf::record_general();
        subsequence::sequence_equal(a, b, &kernels::eq)
    }
}

/// Equality closure for a caller-supplied comparer; counts as a general-path
/// dispatch.
#[inline]
pub(crate) fn by<T, C>(cmp: &C) -> impl Fn(&T, &T) -> bool + '_
where
    C: EqualityComparer<T> + ?Sized,
{
    perf::record_general();
    move |a: &T, b: &T| cmp.equals(a, b)
}

/// Rejects null range bounds, `low` first.
pub(crate) fn check_range_bounds<T: SpanElement>(low: &T, high: &T) -> Result<(), SpanError> {
    if low.is_null() {
        return Err(SpanError::null_argument("low_inclusive"));
    }
    if high.is_null() {
        return Err(SpanError::null_argument("high_inclusive"));
    }
    Ok(())
}
