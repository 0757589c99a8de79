//! Extension methods on slices.
//!
//! Every operation exists in an intrinsic form (`T: SpanElement`, bitwise fast
//! path when the element type allows it) and, where a custom notion of
//! equality makes sense, a `_by` form taking an [`EqualityComparer`] or
//! [`Comparer`]. The `_by` forms always run the general path.
//!
//! Positional needle forms (`index_of_any2`, `index_of_any_except3`, ...) and
//! slice needle forms (`index_of_any`, `index_of_any_except`) agree for every
//! arity both support.

use core::cmp::Ordering;
use core::ops::Range;

use crate::comparer::{Comparer, DefaultComparer, EqualityComparer};
use crate::dispatch::{self, by, check_range_bounds};
use crate::element::SpanElement;
use crate::error::SpanError;
use crate::kernels::{count, prefix, range, replace, search, subsequence, Direction};
use crate::needles::Needles;
use crate::perf;
use crate::search_values::SearchValues;
use crate::util::reinterpret::{overlap_raw, Overlap};

use Direction::{First, Last};

/// Search, count, replace and compare operations over a contiguous sequence.
///
/// Implemented for `[T]`, so arrays, vectors and slices all get the methods
/// through auto-deref. Indices are element positions; `None` means not found.
///
/// # Examples
/// ```
/// use span_scan::{IgnoreAsciiCase, MemoryExt};
///
/// let s = [1, 2, 3, 4, 5];
/// assert_eq!(s.index_of(&3), Some(2));
/// assert_eq!(s.index_of_any2(&5, &1), Some(0));
/// assert_eq!(s.index_of_any_except2(&1, &2), Some(2));
///
/// assert_eq!(b"Hello".index_of_by(&b'L', &IgnoreAsciiCase), Some(2));
/// ```
pub trait MemoryExt<T> {
    fn as_span(&self) -> &[T];

    fn as_span_mut(&mut self) -> &mut [T];

    // Forward search.

    /// Index of the first element equal to `value`.
    #[inline]
    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: SpanElement,
    {
        dispatch::index_of(self.as_span(), value, First)
    }

    #[inline]
    fn index_of_by<C>(&self, value: &T, cmp: &C) -> Option<usize>
    where
        C: EqualityComparer<T> + ?Sized,
    {
        search::index_of(self.as_span(), value, &by(cmp), First)
    }

    /// Index of the first occurrence of `needle`; an empty needle matches at 0.
    #[inline]
    fn index_of_seq(&self, needle: &[T]) -> Option<usize>
    where
        T: SpanElement,
    {
        dispatch::index_of_seq(self.as_span(), needle)
    }

    #[inline]
    fn index_of_seq_by<C>(&self, needle: &[T], cmp: &C) -> Option<usize>
    where
        C: EqualityComparer<T> + ?Sized,
    {
        subsequence::index_of_seq(self.as_span(), needle, &by(cmp))
    }

    #[inline]
    fn index_of_any2(&self, a: &T, b: &T) -> Option<usize>
    where
        T: SpanElement,
    {
        dispatch::any(self.as_span(), Needles::Two(a, b), First)
    }

    #[inline]
    fn index_of_any2_by<C>(&self, a: &T, b: &T, cmp: &C) -> Option<usize>
    where
        C: EqualityComparer<T> + ?Sized,
    {
        search::any(self.as_span(), Needles::Two(a, b), &by(cmp), First)
    }

    #[inline]
    fn index_of_any3(&self, a: &T, b: &T, c: &T) -> Option<usize>
    where
        T: SpanElement,
    {
        dispatch::any(self.as_span(), Needles::Three(a, b, c), First)
    }

    #[inline]
    fn index_of_any3_by<C>(&self, a: &T, b: &T, c: &T, cmp: &C) -> Option<usize>
    where
        C: EqualityComparer<T> + ?Sized,
    {
        search::any(self.as_span(), Needles::Three(a, b, c), &by(cmp), First)
    }

    /// Index of the first element equal to any of `values`; `None` when
    /// `values` is empty.
    #[inline]
    fn index_of_any(&self, values: &[T]) -> Option<usize>
    where
        T: SpanElement,
    {
        dispatch::any(self.as_span(), Needles::from_slice(values), First)
    }

    fn index_of_any_by<C>(&self, values: &[T], cmp: &C) -> Option<usize>
    where
        C: EqualityComparer<T> + ?Sized,
    {
        search::any(self.as_span(), Needles::from_slice(values), &by(cmp), First)
    }

    #[inline]
    fn index_of_any_except1(&self, a: &T) -> Option<usize>
    where
        T: SpanElement,
    {
        dispatch::any_except(self.as_span(), Needles::One(a), First)
    }

    #[inline]
    fn index_of_any_except1_by<C>(&self, a: &T, cmp: &C) -> Option<usize>
    where
        C: EqualityComparer<T> + ?Sized,
    {
        search::any_except(self.as_span(), Needles::One(a), &by(cmp), First)
    }

    #[inline]
    fn index_of_any_except2(&self, a: &T, b: &T) -> Option<usize>
    where
        T: SpanElement,
    {
        dispatch::any_except(self.as_span(), Needles::Two(a, b), First)
    }

    #[inline]
    fn index_of_any_except2_by<C>(&self, a: &T, b: &T, cmp: &C) -> Option<usize>
    where
        C: EqualityComparer<T> + ?Sized,
    {
        search::any_except(self.as_span(), Needles::Two(a, b), &by(cmp), First)
    }

    #[inline]
    fn index_of_any_except3(&self, a: &T, b: &T, c: &T) -> Option<usize>
    where
        T: SpanElement,
    {
        dispatch::any_except(self.as_span(), Needles::Three(a, b, c), First)
    }

    #[inline]
    fn index_of_any_except3_by<C>(&self, a: &T, b: &T, c: &T, cmp: &C) -> Option<usize>
    where
        C: EqualityComparer<T> + ?Sized,
    {
        search::any_except(self.as_span(), Needles::Three(a, b, c), &by(cmp), First)
    }

    #[inline]
    fn index_of_any_except4(&self, a: &T, b: &T, c: &T, d: &T) -> Option<usize>
    where
        T: SpanElement,
    {
        dispatch::any_except(self.as_span(), Needles::Four(a, b, c, d), First)
    }

    #[inline]
    fn index_of_any_except4_by<C>(&self, a: &T, b: &T, c: &T, d: &T, cmp: &C) -> Option<usize>
    where
        C: EqualityComparer<T> + ?Sized,
    {
        search::any_except(self.as_span(), Needles::Four(a, b, c, d), &by(cmp), First)
    }

    /// Index of the first element equal to none of `values`.
    ///
    /// With no values every element qualifies, so this is `Some(0)` for a
    /// non-empty sequence.
    #[inline]
    fn index_of_any_except(&self, values: &[T]) -> Option<usize>
    where
        T: SpanElement,
    {
        dispatch::any_except(self.as_span(), Needles::from_slice(values), First)
    }

    fn index_of_any_except_by<C>(&self, values: &[T], cmp: &C) -> Option<usize>
    where
        C: EqualityComparer<T> + ?Sized,
    {
        search::any_except(self.as_span(), Needles::from_slice(values), &by(cmp), First)
    }

    // Backward search.

    /// Index of the last element equal to `value`.
    #[inline]
    fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: SpanElement,
    {
        dispatch::index_of(self.as_span(), value, Last)
    }

    #[inline]
    fn last_index_of_by<C>(&self, value: &T, cmp: &C) -> Option<usize>
    where
        C: EqualityComparer<T> + ?Sized,
    {
        search::index_of(self.as_span(), value, &by(cmp), Last)
    }

    /// Start index of the last occurrence of `needle`; an empty needle
    /// matches at `len()`.
    #[inline]
    fn last_index_of_seq(&self, needle: &[T]) -> Option<usize>
    where
        T: SpanElement,
    {
        dispatch::last_index_of_seq(self.as_span(), needle)
    }

    #[inline]
    fn last_index_of_seq_by<C>(&self, needle: &[T], cmp: &C) -> Option<usize>
    where
        C: EqualityComparer<T> + ?Sized,
    {
        subsequence::last_index_of_seq(self.as_span(), needle, &by(cmp))
    }

    #[inline]
    fn last_index_of_any2(&self, a: &T, b: &T) -> Option<usize>
    where
        T: SpanElement,
    {
        dispatch::any(self.as_span(), Needles::Two(a, b), Last)
    }

    #[inline]
    fn last_index_of_any2_by<C>(&self, a: &T, b: &T, cmp: &C) -> Option<usize>
    where
        C: EqualityComparer<T> + ?Sized,
    {
        search::any(self.as_span(), Needles::Two(a, b), &by(cmp), Last)
    }

    #[inline]
    fn last_index_of_any3(&self, a: &T, b: &T, c: &T) -> Option<usize>
    where
        T: SpanElement,
    {
        dispatch::any(self.as_span(), Needles::Three(a, b, c), Last)
    }

    #[inline]
    fn last_index_of_any3_by<C>(&self, a: &T, b: &T, c: &T, cmp: &C) -> Option<usize>
    where
        C: EqualityComparer<T> + ?Sized,
    {
        search::any(self.as_span(), Needles::Three(a, b, c), &by(cmp), Last)
    }

    #[inline]
    fn last_index_of_any(&self, values: &[T]) -> Option<usize>
    where
        T: SpanElement,
    {
        dispatch::any(self.as_span(), Needles::from_slice(values), Last)
    }

    fn last_index_of_any_by<C>(&self, values: &[T], cmp: &C) -> Option<usize>
    where
        C: EqualityComparer<T> + ?Sized,
    {
        search::any(self.as_span(), Needles::from_slice(values), &by(cmp), Last)
    }

    #[inline]
    fn last_index_of_any_except1(&self, a: &T) -> Option<usize>
    where
        T: SpanElement,
    {
        dispatch::any_except(self.as_span(), Needles::One(a), Last)
    }

    #[inline]
    fn last_index_of_any_except1_by<C>(&self, a: &T, cmp: &C) -> Option<usize>
    where
        C: EqualityComparer<T> + ?Sized,
    {
        search::any_except(self.as_span(), Needles::One(a), &by(cmp), Last)
    }

    #[inline]
    fn last_index_of_any_except2(&self, a: &T, b: &T) -> Option<usize>
    where
        T: SpanElement,
    {
        dispatch::any_except(self.as_span(), Needles::Two(a, b), Last)
    }

    #[inline]
    fn last_index_of_any_except2_by<C>(&self, a: &T, b: &T, cmp: &C) -> Option<usize>
    where
        C: EqualityComparer<T> + ?Sized,
    {
        search::any_except(self.as_span(), Needles::Two(a, b), &by(cmp), Last)
    }

    #[inline]
    fn last_index_of_any_except3(&self, a: &T, b: &T, c: &T) -> Option<usize>
    where
        T: SpanElement,
    {
        dispatch::any_except(self.as_span(), Needles::Three(a, b, c), Last)
    }

    #[inline]
    fn last_index_of_any_except3_by<C>(&self, a: &T, b: &T, c: &T, cmp: &C) -> Option<usize>
    where
        C: EqualityComparer<T> + ?Sized,
    {
        search::any_except(self.as_span(), Needles::Three(a, b, c), &by(cmp), Last)
    }

    #[inline]
    fn last_index_of_any_except4(&self, a: &T, b: &T, c: &T, d: &T) -> Option<usize>
    where
        T: SpanElement,
    {
        dispatch::any_except(self.as_span(), Needles::Four(a, b, c, d), Last)
    }

    #[inline]
    fn last_index_of_any_except4_by<C>(&self, a: &T, b: &T, c: &T, d: &T, cmp: &C) -> Option<usize>
    where
        C: EqualityComparer<T> + ?Sized,
    {
        search::any_except(self.as_span(), Needles::Four(a, b, c, d), &by(cmp), Last)
    }

    /// Index of the last element equal to none of `values`; `len() - 1` when
    /// `values` is empty and the sequence is not.
    #[inline]
    fn last_index_of_any_except(&self, values: &[T]) -> Option<usize>
    where
        T: SpanElement,
    {
        dispatch::any_except(self.as_span(), Needles::from_slice(values), Last)
    }

    fn last_index_of_any_except_by<C>(&self, values: &[T], cmp: &C) -> Option<usize>
    where
        C: EqualityComparer<T> + ?Sized,
    {
        search::any_except(self.as_span(), Needles::from_slice(values), &by(cmp), Last)
    }

    // Containment.

    /// `true` if any element equals `value`.
    ///
    /// Named to stay clear of the inherent `[T]::contains`.
    #[inline]
    fn contains_value(&self, value: &T) -> bool
    where
        T: SpanElement,
    {
        self.index_of(value).is_some()
    }

    #[inline]
    fn contains_value_by<C>(&self, value: &T, cmp: &C) -> bool
    where
        C: EqualityComparer<T> + ?Sized,
    {
        self.index_of_by(value, cmp).is_some()
    }

    #[inline]
    fn contains_any2(&self, a: &T, b: &T) -> bool
    where
        T: SpanElement,
    {
        self.index_of_any2(a, b).is_some()
    }

    #[inline]
    fn contains_any2_by<C>(&self, a: &T, b: &T, cmp: &C) -> bool
    where
        C: EqualityComparer<T> + ?Sized,
    {
        self.index_of_any2_by(a, b, cmp).is_some()
    }

    #[inline]
    fn contains_any3(&self, a: &T, b: &T, c: &T) -> bool
    where
        T: SpanElement,
    {
        self.index_of_any3(a, b, c).is_some()
    }

    #[inline]
    fn contains_any3_by<C>(&self, a: &T, b: &T, c: &T, cmp: &C) -> bool
    where
        C: EqualityComparer<T> + ?Sized,
    {
        self.index_of_any3_by(a, b, c, cmp).is_some()
    }

    #[inline]
    fn contains_any(&self, values: &[T]) -> bool
    where
        T: SpanElement,
    {
        self.index_of_any(values).is_some()
    }

    #[inline]
    fn contains_any_by<C>(&self, values: &[T], cmp: &C) -> bool
    where
        C: EqualityComparer<T> + ?Sized,
    {
        self.index_of_any_by(values, cmp).is_some()
    }

    #[inline]
    fn contains_any_except1(&self, a: &T) -> bool
    where
        T: SpanElement,
    {
        self.index_of_any_except1(a).is_some()
    }

    #[inline]
    fn contains_any_except1_by<C>(&self, a: &T, cmp: &C) -> bool
    where
        C: EqualityComparer<T> + ?Sized,
    {
        self.index_of_any_except1_by(a, cmp).is_some()
    }

    #[inline]
    fn contains_any_except2(&self, a: &T, b: &T) -> bool
    where
        T: SpanElement,
    {
        self.index_of_any_except2(a, b).is_some()
    }

    #[inline]
    fn contains_any_except2_by<C>(&self, a: &T, b: &T, cmp: &C) -> bool
    where
        C: EqualityComparer<T> + ?Sized,
    {
        self.index_of_any_except2_by(a, b, cmp).is_some()
    }

    #[inline]
    fn contains_any_except3(&self, a: &T, b: &T, c: &T) -> bool
    where
        T: SpanElement,
    {
        self.index_of_any_except3(a, b, c).is_some()
    }

    #[inline]
    fn contains_any_except3_by<C>(&self, a: &T, b: &T, c: &T, cmp: &C) -> bool
    where
        C: EqualityComparer<T> + ?Sized,
    {
        self.index_of_any_except3_by(a, b, c, cmp).is_some()
    }

    #[inline]
    fn contains_any_except4(&self, a: &T, b: &T, c: &T, d: &T) -> bool
    where
        T: SpanElement,
    {
        self.index_of_any_except4(a, b, c, d).is_some()
    }

    #[inline]
    fn contains_any_except4_by<C>(&self, a: &T, b: &T, c: &T, d: &T, cmp: &C) -> bool
    where
        C: EqualityComparer<T> + ?Sized,
    {
        self.index_of_any_except4_by(a, b, c, d, cmp).is_some()
    }

    #[inline]
    fn contains_any_except(&self, values: &[T]) -> bool
    where
        T: SpanElement,
    {
        self.index_of_any_except(values).is_some()
    }

    #[inline]
    fn contains_any_except_by<C>(&self, values: &[T], cmp: &C) -> bool
    where
        C: EqualityComparer<T> + ?Sized,
    {
        self.index_of_any_except_by(values, cmp).is_some()
    }

    // Range search. Bounds are inclusive; `low > high` is an empty range.

    /// Index of the first element in `[low, high]`.
    ///
    /// # Errors
    /// [`SpanError::NullArgument`] if `low` (checked first) or `high` is the
    /// null value of `T`.
    #[inline]
    fn index_of_any_in_range(&self, low: &T, high: &T) -> Result<Option<usize>, SpanError>
    where
        T: SpanElement + Ord,
    {
        self.index_of_any_in_range_by(low, high, &DefaultComparer)
    }

    fn index_of_any_in_range_by<C>(
        &self,
        low: &T,
        high: &T,
        cmp: &C,
    ) -> Result<Option<usize>, SpanError>
    where
        T: SpanElement,
        C: Comparer<T> + ?Sized,
    {
        check_range_bounds(low, high)?;
        perf::record_general();
        Ok(range::any_in_range(self.as_span(), low, high, cmp, First))
    }

    #[inline]
    fn last_index_of_any_in_range(&self, low: &T, high: &T) -> Result<Option<usize>, SpanError>
    where
        T: SpanElement + Ord,
    {
        self.last_index_of_any_in_range_by(low, high, &DefaultComparer)
    }

    fn last_index_of_any_in_range_by<C>(
        &self,
        low: &T,
        high: &T,
        cmp: &C,
    ) -> Result<Option<usize>, SpanError>
    where
        T: SpanElement,
        C: Comparer<T> + ?Sized,
    {
        check_range_bounds(low, high)?;
        perf::record_general();
        Ok(range::any_in_range(self.as_span(), low, high, cmp, Last))
    }

    /// Index of the first element outside `[low, high]`.
    ///
    /// # Errors
    /// As [`index_of_any_in_range`](MemoryExt::index_of_any_in_range).
    #[inline]
    fn index_of_any_except_in_range(
        &self,
        low: &T,
        high: &T,
    ) -> Result<Option<usize>, SpanError>
    where
        T: SpanElement + Ord,
    {
        self.index_of_any_except_in_range_by(low, high, &DefaultComparer)
    }

    fn index_of_any_except_in_range_by<C>(
        &self,
        low: &T,
        high: &T,
        cmp: &C,
    ) -> Result<Option<usize>, SpanError>
    where
        T: SpanElement,
        C: Comparer<T> + ?Sized,
    {
        check_range_bounds(low, high)?;
        perf::record_general();
        Ok(range::any_except_in_range(self.as_span(), low, high, cmp, First))
    }

    #[inline]
    fn last_index_of_any_except_in_range(
        &self,
        low: &T,
        high: &T,
    ) -> Result<Option<usize>, SpanError>
    where
        T: SpanElement + Ord,
    {
        self.last_index_of_any_except_in_range_by(low, high, &DefaultComparer)
    }

    fn last_index_of_any_except_in_range_by<C>(
        &self,
        low: &T,
        high: &T,
        cmp: &C,
    ) -> Result<Option<usize>, SpanError>
    where
        T: SpanElement,
        C: Comparer<T> + ?Sized,
    {
        check_range_bounds(low, high)?;
        perf::record_general();
        Ok(range::any_except_in_range(self.as_span(), low, high, cmp, Last))
    }

    #[inline]
    fn contains_any_in_range(&self, low: &T, high: &T) -> Result<bool, SpanError>
    where
        T: SpanElement + Ord,
    {
        Ok(self.index_of_any_in_range(low, high)?.is_some())
    }

    #[inline]
    fn contains_any_in_range_by<C>(&self, low: &T, high: &T, cmp: &C) -> Result<bool, SpanError>
    where
        T: SpanElement,
        C: Comparer<T> + ?Sized,
    {
        Ok(self.index_of_any_in_range_by(low, high, cmp)?.is_some())
    }

    #[inline]
    fn contains_any_except_in_range(&self, low: &T, high: &T) -> Result<bool, SpanError>
    where
        T: SpanElement + Ord,
    {
        Ok(self.index_of_any_except_in_range(low, high)?.is_some())
    }

    #[inline]
    fn contains_any_except_in_range_by<C>(
        &self,
        low: &T,
        high: &T,
        cmp: &C,
    ) -> Result<bool, SpanError>
    where
        T: SpanElement,
        C: Comparer<T> + ?Sized,
    {
        Ok(self.index_of_any_except_in_range_by(low, high, cmp)?.is_some())
    }

    // Counting.

    /// Number of elements equal to `value`.
    #[inline]
    fn count(&self, value: &T) -> usize
    where
        T: SpanElement,
    {
        dispatch::count(self.as_span(), value)
    }

    #[inline]
    fn count_by<C>(&self, value: &T, cmp: &C) -> usize
    where
        C: EqualityComparer<T> + ?Sized,
    {
        count::count(self.as_span(), value, &by(cmp))
    }

    /// Number of non-overlapping occurrences of `needle`; zero for an empty
    /// needle.
    #[inline]
    fn count_seq(&self, needle: &[T]) -> usize
    where
        T: SpanElement,
    {
        dispatch::count_seq(self.as_span(), needle)
    }

    #[inline]
    fn count_seq_by<C>(&self, needle: &[T], cmp: &C) -> usize
    where
        C: EqualityComparer<T> + ?Sized,
    {
        count::count_seq(self.as_span(), needle, &by(cmp))
    }

    /// Number of elements equal to any of `values`.
    #[inline]
    fn count_any(&self, values: &[T]) -> usize
    where
        T: SpanElement,
    {
        dispatch::count_any(self.as_span(), Needles::from_slice(values))
    }

    fn count_any_by<C>(&self, values: &[T], cmp: &C) -> usize
    where
        C: EqualityComparer<T> + ?Sized,
    {
        count::count_any(self.as_span(), Needles::from_slice(values), &by(cmp))
    }

    // Replace.

    /// Copies `self` into the front of `dst`, substituting `new` for every
    /// element equal to `old`.
    ///
    /// # Errors
    /// [`SpanError::InvalidSize`] if `dst` is shorter than `self`; nothing is
    /// written in that case.
    fn replace(&self, dst: &mut [T], old: &T, new: &T) -> Result<(), SpanError>
    where
        T: SpanElement + Clone,
    {
        let src = self.as_span();
        check_destination(src.len(), dst.len())?;
        dispatch::replace(src, dst, old, new);
        Ok(())
    }

    fn replace_by<C>(&self, dst: &mut [T], old: &T, new: &T, cmp: &C) -> Result<(), SpanError>
    where
        T: Clone,
        C: EqualityComparer<T> + ?Sized,
    {
        let src = self.as_span();
        check_destination(src.len(), dst.len())?;
        replace::replace(src, dst, old, new, &by(cmp));
        Ok(())
    }

    /// Overwrites every element equal to `old` with `new`.
    #[inline]
    fn replace_in_place(&mut self, old: &T, new: &T)
    where
        T: SpanElement + Clone,
    {
        dispatch::replace_in_place(self.as_span_mut(), old, new);
    }

    #[inline]
    fn replace_in_place_by<C>(&mut self, old: &T, new: &T, cmp: &C)
    where
        T: Clone,
        C: EqualityComparer<T> + ?Sized,
    {
        replace::replace_in_place(self.as_span_mut(), old, new, &by(cmp));
    }

    /// Replace from `self[src]` into `self[dst_start..dst_start + src.len()]`.
    ///
    /// Identical ranges update in place and disjoint ranges copy. Checks run
    /// before anything is written.
    ///
    /// # Errors
    /// - [`SpanError::InvalidSize`] if either range does not fit in `self`.
    /// - [`SpanError::InvalidOverlap`] if the ranges partially overlap.
    fn replace_within(
        &mut self,
        src: Range<usize>,
        dst_start: usize,
        old: &T,
        new: &T,
    ) -> Result<(), SpanError>
    where
        T: SpanElement + Clone,
    {
        match split_within(self.as_span_mut(), src, dst_start)? {
            Within::InPlace(buf) => dispatch::replace_in_place(buf, old, new),
            Within::Disjoint(src, dst) => dispatch::replace(src, dst, old, new),
        }
        Ok(())
    }

    fn replace_within_by<C>(
        &mut self,
        src: Range<usize>,
        dst_start: usize,
        old: &T,
        new: &T,
        cmp: &C,
    ) -> Result<(), SpanError>
    where
        T: Clone,
        C: EqualityComparer<T> + ?Sized,
    {
        let within = split_within(self.as_span_mut(), src, dst_start)?;
        let eq = by(cmp);
        match within {
            Within::InPlace(buf) => replace::replace_in_place(buf, old, new, &eq),
            Within::Disjoint(src, dst) => replace::replace(src, dst, old, new, &eq),
        }
        Ok(())
    }

    // Comparison.

    /// Length of the longest common prefix of `self` and `other`.
    #[inline]
    fn common_prefix_len(&self, other: &[T]) -> usize
    where
        T: SpanElement,
    {
        dispatch::common_prefix_len(self.as_span(), other)
    }

    #[inline]
    fn common_prefix_len_by<C>(&self, other: &[T], cmp: &C) -> usize
    where
        C: EqualityComparer<T> + ?Sized,
    {
        prefix::common_prefix_len(self.as_span(), other, &by(cmp))
    }

    /// `true` if both sequences have the same length and equal elements.
    #[inline]
    fn sequence_equal(&self, other: &[T]) -> bool
    where
        T: SpanElement,
    {
        dispatch::sequence_equal(self.as_span(), other)
    }

    #[inline]
    fn sequence_equal_by<C>(&self, other: &[T], cmp: &C) -> bool
    where
        C: EqualityComparer<T> + ?Sized,
    {
        subsequence::sequence_equal(self.as_span(), other, &by(cmp))
    }

    /// Lexicographic order; a proper prefix orders first.
    fn sequence_compare_to(&self, other: &[T]) -> Ordering
    where
        T: SpanElement + Ord,
    {
        let a = self.as_span();
        let len = dispatch::common_prefix_len(a, other);
        prefix::compare_after_prefix(a, other, len, &DefaultComparer)
    }

    fn sequence_compare_to_by<C>(&self, other: &[T], cmp: &C) -> Ordering
    where
        C: Comparer<T> + ?Sized,
    {
        perf::record_general();
        let a = self.as_span();
        let len = prefix::common_prefix_len(a, other, &|x: &T, y: &T| {
            cmp.compare(x, y) == Ordering::Equal
        });
        prefix::compare_after_prefix(a, other, len, cmp)
    }

    // Precomputed needle sets.

    #[inline]
    fn index_of_any_values(&self, values: &SearchValues<T>) -> Option<usize>
    where
        T: SpanElement,
    {
        values.find_in(self.as_span(), First)
    }

    #[inline]
    fn last_index_of_any_values(&self, values: &SearchValues<T>) -> Option<usize>
    where
        T: SpanElement,
    {
        values.find_in(self.as_span(), Last)
    }

    #[inline]
    fn index_of_any_except_values(&self, values: &SearchValues<T>) -> Option<usize>
    where
        T: SpanElement,
    {
        values.find_except_in(self.as_span(), First)
    }

    #[inline]
    fn last_index_of_any_except_values(&self, values: &SearchValues<T>) -> Option<usize>
    where
        T: SpanElement,
    {
        values.find_except_in(self.as_span(), Last)
    }

    #[inline]
    fn contains_any_values(&self, values: &SearchValues<T>) -> bool
    where
        T: SpanElement,
    {
        self.index_of_any_values(values).is_some()
    }

    #[inline]
    fn contains_any_except_values(&self, values: &SearchValues<T>) -> bool
    where
        T: SpanElement,
    {
        self.index_of_any_except_values(values).is_some()
    }

    #[inline]
    fn count_any_values(&self, values: &SearchValues<T>) -> usize
    where
        T: SpanElement,
    {
        values.count_in(self.as_span())
    }
}

impl<T> MemoryExt<T> for [T] {
    #[inline(always)]
    fn as_span(&self) -> &[T] {
        self
    }

    #[inline(always)]
    fn as_span_mut(&mut self) -> &mut [T] {
        self
    }
}

#[inline]
fn check_destination(needed: usize, available: usize) -> Result<(), SpanError> {
    if available < needed {
        return Err(SpanError::InvalidSize { needed, available });
    }
    Ok(())
}

/// Source and destination of a `replace_within`, split for the borrow checker.
enum Within<'a, T> {
    InPlace(&'a mut [T]),
    Disjoint(&'a [T], &'a mut [T]),
}

fn split_within<T>(
    buf: &mut [T],
    src: Range<usize>,
    dst_start: usize,
) -> Result<Within<'_, T>, SpanError> {
    let available = buf.len();
    if src.start > src.end || src.end > available {
        return Err(SpanError::InvalidSize {
            needed: src.start.max(src.end),
            available,
        });
    }
    let len = src.len();
    let dst = match dst_start.checked_add(len) {
        Some(end) if end <= available => dst_start..end,
        _ => {
            return Err(SpanError::InvalidSize {
                needed: dst_start.saturating_add(len),
                available,
            })
        }
    };

    let base = buf.as_ptr();
    let relation = overlap_raw(
        base.wrapping_add(src.start),
        len,
        base.wrapping_add(dst.start),
        len,
    );
    match relation {
        Overlap::Partial => Err(SpanError::InvalidOverlap { src, dst }),
        Overlap::Identical => Ok(Within::InPlace(&mut buf[dst])),
        Overlap::Disjoint if src.end <= dst.start => {
            let (head, tail) = buf.split_at_mut(dst.start);
            Ok(Within::Disjoint(&head[src], &mut tail[..len]))
        }
        Overlap::Disjoint if dst.end <= src.start => {
            let (head, tail) = buf.split_at_mut(src.start);
            Ok(Within::Disjoint(&tail[..len], &mut head[dst]))
        }
        // Zero-sized elements occupy no bytes; every value is the same.
        Overlap::Disjoint => Ok(Within::InPlace(&mut buf[dst])),
    }
}

#[cfg(test)]
#[path = "ext_tests.rs"]
mod tests;
