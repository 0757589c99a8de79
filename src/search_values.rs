//! Precomputed needle sets for repeated searches.

use crate::dispatch;
use crate::element::{SpanElement, Width};
use crate::kernels::{find, Direction};
use crate::needles::Needles;
use crate::perf;
use crate::stdx::ByteSet;
use crate::util::reinterpret::{bytes, word};

/// An immutable needle set built once and reused across searches.
///
/// One-byte bitwise element types (`u8`, `i8`, `bool`) are stored as a
/// 256-bit membership bitmap; every other type keeps a deduplicated copy of
/// the needles. Either way, searching with a `SearchValues` built from
/// `values` gives the same results as the slice-needle operation with
/// `values`.
///
/// # Examples
/// ```
/// use span_scan::{MemoryExt, SearchValues};
///
/// let vowels = SearchValues::new(b"aeiou");
/// assert_eq!(b"rhythm and blues".index_of_any_values(&vowels), Some(7));
/// assert_eq!(b"rhythm".index_of_any_values(&vowels), None);
/// ```
#[derive(Clone, Debug)]
pub struct SearchValues<T> {
    repr: Repr<T>,
}

#[derive(Clone, Debug)]
enum Repr<T> {
    Bytes(ByteSet),
    Values(Vec<T>),
}

impl<T: SpanElement + Clone> SearchValues<T> {
    /// Builds a set from `values`; duplicates are dropped.
    pub fn new(values: &[T]) -> Self {
        let repr = if T::CLASS.width() == Some(Width::One) {
            Repr::Bytes(ByteSet::from_bytes(bytes(values)))
        } else {
            let mut unique: Vec<T> = Vec::with_capacity(values.len());
            for v in values {
                if !unique.contains(v) {
                    unique.push(v.clone());
                }
            }
            Repr::Values(unique)
        };
        Self { repr }
    }
}

impl<T: SpanElement> SearchValues<T> {
    /// Returns `true` if `value` is a member.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        match &self.repr {
            Repr::Bytes(set) => set.contains(*word::<T, u8>(value)),
            Repr::Values(values) => values.contains(value),
        }
    }

    /// Number of distinct members.
    #[inline]
    pub fn len(&self) -> usize {
        match &self.repr {
            Repr::Bytes(set) => set.count(),
            Repr::Values(values) => values.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn find_in(&self, s: &[T], dir: Direction) -> Option<usize> {
        match &self.repr {
            Repr::Bytes(set) => {
                perf::record_fast();
                find(bytes(s), dir, |&b| set.contains(b))
            }
            Repr::Values(values) => dispatch::any(s, Needles::from_slice(values.as_slice()), dir),
        }
    }

    pub(crate) fn find_except_in(&self, s: &[T], dir: Direction) -> Option<usize> {
        match &self.repr {
            Repr::Bytes(set) => {
                perf::record_fast();
                find(bytes(s), dir, |&b| !set.contains(b))
            }
            Repr::Values(values) => dispatch::any_except(s, Needles::from_slice(values.as_slice()), dir),
        }
    }

    pub(crate) fn count_in(&self, s: &[T]) -> usize {
        match &self.repr {
            Repr::Bytes(set) => {
                perf::record_fast();
                bytes(s).iter().filter(|&&b| set.contains(b)).count()
            }
            Repr::Values(values) => dispatch::count_any(s, Needles::from_slice(values.as_slice())),
        }
    }
}
