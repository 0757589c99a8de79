//! Checked reinterpretation of element slices as integer words or bytes.
//!
//! This is the only place in the crate that changes the element type of a
//! slice. The gate is [`SpanElement::CLASS`](crate::SpanElement::CLASS): a view
//! is produced only when the class is bitwise with exactly the requested width,
//! which in turn can only be asserted through an `unsafe` constructor.
//!
//! Layout assumptions are spelled out here rather than hidden behind a
//! bytemuck-style dependency so they stay auditable at the call site.

use core::fmt;
use core::mem::{align_of, size_of, size_of_val};
use core::slice;

use crate::element::{SpanElement, Width};

mod sealed {
    pub trait Sealed {}
}

/// Integer word a bitwise element can be viewed as. Sealed to `u8`..`u64`.
pub trait Word: sealed::Sealed + Copy + Eq + Ord + fmt::Debug + 'static {
    const WIDTH: Width;
}

macro_rules! words {
    ($($t:ty => $w:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}
            impl Word for $t {
                const WIDTH: Width = Width::$w;
            }
        )*
    };
}

words!(u8 => One, u16 => Two, u32 => Four, u64 => Eight);

#[inline(always)]
fn layout_matches<T: SpanElement, W: Word>() -> bool {
    T::CLASS.width() == Some(W::WIDTH)
}

/// Views `s` as words of type `W`.
///
/// Returns `None` unless `T` is bitwise-equatable with the width of `W`.
///
/// # Examples
/// ```
/// use span_scan::reinterpret::as_words;
///
/// let chars = ['a', 'b'];
/// assert_eq!(as_words::<char, u32>(&chars), Some(&[97u32, 98][..]));
/// assert_eq!(as_words::<char, u16>(&chars), None);
/// assert_eq!(as_words::<f32, u32>(&[1.0f32]), None);
/// ```
#[inline]
pub fn as_words<T: SpanElement, W: Word>(s: &[T]) -> Option<&[W]> {
    layout_matches::<T, W>().then(|| words(s))
}

/// Mutable version of [`as_words`].
#[inline]
pub fn as_words_mut<T: SpanElement, W: Word>(s: &mut [T]) -> Option<&mut [W]> {
    if layout_matches::<T, W>() {
        Some(words_mut(s))
    } else {
        None
    }
}

/// Views the bytes backing `s`, `size_of_val(s)` of them.
///
/// Returns `None` for general (non-bitwise) element types.
#[inline]
pub fn as_bytes<T: SpanElement>(s: &[T]) -> Option<&[u8]> {
    T::CLASS.is_bitwise().then(|| bytes(s))
}

/// Infallible word view for dispatch arms that already matched the width.
///
/// # Panics
/// Panics if `T`'s class is not bitwise with the width of `W`.
#[inline(always)]
pub(crate) fn words<T: SpanElement, W: Word>(s: &[T]) -> &[W] {
    assert!(layout_matches::<T, W>());
    debug_assert_eq!(size_of::<T>(), size_of::<W>());
    debug_assert!(align_of::<T>() >= align_of::<W>());
    // SAFETY: the bitwise class guarantees same size, sufficient alignment,
    // no padding and fully initialized bytes.
    unsafe { slice::from_raw_parts(s.as_ptr().cast::<W>(), s.len()) }
}

/// Mutable version of [`words`].
#[inline(always)]
pub(crate) fn words_mut<T: SpanElement, W: Word>(s: &mut [T]) -> &mut [W] {
    assert!(layout_matches::<T, W>());
    debug_assert_eq!(size_of::<T>(), size_of::<W>());
    debug_assert!(align_of::<T>() >= align_of::<W>());
    // SAFETY: as in `words`; additionally the bitwise contract guarantees a
    // word copied from any valid `T` is a valid `T`, and callers only write
    // such words.
    unsafe { slice::from_raw_parts_mut(s.as_mut_ptr().cast::<W>(), s.len()) }
}

/// Word view of a single needle value.
#[inline(always)]
pub(crate) fn word<T: SpanElement, W: Word>(v: &T) -> &W {
    &words::<T, W>(slice::from_ref(v))[0]
}

/// Infallible byte view for bitwise element types.
#[inline(always)]
pub(crate) fn bytes<T: SpanElement>(s: &[T]) -> &[u8] {
    assert!(T::CLASS.is_bitwise());
    // SAFETY: bitwise elements have no padding and all bytes initialized.
    unsafe { slice::from_raw_parts(s.as_ptr().cast::<u8>(), size_of_val(s)) }
}

/// How two memory regions relate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overlap {
    /// No shared byte (an empty region is disjoint from everything).
    Disjoint,
    /// Same start address and same length.
    Identical,
    /// Share some bytes but are not identical.
    Partial,
}

/// Classifies two slices by their byte address ranges.
#[inline]
pub fn overlap<T>(a: &[T], b: &[T]) -> Overlap {
    overlap_raw(a.as_ptr(), a.len(), b.as_ptr(), b.len())
}

/// Classifies two raw regions of `a_len` and `b_len` elements.
///
/// Only addresses are compared; nothing is dereferenced.
pub(crate) fn overlap_raw<T>(a: *const T, a_len: usize, b: *const T, b_len: usize) -> Overlap {
    let size = size_of::<T>();
    let a_start = a as usize;
    let b_start = b as usize;
    let a_end = a_start.wrapping_add(a_len.wrapping_mul(size));
    let b_end = b_start.wrapping_add(b_len.wrapping_mul(size));

    if a_start == a_end || b_start == b_end {
        return Overlap::Disjoint;
    }
    if a_start == b_start && a_end == b_end {
        return Overlap::Identical;
    }
    if a_end <= b_start || b_end <= a_start {
        Overlap::Disjoint
    } else {
        Overlap::Partial
    }
}
