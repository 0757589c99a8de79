//! Element classification for the bitwise fast path.
//!
//! Every element type searched with intrinsic equality implements
//! [`SpanElement`]. The associated constant [`SpanElement::CLASS`] records,
//! per type and at compile time, whether equality on that type is exactly
//! equality of its bit pattern and, if so, which integer word can stand in
//! for it. Dispatch code matches on `T::CLASS.width()`; since the value is a
//! constant of the monomorphized function, the untaken arms are dead code.
//!
//! # Invariants
//! - A class is bitwise only if it was produced by the `unsafe`
//!   [`BitwiseClass::bitwise`] constructor.
//! - A bitwise class always has `size_of::<T>() == width.bytes()` and
//!   `align_of::<T>() >= align_of::<word>()`; layouts that fail this are
//!   silently classified as general.
//!
//! User types opt in with an empty impl (general path):
//!
//! ```
//! use span_scan::{MemoryExt, SpanElement};
//!
//! #[derive(PartialEq)]
//! struct Token(&'static str);
//! impl SpanElement for Token {}
//!
//! let tokens = [Token("let"), Token("x"), Token("=")];
//! assert_eq!(tokens.index_of(&Token("x")), Some(1));
//! ```

use core::fmt;
use core::marker::PhantomData;
use core::mem::{align_of, size_of};

/// Width of the integer word a bitwise element is reinterpreted as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Width {
    One,
    Two,
    Four,
    Eight,
}

impl Width {
    /// Size of the word in bytes.
    #[inline]
    pub const fn bytes(self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Four => 4,
            Self::Eight => 8,
        }
    }

    /// Picks the word for a layout, or `None` if no word can back it.
    const fn for_layout(size: usize, align: usize) -> Option<Self> {
        match size {
            1 => Some(Self::One),
            2 if align >= align_of::<u16>() => Some(Self::Two),
            4 if align >= align_of::<u32>() => Some(Self::Four),
            8 if align >= align_of::<u64>() => Some(Self::Eight),
            _ => None,
        }
    }
}

/// Compile-time classification of `T`: general, or bitwise with a word width.
pub struct BitwiseClass<T> {
    width: Option<Width>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> BitwiseClass<T> {
    /// Equality goes through `PartialEq` (or a comparer). Always safe.
    pub const GENERAL: Self = Self {
        width: None,
        _marker: PhantomData,
    };

    /// Classifies `T` as bitwise-equatable.
    ///
    /// If `T`'s layout cannot be backed by a 1/2/4/8-byte word of compatible
    /// alignment the result is [`GENERAL`](Self::GENERAL) instead.
    ///
    /// # Safety
    ///
    /// - `T` has no padding bytes and every byte of a valid value is initialized.
    /// - For all values `a`, `b`: `a == b` exactly when their bytes are equal.
    /// - Any byte pattern copied from a valid `T` is a valid `T` (fast paths
    ///   write whole words taken from existing values).
    pub const unsafe fn bitwise() -> Self {
        Self {
            width: Width::for_layout(size_of::<T>(), align_of::<T>()),
            _marker: PhantomData,
        }
    }

    /// Word width for the fast path, or `None` for the general path.
    #[inline]
    pub const fn width(self) -> Option<Width> {
        self.width
    }

    #[inline]
    pub const fn is_bitwise(self) -> bool {
        self.width.is_some()
    }
}

impl<T> Clone for BitwiseClass<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for BitwiseClass<T> {}

impl<T> fmt::Debug for BitwiseClass<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.width {
            Some(width) => write!(f, "BitwiseClass::Bitwise({width:?})"),
            None => f.write_str("BitwiseClass::General"),
        }
    }
}

/// An element type searchable with its intrinsic equality.
///
/// The provided defaults put a type on the general path with no null value.
pub trait SpanElement: PartialEq + Sized {
    /// Fast-path classification; see [`BitwiseClass`].
    const CLASS: BitwiseClass<Self> = BitwiseClass::GENERAL;

    /// Returns `true` for the null value of a nullable type.
    ///
    /// Range queries reject null bounds.
    #[inline]
    fn is_null(&self) -> bool {
        false
    }
}

macro_rules! bitwise_elements {
    ($($t:ty),* $(,)?) => {
        $(
            impl SpanElement for $t {
                // SAFETY: primitive integers, `bool` and `char` have no padding,
                // compare by value bits, and are only ever rewritten with words
                // copied from other values of the same type.
                const CLASS: BitwiseClass<Self> = unsafe { BitwiseClass::bitwise() };
            }
        )*
    };
}

bitwise_elements!(u8, i8, bool, u16, i16, u32, i32, char, u64, i64, usize, isize);

macro_rules! general_elements {
    ($($t:ty),* $(,)?) => {
        $( impl SpanElement for $t {} )*
    };
}

// Floats: `NaN != NaN` and `0.0 == -0.0`, so bit equality is wrong.
general_elements!(f32, f64, u128, i128, String);

impl SpanElement for &str {}

impl<U: PartialEq> SpanElement for Vec<U> {}

impl<U: PartialEq, const N: usize> SpanElement for [U; N] {}

impl<U: PartialEq> SpanElement for Box<U> {}

impl<A: PartialEq, B: PartialEq> SpanElement for (A, B) {}

/// `Option<U>` is the nullable wrapper: `None` is its null value.
impl<U: PartialEq> SpanElement for Option<U> {
    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_widths() {
        assert_eq!(u8::CLASS.width(), Some(Width::One));
        assert_eq!(i8::CLASS.width(), Some(Width::One));
        assert_eq!(bool::CLASS.width(), Some(Width::One));
        assert_eq!(u16::CLASS.width(), Some(Width::Two));
        assert_eq!(i16::CLASS.width(), Some(Width::Two));
        assert_eq!(u32::CLASS.width(), Some(Width::Four));
        assert_eq!(char::CLASS.width(), Some(Width::Four));
        assert_eq!(i64::CLASS.width(), Some(Width::Eight));
        assert_eq!(
            usize::CLASS.width().map(Width::bytes),
            Some(size_of::<usize>())
        );
    }

    #[test]
    fn general_types_have_no_width() {
        assert!(!f32::CLASS.is_bitwise());
        assert!(!f64::CLASS.is_bitwise());
        assert!(!u128::CLASS.is_bitwise());
        assert!(!String::CLASS.is_bitwise());
        assert!(!<Option<u8>>::CLASS.is_bitwise());
    }

    #[test]
    fn under_aligned_layout_falls_back_to_general() {
        #[derive(Clone, Copy, PartialEq)]
        #[repr(C)]
        struct Pair([u8; 2]);
        impl SpanElement for Pair {
            // SAFETY: two plain bytes, no padding, byte equality.
            const CLASS: BitwiseClass<Self> = unsafe { BitwiseClass::bitwise() };
        }

        assert_eq!(Pair::CLASS.width(), None);
    }

    #[test]
    fn option_none_is_null() {
        assert!(None::<i32>.is_null());
        assert!(!Some(0).is_null());
        assert!(!0i32.is_null());
    }

    #[test]
    fn debug_names_the_class() {
        assert_eq!(format!("{:?}", u16::CLASS), "BitwiseClass::Bitwise(Two)");
        assert_eq!(format!("{:?}", f32::CLASS), "BitwiseClass::General");
    }
}
