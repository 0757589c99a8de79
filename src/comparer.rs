//! Pluggable equality and ordering strategies.
//!
//! Every `_by` operation takes one of these. Closures work directly:
//! `Fn(&T, &T) -> bool` is an [`EqualityComparer`] and
//! `Fn(&T, &T) -> Ordering` is a [`Comparer`].
//!
//! Kernels always call `equals(element, needle)` with the haystack element
//! first, so asymmetric comparers see a stable argument order. Needles are
//! never compared with each other.

use core::cmp::Ordering;

/// Two-argument equality.
pub trait EqualityComparer<T: ?Sized> {
    fn equals(&self, a: &T, b: &T) -> bool;
}

/// Three-way total order.
pub trait Comparer<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Intrinsic equality (`PartialEq`) and ordering (`Ord`).
///
/// Passing this to a `_by` operation yields the same results as the
/// intrinsic-equality form of that operation.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultComparer;

impl<T: PartialEq + ?Sized> EqualityComparer<T> for DefaultComparer {
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

impl<T: Ord + ?Sized> Comparer<T> for DefaultComparer {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: ?Sized, F> EqualityComparer<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

impl<T: ?Sized, F> Comparer<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// ASCII case-insensitive equality and ordering for bytes and chars.
#[derive(Clone, Copy, Debug, Default)]
pub struct IgnoreAsciiCase;

impl EqualityComparer<u8> for IgnoreAsciiCase {
    #[inline]
    fn equals(&self, a: &u8, b: &u8) -> bool {
        a.eq_ignore_ascii_case(b)
    }
}

impl EqualityComparer<char> for IgnoreAsciiCase {
    #[inline]
    fn equals(&self, a: &char, b: &char) -> bool {
        a.eq_ignore_ascii_case(b)
    }
}

impl Comparer<u8> for IgnoreAsciiCase {
    #[inline]
    fn compare(&self, a: &u8, b: &u8) -> Ordering {
        a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase())
    }
}

impl Comparer<char> for IgnoreAsciiCase {
    #[inline]
    fn compare(&self, a: &char, b: &char) -> Ordering {
        a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase())
    }
}

/// Reverses another comparer's order.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReverseOrder<C>(pub C);

impl<T: ?Sized, C: Comparer<T>> Comparer<T> for ReverseOrder<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_comparer_uses_intrinsic_traits() {
        assert!(EqualityComparer::<i32>::equals(&DefaultComparer, &3, &3));
        assert!(!EqualityComparer::<f64>::equals(
            &DefaultComparer,
            &f64::NAN,
            &f64::NAN
        ));
        assert_eq!(
            Comparer::<str>::compare(&DefaultComparer, "a", "b"),
            Ordering::Less
        );
    }

    #[test]
    fn closures_are_comparers() {
        let mod10 = |a: &u32, b: &u32| a % 10 == b % 10;
        assert!(mod10.equals(&13, &23));

        let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
        assert_eq!(by_len.compare(&"abc", &"z"), Ordering::Greater);
    }

    #[test]
    fn ignore_ascii_case() {
        assert!(EqualityComparer::<u8>::equals(&IgnoreAsciiCase, &b'a', &b'A'));
        assert!(EqualityComparer::<char>::equals(&IgnoreAsciiCase, &'Z', &'z'));
        assert!(!EqualityComparer::<char>::equals(&IgnoreAsciiCase, &'é', &'É'));
        assert_eq!(
            Comparer::<u8>::compare(&IgnoreAsciiCase, &b'B', &b'a'),
            Ordering::Greater
        );
    }

    #[test]
    fn reverse_flips_order() {
        let rev = ReverseOrder(DefaultComparer);
        assert_eq!(Comparer::<i32>::compare(&rev, &1, &2), Ordering::Greater);
    }
}
