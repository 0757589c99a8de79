//! Needle sets and duplicate folding.
//!
//! Positional needles (one to four values) and slice needles are normalized
//! into [`Needles`] before any scan. On the intrinsic-equality path
//! [`Needles::fold`] then drops needles that equal an earlier one, so a
//! three-needle query with a duplicate runs the two-needle kernel. Folding only
//! removes redundant comparisons; the set of matching elements is unchanged.
//!
//! Comparer-driven scans never fold: a caller's comparer need not be an
//! equivalence, and comparing two needles with it says nothing about elements.

/// A normalized needle set borrowed from the caller.
#[derive(Debug)]
pub(crate) enum Needles<'a, T> {
    Zero,
    One(&'a T),
    Two(&'a T, &'a T),
    Three(&'a T, &'a T, &'a T),
    Four(&'a T, &'a T, &'a T, &'a T),
    /// Five or more values; scanned with a nested loop, never folded.
    Many(&'a [T]),
}

impl<T> Clone for Needles<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Needles<'_, T> {}

impl<'a, T> Needles<'a, T> {
    /// Positional form for a needle slice of any length.
    #[inline]
    pub(crate) fn from_slice(values: &'a [T]) -> Self {
        match values {
            [] => Self::Zero,
            [a] => Self::One(a),
            [a, b] => Self::Two(a, b),
            [a, b, c] => Self::Three(a, b, c),
            [a, b, c, d] => Self::Four(a, b, c, d),
            _ => Self::Many(values),
        }
    }

    /// Number of needles in this set.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        match self {
            Self::Zero => 0,
            Self::One(..) => 1,
            Self::Two(..) => 2,
            Self::Three(..) => 3,
            Self::Four(..) => 4,
            Self::Many(values) => values.len(),
        }
    }

    /// Drops needles equal to an earlier needle under `eq`.
    ///
    /// The first occurrence is kept, so the relative order of distinct
    /// needles is preserved.
    pub(crate) fn fold<E>(self, eq: E) -> Self
    where
        E: Fn(&T, &T) -> bool,
    {
        let folded = self.fold_pairs(&eq);
        if folded.len() != self.len() {
            crate::perf::record_fold();
        }
        folded
    }

    fn fold_pairs<E>(self, eq: &E) -> Self
    where
        E: Fn(&T, &T) -> bool,
    {
        match self {
            Self::Two(a, b) if eq(a, b) => Self::One(a),
            Self::Three(a, b, c) => {
                if eq(a, b) {
                    Self::Two(a, c).fold_pairs(eq)
                } else if eq(a, c) || eq(b, c) {
                    Self::Two(a, b)
                } else {
                    self
                }
            }
            Self::Four(a, b, c, d) => {
                if eq(a, b) {
                    Self::Three(a, c, d).fold_pairs(eq)
                } else if eq(a, c) || eq(b, c) {
                    Self::Three(a, b, d).fold_pairs(eq)
                } else if eq(a, d) || eq(b, d) || eq(c, d) {
                    Self::Three(a, b, c)
                } else {
                    self
                }
            }
            other => other,
        }
    }

    /// Applies `f` to every needle, preserving the variant.
    #[inline]
    pub(crate) fn map<'b, U>(
        self,
        f: impl Fn(&'a T) -> &'b U,
        many: impl FnOnce(&'a [T]) -> &'b [U],
    ) -> Needles<'b, U> {
        match self {
            Self::Zero => Needles::Zero,
            Self::One(a) => Needles::One(f(a)),
            Self::Two(a, b) => Needles::Two(f(a), f(b)),
            Self::Three(a, b, c) => Needles::Three(f(a), f(b), f(c)),
            Self::Four(a, b, c, d) => Needles::Four(f(a), f(b), f(c), f(d)),
            Self::Many(values) => Needles::Many(many(values)),
        }
    }
}
