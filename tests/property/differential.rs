//! The bitwise fast path against the general path.
//!
//! `Plain<T>` wraps a bitwise type without marking it bitwise, so the same
//! values run through the comparer-driven kernels. Every operation must
//! agree.

use std::cmp::Ordering;

use proptest::prelude::*;

use span_scan::{DefaultComparer, MemoryExt, SearchValues, SpanElement};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Plain<T>(T);

impl<T: PartialEq> SpanElement for Plain<T> {}

fn plain<T: Copy>(s: &[T]) -> Vec<Plain<T>> {
    s.iter().copied().map(Plain).collect()
}

fn check_all<T>(hay: &[T], needles: &[T], v: T) -> Result<(), TestCaseError>
where
    T: SpanElement + Copy + Ord + std::fmt::Debug,
{
    let g = plain(hay);
    let gn = plain(needles);
    let gv = Plain(v);

    prop_assert_eq!(hay.index_of(&v), g.index_of(&gv));
    prop_assert_eq!(hay.last_index_of(&v), g.last_index_of(&gv));
    prop_assert_eq!(hay.count(&v), g.count(&gv));

    prop_assert_eq!(hay.index_of_any(needles), g.index_of_any(&gn));
    prop_assert_eq!(hay.last_index_of_any(needles), g.last_index_of_any(&gn));
    prop_assert_eq!(hay.index_of_any_except(needles), g.index_of_any_except(&gn));
    prop_assert_eq!(
        hay.last_index_of_any_except(needles),
        g.last_index_of_any_except(&gn)
    );
    prop_assert_eq!(hay.count_any(needles), g.count_any(&gn));

    prop_assert_eq!(hay.index_of_seq(needles), g.index_of_seq(&gn));
    prop_assert_eq!(hay.last_index_of_seq(needles), g.last_index_of_seq(&gn));
    prop_assert_eq!(hay.count_seq(needles), g.count_seq(&gn));

    prop_assert_eq!(hay.common_prefix_len(needles), g.common_prefix_len(&gn));
    prop_assert_eq!(hay.sequence_equal(needles), g.sequence_equal(&gn));
    prop_assert_eq!(hay.sequence_compare_to(needles), g.sequence_compare_to(&gn));

    let set = SearchValues::new(needles);
    prop_assert_eq!(hay.index_of_any_values(&set), g.index_of_any(&gn));
    prop_assert_eq!(
        hay.last_index_of_any_except_values(&set),
        g.last_index_of_any_except(&gn)
    );
    prop_assert_eq!(hay.count_any_values(&set), g.count_any(&gn));

    let new = needles.first().copied().unwrap_or(v);
    let mut fast = hay.to_vec();
    fast.replace_in_place(&v, &new);
    let mut general = g.clone();
    general.replace_in_place(&gv, &Plain(new));
    prop_assert_eq!(plain(&fast), general);
    Ok(())
}

fn check_positional<T>(hay: &[T], a: T, b: T, c: T, d: T) -> Result<(), TestCaseError>
where
    T: SpanElement + Copy + std::fmt::Debug,
{
    prop_assert_eq!(hay.index_of_any2(&a, &b), hay.index_of_any(&[a, b]));
    prop_assert_eq!(hay.last_index_of_any2(&a, &b), hay.last_index_of_any(&[a, b]));
    prop_assert_eq!(hay.index_of_any3(&a, &b, &c), hay.index_of_any(&[a, b, c]));
    prop_assert_eq!(
        hay.last_index_of_any3(&a, &b, &c),
        hay.last_index_of_any(&[a, b, c])
    );
    prop_assert_eq!(hay.index_of_any_except1(&a), hay.index_of_any_except(&[a]));
    prop_assert_eq!(
        hay.index_of_any_except4(&a, &b, &c, &d),
        hay.index_of_any_except(&[a, b, c, d])
    );
    prop_assert_eq!(
        hay.last_index_of_any_except3(&a, &b, &c),
        hay.last_index_of_any_except(&[a, b, c])
    );
    prop_assert_eq!(
        hay.index_of_any_by(&[a, b, c, d], &DefaultComparer),
        hay.index_of_any(&[a, b, c, d])
    );
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn bytes(
        hay in prop::collection::vec(0u8..6, 0..96),
        needles in prop::collection::vec(0u8..6, 0..7),
        v in 0u8..6,
    ) {
        check_all(&hay, &needles, v)?;
    }

    #[test]
    fn signed_bytes(
        hay in prop::collection::vec(-3i8..3, 0..64),
        needles in prop::collection::vec(-3i8..3, 0..7),
        v in -3i8..3,
    ) {
        check_all(&hay, &needles, v)?;
    }

    #[test]
    fn halfwords(
        hay in prop::collection::vec(prop_oneof![0u16..4, Just(0xff00u16), Just(0x00ffu16)], 0..64),
        needles in prop::collection::vec(0u16..4, 0..7),
        v in 0u16..4,
    ) {
        check_all(&hay, &needles, v)?;
    }

    #[test]
    fn chars(
        hay in prop::collection::vec(prop::char::range('a', 'e'), 0..64),
        needles in prop::collection::vec(prop::char::range('a', 'e'), 0..7),
        v in prop::char::range('a', 'e'),
    ) {
        check_all(&hay, &needles, v)?;
    }

    #[test]
    fn signed_words(
        hay in prop::collection::vec(-3i64..3, 0..64),
        needles in prop::collection::vec(-3i64..3, 0..7),
        v in -3i64..3,
    ) {
        check_all(&hay, &needles, v)?;
    }

    #[test]
    fn positional_matches_slice_forms(
        hay in prop::collection::vec(0u32..8, 0..64),
        (a, b, c, d) in (0u32..8, 0u32..8, 0u32..8, 0u32..8),
    ) {
        check_positional(&hay, a, b, c, d)?;
        check_positional(&plain(&hay), Plain(a), Plain(b), Plain(c), Plain(d))?;
    }

    #[test]
    fn ordinal_compare_matches_slice_ord(
        a in prop::collection::vec(-2i16..2, 0..12),
        b in prop::collection::vec(-2i16..2, 0..12),
    ) {
        prop_assert_eq!(a.sequence_compare_to(&b), a.as_slice().cmp(b.as_slice()));
        prop_assert_eq!(
            a.sequence_compare_to_by(&b, &|x: &i16, y: &i16| x.cmp(y)),
            a.cmp(&b)
        );
        prop_assert_eq!(a.sequence_equal(&b), a.sequence_compare_to(&b) == Ordering::Equal);
    }
}
