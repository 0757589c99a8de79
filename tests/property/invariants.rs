//! Algebraic properties of the search, count, replace and prefix operations.

use proptest::prelude::*;

use span_scan::MemoryExt;

fn hay() -> impl Strategy<Value = Vec<u16>> {
    prop::collection::vec(0u16..8, 0..64)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn index_of_is_the_first_match(s in hay(), v in 0u16..8) {
        let found = s.index_of(&v);
        prop_assert_eq!(found.is_some(), s.contains_value(&v));
        if let Some(i) = found {
            prop_assert_eq!(s[i], v);
            prop_assert!(!s[..i].contains(&v));
        }
    }

    #[test]
    fn last_not_before_first(s in hay(), v in 0u16..8) {
        if let (Some(first), Some(last)) = (s.index_of(&v), s.last_index_of(&v)) {
            prop_assert!(last >= first);
            prop_assert_eq!(first == last, s.count(&v) == 1);
        }
    }

    #[test]
    fn except_one_fails_only_on_uniform_input(s in hay(), v in 0u16..8) {
        prop_assert_eq!(s.index_of_any_except1(&v).is_none(), s.iter().all(|&x| x == v));
    }

    #[test]
    fn needle_order_and_duplicates_do_not_matter(s in hay(), a in 0u16..8, b in 0u16..8) {
        prop_assert_eq!(s.index_of_any2(&a, &b), s.index_of_any2(&b, &a));
        prop_assert_eq!(s.index_of_any3(&a, &a, &b), s.index_of_any2(&a, &b));
        prop_assert_eq!(s.last_index_of_any3(&b, &a, &b), s.last_index_of_any2(&a, &b));
        prop_assert_eq!(
            s.index_of_any_except(&[a, b, a, b, a]),
            s.index_of_any_except2(&a, &b)
        );
    }

    #[test]
    fn count_matches_filter(s in hay(), v in 0u16..8) {
        let n = s.count(&v);
        prop_assert_eq!(n, s.iter().filter(|&&x| x == v).count());
        prop_assert_eq!(n == 0, !s.contains_value(&v));
    }

    #[test]
    fn prefix_bounds(s in hay(), t in hay()) {
        prop_assert_eq!(s.common_prefix_len(&s), s.len());
        let p = s.common_prefix_len(&t);
        prop_assert!(p <= s.len().min(t.len()));
        prop_assert_eq!(&s[..p], &t[..p]);
        if p < s.len().min(t.len()) {
            prop_assert_ne!(s[p], t[p]);
        }
        if s.is_empty() != t.is_empty() {
            prop_assert_eq!(p, 0);
        }
    }

    #[test]
    fn replace_round_trips(s in prop::collection::vec(0u16..4, 0..64), old in 0u16..4) {
        // `new` is outside the value domain, so it never occurs in `s`.
        let new = 100u16;
        let mut out = vec![0; s.len()];
        s.replace(&mut out, &old, &new).unwrap();
        prop_assert!(!out.contains(&old));
        let mut back = vec![0; out.len()];
        out.replace(&mut back, &new, &old).unwrap();
        prop_assert_eq!(back, s);
    }

    #[test]
    fn inverted_range_is_empty(s in hay(), lo in 0u16..8, hi in 0u16..8) {
        prop_assume!(lo > hi);
        prop_assert_eq!(s.index_of_any_in_range(&lo, &hi), Ok(None));
        prop_assert_eq!(s.last_index_of_any_in_range(&lo, &hi), Ok(None));
        prop_assert_eq!(
            s.index_of_any_except_in_range(&lo, &hi),
            Ok(if s.is_empty() { None } else { Some(0) })
        );
    }

    #[test]
    fn count_seq_is_non_overlapping(s in prop::collection::vec(0u16..2, 0..48), k in 1usize..4) {
        let needle = vec![0u16; k];
        let mut expected = 0;
        let mut i = 0;
        while i + k <= s.len() {
            if s[i..i + k] == needle[..] {
                expected += 1;
                i += k;
            } else {
                i += 1;
            }
        }
        prop_assert_eq!(s.count_seq(&needle), expected);
    }
}
