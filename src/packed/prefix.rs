//! Byte-level common prefix length.

/// Length of the common prefix of two byte strings.
///
/// Compares four bytes per step and locates the first differing byte from the
/// XOR of the two chunks. Chunks are read little-endian so the lowest set bit
/// belongs to the lowest address.
pub(crate) fn common_prefix_bytes(a: &[u8], b: &[u8]) -> usize {
    let len = a.len().min(b.len());
    let (a, b) = (&a[..len], &b[..len]);

    let mut matched = 0;
    for (x, y) in a.chunks_exact(4).zip(b.chunks_exact(4)) {
        let diff = u32::from_le_bytes([x[0], x[1], x[2], x[3]])
            ^ u32::from_le_bytes([y[0], y[1], y[2], y[3]]);
        if diff != 0 {
            return matched + (diff.trailing_zeros() / 8) as usize;
        }
        matched += 4;
    }

    matched
        + a[matched..]
            .iter()
            .zip(&b[matched..])
            .take_while(|(x, y)| x == y)
            .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const PROPTEST_CASES: u32 = 64;

    #[test]
    fn locates_first_difference() {
        assert_eq!(common_prefix_bytes(b"", b"abc"), 0);
        assert_eq!(common_prefix_bytes(b"abcdefgh", b"abcdefgh"), 8);
        assert_eq!(common_prefix_bytes(b"abcdefgh", b"abcdXfgh"), 4);
        assert_eq!(common_prefix_bytes(b"abcdefgh", b"abcdefgX"), 7);
        assert_eq!(common_prefix_bytes(b"abcdefghij", b"abcdefghi"), 9);
        assert_eq!(common_prefix_bytes(b"Xbc", b"abc"), 0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(
            crate::test_utils::proptest_cases(PROPTEST_CASES)
        ))]

        #[test]
        fn matches_bytewise_scan(
            a in prop::collection::vec(0u8..3, 0..40),
            b in prop::collection::vec(0u8..3, 0..40),
        ) {
            let expected = a.iter().zip(&b).take_while(|(x, y)| x == y).count();
            prop_assert_eq!(common_prefix_bytes(&a, &b), expected);
        }
    }
}
