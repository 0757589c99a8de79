#![no_main]

use libfuzzer_sys::fuzz_target;

use span_scan::{MemoryExt, SpanError};

// Drives `replace_within` with arbitrary ranges over a small buffer and checks
// the outcome against an index-range model: errors leave the buffer intact,
// successes match a copy-then-replace reference.
//
// Byte layout:
// - Bytes 0..4 → src start, src end, dst start, old value
// - Remaining bytes → buffer (as `u16`, one byte each)
fuzz_target!(|data: &[u8]| {
    let [start, end, dst_start, old, buf @ ..] = data else {
        return;
    };
    let (start, end, dst_start) = (*start as usize, *end as usize, *dst_start as usize);
    let old = u16::from(*old);
    let new = u16::MAX;
    let mut buf: Vec<u16> = buf.iter().copied().map(u16::from).collect();
    let before = buf.clone();

    match buf.replace_within(start..end, dst_start, &old, &new) {
        Ok(()) => {
            let len = end - start;
            let mut expected = before.clone();
            for i in 0..len {
                let x = before[start + i];
                expected[dst_start + i] = if x == old { new } else { x };
            }
            assert_eq!(buf, expected);
        }
        Err(SpanError::InvalidSize { .. }) => {
            assert!(start > end || end > before.len() || dst_start + (end - start) > before.len());
            assert_eq!(buf, before);
        }
        Err(SpanError::InvalidOverlap { src, dst }) => {
            assert!(src != dst && src.start < dst.end && dst.start < src.end);
            assert_eq!(buf, before);
        }
        Err(other) => panic!("unexpected error: {other}"),
    }
});
