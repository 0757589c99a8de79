#![no_main]

use libfuzzer_sys::fuzz_target;

use span_scan::{MemoryExt, SearchValues, SpanElement};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Plain(u8);
impl SpanElement for Plain {}

// Runs every search primitive on the byte fast path and on the general path
// (`Plain`, same values without the bitwise class) and requires identical
// answers.
//
// Byte layout:
// - Byte 0 → needle count (mod 8)
// - Next `count` bytes → needles
// - Remaining bytes → haystack
fuzz_target!(|data: &[u8]| {
    let Some((&count, rest)) = data.split_first() else {
        return;
    };
    let count = (count as usize % 8).min(rest.len());
    let (needles, hay) = rest.split_at(count);

    let g: Vec<Plain> = hay.iter().copied().map(Plain).collect();
    let gn: Vec<Plain> = needles.iter().copied().map(Plain).collect();

    assert_eq!(hay.index_of_any(needles), g.index_of_any(&gn), "index_of_any");
    assert_eq!(
        hay.last_index_of_any(needles),
        g.last_index_of_any(&gn),
        "last_index_of_any"
    );
    assert_eq!(
        hay.index_of_any_except(needles),
        g.index_of_any_except(&gn),
        "index_of_any_except"
    );
    assert_eq!(
        hay.last_index_of_any_except(needles),
        g.last_index_of_any_except(&gn),
        "last_index_of_any_except"
    );
    assert_eq!(hay.index_of_seq(needles), g.index_of_seq(&gn), "index_of_seq");
    assert_eq!(
        hay.last_index_of_seq(needles),
        g.last_index_of_seq(&gn),
        "last_index_of_seq"
    );
    assert_eq!(hay.count_seq(needles), g.count_seq(&gn), "count_seq");
    assert_eq!(hay.count_any(needles), g.count_any(&gn), "count_any");
    assert_eq!(
        hay.common_prefix_len(needles),
        g.common_prefix_len(&gn),
        "common_prefix_len"
    );

    let set = SearchValues::new(needles);
    assert_eq!(hay.index_of_any_values(&set), g.index_of_any(&gn), "values");
    assert_eq!(hay.count_any_values(&set), g.count_any(&gn), "count_values");

    if let Some(&v) = needles.first() {
        assert_eq!(hay.index_of(&v), g.index_of(&Plain(v)), "index_of");
        assert_eq!(hay.last_index_of(&v), g.last_index_of(&Plain(v)), "last_index_of");
        assert_eq!(hay.count(&v), g.count(&Plain(v)), "count");
    }
});
