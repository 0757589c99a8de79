//! Type-specialized search and comparison primitives over contiguous slices.
//!
//! ## Scope
//! First/last index of a value, of any of several values, of any value
//! *except* several values, of a subsequence, and of a value inside or outside
//! an inclusive range; occurrence counting; replace; common prefix length and
//! ordinal comparison. All of it is exposed as methods of [`MemoryExt`] on
//! `[T]`.
//!
//! ## Key invariants
//! - Scalar semantics are the contract. The bitwise fast path never changes a
//!   result, only how it is computed.
//! - Not-found is `None`, never a sentinel index.
//! - Preconditions (null range bounds, short destinations, overlapping
//!   ranges) are checked before any scan or write and reported as
//!   [`SpanError`].
//!
//! ## Dispatch
//! Each element type carries a compile-time [`BitwiseClass`]. Types whose
//! equality is raw bit equality of width 1, 2, 4 or 8 bytes are searched as
//! integer words (`memchr`/`memmem` for bytes); everything else, and every
//! operation given a custom comparer, runs element by element. Duplicate
//! needles are folded before a multi-needle scan.
//!
//! ## Notable entry points
//! - [`MemoryExt`]: the operations.
//! - [`SpanElement`]: opt-in for element types, with the bitwise class.
//! - [`EqualityComparer`] / [`Comparer`]: injected equality and order.
//! - [`SearchValues`]: precomputed needle sets.
//! - [`reinterpret`]: checked word and byte views of bitwise slices.
//! - [`perf`]: dispatch counters (feature `span-perf`).

pub mod perf;
pub mod stdx;
#[cfg(test)]
pub mod test_utils;
pub mod util;

mod comparer;
mod dispatch;
mod element;
mod error;
mod ext;
mod kernels;
mod needles;
mod packed;
mod search_values;

pub use comparer::{Comparer, DefaultComparer, EqualityComparer, IgnoreAsciiCase, ReverseOrder};
pub use element::{BitwiseClass, SpanElement, Width};
pub use error::SpanError;
pub use ext::MemoryExt;
pub use perf::SpanPerfStats;
pub use search_values::SearchValues;
pub use util::reinterpret;
