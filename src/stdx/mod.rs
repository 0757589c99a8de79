//! Small, self-contained data structures used across the crate.

pub mod byte_set;

pub use byte_set::{ByteSet, ByteSetIter};
