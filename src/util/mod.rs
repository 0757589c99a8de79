//! Low-level helpers for viewing element storage as words and bytes.

pub mod reinterpret;

pub use reinterpret::{as_bytes, as_words, as_words_mut, overlap, Overlap, Word};
