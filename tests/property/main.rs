//! Property-based tests for the span primitives.
//!
//! Run with: `cargo test --test property`

mod differential;
mod invariants;
