//! Error type for span operations with caller-supplied preconditions.
//!
//! Only three things can go wrong, and all of them are detected before a scan
//! starts or a destination byte is written:
//! - a range bound is the null value of a nullable element type,
//! - a destination (or source range) is too small,
//! - source and destination partially overlap inside one buffer.
//!
//! Not-found is never an error; it is `None`, `false` or `0`.
//!
//! The enum is `#[non_exhaustive]`; match with a fallback arm.

use std::fmt;
use std::ops::Range;

/// Precondition violations reported by span operations.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum SpanError {
    /// A required range bound is null (`None` for `Option<T>` elements).
    NullArgument {
        /// Parameter name of the offending bound.
        param: &'static str,
    },
    /// Destination shorter than the source, or a source range out of bounds.
    InvalidSize { needed: usize, available: usize },
    /// Source and destination share some, but not all, of their storage.
    InvalidOverlap { src: Range<usize>, dst: Range<usize> },
}

impl SpanError {
    /// Creates a null-argument error for `param`.
    #[inline]
    pub fn null_argument(param: &'static str) -> Self {
        Self::NullArgument { param }
    }

    /// Returns the parameter name for `NullArgument`, `None` otherwise.
    #[inline]
    pub fn param_name(&self) -> Option<&'static str> {
        match self {
            Self::NullArgument { param } => Some(param),
            _ => None,
        }
    }
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullArgument { param } => write!(f, "value cannot be null: {param}"),
            Self::InvalidSize { needed, available } => {
                write!(
                    f,
                    "destination too short: need {needed} elements, have {available}"
                )
            }
            Self::InvalidOverlap { src, dst } => {
                write!(
                    f,
                    "source {}..{} partially overlaps destination {}..{}",
                    src.start, src.end, dst.start, dst.end
                )
            }
        }
    }
}

impl std::error::Error for SpanError {}
