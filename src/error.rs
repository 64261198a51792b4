//! Defines [`WkbError`], representing all errors returned by this crate.

use thiserror::Error;

use crate::common::GeometryKind;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum WkbError {
    /// The type code does not resolve to any known geometry kind.
    #[error("Geometry type code not supported: {0}")]
    UnsupportedCode(u32),

    /// The header names an abstract geometry kind.
    #[error("Unexpected geometry type of {0} which is abstract")]
    AbstractTypeInstantiation(GeometryKind),

    /// The decoded geometry kind does not satisfy the kind the caller asked for.
    #[error("Unexpected geometry type. Expected: {expected}, Actual: {actual}")]
    TypeMismatch {
        /// The kind the caller declared
        expected: GeometryKind,
        /// The kind found in the buffer
        actual: GeometryKind,
    },

    /// A read required more bytes than remain in the buffer.
    #[error("Truncated input at offset {offset}: needed {needed} bytes, {remaining} remain")]
    TruncatedInput {
        /// Position of the failed read
        offset: usize,
        /// Bytes the read needed
        needed: usize,
        /// Bytes left in the buffer
        remaining: usize,
    },

    /// Geometry nesting is deeper than [`ReaderOptions::max_depth`](crate::ReaderOptions).
    #[error("Geometry nesting exceeds the maximum depth of {0}")]
    DepthExceeded(usize),

    /// Incorrect geometry type for operation
    #[error("Incorrect geometry type for operation: {0}")]
    IncorrectGeometryType(String),
}

/// Crate-specific result type.
pub type WkbResult<T> = std::result::Result<T, WkbError>;
