//! Error types for the cell crate.

use thiserror::Error;

/// Result type for cell operations.
pub type CellResult<T> = Result<T, CellError>;

/// Errors raised while constructing cells and tags.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CellError {
    /// Row key is longer than a cell can address.
    #[error("row length {length} exceeds maximum {max}")]
    RowTooLong {
        /// Actual row length in bytes.
        length: usize,
        /// Largest permitted row length.
        max: usize,
    },

    /// Family name is longer than a cell can address.
    #[error("family length {length} exceeds maximum {max}")]
    FamilyTooLong {
        /// Actual family length in bytes.
        length: usize,
        /// Largest permitted family length.
        max: usize,
    },

    /// A single tag payload is too large.
    #[error("tag length {length} exceeds maximum {max}")]
    TagTooLong {
        /// Length of type byte plus payload.
        length: usize,
        /// Largest permitted tag length.
        max: usize,
    },

    /// The serialized tag list of one cell is too large.
    #[error("total tags length {length} exceeds maximum {max}")]
    TagsTooLong {
        /// Serialized length of all tags.
        length: usize,
        /// Largest permitted total.
        max: usize,
    },
}
