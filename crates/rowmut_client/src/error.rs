//! Error types for mutation building.

use rowmut_cell::CellError;
use thiserror::Error;

/// Result type for mutation operations.
pub type MutationResult<T> = Result<T, MutationError>;

/// Errors raised while building or validating a mutation.
///
/// All of these are caller errors. The call that produced one has left the
/// mutation exactly as it was.
#[derive(Debug, Error)]
pub enum MutationError {
    /// Column family was empty.
    #[error("family cannot be empty")]
    MissingFamily,

    /// Timestamp was negative.
    #[error("timestamp cannot be negative: ts={timestamp}")]
    NegativeTimestamp {
        /// The rejected timestamp.
        timestamp: i64,
    },

    /// Row key was empty or too long.
    #[error("invalid row: {message}")]
    InvalidRow {
        /// Why the row was rejected.
        message: String,
    },

    /// A pre-built cell belongs to another row.
    #[error("cell row {cell_row} does not match mutation row {mutation_row}")]
    RowMismatch {
        /// Printable form of the cell's row.
        cell_row: String,
        /// Printable form of the mutation's row.
        mutation_row: String,
    },

    /// Time to live was negative.
    #[error("ttl cannot be negative: ttl={ttl}")]
    NegativeTtl {
        /// The rejected TTL in milliseconds.
        ttl: i64,
    },

    /// A side-channel attribute holds bytes that do not decode.
    #[error("malformed attribute {name}: {message}")]
    InvalidAttribute {
        /// Attribute name.
        name: String,
        /// What is wrong with it.
        message: String,
    },

    /// Mutation carries no cells.
    #[error("no columns to insert")]
    NoColumns,

    /// A cell exceeds the configured size limit.
    #[error("cell size too large: {size} > {max}")]
    CellTooLarge {
        /// Serialized size of the offending cell.
        size: usize,
        /// Configured maximum.
        max: usize,
    },

    /// Cell construction failed.
    #[error("cell error: {0}")]
    Cell(#[from] CellError),

    /// JSON encoding of an attribute or summary failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MutationError {
    /// Creates an invalid row error.
    pub fn invalid_row(message: impl Into<String>) -> Self {
        Self::InvalidRow {
            message: message.into(),
        }
    }

    /// Creates an invalid attribute error.
    pub fn invalid_attribute(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidAttribute {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Returns true for errors caused by a bad argument to a builder call.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::MissingFamily
                | Self::NegativeTimestamp { .. }
                | Self::InvalidRow { .. }
                | Self::RowMismatch { .. }
                | Self::NegativeTtl { .. }
                | Self::Cell(_)
        )
    }
}
