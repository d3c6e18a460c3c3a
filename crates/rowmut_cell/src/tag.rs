//! Typed cell annotations.

use crate::error::{CellError, CellResult};
use bytes::Bytes;
use std::fmt;

/// Size of the length prefix written in front of each serialized tag.
pub const TAG_LENGTH_SIZE: usize = 2;

/// Size of the type code of a serialized tag.
pub const TAG_TYPE_SIZE: usize = 1;

/// Largest value of type byte plus payload for a single tag.
pub const MAX_TAG_LENGTH: usize = 2 * (i16::MAX as usize) + 1 - TAG_LENGTH_SIZE;

/// Well-known tag type codes.
pub mod tag_types {
    /// Per-cell access control list.
    pub const ACL: u8 = 1;
    /// Visibility label expression.
    pub const VISIBILITY: u8 = 2;
    /// Visibility expression attached to a delete.
    pub const VISIBILITY_DELETE: u8 = 3;
    /// Serialization format marker for visibility expressions.
    pub const VISIBILITY_EXP_SERIALIZATION_FORMAT: u8 = 4;
    /// Visibility expression stored as a plain string.
    pub const STRING_VISIBILITY: u8 = 7;
    /// Per-cell time to live, in milliseconds.
    pub const TTL: u8 = 8;
}

/// A small typed binary annotation attached to a cell.
///
/// Tags are immutable once built; cloning shares the payload.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    tag_type: u8,
    value: Bytes,
}

impl Tag {
    /// Creates a tag from a type code and payload.
    ///
    /// The payload is taken over without copying when it is already [`Bytes`].
    pub fn new(tag_type: u8, value: impl Into<Bytes>) -> CellResult<Self> {
        let value = value.into();
        let length = value.len() + TAG_TYPE_SIZE;
        if length > MAX_TAG_LENGTH {
            return Err(CellError::TagTooLong {
                length,
                max: MAX_TAG_LENGTH,
            });
        }
        Ok(Self { tag_type, value })
    }

    /// Creates a tag whose payload is the UTF-8 encoding of `text`.
    pub fn text(tag_type: u8, text: &str) -> CellResult<Self> {
        Self::new(tag_type, Bytes::copy_from_slice(text.as_bytes()))
    }

    /// Returns the type code.
    #[inline]
    #[must_use]
    pub fn tag_type(&self) -> u8 {
        self.tag_type
    }

    /// Returns the payload.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &Bytes {
        &self.value
    }

    /// Returns the number of bytes this tag occupies when serialized.
    #[must_use]
    pub fn serialized_len(&self) -> usize {
        TAG_LENGTH_SIZE + TAG_TYPE_SIZE + self.value.len()
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tag(type={}, value={})",
            self.tag_type,
            crate::buf::to_string_binary(&self.value)
        )
    }
}
