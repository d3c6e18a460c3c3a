//! The immutable cell type.

use crate::buf::to_string_binary;
use crate::error::{CellError, CellResult};
use crate::tag::Tag;
use bytes::Bytes;
use std::fmt;

/// Longest row key a cell can carry.
pub const MAX_ROW_LENGTH: usize = i16::MAX as usize;

/// Longest column family name a cell can carry.
pub const MAX_FAMILY_LENGTH: usize = i8::MAX as usize;

/// Largest serialized size of the tag list of a single cell.
pub const MAX_TAGS_LENGTH: usize = 2 * (i16::MAX as usize) + 1;

/// Fixed per-key overhead: row length (2), family length (1),
/// timestamp (8) and type (1).
pub const KEY_INFRASTRUCTURE_SIZE: usize = 2 + 1 + 8 + 1;

/// Fixed per-cell overhead: key length (4) and value length (4).
pub const CELL_INFRASTRUCTURE_SIZE: usize = 4 + 4;

/// Length prefix written before a non-empty tag block.
pub const TAGS_LENGTH_SIZE: usize = 2;

/// An immutable unit of (row, family, qualifier, timestamp, value, tags).
///
/// Every component is held as [`Bytes`], so cloning a cell never copies
/// data, and a cell built by [`Cell::from_bytes`] refers to exactly the
/// buffers it was given.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    row: Bytes,
    family: Bytes,
    qualifier: Bytes,
    timestamp: i64,
    value: Bytes,
    tags: Vec<Tag>,
}

impl Cell {
    /// Builds a cell that references the supplied buffers directly.
    pub fn from_bytes(
        row: Bytes,
        family: Bytes,
        qualifier: Bytes,
        timestamp: i64,
        value: Bytes,
        tags: Vec<Tag>,
    ) -> CellResult<Self> {
        check_parameters(&row, &family, &tags)?;
        Ok(Self {
            row,
            family,
            qualifier,
            timestamp,
            value,
            tags,
        })
    }

    /// Builds a cell from borrowed slices, copying every component.
    pub fn copy_from_slices(
        row: &[u8],
        family: &[u8],
        qualifier: &[u8],
        timestamp: i64,
        value: &[u8],
        tags: &[Tag],
    ) -> CellResult<Self> {
        // Check before allocating anything.
        check_parameters(row, family, tags)?;
        Ok(Self {
            row: Bytes::copy_from_slice(row),
            family: Bytes::copy_from_slice(family),
            qualifier: Bytes::copy_from_slice(qualifier),
            timestamp,
            value: Bytes::copy_from_slice(value),
            tags: tags.to_vec(),
        })
    }

    /// Returns the row key.
    #[inline]
    #[must_use]
    pub fn row(&self) -> &Bytes {
        &self.row
    }

    /// Returns the column family.
    #[inline]
    #[must_use]
    pub fn family(&self) -> &Bytes {
        &self.family
    }

    /// Returns the column qualifier.
    #[inline]
    #[must_use]
    pub fn qualifier(&self) -> &Bytes {
        &self.qualifier
    }

    /// Returns the version timestamp.
    #[inline]
    #[must_use]
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Returns the value.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &Bytes {
        &self.value
    }

    /// Returns the attached tags in insertion order.
    #[inline]
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Returns true if this cell addresses `family:qualifier`.
    #[must_use]
    pub fn matches_column(&self, family: &[u8], qualifier: &[u8]) -> bool {
        self.family[..] == *family && self.qualifier[..] == *qualifier
    }

    /// Returns the serialized length of the tag block, excluding its prefix.
    #[must_use]
    pub fn tags_len(&self) -> usize {
        tags_len(&self.tags)
    }

    /// Returns the length of the key portion when serialized.
    #[must_use]
    pub fn key_len(&self) -> usize {
        KEY_INFRASTRUCTURE_SIZE + self.row.len() + self.family.len() + self.qualifier.len()
    }

    /// Estimates how many bytes this cell occupies once serialized.
    ///
    /// Used for client-side size limits; the exact layout belongs to the
    /// transport.
    #[must_use]
    pub fn serialized_size(&self) -> usize {
        let tags = self.tags_len();
        let tag_block = if tags > 0 { TAGS_LENGTH_SIZE + tags } else { 0 };
        CELL_INFRASTRUCTURE_SIZE + self.key_len() + self.value.len() + tag_block
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}:{}/{}/vlen={}/tags={}",
            to_string_binary(&self.row),
            to_string_binary(&self.family),
            to_string_binary(&self.qualifier),
            self.timestamp,
            self.value.len(),
            self.tags.len()
        )
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

fn tags_len(tags: &[Tag]) -> usize {
    tags.iter().map(Tag::serialized_len).sum()
}

fn check_parameters(row: &[u8], family: &[u8], tags: &[Tag]) -> CellResult<()> {
    if row.len() > MAX_ROW_LENGTH {
        return Err(CellError::RowTooLong {
            length: row.len(),
            max: MAX_ROW_LENGTH,
        });
    }
    if family.len() > MAX_FAMILY_LENGTH {
        return Err(CellError::FamilyTooLong {
            length: family.len(),
            max: MAX_FAMILY_LENGTH,
        });
    }
    let length = tags_len(tags);
    if length > MAX_TAGS_LENGTH {
        return Err(CellError::TagsTooLong {
            length,
            max: MAX_TAGS_LENGTH,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::tag_types;

    fn sample() -> Cell {
        Cell::copy_from_slices(b"row", b"cf", b"q", 42, b"value", &[]).unwrap()
    }

    #[test]
    fn accessors() {
        let cell = sample();
        assert_eq!(&cell.row()[..], b"row");
        assert_eq!(&cell.family()[..], b"cf");
        assert_eq!(&cell.qualifier()[..], b"q");
        assert_eq!(cell.timestamp(), 42);
        assert_eq!(&cell.value()[..], b"value");
        assert!(cell.tags().is_empty());
        assert!(cell.matches_column(b"cf", b"q"));
        assert!(!cell.matches_column(b"cf", b"other"));
    }

    #[test]
    fn from_bytes_aliases() {
        let value = Bytes::from_static(b"value");
        let family = Bytes::from_static(b"cf");
        let cell = Cell::from_bytes(
            Bytes::from_static(b"row"),
            family.clone(),
            Bytes::from_static(b"q"),
            1,
            value.clone(),
            Vec::new(),
        )
        .unwrap();
        assert_eq!(cell.value().as_ptr(), value.as_ptr());
        assert_eq!(cell.family().as_ptr(), family.as_ptr());
    }

    #[test]
    fn both_paths_build_equal_cells() {
        let tag = Tag::text(tag_types::TTL, "t").unwrap();
        let copied =
            Cell::copy_from_slices(b"r", b"f", b"q", 7, b"v", std::slice::from_ref(&tag)).unwrap();
        let aliased = Cell::from_bytes(
            Bytes::from_static(b"r"),
            Bytes::from_static(b"f"),
            Bytes::from_static(b"q"),
            7,
            Bytes::from_static(b"v"),
            vec![tag],
        )
        .unwrap();
        assert_eq!(copied, aliased);
    }

    #[test]
    fn serialized_size_without_tags() {
        // 8 + (12 + 3 + 2 + 1) + 5
        assert_eq!(sample().serialized_size(), 31);
    }

    #[test]
    fn serialized_size_with_tags() {
        let tag = Tag::text(1, "tag1").unwrap();
        let cell = Cell::copy_from_slices(b"row", b"cf", b"q", 42, b"value", &[tag]).unwrap();
        assert_eq!(cell.tags_len(), 7);
        assert_eq!(cell.serialized_size(), 31 + 2 + 7);
    }

    #[test]
    fn rejects_long_family() {
        let family = vec![b'f'; MAX_FAMILY_LENGTH + 1];
        let err = Cell::copy_from_slices(b"r", &family, b"q", 0, b"v", &[]).unwrap_err();
        assert!(matches!(err, CellError::FamilyTooLong { length: 128, .. }));
    }

    #[test]
    fn rejects_long_row() {
        let row = vec![b'r'; MAX_ROW_LENGTH + 1];
        let err = Cell::copy_from_slices(&row, b"f", b"q", 0, b"v", &[]).unwrap_err();
        assert!(matches!(err, CellError::RowTooLong { .. }));
    }

    #[test]
    fn rejects_oversized_tag_block() {
        let big = Tag::new(1, vec![0u8; 40_000]).unwrap();
        let err = Cell::copy_from_slices(b"r", b"f", b"q", 0, b"v", &[big.clone(), big])
            .unwrap_err();
        assert!(matches!(err, CellError::TagsTooLong { .. }));
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", sample()), "row/cf:q/42/vlen=5/tags=0");
    }

    proptest::proptest! {
        #[test]
        fn copy_and_alias_agree(
            row in proptest::collection::vec(proptest::num::u8::ANY, 1..64),
            family in proptest::collection::vec(proptest::num::u8::ANY, 1..16),
            qualifier in proptest::collection::vec(proptest::num::u8::ANY, 0..32),
            ts in 0i64..i64::MAX,
            value in proptest::collection::vec(proptest::num::u8::ANY, 0..256),
        ) {
            let copied = Cell::copy_from_slices(&row, &family, &qualifier, ts, &value, &[]).unwrap();
            let aliased = Cell::from_bytes(
                Bytes::from(row),
                Bytes::from(family),
                Bytes::from(qualifier),
                ts,
                Bytes::from(value),
                Vec::new(),
            )
            .unwrap();
            proptest::prop_assert_eq!(copied.serialized_size(), aliased.serialized_size());
            proptest::prop_assert_eq!(copied, aliased);
        }
    }
}
