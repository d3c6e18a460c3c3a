//! Row mutations.
//!
//! A [`Mutation`] is a client-side write request for one row: a row key, a
//! default timestamp, cells grouped by column family, free-form attributes
//! and a durability preference. The kind of write is a type parameter, so
//! [`Put`] and [`Append`] share every builder method and chaining always
//! yields the concrete type.
//!
//! Row keys enter in one of two ways:
//! - as a borrowed slice (`new`, `with_timestamp`, `from_buf`), which is
//!   copied;
//! - as [`Bytes`] (`with_immutable_row*`), which is kept as-is with no copy.

mod add;
mod append;
mod attributes;
mod put;
mod summary;

pub use append::{Append, AppendKind, RETURN_RESULTS_ATTRIBUTE};
pub use attributes::{
    ACL_ATTRIBUTE, CLUSTER_IDS_ATTRIBUTE, ID_ATTRIBUTE, TTL_ATTRIBUTE, VISIBILITY_ATTRIBUTE,
};
pub use put::{Put, PutKind};
pub use summary::DEFAULT_MAX_COLS;

use crate::error::{MutationError, MutationResult};
use crate::types::{Durability, MutationKind, LATEST_TIMESTAMP};
use bytes::{Buf, Bytes};
use rowmut_cell::buf::copy_remaining;
use rowmut_cell::{Cell, MAX_ROW_LENGTH};
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use tracing::trace;

mod sealed {
    pub trait Sealed {}
}

/// Marker for a concrete mutation kind.
pub trait Kind: sealed::Sealed + Clone + fmt::Debug + Send + Sync + 'static {
    /// The kind this marker stands for.
    const KIND: MutationKind;
}

/// Cells of a mutation, keyed by column family in byte order.
pub type FamilyCellMap = BTreeMap<Bytes, Vec<Cell>>;

/// A write request for a single row.
///
/// Mutations only grow: add calls append cells, nothing removes them.
/// Cloning produces an independent family map whose cells share storage
/// with the original.
#[derive(Clone)]
pub struct Mutation<K: Kind> {
    row: Bytes,
    ts: i64,
    family_map: FamilyCellMap,
    attributes: BTreeMap<String, Bytes>,
    durability: Durability,
    _kind: PhantomData<K>,
}

impl<K: Kind> Mutation<K> {
    /// Creates a mutation for a copy of `row` with the latest timestamp.
    pub fn new(row: &[u8]) -> MutationResult<Self> {
        Self::with_timestamp(row, LATEST_TIMESTAMP)
    }

    /// Creates a mutation for a copy of `row` with a default timestamp.
    pub fn with_timestamp(row: &[u8], timestamp: i64) -> MutationResult<Self> {
        check_timestamp(timestamp)?;
        check_row(row)?;
        Ok(Self::from_parts(Bytes::copy_from_slice(row), timestamp))
    }

    /// Creates a mutation for the remaining bytes of `row`, copied out of the
    /// buffer.
    pub fn from_buf<B: Buf>(row: B, timestamp: i64) -> MutationResult<Self> {
        check_timestamp(timestamp)?;
        let row = copy_remaining(row);
        check_row(&row)?;
        Ok(Self::from_parts(row, timestamp))
    }

    /// Creates a mutation that keeps `row` without copying it.
    pub fn with_immutable_row(row: Bytes) -> MutationResult<Self> {
        Self::with_immutable_row_at(row, LATEST_TIMESTAMP)
    }

    /// Creates a mutation that keeps `row` without copying it, with a
    /// default timestamp.
    pub fn with_immutable_row_at(row: Bytes, timestamp: i64) -> MutationResult<Self> {
        check_timestamp(timestamp)?;
        check_row(&row)?;
        Ok(Self::from_parts(row, timestamp))
    }

    fn from_parts(row: Bytes, ts: i64) -> Self {
        trace!(kind = %K::KIND, row_len = row.len(), ts, "mutation created");
        Self {
            row,
            ts,
            family_map: BTreeMap::new(),
            attributes: BTreeMap::new(),
            durability: Durability::default(),
            _kind: PhantomData,
        }
    }

    /// Returns the kind of write.
    #[must_use]
    pub fn kind(&self) -> MutationKind {
        K::KIND
    }

    /// Returns the row key.
    #[inline]
    #[must_use]
    pub fn row(&self) -> &Bytes {
        &self.row
    }

    /// Returns the default timestamp given to cells added without one.
    #[inline]
    #[must_use]
    pub fn timestamp(&self) -> i64 {
        self.ts
    }

    /// Returns the durability preference.
    #[must_use]
    pub fn durability(&self) -> Durability {
        self.durability
    }

    /// Sets the durability preference.
    pub fn set_durability(&mut self, durability: Durability) -> &mut Self {
        self.durability = durability;
        self
    }

    /// Returns all cells keyed by family.
    #[must_use]
    pub fn family_cell_map(&self) -> &FamilyCellMap {
        &self.family_map
    }

    /// Returns the cells added for `family`, in insertion order.
    #[must_use]
    pub fn cell_list(&self, family: &[u8]) -> &[Cell] {
        self.family_map
            .get(family)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns every cell, family by family.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.family_map.values().flatten()
    }

    /// Returns the total number of cells.
    #[must_use]
    pub fn size(&self) -> usize {
        self.family_map.values().map(Vec::len).sum()
    }

    /// Returns the number of families with at least one cell.
    #[must_use]
    pub fn num_families(&self) -> usize {
        self.family_map.len()
    }

    /// Returns true if no cells have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.family_map.is_empty()
    }

    /// Sets a free-form attribute, replacing any previous value.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<Bytes>) -> &mut Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Removes an attribute, returning its previous value.
    pub fn remove_attribute(&mut self, name: &str) -> Option<Bytes> {
        self.attributes.remove(name)
    }

    /// Returns an attribute value.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Bytes> {
        self.attributes.get(name)
    }

    /// Returns all attributes.
    #[must_use]
    pub fn attributes(&self) -> &BTreeMap<String, Bytes> {
        &self.attributes
    }

    fn push_cell(&mut self, cell: Cell) {
        self.family_map
            .entry(cell.family().clone())
            .or_default()
            .push(cell);
    }
}

impl<K: Kind> fmt::Debug for Mutation<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mutation")
            .field("kind", &K::KIND)
            .field("row", &rowmut_cell::buf::to_string_binary(&self.row))
            .field("ts", &self.ts)
            .field("durability", &self.durability)
            .field("cells", &self.size())
            .finish()
    }
}

/// Checks that `row` is usable as a row key.
pub fn check_row(row: &[u8]) -> MutationResult<()> {
    if row.is_empty() {
        return Err(MutationError::invalid_row("row key is empty"));
    }
    if row.len() > MAX_ROW_LENGTH {
        return Err(MutationError::invalid_row(format!(
            "row key length {} exceeds {MAX_ROW_LENGTH}",
            row.len()
        )));
    }
    Ok(())
}

/// Checks that `timestamp` is a valid version.
pub fn check_timestamp(timestamp: i64) -> MutationResult<()> {
    if timestamp < 0 {
        return Err(MutationError::NegativeTimestamp { timestamp });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_copies_row() {
        let row = b"row".to_vec();
        let put = Put::new(&row).unwrap();
        assert_eq!(&put.row()[..], b"row");
        assert_ne!(put.row().as_ptr(), row.as_ptr());
        assert_eq!(put.timestamp(), LATEST_TIMESTAMP);
        assert_eq!(put.kind(), MutationKind::Put);
    }

    #[test]
    fn immutable_row_is_aliased() {
        let row = Bytes::from_static(b"immutable");
        let append = Append::with_immutable_row(row.clone()).unwrap();
        assert_eq!(append.row().as_ptr(), row.as_ptr());
        assert_eq!(append.kind(), MutationKind::Append);
    }

    #[test]
    fn from_buf_copies_remaining() {
        let mut buf = Bytes::from_static(b"xxrow");
        buf.advance(2);
        let put = Put::from_buf(buf.clone(), 9).unwrap();
        assert_eq!(&put.row()[..], b"row");
        assert_ne!(put.row().as_ptr(), buf.as_ptr());
        assert_eq!(put.timestamp(), 9);
    }

    #[test]
    fn rejects_empty_row() {
        assert!(matches!(
            Put::new(b""),
            Err(MutationError::InvalidRow { .. })
        ));
        assert!(matches!(
            Append::with_immutable_row(Bytes::new()),
            Err(MutationError::InvalidRow { .. })
        ));
    }

    #[test]
    fn rejects_long_row() {
        let row = vec![0u8; MAX_ROW_LENGTH + 1];
        assert!(matches!(
            Put::new(&row),
            Err(MutationError::InvalidRow { .. })
        ));
        assert!(Put::new(&row[..MAX_ROW_LENGTH]).is_ok());
    }

    #[test]
    fn rejects_negative_timestamp() {
        assert!(matches!(
            Append::with_timestamp(b"row", -1),
            Err(MutationError::NegativeTimestamp { timestamp: -1 })
        ));
        assert!(matches!(
            Append::with_immutable_row_at(Bytes::from_static(b"row"), -5),
            Err(MutationError::NegativeTimestamp { timestamp: -5 })
        ));
        assert_eq!(Append::with_timestamp(b"row", 0).unwrap().timestamp(), 0);
    }

    #[test]
    fn attributes_roundtrip() {
        let mut put = Put::new(b"row").unwrap();
        put.set_attribute("origin", &b"dc1"[..])
            .set_attribute("owner", Bytes::from_static(b"ops"));
        assert_eq!(put.attribute("origin").map(|b| &b[..]), Some(&b"dc1"[..]));
        assert_eq!(put.attributes().len(), 2);
        assert!(put.remove_attribute("origin").is_some());
        assert!(put.attribute("origin").is_none());
    }

    #[test]
    fn durability_setter() {
        let mut put = Put::new(b"row").unwrap();
        assert_eq!(put.durability(), Durability::UseDefault);
        put.set_durability(Durability::SkipWal);
        assert_eq!(put.durability(), Durability::SkipWal);
    }

    #[test]
    fn empty_until_added() {
        let put = Put::new(b"row").unwrap();
        assert!(put.is_empty());
        assert_eq!(put.size(), 0);
        assert_eq!(put.num_families(), 0);
        assert!(put.cell_list(b"cf").is_empty());
    }
}
