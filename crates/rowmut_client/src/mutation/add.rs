//! Adding columns to a mutation.
//!
//! Two families of entry points exist:
//!
//! - `add_column*` take borrowed data and copy family, qualifier and value
//!   into new buffers. The caller may reuse or modify its buffers afterwards.
//! - `add_immutable*` take anything convertible into [`Bytes`] and keep it
//!   as-is. No data is copied; the stored cell refers to the caller's
//!   buffers. [`Bytes`] cannot be modified in place, so those buffers stay
//!   valid for as long as the cell lives.
//!
//! Both produce identical cells for identical inputs. Each call validates
//! its arguments before touching the family map, so a failed call leaves
//! the mutation unchanged.

use super::{check_timestamp, Kind, Mutation};
use crate::error::{MutationError, MutationResult};
use bytes::{Buf, Bytes};
use rowmut_cell::buf::{copy_remaining, to_string_binary};
use rowmut_cell::{Cell, Tag};
use tracing::trace;

impl<K: Kind> Mutation<K> {
    /// Adds a copy of `family:qualifier = value` at the mutation's timestamp.
    pub fn add_column(
        &mut self,
        family: &[u8],
        qualifier: &[u8],
        value: &[u8],
    ) -> MutationResult<&mut Self> {
        self.add_column_at(family, qualifier, self.ts, value)
    }

    /// Adds a copy of `family:qualifier = value` at `timestamp`.
    pub fn add_column_at(
        &mut self,
        family: &[u8],
        qualifier: &[u8],
        timestamp: i64,
        value: &[u8],
    ) -> MutationResult<&mut Self> {
        check_column(family, timestamp)?;
        let cell = Cell::from_bytes(
            self.row.clone(),
            Bytes::copy_from_slice(family),
            Bytes::copy_from_slice(qualifier),
            timestamp,
            Bytes::copy_from_slice(value),
            Vec::new(),
        )?;
        Ok(self.insert(cell))
    }

    /// Adds a column whose qualifier and value are the remaining bytes of
    /// two buffers. Both are copied; the buffers are consumed.
    pub fn add_column_buf<Q: Buf, V: Buf>(
        &mut self,
        family: &[u8],
        qualifier: Q,
        timestamp: i64,
        value: V,
    ) -> MutationResult<&mut Self> {
        check_column(family, timestamp)?;
        let cell = Cell::from_bytes(
            self.row.clone(),
            Bytes::copy_from_slice(family),
            copy_remaining(qualifier),
            timestamp,
            copy_remaining(value),
            Vec::new(),
        )?;
        Ok(self.insert(cell))
    }

    /// Adds `family:qualifier = value` at the mutation's timestamp without
    /// copying.
    pub fn add_immutable(
        &mut self,
        family: impl Into<Bytes>,
        qualifier: impl Into<Bytes>,
        value: impl Into<Bytes>,
    ) -> MutationResult<&mut Self> {
        self.add_immutable_at_tagged(family, qualifier, self.ts, value, None::<Tag>)
    }

    /// Adds `family:qualifier = value` at `timestamp` without copying.
    pub fn add_immutable_at(
        &mut self,
        family: impl Into<Bytes>,
        qualifier: impl Into<Bytes>,
        timestamp: i64,
        value: impl Into<Bytes>,
    ) -> MutationResult<&mut Self> {
        self.add_immutable_at_tagged(family, qualifier, timestamp, value, None::<Tag>)
    }

    /// Adds a tagged column at the mutation's timestamp without copying.
    pub fn add_immutable_tagged(
        &mut self,
        family: impl Into<Bytes>,
        qualifier: impl Into<Bytes>,
        value: impl Into<Bytes>,
        tags: impl IntoIterator<Item = Tag>,
    ) -> MutationResult<&mut Self> {
        self.add_immutable_at_tagged(family, qualifier, self.ts, value, tags)
    }

    /// Adds a tagged column at `timestamp` without copying.
    ///
    /// Tags are attached in the order given.
    pub fn add_immutable_at_tagged(
        &mut self,
        family: impl Into<Bytes>,
        qualifier: impl Into<Bytes>,
        timestamp: i64,
        value: impl Into<Bytes>,
        tags: impl IntoIterator<Item = Tag>,
    ) -> MutationResult<&mut Self> {
        let family = family.into();
        check_column(&family, timestamp)?;
        let cell = Cell::from_bytes(
            self.row.clone(),
            family,
            qualifier.into(),
            timestamp,
            value.into(),
            tags.into_iter().collect(),
        )?;
        Ok(self.insert(cell))
    }

    /// Adds a pre-built cell, which must belong to this mutation's row.
    pub fn add_cell(&mut self, cell: Cell) -> MutationResult<&mut Self> {
        if cell.row() != &self.row {
            return Err(MutationError::RowMismatch {
                cell_row: to_string_binary(cell.row()),
                mutation_row: to_string_binary(&self.row),
            });
        }
        check_column(cell.family(), cell.timestamp())?;
        Ok(self.insert(cell))
    }

    fn insert(&mut self, cell: Cell) -> &mut Self {
        trace!(
            kind = %K::KIND,
            family = %to_string_binary(cell.family()),
            ts = cell.timestamp(),
            value_len = cell.value().len(),
            tags = cell.tags().len(),
            "column added"
        );
        self.push_cell(cell);
        self
    }
}

fn check_column(family: &[u8], timestamp: i64) -> MutationResult<()> {
    if family.is_empty() {
        return Err(MutationError::MissingFamily);
    }
    check_timestamp(timestamp)
}
