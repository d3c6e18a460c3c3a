//! The `Put` mutation.

use super::{sealed, Kind, Mutation};
use crate::types::MutationKind;
use rowmut_cell::Cell;

/// Marker for [`Put`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PutKind;

impl sealed::Sealed for PutKind {}

impl Kind for PutKind {
    const KIND: MutationKind = MutationKind::Put;
}

/// Writes each cell as a new version of its column.
///
/// ```
/// use rowmut_client::Put;
///
/// let mut put = Put::new(b"row-1").unwrap();
/// put.add_column(b"cf", b"q", b"v1").unwrap();
/// assert!(put.has(b"cf", b"q"));
/// ```
pub type Put = Mutation<PutKind>;

impl Mutation<PutKind> {
    /// Returns true if any cell exists for `family:qualifier`.
    #[must_use]
    pub fn has(&self, family: &[u8], qualifier: &[u8]) -> bool {
        self.find(family, qualifier, None, None)
    }

    /// Returns true if a cell exists for `family:qualifier` at `timestamp`.
    #[must_use]
    pub fn has_at(&self, family: &[u8], qualifier: &[u8], timestamp: i64) -> bool {
        self.find(family, qualifier, Some(timestamp), None)
    }

    /// Returns true if a cell exists for `family:qualifier` holding `value`.
    #[must_use]
    pub fn has_value(&self, family: &[u8], qualifier: &[u8], value: &[u8]) -> bool {
        self.find(family, qualifier, None, Some(value))
    }

    /// Returns true if a cell exists for `family:qualifier` at `timestamp`
    /// holding `value`.
    #[must_use]
    pub fn has_at_value(
        &self,
        family: &[u8],
        qualifier: &[u8],
        timestamp: i64,
        value: &[u8],
    ) -> bool {
        self.find(family, qualifier, Some(timestamp), Some(value))
    }

    /// Returns every cell for `family:qualifier`, oldest call first.
    #[must_use]
    pub fn get(&self, family: &[u8], qualifier: &[u8]) -> Vec<&Cell> {
        self.cell_list(family)
            .iter()
            .filter(|cell| cell.matches_column(family, qualifier))
            .collect()
    }

    fn find(
        &self,
        family: &[u8],
        qualifier: &[u8],
        timestamp: Option<i64>,
        value: Option<&[u8]>,
    ) -> bool {
        self.cell_list(family).iter().any(|cell| {
            cell.matches_column(family, qualifier)
                && timestamp.map_or(true, |ts| cell.timestamp() == ts)
                && value.map_or(true, |v| cell.value()[..] == *v)
        })
    }
}
