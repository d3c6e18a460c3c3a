//! # rowmut cell
//!
//! Cell and tag primitives shared by the rowmut crates.
//!
//! A [`Cell`] is the atom a column-family store persists: row, family,
//! qualifier, timestamp, value and an optional list of [`Tag`]s. All
//! components are reference-counted [`bytes::Bytes`], so a cell can either
//! own fresh copies of its data or alias buffers the caller already holds.
//!
//! ## Usage
//!
//! ```
//! use rowmut_cell::{Cell, Tag};
//!
//! let tag = Tag::text(1, "owner").unwrap();
//! let cell = Cell::copy_from_slices(b"row", b"cf", b"q", 1, b"v", &[tag]).unwrap();
//! assert_eq!(cell.tags().len(), 1);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod buf;
mod cell;
mod error;
mod tag;

pub use cell::{
    Cell, CELL_INFRASTRUCTURE_SIZE, KEY_INFRASTRUCTURE_SIZE, MAX_FAMILY_LENGTH, MAX_ROW_LENGTH,
    MAX_TAGS_LENGTH, TAGS_LENGTH_SIZE,
};
pub use error::{CellError, CellResult};
pub use tag::{tag_types, Tag, MAX_TAG_LENGTH, TAG_LENGTH_SIZE, TAG_TYPE_SIZE};
