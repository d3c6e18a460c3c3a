//! # rowmut client
//!
//! Client-side row mutations for column-family key-value stores.
//!
//! This crate provides:
//! - [`Put`] and [`Append`] builders sharing one [`Mutation`] type
//! - Copying (`add_column*`) and zero-copy (`add_immutable*`) column paths
//! - Side-channel attributes: operation id, cluster ids, visibility, ACL, TTL
//! - Client-side validation against a [`ClientConfig`]
//!
//! Applying, replicating and persisting mutations is the transport's job.
//!
//! ## Usage
//!
//! ```
//! use rowmut_client::{ClientConfig, Put};
//!
//! let mut put = Put::new(b"R").unwrap();
//! put.add_column(b"cf", b"q", b"v1")
//!     .unwrap()
//!     .add_column(b"cf", b"q", b"v2")
//!     .unwrap();
//!
//! assert_eq!(put.cell_list(b"cf").len(), 2);
//! put.validate(&ClientConfig::default()).unwrap();
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
pub mod mutation;
mod types;
mod validation;

pub use config::ClientConfig;
pub use error::{MutationError, MutationResult};
pub use mutation::{
    check_row, check_timestamp, Append, AppendKind, FamilyCellMap, Kind, Mutation, Put, PutKind,
    DEFAULT_MAX_COLS,
};
pub use types::{Action, Durability, MutationKind, Permission, LATEST_TIMESTAMP};

pub use rowmut_cell::{Cell, CellError, Tag};
