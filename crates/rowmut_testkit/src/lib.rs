//! # rowmut testkit
//!
//! Test utilities for rowmut.
//!
//! This crate provides:
//! - Sample keys and ready-made `Put`/`Append` fixtures
//! - Property-based test generators using proptest
//! - A tracing subscriber for test output
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rowmut_testkit::prelude::*;
//!
//! #[test]
//! fn test_with_put() {
//!     init_tracing();
//!     let put = sample_put();
//!     assert_eq!(put.size(), 1);
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod logging;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::logging::*;
}

pub use fixtures::*;
pub use generators::*;
pub use logging::*;
