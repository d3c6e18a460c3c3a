//! The `Append` mutation.

use super::{sealed, Kind, Mutation};
use crate::types::MutationKind;

/// Attribute asking the server to return the appended values.
pub const RETURN_RESULTS_ATTRIBUTE: &str = "_rr_";

/// Marker for [`Append`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppendKind;

impl sealed::Sealed for AppendKind {}

impl Kind for AppendKind {
    const KIND: MutationKind = MutationKind::Append;
}

/// Concatenates each cell's value onto the current value of its column.
///
/// Construction is identical to [`Put`](super::Put); only the server-side
/// meaning differs.
pub type Append = Mutation<AppendKind>;

impl Mutation<AppendKind> {
    /// Sets whether the server should return the resulting values.
    pub fn set_return_results(&mut self, return_results: bool) -> &mut Self {
        let flag: &'static [u8] = if return_results { &[0xff] } else { &[0x00] };
        self.set_attribute(RETURN_RESULTS_ATTRIBUTE, flag)
    }

    /// Returns whether the server should return the resulting values.
    ///
    /// Defaults to `true` when never set.
    #[must_use]
    pub fn is_return_results(&self) -> bool {
        self.attribute(RETURN_RESULTS_ATTRIBUTE)
            .and_then(|flag| flag.first())
            .map_or(true, |&b| b != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn return_results_default_true() {
        let append = Append::new(b"row").unwrap();
        assert!(append.is_return_results());
    }

    #[test]
    fn return_results_toggle() {
        let mut append = Append::new(b"row").unwrap();
        append.set_return_results(false);
        assert!(!append.is_return_results());
        append.set_return_results(true);
        assert!(append.is_return_results());
    }

    #[test]
    fn clone_copies_attributes() {
        let mut append = Append::new(b"row").unwrap();
        append
            .set_return_results(false)
            .set_attribute("k", &b"v"[..]);
        append.add_column(b"cf", b"q", b"v").unwrap();

        let mut copy = append.clone();
        assert!(!copy.is_return_results());
        assert_eq!(copy.attributes(), append.attributes());
        assert_eq!(copy.timestamp(), append.timestamp());

        copy.set_attribute("k", &b"changed"[..]);
        assert_eq!(append.attribute("k").map(|b| &b[..]), Some(&b"v"[..]));
    }
}
