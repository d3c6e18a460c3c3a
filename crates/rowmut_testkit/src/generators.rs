//! Property-based test generators using proptest.
//!
//! Strategies only produce inputs the builders accept: non-empty rows and
//! families within the cell limits, non-negative timestamps.

use proptest::prelude::*;
use rowmut_cell::Tag;

/// One column to add to a mutation.
#[derive(Debug, Clone)]
pub struct ColumnSpec {
    /// Column family.
    pub family: Vec<u8>,
    /// Column qualifier.
    pub qualifier: Vec<u8>,
    /// Explicit timestamp, or `None` for the mutation default.
    pub timestamp: Option<i64>,
    /// Cell value.
    pub value: Vec<u8>,
    /// Tags, used only by the aliasing path.
    pub tags: Vec<Tag>,
}

/// Strategy for generating valid row keys.
pub fn row_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 1..64)
}

/// Strategy for generating valid family names.
///
/// Drawn from a small alphabet so that generated columns share families.
pub fn family_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::string::string_regex("cf[a-c]{0,2}")
        .expect("Invalid regex")
        .prop_map(String::into_bytes)
}

/// Strategy for generating qualifiers (may be empty).
pub fn qualifier_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..16)
}

/// Strategy for generating cell values.
pub fn value_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..256)
}

/// Strategy for generating valid timestamps.
pub fn timestamp_strategy() -> impl Strategy<Value = i64> {
    0..i64::MAX
}

/// Strategy for generating small tags.
pub fn tag_strategy() -> impl Strategy<Value = Tag> {
    (any::<u8>(), prop::collection::vec(any::<u8>(), 0..32))
        .prop_map(|(tag_type, value)| Tag::new(tag_type, value).expect("small tag"))
}

/// Strategy for generating a single column.
pub fn column_strategy() -> impl Strategy<Value = ColumnSpec> {
    (
        family_strategy(),
        qualifier_strategy(),
        prop::option::of(timestamp_strategy()),
        value_strategy(),
        prop::collection::vec(tag_strategy(), 0..4),
    )
        .prop_map(|(family, qualifier, timestamp, value, tags)| ColumnSpec {
            family,
            qualifier,
            timestamp,
            value,
            tags,
        })
}

/// Strategy for generating a batch of columns.
pub fn columns_strategy(max: usize) -> impl Strategy<Value = Vec<ColumnSpec>> {
    prop::collection::vec(column_strategy(), 1..=max.max(1))
}
