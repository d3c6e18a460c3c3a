//! Test fixtures and mutation helpers.
//!
//! Provides sample keys, ready-made mutations and helpers that apply a
//! [`ColumnSpec`] through either add path.

use crate::generators::ColumnSpec;
use bytes::Bytes;
use rowmut_cell::{tag_types, Tag};
use rowmut_client::{Append, Kind, Mutation, MutationResult, Put};
use std::time::{SystemTime, UNIX_EPOCH};

/// Row key used by the sample mutations.
pub const ROW: &[u8] = b"row";
/// Column family used by the sample mutations.
pub const FAMILY: &[u8] = b"family";
/// Qualifier used by the sample mutations.
pub const QUALIFIER: &[u8] = b"qualifier";
/// Value used by the sample mutations.
pub const VALUE: &[u8] = b"value";

/// Current wall-clock time in milliseconds, as a cell timestamp.
pub fn now_millis() -> i64 {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch");
    i64::try_from(elapsed.as_millis()).expect("timestamp overflow")
}

/// A `Put` on [`ROW`] holding `FAMILY:QUALIFIER = VALUE`.
pub fn sample_put() -> Put {
    let mut put = Put::new(ROW).expect("valid row");
    put.add_column(FAMILY, QUALIFIER, VALUE).expect("valid column");
    put
}

/// An `Append` on [`ROW`] holding `FAMILY:QUALIFIER = VALUE`.
pub fn sample_append() -> Append {
    let mut append = Append::new(ROW).expect("valid row");
    append
        .add_column(FAMILY, QUALIFIER, VALUE)
        .expect("valid column");
    append
}

/// A `Put` with `families` families of `qualifiers` columns each.
///
/// Families are named `cf0`, `cf1`, ...; qualifiers `q0`, `q1`, ...
pub fn populated_put(families: usize, qualifiers: usize) -> Put {
    let mut put = Put::new(ROW).expect("valid row");
    for f in 0..families {
        let family = format!("cf{f}");
        for q in 0..qualifiers {
            let qualifier = format!("q{q}");
            let value = format!("v{f}-{q}");
            put.add_column(family.as_bytes(), qualifier.as_bytes(), value.as_bytes())
                .expect("valid column");
        }
    }
    put
}

/// `count` tags of alternating ACL and TTL type.
pub fn sample_tags(count: usize) -> Vec<Tag> {
    (0..count)
        .map(|i| {
            let tag_type = if i % 2 == 0 {
                tag_types::ACL
            } else {
                tag_types::TTL
            };
            Tag::text(tag_type, &format!("tag{i}")).expect("small tag")
        })
        .collect()
}

/// Applies `spec` through the copying path.
///
/// Tags are ignored because the copying path does not take any.
pub fn apply_copying<K: Kind>(
    mutation: &mut Mutation<K>,
    spec: &ColumnSpec,
) -> MutationResult<()> {
    match spec.timestamp {
        Some(ts) => mutation.add_column_at(&spec.family, &spec.qualifier, ts, &spec.value)?,
        None => mutation.add_column(&spec.family, &spec.qualifier, &spec.value)?,
    };
    Ok(())
}

/// Applies `spec` through the aliasing path, including its tags.
pub fn apply_aliasing<K: Kind>(
    mutation: &mut Mutation<K>,
    spec: &ColumnSpec,
) -> MutationResult<()> {
    let family = Bytes::from(spec.family.clone());
    let qualifier = Bytes::from(spec.qualifier.clone());
    let value = Bytes::from(spec.value.clone());
    let ts = spec.timestamp.unwrap_or_else(|| mutation.timestamp());
    mutation.add_immutable_at_tagged(family, qualifier, ts, value, spec.tags.clone())?;
    Ok(())
}
