//! Benchmark utilities.

use bytes::Bytes;
use rand::Rng;
use rowmut_cell::Tag;

/// Generate random cell data of the specified size.
pub fn random_data(size: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..size).map(|_| rng.gen()).collect()
}

/// Generate `count` qualifiers of the form `q{i}`.
pub fn generate_qualifiers(count: usize) -> Vec<Bytes> {
    (0..count).map(|i| Bytes::from(format!("q{i}"))).collect()
}

/// Generate `(qualifier, value)` columns with random payloads.
pub fn generate_columns(count: usize, payload_size: usize) -> Vec<(Bytes, Bytes)> {
    generate_qualifiers(count)
        .into_iter()
        .map(|q| (q, Bytes::from(random_data(payload_size))))
        .collect()
}

/// Generate `count` small tags with random values.
pub fn generate_tags(count: usize) -> Vec<Tag> {
    let mut rng = rand::thread_rng();
    (0..count)
        .filter_map(|_| Tag::new(rng.gen_range(1..=8), random_data(16)).ok())
        .collect()
}
