//! Integration tests for `Put`.

use bytes::Bytes;
use rowmut_client::{Put, Tag, LATEST_TIMESTAMP};
use rowmut_testkit::prelude::*;

#[test]
fn copy_constructor() {
    init_tracing();
    let mut origin = Put::new(b"ROW-01").unwrap();
    origin.add_column(b"CF-01", b"Q-01", b"V-01").unwrap();
    let clone = origin.clone();

    assert_eq!(origin.cell_list(b"CF-01"), clone.cell_list(b"CF-01"));
    origin.add_column(b"CF-01", b"Q-01", b"V-02").unwrap();

    // They should have different cell lists
    assert_ne!(origin.cell_list(b"CF-01"), clone.cell_list(b"CF-01"));
}

#[test]
fn row_is_immutable_or_not() {
    let row_key = Bytes::from(b"immutable".to_vec());

    let immutable = Put::with_immutable_row(row_key.clone()).unwrap();
    assert_eq!(immutable.row().as_ptr(), row_key.as_ptr());

    let copied = Put::with_timestamp(&row_key, 1000).unwrap();
    assert_ne!(copied.row().as_ptr(), row_key.as_ptr());
    assert_eq!(copied.row(), &row_key);
}

#[test]
fn add_immutable_makes_no_copy() {
    let row = Bytes::from_static(b"immutable-row");
    let family = Bytes::from_static(b"immutable-family");
    let qualifier0 = Bytes::from_static(b"immutable-qualifier-0");
    let value0 = Bytes::from_static(b"immutable-value-0");
    let qualifier1 = Bytes::from_static(b"immutable-qualifier-1");
    let value1 = Bytes::from_static(b"immutable-value-1");
    let ts1 = 5000;

    let mut put = Put::with_immutable_row(row.clone()).unwrap();
    put.add_immutable(family.clone(), qualifier0.clone(), value0.clone())
        .unwrap()
        .add_immutable_at(family.clone(), qualifier1.clone(), ts1, value1.clone())
        .unwrap();

    let cell0 = put.get(&family, &qualifier0)[0];
    assert_eq!(cell0.row().as_ptr(), row.as_ptr());
    assert_eq!(cell0.family().as_ptr(), family.as_ptr());
    assert_eq!(cell0.qualifier().as_ptr(), qualifier0.as_ptr());
    assert_eq!(cell0.value().as_ptr(), value0.as_ptr());
    assert_eq!(cell0.timestamp(), put.timestamp());

    let cell1 = put.get(&family, &qualifier1)[0];
    assert_eq!(cell1.family().as_ptr(), family.as_ptr());
    assert_eq!(cell1.qualifier().as_ptr(), qualifier1.as_ptr());
    assert_eq!(cell1.value().as_ptr(), value1.as_ptr());
    assert_eq!(cell1.timestamp(), ts1);
}

#[test]
fn add_column() {
    let mut put = Put::new(ROW).unwrap();
    let result = put.add_column(FAMILY, QUALIFIER, VALUE).unwrap();

    assert_eq!(result.num_families(), 1);
    assert!(result.has_value(FAMILY, QUALIFIER, VALUE));
}

#[test]
fn add_column_with_timestamp() {
    let timestamp = now_millis();
    let mut put = Put::new(ROW).unwrap();
    let result = put
        .add_column_at(FAMILY, QUALIFIER, timestamp, VALUE)
        .unwrap();

    assert_eq!(result.num_families(), 1);
    assert!(result.has_at_value(FAMILY, QUALIFIER, timestamp, VALUE));
}

#[test]
fn add_column_from_buffers() {
    let timestamp = now_millis();
    let qualifier = Bytes::from_static(QUALIFIER);
    let value = Bytes::from_static(VALUE);
    let mut put = Put::new(ROW).unwrap();
    let result = put
        .add_column_buf(FAMILY, qualifier, timestamp, value)
        .unwrap();

    assert_eq!(result.num_families(), 1);
    assert!(result.has_at_value(FAMILY, QUALIFIER, timestamp, VALUE));
}

#[test]
fn add_immutable_with_tag() {
    let mut put = Put::with_immutable_row(Bytes::from_static(b"immutable-row")).unwrap();
    let family = Bytes::from_static(b"immutable-family");
    let qualifier = Bytes::from_static(b"immutable-qualifier");
    let value = Bytes::from_static(b"immutable-value");
    let tags = [Tag::text(1, "immutable-tag-1").unwrap()];

    let result = put
        .add_immutable_tagged(family.clone(), qualifier.clone(), value.clone(), tags)
        .unwrap();

    assert_eq!(result.num_families(), 1);
    assert!(result.has_value(&family, &qualifier, &value));

    let cell = result.get(&family, &qualifier)[0];
    assert_eq!(cell.family(), &family);
    assert_eq!(cell.qualifier(), &qualifier);
    assert_eq!(cell.value(), &value);
    assert_eq!(cell.timestamp(), LATEST_TIMESTAMP);
    assert_eq!(cell.tags().len(), 1);
    assert_eq!(cell.tags()[0].tag_type(), 1);
}

#[test]
fn add_immutable_with_timestamp_and_tag() {
    let timestamp = now_millis();
    let mut put = Put::with_immutable_row(Bytes::from_static(ROW)).unwrap();
    let result = put
        .add_immutable_at_tagged(FAMILY, QUALIFIER, timestamp, VALUE, sample_tags(1))
        .unwrap();

    assert!(result.has_at_value(FAMILY, QUALIFIER, timestamp, VALUE));
    let cell = result.get(FAMILY, QUALIFIER)[0];
    assert_eq!(cell.timestamp(), timestamp);
    assert_eq!(cell.tags().len(), 1);
    assert_eq!(cell.tags()[0].tag_type(), 1);
}

#[test]
fn end_to_end_two_versions() {
    let mut put = Put::new(b"R").unwrap();
    put.add_column(b"cf", b"q", b"v1")
        .unwrap()
        .add_column(b"cf", b"q", b"v2")
        .unwrap();

    let map = put.family_cell_map();
    assert_eq!(map.len(), 1);
    let (family, cells) = map.iter().next().unwrap();
    assert_eq!(&family[..], b"cf");
    assert_eq!(cells.len(), 2);
    assert_eq!(&cells[0].value()[..], b"v1");
    assert_eq!(&cells[1].value()[..], b"v2");
    assert!(cells.iter().all(|c| c.timestamp() == put.timestamp()));
}

#[test]
fn families_are_sorted() {
    let mut put = Put::new(ROW).unwrap();
    for family in [&b"zeta"[..], &b"alpha"[..], &b"mid"[..]] {
        put.add_column(family, QUALIFIER, VALUE).unwrap();
    }
    let families: Vec<&[u8]> = put.family_cell_map().keys().map(|k| &k[..]).collect();
    assert_eq!(families, vec![&b"alpha"[..], &b"mid"[..], &b"zeta"[..]]);
}

#[test]
fn built_mutation_is_shareable() {
    fn assert_send_sync<T: Send + Sync>(_: &T) {}

    let put = std::sync::Arc::new(populated_put(2, 3));
    assert_send_sync(&put);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let put = std::sync::Arc::clone(&put);
            std::thread::spawn(move || put.size())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 6);
    }
}
