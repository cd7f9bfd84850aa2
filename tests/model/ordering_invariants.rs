//! Ordering Invariant Tests
//!
//! Keys and paths sort segment by segment, a strict prefix sorts first, and
//! the empty path is the unique minimum.

use crate::common::*;
use std::cmp::Ordering;
use std::collections::BTreeSet;

#[test]
fn documented_chain_is_strictly_increasing() {
    let chain = [
        DocumentKey::default(),
        key(&["a", "a"]),
        key(&["a", "a", "b", "b"]),
        key(&["b", "b"]),
    ];
    for pair in chain.windows(2) {
        assert!(pair[0] < pair[1], "{} < {}", pair[0], pair[1]);
    }
}

#[test]
fn key_order_delegates_to_path_order() {
    let keys = [
        key(&["a", "b"]),
        key(&["a", "b", "c", "d"]),
        key(&["a", "c"]),
        key(&["Z", "z"]),
    ];
    for x in &keys {
        for y in &keys {
            assert_eq!(x.cmp(y), x.path().cmp(y.path()));
            assert_eq!(x == y, x.path() == y.path());
        }
    }
}

#[test]
fn empty_is_unique_minimum() {
    let empty = ResourcePath::empty();
    for p in [path(&["a"]), path(&["\u{0}"]), path(&["a", "b"])] {
        assert_eq!(empty.cmp(&p), Ordering::Less);
    }
    assert_eq!(empty.cmp(&ResourcePath::default()), Ordering::Equal);
}

#[test]
fn segment_order_differs_from_joined_string_order() {
    // '-' sorts before '/', so joined strings would order these the other way
    let nested = path(&["a", "b"]);
    let sibling = path(&["a-"]);
    assert!(nested.canonical_string() > sibling.canonical_string());
    assert!(nested < sibling);
}

#[test]
fn btree_set_orders_keys() {
    let set: BTreeSet<DocumentKey> = [
        "b/b",
        "a/a/b/b",
        "a/a",
        "a/b",
    ]
    .iter()
    .map(|s| DocumentKey::from_path_string(s).unwrap())
    .collect();

    let ordered: Vec<String> = set.iter().map(|k| k.to_string()).collect();
    assert_eq!(ordered, vec!["a/a", "a/a/b/b", "a/b", "b/b"]);
}

#[test]
fn range_bounds_select_a_collection() {
    let set: BTreeSet<DocumentKey> = ["rooms/a", "rooms/a/messages/1", "rooms/b", "users/a"]
        .iter()
        .map(|s| DocumentKey::from_path_string(s).unwrap())
        .collect();

    let start = DocumentKey::from_path_string("rooms/a").unwrap();
    let end = DocumentKey::from_path_string("rooms/b").unwrap();
    let in_range: Vec<String> = set.range(start..end).map(|k| k.to_string()).collect();
    assert_eq!(in_range, vec!["rooms/a", "rooms/a/messages/1"]);
}
