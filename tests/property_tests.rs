//! Property-based tests for EOL classification, search and binary string equality.

use portable_document::eol::{classify, find_from};
use portable_document::{BinaryString, EndOfLine, Error};
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of(value: &BinaryString) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Buffers biased towards marker bytes so that pairs show up often.
fn buffer() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop_oneof![Just(0x0Au8), Just(0x0Du8), any::<u8>()],
        1..32,
    )
}

/// Buffers that never contain a marker byte.
fn plain_buffer() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        any::<u8>().prop_filter("marker byte", |b| *b != 0x0A && *b != 0x0D),
        1..32,
    )
}

proptest! {
    #[test]
    fn prop_line_feed_never_looks_back(mut raw in buffer(), index in any::<prop::sample::Index>()) {
        let position = index.index(raw.len());
        raw[position] = 0x0A;
        prop_assert_eq!(classify(&raw, position).unwrap(), Some(EndOfLine::LineFeed));
    }

    #[test]
    fn prop_trailing_carriage_return(mut raw in buffer()) {
        let last = raw.len() - 1;
        raw[last] = 0x0D;
        prop_assert_eq!(classify(&raw, last).unwrap(), Some(EndOfLine::CarriageReturn));
    }

    #[test]
    fn prop_no_marker_is_not_found(raw in plain_buffer()) {
        for start in 0..raw.len() {
            prop_assert_eq!(find_from(&raw, start).unwrap(), None);
        }
    }

    #[test]
    fn prop_default_start_is_zero(raw in buffer()) {
        let value = BinaryString::new(raw.clone());
        prop_assert_eq!(value.find_end_of_line().unwrap(), find_from(&raw, 0).unwrap());
        prop_assert_eq!(value.find_end_of_line().unwrap(), value.find_end_of_line_from(0).unwrap());
    }

    #[test]
    fn prop_find_reports_first_marker(raw in buffer(), index in any::<prop::sample::Index>()) {
        let start = index.index(raw.len());
        match find_from(&raw, start).unwrap() {
            Some((position, kind)) => {
                prop_assert!(position >= start);
                prop_assert_eq!(classify(&raw, position).unwrap(), Some(kind));
                for skipped in start..position {
                    prop_assert_eq!(classify(&raw, skipped).unwrap(), None);
                }
            }
            None => {
                prop_assert!(raw[start..].iter().all(|b| *b != 0x0A && *b != 0x0D));
            }
        }
    }

    #[test]
    fn prop_out_of_range_start(raw in buffer(), extra in 0usize..4) {
        let start = raw.len() + extra;
        let is_out_of_range = matches!(
            find_from(&raw, start),
            Err(Error::OutOfRange { argument: "start", .. })
        );
        prop_assert!(is_out_of_range);
    }

    #[test]
    fn prop_equality_matches_content(left in prop::collection::vec(any::<u8>(), 0..8), right in prop::collection::vec(any::<u8>(), 0..8)) {
        let a = BinaryString::new(left.clone());
        let b = BinaryString::new(right.clone());
        prop_assert_eq!(a == b, left == right);
        prop_assert_ne!(a.clone(), BinaryString::NULL);
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
    }

    #[test]
    fn prop_iter_yields_original_bytes(raw in prop::collection::vec(any::<u8>(), 0..32)) {
        let value = BinaryString::new(raw.clone());
        let collected: Vec<u8> = value.iter().unwrap().collect();
        prop_assert_eq!(collected, raw);
    }
}
