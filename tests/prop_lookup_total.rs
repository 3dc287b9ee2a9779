//! Property tests: `lookup` is total over the valid domain, pure, and
//! rejects the out-of-domain plane with `OutOfRange`.

mod support;

use lltz::{IndexReader, LookupError};
use proptest::prelude::*;
use std::sync::OnceLock;
use support::index_writer::{IndexWriter, Node, Polygon, TzRecord};

/// A globe with all three slot shapes: a single-timezone cell, a quadtree
/// cell, and a polygon cell; everything else is ocean.
fn world_index() -> &'static [u8] {
    static INDEX: OnceLock<Vec<u8>> = OnceLock::new();
    INDEX.get_or_init(|| {
        IndexWriter::new(&["America/New_York", "Africa/Accra", "Africa/Lome"])
            .cell(130, 105, Node::Single(0))
            .cell(
                90,
                180,
                Node::Branch(Box::new([
                    Node::Single(1),
                    Node::Empty,
                    Node::Empty,
                    Node::Single(2),
                ])),
            )
            .cell(
                91,
                180,
                Node::Polygons(vec![TzRecord {
                    tz: 1,
                    polygons: vec![Polygon::rect(10_000, 10_000, 60_000, 60_000)],
                }]),
            )
            .finish()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        failure_persistence: None,
        cases: 512,
        .. ProptestConfig::default()
    })]

    #[test]
    fn lookup_always_returns_at_least_one_id(
        lat in -90.0..=90.0f64,
        lon in -180.0..=180.0f64,
    ) {
        let reader = IndexReader::open(world_index()).unwrap();
        let ids = reader.lookup(lat, lon).unwrap();
        prop_assert!(!ids.is_empty());
    }

    #[test]
    fn lookup_is_deterministic(
        lat in -90.0..=90.0f64,
        lon in -180.0..=180.0f64,
    ) {
        let reader = IndexReader::open(world_index()).unwrap();
        prop_assert_eq!(reader.lookup(lat, lon).unwrap(), reader.lookup(lat, lon).unwrap());
    }

    #[test]
    fn borrowed_and_owned_readers_agree(
        lat in -90.0..=90.0f64,
        lon in -180.0..=180.0f64,
    ) {
        let borrowed = IndexReader::open(world_index()).unwrap();
        let owned = IndexReader::open(world_index().to_vec()).unwrap();
        prop_assert_eq!(borrowed.lookup(lat, lon).unwrap(), owned.lookup(lat, lon).unwrap());
    }

    #[test]
    fn out_of_domain_points_are_rejected(
        lat_excess in 0.0001..1_000.0f64,
        lon_excess in 0.0001..1_000.0f64,
        flip in any::<bool>(),
    ) {
        let reader = IndexReader::open(world_index()).unwrap();
        let sign = if flip { -1.0 } else { 1.0 };
        let bad_lat = sign * (90.0 + lat_excess);
        let bad_lon = sign * (180.0 + lon_excess);
        let lat_result_is_out_of_range = matches!(
            reader.lookup(bad_lat, 0.0),
            Err(LookupError::OutOfRange { .. })
        );
        prop_assert!(lat_result_is_out_of_range);
        let lon_result_is_out_of_range = matches!(
            reader.lookup(0.0, bad_lon),
            Err(LookupError::OutOfRange { .. })
        );
        prop_assert!(lon_result_is_out_of_range);
    }
}
