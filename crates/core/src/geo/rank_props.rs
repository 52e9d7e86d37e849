//! Property-based tests for distance ranking.

use std::collections::HashSet;

use proptest::prelude::*;

use finch_shared::types::AtmId;

use super::service::GeoService;
use super::types::{AtmLocation, AtmNetwork, Coordinates};

fn arb_coordinates() -> impl Strategy<Value = Coordinates> {
    (-80.0f64..80.0, -179.0f64..179.0).prop_map(|(lat, lng)| Coordinates::new(lat, lng))
}

fn location(i: usize, position: Coordinates) -> AtmLocation {
    AtmLocation {
        id: AtmId::new(),
        name: format!("ATM {i}"),
        address: String::new(),
        city: String::new(),
        zip: String::new(),
        position,
        network: AtmNetwork::Allpoint,
        services: HashSet::new(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Distances are non-negative and symmetric.
    #[test]
    fn prop_distance_symmetric(a in arb_coordinates(), b in arb_coordinates()) {
        let ab = GeoService::haversine_miles(a, b);
        let ba = GeoService::haversine_miles(b, a);
        prop_assert!(ab >= 0.0);
        prop_assert!((ab - ba).abs() < 1e-6);
    }

    /// Ranking yields ascending distances: if haversine(A,B) <
    /// haversine(A,C), then B sorts before C.
    #[test]
    fn prop_rank_ascending(
        origin in arb_coordinates(),
        points in prop::collection::vec(arb_coordinates(), 2..12),
    ) {
        let locations: Vec<_> = points
            .into_iter()
            .enumerate()
            .map(|(i, p)| location(i, p))
            .collect();

        let ranked = GeoService::rank_by_distance(origin, &locations);
        prop_assert_eq!(ranked.len(), locations.len());
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].distance_miles <= pair[1].distance_miles);
        }
    }

    /// Ranking is a permutation: nothing is dropped or duplicated.
    #[test]
    fn prop_rank_is_permutation(
        origin in arb_coordinates(),
        points in prop::collection::vec(arb_coordinates(), 0..12),
    ) {
        let locations: Vec<_> = points
            .into_iter()
            .enumerate()
            .map(|(i, p)| location(i, p))
            .collect();

        let ranked = GeoService::rank_by_distance(origin, &locations);
        let mut input_ids: Vec<_> = locations.iter().map(|l| l.id).collect();
        let mut ranked_ids: Vec<_> = ranked.iter().map(|r| r.atm.id).collect();
        input_ids.sort_by_key(|id| id.into_inner());
        ranked_ids.sort_by_key(|id| id.into_inner());
        prop_assert_eq!(input_ids, ranked_ids);
    }
}
