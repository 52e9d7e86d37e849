//! Haversine ranking and filtering over ATM reference data.

use super::types::{AtmFilter, AtmLocation, Coordinates, RankedAtm};

/// Mean Earth radius in miles.
const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Stateless geo search over the static ATM table.
pub struct GeoService;

impl GeoService {
    /// Great-circle distance between two coordinates in miles, via the
    /// haversine formula.
    #[must_use]
    pub fn haversine_miles(a: Coordinates, b: Coordinates) -> f64 {
        let lat_a = a.latitude.to_radians();
        let lat_b = b.latitude.to_radians();
        let d_lat = (b.latitude - a.latitude).to_radians();
        let d_lng = (b.longitude - a.longitude).to_radians();

        let h = (d_lat / 2.0).sin().powi(2)
            + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);
        let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

        EARTH_RADIUS_MILES * c
    }

    /// Ranks locations by ascending distance from `origin`.
    ///
    /// The sort is stable: locations at equal distance keep their input
    /// order (tie-break is implementation-defined).
    #[must_use]
    pub fn rank_by_distance(origin: Coordinates, locations: &[AtmLocation]) -> Vec<RankedAtm> {
        let mut ranked: Vec<RankedAtm> = locations
            .iter()
            .map(|atm| RankedAtm {
                atm: atm.clone(),
                distance_miles: Self::haversine_miles(origin, atm.position),
            })
            .collect();
        ranked.sort_by(|x, y| x.distance_miles.total_cmp(&y.distance_miles));
        ranked
    }

    /// Returns true if the ATM satisfies every constraint of the filter.
    #[must_use]
    pub fn matches(atm: &AtmLocation, filter: &AtmFilter) -> bool {
        if let Some(query) = filter.query.as_deref() {
            let query = query.trim().to_lowercase();
            if !query.is_empty() {
                let haystack = [&atm.name, &atm.address, &atm.city, &atm.zip];
                if !haystack
                    .iter()
                    .any(|field| field.to_lowercase().contains(&query))
                {
                    return false;
                }
            }
        }

        if !filter.networks.is_empty() && !filter.networks.contains(&atm.network) {
            return false;
        }

        filter.services.is_subset(&atm.services)
    }

    /// Filters then ranks: the locator's search operation.
    #[must_use]
    pub fn search(
        origin: Coordinates,
        locations: &[AtmLocation],
        filter: &AtmFilter,
    ) -> Vec<RankedAtm> {
        let matching: Vec<AtmLocation> = locations
            .iter()
            .filter(|atm| Self::matches(atm, filter))
            .cloned()
            .collect();
        Self::rank_by_distance(origin, &matching)
    }
}
