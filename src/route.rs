//! Greedy nearest-neighbour ordering over geocoded addresses.
//!
//! This is an alternate ordering to [`crate::AddressSorter`]: instead of
//! comparing address fields it visits, from a starting point, the closest
//! address not yet visited. Geocoding itself is delegated to a
//! [`Geocoder`].

use tracing::{debug, warn};

use crate::error::Result;

const EARTH_RADIUS_KM: f64 = 6371.0088;

/// A point on the earth's surface in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl Coordinates {
    /// Create coordinates from latitude and longitude.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance in kilometres (haversine).
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let d_lat = lat2 - lat1;
        let d_lon = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
    }
}

/// Resolves an address to coordinates.
pub trait Geocoder {
    /// Locate `address`.
    ///
    /// # Errors
    ///
    /// Implementations should return [`crate::Error::GeocodingFailed`] when
    /// the address cannot be located.
    fn geocode(&self, address: &str) -> Result<Coordinates>;
}

impl<F> Geocoder for F
where
    F: Fn(&str) -> Result<Coordinates>,
{
    fn geocode(&self, address: &str) -> Result<Coordinates> {
        self(address)
    }
}

/// Order entries by repeatedly visiting the nearest unvisited one,
/// starting from `origin`.
///
/// Ties go to the entry that came first. Entries that fail to geocode are
/// appended after the route in their original relative order.
pub fn order_by_proximity<G, S>(geocoder: &G, origin: Coordinates, entries: &[S]) -> Vec<S>
where
    G: Geocoder + ?Sized,
    S: AsRef<str> + Clone,
{
    let mut pending = Vec::with_capacity(entries.len());
    let mut unlocated = Vec::new();
    for entry in entries {
        let address: &str = entry.as_ref();
        match geocoder.geocode(address) {
            Ok(point) => pending.push((point, entry)),
            Err(e) => {
                warn!(address, error = %e, "could not geocode address");
                unlocated.push(entry);
            }
        }
    }

    let mut route = Vec::with_capacity(entries.len());
    let mut current = origin;
    while let Some(next) = nearest(&current, &pending) {
        let (point, entry) = pending.remove(next);
        current = point;
        route.push(entry.clone());
    }

    debug!(
        routed = route.len(),
        unlocated = unlocated.len(),
        "ordered addresses by proximity"
    );

    route.extend(unlocated.into_iter().cloned());
    route
}

fn nearest<T>(from: &Coordinates, pending: &[(Coordinates, T)]) -> Option<usize> {
    pending
        .iter()
        .enumerate()
        .min_by(|(_, (a, _)), (_, (b, _))| from.distance_km(a).total_cmp(&from.distance_km(b)))
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn grid(address: &str) -> Result<Coordinates> {
        match address {
            "A" => Ok(Coordinates::new(6.20, -75.57)),
            "B" => Ok(Coordinates::new(6.25, -75.57)),
            "C" => Ok(Coordinates::new(6.30, -75.57)),
            "C2" => Ok(Coordinates::new(6.30, -75.57)),
            other => Err(Error::geocoding_failed(other, "not found")),
        }
    }

    #[test]
    fn test_distance() {
        let medellin = Coordinates::new(6.2442, -75.5812);
        let bogota = Coordinates::new(4.7110, -74.0721);
        let km = medellin.distance_km(&bogota);
        assert!((km - 238.0).abs() < 5.0, "got {km}");
        assert_eq!(medellin.distance_km(&medellin), 0.0);
    }

    #[test]
    fn test_greedy_order_from_origin() {
        let origin = Coordinates::new(6.31, -75.57);
        let ordered = order_by_proximity(&grid, origin, &["A", "B", "C"]);
        assert_eq!(ordered, ["C", "B", "A"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let origin = Coordinates::new(6.40, -75.57);
        let ordered = order_by_proximity(&grid, origin, &["C2", "A", "C"]);
        assert_eq!(ordered, ["C2", "C", "A"]);
    }

    #[test]
    fn test_unlocated_entries_go_last() {
        let origin = Coordinates::new(6.19, -75.57);
        let ordered = order_by_proximity(&grid, origin, &["?", "C", "A", "!"]);
        assert_eq!(ordered, ["A", "C", "?", "!"]);
    }
}
