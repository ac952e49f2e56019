//! Candidate place catalog and nearest-place selection.

use geo::{Distance, Haversine, Point};
use itertools::Itertools;

use crate::Error;
use crate::model::PlaceRecord;

/// Great-circle distance between two points, in meters.
pub fn distance_meters(a: Point<f64>, b: Point<f64>) -> f64 {
    Haversine.distance(a, b)
}

/// Render a distance in meters the way the UI shows it.
pub fn format_distance(meters: f64) -> String {
    if meters >= 1000.0 {
        format!("{:.1} km", meters / 1000.0)
    } else {
        format!("{} m", meters.round() as i64)
    }
}

/// Snapshot of candidate places for one session. Built once from the
/// loading layer and queried read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct LocationCatalog {
    places: Vec<PlaceRecord>,
}

impl LocationCatalog {
    pub fn new(places: Vec<PlaceRecord>) -> Self {
        Self { places }
    }

    pub fn places(&self) -> &[PlaceRecord] {
        &self.places
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn get(&self, place_id: &str) -> Option<&PlaceRecord> {
        self.places.iter().find(|p| p.place_id == place_id)
    }

    /// The candidate closest to `reference` by great-circle distance.
    /// Single pass; ties resolve to the first candidate in insertion order.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCatalog`] if the catalog holds no places.
    pub fn nearest(&self, reference: Point<f64>) -> Result<&PlaceRecord, Error> {
        self.places
            .iter()
            .map(|place| Haversine.distance(reference, place.geometry))
            .position_min_by(f64::total_cmp)
            .map(|idx| &self.places[idx])
            .ok_or(Error::EmptyCatalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(id: &str, lng: f64, lat: f64) -> PlaceRecord {
        PlaceRecord {
            place_id: id.to_string(),
            name: id.to_string(),
            geometry: Point::new(lng, lat),
            rating: 4.0,
            open_now: true,
            address: String::new(),
            phone: None,
            website: None,
            photo_ref: None,
            hours: None,
        }
    }

    #[test]
    fn empty_catalog_errors() {
        let catalog = LocationCatalog::default();
        assert!(matches!(
            catalog.nearest(Point::new(0.0, 0.0)),
            Err(Error::EmptyCatalog)
        ));
    }

    #[test]
    fn picks_the_closer_candidate() {
        let catalog = LocationCatalog::new(vec![place("a", 0.0, 0.0), place("b", 1.0, 1.0)]);
        let nearest = catalog.nearest(Point::new(0.1, 0.1)).unwrap();
        assert_eq!(nearest.place_id, "a");
    }

    #[test]
    fn nearest_is_minimal() {
        let catalog = LocationCatalog::new(vec![
            place("a", -73.99, 40.73),
            place("b", -73.95, 40.78),
            place("c", -74.01, 40.71),
        ]);
        let reference = Point::new(-74.00, 40.72);
        let nearest = catalog.nearest(reference).unwrap();
        for candidate in catalog.places() {
            assert!(
                distance_meters(reference, nearest.geometry)
                    <= distance_meters(reference, candidate.geometry)
            );
        }
        assert_eq!(nearest.place_id, "c");
    }

    #[test]
    fn exact_match_has_zero_distance() {
        let catalog = LocationCatalog::new(vec![place("a", 0.0, 0.0), place("b", 2.0, 2.0)]);
        let reference = Point::new(2.0, 2.0);
        assert_eq!(distance_meters(reference, Point::new(2.0, 2.0)), 0.0);
        assert_eq!(catalog.nearest(reference).unwrap().place_id, "b");
    }

    #[test]
    fn ties_resolve_to_the_first_candidate() {
        let catalog = LocationCatalog::new(vec![place("first", 1.0, 1.0), place("second", 1.0, 1.0)]);
        let nearest = catalog.nearest(Point::new(0.0, 0.0)).unwrap();
        assert_eq!(nearest.place_id, "first");
    }

    #[test]
    fn lookup_by_id() {
        let catalog = LocationCatalog::new(vec![place("a", 0.0, 0.0)]);
        assert!(catalog.get("a").is_some());
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn distance_formatting() {
        assert_eq!(format_distance(950.0), "950 m");
        assert_eq!(format_distance(2440.0), "2.4 km");
        assert_eq!(format_distance(0.4), "0 m");
    }
}
