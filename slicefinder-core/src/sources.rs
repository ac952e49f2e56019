//! Contracts for the external services the finder consumes.
//!
//! Each collaborator is a plain request/response seam; the HTTP
//! implementations live in [`crate::loading`]. One attempt per user action,
//! no retries — failures surface to the caller as [`Error`] values.

use geo::Point;

use crate::Error;
use crate::model::{PlaceRecord, Route, TravelMode};

/// Place details and photo lookup.
pub trait PlaceSource {
    /// Resolve full place details for a candidate id.
    fn lookup_place(
        &self,
        place_id: &str,
    ) -> impl Future<Output = Result<PlaceRecord, Error>> + Send;

    /// Fetch the raw bytes of a place photo.
    fn lookup_photo(&self, photo_ref: &str) -> impl Future<Output = Result<Vec<u8>, Error>> + Send;
}

/// Turn-by-turn routes between a position and a known place.
pub trait DirectionsSource {
    fn route(
        &self,
        origin: Point<f64>,
        destination_place_id: &str,
        mode: TravelMode,
    ) -> impl Future<Output = Result<Route, Error>> + Send;
}

/// Where the user currently is. Delivered once per session.
pub trait LocationSource {
    fn current_position(&self) -> impl Future<Output = Result<Point<f64>, Error>> + Send;
}

/// The ids of every candidate place worth resolving.
pub trait CandidateStore {
    fn candidate_ids(&self) -> impl Future<Output = Result<Vec<String>, Error>> + Send;
}

/// Location source pinned to a configured coordinate, standing in for a
/// device positioning service.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedLocationSource {
    position: Option<Point<f64>>,
}

impl FixedLocationSource {
    pub fn new(position: Point<f64>) -> Self {
        Self {
            position: Some(position),
        }
    }

    pub fn unavailable() -> Self {
        Self { position: None }
    }
}

impl LocationSource for FixedLocationSource {
    async fn current_position(&self) -> Result<Point<f64>, Error> {
        self.position.ok_or(Error::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixed_source_returns_its_position() {
        let source = FixedLocationSource::new(Point::new(-73.99, 40.73));
        assert_eq!(
            source.current_position().await.unwrap(),
            Point::new(-73.99, 40.73)
        );
    }

    #[tokio::test]
    async fn missing_position_is_unavailable() {
        let source = FixedLocationSource::unavailable();
        assert!(matches!(
            source.current_position().await,
            Err(Error::Unavailable)
        ));
    }
}
