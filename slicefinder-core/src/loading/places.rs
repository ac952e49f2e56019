//! Client for the place-details and photo endpoints.

use log::debug;
use reqwest::Client;

use super::config::FinderConfig;
use super::raw_types::{PlaceResult, PlacesResponse};
use crate::Error;
use crate::model::{OpenPeriod, OpeningHours, PlaceRecord};
use crate::sources::PlaceSource;

/// HTTP client for the places service.
#[derive(Debug, Clone)]
pub struct GooglePlacesClient {
    http: Client,
    places_url: String,
    photo_url: String,
    api_key: String,
}

impl GooglePlacesClient {
    pub fn new(config: &FinderConfig) -> Self {
        Self {
            http: Client::new(),
            places_url: config.places_url.clone(),
            photo_url: config.photo_url.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

impl PlaceSource for GooglePlacesClient {
    async fn lookup_place(&self, place_id: &str) -> Result<PlaceRecord, Error> {
        debug!("Looking up place {place_id}");

        let response = self
            .http
            .get(&self.places_url)
            .query(&[("placeid", place_id), ("key", self.api_key.as_str())])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Error::ServiceError(format!(
                "places endpoint returned {}",
                response.status()
            )));
        }

        let payload: PlacesResponse = response.json().await?;
        place_from_response(place_id, payload)
    }

    async fn lookup_photo(&self, photo_ref: &str) -> Result<Vec<u8>, Error> {
        let response = self
            .http
            .get(&self.photo_url)
            .query(&[
                ("photoreference", photo_ref),
                ("maxwidth", "640"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Error::NotFound(photo_ref.to_string()));
        }
        Ok(response.bytes().await?.to_vec())
    }
}

/// Map the wire response into a [`PlaceRecord`].
pub(super) fn place_from_response(
    place_id: &str,
    payload: PlacesResponse,
) -> Result<PlaceRecord, Error> {
    match payload.status.as_str() {
        "OK" => Ok(place_record(payload.result)),
        "NOT_FOUND" | "ZERO_RESULTS" => Err(Error::NotFound(place_id.to_string())),
        other => Err(Error::ServiceError(format!("place lookup failed: {other}"))),
    }
}

fn place_record(result: PlaceResult) -> PlaceRecord {
    let hours = result.opening_hours.map(|raw| OpeningHours {
        open_now: raw.open_now,
        periods: raw
            .periods
            .into_iter()
            .filter_map(|p| {
                let open = p.open?;
                Some(OpenPeriod {
                    day: open.day,
                    open: open.time,
                    close: p.close.map(|c| c.time),
                })
            })
            .collect(),
    });

    PlaceRecord {
        geometry: result.geometry.location.point(),
        place_id: result.place_id,
        name: result.name,
        rating: result.rating,
        // A place that reports no hours at all is never treated as open.
        open_now: hours.as_ref().is_some_and(|h| h.open_now),
        address: result.formatted_address,
        phone: result.formatted_phone_number,
        website: result.website,
        photo_ref: result.photos.into_iter().next().map(|p| p.photo_reference),
        hours,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAILS_FIXTURE: &str = r#"{
        "status": "OK",
        "result": {
            "place_id": "ChIJd8kKgtZYwokRjyOQ-3Zz1eY",
            "name": "Joe's Slices",
            "formatted_address": "7 Carmine St, New York, NY 10014, USA",
            "formatted_phone_number": "(212) 555-0199",
            "website": "https://example.com",
            "rating": 4.5,
            "geometry": { "location": { "lat": 40.7304, "lng": -74.0021 } },
            "opening_hours": {
                "open_now": true,
                "periods": [
                    { "open": { "day": 1, "time": "1100" }, "close": { "day": 1, "time": "2300" } }
                ]
            },
            "photos": [
                { "photo_reference": "ref-1", "height": 480, "width": 640 },
                { "photo_reference": "ref-2", "height": 480, "width": 640 }
            ]
        }
    }"#;

    #[test]
    fn maps_full_details_response() {
        let payload: PlacesResponse = serde_json::from_str(DETAILS_FIXTURE).unwrap();
        assert_eq!(payload.status, "OK");

        let place = place_record(payload.result);
        assert_eq!(place.place_id, "ChIJd8kKgtZYwokRjyOQ-3Zz1eY");
        assert_eq!(place.name, "Joe's Slices");
        assert_eq!(place.geometry, geo::Point::new(-74.0021, 40.7304));
        assert_eq!(place.rating, 4.5);
        assert!(place.open_now);
        assert_eq!(place.phone.as_deref(), Some("(212) 555-0199"));
        assert_eq!(place.photo_ref.as_deref(), Some("ref-1"));

        let hours = place.hours.unwrap();
        assert_eq!(hours.periods.len(), 1);
        assert_eq!(hours.periods[0].close.as_deref(), Some("2300"));
    }

    #[test]
    fn not_found_status_maps_to_not_found() {
        let payload: PlacesResponse =
            serde_json::from_str(r#"{ "status": "NOT_FOUND" }"#).unwrap();
        assert!(matches!(
            place_from_response("ghost", payload),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn unexpected_status_is_a_service_error() {
        let payload: PlacesResponse =
            serde_json::from_str(r#"{ "status": "REQUEST_DENIED" }"#).unwrap();
        assert!(matches!(
            place_from_response("x", payload),
            Err(Error::ServiceError(_))
        ));
    }

    #[test]
    fn missing_hours_means_not_open() {
        let payload: PlacesResponse = serde_json::from_str(
            r#"{ "status": "OK", "result": { "place_id": "x", "name": "Bare" } }"#,
        )
        .unwrap();
        let place = place_record(payload.result);
        assert!(!place.open_now);
        assert!(place.hours.is_none());
        assert!(place.photo_ref.is_none());
    }
}
