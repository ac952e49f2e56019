//! serde mirrors of the places and directions wire formats. Absent fields
//! default so a sparse response never fails deserialization outright.

use serde::Deserialize;

#[derive(Debug, Deserialize, Default, Clone, Copy)]
#[serde(default)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn point(self) -> geo::Point<f64> {
        geo::Point::new(self.lng, self.lat)
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct PlacesResponse {
    pub status: String,
    pub result: PlaceResult,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct PlaceResult {
    pub place_id: String,
    pub name: String,
    pub formatted_address: String,
    pub formatted_phone_number: Option<String>,
    pub website: Option<String>,
    pub rating: f64,
    pub geometry: RawGeometry,
    pub opening_hours: Option<RawOpeningHours>,
    pub photos: Vec<RawPhoto>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RawGeometry {
    pub location: LatLng,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RawOpeningHours {
    pub open_now: bool,
    pub periods: Vec<RawPeriod>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RawPeriod {
    pub open: Option<RawDayTime>,
    pub close: Option<RawDayTime>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RawDayTime {
    pub day: u8,
    pub time: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RawPhoto {
    pub photo_reference: String,
    pub height: i64,
    pub width: i64,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct DirectionsResponse {
    pub status: String,
    pub routes: Vec<RawRoute>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RawRoute {
    pub bounds: RawBounds,
    pub legs: Vec<RawLeg>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RawBounds {
    pub northeast: LatLng,
    pub southwest: LatLng,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RawLeg {
    pub distance: RawText,
    pub duration: RawText,
    pub steps: Vec<RawStep>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RawText {
    pub text: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RawStep {
    pub start_location: LatLng,
    pub end_location: LatLng,
    pub distance: RawText,
    pub duration: RawText,
    pub travel_mode: String,
    pub html_instructions: String,
    pub polyline: RawPolyline,
    pub transit_details: Option<RawTransitDetails>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RawPolyline {
    pub points: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RawTransitDetails {
    pub num_stops: u32,
    pub line: RawLine,
    pub departure_stop: RawName,
    pub arrival_stop: RawName,
    pub departure_time: RawText,
    pub arrival_time: RawText,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RawLine {
    pub color: Option<String>,
    pub icon: Option<String>,
    pub vehicle: RawVehicle,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RawVehicle {
    pub icon: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RawName {
    pub name: String,
}
