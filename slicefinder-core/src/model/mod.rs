//! Data model for places and the routes leading to them.

pub mod place;
pub mod route;

pub use place::{MarkerData, OpenPeriod, OpeningHours, PlaceRecord, dial_digits, star_string};
pub use route::{Route, RouteBounds, RouteStep, TransitDetail, TravelMode};
