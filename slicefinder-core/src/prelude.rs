pub use crate::{DEFAULT_LOOKUP_TIMEOUT, METERS_PER_MILE};

// Re-export key components
pub use crate::catalog::{LocationCatalog, distance_meters, format_distance};
pub use crate::error::Error;
pub use crate::loading::{
    FinderConfig, FirebaseCandidateStore, GoogleDirectionsClient, GooglePlacesClient,
    build_catalog,
};
pub use crate::model::{
    MarkerData, OpenPeriod, OpeningHours, PlaceRecord, Route, RouteBounds, RouteStep,
    TransitDetail, TravelMode, dial_digits, star_string,
};
pub use crate::polyline::decode as decode_polyline;
pub use crate::sources::{
    CandidateStore, DirectionsSource, FixedLocationSource, LocationSource, PlaceSource,
};
pub use crate::walker::{
    AssetKey, Color, RouteWalker, StepView, StrokeStyle, StyledPath, WalkerState,
};
