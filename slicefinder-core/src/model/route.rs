//! Route records as returned by the directions service.

use geo::Point;

/// How a step is traveled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelMode {
    Walking,
    Transit,
    Driving,
    Bicycling,
}

impl TravelMode {
    /// Parse the service's upper-case mode string. Unknown modes read as
    /// walking, which selects the generic asset downstream.
    pub fn from_api(mode: &str) -> Self {
        match mode {
            "TRANSIT" => TravelMode::Transit,
            "DRIVING" => TravelMode::Driving,
            "BICYCLING" => TravelMode::Bicycling,
            _ => TravelMode::Walking,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Walking => "WALKING",
            TravelMode::Transit => "TRANSIT",
            TravelMode::Driving => "DRIVING",
            TravelMode::Bicycling => "BICYCLING",
        }
    }

    /// Lower-case form used in request query strings.
    pub fn as_query(self) -> &'static str {
        match self {
            TravelMode::Walking => "walking",
            TravelMode::Transit => "transit",
            TravelMode::Driving => "driving",
            TravelMode::Bicycling => "bicycling",
        }
    }

    pub fn is_transit(self) -> bool {
        self == TravelMode::Transit
    }
}

/// Extra facts carried by a transit step.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitDetail {
    pub num_stops: u32,
    /// Line color as a hex string, when the line declares one.
    pub line_color: Option<String>,
    pub line_icon: Option<String>,
    pub vehicle_icon: Option<String>,
    pub departure_stop: String,
    pub departure_time_text: String,
    pub arrival_stop: String,
    pub arrival_time_text: String,
}

/// One leg of the walkthrough, from boarding to alighting or corner to
/// corner.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteStep {
    pub start: Point<f64>,
    pub end: Point<f64>,
    pub distance_text: String,
    pub duration_text: String,
    pub mode: TravelMode,
    /// Encoded polyline for this step.
    pub polyline: String,
    pub instructions: String,
    pub transit: Option<TransitDetail>,
}

/// Corners of the box enclosing the whole route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteBounds {
    pub northeast: Point<f64>,
    pub southwest: Point<f64>,
}

/// A fetched route. Steps are ordered from origin to destination and are
/// never empty once the route leaves the loading layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub steps: Vec<RouteStep>,
    pub distance_text: String,
    pub duration_text: String,
    pub bounds: RouteBounds,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn travel_mode_round_trips_known_values() {
        for mode in [
            TravelMode::Walking,
            TravelMode::Transit,
            TravelMode::Driving,
            TravelMode::Bicycling,
        ] {
            assert_eq!(TravelMode::from_api(mode.as_str()), mode);
        }
    }

    #[test]
    fn unknown_mode_reads_as_walking() {
        assert_eq!(TravelMode::from_api("FERRY"), TravelMode::Walking);
        assert_eq!(TravelMode::from_api(""), TravelMode::Walking);
    }
}
