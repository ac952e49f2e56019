//! Configuration for the data-loading layer.

use std::time::Duration;

use serde::Deserialize;

use crate::DEFAULT_LOOKUP_TIMEOUT;
use crate::model::TravelMode;

/// Where the finder gets its data and how long it waits for it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FinderConfig {
    /// API key passed to the places and directions services.
    pub api_key: String,
    /// Place-details endpoint.
    pub places_url: String,
    /// Place-photo endpoint.
    pub photo_url: String,
    /// Directions endpoint.
    pub directions_url: String,
    /// Candidate database root (realtime-database REST).
    pub database_url: String,
    /// Path under the database root holding the candidate id list.
    pub database_path: String,
    /// Travel mode requested from the directions service.
    pub mode: String,
    /// Per-lookup deadline during the catalog build, in seconds.
    pub lookup_timeout_secs: u64,
    /// Position to fall back to when the caller supplies none, as
    /// `[latitude, longitude]`.
    pub default_position: Option<[f64; 2]>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            places_url: "https://maps.googleapis.com/maps/api/place/details/json".to_string(),
            photo_url: "https://maps.googleapis.com/maps/api/place/photo".to_string(),
            directions_url: "https://maps.googleapis.com/maps/api/directions/json".to_string(),
            database_url: String::new(),
            database_path: "places".to_string(),
            mode: "transit".to_string(),
            lookup_timeout_secs: DEFAULT_LOOKUP_TIMEOUT.as_secs(),
            default_position: None,
        }
    }
}

impl FinderConfig {
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.lookup_timeout_secs)
    }

    pub fn travel_mode(&self) -> TravelMode {
        TravelMode::from_api(&self.mode.to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_request_transit() {
        let config = FinderConfig::default();
        assert_eq!(config.travel_mode(), TravelMode::Transit);
        assert_eq!(config.lookup_timeout(), DEFAULT_LOOKUP_TIMEOUT);
    }

    #[test]
    fn mode_parsing_is_case_insensitive() {
        let config = FinderConfig {
            mode: "Walking".to_string(),
            ..FinderConfig::default()
        };
        assert_eq!(config.travel_mode(), TravelMode::Walking);
    }
}
