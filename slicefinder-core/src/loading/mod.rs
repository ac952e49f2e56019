//! This module is responsible for talking to the external services
//! (candidate database, places details, directions) and assembling the
//! immutable records the rest of the crate works with.

mod builder;
mod config;
mod directions;
mod firebase;
mod places;
mod raw_types;

pub use builder::build_catalog;
pub use config::FinderConfig;
pub use directions::GoogleDirectionsClient;
pub use firebase::FirebaseCandidateStore;
pub use places::GooglePlacesClient;
