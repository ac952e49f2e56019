//! Finds dollar-slice pizza places near a position and walks the route to
//! the chosen one, step by step.
//!
//! The crate is split the way the data flows: [`loading`] talks to the
//! external services and assembles immutable records, [`catalog`] picks the
//! nearest place, and [`walker`] turns a fetched route into per-step display
//! facts and styled overview geometry.

pub mod catalog;
pub mod error;
pub mod loading;
pub mod model;
pub mod polyline;
pub mod prelude;
pub mod sources;
pub mod walker;

pub use catalog::LocationCatalog;
pub use error::Error;

use std::time::Duration;

/// Default per-lookup deadline during the catalog build.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Meters in one statute mile. Distances are meters everywhere in this
/// crate; converting to miles is a presentation concern.
pub const METERS_PER_MILE: f64 = 1609.344;
