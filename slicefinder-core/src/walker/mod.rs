//! Step-by-step walkthrough of a fetched route.
//!
//! The walker wraps a fixed [`Route`] and answers display queries for the
//! current position: an overview before the first step, then one view per
//! step as the caller advances.

mod style;
mod to_geojson;

pub use style::{Color, StrokeStyle};
pub use to_geojson::StyledPath;

use geo::Point;
use geojson::FeatureCollection;

use crate::Error;
use crate::model::{Route, RouteStep};

/// Where the walkthrough currently points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkerState {
    /// Whole-route summary, shown before the first step.
    Overview,
    /// Zero-based index into the route's steps.
    AtStep(usize),
}

/// Image chosen for the current view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetKey {
    /// Generic route-overview art.
    Overview,
    /// Generic walking art.
    Walking,
    /// Generic transit art, used when the line advertises no icon.
    TransitFallback,
    /// Icon published by the transit line or its vehicle type.
    IconUrl(String),
}

/// Display facts for the current state, ready to bind to a UI.
#[derive(Debug, Clone, PartialEq)]
pub struct StepView {
    pub label: String,
    pub distance_text: String,
    pub duration_text: String,
    pub asset: AssetKey,
    /// Corners to fit the camera to: the route box for the overview, the
    /// step's start/end for a step.
    pub bounds: (Point<f64>, Point<f64>),
}

/// Walks a fixed route one step at a time.
///
/// Starts at [`WalkerState::Overview`]. `advance` and `retreat` saturate at
/// the last step and the overview respectively, so callers can wire them
/// straight to next/back buttons.
#[derive(Debug, Clone)]
pub struct RouteWalker {
    route: Route,
    destination: String,
    state: WalkerState,
}

impl RouteWalker {
    /// Wrap a route for walking.
    ///
    /// # Errors
    ///
    /// [`Error::NoRouteFound`] if the route has no steps; an empty route is
    /// no route.
    pub fn new(route: Route, destination: impl Into<String>) -> Result<Self, Error> {
        if route.steps.is_empty() {
            return Err(Error::NoRouteFound);
        }
        Ok(Self {
            route,
            destination: destination.into(),
            state: WalkerState::Overview,
        })
    }

    pub fn state(&self) -> WalkerState {
        self.state
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn step_count(&self) -> usize {
        self.route.steps.len()
    }

    /// True exactly when the walkthrough sits on the last step.
    pub fn is_final(&self) -> bool {
        self.state == WalkerState::AtStep(self.step_count() - 1)
    }

    /// Move toward the destination; a no-op on the last step.
    pub fn advance(&mut self) {
        self.state = match self.state {
            WalkerState::Overview => WalkerState::AtStep(0),
            WalkerState::AtStep(i) if i + 1 < self.step_count() => WalkerState::AtStep(i + 1),
            last => last,
        };
    }

    /// Move back toward the overview; a no-op at the overview.
    pub fn retreat(&mut self) {
        self.state = match self.state {
            WalkerState::Overview | WalkerState::AtStep(0) => WalkerState::Overview,
            WalkerState::AtStep(i) => WalkerState::AtStep(i - 1),
        };
    }

    pub fn current_view(&self) -> StepView {
        match self.state {
            WalkerState::Overview => self.overview_view(),
            WalkerState::AtStep(i) => self.step_view(i),
        }
    }

    /// Every step's decoded path tagged with its stroke, for drawing the
    /// whole route at once.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedPolyline`] if any step carries a bad encoding.
    pub fn overview_paths(&self) -> Result<Vec<StyledPath>, Error> {
        to_geojson::overview_paths(&self.route)
    }

    /// The overview as GeoJSON: one styled feature per step, plus
    /// departure/arrival markers for transit steps.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedPolyline`] if any step carries a bad encoding.
    pub fn overview_geojson(&self) -> Result<FeatureCollection, Error> {
        to_geojson::overview_geojson(&self.route)
    }

    fn overview_view(&self) -> StepView {
        StepView {
            label: format!("Route to {}", self.destination),
            distance_text: self.route.distance_text.clone(),
            duration_text: self.route.duration_text.clone(),
            asset: AssetKey::Overview,
            bounds: (self.route.bounds.northeast, self.route.bounds.southwest),
        }
    }

    fn step_view(&self, idx: usize) -> StepView {
        let step = &self.route.steps[idx];

        // The final approach is always on foot.
        let label = if idx == self.step_count() - 1 {
            format!("Walk to {}", self.destination)
        } else {
            step.instructions.clone()
        };

        // Transit steps count stops instead of distance.
        let distance_text = match &step.transit {
            Some(details) => format!("{} stops", details.num_stops),
            None => step.distance_text.clone(),
        };

        StepView {
            label,
            distance_text,
            duration_text: step.duration_text.clone(),
            asset: step_asset(step),
            bounds: (step.start, step.end),
        }
    }
}

/// Transit lines advertise their own icon when they have one; everything
/// else shares the walking asset.
fn step_asset(step: &RouteStep) -> AssetKey {
    if !step.mode.is_transit() {
        return AssetKey::Walking;
    }
    let Some(details) = &step.transit else {
        return AssetKey::TransitFallback;
    };
    details
        .line_icon
        .clone()
        .or_else(|| details.vehicle_icon.clone())
        .map_or(AssetKey::TransitFallback, AssetKey::IconUrl)
}
