//! Client for the directions endpoint.

use geo::Point;
use log::debug;
use reqwest::Client;

use super::config::FinderConfig;
use super::raw_types::{DirectionsResponse, RawStep, RawTransitDetails};
use crate::Error;
use crate::model::{Route, RouteBounds, RouteStep, TransitDetail, TravelMode};
use crate::sources::DirectionsSource;

/// HTTP client for the directions service.
#[derive(Debug, Clone)]
pub struct GoogleDirectionsClient {
    http: Client,
    directions_url: String,
    api_key: String,
}

impl GoogleDirectionsClient {
    pub fn new(config: &FinderConfig) -> Self {
        Self {
            http: Client::new(),
            directions_url: config.directions_url.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

impl DirectionsSource for GoogleDirectionsClient {
    async fn route(
        &self,
        origin: Point<f64>,
        destination_place_id: &str,
        mode: TravelMode,
    ) -> Result<Route, Error> {
        debug!("Requesting {mode:?} route to {destination_place_id}");

        let origin_param = format!("{},{}", origin.y(), origin.x());
        let destination_param = format!("place_id:{destination_place_id}");
        let response = self
            .http
            .get(&self.directions_url)
            .query(&[
                ("origin", origin_param.as_str()),
                ("destination", destination_param.as_str()),
                ("mode", mode.as_query()),
                ("alternatives", "true"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Error::ServiceError(format!(
                "directions endpoint returned {}",
                response.status()
            )));
        }

        let payload: DirectionsResponse = response.json().await?;
        route_from_response(payload)
    }
}

/// Map the wire response into a [`Route`], keeping the first returned
/// alternative. Origin and destination are single points, so the route has
/// exactly one leg; its steps become the walkthrough.
pub(super) fn route_from_response(payload: DirectionsResponse) -> Result<Route, Error> {
    match payload.status.as_str() {
        "OK" => {}
        "ZERO_RESULTS" | "NOT_FOUND" => return Err(Error::NoRouteFound),
        other => {
            return Err(Error::ServiceError(format!(
                "directions lookup failed: {other}"
            )));
        }
    }

    let route = payload.routes.into_iter().next().ok_or(Error::NoRouteFound)?;
    let bounds = RouteBounds {
        northeast: route.bounds.northeast.point(),
        southwest: route.bounds.southwest.point(),
    };
    let leg = route.legs.into_iter().next().ok_or(Error::NoRouteFound)?;

    let steps: Vec<RouteStep> = leg.steps.into_iter().map(route_step).collect();
    if steps.is_empty() {
        return Err(Error::NoRouteFound);
    }

    Ok(Route {
        steps,
        distance_text: leg.distance.text,
        duration_text: leg.duration.text,
        bounds,
    })
}

fn route_step(raw: RawStep) -> RouteStep {
    RouteStep {
        start: raw.start_location.point(),
        end: raw.end_location.point(),
        distance_text: raw.distance.text,
        duration_text: raw.duration.text,
        mode: TravelMode::from_api(&raw.travel_mode),
        polyline: raw.polyline.points,
        instructions: strip_tags(&raw.html_instructions),
        transit: raw.transit_details.map(transit_detail),
    }
}

fn transit_detail(raw: RawTransitDetails) -> TransitDetail {
    TransitDetail {
        num_stops: raw.num_stops,
        line_color: raw.line.color,
        line_icon: raw.line.icon,
        vehicle_icon: raw.line.vehicle.icon,
        departure_stop: raw.departure_stop.name,
        departure_time_text: raw.departure_time.text,
        arrival_stop: raw.arrival_stop.name,
        arrival_time_text: raw.arrival_time.text,
    }
}

/// Instruction text arrives with inline HTML markup; strip the tags for
/// plain-text display.
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.replace("&nbsp;", " ")
}
