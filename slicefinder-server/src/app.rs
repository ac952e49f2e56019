//! Router, shared state, and request handlers.

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use chrono::{Datelike, Local};
use geo::Point;
use serde::{Deserialize, Serialize};
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use slicefinder_core::catalog::{distance_meters, format_distance};
use slicefinder_core::loading::{FinderConfig, GoogleDirectionsClient, GooglePlacesClient};
use slicefinder_core::model::{MarkerData, PlaceRecord, star_string};
use slicefinder_core::sources::{DirectionsSource, FixedLocationSource, LocationSource, PlaceSource};
use slicefinder_core::walker::{AssetKey, RouteWalker, StepView};
use slicefinder_core::{Error, LocationCatalog, METERS_PER_MILE};

use crate::error::ApiError;

pub struct AppState {
    pub catalog: LocationCatalog,
    pub config: FinderConfig,
    pub places: GooglePlacesClient,
    pub directions: GoogleDirectionsClient,
    pub fallback_location: FixedLocationSource,
}

impl AppState {
    pub fn new(config: FinderConfig, catalog: LocationCatalog) -> Self {
        let fallback_location = match config.default_position {
            Some([lat, lng]) => FixedLocationSource::new(Point::new(lng, lat)),
            None => FixedLocationSource::unavailable(),
        };
        Self {
            places: GooglePlacesClient::new(&config),
            directions: GoogleDirectionsClient::new(&config),
            fallback_location,
            config,
            catalog,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/places", get(list_places))
        .route("/nearest", get(nearest))
        .route("/route", post(route_walkthrough))
        .route("/photo", get(photo))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(ConcurrencyLimitLayer::new(64))
        .with_state(Arc::new(state))
}

async fn health() -> &'static str {
    "OK"
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlaceSummary {
    pub place_id: String,
    pub name: String,
    pub address: String,
    pub rating: String,
    pub status: String,
    pub lat: f64,
    pub lng: f64,
}

fn summarize(place: &PlaceRecord) -> PlaceSummary {
    PlaceSummary {
        place_id: place.place_id.clone(),
        name: place.name.clone(),
        // First segment of the formatted address, the way the marker card
        // shows it.
        address: place
            .address
            .split(',')
            .next()
            .unwrap_or_default()
            .trim()
            .to_string(),
        rating: star_string(place.rating),
        status: place
            .hours
            .as_ref()
            .map_or_else(|| "hours unknown".to_string(), |h| {
                h.status_at(Local::now().weekday())
            }),
        lat: place.geometry.y(),
        lng: place.geometry.x(),
    }
}

async fn list_places(State(state): State<Arc<AppState>>) -> Json<Vec<PlaceSummary>> {
    Json(state.catalog.places().iter().map(summarize).collect())
}

#[derive(Debug, Deserialize)]
struct NearestQuery {
    lat: Option<f64>,
    lng: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NearestResponse {
    pub place: PlaceSummary,
    pub distance_m: f64,
    pub distance_text: String,
    pub distance_mi: f64,
}

async fn nearest(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NearestQuery>,
) -> Result<Json<NearestResponse>, ApiError> {
    let reference = match (query.lat, query.lng) {
        (Some(lat), Some(lng)) => Point::new(lng, lat),
        _ => state.fallback_location.current_position().await?,
    };

    let place = state.catalog.nearest(reference)?;
    let meters = distance_meters(reference, place.geometry);
    Ok(Json(NearestResponse {
        place: summarize(place),
        distance_m: meters,
        distance_text: format_distance(meters),
        // Miles exist only at this boundary; the core stays in meters.
        distance_mi: meters / METERS_PER_MILE,
    }))
}

#[derive(Debug, Deserialize)]
struct RouteRequest {
    lat: f64,
    lng: f64,
    place_id: String,
}

#[derive(Debug, Serialize)]
struct StepViewDto {
    label: String,
    distance_text: String,
    duration_text: String,
    asset: String,
    /// `[[lat, lng], [lat, lng]]` camera corners.
    bounds: [[f64; 2]; 2],
}

fn view_dto(view: StepView) -> StepViewDto {
    let asset = match view.asset {
        AssetKey::Overview => "overview".to_string(),
        AssetKey::Walking => "walking".to_string(),
        AssetKey::TransitFallback => "transit".to_string(),
        AssetKey::IconUrl(url) => url,
    };
    let (a, b) = view.bounds;
    StepViewDto {
        label: view.label,
        distance_text: view.distance_text,
        duration_text: view.duration_text,
        asset,
        bounds: [[a.y(), a.x()], [b.y(), b.x()]],
    }
}

#[derive(Debug, Serialize)]
struct RouteResponse {
    button_label: Option<String>,
    overview: StepViewDto,
    steps: Vec<StepViewDto>,
    geojson: serde_json::Value,
}

async fn route_walkthrough(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RouteRequest>,
) -> Result<Json<RouteResponse>, ApiError> {
    let destination = state
        .catalog
        .get(&request.place_id)
        .ok_or_else(|| Error::NotFound(request.place_id.clone()))?;

    let origin = Point::new(request.lng, request.lat);
    let route = state
        .directions
        .route(origin, &request.place_id, state.config.travel_mode())
        .await?;

    let marker = MarkerData::Resolved {
        place: destination.clone(),
        route: None,
    }
    .with_route(route.clone());

    let mut walker = RouteWalker::new(route, destination.name.clone())?;
    let geojson = serde_json::to_value(walker.overview_geojson()?)
        .map_err(|err| Error::ServiceError(err.to_string()))?;

    let overview = view_dto(walker.current_view());
    let mut steps = Vec::with_capacity(walker.step_count());
    while !walker.is_final() {
        walker.advance();
        steps.push(view_dto(walker.current_view()));
    }

    Ok(Json(RouteResponse {
        button_label: marker.button_label(),
        overview,
        steps,
        geojson,
    }))
}

#[derive(Debug, Deserialize)]
struct PhotoQuery {
    r#ref: String,
}

async fn photo(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PhotoQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let bytes = state.places.lookup_photo(&query.r#ref).await?;
    Ok(([(header::CONTENT_TYPE, "image/jpeg")], bytes))
}
