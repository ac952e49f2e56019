//! GeoJSON export of the route overview, one styled feature per step.

use geo::{LineString, Point};
use geojson::{Feature, FeatureCollection, Geometry};
use serde_json::{Map, Value as JsonValue, json};

use super::style::StrokeStyle;
use crate::Error;
use crate::model::{Route, RouteStep, TravelMode};
use crate::polyline;

/// A decoded step path tagged with its stroke.
#[derive(Debug, Clone)]
pub struct StyledPath {
    pub path: LineString<f64>,
    pub style: StrokeStyle,
    pub mode: TravelMode,
}

pub(super) fn overview_paths(route: &Route) -> Result<Vec<StyledPath>, Error> {
    route
        .steps
        .iter()
        .map(|step| {
            Ok(StyledPath {
                path: polyline::decode(&step.polyline)?,
                style: StrokeStyle::for_step(step),
                mode: step.mode,
            })
        })
        .collect()
}

pub(super) fn overview_geojson(route: &Route) -> Result<FeatureCollection, Error> {
    let mut features = Vec::new();

    for step in &route.steps {
        features.push(step_feature(step)?);

        // Transit steps also pin their boarding and alighting stops.
        if let Some(details) = &step.transit {
            features.push(stop_marker(
                step.start,
                format!("{} from {}", details.departure_time_text, details.departure_stop),
            ));
            features.push(stop_marker(
                step.end,
                format!("{} at {}", details.arrival_stop, details.arrival_time_text),
            ));
        }
    }

    Ok(FeatureCollection {
        features,
        bbox: None,
        foreign_members: None,
    })
}

fn step_feature(step: &RouteStep) -> Result<Feature, Error> {
    let path = polyline::decode(&step.polyline)?;
    let style = StrokeStyle::for_step(step);

    let mut properties = Map::new();
    properties.insert(
        "mode".to_string(),
        JsonValue::String(step.mode.as_str().to_string()),
    );
    properties.insert("stroke_width".to_string(), json!(style.width));
    properties.insert(
        "stroke_color".to_string(),
        JsonValue::String(style.color.to_hex()),
    );

    Ok(Feature {
        bbox: None,
        geometry: Some(Geometry::new((&path).into())),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    })
}

fn stop_marker(at: Point<f64>, title: String) -> Feature {
    let mut properties = Map::new();
    properties.insert("title".to_string(), JsonValue::String(title));

    Feature {
        bbox: None,
        geometry: Some(Geometry::new((&at).into())),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}
