//! End-to-end walkthrough: pick the nearest place, wrap a fetched route,
//! step through it, and render the overview geometry.

use geo::Point;

use slicefinder_core::prelude::*;

fn place(id: &str, name: &str, lng: f64, lat: f64) -> PlaceRecord {
    PlaceRecord {
        place_id: id.to_string(),
        name: name.to_string(),
        geometry: Point::new(lng, lat),
        rating: 4.4,
        open_now: true,
        address: "7 Carmine St, New York".to_string(),
        phone: Some("(212) 555-0199".to_string()),
        website: None,
        photo_ref: None,
        hours: None,
    }
}

fn walk_step(instructions: &str, polyline: &str) -> RouteStep {
    RouteStep {
        start: Point::new(-74.0021, 40.7304),
        end: Point::new(-74.0003, 40.7320),
        distance_text: "0.3 km".to_string(),
        duration_text: "4 mins".to_string(),
        mode: TravelMode::Walking,
        polyline: polyline.to_string(),
        instructions: instructions.to_string(),
        transit: None,
    }
}

fn subway_step() -> RouteStep {
    RouteStep {
        start: Point::new(-74.0003, 40.7320),
        end: Point::new(-73.9935, 40.7506),
        distance_text: "2.0 km".to_string(),
        duration_text: "9 mins".to_string(),
        mode: TravelMode::Transit,
        polyline: "_p~iF~ps|U_ulLnnqC".to_string(),
        instructions: "Subway towards Forest Hills".to_string(),
        transit: Some(TransitDetail {
            num_stops: 2,
            line_color: Some("#FF6319".to_string()),
            line_icon: None,
            vehicle_icon: Some("//maps.gstatic.com/subway.png".to_string()),
            departure_stop: "W 4 St".to_string(),
            departure_time_text: "2:10 PM".to_string(),
            arrival_stop: "34 St - Penn Station".to_string(),
            arrival_time_text: "2:19 PM".to_string(),
        }),
    }
}

fn sample_route() -> Route {
    Route {
        steps: vec![
            walk_step("Head north on MacDougal St", "_p~iF~ps|U_ulLnnqC"),
            subway_step(),
            walk_step("Head east on 33rd St", "_p~iF~ps|U_ulLnnqC"),
        ],
        distance_text: "2.6 km".to_string(),
        duration_text: "25 mins".to_string(),
        bounds: RouteBounds {
            northeast: Point::new(-73.9881, 40.7527),
            southwest: Point::new(-74.0021, 40.7304),
        },
    }
}

#[test]
fn nearest_then_walk_the_route() {
    let catalog = LocationCatalog::new(vec![
        place("joes", "Joe's Slices", -74.0021, 40.7304),
        place("prince", "Prince St Pizza", -73.9946, 40.7229),
    ]);

    // Washington Square-ish reference: Joe's wins.
    let reference = Point::new(-73.9975, 40.7308);
    let destination = catalog.nearest(reference).unwrap();
    assert_eq!(destination.place_id, "joes");
    assert!(distance_meters(reference, destination.geometry) < 500.0);

    let mut walker = RouteWalker::new(sample_route(), destination.name.clone()).unwrap();

    // Overview first.
    let overview = walker.current_view();
    assert_eq!(overview.label, "Route to Joe's Slices");
    assert_eq!(overview.distance_text, "2.6 km");
    assert_eq!(overview.asset, AssetKey::Overview);

    // Step 1: walking.
    walker.advance();
    let view = walker.current_view();
    assert_eq!(view.label, "Head north on MacDougal St");
    assert_eq!(view.distance_text, "0.3 km");
    assert!(!walker.is_final());

    // Step 2: the ride counts stops and shows the vehicle icon.
    walker.advance();
    let view = walker.current_view();
    assert_eq!(view.distance_text, "2 stops");
    assert_eq!(
        view.asset,
        AssetKey::IconUrl("//maps.gstatic.com/subway.png".to_string())
    );

    // Step 3: final approach on foot.
    walker.advance();
    assert!(walker.is_final());
    assert_eq!(walker.current_view().label, "Walk to Joe's Slices");

    // Saturates; retreat round-trips.
    walker.advance();
    assert!(walker.is_final());
    walker.retreat();
    assert_eq!(walker.state(), WalkerState::AtStep(1));
}

#[test]
fn overview_geometry_is_styled_per_step() {
    let walker = RouteWalker::new(sample_route(), "Joe's Slices").unwrap();

    let paths = walker.overview_paths().unwrap();
    assert_eq!(paths.len(), 3);
    assert_eq!(paths[0].style.width, 5.0);
    assert_eq!(paths[0].style.color, Color::GRAY);
    assert_eq!(paths[1].style.width, 10.0);
    assert_eq!(paths[1].style.color, Color::parse_hex("#FF6319"));

    let collection = walker.overview_geojson().unwrap();
    // Three step paths plus two stop markers for the transit step.
    assert_eq!(collection.features.len(), 5);
}

#[test]
fn malformed_polyline_surfaces_from_the_walker() {
    let mut route = sample_route();
    route.steps[0].polyline = "not a polyline".to_string();
    let walker = RouteWalker::new(route, "Joe's Slices").unwrap();
    assert!(matches!(
        walker.overview_paths(),
        Err(Error::MalformedPolyline(_))
    ));
}

#[test]
fn marker_flow_caches_the_route() {
    let marker = MarkerData::Unresolved {
        place_id: "joes".to_string(),
        geometry: Point::new(-74.0021, 40.7304),
    };
    let marker = marker
        .resolve(place("joes", "Joe's Slices", -74.0021, 40.7304))
        .with_route(sample_route());
    assert_eq!(marker.button_label().as_deref(), Some("Directions -- 25 mins"));
}
