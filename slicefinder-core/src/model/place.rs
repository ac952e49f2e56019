//! Place records and the presentation helpers built on them.

use chrono::{NaiveTime, Timelike, Weekday};
use geo::Point;

use super::route::Route;

/// A pizza place resolved from the places service. Read-only after
/// construction; a catalog snapshot holds at most one record per id.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceRecord {
    pub place_id: String,
    pub name: String,
    pub geometry: Point<f64>,
    pub rating: f64,
    pub open_now: bool,
    pub address: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub photo_ref: Option<String>,
    pub hours: Option<OpeningHours>,
}

/// Weekly opening hours, as reported by the places service.
#[derive(Debug, Clone, PartialEq)]
pub struct OpeningHours {
    pub open_now: bool,
    pub periods: Vec<OpenPeriod>,
}

/// One open/close span. `day` follows the service convention, 0 = Sunday.
/// Times are `HHMM` strings; a missing close time means open around the
/// clock.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenPeriod {
    pub day: u8,
    pub open: String,
    pub close: Option<String>,
}

impl OpeningHours {
    fn period_for(&self, day: Weekday) -> Option<&OpenPeriod> {
        let day = day.num_days_from_sunday() as u8;
        self.periods.iter().find(|p| p.day == day)
    }

    /// Open/closed label for the marker card, e.g. `OPEN until 7 PM`.
    pub fn status_at(&self, day: Weekday) -> String {
        if self.open_now {
            let Some(period) = self.period_for(day) else {
                return "OPEN".to_string();
            };
            match &period.close {
                Some(close) => clock_label(close)
                    .map_or("OPEN".to_string(), |label| format!("OPEN until {label}")),
                None => "OPEN 24 hours".to_string(),
            }
        } else {
            self.period_for(day)
                .and_then(|p| clock_label(&p.open))
                .map_or("CLOSED".to_string(), |label| format!("CLOSED until {label}"))
        }
    }
}

/// `HHMM` to a 12-hour clock label, `1930` -> `7:30 PM`.
fn clock_label(hhmm: &str) -> Option<String> {
    let time = NaiveTime::parse_from_str(hhmm, "%H%M").ok()?;
    let (is_pm, hour) = time.hour12();
    let suffix = if is_pm { "PM" } else { "AM" };
    Some(if time.minute() == 0 {
        format!("{hour} {suffix}")
    } else {
        format!("{hour}:{:02} {suffix}", time.minute())
    })
}

/// Map marker payload. A marker starts as a bare candidate and is switched
/// on explicitly once the places lookup resolves it; a fetched route is
/// cached alongside the record.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkerData {
    Unresolved {
        place_id: String,
        geometry: Point<f64>,
    },
    Resolved {
        place: PlaceRecord,
        route: Option<Route>,
    },
}

impl MarkerData {
    pub fn place_id(&self) -> &str {
        match self {
            MarkerData::Unresolved { place_id, .. } => place_id,
            MarkerData::Resolved { place, .. } => &place.place_id,
        }
    }

    pub fn geometry(&self) -> Point<f64> {
        match self {
            MarkerData::Unresolved { geometry, .. } => *geometry,
            MarkerData::Resolved { place, .. } => place.geometry,
        }
    }

    /// Attach a resolved record, keeping any cached route only if it was
    /// already resolved.
    pub fn resolve(self, place: PlaceRecord) -> MarkerData {
        let route = match self {
            MarkerData::Resolved { route, .. } => route,
            MarkerData::Unresolved { .. } => None,
        };
        MarkerData::Resolved { place, route }
    }

    /// Cache a fetched route. No-op on an unresolved marker.
    pub fn with_route(self, route: Route) -> MarkerData {
        match self {
            MarkerData::Resolved { place, .. } => MarkerData::Resolved {
                place,
                route: Some(route),
            },
            unresolved => unresolved,
        }
    }

    /// Label for the directions button once a route has been cached.
    pub fn button_label(&self) -> Option<String> {
        match self {
            MarkerData::Resolved {
                route: Some(route), ..
            } => Some(format!("Directions -- {}", route.duration_text)),
            _ => None,
        }
    }
}

/// Strip a formatted phone number down to dialable digits.
pub fn dial_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Rating as stars followed by the value, `4.2` -> `★★★★ 4.2`.
pub fn star_string(rating: f64) -> String {
    let stars = "★".repeat(rating.round().max(0.0) as usize);
    format!("{stars} {rating:.1}")
}
