//! Maps core errors onto HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use slicefinder_core::Error;

/// Core error carried out of a handler.
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::EmptyCatalog | Error::NotFound(_) | Error::NoRouteFound => StatusCode::NOT_FOUND,
            Error::PermissionDenied => StatusCode::FORBIDDEN,
            Error::ServiceError(_) | Error::Unavailable => StatusCode::BAD_GATEWAY,
            Error::MalformedPolyline(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
