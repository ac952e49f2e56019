use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no candidate places to search")]
    EmptyCatalog,
    #[error("malformed polyline: {0}")]
    MalformedPolyline(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("no route found to destination")]
    NoRouteFound,
    #[error("service error: {0}")]
    ServiceError(String),
    #[error("location permission denied")]
    PermissionDenied,
    #[error("current location unavailable")]
    Unavailable,
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::ServiceError(err.to_string())
    }
}
