use crate::places::SearchError;
use crate::store::StoreError;
use std::fmt;

/// Errors surfaced by the route handlers. Adapter-level failures are folded
/// in via the `From` impls below so callers can still tell an upstream
/// outage apart from a record-store outage or a plain bad request.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    Upstream(String),
    Store(String),
    Config(String),
    InternalError,
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::Upstream(msg) => write!(f, "Upstream error: {msg}"),
            ServerError::Store(msg) => write!(f, "Record store error: {msg}"),
            ServerError::Config(msg) => write!(f, "Configuration error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<SearchError> for ServerError {
    fn from(err: SearchError) -> Self {
        ServerError::Upstream(err.to_string())
    }
}

impl From<StoreError> for ServerError {
    fn from(err: StoreError) -> Self {
        ServerError::Store(err.to_string())
    }
}
