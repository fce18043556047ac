use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum SearchError {
    Network(String),
    BadStatus(u16, String),
    JsonParse(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Network(msg) => write!(f, "Network error: {msg}"),
            SearchError::BadStatus(status, body) => {
                write!(f, "Upstream HTTP {status}: {body}")
            }
            SearchError::JsonParse(msg) => write!(f, "JSON parse error: {msg}"),
        }
    }
}

impl Error for SearchError {}
