use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum StoreError {
    Network(String),
    Api(u16, String),
    Malformed(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Network(msg) => write!(f, "Network error: {msg}"),
            StoreError::Api(status, body) => write!(f, "Store API HTTP {status}: {body}"),
            StoreError::Malformed(msg) => write!(f, "Malformed store response: {msg}"),
        }
    }
}

impl Error for StoreError {}
