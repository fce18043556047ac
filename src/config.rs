use crate::errors::ServerError;
use std::env;

/// Runtime configuration, read once at startup so a missing key fails the
/// process immediately instead of the first request that needs it.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub serp_api_key: String,
    pub unsplash_access_key: String,
    pub mapbox_token: String,
    pub airtable_token: String,
    pub airtable_base_id: String,
    pub airtable_table: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ServerError> {
        Ok(Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string()),
            serp_api_key: require("SERP_API_KEY")?,
            unsplash_access_key: require("UNSPLASH_ACCESS_KEY")?,
            mapbox_token: require("MAPBOX_API")?,
            airtable_token: require("AIRTABLE_TOKEN")?,
            airtable_base_id: require("AIRTABLE_BASE_ID")?,
            airtable_table: env::var("AIRTABLE_TABLE_NAME").unwrap_or_else(|_| "Table 1".to_string()),
        })
    }
}

fn require(key: &str) -> Result<String, ServerError> {
    env::var(key).map_err(|_| ServerError::Config(format!("{key} environment variable not set")))
}
