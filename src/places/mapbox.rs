use crate::places::models::PlaceRecord;
use crate::places::{PlaceLookup, SearchError};
use reqwest::blocking::Client;
use serde::Deserialize;

const MAPBOX_PLACES_URL: &str = "https://api.mapbox.com/geocoding/v5/mapbox.places";

/// Geocoding backend, keyed by a place id. Used for the single-listing
/// lookup; returns at most one feature.
pub struct MapboxLookup {
    client: Client,
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    features: Vec<PlaceRecord>,
}

impl MapboxLookup {
    pub fn new(client: Client, access_token: String) -> Self {
        Self {
            client,
            access_token,
        }
    }
}

impl PlaceLookup for MapboxLookup {
    fn lookup(&self, id: &str) -> Result<Option<PlaceRecord>, SearchError> {
        let url = format!("{MAPBOX_PLACES_URL}/{id}.json");

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("proximity", "ip"),
                ("access_token", self.access_token.as_str()),
            ])
            .send()
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(SearchError::BadStatus(status.as_u16(), text));
        }

        let body: GeocodeResponse = resp
            .json()
            .map_err(|e| SearchError::JsonParse(e.to_string()))?;

        Ok(body.features.into_iter().next())
    }
}
