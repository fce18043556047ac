use reqwest::blocking::Client;
use serde::Deserialize;
use std::error::Error;
use std::fmt;

const UNSPLASH_SEARCH_URL: &str = "https://api.unsplash.com/search/photos";
const PHOTO_QUERY: &str = "coffee shop";
// Single page only; listings beyond this index simply get no image.
const PHOTO_PAGE_SIZE: &str = "10";

/// Representative coffee-shop images, assigned to listings by position.
/// This adapter never fails to the caller: any transport or parse problem
/// degrades to an empty list. No pagination, no retry.
pub trait PhotoSource {
    fn fetch_photos(&self) -> Vec<String>;
}

#[derive(Debug)]
pub enum PhotoError {
    Network(String),
    BadStatus(u16),
    JsonParse(String),
}

impl fmt::Display for PhotoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhotoError::Network(msg) => write!(f, "Network error: {msg}"),
            PhotoError::BadStatus(status) => write!(f, "Photo API HTTP {status}"),
            PhotoError::JsonParse(msg) => write!(f, "JSON parse error: {msg}"),
        }
    }
}

impl Error for PhotoError {}

pub struct UnsplashPhotos {
    client: Client,
    access_key: String,
}

#[derive(Debug, Deserialize)]
struct PhotoSearchResponse {
    #[serde(default)]
    results: Vec<PhotoResult>,
}

#[derive(Debug, Deserialize)]
struct PhotoResult {
    #[serde(default)]
    urls: PhotoUrls,
}

#[derive(Debug, Default, Deserialize)]
struct PhotoUrls {
    small: Option<String>,
}

impl UnsplashPhotos {
    pub fn new(client: Client, access_key: String) -> Self {
        Self { client, access_key }
    }

    fn try_fetch(&self) -> Result<Vec<String>, PhotoError> {
        let resp = self
            .client
            .get(UNSPLASH_SEARCH_URL)
            .query(&[
                ("client_id", self.access_key.as_str()),
                ("query", PHOTO_QUERY),
                ("page", "1"),
                ("per_page", PHOTO_PAGE_SIZE),
                ("orientation", "landscape"),
            ])
            .send()
            .map_err(|e| PhotoError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(PhotoError::BadStatus(status.as_u16()));
        }

        let body: PhotoSearchResponse = resp
            .json()
            .map_err(|e| PhotoError::JsonParse(e.to_string()))?;

        Ok(body
            .results
            .into_iter()
            .filter_map(|photo| photo.urls.small)
            .collect())
    }
}

impl PhotoSource for UnsplashPhotos {
    fn fetch_photos(&self) -> Vec<String> {
        match self.try_fetch() {
            Ok(urls) => urls,
            Err(e) => {
                eprintln!("⚠️ Photo lookup failed, continuing without images: {e}");
                Vec::new()
            }
        }
    }
}
