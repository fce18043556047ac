use serde::Deserialize;
use serde_json::Value;

// The two backends disagree on field names, so one record type carries the
// union of both shapes and everything is optional:
//
// place record
//  ├── id / place_id            (geocoding id / maps-search id)
//  ├── text / title / name      (display name, backend-dependent)
//  ├── address                  (maps-search, flat)
//  ├── properties
//  │    └── address             (geocoding, nested)
//  ├── description
//  ├── rating / reviews / price
//  └── extensions               (opaque tag objects, may carry "offerings")

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceRecord {
    pub id: Option<String>,
    pub place_id: Option<String>,

    pub text: Option<String>,
    pub title: Option<String>,
    pub name: Option<String>,

    pub address: Option<String>,
    pub properties: Option<PlaceProperties>,

    pub description: Option<String>,
    pub rating: Option<f64>,
    pub reviews: Option<i64>,
    pub price: Option<String>,
    pub extensions: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceProperties {
    pub address: Option<String>,
}
