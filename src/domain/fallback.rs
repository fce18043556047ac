use crate::places::{PlaceProperties, PlaceRecord};

/// The fixed pair served when live search is entirely unavailable. These
/// still go through the normalizer so photo assignment applies. A search
/// that merely returns zero results does NOT trigger this path.
pub fn fallback_places(limit: usize) -> Vec<PlaceRecord> {
    let mut shops = vec![
        PlaceRecord {
            id: Some("starbucks-media-fallback".to_string()),
            text: Some("Starbucks Media".to_string()),
            properties: Some(PlaceProperties {
                address: Some("Orange St, Media, PA".to_string()),
            }),
            ..PlaceRecord::default()
        },
        PlaceRecord {
            id: Some("dunkin-broomall-fallback".to_string()),
            text: Some("Dunkin' Broomall".to_string()),
            properties: Some(PlaceProperties {
                address: Some("W Chester Pike, Broomall, PA".to_string()),
            }),
            ..PlaceRecord::default()
        },
    ];

    shops.truncate(limit);
    shops
}
