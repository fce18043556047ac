use crate::domain::listing::Listing;
use crate::places::PlaceRecord;

/// Address sentinel used when neither backend supplied one.
pub const MISSING_ADDRESS: &str = "Address not available";

/// Maps one raw place record plus the shared photo list into a `Listing`.
///
/// Pure: no I/O, same inputs always produce the same listing. For every
/// field the first non-empty source wins, and the last resort is a
/// synthesized or default value, so the result never has an unset field.
pub fn normalize(idx: usize, raw: &PlaceRecord, photos: &[String]) -> Listing {
    let id = non_empty(raw.id.as_deref())
        .or_else(|| non_empty(raw.place_id.as_deref()))
        .unwrap_or_else(|| format!("coffee-shop-{idx}"));

    let name = non_empty(raw.text.as_deref())
        .or_else(|| non_empty(raw.title.as_deref()))
        .or_else(|| non_empty(raw.name.as_deref()))
        .unwrap_or_else(|| format!("Coffee Shop {idx}"));

    let address = non_empty(raw.properties.as_ref().and_then(|p| p.address.as_deref()))
        .or_else(|| non_empty(raw.address.as_deref()))
        .unwrap_or_else(|| MISSING_ADDRESS.to_string());

    // Photos are assigned positionally; records past the end of the photo
    // list get no image.
    let img_url = photos.get(idx).cloned().unwrap_or_default();

    Listing {
        id,
        name,
        address,
        img_url,
        voting: 0,
        description: raw.description.clone().unwrap_or_default(),
        rating: raw.rating.unwrap_or(0.0),
        total_reviews: raw.reviews.unwrap_or(0),
        price_range: raw.price.clone().unwrap_or_default(),
        offerings: offerings_json(raw),
        comments: "[]".to_string(),
        user_ratings: "[]".to_string(),
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

// The maps-search backend reports amenities as a list of opaque extension
// objects; the one carrying an "offerings" key holds the list we keep.
fn offerings_json(raw: &PlaceRecord) -> String {
    raw.extensions
        .as_ref()
        .and_then(|exts| exts.iter().find_map(|ext| ext.get("offerings")))
        .map(|offerings| offerings.to_string())
        .unwrap_or_else(|| "[]".to_string())
}
