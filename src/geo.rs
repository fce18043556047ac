use crate::errors::ServerError;

/// A validated coordinate pair, kept as the original strings so the values
/// we forward upstream are exactly the values the client sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongLat {
    pub lng: String,
    pub lat: String,
}

/// Parses a `"<longitude>,<latitude>"` string.
///
/// Each part must match: optional sign, digits, optionally a single decimal
/// point followed by digits. Whitespace around the comma is tolerated.
/// Anything else (missing comma, extra segments, double decimals, stray
/// characters) is rejected — we never guess at coordinates.
pub fn parse_long_lat(raw: &str) -> Result<LongLat, ServerError> {
    let mut parts = raw.split(',');

    let (lng, lat) = match (parts.next(), parts.next(), parts.next()) {
        (Some(lng), Some(lat), None) => (lng.trim(), lat.trim()),
        _ => return Err(invalid_coordinates()),
    };

    if !is_coordinate(lng) || !is_coordinate(lat) {
        return Err(invalid_coordinates());
    }

    Ok(LongLat {
        lng: lng.to_string(),
        lat: lat.to_string(),
    })
}

/// Parses the result-count limit. Only integers 1..=20 are accepted.
pub fn parse_limit(raw: &str) -> Result<usize, ServerError> {
    let limit: usize = raw
        .trim()
        .parse()
        .map_err(|_| ServerError::BadRequest("Invalid limit (1-20)".to_string()))?;

    if (1..=20).contains(&limit) {
        Ok(limit)
    } else {
        Err(ServerError::BadRequest("Invalid limit (1-20)".to_string()))
    }
}

fn invalid_coordinates() -> ServerError {
    ServerError::BadRequest("Invalid coordinates".to_string())
}

fn is_coordinate(part: &str) -> bool {
    let digits = part.strip_prefix(['+', '-']).unwrap_or(part);
    if digits.is_empty() {
        return false;
    }

    let mut pieces = digits.split('.');
    let int_part = pieces.next().unwrap_or("");
    let frac_part = pieces.next();

    // A third piece means more than one decimal point.
    if pieces.next().is_some() {
        return false;
    }

    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    match frac_part {
        None => true,
        Some(frac) => !frac.is_empty() && frac.bytes().all(|b| b.is_ascii_digit()),
    }
}
