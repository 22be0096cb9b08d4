//! Field-level parsing of raw form input
//!
//! Form values arrive as strings. Blank optional fields become `None`;
//! anything that is present but malformed is a validation error.

use crate::errors::{CityMoverError, Result};

/// Trim a required field and reject it when blank
///
/// # Errors
/// * `MissingField` - If the value is empty or whitespace-only
pub fn require_non_empty(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CityMoverError::MissingField {
            field: field.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Trim an optional text field; blank becomes `None`
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Parse the rent field
///
/// # Errors
/// * `InvalidRent` - If the value is not a non-negative whole number
pub fn parse_rent(raw: &str) -> Result<Option<i64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<i64>() {
        Ok(rent) if rent >= 0 => Ok(Some(rent)),
        _ => Err(CityMoverError::InvalidRent {
            value: raw.to_string(),
        }),
    }
}

/// Parse one coordinate, bounded by `limit` degrees either side of zero
fn parse_coordinate(field: &str, raw: &str, limit: f64) -> Result<Option<f64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v.abs() <= limit => Ok(Some(v)),
        _ => Err(CityMoverError::InvalidCoordinates {
            field: field.to_string(),
            value: raw.to_string(),
        }),
    }
}

/// Parse a latitude on its own
///
/// # Errors
/// * `InvalidCoordinates` - If present and not within ±90
pub fn parse_latitude(raw: &str) -> Result<Option<f64>> {
    parse_coordinate("lat", raw, 90.0)
}

/// Parse a longitude on its own
///
/// # Errors
/// * `InvalidCoordinates` - If present and not within ±180
pub fn parse_longitude(raw: &str) -> Result<Option<f64>> {
    parse_coordinate("lon", raw, 180.0)
}

/// Parse the latitude/longitude pair
///
/// Each side is independent; a listing may carry one without the other, but
/// only a complete pair is shown on the map.
///
/// # Errors
/// * `InvalidCoordinates` - If either value is present and not a valid degree value
pub fn parse_coordinates(lat_raw: &str, lon_raw: &str) -> Result<(Option<f64>, Option<f64>)> {
    Ok((parse_latitude(lat_raw)?, parse_longitude(lon_raw)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_empty_trims() {
        assert_eq!(require_non_empty("title", "  Flat ").unwrap(), "Flat");
        assert_eq!(
            require_non_empty("title", "   ").unwrap_err(),
            CityMoverError::MissingField {
                field: "title".to_string()
            }
        );
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(optional_text(""), None);
        assert_eq!(optional_text("  wifi  "), Some("wifi".to_string()));
    }

    #[test]
    fn test_parse_rent() {
        assert_eq!(parse_rent("").unwrap(), None);
        assert_eq!(parse_rent(" 500 ").unwrap(), Some(500));
        assert!(parse_rent("500$").is_err());
        assert!(parse_rent("12.5").is_err());
        assert!(parse_rent("-1").is_err());
    }

    #[test]
    fn test_parse_coordinates() {
        assert_eq!(parse_coordinates("", "").unwrap(), (None, None));
        assert_eq!(
            parse_coordinates("33.51", "36.29").unwrap(),
            (Some(33.51), Some(36.29))
        );
        assert_eq!(parse_coordinates("33.51", "").unwrap(), (Some(33.51), None));
    }

    #[test]
    fn test_parse_coordinates_rejects_garbage_and_out_of_range() {
        let err = parse_coordinates("north", "36.29").unwrap_err();
        assert!(matches!(err, CityMoverError::InvalidCoordinates { ref field, .. } if field == "lat"));
        assert!(parse_coordinates("91", "0").is_err());
        assert!(parse_coordinates("0", "-180.5").is_err());
        assert!(parse_coordinates("NaN", "0").is_err());
    }

    #[test]
    fn test_single_coordinate_parsers() {
        assert_eq!(parse_latitude(" -33.5 ").unwrap(), Some(-33.5));
        assert_eq!(parse_longitude("").unwrap(), None);
        assert!(parse_latitude("120").is_err());
        assert_eq!(parse_longitude("120").unwrap(), Some(120.0));
    }
}
