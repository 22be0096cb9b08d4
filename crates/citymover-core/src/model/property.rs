use serde::{Deserialize, Serialize};

/// A rental listing as stored in the `properties` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: i64,
    pub owner_id: i64,
    pub city_id: i64,
    pub area: Option<String>,
    pub title: String,
    pub description: Option<String>,
    /// Monthly rent, whole currency units
    pub rent: Option<i64>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub services: Option<String>,
}

impl Property {
    /// Map position, only when both coordinates are present
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.lat.zip(self.lon)
    }
}

/// A property joined with its owner's username, as shown in listing views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyListing {
    #[serde(flatten)]
    pub property: Property,
    pub owner_username: String,
}

impl PropertyListing {
    pub fn id(&self) -> i64 {
        self.property.id
    }

    pub fn title(&self) -> &str {
        &self.property.title
    }

    pub fn area(&self) -> Option<&str> {
        self.property.area.as_deref()
    }
}

/// Insert payload for a new listing
///
/// Only `owner_id`, `city_id` and `title` are required by the schema.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewProperty {
    pub owner_id: i64,
    pub city_id: i64,
    pub area: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub rent: Option<i64>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub services: Option<String>,
}

impl NewProperty {
    pub fn new(owner_id: i64, city_id: i64, title: impl Into<String>) -> Self {
        Self {
            owner_id,
            city_id,
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_rent(mut self, rent: i64) -> Self {
        self.rent = Some(rent);
        self
    }

    pub fn with_coordinates(mut self, lat: f64, lon: f64) -> Self {
        self.lat = Some(lat);
        self.lon = Some(lon);
        self
    }

    pub fn with_services(mut self, services: impl Into<String>) -> Self {
        self.services = Some(services.into());
        self
    }
}

/// Partial update of a listing
///
/// Outer `None` leaves a column untouched. For nullable columns the inner
/// `Option` is the new value, so `Some(None)` writes NULL.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropertyUpdate {
    pub city_id: Option<i64>,
    pub area: Option<Option<String>>,
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub rent: Option<Option<i64>>,
    pub lat: Option<Option<f64>>,
    pub lon: Option<Option<f64>>,
    pub services: Option<Option<String>>,
}

impl PropertyUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no column would be written
    pub fn is_empty(&self) -> bool {
        self.city_id.is_none()
            && self.area.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.rent.is_none()
            && self.lat.is_none()
            && self.lon.is_none()
            && self.services.is_none()
    }

    pub fn city_id(mut self, city_id: i64) -> Self {
        self.city_id = Some(city_id);
        self
    }

    pub fn area(mut self, area: Option<String>) -> Self {
        self.area = Some(area);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn rent(mut self, rent: Option<i64>) -> Self {
        self.rent = Some(rent);
        self
    }

    pub fn lat(mut self, lat: Option<f64>) -> Self {
        self.lat = Some(lat);
        self
    }

    pub fn lon(mut self, lon: Option<f64>) -> Self {
        self.lon = Some(lon);
        self
    }

    pub fn services(mut self, services: Option<String>) -> Self {
        self.services = Some(services);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Property {
        Property {
            id: 1,
            owner_id: 2,
            city_id: 1,
            area: Some("المزة".to_string()),
            title: "Flat".to_string(),
            description: None,
            rent: Some(500),
            lat: Some(33.5),
            lon: None,
            services: None,
        }
    }

    #[test]
    fn test_coordinates_require_both() {
        let mut p = sample();
        assert_eq!(p.coordinates(), None);
        p.lon = Some(36.3);
        assert_eq!(p.coordinates(), Some((33.5, 36.3)));
    }

    #[test]
    fn test_update_empty_until_a_field_is_set() {
        assert!(PropertyUpdate::new().is_empty());
        assert!(!PropertyUpdate::new().rent(None).is_empty());
        assert!(!PropertyUpdate::new().title("x").is_empty());
    }

    #[test]
    fn test_listing_serializes_flat() {
        let listing = PropertyListing {
            property: sample(),
            owner_username: "owner1".to_string(),
        };
        let value = serde_json::to_value(&listing).unwrap();
        assert_eq!(value["title"], "Flat");
        assert_eq!(value["owner_username"], "owner1");
        assert_eq!(value["rent"], 500);
    }
}
