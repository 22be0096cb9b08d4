//! Raw form payloads and their conversion into store inputs
//!
//! Each form mirrors one screen: signup, post-listing, edit-listing. Values
//! stay as the strings the user typed until `validate`/`into_*` runs.

use serde::{Deserialize, Serialize};

use citymover_core_types::Sensitive;

use super::validation::{
    optional_text, parse_coordinates, parse_latitude, parse_longitude, parse_rent,
    require_non_empty,
};
use crate::areas::is_area_allowed;
use crate::errors::{CityMoverError, Result};
use crate::model::{City, NewProperty, Property, PropertyUpdate, Role};

/// Account creation form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupForm {
    pub username: String,
    pub password: Sensitive<String>,
    pub role: String,
}

/// A signup that passed validation
#[derive(Debug, Clone)]
pub struct ValidSignup {
    pub username: String,
    pub password: Sensitive<String>,
    pub role: Role,
}

impl SignupForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            password: Sensitive::new(password.into()),
            role: role.as_str().to_string(),
        }
    }

    /// Trim credentials and parse the role
    ///
    /// # Errors
    /// * `MissingField` - If username or password is blank
    /// * `UnknownRole` - If role is not user/owner/admin
    pub fn validate(self) -> Result<ValidSignup> {
        let username = require_non_empty("username", &self.username)?;
        let password = require_non_empty("password", self.password.expose())?;
        let role = self.role.trim().parse::<Role>()?;
        Ok(ValidSignup {
            username,
            password: Sensitive::new(password),
            role,
        })
    }
}

/// Post-listing form
///
/// The area is either picked from the dropdown (`area_choice`) or typed
/// (`area_text`); the dropdown wins when both are set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingForm {
    pub city_id: Option<i64>,
    pub area_choice: Option<String>,
    pub area_text: String,
    pub title: String,
    pub description: String,
    pub rent: String,
    pub lat: String,
    pub lon: String,
    pub services: String,
}

impl ListingForm {
    /// The area the owner selected or typed
    ///
    /// # Errors
    /// * `MissingField` - If neither the dropdown nor the text field has a value
    pub fn selected_area(&self) -> Result<String> {
        self.area_choice
            .as_deref()
            .and_then(optional_text)
            .or_else(|| optional_text(&self.area_text))
            .ok_or_else(|| CityMoverError::MissingField {
                field: "area".to_string(),
            })
    }

    /// Validate against the resolved city and build the insert payload
    ///
    /// # Errors
    /// * `MissingField` - Blank area or title
    /// * `AreaNotAllowed` - Area outside the city's allow-list
    /// * `InvalidRent` / `InvalidCoordinates` - Malformed numeric input
    pub fn into_new_property(self, owner_id: i64, city: &City) -> Result<NewProperty> {
        let area = self.selected_area()?;
        if !is_area_allowed(&city.name, &area) {
            return Err(CityMoverError::AreaNotAllowed {
                city: city.name.clone(),
                area,
            });
        }
        let title = require_non_empty("title", &self.title)?;
        let rent = parse_rent(&self.rent)?;
        let (lat, lon) = parse_coordinates(&self.lat, &self.lon)?;

        Ok(NewProperty {
            owner_id,
            city_id: city.id,
            area: Some(area),
            title,
            description: optional_text(&self.description),
            rent,
            lat,
            lon,
            services: optional_text(&self.services),
        })
    }
}

/// Edit-listing form
///
/// Submitting the form rewrites every editable column; blank optional
/// fields clear the column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditForm {
    pub title: String,
    pub area: String,
    pub description: String,
    pub rent: String,
    pub lat: String,
    pub lon: String,
    pub services: String,
}

impl EditForm {
    /// Prefill from the stored listing
    pub fn from_property(property: &Property) -> Self {
        fn text(v: &Option<String>) -> String {
            v.clone().unwrap_or_default()
        }
        fn number<T: ToString>(v: Option<T>) -> String {
            v.map(|n| n.to_string()).unwrap_or_default()
        }

        Self {
            title: property.title.clone(),
            area: text(&property.area),
            description: text(&property.description),
            rent: number(property.rent),
            lat: number(property.lat),
            lon: number(property.lon),
            services: text(&property.services),
        }
    }

    /// # Errors
    /// * `MissingField` - Blank title
    /// * `InvalidRent` / `InvalidCoordinates` - Malformed numeric input
    pub fn into_update(self) -> Result<PropertyUpdate> {
        let title = require_non_empty("title", &self.title)?;
        let rent = parse_rent(&self.rent)?;
        let (lat, lon) = parse_coordinates(&self.lat, &self.lon)?;

        Ok(PropertyUpdate::new()
            .title(title)
            .area(optional_text(&self.area))
            .description(optional_text(&self.description))
            .rent(rent)
            .lat(lat)
            .lon(lon)
            .services(optional_text(&self.services)))
    }
}

/// Field-by-field edit
///
/// Only the fields that are set are parsed and written; the rest of the
/// stored row is left exactly as it is. An empty string clears an optional
/// column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditPatch {
    pub title: Option<String>,
    pub area: Option<String>,
    pub description: Option<String>,
    pub rent: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub services: Option<String>,
}

impl EditPatch {
    /// # Errors
    /// * `MissingField` - Title given but blank
    /// * `InvalidRent` / `InvalidCoordinates` - A given numeric field is malformed
    pub fn into_update(self) -> Result<PropertyUpdate> {
        let mut update = PropertyUpdate::new();
        if let Some(title) = self.title {
            update = update.title(require_non_empty("title", &title)?);
        }
        if let Some(area) = self.area {
            update = update.area(optional_text(&area));
        }
        if let Some(description) = self.description {
            update = update.description(optional_text(&description));
        }
        if let Some(rent) = self.rent {
            update = update.rent(parse_rent(&rent)?);
        }
        if let Some(lat) = self.lat {
            update = update.lat(parse_latitude(&lat)?);
        }
        if let Some(lon) = self.lon {
            update = update.lon(parse_longitude(&lon)?);
        }
        if let Some(services) = self.services {
            update = update.services(optional_text(&services));
        }
        Ok(update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::areas::DAMASCUS;

    fn damascus() -> City {
        City {
            id: 1,
            name: DAMASCUS.to_string(),
        }
    }

    fn aleppo() -> City {
        City {
            id: 2,
            name: "حلب".to_string(),
        }
    }

    fn form(area: &str) -> ListingForm {
        ListingForm {
            city_id: Some(1),
            area_choice: Some(area.to_string()),
            title: "Flat".to_string(),
            rent: "500".to_string(),
            ..ListingForm::default()
        }
    }

    #[test]
    fn test_signup_trims_and_parses_role() {
        let valid = SignupForm::new(" alice ", " pw ", Role::Owner)
            .validate()
            .unwrap();
        assert_eq!(valid.username, "alice");
        assert_eq!(valid.password.expose_str(), "pw");
        assert_eq!(valid.role, Role::Owner);
    }

    #[test]
    fn test_signup_requires_password() {
        let err = SignupForm::new("alice", "  ", Role::User)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            CityMoverError::MissingField {
                field: "password".to_string()
            }
        );
    }

    #[test]
    fn test_selected_area_prefers_dropdown() {
        let mut f = form("المزة");
        f.area_text = "typed".to_string();
        assert_eq!(f.selected_area().unwrap(), "المزة");

        f.area_choice = None;
        assert_eq!(f.selected_area().unwrap(), "typed");

        f.area_text = "  ".to_string();
        assert!(f.selected_area().is_err());
    }

    #[test]
    fn test_listing_in_active_damascus_area() {
        let p = form("كفرسوسة").into_new_property(2, &damascus()).unwrap();
        assert_eq!(p.owner_id, 2);
        assert_eq!(p.city_id, 1);
        assert_eq!(p.area.as_deref(), Some("كفرسوسة"));
        assert_eq!(p.rent, Some(500));
        assert_eq!(p.description, None);
    }

    #[test]
    fn test_listing_in_inactive_damascus_area_rejected() {
        let err = form("جوبر").into_new_property(2, &damascus()).unwrap_err();
        assert!(matches!(err, CityMoverError::AreaNotAllowed { .. }));
    }

    #[test]
    fn test_listing_elsewhere_accepts_any_area() {
        let p = form("جوبر").into_new_property(2, &aleppo()).unwrap();
        assert_eq!(p.city_id, 2);
    }

    #[test]
    fn test_listing_rejects_bad_rent_after_area_check() {
        let mut f = form("المزة");
        f.rent = "cheap".to_string();
        let err = f.into_new_property(2, &damascus()).unwrap_err();
        assert!(matches!(err, CityMoverError::InvalidRent { .. }));
    }

    #[test]
    fn test_edit_form_round_trips_stored_values() {
        let property = Property {
            id: 7,
            owner_id: 2,
            city_id: 1,
            area: Some("المزة".to_string()),
            title: "Flat".to_string(),
            description: None,
            rent: Some(450),
            lat: Some(33.5),
            lon: Some(36.25),
            services: Some("wifi".to_string()),
        };
        let update = EditForm::from_property(&property).into_update().unwrap();
        assert_eq!(update.title.as_deref(), Some("Flat"));
        assert_eq!(update.rent, Some(Some(450)));
        assert_eq!(update.lat, Some(Some(33.5)));
        assert_eq!(update.description, Some(None));
    }

    #[test]
    fn test_edit_form_blank_rent_clears_column() {
        let f = EditForm {
            title: "Flat".to_string(),
            ..EditForm::default()
        };
        assert_eq!(f.into_update().unwrap().rent, Some(None));
    }

    #[test]
    fn test_patch_touches_only_given_fields() {
        let patch = EditPatch {
            title: Some(" New ".to_string()),
            services: Some(String::new()),
            ..EditPatch::default()
        };
        let update = patch.into_update().unwrap();
        assert_eq!(update.title.as_deref(), Some("New"));
        assert_eq!(update.services, Some(None));
        assert_eq!(update.rent, None);
        assert_eq!(update.lat, None);
        assert_eq!(update.area, None);
    }

    #[test]
    fn test_empty_patch_is_empty_update() {
        assert!(EditPatch::default().into_update().unwrap().is_empty());
    }

    #[test]
    fn test_patch_validates_given_fields() {
        let patch = EditPatch {
            lat: Some("200".to_string()),
            ..EditPatch::default()
        };
        let err = patch.into_update().unwrap_err();
        assert!(matches!(err, CityMoverError::InvalidCoordinates { ref field, .. } if field == "lat"));

        let patch = EditPatch {
            title: Some("  ".to_string()),
            ..EditPatch::default()
        };
        assert!(patch.into_update().is_err());
    }
}
