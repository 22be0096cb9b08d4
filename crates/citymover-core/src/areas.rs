//! Area vocabulary and the Damascus allow-list
//!
//! Areas are free text everywhere except Damascus, where only the active
//! districts accept new listings and show results.

use serde::{Deserialize, Serialize};

/// Name of the one city with a controlled area list
pub const DAMASCUS: &str = "دمشق";

/// Damascus districts currently open for listings
pub const DAMASCUS_ACTIVE_AREAS: [&str; 3] = ["المزة", "كفرسوسة", "الميدان"];

/// Every Damascus district offered in the area picker
pub const DAMASCUS_ALL_AREAS: [&str; 46] = [
    "المزة",
    "كفرسوسة",
    "الميدان",
    "القدم",
    "القصاع",
    "المالكي",
    "أبو رمانة",
    "البرامكة",
    "ركن الدين",
    "الصالحية",
    "الشعلان",
    "المهاجرين",
    "العدوي",
    "القنوات",
    "باب توما",
    "باب شرقي",
    "ساروجة",
    "العفيف",
    "الجسر الأبيض",
    "الزاهرة",
    "الرحمانية",
    "دمر",
    "السبينة",
    "جوبر",
    "حرستا",
    "دوما",
    "داريا",
    "معضمية الشام",
    "صحنايا",
    "الكسوة",
    "التضامن",
    "الهامة",
    "قدسيا",
    "يملك",
    "القابون",
    "برزة",
    "القطيفة",
    "الخضيري",
    "الزبداني",
    "بلد",
    "جرمانا",
    "سقبا",
    "معربا",
    "عربين",
    "حزة",
    "ببيلا",
];

/// One entry of an area picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaOption {
    pub name: String,
    /// False for Damascus districts outside the allow-list
    pub active: bool,
}

pub fn is_damascus(city_name: &str) -> bool {
    city_name == DAMASCUS
}

/// Whether `area` may receive listings (and show results) in `city_name`
pub fn is_area_allowed(city_name: &str, area: &str) -> bool {
    !is_damascus(city_name) || DAMASCUS_ACTIVE_AREAS.contains(&area)
}

/// Build the picker for a city
///
/// Damascus always offers its full district list with active marks; other
/// cities offer the areas already present in their listings.
pub fn area_options(city_name: &str, known_areas: &[String]) -> Vec<AreaOption> {
    if is_damascus(city_name) {
        DAMASCUS_ALL_AREAS
            .iter()
            .map(|name| AreaOption {
                name: name.to_string(),
                active: DAMASCUS_ACTIVE_AREAS.contains(name),
            })
            .collect()
    } else {
        known_areas
            .iter()
            .map(|name| AreaOption {
                name: name.clone(),
                active: true,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_active_areas_are_subset_of_all() {
        for area in DAMASCUS_ACTIVE_AREAS {
            assert!(DAMASCUS_ALL_AREAS.contains(&area));
        }
    }

    #[test]
    fn test_all_areas_unique() {
        let unique: HashSet<_> = DAMASCUS_ALL_AREAS.iter().collect();
        assert_eq!(unique.len(), DAMASCUS_ALL_AREAS.len());
    }

    #[test]
    fn test_damascus_restricts_areas() {
        assert!(is_area_allowed(DAMASCUS, "المزة"));
        assert!(!is_area_allowed(DAMASCUS, "جوبر"));
        assert!(!is_area_allowed(DAMASCUS, "anything"));
    }

    #[test]
    fn test_other_cities_accept_any_area() {
        assert!(is_area_allowed("حلب", "جوبر"));
        assert!(is_area_allowed("حلب", "new district"));
    }

    #[test]
    fn test_area_options_for_damascus_mark_active() {
        let options = area_options(DAMASCUS, &[]);
        assert_eq!(options.len(), DAMASCUS_ALL_AREAS.len());
        let active: Vec<_> = options.iter().filter(|o| o.active).collect();
        assert_eq!(active.len(), 3);
    }

    #[test]
    fn test_area_options_for_other_city_use_known_areas() {
        let known = vec!["الحمدانية".to_string(), "الجميلية".to_string()];
        let options = area_options("حلب", &known);
        assert_eq!(options.len(), 2);
        assert!(options.iter().all(|o| o.active));
        assert_eq!(options[0].name, "الحمدانية");
    }
}
