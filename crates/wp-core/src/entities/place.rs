use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::PlaceCategory;
use crate::links::{google_maps_search_link, normalize_url};

/// A named URL, used for a place's extra links and for quick-link entries.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LinkRef {
    pub name: String,
    pub url: String,
}

impl LinkRef {
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// A point of interest shown on a city tab.
///
/// Free-text fields default to empty strings so sparse documents load.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Unique across all cities. Empty on create requests; filled by the service.
    #[serde(default)]
    pub id: String,
    /// City key. Only set on flattened rows; places nested in a `City` omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub name: String,
    pub category: PlaceCategory,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub google_maps: String,
    #[serde(default)]
    pub other_links: Vec<LinkRef>,
    #[serde(default)]
    pub visited: bool,
    #[serde(default)]
    pub notes: String,
}

impl Place {
    /// A place with only the required fields set.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: PlaceCategory) -> Self {
        Self {
            id: id.into(),
            city: None,
            name: name.into(),
            category,
            description: String::new(),
            website: String::new(),
            google_maps: String::new(),
            other_links: Vec::new(),
            visited: false,
            notes: String::new(),
        }
    }

    /// Clean up user input the way the place form does before saving.
    ///
    /// Trims the name, normalizes the website and extra-link URLs, drops
    /// extra links missing a name or URL, and fills an empty map link with a
    /// search for `"<name>, <city_name>"`.
    #[must_use]
    pub fn normalized(mut self, city_name: &str) -> Self {
        self.name = self.name.trim().to_string();
        self.website = normalize_url(&self.website);
        self.other_links = self
            .other_links
            .into_iter()
            .filter(|link| !link.name.trim().is_empty() && !link.url.trim().is_empty())
            .map(|link| LinkRef {
                url: normalize_url(&link.url),
                name: link.name,
            })
            .collect();
        if self.google_maps.trim().is_empty() && !self.name.is_empty() {
            self.google_maps = google_maps_search_link(&self.name, city_name);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn sparse_json_fills_defaults() {
        let place: Place =
            serde_json::from_str(r#"{"name": "Guggenheim", "category": "museums"}"#).unwrap();
        assert_eq!(place.id, "");
        assert_eq!(place.city, None);
        assert!(!place.visited);
        assert!(place.other_links.is_empty());
    }

    #[test]
    fn serializes_camel_case_without_city() {
        let place = Place::new("plc-1", "La Viña", PlaceCategory::Restaurants);
        let json = serde_json::to_value(&place).unwrap();
        assert!(json.get("googleMaps").is_some());
        assert!(json.get("otherLinks").is_some());
        assert!(json.get("city").is_none());
    }

    #[test]
    fn normalized_cleans_form_input() {
        let mut place = Place::new("plc-1", "  Bar Nestor ", PlaceCategory::Restaurants);
        place.website = "barnestor.com".into();
        place.other_links = vec![
            LinkRef::new("Menu", "barnestor.com/menu"),
            LinkRef::new("", "https://dropped.example"),
            LinkRef::new("Dropped", "  "),
        ];

        let place = place.normalized("San Sebastián");
        assert_eq!(place.name, "Bar Nestor");
        assert_eq!(place.website, "https://barnestor.com");
        assert_eq!(
            place.other_links,
            vec![LinkRef::new("Menu", "https://barnestor.com/menu")]
        );
        assert_eq!(
            place.google_maps,
            "https://www.google.com/maps/search/?api=1&query=Bar%20Nestor%2C%20San%20Sebasti%C3%A1n"
        );
    }

    #[test]
    fn normalized_keeps_explicit_map_link() {
        let mut place = Place::new("plc-1", "Guggenheim", PlaceCategory::Museums);
        place.google_maps = "https://maps.example/g".into();
        let place = place.normalized("Bilbao");
        assert_eq!(place.google_maps, "https://maps.example/g");
    }
}
