//! Table rows for the `places` and `quick_links` tables.
//!
//! Columns are snake_case. Text columns may come back `NULL`; those read as
//! empty strings the same way missing document fields do.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use wp_core::entities::{LinkRef, Place, QuickLink, QuickLinkCategory};
use wp_core::enums::PlaceCategory;

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Row ids are `uuid` or `int8 identity` depending on how the table was
/// created; both read as text.
fn id_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a string or number id, got {other}"
        ))),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaceRow {
    /// Assigned by the database; omitted on insert.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "id_as_string"
    )]
    pub id: Option<String>,
    pub city: String,
    pub name: String,
    pub category: PlaceCategory,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub website: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub google_maps: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub other_links: Vec<LinkRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub visited: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
}

impl PlaceRow {
    /// Row for inserting `place` under `city_key`. The document id is dropped
    /// so the database assigns its own.
    #[must_use]
    pub fn from_place(city_key: &str, place: &Place) -> Self {
        Self {
            id: None,
            city: city_key.to_string(),
            name: place.name.clone(),
            category: place.category,
            description: place.description.clone(),
            website: place.website.clone(),
            google_maps: place.google_maps.clone(),
            other_links: place.other_links.clone(),
            visited: place.visited,
            notes: place.notes.clone(),
            created_at: None,
        }
    }

    /// The flattened place, with `city` set to the row's city key.
    #[must_use]
    pub fn into_place(self) -> Place {
        Place {
            id: self.id.unwrap_or_default(),
            city: Some(self.city),
            name: self.name,
            category: self.category,
            description: self.description,
            website: self.website,
            google_maps: self.google_maps,
            other_links: self.other_links,
            visited: self.visited,
            notes: self.notes,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuickLinkRow {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "id_as_string"
    )]
    pub id: Option<String>,
    pub category: String,
    pub name: String,
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sort_order: i64,
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
}

impl QuickLinkRow {
    #[must_use]
    pub fn new(
        category: impl Into<String>,
        name: impl Into<String>,
        url: impl Into<String>,
        sort_order: i64,
    ) -> Self {
        Self {
            id: None,
            category: category.into(),
            name: name.into(),
            url: url.into(),
            sort_order,
            created_at: None,
        }
    }

    #[must_use]
    pub fn into_quick_link(self) -> QuickLink {
        QuickLink {
            id: self.id,
            category: self.category,
            name: self.name,
            url: self.url,
            sort_order: self.sort_order,
        }
    }
}

/// Group flat links by category, keeping categories in first-seen order and
/// links in input order.
#[must_use]
pub fn group_quick_links(links: &[QuickLink]) -> Vec<QuickLinkCategory> {
    let mut groups: Vec<QuickLinkCategory> = Vec::new();
    for link in links {
        let entry = LinkRef::new(link.name.clone(), link.url.clone());
        match groups.iter_mut().find(|g| g.category == link.category) {
            Some(group) => group.links.push(entry),
            None => groups.push(QuickLinkCategory {
                category: link.category.clone(),
                links: vec![entry],
            }),
        }
    }
    groups
}

/// Sort order for a link appended to `category`: one past the current
/// maximum, or 0 for an empty category.
#[must_use]
pub fn next_sort_order(links: &[QuickLink], category: &str) -> i64 {
    links
        .iter()
        .filter(|l| l.category == category)
        .map(|l| l.sort_order)
        .max()
        .map_or(0, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn link(category: &str, name: &str, sort_order: i64) -> QuickLink {
        QuickLink {
            id: None,
            category: category.into(),
            name: name.into(),
            url: format!("https://{name}.example"),
            sort_order,
        }
    }

    #[test]
    fn place_row_uses_snake_case_and_omits_ids() {
        let mut place = Place::new("p1", "Guggenheim", PlaceCategory::Museums);
        place.google_maps = "https://maps.example".into();
        place.other_links = vec![LinkRef::new("Tickets", "https://t.example")];

        let json = serde_json::to_value(PlaceRow::from_place("bilbao", &place)).unwrap();
        assert_eq!(json["city"], "bilbao");
        assert_eq!(json["google_maps"], "https://maps.example");
        assert_eq!(json["other_links"][0]["name"], "Tickets");
        assert!(json.get("id").is_none());
        assert!(json.get("created_at").is_none());
        assert!(json.get("googleMaps").is_none());
    }

    #[test]
    fn place_row_reads_nulls_as_defaults() {
        let row: PlaceRow = serde_json::from_str(
            r#"{
                "id": "6f1c", "city": "sanSebastian", "name": "La Concha",
                "category": "walking", "description": null, "website": null,
                "google_maps": null, "other_links": null, "visited": null,
                "notes": null, "created_at": "2025-05-01T10:00:00.123456+00:00"
            }"#,
        )
        .unwrap();
        assert!(row.created_at.is_some());

        let place = row.into_place();
        assert_eq!(place.id, "6f1c");
        assert_eq!(place.city.as_deref(), Some("sanSebastian"));
        assert_eq!(place.description, "");
        assert!(place.other_links.is_empty());
        assert!(!place.visited);
    }

    #[test]
    fn quick_link_row_conversion() {
        let row: QuickLinkRow = serde_json::from_str(
            r#"{"id":"a1","category":"Transport","name":"Bizkaibus","url":"https://bizkaibus.eus","sort_order":3}"#,
        )
        .unwrap();
        let link = row.into_quick_link();
        assert_eq!(link.id.as_deref(), Some("a1"));
        assert_eq!(link.sort_order, 3);
    }

    #[test]
    fn numeric_ids_read_as_text() {
        let place: PlaceRow = serde_json::from_str(
            r#"{"id": 42, "city": "bilbao", "name": "Guggenheim", "category": "museums"}"#,
        )
        .unwrap();
        assert_eq!(place.id.as_deref(), Some("42"));

        let link: QuickLinkRow = serde_json::from_str(
            r#"{"id": null, "category": "Transport", "name": "Metro", "url": "https://metrobilbao.eus"}"#,
        )
        .unwrap();
        assert_eq!(link.id, None);

        let err = serde_json::from_str::<QuickLinkRow>(
            r#"{"id": true, "category": "Transport", "name": "Metro", "url": "https://metrobilbao.eus"}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn grouping_keeps_first_seen_order() {
        let links = vec![
            link("Weather", "euskalmet", 100),
            link("Transport", "bizkaibus", 0),
            link("Weather", "aemet", 101),
        ];
        let groups = group_quick_links(&links);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, "Weather");
        assert_eq!(groups[0].links.len(), 2);
        assert_eq!(groups[0].links[1].name, "aemet");
        assert_eq!(groups[1].category, "Transport");
    }

    #[test]
    fn next_sort_order_per_category() {
        let links = vec![
            link("Transport", "a", 0),
            link("Transport", "b", 7),
            link("Weather", "c", 100),
        ];
        assert_eq!(next_sort_order(&links, "Transport"), 8);
        assert_eq!(next_sort_order(&links, "Weather"), 101);
        assert_eq!(next_sort_order(&links, "Food"), 0);
    }
}
