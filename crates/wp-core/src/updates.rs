//! Partial place updates.
//!
//! `PUT /api/places/{id}` carries only the fields being changed. Each `Some`
//! field overwrites the stored value; `None` leaves it alone. An `id` in the
//! payload is ignored so an update can never re-key a place.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{LinkRef, Place};
use crate::enums::PlaceCategory;

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlaceUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<PlaceCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_maps: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_links: Option<Vec<LinkRef>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visited: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PlaceUpdate {
    /// Whether the update changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Overwrite the fields of `place` that this update sets.
    pub fn apply(self, place: &mut Place) {
        if let Some(v) = self.name {
            place.name = v;
        }
        if let Some(v) = self.category {
            place.category = v;
        }
        if let Some(v) = self.description {
            place.description = v;
        }
        if let Some(v) = self.website {
            place.website = v;
        }
        if let Some(v) = self.google_maps {
            place.google_maps = v;
        }
        if let Some(v) = self.other_links {
            place.other_links = v;
        }
        if let Some(v) = self.visited {
            place.visited = v;
        }
        if let Some(v) = self.notes {
            place.notes = v;
        }
    }
}

pub struct PlaceUpdateBuilder(PlaceUpdate);

impl Default for PlaceUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaceUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(PlaceUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, val: impl Into<String>) -> Self {
        self.0.name = Some(val.into());
        self
    }

    #[must_use]
    pub const fn category(mut self, val: PlaceCategory) -> Self {
        self.0.category = Some(val);
        self
    }

    #[must_use]
    pub fn description(mut self, val: impl Into<String>) -> Self {
        self.0.description = Some(val.into());
        self
    }

    #[must_use]
    pub fn website(mut self, val: impl Into<String>) -> Self {
        self.0.website = Some(val.into());
        self
    }

    #[must_use]
    pub fn google_maps(mut self, val: impl Into<String>) -> Self {
        self.0.google_maps = Some(val.into());
        self
    }

    #[must_use]
    pub fn other_links(mut self, val: Vec<LinkRef>) -> Self {
        self.0.other_links = Some(val);
        self
    }

    #[must_use]
    pub const fn visited(mut self, val: bool) -> Self {
        self.0.visited = Some(val);
        self
    }

    #[must_use]
    pub fn notes(mut self, val: impl Into<String>) -> Self {
        self.0.notes = Some(val.into());
        self
    }

    #[must_use]
    pub fn build(self) -> PlaceUpdate {
        self.0
    }
}
