//! Request and response bodies for the HTTP API and CLI output.
//!
//! Field names match what the web client sends and reads (`cityKey`,
//! `success`, `token`, `error`).

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Place;

/// Body of `POST /api/login`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LoginRequest {
    #[serde(default)]
    pub password: String,
}

/// Response from `POST /api/login`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
}

/// Generic acknowledgement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub const OK: Self = Self { success: true };
}

/// Body of `POST /api/places`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddPlaceRequest {
    pub city_key: String,
    pub place: Place,
}

/// Response from `POST /api/places`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PlaceCreatedResponse {
    pub success: bool,
    pub place: Place,
}

/// Body of `POST /api/quick-links`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AddQuickLinkRequest {
    pub category: String,
    pub name: String,
    pub url: String,
}

/// Error body returned with every non-2xx API response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

/// Per-city summary inside a [`ValidationReport`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CitySummary {
    pub name: String,
    pub places: usize,
    pub visited: usize,
    /// Place count per category key; categories with no places are omitted.
    pub by_category: BTreeMap<String, usize>,
}

/// Output of `wpt validate`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: bool,
    pub source: String,
    pub cities: BTreeMap<String, CitySummary>,
    pub quick_link_categories: usize,
    pub quick_links: usize,
    pub problems: Vec<String>,
}

/// Output of `wpt seed`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SeedReport {
    pub places: usize,
    pub quick_links: usize,
    pub failures: usize,
}

impl ValidationReport {
    /// Summarize a document and collect its problems.
    #[must_use]
    pub fn build(source: impl Into<String>, data: &crate::entities::TravelData) -> Self {
        let cities = data
            .cities
            .iter()
            .map(|(key, city)| {
                let mut by_category = BTreeMap::new();
                for place in &city.places {
                    *by_category
                        .entry(place.category.as_str().to_string())
                        .or_insert(0) += 1;
                }
                let summary = CitySummary {
                    name: city.name.clone(),
                    places: city.places.len(),
                    visited: city.places.iter().filter(|p| p.visited).count(),
                    by_category,
                };
                (key.clone(), summary)
            })
            .collect();

        let problems = data.problems();
        Self {
            valid: problems.is_empty(),
            source: source.into(),
            cities,
            quick_link_categories: data.quick_links.len(),
            quick_links: data.quick_link_count(),
            problems,
        }
    }
}
