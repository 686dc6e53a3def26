use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Place;

/// A city tab and the places listed on it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct City {
    /// Display name, e.g. `"San Sebastián"`.
    pub name: String,
    #[serde(default)]
    pub places: Vec<Place>,
}

impl City {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            places: Vec::new(),
        }
    }
}
