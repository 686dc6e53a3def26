//! Place categories.
//!
//! Serialized lowercase (`"museums"`, `"restaurants"`, ...) to match the keys
//! the web client groups city views by.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category a place is listed under on a city tab.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum PlaceCategory {
    Museums,
    Restaurants,
    Culture,
    Shopping,
    Walking,
    Other,
}

impl PlaceCategory {
    /// Every category, in the order the client renders them.
    pub const ALL: [Self; 6] = [
        Self::Museums,
        Self::Restaurants,
        Self::Culture,
        Self::Shopping,
        Self::Walking,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Museums => "museums",
            Self::Restaurants => "restaurants",
            Self::Culture => "culture",
            Self::Shopping => "shopping",
            Self::Walking => "walking",
            Self::Other => "other",
        }
    }

    /// Section heading shown above the category's places.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Museums => "Sights & Museums",
            Self::Restaurants => "Restaurants & Pintxos Bars",
            Self::Culture => "Jazz Clubs & Culture",
            Self::Shopping => "Shops & Markets",
            Self::Walking => "Walks & Parks",
            Self::Other => "Other",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Museums => "🏛️",
            Self::Restaurants => "🍷",
            Self::Culture => "🎵",
            Self::Shopping => "🛍️",
            Self::Walking => "🚶",
            Self::Other => "📍",
        }
    }
}

impl fmt::Display for PlaceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
