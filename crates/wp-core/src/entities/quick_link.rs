use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::LinkRef;

/// A user-defined group of bookmarked URLs.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuickLinkCategory {
    pub category: String,
    #[serde(default)]
    pub links: Vec<LinkRef>,
}

/// A single bookmark in row form, ordered by `sort_order` within a category.
///
/// Row-backed storage assigns `id`; links flattened from a document have none.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuickLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub category: String,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub sort_order: i64,
}

impl QuickLink {
    /// Sort order of the link at `link_index` inside the category at `category_index`.
    ///
    /// Categories are spaced 100 apart so later inserts can append without
    /// renumbering neighbours.
    #[must_use]
    pub fn sort_order_for(category_index: usize, link_index: usize) -> i64 {
        let order = category_index.saturating_mul(100).saturating_add(link_index);
        i64::try_from(order).unwrap_or(i64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_order_spaces_categories() {
        assert_eq!(QuickLink::sort_order_for(0, 0), 0);
        assert_eq!(QuickLink::sort_order_for(0, 7), 7);
        assert_eq!(QuickLink::sort_order_for(2, 1), 201);
        assert_eq!(QuickLink::sort_order_for(usize::MAX, 1), i64::MAX);
    }
}
