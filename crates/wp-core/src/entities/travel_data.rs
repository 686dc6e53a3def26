use std::collections::{BTreeMap, HashSet};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{City, LinkRef, Place, QuickLink, QuickLinkCategory};
use crate::errors::CoreError;
use crate::links::normalize_url;

/// The whole travel document: every city with its places, plus quick links.
///
/// This is the unit the JSON-file and GitHub stores read and write.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TravelData {
    /// Keyed by stable city key (`bilbao`, `sanSebastian`).
    #[serde(default)]
    pub cities: BTreeMap<String, City>,
    #[serde(default)]
    pub quick_links: Vec<QuickLinkCategory>,
}

impl TravelData {
    /// Empty document for the Bilbao / San Sebastián trip.
    #[must_use]
    pub fn default_trip() -> Self {
        let mut cities = BTreeMap::new();
        cities.insert("bilbao".to_string(), City::new("Bilbao"));
        cities.insert("sanSebastian".to_string(), City::new("San Sebastián"));
        Self {
            cities,
            quick_links: Vec::new(),
        }
    }

    #[must_use]
    pub fn place_count(&self) -> usize {
        self.cities.values().map(|c| c.places.len()).sum()
    }

    #[must_use]
    pub fn quick_link_count(&self) -> usize {
        self.quick_links.iter().map(|c| c.links.len()).sum()
    }

    /// Find a place by id, returning its city key alongside.
    #[must_use]
    pub fn find_place(&self, id: &str) -> Option<(&str, &Place)> {
        self.cities.iter().find_map(|(key, city)| {
            city.places
                .iter()
                .find(|p| p.id == id)
                .map(|p| (key.as_str(), p))
        })
    }

    pub fn find_place_mut(&mut self, id: &str) -> Option<&mut Place> {
        self.cities
            .values_mut()
            .find_map(|city| city.places.iter_mut().find(|p| p.id == id))
    }

    /// Append a place to a city.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownCity` if the city key is absent and
    /// `CoreError::DuplicateId` if a place with the same id already exists.
    pub fn insert_place(&mut self, city_key: &str, place: Place) -> Result<(), CoreError> {
        if self.find_place(&place.id).is_some() {
            return Err(CoreError::DuplicateId(place.id));
        }
        let city = self
            .cities
            .get_mut(city_key)
            .ok_or_else(|| CoreError::UnknownCity(city_key.to_string()))?;
        city.places.push(place);
        Ok(())
    }

    /// Remove a place by id from whichever city holds it.
    pub fn remove_place(&mut self, id: &str) -> Option<Place> {
        self.cities.values_mut().find_map(|city| {
            let index = city.places.iter().position(|p| p.id == id)?;
            Some(city.places.remove(index))
        })
    }

    /// Append a link to `category`, creating the category at the end if needed.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the category, name, or URL is blank.
    pub fn add_quick_link(
        &mut self,
        category: &str,
        name: &str,
        url: &str,
    ) -> Result<(), CoreError> {
        let category = category.trim();
        let name = name.trim();
        let url = normalize_url(url);
        if category.is_empty() || name.is_empty() || url.is_empty() {
            return Err(CoreError::Validation(
                "quick link needs a category, a name and a URL".into(),
            ));
        }

        let link = LinkRef::new(name, url);
        match self.quick_links.iter_mut().find(|c| c.category == category) {
            Some(existing) => existing.links.push(link),
            None => self.quick_links.push(QuickLinkCategory {
                category: category.to_string(),
                links: vec![link],
            }),
        }
        Ok(())
    }

    /// Remove the link at `index` inside `category`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the category or index does not exist.
    pub fn remove_quick_link(&mut self, category: &str, index: usize) -> Result<LinkRef, CoreError> {
        let group = self
            .quick_links
            .iter_mut()
            .find(|c| c.category == category)
            .ok_or_else(|| CoreError::quick_link_not_found(category))?;
        if index >= group.links.len() {
            return Err(CoreError::quick_link_not_found(format!("{category}/{index}")));
        }
        Ok(group.links.remove(index))
    }

    /// Remove a category and every link in it.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the category does not exist.
    pub fn remove_quick_link_category(
        &mut self,
        category: &str,
    ) -> Result<QuickLinkCategory, CoreError> {
        let index = self
            .quick_links
            .iter()
            .position(|c| c.category == category)
            .ok_or_else(|| CoreError::quick_link_not_found(category))?;
        Ok(self.quick_links.remove(index))
    }

    /// Quick links in row form, with sort orders spaced per category.
    #[must_use]
    pub fn flatten_quick_links(&self) -> Vec<QuickLink> {
        self.quick_links
            .iter()
            .enumerate()
            .flat_map(|(ci, group)| {
                group.links.iter().enumerate().map(move |(li, link)| QuickLink {
                    id: None,
                    category: group.category.clone(),
                    name: link.name.clone(),
                    url: link.url.clone(),
                    sort_order: QuickLink::sort_order_for(ci, li),
                })
            })
            .collect()
    }

    /// Everything wrong with the document, in a stable order.
    #[must_use]
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        let mut seen = HashSet::new();

        for (key, city) in &self.cities {
            if city.name.trim().is_empty() {
                problems.push(format!("city '{key}' has no name"));
            }
            for place in &city.places {
                if place.id.is_empty() {
                    problems.push(format!("place '{}' in '{key}' has no id", place.name));
                } else if !seen.insert(place.id.as_str()) {
                    problems.push(format!("duplicate place id '{}'", place.id));
                }
                if place.name.trim().is_empty() {
                    problems.push(format!("place '{}' in '{key}' has no name", place.id));
                }
            }
        }

        for group in &self.quick_links {
            if group.category.trim().is_empty() {
                problems.push("quick-link category with empty name".to_string());
            }
            for link in &group.links {
                if link.url.trim().is_empty() {
                    problems.push(format!(
                        "quick link '{}' in '{}' has no URL",
                        link.name, group.category
                    ));
                }
            }
        }

        problems
    }

    /// Check the document's invariants.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` listing every problem found.
    pub fn validate(&self) -> Result<(), CoreError> {
        let problems = self.problems();
        if problems.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(problems.join("; ")))
        }
    }
}
