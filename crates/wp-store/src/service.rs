//! Service layer over a [`DataStore`].
//!
//! Every mutation is a load-modify-save of the whole document. The store sits
//! behind an async mutex held for the full cycle, so two concurrent requests
//! can never both load the same revision and overwrite each other's change.

use tokio::sync::Mutex;

use wp_core::entities::{LinkRef, Place, QuickLinkCategory, TravelData};
use wp_core::errors::CoreError;
use wp_core::ids::generate_place_id;
use wp_core::updates::PlaceUpdate;

use crate::error::StoreError;
use crate::store::DataStore;

pub struct TravelService<S> {
    store: Mutex<S>,
    location: String,
}

impl<S: DataStore> TravelService<S> {
    pub fn new(store: S) -> Self {
        let location = store.describe();
        Self {
            store: Mutex::new(store),
            location,
        }
    }

    /// Where the document is stored.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// The whole document.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be read.
    pub async fn data(&self) -> Result<TravelData, StoreError> {
        self.store.lock().await.load().await
    }

    /// Replace the whole document.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Core` if the document fails validation, or a
    /// store error if it cannot be written.
    pub async fn replace(&self, data: TravelData) -> Result<(), StoreError> {
        data.validate()?;
        let mut store = self.store.lock().await;
        store.save(&data).await?;
        tracing::info!(places = data.place_count(), "document replaced");
        Ok(())
    }

    /// Add a place to a city and return it as stored.
    ///
    /// The place is normalized (see [`Place::normalized`]) and given a fresh
    /// id when it arrives without one.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownCity` or `CoreError::DuplicateId` (wrapped in
    /// `StoreError::Core`), or a store error.
    pub async fn add_place(&self, city_key: &str, mut place: Place) -> Result<Place, StoreError> {
        if place.id.trim().is_empty() {
            place.id = generate_place_id().map_err(|e| StoreError::Rng(e.to_string()))?;
        }
        if place.name.trim().is_empty() {
            return Err(CoreError::Validation("place name is required".into()).into());
        }
        place.city = None;

        let place = self
            .mutate(|data| {
                let city_name = data
                    .cities
                    .get(city_key)
                    .map(|c| c.name.clone())
                    .ok_or_else(|| CoreError::UnknownCity(city_key.to_string()))?;
                let place = place.normalized(&city_name);
                data.insert_place(city_key, place.clone())?;
                Ok(place)
            })
            .await?;
        tracing::info!(id = %place.id, city = city_key, "place added");
        Ok(place)
    }

    /// A place and the key of the city holding it.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no place has this id.
    pub async fn get_place(&self, id: &str) -> Result<(String, Place), StoreError> {
        let data = self.data().await?;
        let (city, place) = data
            .find_place(id)
            .ok_or_else(|| CoreError::place_not_found(id))?;
        Ok((city.to_string(), place.clone()))
    }

    /// Merge `update` into the place with this id and return the result.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no place has this id, or
    /// `CoreError::Validation` if the update blanks the name.
    pub async fn update_place(&self, id: &str, update: PlaceUpdate) -> Result<Place, StoreError> {
        let place = self
            .mutate(|data| {
                let place = data
                    .find_place_mut(id)
                    .ok_or_else(|| CoreError::place_not_found(id))?;
                if update.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
                    return Err(CoreError::Validation("place name is required".into()));
                }
                update.apply(place);
                Ok(place.clone())
            })
            .await?;
        tracing::info!(id, "place updated");
        Ok(place)
    }

    /// Delete a place and return it.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no place has this id.
    pub async fn delete_place(&self, id: &str) -> Result<Place, StoreError> {
        let place = self
            .mutate(|data| {
                data.remove_place(id)
                    .ok_or_else(|| CoreError::place_not_found(id))
            })
            .await?;
        tracing::info!(id, "place deleted");
        Ok(place)
    }

    /// Append a quick link, creating its category if needed.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for blank fields, or a store error.
    pub async fn add_quick_link(
        &self,
        category: &str,
        name: &str,
        url: &str,
    ) -> Result<(), StoreError> {
        self.mutate(|data| data.add_quick_link(category, name, url))
            .await?;
        tracing::info!(category, name, "quick link added");
        Ok(())
    }

    /// Delete the link at `index` in `category`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the category or index does not exist.
    pub async fn delete_quick_link(
        &self,
        category: &str,
        index: usize,
    ) -> Result<LinkRef, StoreError> {
        self.mutate(|data| data.remove_quick_link(category, index))
            .await
    }

    /// Delete a category with all of its links.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the category does not exist.
    pub async fn delete_quick_link_category(
        &self,
        category: &str,
    ) -> Result<QuickLinkCategory, StoreError> {
        self.mutate(|data| data.remove_quick_link_category(category))
            .await
    }

    /// Load, apply `f`, and save only if `f` succeeded.
    async fn mutate<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut TravelData) -> Result<T, CoreError> + Send,
        T: Send,
    {
        let mut store = self.store.lock().await;
        let mut data = store.load().await?;
        let out = f(&mut data)?;
        store.save(&data).await?;
        Ok(out)
    }
}
