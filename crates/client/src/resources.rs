//! Per-resource typed clients.
//!
//! | Resource | List               | Create             | Update                   | Delete                    |
//! |----------|--------------------|--------------------|--------------------------|---------------------------|
//! | category | `GET categories/`  | `POST categories/` | `PATCH categories/{id}/` | `DELETE categories/{id}/` |
//! | donation | `GET donations/`   | `POST donations/`  | `PATCH donations/{id}/`  | `DELETE donations/{id}/`  |
//! | event    | `GET events/`      | `POST events/`     | `PATCH events/{id}/`     | `DELETE events/{id}/`     |
//! | contact  | `GET contact/`     | `POST contact/`    | `PATCH contact/{id}/`    | `DELETE contact/{id}/`    |

use std::marker::PhantomData;

use async_trait::async_trait;
use myron_core::models::{Category, Contact, Donation, Event};
use myron_core::resource::{Payload, Resource};
use myron_core::types::DbId;

use crate::api::{ApiClient, ApiError};
use crate::envelope::extract_rows;

/// CRUD contract for one resource collection.
///
/// Object safe so pages and the dashboard can hold
/// `Arc<dyn ResourceService<R>>` and tests can substitute fakes.
#[async_trait]
pub trait ResourceService<R: Resource>: Send + Sync {
    /// Fetch the collection. Transport and status errors propagate; a body
    /// that is not a `{data: [...]}` envelope yields an empty list.
    async fn list(&self) -> Result<Vec<R>, ApiError>;

    async fn create(&self, payload: Payload) -> Result<(), ApiError>;

    /// Partial update: only the supplied fields change server-side.
    async fn update(&self, id: DbId, payload: Payload) -> Result<(), ApiError>;

    async fn delete(&self, id: DbId) -> Result<(), ApiError>;
}

/// REST-backed [`ResourceService`] for resource `R`.
pub struct ResourceApi<R> {
    api: ApiClient,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceApi<R> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> ResourceApi<R> {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            _resource: PhantomData,
        }
    }

    fn collection_path() -> String {
        format!("{}/", R::KIND.collection_path())
    }

    fn item_path(id: DbId) -> String {
        format!("{}/{id}/", R::KIND.collection_path())
    }
}

#[async_trait]
impl<R: Resource> ResourceService<R> for ResourceApi<R> {
    async fn list(&self) -> Result<Vec<R>, ApiError> {
        let path = Self::collection_path();
        tracing::debug!(resource = %R::KIND, path = %path, "Listing");
        let body = self.api.get_json(&path).await?;
        Ok(extract_rows(R::KIND.collection_path(), body))
    }

    async fn create(&self, payload: Payload) -> Result<(), ApiError> {
        let path = Self::collection_path();
        tracing::debug!(resource = %R::KIND, path = %path, "Creating");
        self.api.post(&path, &payload).await
    }

    async fn update(&self, id: DbId, payload: Payload) -> Result<(), ApiError> {
        let path = Self::item_path(id);
        tracing::debug!(resource = %R::KIND, id, path = %path, "Updating");
        self.api.patch(&path, &payload).await
    }

    async fn delete(&self, id: DbId) -> Result<(), ApiError> {
        let path = Self::item_path(id);
        tracing::debug!(resource = %R::KIND, id, path = %path, "Deleting");
        self.api.delete(&path).await
    }
}

impl ApiClient {
    pub fn resource<R: Resource>(&self) -> ResourceApi<R> {
        ResourceApi::new(self.clone())
    }

    pub fn categories(&self) -> ResourceApi<Category> {
        self.resource()
    }

    pub fn donations(&self) -> ResourceApi<Donation> {
        self.resource()
    }

    pub fn events(&self) -> ResourceApi<Event> {
        self.resource()
    }

    pub fn contacts(&self) -> ResourceApi<Contact> {
        self.resource()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_carry_trailing_slash() {
        assert_eq!(ResourceApi::<Category>::collection_path(), "categories/");
        assert_eq!(ResourceApi::<Donation>::item_path(4), "donations/4/");
        assert_eq!(ResourceApi::<Contact>::collection_path(), "contact/");
        assert_eq!(ResourceApi::<Event>::item_path(9), "events/9/");
    }
}
