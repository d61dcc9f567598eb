//! Category selector for the donation and event forms.
//!
//! The selector only offers categories from the live list, which is the
//! only referential check made before a donation or event is submitted.

use std::sync::Arc;

use myron_client::resources::ResourceService;
use myron_core::error::CoreError;
use myron_core::models::Category;
use myron_core::types::DbId;

/// Placeholder option shown before a category is chosen.
pub const SELECT_PLACEHOLDER: &str = "Select Category";

#[derive(Debug, Clone, Default)]
pub struct CategoryOptions {
    categories: Vec<Category>,
}

impl CategoryOptions {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Fetch the live category list. A failed fetch leaves no options.
    pub async fn load(service: &Arc<dyn ResourceService<Category>>) -> Self {
        match service.list().await {
            Ok(categories) => Self::new(categories),
            Err(e) => {
                tracing::error!(error = %e, "Category fetch failed");
                Self::default()
            }
        }
    }

    /// `(id, title)` pairs in backend order.
    pub fn options(&self) -> Vec<(DbId, &str)> {
        self.categories
            .iter()
            .map(|c| (c.id, c.title.as_str()))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn title_of(&self, id: DbId) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.title.as_str())
    }

    /// Accept a selection only if it is one of the offered categories.
    pub fn select(&self, id: DbId) -> Result<DbId, CoreError> {
        if self.title_of(id).is_some() {
            Ok(id)
        } else {
            Err(CoreError::validation(
                "category",
                format!("Category {id} is not available"),
            ))
        }
    }
}
