use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::image::{ImageField, ImageUpload};
use crate::resource::{Draft, FormMode, MultipartBuilder, Payload, Resource, ResourceKind};
use crate::types::{de, DbId};
use crate::validation::{image_for_submit, require_text};

/// A donation/event category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(deserialize_with = "de::id")]
    pub id: DbId,
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub title: String,
    /// Relative path of the stored image.
    #[serde(default, deserialize_with = "de::optional_text")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryDraft {
    pub id: Option<DbId>,
    pub title: String,
    pub image: Option<ImageField>,
}

impl Resource for Category {
    type Draft = CategoryDraft;

    const KIND: ResourceKind = ResourceKind::Category;

    fn id(&self) -> DbId {
        self.id
    }

    fn to_draft(&self) -> CategoryDraft {
        CategoryDraft {
            id: Some(self.id),
            title: self.title.clone(),
            image: ImageField::from_existing(self.image.as_deref()),
        }
    }
}

impl Draft for CategoryDraft {
    fn id(&self) -> Option<DbId> {
        self.id
    }

    fn apply_input(&mut self, field: &str, raw: &str) -> Result<(), CoreError> {
        match field {
            "title" => self.title = raw.to_string(),
            other => return Err(super::unknown_field("category", other)),
        }
        Ok(())
    }

    fn set_image(&mut self, upload: ImageUpload) -> Result<(), CoreError> {
        self.image = Some(ImageField::Replacement(upload));
        Ok(())
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Title", self.title.clone()),
            (
                "Image",
                self.image.as_ref().map(ImageField::describe).unwrap_or_default(),
            ),
        ]
    }

    fn prepare(&self, mode: FormMode) -> Result<Payload, CoreError> {
        if mode.is_read_only() {
            return Err(CoreError::ReadOnly);
        }
        let title = require_text("title", "Title", &self.title)?;
        let image = image_for_submit(mode, self.image.as_ref())?;

        Ok(MultipartBuilder::new()
            .text("title", title)
            .file("image", image)
            .build())
    }
}
