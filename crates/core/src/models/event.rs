use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::image::{ImageField, ImageUpload};
use crate::resource::{Draft, FormMode, MultipartBuilder, Payload, Resource, ResourceKind};
use crate::types::{de, DbId, Timestamp};
use crate::validation::{image_for_submit, require_category, require_text};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(deserialize_with = "de::id")]
    pub id: DbId,
    #[serde(default, deserialize_with = "de::lenient_id")]
    pub category_id: Option<DbId>,
    #[serde(default, deserialize_with = "de::optional_text")]
    pub category_title: Option<String>,
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub title: String,
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub description: String,
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub location: String,
    #[serde(default, deserialize_with = "de::optional_text")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_timestamp")]
    pub created_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventDraft {
    pub id: Option<DbId>,
    pub category_id: Option<DbId>,
    pub title: String,
    pub description: String,
    pub location: String,
    pub image: Option<ImageField>,
}

impl Resource for Event {
    type Draft = EventDraft;

    const KIND: ResourceKind = ResourceKind::Event;

    fn id(&self) -> DbId {
        self.id
    }

    fn to_draft(&self) -> EventDraft {
        EventDraft {
            id: Some(self.id),
            category_id: self.category_id,
            title: self.title.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            image: ImageField::from_existing(self.image.as_deref()),
        }
    }
}

impl Draft for EventDraft {
    fn id(&self) -> Option<DbId> {
        self.id
    }

    fn apply_input(&mut self, field: &str, raw: &str) -> Result<(), CoreError> {
        match field {
            "category" | "category_id" => self.category_id = super::parse_category_input(raw)?,
            "title" => self.title = raw.to_string(),
            "description" => self.description = raw.to_string(),
            "location" => self.location = raw.to_string(),
            other => return Err(super::unknown_field("event", other)),
        }
        Ok(())
    }

    fn set_image(&mut self, upload: ImageUpload) -> Result<(), CoreError> {
        self.image = Some(ImageField::Replacement(upload));
        Ok(())
    }

    fn category_id(&self) -> Option<DbId> {
        self.category_id
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "Category",
                self.category_id.map(|id| id.to_string()).unwrap_or_default(),
            ),
            ("Title", self.title.clone()),
            ("Description", self.description.clone()),
            ("Location", self.location.clone()),
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
        let category = require_category(self.category_id)?;
        let title = require_text("title", "Title", &self.title)?;
        let location = require_text("location", "Location", &self.location)?;
        let image = image_for_submit(mode, self.image.as_ref())?;

        Ok(MultipartBuilder::new()
            .text("category", category.to_string())
            .text("title", title)
            .text("description", self.description.trim())
            .text("location", location)
            .file("image", image)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn stored() -> Event {
        Event {
            id: 11,
            category_id: Some(1),
            category_title: Some("Health".into()),
            title: "Camp".into(),
            description: "Free checkups".into(),
            location: "Pune".into(),
            image: Some("media/events/camp.png".into()),
            created_at: None,
        }
    }

    #[test]
    fn edit_keeps_stored_image_out_of_payload() {
        let mut draft = stored().to_draft();
        draft.apply_input("location", " Mumbai ").unwrap();

        let payload = draft.prepare(FormMode::Edit).unwrap();
        assert_eq!(payload.text("location"), Some("Mumbai"));
        assert_eq!(payload.text("category"), Some("1"));
        assert!(payload.part("image").is_none());
    }

    #[test]
    fn add_requires_image() {
        let mut draft = stored().to_draft();
        draft.id = None;
        assert_matches!(
            draft.prepare(FormMode::Add),
            Err(CoreError::Validation { field: "image", .. })
        );
    }

    #[test]
    fn location_is_required() {
        let mut draft = stored().to_draft();
        draft.location = " ".into();
        let err = draft.prepare(FormMode::Edit).unwrap_err();
        assert_eq!(err.user_message(), "Location is required");
    }

    #[test]
    fn unparsable_created_at_is_none() {
        let row: Event = serde_json::from_value(serde_json::json!({
            "id": 1,
            "created_at": "last tuesday"
        }))
        .unwrap();
        assert!(row.created_at.is_none());
    }
}
