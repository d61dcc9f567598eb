use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::image::{ImageField, ImageUpload};
use crate::resource::{Draft, FormMode, MultipartBuilder, Payload, Resource, ResourceKind};
use crate::types::{de, DbId, Timestamp};
use crate::validation::{
    image_for_submit, require_category, require_text, sanitize_donation_goal_input,
    validate_donation_goal,
};

/// A fundraising campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    #[serde(deserialize_with = "de::id")]
    pub id: DbId,
    #[serde(default, deserialize_with = "de::lenient_id")]
    pub category_id: Option<DbId>,
    /// Denormalized category title for list display.
    #[serde(default, deserialize_with = "de::optional_text")]
    pub category_title: Option<String>,
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub title: String,
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub description: String,
    /// Kept as text; the backend may send it as a number or a string.
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub donation_goal: String,
    #[serde(default, deserialize_with = "de::optional_text")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_timestamp")]
    pub created_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DonationDraft {
    pub id: Option<DbId>,
    pub category_id: Option<DbId>,
    pub title: String,
    pub description: String,
    pub donation_goal: String,
    pub image: Option<ImageField>,
}

impl Resource for Donation {
    type Draft = DonationDraft;

    const KIND: ResourceKind = ResourceKind::Donation;

    fn id(&self) -> DbId {
        self.id
    }

    fn to_draft(&self) -> DonationDraft {
        DonationDraft {
            id: Some(self.id),
            category_id: self.category_id,
            title: self.title.clone(),
            description: self.description.clone(),
            donation_goal: self.donation_goal.clone(),
            image: ImageField::from_existing(self.image.as_deref()),
        }
    }
}

impl Draft for DonationDraft {
    fn id(&self) -> Option<DbId> {
        self.id
    }

    fn apply_input(&mut self, field: &str, raw: &str) -> Result<(), CoreError> {
        match field {
            "category" | "category_id" => self.category_id = super::parse_category_input(raw)?,
            "title" => self.title = raw.to_string(),
            "description" => self.description = raw.to_string(),
            "donation_goal" | "goal" => {
                self.donation_goal = sanitize_donation_goal_input(&self.donation_goal, raw)
            }
            other => return Err(super::unknown_field("donation", other)),
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
            ("Goal", self.donation_goal.clone()),
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
        let goal = validate_donation_goal(&self.donation_goal)?;
        let image = image_for_submit(mode, self.image.as_ref())?;

        Ok(MultipartBuilder::new()
            .text("category", category.to_string())
            .text("title", title)
            .text("description", self.description.trim())
            .text("donation_goal", goal)
            .file("image", image)
            .build())
    }
}
