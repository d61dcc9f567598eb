use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::image::ImageUpload;
use crate::resource::{Draft, FormMode, Payload, Resource, ResourceKind};
use crate::types::{de, DbId};
use crate::validation::{
    sanitize_contact_name_input, sanitize_contact_number_input, validate_contact_name,
    validate_contact_number, validate_email,
};

/// A contact-form submission. Has no creation timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(deserialize_with = "de::id")]
    pub id: DbId,
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub name: String,
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub email: String,
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub number: String,
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactDraft {
    pub id: Option<DbId>,
    pub name: String,
    pub email: String,
    pub number: String,
    pub message: String,
}

/// JSON body for contact create/update.
#[derive(Debug, Serialize)]
struct ContactPayload {
    name: String,
    email: String,
    number: String,
    message: String,
}

impl Resource for Contact {
    type Draft = ContactDraft;

    const KIND: ResourceKind = ResourceKind::Contact;

    fn id(&self) -> DbId {
        self.id
    }

    fn to_draft(&self) -> ContactDraft {
        ContactDraft {
            id: Some(self.id),
            name: self.name.clone(),
            email: self.email.clone(),
            number: self.number.clone(),
            message: self.message.clone(),
        }
    }
}

impl Draft for ContactDraft {
    fn id(&self) -> Option<DbId> {
        self.id
    }

    fn apply_input(&mut self, field: &str, raw: &str) -> Result<(), CoreError> {
        match field {
            "name" => self.name = sanitize_contact_name_input(&self.name, raw),
            "email" => self.email = raw.to_string(),
            "number" | "phone" => self.number = sanitize_contact_number_input(&self.number, raw),
            "message" => self.message = raw.to_string(),
            other => return Err(super::unknown_field("contact", other)),
        }
        Ok(())
    }

    fn set_image(&mut self, _upload: ImageUpload) -> Result<(), CoreError> {
        Err(super::unknown_field("contact", "image"))
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Email", self.email.clone()),
            ("Number", self.number.clone()),
            ("Message", self.message.clone()),
        ]
    }

    fn prepare(&self, mode: FormMode) -> Result<Payload, CoreError> {
        if mode.is_read_only() {
            return Err(CoreError::ReadOnly);
        }
        let payload = ContactPayload {
            name: validate_contact_name(&self.name)?,
            number: validate_contact_number(&self.number)?,
            email: validate_email(&self.email)?,
            message: self.message.trim().to_string(),
        };
        let body = serde_json::to_value(payload).map_err(|e| CoreError::InvalidInput {
            field: "contact",
            message: e.to_string(),
        })?;
        Ok(Payload::Json(body))
    }
}
