//! Resource kinds, form modes, request payloads and the traits every
//! managed entity implements.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::image::ImageUpload;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// ResourceKind
// ---------------------------------------------------------------------------

/// The four backend-managed collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Category,
    Donation,
    Event,
    Contact,
}

impl ResourceKind {
    /// Collection path relative to the API base URL, without slashes.
    pub fn collection_path(self) -> &'static str {
        match self {
            Self::Category => "categories",
            Self::Donation => "donations",
            Self::Event => "events",
            Self::Contact => "contact",
        }
    }

    /// Lower-case singular noun used in notices.
    pub fn singular(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Donation => "donation",
            Self::Event => "event",
            Self::Contact => "contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Category => "Category",
            Self::Donation => "Donation",
            Self::Event => "Event",
            Self::Contact => "Contact",
        }
    }

    pub fn plural_title(self) -> &'static str {
        match self {
            Self::Category => "Categories",
            Self::Donation => "Donations",
            Self::Event => "Events",
            Self::Contact => "Contacts",
        }
    }

    /// Indicator rendered in place of rows when a list is empty.
    pub fn empty_message(self) -> String {
        format!("No {} found", self.plural_title().to_lowercase())
    }

    /// Destructive-action confirmation shown before a delete.
    pub fn confirm_delete_message(self) -> String {
        format!("Delete this {}?", self.singular())
    }

    /// Notice shown when a create or update request fails.
    pub fn save_failed_message(self) -> String {
        format!("{} save failed", self.title())
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular())
    }
}

// ---------------------------------------------------------------------------
// FormMode
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    Add,
    View,
    Edit,
}

impl FormMode {
    pub fn is_read_only(self) -> bool {
        matches!(self, Self::View)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::View => "View",
            Self::Edit => "Edit",
        }
    }
}

impl fmt::Display for FormMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Add => "add",
            Self::View => "view",
            Self::Edit => "edit",
        })
    }
}

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

/// Value of a single multipart part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    Text(String),
    File(ImageUpload),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPart {
    pub name: &'static str,
    pub value: FormValue,
}

/// Request body for a create or partial update.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(serde_json::Value),
    Multipart(Vec<FormPart>),
}

impl Payload {
    /// Look up a multipart part by name. Always `None` for JSON payloads.
    pub fn part(&self, name: &str) -> Option<&FormValue> {
        match self {
            Self::Multipart(parts) => parts.iter().find(|p| p.name == name).map(|p| &p.value),
            Self::Json(_) => None,
        }
    }

    /// Text value of a multipart part or a JSON string field.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self {
            Self::Multipart(_) => match self.part(name)? {
                FormValue::Text(s) => Some(s),
                FormValue::File(_) => None,
            },
            Self::Json(value) => value.get(name)?.as_str(),
        }
    }
}

/// Incrementally builds the parts of a multipart payload.
#[derive(Debug, Default)]
pub struct MultipartBuilder {
    parts: Vec<FormPart>,
}

impl MultipartBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.parts.push(FormPart {
            name,
            value: FormValue::Text(value.into()),
        });
        self
    }

    /// Append a file part when an upload is present; otherwise the part is
    /// omitted entirely.
    pub fn file(mut self, name: &'static str, upload: Option<ImageUpload>) -> Self {
        if let Some(upload) = upload {
            self.parts.push(FormPart {
                name,
                value: FormValue::File(upload),
            });
        }
        self
    }

    pub fn build(self) -> Payload {
        Payload::Multipart(self.parts)
    }
}

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// A backend entity row as returned by a list call.
pub trait Resource: Clone + fmt::Debug + DeserializeOwned + Send + Sync + 'static {
    type Draft: Draft;

    const KIND: ResourceKind;

    fn id(&self) -> DbId;

    /// Shallow copy of the row into an editable draft.
    fn to_draft(&self) -> Self::Draft;
}

/// The staging copy of one entity while its form is open.
///
/// `Default` is the empty template used in add mode.
pub trait Draft: Clone + fmt::Debug + Default + Send + Sync + 'static {
    /// Id of the row this draft was copied from; `None` in add mode.
    fn id(&self) -> Option<DbId>;

    /// Apply raw user input to a named field, running the field's typing
    /// sanitizer. Input the sanitizer refuses leaves the field unchanged.
    fn apply_input(&mut self, field: &str, raw: &str) -> Result<(), CoreError>;

    /// Choose a new image file. Fails for resources without an image.
    fn set_image(&mut self, upload: ImageUpload) -> Result<(), CoreError>;

    /// Selected category, for resources filed under one.
    fn category_id(&self) -> Option<DbId> {
        None
    }

    /// Ordered label/value pairs for read-only display.
    fn display_fields(&self) -> Vec<(&'static str, String)>;

    /// Trim, validate and build the request payload for `mode`.
    fn prepare(&self, mode: FormMode) -> Result<Payload, CoreError>;
}
