//! Backend entities and their draft records.
//!
//! Rows are deserialized leniently: every field except `id` defaults when
//! missing, and scalars tolerate string/number drift.

pub mod category;
pub mod contact;
pub mod donation;
pub mod event;

pub use category::{Category, CategoryDraft};
pub use contact::{Contact, ContactDraft};
pub use donation::{Donation, DonationDraft};
pub use event::{Event, EventDraft};

use crate::error::CoreError;
use crate::types::DbId;

/// Parse a category selector value. An empty selection clears it.
pub(crate) fn parse_category_input(raw: &str) -> Result<Option<DbId>, CoreError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse().map(Some).map_err(|_| CoreError::InvalidInput {
        field: "category",
        message: format!("'{raw}' is not a category id"),
    })
}

pub(crate) fn unknown_field(resource: &'static str, field: &str) -> CoreError {
    CoreError::UnknownField {
        resource,
        field: field.to_string(),
    }
}
