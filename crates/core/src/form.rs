//! The list/form state machine shared by every resource page.
//!
//! A page is either showing its list or has one form open in a
//! [`FormMode`] with a draft record. Opening a form replaces any previous
//! draft; closing it discards the draft.

use crate::error::CoreError;
use crate::resource::{Draft, FormMode, Resource, ResourceKind};

#[derive(Debug, Clone, PartialEq)]
pub enum FormState<D> {
    Listing,
    Open { mode: FormMode, draft: D },
}

impl<D> Default for FormState<D> {
    fn default() -> Self {
        Self::Listing
    }
}

impl<D: Draft> FormState<D> {
    /// Open an empty template for a new record.
    pub fn open_add(&mut self) {
        *self = Self::Open {
            mode: FormMode::Add,
            draft: D::default(),
        };
    }

    /// Open a read-only copy of `row`.
    pub fn open_view<R: Resource<Draft = D>>(&mut self, row: &R) {
        *self = Self::Open {
            mode: FormMode::View,
            draft: row.to_draft(),
        };
    }

    /// Open an editable copy of `row`.
    pub fn open_edit<R: Resource<Draft = D>>(&mut self, row: &R) {
        *self = Self::Open {
            mode: FormMode::Edit,
            draft: row.to_draft(),
        };
    }

    /// Leave the form, dropping the draft.
    pub fn close(&mut self) {
        *self = Self::Listing;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn mode(&self) -> Option<FormMode> {
        match self {
            Self::Open { mode, .. } => Some(*mode),
            Self::Listing => None,
        }
    }

    pub fn draft(&self) -> Option<&D> {
        match self {
            Self::Open { draft, .. } => Some(draft),
            Self::Listing => None,
        }
    }

    /// Mutable access to the draft. Refused in view mode.
    pub fn draft_mut(&mut self) -> Result<&mut D, CoreError> {
        match self {
            Self::Open {
                mode: FormMode::View,
                ..
            } => Err(CoreError::ReadOnly),
            Self::Open { draft, .. } => Ok(draft),
            Self::Listing => Err(CoreError::FormClosed),
        }
    }
}

/// Heading of an open form, e.g. `"Edit Donation"`.
pub fn form_heading(kind: ResourceKind, mode: FormMode) -> String {
    format!("{} {}", mode.label(), kind.title())
}

/// Label of the submit control; view mode has none.
pub fn submit_label(kind: ResourceKind, mode: FormMode) -> Option<String> {
    match mode {
        FormMode::Add => Some(format!("Save {}", kind.title())),
        FormMode::Edit => Some(format!("Update {}", kind.title())),
        FormMode::View => None,
    }
}
