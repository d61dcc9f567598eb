use crate::types::DbId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A client-side submit rule was violated. Never sent over the wire.
    #[error("Validation failed on `{field}`: {message}")]
    Validation { field: &'static str, message: String },

    #[error("Form is open in view mode and cannot be edited or submitted")]
    ReadOnly,

    #[error("No form is open")]
    FormClosed,

    #[error("Unknown field `{field}` for {resource}")]
    UnknownField {
        resource: &'static str,
        field: String,
    },

    #[error("Invalid input for `{field}`: {message}")]
    InvalidInput { field: &'static str, message: String },
}

impl CoreError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// The message shown to the user for this error.
    ///
    /// Validation errors carry their notice verbatim; other variants fall
    /// back to the `Display` text.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. } | Self::InvalidInput { message, .. } => {
                message.clone()
            }
            other => other.to_string(),
        }
    }
}
