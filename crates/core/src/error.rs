use crate::types::DbId;

/// Key used for validation errors that do not belong to a single field.
pub const NON_FIELD: &str = "non_field_errors";

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A validation failure keyed by field name, or by [`NON_FIELD`] for
    /// cross-field rules.
    #[error("Validation failed on {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Build a single-field validation error.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        CoreError::Validation {
            field,
            message: message.into(),
        }
    }

    /// Build a cross-field (object-level) validation error.
    pub fn validation_non_field(message: impl Into<String>) -> Self {
        CoreError::Validation {
            field: NON_FIELD,
            message: message.into(),
        }
    }
}
