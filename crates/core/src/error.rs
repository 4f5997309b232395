use crate::types::DbId;

/// Domain error taxonomy shared by every entity service.
///
/// Everything except [`DomainError::Unexpected`] is a client fault and maps
/// to a 4xx status at the HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("{field} must be an integer")]
    InvalidType { field: &'static str },

    #[error("{0}")]
    InvalidFormat(String),

    #[error("{entity} with value '{value}' already exists")]
    Duplicate { entity: &'static str, value: String },

    #[error("{entity} already has a translation for language {language_id}")]
    DuplicateTranslation {
        entity: &'static str,
        language_id: DbId,
    },

    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("{field} cannot be modified")]
    ImmutableField { field: &'static str },

    #[error("Unknown field: {field}")]
    InvalidField { field: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl DomainError {
    /// Whether this error is the caller's fault (4xx) rather than ours (5xx).
    pub fn is_client_fault(&self) -> bool {
        !matches!(self, DomainError::Unexpected(_))
    }
}

/// Convenience alias used throughout the workspace.
pub type DomainResult<T> = Result<T, DomainError>;
