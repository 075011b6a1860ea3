//! Error types for task field validation.

use thiserror::Error;

/// Errors returned while validating caller-supplied task fields.
///
/// Each variant maps to exactly one offending field, exposed through
/// [`TaskValidationError::field`] so transport layers can report it without
/// inspecting variants.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskValidationError {
    /// The title is empty after trimming.
    #[error("title is required")]
    MissingTitle,

    /// The status is empty after trimming.
    #[error("status is required")]
    MissingStatus,

    /// The status is not one of the allowed values.
    #[error("invalid status value: {0}")]
    InvalidStatus(String),

    /// The priority is not one of the allowed values.
    #[error("invalid priority value: {0}")]
    InvalidPriority(String),
}

impl TaskValidationError {
    /// Returns the name of the field that failed validation.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingTitle => "title",
            Self::MissingStatus | Self::InvalidStatus(_) => "status",
            Self::InvalidPriority(_) => "priority",
        }
    }
}
