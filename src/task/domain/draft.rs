//! Validated task input value object.

use super::{TaskPriority, TaskStatus, TaskValidationError};
use chrono::{DateTime, Utc};

/// Caller-supplied task fields after validation.
///
/// Constructing a draft is the validation step: [`TaskDraft::new`] checks
/// title and status, [`TaskDraft::with_priority`] checks priority, and the
/// remaining setters normalise optional free-text fields. Checks run in
/// declaration order and the first failure is reported; there is no error
/// aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub(super) title: String,
    pub(super) description: Option<String>,
    pub(super) status: TaskStatus,
    pub(super) priority: Option<TaskPriority>,
    pub(super) due_date: Option<DateTime<Utc>>,
    pub(super) assigned_to: Option<String>,
}

impl TaskDraft {
    /// Creates a draft with required title and status fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError::MissingTitle`] when the title is blank,
    /// [`TaskValidationError::MissingStatus`] when the status is blank, or
    /// [`TaskValidationError::InvalidStatus`] when the status is not one of
    /// the allowed values. Title blankness is checked first.
    pub fn new(title: impl Into<String>, status: &str) -> Result<Self, TaskValidationError> {
        let raw_title = title.into();
        let normalized_title = raw_title.trim();
        if normalized_title.is_empty() {
            return Err(TaskValidationError::MissingTitle);
        }

        let normalized_status = status.trim();
        if normalized_status.is_empty() {
            return Err(TaskValidationError::MissingStatus);
        }
        let parsed_status = TaskStatus::try_from(normalized_status)?;

        Ok(Self {
            title: normalized_title.to_owned(),
            description: None,
            status: parsed_status,
            priority: None,
            due_date: None,
            assigned_to: None,
        })
    }

    /// Sets the priority from its wire representation.
    ///
    /// A blank value clears the priority; priority is optional.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError::InvalidPriority`] when the value is
    /// non-blank and not one of the allowed values.
    pub fn with_priority(mut self, priority: &str) -> Result<Self, TaskValidationError> {
        let normalized = priority.trim();
        if normalized.is_empty() {
            self.priority = None;
            return Ok(self);
        }
        self.priority = Some(TaskPriority::try_from(normalized)?);
        Ok(self)
    }

    /// Sets the free-text description, treating blank values as absent.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let value = description.into();
        let normalized = value.trim();
        self.description = (!normalized.is_empty()).then_some(normalized.to_owned());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the assignee identifier, treating blank values as absent.
    #[must_use]
    pub fn with_assigned_to(mut self, assigned_to: impl Into<String>) -> Self {
        let value = assigned_to.into();
        let normalized = value.trim();
        self.assigned_to = (!normalized.is_empty()).then_some(normalized.to_owned());
        self
    }

    /// Returns the validated title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the validated status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the validated priority, if any.
    #[must_use]
    pub const fn priority(&self) -> Option<TaskPriority> {
        self.priority
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the assignee identifier, if any.
    #[must_use]
    pub fn assigned_to(&self) -> Option<&str> {
        self.assigned_to.as_deref()
    }
}
