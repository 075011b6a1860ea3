//! Service layer for task creation, retrieval, update, and removal.
//!
//! The service is the only component permitted to apply business rules:
//! field validation, identifier and timestamp assignment, the default-status
//! policy, and update merging. Persistence is delegated to the repository
//! port; transport concerns stay outside this layer.

use crate::task::{
    domain::{Task, TaskDraft, TaskId, TaskStatus, TaskValidationError},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Caller-supplied task fields, shared by create and update requests.
///
/// This is the raw wire shape: status and priority arrive as strings and are
/// only parsed into their enumerations during validation. Field names
/// serialise in camelCase to match the external JSON representation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskPayload {
    title: String,
    description: Option<String>,
    status: String,
    priority: Option<String>,
    due_date: Option<DateTime<Utc>>,
    assigned_to: Option<String>,
}

impl TaskPayload {
    /// Creates a payload with required title and status fields.
    #[must_use]
    pub fn new(title: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: status.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the priority wire value.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the assignee identifier.
    #[must_use]
    pub fn with_assigned_to(mut self, assigned_to: impl Into<String>) -> Self {
        self.assigned_to = Some(assigned_to.into());
        self
    }

    /// Validates the payload into a draft.
    fn into_draft(self) -> Result<TaskDraft, TaskValidationError> {
        let mut draft = TaskDraft::new(self.title, &self.status)?;
        draft = draft.with_priority(self.priority.as_deref().unwrap_or_default())?;
        if let Some(description) = self.description {
            draft = draft.with_description(description);
        }
        if let Some(due_date) = self.due_date {
            draft = draft.with_due_date(due_date);
        }
        if let Some(assigned_to) = self.assigned_to {
            draft = draft.with_assigned_to(assigned_to);
        }
        Ok(draft)
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Caller-supplied fields failed validation.
    #[error(transparent)]
    Validation(#[from] TaskValidationError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns a snapshot of all stored tasks in unspecified order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the snapshot read fails.
    pub async fn get_tasks(&self) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.get_all().await?)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when no task with
    /// that identifier exists.
    pub async fn get_task(&self, id: TaskId) -> TaskServiceResult<Task> {
        Ok(self.repository.get_by_id(id).await?)
    }

    /// Creates a new task from caller-supplied fields.
    ///
    /// A blank status defaults to `Pending` before validation runs, so
    /// omitting the status is always legal at creation time. The stored task
    /// gets a fresh identifier and identical creation and update timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when a field is invalid, or
    /// [`TaskServiceError::Repository`] when persistence fails.
    pub async fn create_task(&self, mut payload: TaskPayload) -> TaskServiceResult<Task> {
        if payload.status.trim().is_empty() {
            payload.status = TaskStatus::default().as_str().to_owned();
        }
        let draft = payload.into_draft()?;

        let task = Task::create(draft, &*self.clock);
        let stored = self.repository.save(&task).await?;
        Ok(stored)
    }

    /// Updates an existing task with caller-supplied fields.
    ///
    /// The identifier and creation timestamp are preserved; all
    /// caller-mutable fields are replaced with the payload's values and
    /// `updated_at` is refreshed. The fetch and the write are two separate
    /// repository calls, so a concurrent delete between them surfaces as
    /// `NotFound` on the write.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when the task
    /// does not exist, or [`TaskServiceError::Validation`] when a field is
    /// invalid.
    pub async fn update_task(&self, id: TaskId, payload: TaskPayload) -> TaskServiceResult<Task> {
        let mut existing = self.repository.get_by_id(id).await?;
        let draft = payload.into_draft()?;

        existing.apply(draft, &*self.clock);
        let stored = self.repository.update(id, &existing).await?;
        Ok(stored)
    }

    /// Removes a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when no task with
    /// that identifier exists.
    pub async fn delete_task(&self, id: TaskId) -> TaskServiceResult<()> {
        Ok(self.repository.delete(id).await?)
    }
}
