//! Repository port for task persistence and lookup.

use crate::task::domain::{Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Implementations are thin consistent key-value layers: they never apply
/// business rules such as field merging or timestamp refresh. Each call is
/// individually atomic; multi-step operations composed from several calls
/// carry no cross-call guarantees.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns a snapshot copy of all stored tasks in unspecified order.
    ///
    /// An empty store yields an empty vector, never an error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] on adapter-level failure.
    async fn get_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns a copy of the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no task with that
    /// identifier exists.
    async fn get_by_id(&self, id: TaskId) -> TaskRepositoryResult<Task>;

    /// Inserts or overwrites the entry at the task's identifier.
    ///
    /// Returns the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] on adapter-level failure.
    async fn save(&self, task: &Task) -> TaskRepositoryResult<Task>;

    /// Overwrites the stored entry at `id` with the supplied task.
    ///
    /// Returns the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when `id` is absent.
    async fn update(&self, id: TaskId, task: &Task) -> TaskRepositoryResult<Task>;

    /// Removes the entry at `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when `id` is absent.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
