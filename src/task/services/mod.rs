//! Application services for task lifecycle orchestration.

mod lifecycle;

pub use lifecycle::{TaskPayload, TaskService, TaskServiceError, TaskServiceResult};
