//! Axum REST adapter exposing the task service over HTTP.
//!
//! The transport layer is thin, mechanical glue: it deserialises payloads,
//! parses path identifiers, delegates to the service, and maps typed errors
//! to response classes. No business rules live here.

pub mod error;
pub mod routes;

pub use error::ApiError;

use crate::task::{ports::TaskRepository, services::TaskService};
use axum::{Json, Router, routing::get};
use mockable::Clock;
use serde_json::json;
use std::sync::Arc;

/// Builds the application router with all task routes registered.
///
/// The service handle is injected as router state; the binary constructs it
/// once at startup.
#[must_use]
pub fn build_router<R, C>(service: Arc<TaskService<R, C>>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/api/v1/tasks",
            get(routes::list_tasks::<R, C>).post(routes::create_task::<R, C>),
        )
        .route(
            "/api/v1/tasks/{id}",
            get(routes::get_task::<R, C>)
                .put(routes::update_task::<R, C>)
                .delete(routes::delete_task::<R, C>),
        )
        .route(
            "/health",
            get(|| async { Json(json!({ "status": "ok" })) }),
        )
        .with_state(service)
}
