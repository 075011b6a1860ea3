//! End-to-end CRUD scenarios driven through the task service.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::{fixture, rstest};
use taskforge::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskStatus, TaskValidationError},
    ports::TaskRepositoryError,
    services::{TaskPayload, TaskService, TaskServiceError},
};

type TestService = TaskService<InMemoryTaskRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    TaskService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_lifecycle_create_update_delete(service: TestService) -> Result<(), eyre::Report> {
    // Create with a blank status: the service defaults it to Pending.
    let created = service
        .create_task(TaskPayload::new("Write report", ""))
        .await?;
    eyre::ensure!(
        created.status() == TaskStatus::Pending,
        "expected defaulted status, got {}",
        created.status()
    );

    // Update mutable fields; identity and creation timestamp survive.
    let updated = service
        .update_task(
            created.id(),
            TaskPayload::new("Write report v2", "Completed"),
        )
        .await?;
    eyre::ensure!(updated.id() == created.id(), "task ID changed on update");
    eyre::ensure!(
        updated.created_at() == created.created_at(),
        "creation timestamp changed on update"
    );
    eyre::ensure!(updated.title() == "Write report v2", "title not replaced");
    eyre::ensure!(
        updated.status() == TaskStatus::Completed,
        "status not replaced"
    );

    // Delete, then confirm the record is gone.
    service.delete_task(created.id()).await?;
    let result = service.get_task(created.id()).await;
    eyre::ensure!(
        matches!(
            result,
            Err(TaskServiceError::Repository(
                TaskRepositoryError::NotFound(_)
            ))
        ),
        "expected a not-found error after delete"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_reflects_successful_creations(service: TestService) {
    let initial = service.get_tasks().await.expect("snapshot should succeed");
    assert!(initial.is_empty());

    for title in ["First", "Second", "Third"] {
        service
            .create_task(TaskPayload::new(title, "Pending"))
            .await
            .expect("creation should succeed");
    }

    let tasks = service.get_tasks().await.expect("snapshot should succeed");
    assert_eq!(tasks.len(), 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_input_never_reaches_the_store(service: TestService) {
    let result = service
        .create_task(TaskPayload::new("Write report", "Pending").with_priority("Critical"))
        .await;
    assert!(matches!(
        result,
        Err(TaskServiceError::Validation(
            TaskValidationError::InvalidPriority(_)
        ))
    ));

    let tasks = service.get_tasks().await.expect("snapshot should succeed");
    assert!(tasks.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stored_tasks_use_the_external_json_shape(service: TestService) {
    let created = service
        .create_task(
            TaskPayload::new("Write report", "InProgress")
                .with_priority("High")
                .with_assigned_to("alice"),
        )
        .await
        .expect("creation should succeed");

    let value = serde_json::to_value(&created).expect("task serialises");
    assert_eq!(value.get("status"), Some(&serde_json::json!("InProgress")));
    assert_eq!(value.get("priority"), Some(&serde_json::json!("High")));
    assert_eq!(value.get("assignedTo"), Some(&serde_json::json!("alice")));
    assert!(value.get("createdAt").is_some());
    assert!(value.get("updatedAt").is_some());
}
