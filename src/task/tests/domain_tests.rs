//! Domain-focused tests for task records and field validation.

use crate::task::domain::{Task, TaskDraft, TaskPriority, TaskStatus, TaskValidationError};
use chrono::Utc;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

// ── Status and priority enumerations ────────────────────────────────

#[rstest]
#[case("Pending", TaskStatus::Pending)]
#[case("InProgress", TaskStatus::InProgress)]
#[case("Completed", TaskStatus::Completed)]
#[case("Cancelled", TaskStatus::Cancelled)]
fn status_parses_canonical_wire_values(#[case] wire: &str, #[case] expected: TaskStatus) {
    assert_eq!(TaskStatus::try_from(wire), Ok(expected));
    assert_eq!(expected.as_str(), wire);
}

#[rstest]
#[case("Done")]
#[case("pending")]
#[case("IN_PROGRESS")]
fn status_rejects_unknown_values(#[case] wire: &str) {
    assert_eq!(
        TaskStatus::try_from(wire),
        Err(TaskValidationError::InvalidStatus(wire.to_owned()))
    );
}

#[rstest]
fn status_defaults_to_pending() {
    assert_eq!(TaskStatus::default(), TaskStatus::Pending);
}

#[rstest]
#[case("Low", TaskPriority::Low)]
#[case("Medium", TaskPriority::Medium)]
#[case("High", TaskPriority::High)]
fn priority_parses_canonical_wire_values(#[case] wire: &str, #[case] expected: TaskPriority) {
    assert_eq!(TaskPriority::try_from(wire), Ok(expected));
    assert_eq!(expected.as_str(), wire);
}

#[rstest]
fn priority_rejects_unknown_values() {
    assert_eq!(
        TaskPriority::try_from("Urgent"),
        Err(TaskValidationError::InvalidPriority("Urgent".to_owned()))
    );
}

// ── Draft validation ────────────────────────────────────────────────

#[rstest]
#[case("")]
#[case("   ")]
fn draft_rejects_blank_title(#[case] title: &str) {
    let result = TaskDraft::new(title, "Pending");
    assert_eq!(result, Err(TaskValidationError::MissingTitle));
}

#[rstest]
fn draft_rejects_blank_status() {
    let result = TaskDraft::new("Write report", "  ");
    assert_eq!(result, Err(TaskValidationError::MissingStatus));
}

#[rstest]
fn draft_rejects_unknown_status() {
    let result = TaskDraft::new("Write report", "Archived");
    assert_eq!(
        result,
        Err(TaskValidationError::InvalidStatus("Archived".to_owned()))
    );
}

#[rstest]
fn draft_reports_title_before_status() {
    // Both fields invalid: the first failing check wins, no aggregation.
    let result = TaskDraft::new("", "Archived");
    assert_eq!(result, Err(TaskValidationError::MissingTitle));
}

#[rstest]
fn draft_rejects_unknown_priority() {
    let result = TaskDraft::new("Write report", "Pending")
        .expect("valid draft")
        .with_priority("Urgent");
    assert_eq!(
        result,
        Err(TaskValidationError::InvalidPriority("Urgent".to_owned()))
    );
}

#[rstest]
#[case("")]
#[case("   ")]
fn draft_treats_blank_priority_as_absent(#[case] priority: &str) {
    let draft = TaskDraft::new("Write report", "Pending")
        .expect("valid draft")
        .with_priority(priority)
        .expect("blank priority is valid");
    assert_eq!(draft.priority(), None);
}

#[rstest]
fn draft_normalises_optional_text_fields() {
    let draft = TaskDraft::new("  Write report  ", "Pending")
        .expect("valid draft")
        .with_description("   ")
        .with_assigned_to("alice");
    assert_eq!(draft.title(), "Write report");
    assert_eq!(draft.description(), None);
    assert_eq!(draft.assigned_to(), Some("alice"));
}

#[rstest]
#[case(TaskValidationError::MissingTitle, "title")]
#[case(TaskValidationError::MissingStatus, "status")]
#[case(TaskValidationError::InvalidStatus("Archived".to_owned()), "status")]
#[case(TaskValidationError::InvalidPriority("Urgent".to_owned()), "priority")]
fn validation_errors_name_the_offending_field(
    #[case] error: TaskValidationError,
    #[case] field: &str,
) {
    assert_eq!(error.field(), field);
}

// ── Task record lifecycle ───────────────────────────────────────────

#[rstest]
fn create_assigns_identity_and_identical_timestamps(clock: DefaultClock) {
    let draft = TaskDraft::new("Write report", "Pending")
        .expect("valid draft")
        .with_priority("High")
        .expect("valid priority")
        .with_description("Quarterly numbers");
    let task = Task::create(draft, &clock);

    assert!(!task.id().into_inner().is_nil());
    assert_eq!(task.created_at(), task.updated_at());
    assert_eq!(task.title(), "Write report");
    assert_eq!(task.status(), TaskStatus::Pending);
    assert_eq!(task.priority(), Some(TaskPriority::High));
    assert_eq!(task.description(), Some("Quarterly numbers"));
}

#[rstest]
fn apply_replaces_mutable_fields_and_preserves_identity(clock: DefaultClock) {
    let draft = TaskDraft::new("Write report", "Pending").expect("valid draft");
    let mut task = Task::create(draft, &clock);
    let original_id = task.id();
    let original_created_at = task.created_at();

    let revision = TaskDraft::new("Write report v2", "Completed")
        .expect("valid draft")
        .with_assigned_to("bob");
    task.apply(revision, &clock);

    assert_eq!(task.id(), original_id);
    assert_eq!(task.created_at(), original_created_at);
    assert_eq!(task.title(), "Write report v2");
    assert_eq!(task.status(), TaskStatus::Completed);
    assert_eq!(task.assigned_to(), Some("bob"));
    assert!(task.updated_at() >= task.created_at());
}

#[rstest]
fn apply_clears_fields_absent_from_the_draft(clock: DefaultClock) {
    let draft = TaskDraft::new("Write report", "Pending")
        .expect("valid draft")
        .with_description("Quarterly numbers")
        .with_priority("Low")
        .expect("valid priority");
    let mut task = Task::create(draft, &clock);

    let revision = TaskDraft::new("Write report", "Pending").expect("valid draft");
    task.apply(revision, &clock);

    assert_eq!(task.description(), None);
    assert_eq!(task.priority(), None);
}

// ── External JSON representation ────────────────────────────────────

#[rstest]
fn task_serialises_with_camel_case_field_names(clock: DefaultClock) {
    let draft = TaskDraft::new("Write report", "InProgress")
        .expect("valid draft")
        .with_priority("Medium")
        .expect("valid priority")
        .with_due_date(Utc::now())
        .with_assigned_to("alice");
    let task = Task::create(draft, &clock);
    let value = serde_json::to_value(&task).expect("task serialises");

    assert_eq!(value.get("id"), Some(&serde_json::json!(task.id())));
    assert_eq!(value.get("title"), Some(&serde_json::json!("Write report")));
    assert_eq!(value.get("status"), Some(&serde_json::json!("InProgress")));
    assert_eq!(value.get("priority"), Some(&serde_json::json!("Medium")));
    assert_eq!(value.get("assignedTo"), Some(&serde_json::json!("alice")));
    assert!(value.get("dueDate").is_some());
    assert!(value.get("createdAt").is_some());
    assert!(value.get("updatedAt").is_some());
}

#[rstest]
fn task_omits_absent_optional_fields(clock: DefaultClock) {
    let draft = TaskDraft::new("Write report", "Pending").expect("valid draft");
    let task = Task::create(draft, &clock);
    let value = serde_json::to_value(&task).expect("task serialises");

    assert!(value.get("description").is_none());
    assert!(value.get("priority").is_none());
    assert!(value.get("dueDate").is_none());
    assert!(value.get("assignedTo").is_none());
}

#[rstest]
fn task_round_trips_through_json(clock: DefaultClock) {
    let draft = TaskDraft::new("Write report", "Completed")
        .expect("valid draft")
        .with_description("Quarterly numbers");
    let task = Task::create(draft, &clock);

    let value = serde_json::to_value(&task).expect("task serialises");
    let decoded: Task = serde_json::from_value(value).expect("task deserialises");
    assert_eq!(decoded, task);
}
