use memostack_core::Task;

#[test]
fn task_new_sets_defaults() {
    let task = Task::new("Buy milk");

    assert!(!task.id().is_nil());
    assert_eq!(task.description(), "Buy milk");
    assert!(!task.is_completed());
}

#[test]
fn complete_is_idempotent() {
    let mut task = Task::new("Test Task");

    task.complete();
    assert!(task.is_completed());

    task.complete();
    assert!(task.is_completed());
}

#[test]
fn clones_share_identity_and_new_tasks_do_not() {
    let task = Task::new("same text");
    let clone = task.clone();
    let other = Task::new("same text");

    assert_eq!(task.id(), clone.id());
    assert_ne!(task.id(), other.id());
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let mut task = Task::new("Write report");
    task.complete();

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], task.id().to_string());
    assert_eq!(json["description"], "Write report");
    assert_eq!(json["is_completed"], true);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}
