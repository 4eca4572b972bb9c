use super::*;

fn task(id: i64, status: &str) -> TaskSummary {
    TaskSummary {
        id,
        title: format!("task {id}"),
        description: String::new(),
        priority: "medium".to_owned(),
        status: status.to_owned(),
        due_date: None,
    }
}

#[test]
fn status_label_maps_known_statuses() {
    assert_eq!(status_label("todo"), "To Do");
    assert_eq!(status_label("in_progress"), "In Progress");
    assert_eq!(status_label("done"), "Done");
    assert_eq!(status_label("archived"), "Archived");
}

#[test]
fn status_label_unknown_status() {
    assert_eq!(status_label("blocked"), "Unknown");
}

#[test]
fn priority_class_defaults_to_medium() {
    assert_eq!(priority_class(""), "task__priority task__priority--medium");
    assert_eq!(priority_class("urgent"), "task__priority task__priority--urgent");
}

#[test]
fn task_counts_split_open_and_done() {
    let tasks = [task(1, "todo"), task(2, "done"), task(3, "in_progress"), task(4, "archived")];
    assert_eq!(task_counts(&tasks), (2, 2));
}

#[test]
fn task_counts_empty() {
    assert_eq!(task_counts(&[]), (0, 0));
}
