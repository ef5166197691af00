use tasuku_rule::RuleError;

use super::*;
use crate::task::memory::InMemoryTaskStore;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 4).expect("valid date")
}

fn service() -> TaskService {
    TaskService::new(Arc::new(InMemoryTaskStore::new()))
}

fn task(date: &str, title: &str, repeat: &str) -> Task {
    Task {
        date: date.to_string(),
        title: title.to_string(),
        repeat: repeat.to_string(),
        ..Task::default()
    }
}

#[test]
fn normalize_requires_title() {
    let mut t = task("20240304", "   ", "");
    assert!(matches!(
        TaskService::normalize(&mut t, today()),
        Err(ServiceError::ValidationError(_))
    ));
}

#[test]
fn normalize_defaults_empty_date_to_today() {
    let mut t = task("", "call mom", "");
    TaskService::normalize(&mut t, today()).expect("valid task");
    assert_eq!(t.date, "20240304");
}

#[test]
fn normalize_rejects_bad_date() {
    let mut t = task("2024-03-04", "call mom", "");
    assert!(matches!(
        TaskService::normalize(&mut t, today()),
        Err(ServiceError::InvalidDate(date)) if date == "2024-03-04"
    ));
}

#[test]
fn normalize_moves_past_one_off_to_today() {
    let mut t = task("20240101", "call mom", "");
    TaskService::normalize(&mut t, today()).expect("valid task");
    assert_eq!(t.date, "20240304");
}

#[test]
fn normalize_moves_past_repeating_to_next_date() {
    let mut t = task("20240301", "water plants", "d 3");
    TaskService::normalize(&mut t, today()).expect("valid task");
    assert_eq!(t.date, "20240307");
}

#[test]
fn normalize_keeps_future_and_current_dates() {
    let mut future = task("20240310", "water plants", "d 3");
    TaskService::normalize(&mut future, today()).expect("valid task");
    assert_eq!(future.date, "20240310");

    let mut current = task("20240304", "water plants", "w 1");
    TaskService::normalize(&mut current, today()).expect("valid task");
    assert_eq!(current.date, "20240304");
}

#[test]
fn normalize_surfaces_rule_errors() {
    let mut t = task("20240310", "water plants", "d 500");
    assert!(matches!(
        TaskService::normalize(&mut t, today()),
        Err(ServiceError::RuleError(RuleError::InvalidNumericField { .. }))
    ));
}

#[test_log::test(tokio::test)]
async fn add_then_get() {
    let service = service();
    let id = service
        .add(task("", "call mom", ""), today())
        .await
        .expect("added");

    let stored = service.get(&id).await.expect("stored");
    assert_eq!(stored.id, id);
    assert_eq!(stored.date, "20240304");
}

#[tokio::test]
async fn update_requires_existing_task() {
    let service = service();
    let mut t = task("20240310", "call mom", "");

    assert!(matches!(
        service.update(t.clone(), today()).await,
        Err(ServiceError::EmptyId)
    ));

    t.id = "12".to_string();
    assert!(matches!(
        service.update(t, today()).await,
        Err(ServiceError::TaskNotFound(_))
    ));
}

#[tokio::test]
async fn update_normalizes_before_storing() {
    let service = service();
    let id = service
        .add(task("20240310", "call mom", ""), today())
        .await
        .expect("added");

    let mut changed = task("20240101", "call dad", "");
    changed.id.clone_from(&id);
    service.update(changed, today()).await.expect("updated");

    let stored = service.get(&id).await.expect("stored");
    assert_eq!(stored.title, "call dad");
    assert_eq!(stored.date, "20240304");
}

#[tokio::test]
async fn list_uses_search() {
    let service = service();
    service
        .add(task("20240308", "dentist", ""), today())
        .await
        .expect("added");
    service
        .add(task("20240309", "gym", ""), today())
        .await
        .expect("added");

    assert_eq!(service.list("", 50).await.expect("listed").len(), 2);

    let by_date = service.list("08.03.2024", 50).await.expect("listed");
    assert_eq!(by_date.len(), 1);
    assert_eq!(by_date[0].title, "dentist");

    let by_text = service.list("gym", 50).await.expect("listed");
    assert_eq!(by_text.len(), 1);
    assert_eq!(by_text[0].date, "20240309");
}

#[tokio::test]
async fn list_is_bounded() {
    let service = service();
    for title in ["a", "b", "c"] {
        service
            .add(task("20240310", title, ""), today())
            .await
            .expect("added");
    }

    assert_eq!(service.list("", 2).await.expect("listed").len(), 2);
}

#[test_log::test(tokio::test)]
async fn complete_one_off_deletes() {
    let service = service();
    let id = service
        .add(task("20240310", "call mom", ""), today())
        .await
        .expect("added");

    let outcome = service.complete(&id, today()).await.expect("completed");
    assert_eq!(outcome, Completion::Deleted);
    assert!(matches!(
        service.get(&id).await,
        Err(ServiceError::TaskNotFound(_))
    ));
}

#[test_log::test(tokio::test)]
async fn complete_repeating_reschedules() {
    let service = service();
    let id = service
        .add(task("20240310", "water plants", "d 3"), today())
        .await
        .expect("added");

    let outcome = service.complete(&id, today()).await.expect("completed");
    assert_eq!(outcome, Completion::Rescheduled("20240313".to_string()));
    assert_eq!(service.get(&id).await.expect("stored").date, "20240313");
}

#[tokio::test]
async fn complete_rejects_empty_id() {
    assert!(matches!(
        service().complete("", today()).await,
        Err(ServiceError::EmptyId)
    ));
}

#[tokio::test]
async fn delete_removes_task() {
    let service = service();
    let id = service
        .add(task("20240310", "call mom", ""), today())
        .await
        .expect("added");

    service.delete(&id).await.expect("deleted");
    assert!(matches!(
        service.delete(&id).await,
        Err(ServiceError::TaskNotFound(_))
    ));
}
