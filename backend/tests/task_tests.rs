//! Task manager tests
//!
//! Property-based and database tests for:
//! - Create then fetch returns the stored fields
//! - Partial updates keep untouched fields and advance `updated_at`
//! - Delete reports whether a row was removed
//! - Listing is newest first
//!
//! Database tests need `DATABASE_URL` and run with `cargo test -- --ignored`.

use early_warning_backend::services::TaskService;
use proptest::prelude::*;
use shared::{CreateTaskInput, UpdateTaskInput};
use sqlx::PgPool;
use validator::Validate;

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Titles with at least one visible character
fn title_strategy() -> impl Strategy<Value = String> {
    "[ ]{0,3}[A-Za-z0-9][A-Za-z0-9 .,!?-]{0,60}"
}

/// Whitespace-only titles
fn blank_title_strategy() -> impl Strategy<Value = String> {
    "[ \t\n]{0,8}"
}

fn description_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 .,\n]{0,200}"
}

proptest! {
    #[test]
    fn prop_visible_titles_are_accepted(
        title in title_strategy(),
        description in description_strategy(),
    ) {
        let input = CreateTaskInput { title, description };
        prop_assert!(input.validate().is_ok());
    }

    #[test]
    fn prop_blank_titles_are_rejected(
        title in blank_title_strategy(),
        description in description_strategy(),
    ) {
        let create = CreateTaskInput { title: title.clone(), description };
        prop_assert!(create.validate().is_err());

        let update = UpdateTaskInput { title: Some(title), description: None };
        prop_assert!(update.validate().is_err());
    }

    #[test]
    fn prop_description_only_update_is_valid(description in description_strategy()) {
        let update = UpdateTaskInput { title: None, description: Some(description) };
        prop_assert!(update.validate().is_ok());
        prop_assert!(!update.is_empty());
    }
}

// ============================================================================
// Database Tests
// ============================================================================

fn create_input(title: &str, description: &str) -> CreateTaskInput {
    CreateTaskInput {
        title: title.to_string(),
        description: description.to_string(),
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_create_then_get(pool: PgPool) {
    let service = TaskService::new(pool);

    let created = service
        .create_task(create_input("Buy rice", "5kg bag"))
        .await
        .unwrap();
    assert_eq!(created.created_at, created.updated_at);

    let fetched = service.get_task(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.title, "Buy rice");
    assert_eq!(fetched.description, "5kg bag");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_get_missing_task_is_none(pool: PgPool) {
    let service = TaskService::new(pool);
    assert!(service.get_task(424242).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_title_update_keeps_description(pool: PgPool) {
    let service = TaskService::new(pool);
    let created = service
        .create_task(create_input("Draft", "keep me"))
        .await
        .unwrap();

    let updated = service
        .update_task(
            created.id,
            UpdateTaskInput {
                title: Some("Final".to_string()),
                description: None,
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.title, "Final");
    assert_eq!(updated.description, "keep me");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_update_missing_task_is_none(pool: PgPool) {
    let service = TaskService::new(pool);
    let result = service
        .update_task(
            424242,
            UpdateTaskInput {
                title: Some("Nobody".to_string()),
                description: None,
            },
        )
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_delete_reports_success(pool: PgPool) {
    let service = TaskService::new(pool);
    let created = service.create_task(create_input("Temp", "")).await.unwrap();

    assert!(service.delete_task(created.id).await.unwrap().success);
    assert!(service.get_task(created.id).await.unwrap().is_none());
    assert!(!service.delete_task(created.id).await.unwrap().success);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_list_newest_first(pool: PgPool) {
    let service = TaskService::new(pool);
    let first = service.create_task(create_input("first", "")).await.unwrap();
    let second = service.create_task(create_input("second", "")).await.unwrap();

    let tasks = service.get_tasks().await.unwrap();
    let ids: Vec<i32> = tasks.iter().map(|task| task.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}
