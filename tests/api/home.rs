use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use firstuser::{configuration::PasswordDisplay, domain::User, store::MemoryUserStore};

use crate::helpers::{body_text, spawn_app, spawn_app_with_store, TestUser};

#[tokio::test]
async fn home_renders_username_and_password_of_the_first_user() {
    let first = TestUser::generate();
    let second = TestUser::generate();
    let test_app = spawn_app_with_store(
        MemoryUserStore::new(vec![first.to_user(), second.to_user()]),
        PasswordDisplay::Plain,
    );

    let response = test_app.get_home().await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.headers().get(CONTENT_TYPE).unwrap(),
        "text/html; charset=utf-8"
    );

    let html = body_text(response).await;
    assert!(html.contains(&first.username));
    assert!(html.contains(&first.password));
    assert!(!html.contains(&second.username));
    assert!(html.contains("hi there"));
}

#[tokio::test]
async fn home_renders_empty_slots_when_there_are_no_users() {
    let test_app = spawn_app();

    let response = test_app.get_home().await;
    assert_eq!(response.status().as_u16(), 200);

    let html = body_text(response).await;
    assert!(html.contains(r#"<span id="username"></span>"#));
    assert!(html.contains(r#"<span id="password"></span>"#));
    assert!(html.contains("hi there"));
}

#[tokio::test]
async fn home_renders_empty_slots_for_null_columns() {
    let test_app = spawn_app_with_store(
        MemoryUserStore::new(vec![User::new(None, None)]),
        PasswordDisplay::Plain,
    );

    let html = test_app.get_home_html().await;
    assert!(html.contains(r#"<span id="username"></span>"#));
    assert!(html.contains(r#"<span id="password"></span>"#));
}

#[tokio::test]
async fn every_request_queries_the_store_exactly_once() {
    let store = MemoryUserStore::new(vec![TestUser::generate().to_user()]);
    let test_app = spawn_app_with_store(store.clone(), PasswordDisplay::Plain);

    for expected in 1..=3 {
        let response = test_app.get_home().await;
        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(store.fetches(), expected);
    }
}

#[tokio::test]
async fn health_check_does_not_query_the_store() {
    let store = MemoryUserStore::default();
    let test_app = spawn_app_with_store(store.clone(), PasswordDisplay::Plain);

    test_app.get("/health").await;
    assert_eq!(store.fetches(), 0);
}

#[tokio::test]
async fn home_is_never_cached() {
    let test_app = spawn_app();

    let response = test_app.get_home().await;
    assert_eq!(response.headers().get(CACHE_CONTROL).unwrap(), "no-store");
}

#[tokio::test]
async fn query_string_is_ignored() {
    let user = TestUser::generate();
    let test_app = spawn_app_with_store(
        MemoryUserStore::new(vec![user.to_user()]),
        PasswordDisplay::Plain,
    );

    let html = body_text(test_app.get("/?username=someone-else").await).await;
    assert!(html.contains(&user.username));
    assert!(!html.contains("someone-else"));
}

#[tokio::test]
async fn masked_display_hides_the_stored_password() {
    let user = TestUser::generate();
    let test_app = spawn_app_with_store(
        MemoryUserStore::new(vec![user.to_user()]),
        PasswordDisplay::Masked,
    );

    let html = test_app.get_home_html().await;
    assert!(html.contains(&user.username));
    assert!(!html.contains(&user.password));
}

#[tokio::test]
async fn store_failure_returns_the_generic_error_page() {
    let test_app = spawn_app_with_store(
        MemoryUserStore::failing("connection refused"),
        PasswordDisplay::Plain,
    );

    let response = test_app.get_home().await;
    assert_eq!(response.status().as_u16(), 500);

    let html = body_text(response).await;
    assert!(html.contains("Internal Server Error"));
    assert!(!html.contains("connection refused"));
}
