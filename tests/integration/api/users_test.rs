//! User API integration tests
//!
//! Listing, lookup and score updates, including the bearer token checks in
//! front of the score endpoint.

use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;
use trivia::shared::{Score, UserResponse};
use uuid::Uuid;

use crate::common::{create_logged_in_user, login_user, register_user, TestApp, TEST_PASSWORD};

async fn post_score(app: &TestApp, token: &str, right: i64, wrong: i64) -> UserResponse {
    let response = app
        .server
        .post("/api/users/score")
        .authorization_bearer(token)
        .json(&json!({ "score": { "right": right, "wrong": wrong } }))
        .await;
    assert_eq!(response.status_code(), StatusCode::ACCEPTED, "{}", response.text());
    response.json()
}

#[tokio::test]
async fn test_list_users_is_public() {
    let app = TestApp::new().await;
    let alice = register_user(&app.server, "alice").await;
    let bob = register_user(&app.server, "bob").await;

    let response = app.server.get("/api/users").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(!response.text().contains("password"));
    let users: Vec<UserResponse> = response.json();
    assert_eq!(users, vec![alice, bob]);
}

#[tokio::test]
async fn test_list_users_empty() {
    let app = TestApp::new().await;
    let users: Vec<UserResponse> = app.server.get("/api/users").await.json();
    assert!(users.is_empty());
}

#[tokio::test]
async fn test_get_user_by_id() {
    let app = TestApp::new().await;
    let alice = register_user(&app.server, "alice").await;

    let response = app.server.get(&format!("/api/users/{}", alice.id)).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let fetched: UserResponse = response.json();
    assert_eq!(fetched, alice);
}

#[tokio::test]
async fn test_get_unknown_user() {
    let app = TestApp::new().await;

    let response = app.server.get(&format!("/api/users/{}", Uuid::new_v4())).await;
    crate::assert_api_error!(response, StatusCode::NOT_FOUND, "User not found");

    let response = app.server.get("/api/users/not-a-uuid").await;
    crate::assert_api_error!(response, StatusCode::NOT_FOUND, "User not found");
}

#[tokio::test]
async fn test_add_to_score_accumulates() {
    let app = TestApp::new().await;
    let alice = create_logged_in_user(&app.server, "alice").await;

    let user = post_score(&app, &alice.token, 2, 3).await;
    assert_eq!(user.score, Score::new(2, 3));

    let user = post_score(&app, &alice.token, 1, 0).await;
    assert_eq!(user.score, Score::new(3, 3));
    assert_eq!(user.id, alice.user.id);
}

#[tokio::test]
async fn test_sequential_updates_sum() {
    let app = TestApp::new().await;
    let alice = create_logged_in_user(&app.server, "alice").await;

    for _ in 0..10 {
        post_score(&app, &alice.token, 1, 0).await;
    }

    let fetched: UserResponse = app
        .server
        .get(&format!("/api/users/{}", alice.user.id))
        .await
        .json();
    assert_eq!(fetched.score, Score::new(10, 0));
}

#[tokio::test]
async fn test_score_only_touches_caller() {
    let app = TestApp::new().await;
    let alice = create_logged_in_user(&app.server, "alice").await;
    let bob = register_user(&app.server, "bob").await;

    post_score(&app, &alice.token, 4, 1).await;

    let fetched: UserResponse = app.server.get(&format!("/api/users/{}", bob.id)).await.json();
    assert_eq!(fetched.score, Score::default());
}

#[tokio::test]
async fn test_add_to_score_ignores_other_fields() {
    let app = TestApp::new().await;
    let alice = create_logged_in_user(&app.server, "alice").await;

    let response = app
        .server
        .post("/api/users/score")
        .authorization_bearer(&alice.token)
        .json(&json!({
            "score": { "right": 1, "wrong": 1 },
            "username": "mallory",
            "email": "mallory@example.com"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::ACCEPTED);
    let user: UserResponse = response.json();
    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.score, Score::new(1, 1));
}

#[tokio::test]
async fn test_add_to_score_partial_delta() {
    let app = TestApp::new().await;
    let alice = create_logged_in_user(&app.server, "alice").await;

    let response = app
        .server
        .post("/api/users/score")
        .authorization_bearer(&alice.token)
        .json(&json!({ "score": { "wrong": 2 } }))
        .await;

    assert_eq!(response.status_code(), StatusCode::ACCEPTED);
    let user: UserResponse = response.json();
    assert_eq!(user.score, Score::new(0, 2));
}

#[tokio::test]
async fn test_add_to_score_rejects_bad_bodies() {
    let app = TestApp::new().await;
    let alice = create_logged_in_user(&app.server, "alice").await;

    let response = app
        .server
        .post("/api/users/score")
        .authorization_bearer(&alice.token)
        .json(&json!({ "score": { "right": -1, "wrong": 0 } }))
        .await;
    crate::assert_api_error!(
        response,
        StatusCode::BAD_REQUEST,
        "score.right must not be negative"
    );

    let response = app
        .server
        .post("/api/users/score")
        .authorization_bearer(&alice.token)
        .json(&json!({ "points": 3 }))
        .await;
    crate::assert_api_error!(response, StatusCode::BAD_REQUEST, "score is required");

    let fetched: UserResponse = app
        .server
        .get(&format!("/api/users/{}", alice.user.id))
        .await
        .json();
    assert_eq!(fetched.score, Score::default());
}

#[tokio::test]
async fn test_add_to_score_requires_token() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/users/score")
        .json(&json!({ "score": { "right": 1, "wrong": 0 } }))
        .await;
    crate::assert_api_error!(response, StatusCode::UNAUTHORIZED, "Unauthorized");

    let response = app
        .server
        .post("/api/users/score")
        .add_header(AUTHORIZATION, HeaderValue::from_static("Token abc"))
        .json(&json!({ "score": { "right": 1, "wrong": 0 } }))
        .await;
    crate::assert_api_error!(response, StatusCode::UNAUTHORIZED, "Unauthorized");

    let response = app
        .server
        .post("/api/users/score")
        .authorization_bearer("not.a.jwt")
        .json(&json!({ "score": { "right": 1, "wrong": 0 } }))
        .await;
    crate::assert_api_error!(response, StatusCode::UNAUTHORIZED, "Invalid token");
}

#[tokio::test]
async fn test_add_to_score_rejects_expired_token() {
    let app = TestApp::new().await;
    let alice = register_user(&app.server, "alice").await;

    let issued = Utc::now() - Duration::hours(48) - Duration::seconds(1);
    let token = app.sessions().issue_token_at(alice.id, issued).unwrap();

    let response = app
        .server
        .post("/api/users/score")
        .authorization_bearer(&token)
        .json(&json!({ "score": { "right": 1, "wrong": 0 } }))
        .await;
    crate::assert_api_error!(response, StatusCode::UNAUTHORIZED, "Token expired");
}

#[tokio::test]
async fn test_token_for_unknown_user() {
    let app = TestApp::new().await;
    let token = app.sessions().issue_token(Uuid::new_v4()).unwrap();

    let response = app
        .server
        .post("/api/users/score")
        .authorization_bearer(&token)
        .json(&json!({ "score": { "right": 1, "wrong": 0 } }))
        .await;
    crate::assert_api_error!(response, StatusCode::UNAUTHORIZED, "Unauthorized");
}

#[tokio::test]
async fn test_register_login_score_flow() {
    let app = TestApp::new().await;
    let alice = register_user(&app.server, "alice").await;
    let token = login_user(&app.server, "alice@example.com", TEST_PASSWORD).await;

    post_score(&app, &token, 5, 2).await;

    let fetched: UserResponse = app
        .server
        .get(&format!("/api/users/{}", alice.id))
        .await
        .json();
    assert_eq!(fetched.score, Score::new(5, 2));
    assert!(fetched.updated_at >= alice.updated_at);
}

#[tokio::test]
async fn test_score_overflow_is_rejected_and_user_stays_readable() {
    let app = TestApp::new().await;
    let alice = create_logged_in_user(&app.server, "alice").await;

    let user = post_score(&app, &alice.token, i64::MAX, 0).await;
    assert_eq!(user.score, Score::new(i64::MAX, 0));

    let response = app
        .server
        .post("/api/users/score")
        .authorization_bearer(&alice.token)
        .json(&json!({ "score": { "right": 1 } }))
        .await;
    crate::assert_api_error!(response, StatusCode::BAD_REQUEST, "score is too large");

    let fetched: UserResponse = app
        .server
        .get(&format!("/api/users/{}", alice.user.id))
        .await
        .json();
    assert_eq!(fetched.score, Score::new(i64::MAX, 0));

    let response = app.server.get("/api/users").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    login_user(&app.server, "alice@example.com", TEST_PASSWORD).await;
}

#[tokio::test]
async fn test_add_to_score_rejects_token_from_the_future() {
    let app = TestApp::new().await;
    let alice = register_user(&app.server, "alice").await;

    let token = app
        .sessions()
        .issue_token_at(alice.id, Utc::now() + Duration::hours(24))
        .unwrap();

    let response = app
        .server
        .post("/api/users/score")
        .authorization_bearer(&token)
        .json(&json!({ "score": { "right": 1, "wrong": 0 } }))
        .await;
    crate::assert_api_error!(response, StatusCode::UNAUTHORIZED, "Invalid token");
}
