//! Authentication test helpers
//!
//! Registers and logs in users through the HTTP API so tests exercise the
//! same path as real clients.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use trivia::shared::{LoginResponse, UserResponse};

pub const TEST_PASSWORD: &str = "correct horse battery staple";

/// A registered and logged-in user
pub struct TestUser {
    pub user: UserResponse,
    pub password: String,
    pub token: String,
}

/// Register a user named `username` with email `<username>@example.com`
pub async fn register_user(server: &TestServer, username: &str) -> UserResponse {
    let response = server
        .post("/api/register")
        .json(&json!({
            "username": username,
            "email": format!("{}@example.com", username),
            "password": TEST_PASSWORD,
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK, "{}", response.text());
    response.json()
}

/// Log in and return the bearer token
pub async fn login_user(server: &TestServer, email: &str, password: &str) -> String {
    let response = server
        .post("/api/login")
        .json(&json!({ "email": email, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::ACCEPTED, "{}", response.text());
    let body: LoginResponse = response.json();
    body.token
}

/// Register then log in
pub async fn create_logged_in_user(server: &TestServer, username: &str) -> TestUser {
    let user = register_user(server, username).await;
    let token = login_user(server, &user.email, TEST_PASSWORD).await;
    TestUser {
        user,
        password: TEST_PASSWORD.to_string(),
        token,
    }
}
