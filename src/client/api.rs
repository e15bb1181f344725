/**
 * Trivia API Client
 *
 * Async wrappers around the `/api` endpoints. Protected calls attach the
 * stored token as `Authorization: Bearer <token>`; `login` stores the token
 * it receives.
 */

use reqwest::{Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize};
use uuid::Uuid;

use crate::client::config::Config;
use crate::client::error::ClientError;
use crate::shared::{
    CommentResponse, CreateCommentRequest, LoginRequest, LoginResponse, RegisterRequest,
    ScoreDelta, ScoreUpdateRequest, UserResponse,
};

/// Error body sent by the server for every non-success status
#[derive(Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// HTTP client for the trivia API
#[derive(Debug, Clone)]
pub struct TriviaClient {
    http: Client,
    config: Config,
}

impl TriviaClient {
    pub fn new(config: Config) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Client pointed at `TRIVIA_API_URL` (or the default URL)
    pub fn from_env() -> Result<Self, ClientError> {
        Ok(Self::new(Config::from_env()?))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Keep a token for subsequent protected requests
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.config.set_token(Some(token.into()));
    }

    pub fn token(&self) -> Option<&str> {
        self.config.get_token()
    }

    /// Forget the stored token (logout)
    pub fn clear_token(&mut self) {
        self.config.clear_token();
    }

    /// POST /api/register
    pub async fn register(&self, request: &RegisterRequest) -> Result<UserResponse, ClientError> {
        let response = self
            .http
            .post(self.config.api_url("/api/register"))
            .json(request)
            .send()
            .await?;
        parse_response(response).await
    }

    /// POST /api/login
    ///
    /// On success the returned token is stored on the client.
    pub async fn login(
        &mut self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<LoginResponse, ClientError> {
        let request = LoginRequest {
            email: email.into(),
            password: password.into(),
        };
        let response = self
            .http
            .post(self.config.api_url("/api/login"))
            .json(&request)
            .send()
            .await?;
        let login: LoginResponse = parse_response(response).await?;

        tracing::debug!("Login succeeded, storing token");
        self.config.set_token(Some(login.token.clone()));
        Ok(login)
    }

    /// GET /api/users
    pub async fn list_users(&self) -> Result<Vec<UserResponse>, ClientError> {
        let response = self
            .http
            .get(self.config.api_url("/api/users"))
            .send()
            .await?;
        parse_response(response).await
    }

    /// GET /api/users/{id}
    pub async fn get_user(&self, id: Uuid) -> Result<UserResponse, ClientError> {
        let response = self
            .http
            .get(self.config.api_url(&format!("/api/users/{}", id)))
            .send()
            .await?;
        parse_response(response).await
    }

    /// POST /api/users/score (bearer token)
    pub async fn add_to_score(&self, delta: ScoreDelta) -> Result<UserResponse, ClientError> {
        let request = ScoreUpdateRequest { score: Some(delta) };
        let response = self
            .authorized(self.http.post(self.config.api_url("/api/users/score")))?
            .json(&request)
            .send()
            .await?;
        parse_response(response).await
    }

    /// POST /api/comments (bearer token)
    pub async fn create_comment(
        &self,
        text: impl Into<String>,
    ) -> Result<CommentResponse, ClientError> {
        let request = CreateCommentRequest { text: text.into() };
        let response = self
            .authorized(self.http.post(self.config.api_url("/api/comments")))?
            .json(&request)
            .send()
            .await?;
        parse_response(response).await
    }

    /// GET /api/comments
    pub async fn list_comments(&self) -> Result<Vec<CommentResponse>, ClientError> {
        let response = self
            .http
            .get(self.config.api_url("/api/comments"))
            .send()
            .await?;
        parse_response(response).await
    }

    /// GET /api/users/{id}/comments
    pub async fn list_user_comments(&self, id: Uuid) -> Result<Vec<CommentResponse>, ClientError> {
        let response = self
            .http
            .get(self.config.api_url(&format!("/api/users/{}/comments", id)))
            .send()
            .await?;
        parse_response(response).await
    }

    fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder, ClientError> {
        let token = self.config.get_token().ok_or(ClientError::NotAuthenticated)?;
        Ok(request.bearer_auth(token))
    }
}

async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let text = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ApiErrorBody>(&text) {
        Ok(body) => body.error,
        Err(_) if !text.is_empty() => text,
        Err(_) => status.canonical_reason().unwrap_or("").to_string(),
    };
    tracing::debug!("API request failed: {} - {}", status, message);

    Err(ClientError::Api { status, message })
}
