// User Directory API Client
// Implements the /users endpoints of the backend REST API
//
// Every response is wrapped in an envelope: success bodies carry the payload
// under "data", error bodies carry "error" plus optional per-field "details".
// No retries: a failed call is reported to the caller as-is.

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::UserService;
use crate::config::AppConfig;
use crate::users::{
    ApiEnvelope, CreateUserRequest, ErrorBody, UpdateUserRequest, User, UserListResponse,
    UserSearchParams,
};

const USER_AGENT: &str = concat!("user-directory/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the user directory API
pub struct UserClient {
    http: Client,
    base_url: String,
}

impl UserClient {
    /// Create a client for the configured base URL
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .build()?;
        Ok(Self::with_client(http, &config.api_base_url))
    }

    /// Create a client around an existing reqwest client
    pub fn with_client(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and unwrap the success envelope
    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        operation: &'static str,
    ) -> Result<Option<T>, ApiError> {
        let response = request.send().await.map_err(|e| {
            log::error!("{} failed: {}", operation, e);
            ApiError::Network(e)
        })?;

        let status = response.status();
        let body = response.text().await?;
        log::debug!("{}: HTTP {} ({} bytes)", operation, status, body.len());

        if !status.is_success() {
            let err = error_from_response(status, &body);
            log::warn!("{} rejected: {}", operation, err);
            return Err(err);
        }

        let envelope: ApiEnvelope<T> = serde_json::from_str(&body)?;
        if !envelope.message.is_empty() {
            log::info!("{}: {}", operation, envelope.message);
        }
        Ok(envelope.data)
    }
}

impl UserService for UserClient {
    async fn list_users(&self, params: &UserSearchParams) -> Result<UserListResponse, ApiError> {
        let query = params.to_query();
        log::info!("Listing users with {} parameters: {:?}", query.len(), query);

        let request = self.http.get(self.url("/users")).query(&query);
        self.send(request, "list users")
            .await?
            .ok_or(ApiError::MissingData("user list"))
    }

    async fn get_user(&self, id: u64) -> Result<User, ApiError> {
        let request = self.http.get(self.url(&format!("/users/{}", id)));
        self.send(request, "get user")
            .await?
            .ok_or(ApiError::MissingData("user"))
    }

    async fn create_user(&self, user: &CreateUserRequest) -> Result<User, ApiError> {
        log::info!("Creating user {}", user.email);
        let request = self.http.post(self.url("/users")).json(user);
        self.send(request, "create user")
            .await?
            .ok_or(ApiError::MissingData("user"))
    }

    async fn update_user(&self, id: u64, user: &UpdateUserRequest) -> Result<User, ApiError> {
        log::info!("Updating user {}", id);
        let request = self.http.put(self.url(&format!("/users/{}", id))).json(user);
        self.send(request, "update user")
            .await?
            .ok_or(ApiError::MissingData("user"))
    }

    async fn delete_user(&self, id: u64) -> Result<(), ApiError> {
        log::info!("Deleting user {}", id);
        let request = self.http.delete(self.url(&format!("/users/{}", id)));
        self.send::<serde_json::Value>(request, "delete user").await?;
        Ok(())
    }
}

/// Map a non-success response to an ApiError
fn error_from_response(status: StatusCode, body: &str) -> ApiError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = if !parsed.error.is_empty() {
        parsed.error
    } else if !body.trim().is_empty() {
        truncate_string(body.trim(), 500)
    } else {
        status.canonical_reason().unwrap_or("Unknown error").to_string()
    };

    match (status, parsed.details) {
        (StatusCode::NOT_FOUND, _) => ApiError::NotFound(message),
        (StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY, Some(details))
            if !details.is_empty() =>
        {
            ApiError::Validation { message, details }
        }
        _ => ApiError::Server {
            status: status.as_u16(),
            message,
        },
    }
}

/// Truncate a string for error messages
fn truncate_string(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}
