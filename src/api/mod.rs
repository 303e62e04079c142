//! Session-aware gateway to the SkillBridge REST API
//!
//! Every outbound request goes through one send path:
//! - the stored bearer credential is attached when present
//! - failures are classified on the way back by a pure function
//!
//! The one real policy decision lives here: a 401 means the session itself
//! is dead, so the gateway clears the stored credential before surfacing the
//! error; a 403 is a business-rule rejection for a single action and must
//! never log the user out. Network failures produce no status and therefore
//! no teardown.

pub mod auth;
pub mod dashboard;
pub mod learning;
pub mod outcomes;

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::session::SessionStore;

/// Failures surfaced by the gateway
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP 401: missing, expired, or invalid credential. The stored session
    /// has already been cleared by the time this is returned.
    #[error("session expired or not authenticated")]
    SessionExpired,

    /// HTTP 403 or any other rejection with a status; carries the server's
    /// `error`/`message` text when the payload had one.
    #[error("{}", .message.as_deref().unwrap_or("request rejected"))]
    Rejected { status: u16, message: Option<String> },

    /// HTTP 404 carrying the USER_NOT_FOUND error code (authentication only)
    #[error("no account found for this email")]
    UserNotFound,

    /// Network-level failure: no response, so nothing to classify
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body did not match the expected shape
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Local credential persistence failed
    #[error("failed to persist session: {0}")]
    Storage(String),
}

impl ApiError {
    /// Text to render for this failure, with a per-operation fallback used
    /// when the server gave no message (or none could reach us).
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::SessionExpired => {
                "Session expired. Please run `skillbridge login`.".to_string()
            }
            ApiError::Rejected { message: Some(msg), .. } => msg.clone(),
            ApiError::UserNotFound => self.to_string(),
            _ => fallback.to_string(),
        }
    }
}

/// Error payload shape used by the API
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// Classify a non-success response. Pure function of the status and the
/// error payload; session teardown is the send path's job, not this one's.
fn classify_failure(status: StatusCode, body: &str) -> ApiError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();

    match status {
        StatusCode::UNAUTHORIZED => ApiError::SessionExpired,
        StatusCode::NOT_FOUND if parsed.error.as_deref() == Some("USER_NOT_FOUND") => {
            ApiError::UserNotFound
        }
        _ => ApiError::Rejected {
            status: status.as_u16(),
            message: parsed.error.or(parsed.message),
        },
    }
}

/// HTTP client for the SkillBridge API with an injected session store
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(base_url: &str, session: SessionStore) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.http.request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = self.session.load() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Dispatch a request and classify the response.
    ///
    /// On 401 the stored credential is cleared before the error is returned;
    /// the caller still sees the failure (teardown does not swallow it).
    async fn send(&self, builder: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let error = classify_failure(status, &body);
        if matches!(error, ApiError::SessionExpired) {
            if let Err(e) = self.session.clear() {
                warn!("Failed to clear session after 401: {e}");
            }
        }
        debug!("Request rejected with {}: {}", status, error);
        Err(error)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.request(Method::GET, path)).await?;
        decode(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self.send(self.request(Method::POST, path).json(body)).await?;
        decode(response).await
    }

    async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self.send(self.request(Method::PUT, path).json(body)).await?;
        decode(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.request(Method::DELETE, path)).await?;
        Ok(())
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}
