//! Authentication operation
//!
//! One unified endpoint: POST /auth/login with mode LOGIN or SIGNUP. The
//! returned token is persisted immediately so later commands dispatch
//! authenticated.

use tracing::info;

use super::{ApiClient, ApiError};
use crate::models::{AuthMode, AuthRequest, AuthResponse};

impl ApiClient {
    /// Authenticate (or register, with `AuthMode::Signup`) and persist the
    /// returned session token.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
        mode: AuthMode,
    ) -> Result<String, ApiError> {
        let request = AuthRequest {
            email: email.to_string(),
            password: password.to_string(),
            mode,
        };

        let response: AuthResponse = self.post_json("/auth/login", &request).await?;
        self.session()
            .store(&response.token)
            .map_err(|e| ApiError::Storage(e.to_string()))?;

        info!("Authenticated as {email}");
        Ok(response.token)
    }
}
