// ============================================================================
// Console Infrastructure - HTTP Auth Repository
// File: crates/console-infrastructure/src/http/auth_repo_impl.rs
// ============================================================================

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::error;

use console_core::domain::{LoginRequest, OnboardRequest, Session, SessionUser};
use console_core::error::DomainError;
use console_core::normalize::unwrap_data;
use console_core::repositories::AuthRepository;

use crate::http::client::ApiClient;

/// Successful auth response, before or after a `data` unwrap
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthResponse {
    #[serde(alias = "accessToken", alias = "access_token")]
    token: String,
    user: SessionUser,
}

impl From<AuthResponse> for Session {
    fn from(response: AuthResponse) -> Self {
        Session::new(response.token, response.user)
    }
}

/// Auth adapter. A successful sign-in also arms the shared client's
/// bearer token.
pub struct HttpAuthRepository {
    api: Arc<ApiClient>,
}

impl HttpAuthRepository {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    fn into_session(&self, body: &Value) -> Result<Session, DomainError> {
        let response = AuthResponse::deserialize(unwrap_data(body)).map_err(|e| {
            error!("Malformed auth response: {}", e);
            DomainError::Decode(e.to_string())
        })?;

        let session = Session::from(response);
        self.api.set_token(Some(session.token.clone()));
        Ok(session)
    }
}

#[async_trait]
impl AuthRepository for HttpAuthRepository {
    async fn login(&self, request: &LoginRequest) -> Result<Session, DomainError> {
        let body = self.api.post(&["auth", "login"], request).await?;
        self.into_session(&body)
    }

    async fn onboard(&self, request: &OnboardRequest) -> Result<Session, DomainError> {
        let body = self.api.post(&["auth", "onboard"], request).await?;
        self.into_session(&body)
    }
}
