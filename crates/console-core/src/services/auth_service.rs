// ============================================================================
// Console Core - Authentication Service
// File: crates/console-core/src/services/auth_service.rs
// ============================================================================
//! Sign-in, onboarding and the persisted session

use std::sync::Arc;

use tracing::{error, info, warn};
use validator::Validate;

use console_shared::utils::mask_email;

use crate::domain::{LoginRequest, OnboardRequest, Session};
use crate::error::DomainError;
use crate::repositories::{AuthRepository, SessionStore};

/// Authentication service for the console login/onboard flows
pub struct AuthService<A: AuthRepository, S: SessionStore> {
    auth_repo: Arc<A>,
    session_store: Arc<S>,
}

impl<A: AuthRepository, S: SessionStore> AuthService<A, S> {
    pub fn new(auth_repo: Arc<A>, session_store: Arc<S>) -> Self {
        Self { auth_repo, session_store }
    }

    /// Login with email and password, persisting the returned session
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, DomainError> {
        let masked = mask_email(email);
        info!("Login attempt for email: {}", masked);

        let request = LoginRequest {
            email: email.trim().to_lowercase(),
            password: password.to_string(),
        };
        request.validate()?;

        let session = self.auth_repo.login(&request).await.map_err(|e| {
            if e.is_unauthorized() {
                warn!("Login failed: invalid credentials for: {}", masked);
                DomainError::InvalidCredentials
            } else {
                error!("Login failed for {}: {}", masked, e);
                e
            }
        })?;

        self.persist(session, &masked).await
    }

    /// Create a client with its owner account and sign in as that owner
    pub async fn onboard(&self, mut request: OnboardRequest) -> Result<Session, DomainError> {
        request.email = request.email.trim().to_lowercase();
        let masked = mask_email(&request.email);
        info!("Onboarding attempt for email: {}", masked);

        request.validate()?;
        let session = self.auth_repo.onboard(&request).await?;
        self.persist(session, &masked).await
    }

    pub async fn logout(&self) -> Result<(), DomainError> {
        self.session_store.clear().await?;
        info!("Session cleared");
        Ok(())
    }

    pub async fn current(&self) -> Result<Option<Session>, DomainError> {
        self.session_store.load().await
    }

    pub async fn require_session(&self) -> Result<Session, DomainError> {
        self.current().await?.ok_or(DomainError::NotAuthenticated)
    }

    async fn persist(&self, session: Session, masked: &str) -> Result<Session, DomainError> {
        if session.token.is_empty() {
            error!("Backend returned an empty token for: {}", masked);
            return Err(DomainError::Decode("missing token".to_string()));
        }

        self.session_store.save(&session).await?;
        info!("Login successful for: {}", masked);
        Ok(session)
    }
}
