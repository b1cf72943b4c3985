//! Authentication endpoints (port)

use async_trait::async_trait;

use crate::domain::{LoginRequest, OnboardRequest, Session};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> Result<Session, DomainError>;
    async fn onboard(&self, request: &OnboardRequest) -> Result<Session, DomainError>;
}
