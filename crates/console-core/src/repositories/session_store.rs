//! Persisted session storage (port)

use async_trait::async_trait;

use crate::domain::Session;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self) -> Result<Option<Session>, DomainError>;
    async fn save(&self, session: &Session) -> Result<(), DomainError>;
    async fn clear(&self) -> Result<(), DomainError>;
}
