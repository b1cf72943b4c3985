//! Client (tenant) repository trait (port)

use async_trait::async_trait;

use crate::domain::{Client, CreateClientRequest, UpdateClientRequest};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Client>, DomainError>;
    async fn create(&self, request: &CreateClientRequest) -> Result<Client, DomainError>;
    async fn update(&self, id: &str, request: &UpdateClientRequest) -> Result<Client, DomainError>;
    async fn delete(&self, id: &str) -> Result<(), DomainError>;
}
