// ============================================================================
// Console Infrastructure - HTTP Client & Role Repositories
// File: crates/console-infrastructure/src/http/client_repo_impl.rs
// ============================================================================

use std::sync::Arc;

use async_trait::async_trait;

use console_core::domain::{Client, CreateClientRequest, Role, UpdateClientRequest};
use console_core::error::DomainError;
use console_core::normalize::normalize_list;
use console_core::repositories::{ClientRepository, RoleRepository};

use crate::http::client::{decode_record, ApiClient};

pub struct HttpClientRepository {
    api: Arc<ApiClient>,
}

impl HttpClientRepository {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ClientRepository for HttpClientRepository {
    async fn list(&self) -> Result<Vec<Client>, DomainError> {
        let body = self.api.get(&["clients"]).await?;
        Ok(normalize_list(&body, "clients"))
    }

    async fn create(&self, request: &CreateClientRequest) -> Result<Client, DomainError> {
        let body = self.api.post(&["clients"], request).await?;
        decode_record(&body, "client")
    }

    async fn update(&self, id: &str, request: &UpdateClientRequest) -> Result<Client, DomainError> {
        let body = self.api.patch(&["clients", id], request).await?;
        decode_record(&body, "client")
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.api.delete(&["clients", id]).await?;
        Ok(())
    }
}

pub struct HttpRoleRepository {
    api: Arc<ApiClient>,
}

impl HttpRoleRepository {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl RoleRepository for HttpRoleRepository {
    async fn list(&self) -> Result<Vec<Role>, DomainError> {
        let body = self.api.get(&["roles"]).await?;
        Ok(normalize_list(&body, "roles"))
    }
}
