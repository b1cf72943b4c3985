// ============================================================================
// Console Core - Client Service
// File: crates/console-core/src/services/client_service.rs
// ============================================================================
//! Client (tenant) administration and the role catalogue

use std::sync::Arc;

use tracing::{error, info};
use validator::Validate;

use console_shared::Pagination;

use crate::domain::{Client, CreateClientRequest, Role, UpdateClientRequest};
use crate::error::DomainError;
use crate::repositories::{ClientRepository, RoleRepository};
use crate::services::page_state::PageState;
use crate::views::{Notice, Page};

pub struct ClientService<C: ClientRepository, R: RoleRepository> {
    client_repo: Arc<C>,
    role_repo: Arc<R>,
    state: PageState<Client>,
}

impl<C: ClientRepository, R: RoleRepository> ClientService<C, R> {
    pub fn new(client_repo: Arc<C>, role_repo: Arc<R>, pagination: Pagination) -> Self {
        Self {
            client_repo,
            role_repo,
            state: PageState::new(pagination),
        }
    }

    pub async fn refresh(&self) -> Result<usize, DomainError> {
        self.state.begin_fetch();
        let result = self.client_repo.list().await;
        if let Err(e) = &result {
            error!("Failed to load clients: {}", e);
        }
        self.state.finish_fetch(result)
    }

    pub async fn create(&self, request: CreateClientRequest) -> Result<Client, DomainError> {
        request
            .validate()
            .map_err(|e| self.state.fail("Cannot create client", e.into()))?;

        let client = self
            .client_repo
            .create(&request)
            .await
            .map_err(|e| self.state.fail("Failed to create client", e))?;

        info!("Client created: {} ({})", client.id, client.slug);
        self.state.with_view(|view| view.prepend(client.clone()));
        self.state.notify(Notice::success(format!("Client '{}' created", client.name)));
        Ok(client)
    }

    pub async fn update(&self, id: &str, request: UpdateClientRequest) -> Result<Client, DomainError> {
        request
            .validate()
            .map_err(|e| self.state.fail("Cannot update client", e.into()))?;

        let client = self
            .client_repo
            .update(id, &request)
            .await
            .map_err(|e| self.state.fail("Failed to update client", e))?;

        self.state.with_view(|view| {
            if !view.replace(client.clone()) {
                view.prepend(client.clone());
            }
        });
        self.state.notify(Notice::success(format!("Client '{}' updated", client.name)));
        Ok(client)
    }

    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.client_repo
            .delete(id)
            .await
            .map_err(|e| self.state.fail("Failed to delete client", e))?;

        info!("Client deleted: {}", id);
        self.state.with_view(|view| view.remove_by_id(id));
        self.state.notify(Notice::success("Client deleted"));
        Ok(())
    }

    pub async fn roles(&self) -> Result<Vec<Role>, DomainError> {
        self.role_repo
            .list()
            .await
            .map_err(|e| self.state.fail("Failed to load roles", e))
    }

    pub fn page(&self) -> Page<Client> {
        self.state.page()
    }

    pub fn search(&self, query: &str) {
        self.state.set_query(query);
    }

    pub fn drain_notices(&self) -> Vec<Notice> {
        self.state.drain_notices()
    }
}
