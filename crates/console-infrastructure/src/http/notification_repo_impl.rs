// ============================================================================
// Console Infrastructure - HTTP Notification & Dashboard Repositories
// File: crates/console-infrastructure/src/http/notification_repo_impl.rs
// ============================================================================

use std::sync::Arc;

use async_trait::async_trait;

use console_core::domain::{DashboardStats, Notification};
use console_core::error::DomainError;
use console_core::normalize::normalize_list;
use console_core::repositories::{DashboardRepository, NotificationRepository};

use crate::http::client::{decode_record, ApiClient};

pub struct HttpNotificationRepository {
    api: Arc<ApiClient>,
}

impl HttpNotificationRepository {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl NotificationRepository for HttpNotificationRepository {
    async fn list(&self, limit: u32) -> Result<Vec<Notification>, DomainError> {
        let limit = limit.to_string();
        let body = self
            .api
            .get_with_query(&["notifications"], &[("limit", limit.as_str())])
            .await?;
        Ok(normalize_list(&body, "notifications"))
    }

    async fn mark_read(&self, id: &str) -> Result<(), DomainError> {
        self.api
            .patch(&["notifications", id, "read"], &serde_json::json!({}))
            .await?;
        Ok(())
    }

    async fn mark_all_read(&self) -> Result<(), DomainError> {
        self.api
            .patch(&["notifications", "read-all"], &serde_json::json!({}))
            .await?;
        Ok(())
    }
}

pub struct HttpDashboardRepository {
    api: Arc<ApiClient>,
}

impl HttpDashboardRepository {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl DashboardRepository for HttpDashboardRepository {
    async fn stats(&self) -> Result<DashboardStats, DomainError> {
        let body = self.api.get(&["dashboard", "stats"]).await?;
        decode_record(&body, "stats")
    }
}
