//! Notification and dashboard repository traits (ports)

use async_trait::async_trait;

use crate::domain::{DashboardStats, Notification};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn list(&self, limit: u32) -> Result<Vec<Notification>, DomainError>;
    async fn mark_read(&self, id: &str) -> Result<(), DomainError>;
    async fn mark_all_read(&self) -> Result<(), DomainError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DashboardRepository: Send + Sync {
    async fn stats(&self) -> Result<DashboardStats, DomainError>;
}
