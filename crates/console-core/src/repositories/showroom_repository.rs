//! Showroom repository trait (port)

use async_trait::async_trait;

use crate::domain::{
    Asset, CreateAssetRequest, CreateShowroomRequest, Showroom, UpdateAssetRequest,
    UpdateShowroomRequest,
};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShowroomRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Showroom>, DomainError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Showroom>, DomainError>;
    async fn create(&self, request: &CreateShowroomRequest) -> Result<Showroom, DomainError>;
    async fn update(&self, id: &str, request: &UpdateShowroomRequest) -> Result<Showroom, DomainError>;
    async fn delete(&self, id: &str) -> Result<(), DomainError>;

    // Assets nested under a showroom
    async fn list_assets(&self, showroom_id: &str) -> Result<Vec<Asset>, DomainError>;
    async fn create_asset(&self, showroom_id: &str, request: &CreateAssetRequest) -> Result<Asset, DomainError>;
    async fn update_asset(&self, showroom_id: &str, asset_id: &str, request: &UpdateAssetRequest) -> Result<Asset, DomainError>;
    async fn delete_asset(&self, showroom_id: &str, asset_id: &str) -> Result<(), DomainError>;
}
