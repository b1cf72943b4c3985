//! Asset repository trait (port)

use async_trait::async_trait;

use crate::domain::{Asset, AssetFile, CreateAssetRequest, UpdateAssetRequest};
use crate::error::DomainError;
use crate::views::PendingFile;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssetRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Asset>, DomainError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Asset>, DomainError>;
    async fn create(&self, request: &CreateAssetRequest) -> Result<Asset, DomainError>;
    async fn update(&self, id: &str, request: &UpdateAssetRequest) -> Result<Asset, DomainError>;
    async fn delete(&self, id: &str) -> Result<(), DomainError>;
    async fn list_files(&self, asset_id: &str) -> Result<Vec<AssetFile>, DomainError>;
    async fn upload_files(&self, asset_id: &str, files: Vec<PendingFile>) -> Result<Vec<AssetFile>, DomainError>;
    async fn delete_file(&self, asset_id: &str, file_id: &str) -> Result<(), DomainError>;
}
