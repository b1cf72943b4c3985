// ============================================================================
// Console Infrastructure - HTTP Asset Repository
// File: crates/console-infrastructure/src/http/asset_repo_impl.rs
// ============================================================================

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use console_core::domain::{Asset, AssetFile, CreateAssetRequest, UpdateAssetRequest};
use console_core::error::DomainError;
use console_core::normalize::normalize_list;
use console_core::repositories::AssetRepository;
use console_core::views::PendingFile;

use crate::http::client::{decode_record, not_found_as_none, ApiClient};

pub struct HttpAssetRepository {
    api: Arc<ApiClient>,
}

impl HttpAssetRepository {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AssetRepository for HttpAssetRepository {
    async fn list(&self) -> Result<Vec<Asset>, DomainError> {
        let body = self.api.get(&["assets"]).await?;
        Ok(normalize_list(&body, "assets"))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Asset>, DomainError> {
        let body = not_found_as_none(self.api.get(&["assets", id]).await)?;
        body.map(|b| decode_record(&b, "asset")).transpose()
    }

    async fn create(&self, request: &CreateAssetRequest) -> Result<Asset, DomainError> {
        let body = self.api.post(&["assets"], request).await?;
        decode_record(&body, "asset")
    }

    async fn update(&self, id: &str, request: &UpdateAssetRequest) -> Result<Asset, DomainError> {
        let body = self.api.patch(&["assets", id], request).await?;
        decode_record(&body, "asset")
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.api.delete(&["assets", id]).await?;
        Ok(())
    }

    async fn list_files(&self, asset_id: &str) -> Result<Vec<AssetFile>, DomainError> {
        let body = self.api.get(&["assets", asset_id, "files"]).await?;
        Ok(normalize_list(&body, "files"))
    }

    async fn upload_files(&self, asset_id: &str, files: Vec<PendingFile>) -> Result<Vec<AssetFile>, DomainError> {
        let count = files.len();
        let body = self
            .api
            .upload(&["assets", asset_id, "files"], files)
            .await?;
        let uploaded: Vec<AssetFile> = normalize_list(&body, "files");
        info!("Backend stored {} of {} file(s) for asset {}", uploaded.len(), count, asset_id);
        Ok(uploaded)
    }

    async fn delete_file(&self, asset_id: &str, file_id: &str) -> Result<(), DomainError> {
        self.api
            .delete(&["assets", asset_id, "files", file_id])
            .await?;
        Ok(())
    }
}
