// ============================================================================
// Console Infrastructure - HTTP Showroom Repository
// File: crates/console-infrastructure/src/http/showroom_repo_impl.rs
// ============================================================================

use std::sync::Arc;

use async_trait::async_trait;

use console_core::domain::{
    Asset, CreateAssetRequest, CreateShowroomRequest, Showroom, UpdateAssetRequest,
    UpdateShowroomRequest,
};
use console_core::error::DomainError;
use console_core::normalize::normalize_list;
use console_core::repositories::ShowroomRepository;

use crate::http::client::{decode_record, not_found_as_none, ApiClient};

pub struct HttpShowroomRepository {
    api: Arc<ApiClient>,
}

impl HttpShowroomRepository {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    fn asset_path<'a>(showroom_id: &'a str, asset_id: &'a str) -> [&'a str; 4] {
        ["showrooms", showroom_id, "assets", asset_id]
    }
}

#[async_trait]
impl ShowroomRepository for HttpShowroomRepository {
    async fn list(&self) -> Result<Vec<Showroom>, DomainError> {
        let body = self.api.get(&["showrooms"]).await?;
        Ok(normalize_list(&body, "showrooms"))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Showroom>, DomainError> {
        let body = not_found_as_none(self.api.get(&["showrooms", id]).await)?;
        body.map(|b| decode_record(&b, "showroom")).transpose()
    }

    async fn create(&self, request: &CreateShowroomRequest) -> Result<Showroom, DomainError> {
        let body = self.api.post(&["showrooms"], request).await?;
        decode_record(&body, "showroom")
    }

    async fn update(&self, id: &str, request: &UpdateShowroomRequest) -> Result<Showroom, DomainError> {
        let body = self.api.patch(&["showrooms", id], request).await?;
        decode_record(&body, "showroom")
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.api.delete(&["showrooms", id]).await?;
        Ok(())
    }

    async fn list_assets(&self, showroom_id: &str) -> Result<Vec<Asset>, DomainError> {
        let body = self
            .api
            .get(&["showrooms", showroom_id, "assets"])
            .await?;
        Ok(normalize_list(&body, "assets"))
    }

    async fn create_asset(&self, showroom_id: &str, request: &CreateAssetRequest) -> Result<Asset, DomainError> {
        let body = self
            .api
            .post(&["showrooms", showroom_id, "assets"], request)
            .await?;
        decode_record(&body, "asset")
    }

    async fn update_asset(
        &self,
        showroom_id: &str,
        asset_id: &str,
        request: &UpdateAssetRequest,
    ) -> Result<Asset, DomainError> {
        let body = self
            .api
            .patch(&Self::asset_path(showroom_id, asset_id), request)
            .await?;
        decode_record(&body, "asset")
    }

    async fn delete_asset(&self, showroom_id: &str, asset_id: &str) -> Result<(), DomainError> {
        self.api.delete(&Self::asset_path(showroom_id, asset_id)).await?;
        Ok(())
    }
}
