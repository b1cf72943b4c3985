// ============================================================================
// Console Core - Asset Service
// File: crates/console-core/src/services/asset_service.rs
// ============================================================================
//! Asset screens: table refresh, create/edit/delete, attachments.

use std::sync::Arc;

use tracing::{error, info, warn};

use console_shared::Pagination;

use crate::domain::{Asset, AssetFile};
use crate::error::DomainError;
use crate::forms::AssetForm;
use crate::repositories::AssetRepository;
use crate::services::page_state::PageState;
use crate::views::{Notice, Page, UploadQueue};

pub struct AssetService<R: AssetRepository> {
    asset_repo: Arc<R>,
    state: PageState<Asset>,
}

impl<R: AssetRepository> AssetService<R> {
    pub fn new(asset_repo: Arc<R>, pagination: Pagination) -> Self {
        Self {
            asset_repo,
            state: PageState::new(pagination),
        }
    }

    /// Reloads the table. On failure the previous rows stay on screen.
    pub async fn refresh(&self) -> Result<usize, DomainError> {
        self.state.begin_fetch();
        let result = self.asset_repo.list().await;
        if let Err(e) = &result {
            error!("Failed to load assets: {}", e);
        }
        self.state.finish_fetch(result)
    }

    pub async fn get(&self, id: &str) -> Result<Asset, DomainError> {
        match self.asset_repo.find_by_id(id).await {
            Ok(Some(asset)) => Ok(asset),
            Ok(None) => Err(self
                .state
                .fail("Failed to open asset", DomainError::NotFound(format!("asset {}", id)))),
            Err(e) => Err(self.state.fail("Failed to open asset", e)),
        }
    }

    pub async fn create(&self, form: &AssetForm) -> Result<Asset, DomainError> {
        let request = form
            .to_create_request()
            .map_err(|e| self.state.fail("Cannot create asset", e))?;

        let asset = self
            .asset_repo
            .create(&request)
            .await
            .map_err(|e| self.state.fail("Failed to create asset", e))?;

        info!("Asset created: {}", asset.id);
        self.state.with_view(|view| view.prepend(asset.clone()));
        self.state.notify(Notice::success(format!("Asset '{}' created", asset.name)));
        Ok(asset)
    }

    pub async fn update(&self, id: &str, form: &AssetForm) -> Result<Asset, DomainError> {
        let request = form
            .to_update_request()
            .map_err(|e| self.state.fail("Cannot update asset", e))?;

        let asset = self
            .asset_repo
            .update(id, &request)
            .await
            .map_err(|e| self.state.fail("Failed to update asset", e))?;

        info!("Asset updated: {}", asset.id);
        self.state.with_view(|view| {
            if !view.replace(asset.clone()) {
                view.prepend(asset.clone());
            }
        });
        self.state.notify(Notice::success(format!("Asset '{}' updated", asset.name)));
        Ok(asset)
    }

    /// Loads the stored asset, lets `apply` change the seeded form and
    /// submits it. Members `apply` leaves alone keep their stored values.
    pub async fn edit<F>(&self, id: &str, apply: F) -> Result<Asset, DomainError>
    where
        F: FnOnce(AssetForm) -> Result<AssetForm, DomainError>,
    {
        let current = self.get(id).await?;
        let form = apply(AssetForm::from_asset(&current))
            .map_err(|e| self.state.fail("Cannot update asset", e))?;
        self.update(id, &form).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.asset_repo
            .delete(id)
            .await
            .map_err(|e| self.state.fail("Failed to delete asset", e))?;

        info!("Asset deleted: {}", id);
        self.state.with_view(|view| view.remove_by_id(id));
        self.state.notify(Notice::success("Asset deleted"));
        Ok(())
    }

    pub async fn files(&self, asset_id: &str) -> Result<Vec<AssetFile>, DomainError> {
        self.asset_repo
            .list_files(asset_id)
            .await
            .map_err(|e| self.state.fail("Failed to load files", e))
    }

    /// Sends the queued files. The queue ends in `Succeeded` or `Failed`.
    pub async fn upload(&self, asset_id: &str, queue: &mut UploadQueue) -> Result<Vec<AssetFile>, DomainError> {
        let files = queue
            .start()
            .map_err(|e| self.state.fail("Cannot upload", e))?;
        let count = files.len();

        match self.asset_repo.upload_files(asset_id, files).await {
            Ok(uploaded) => {
                info!("Uploaded {} file(s) to asset {}", count, asset_id);
                queue.finish(uploaded.clone())?;
                self.state.notify(Notice::success(format!("{} file(s) uploaded", uploaded.len())));
                Ok(uploaded)
            }
            Err(e) => {
                warn!("Upload to asset {} failed: {}", asset_id, e);
                queue.fail(&e)?;
                Err(self.state.fail("Upload failed", e))
            }
        }
    }

    pub async fn delete_file(&self, asset_id: &str, file_id: &str) -> Result<(), DomainError> {
        self.asset_repo
            .delete_file(asset_id, file_id)
            .await
            .map_err(|e| self.state.fail("Failed to delete file", e))?;
        self.state.notify(Notice::success("File deleted"));
        Ok(())
    }

    pub fn page(&self) -> Page<Asset> {
        self.state.page()
    }

    pub fn search(&self, query: &str) {
        self.state.set_query(query);
    }

    pub fn go_to_page(&self, page: u32) {
        self.state.set_page(page);
    }

    pub fn cached(&self, id: &str) -> Option<Asset> {
        self.state.find(id)
    }

    pub fn drain_notices(&self) -> Vec<Notice> {
        self.state.drain_notices()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AssetField, AssetKind, FieldType};
    use crate::repositories::asset_repository::MockAssetRepository;
    use crate::views::{NoticeLevel, PendingFile, UploadState};
    use serde_json::json;

    fn asset(id: &str, name: &str) -> Asset {
        serde_json::from_value(json!({ "id": id, "name": name, "type": "text" })).unwrap()
    }

    fn form(name: &str) -> AssetForm {
        let mut form = AssetForm::default();
        form.name = name.to_string();
        form.kind = AssetKind::Text;
        form.fields = form
            .fields
            .append(AssetField::new("note", FieldType::Text, "hello", false));
        form
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_rows_and_queues_notice() {
        let mut repo = MockAssetRepository::new();
        let mut calls = 0;
        repo.expect_list().times(2).returning(move || {
            calls += 1;
            if calls == 1 {
                Ok(vec![asset("a1", "Router")])
            } else {
                Err(DomainError::Network("connection refused".into()))
            }
        });

        let service = AssetService::new(Arc::new(repo), Pagination::default());
        assert_eq!(service.refresh().await.unwrap(), 1);
        assert!(service.refresh().await.is_err());

        assert_eq!(service.page().total, 1);
        let notices = service.drain_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Error);
    }

    #[tokio::test]
    async fn test_create_prepends_row() {
        let mut repo = MockAssetRepository::new();
        repo.expect_list().returning(|| Ok(vec![asset("a1", "Router")]));
        repo.expect_create()
            .withf(|req| req.name == "Wifi" && req.fields.len() == 1)
            .returning(|_| Ok(asset("a2", "Wifi")));

        let service = AssetService::new(Arc::new(repo), Pagination::default());
        service.refresh().await.unwrap();
        let created = service.create(&form("Wifi")).await.unwrap();

        assert_eq!(created.id, "a2");
        assert_eq!(service.page().items[0].id, "a2");
        assert_eq!(service.drain_notices()[0].level, NoticeLevel::Success);
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_backend() {
        let repo = MockAssetRepository::new();
        let service = AssetService::new(Arc::new(repo), Pagination::default());
        let result = service.create(&form("")).await;
        assert!(matches!(result, Err(DomainError::ValidationError(_))));
        assert_eq!(service.drain_notices().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_failure_keeps_row() {
        let mut repo = MockAssetRepository::new();
        repo.expect_list().returning(|| Ok(vec![asset("a1", "Router")]));
        repo.expect_delete()
            .returning(|_| Err(DomainError::Api { status: 403, message: "Forbidden".into() }));

        let service = AssetService::new(Arc::new(repo), Pagination::default());
        service.refresh().await.unwrap();
        assert!(service.delete("a1").await.is_err());
        assert!(service.cached("a1").is_some());
    }

    #[tokio::test]
    async fn test_rename_keeps_stored_fields_and_kind() {
        let mut repo = MockAssetRepository::new();
        repo.expect_find_by_id().withf(|id| id == "a1").returning(|_| {
            Ok(Some(
                serde_json::from_value(json!({
                    "id": "a1",
                    "name": "Router",
                    "description": "Back office",
                    "type": "text",
                    "fields": [
                        { "key": "ssid", "type": "text", "value": "guest" },
                        { "key": "note", "type": "text", "value": "2nd floor" }
                    ]
                }))
                .unwrap(),
            ))
        });
        repo.expect_update()
            .withf(|id, req| {
                let fields = req.fields.as_deref().unwrap_or_default();
                id == "a1"
                    && req.name.as_deref() == Some("Renamed")
                    && req.kind == Some(AssetKind::Text)
                    && req.description.as_deref() == Some("Back office")
                    && fields.len() == 2
                    && fields[0].key == "ssid"
                    && fields[1].value == "2nd floor"
            })
            .times(1)
            .returning(|_, _| Ok(asset("a1", "Renamed")));

        let service = AssetService::new(Arc::new(repo), Pagination::default());
        let updated = service
            .edit("a1", |mut form| {
                form.name = "Renamed".into();
                Ok(form)
            })
            .await
            .unwrap();
        assert_eq!(updated.name, "Renamed");
    }

    #[tokio::test]
    async fn test_edit_of_missing_asset_sends_nothing() {
        let mut repo = MockAssetRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_update().never();

        let service = AssetService::new(Arc::new(repo), Pagination::default());
        let result = service.edit("zz", Ok).await;
        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_get_missing_asset_is_not_found() {
        let mut repo = MockAssetRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        let service = AssetService::new(Arc::new(repo), Pagination::default());
        assert!(matches!(service.get("zz").await, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_upload_drives_queue() {
        let mut repo = MockAssetRepository::new();
        repo.expect_upload_files()
            .withf(|id, files| id == "a1" && files.len() == 1)
            .returning(|_, _| {
                Ok(vec![serde_json::from_value(json!({ "id": "f1", "fileName": "a.png" })).unwrap()])
            });

        let service = AssetService::new(Arc::new(repo), Pagination::default());
        let mut queue = UploadQueue::new(1024);
        queue.select(vec![PendingFile::new("a.png", vec![1, 2, 3])]).unwrap();

        let uploaded = service.upload("a1", &mut queue).await.unwrap();
        assert_eq!(uploaded.len(), 1);
        assert!(matches!(queue.state(), UploadState::Succeeded(_)));
    }

    #[tokio::test]
    async fn test_upload_failure_marks_queue_failed() {
        let mut repo = MockAssetRepository::new();
        repo.expect_upload_files()
            .returning(|_, _| Err(DomainError::Api { status: 413, message: "Too large".into() }));

        let service = AssetService::new(Arc::new(repo), Pagination::default());
        let mut queue = UploadQueue::new(1024);
        queue.select(vec![PendingFile::new("a.png", vec![1])]).unwrap();

        assert!(service.upload("a1", &mut queue).await.is_err());
        assert!(matches!(queue.state(), UploadState::Failed { error, .. } if error == "Too large"));
    }
}
