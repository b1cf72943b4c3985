// ============================================================================
// Console Core - Showroom Service
// File: crates/console-core/src/services/showroom_service.rs
// ============================================================================
//! Showroom screens and the assets placed in each showroom

use std::sync::Arc;

use tracing::{error, info};

use console_shared::Pagination;

use crate::domain::{Asset, Showroom};
use crate::error::DomainError;
use crate::forms::{AssetForm, ShowroomForm};
use crate::repositories::ShowroomRepository;
use crate::services::page_state::PageState;
use crate::views::{Notice, Page};

pub struct ShowroomService<R: ShowroomRepository> {
    showroom_repo: Arc<R>,
    state: PageState<Showroom>,
}

impl<R: ShowroomRepository> ShowroomService<R> {
    pub fn new(showroom_repo: Arc<R>, pagination: Pagination) -> Self {
        Self {
            showroom_repo,
            state: PageState::new(pagination),
        }
    }

    pub async fn refresh(&self) -> Result<usize, DomainError> {
        self.state.begin_fetch();
        let result = self.showroom_repo.list().await;
        if let Err(e) = &result {
            error!("Failed to load showrooms: {}", e);
        }
        self.state.finish_fetch(result)
    }

    pub async fn get(&self, id: &str) -> Result<Showroom, DomainError> {
        match self.showroom_repo.find_by_id(id).await {
            Ok(Some(showroom)) => Ok(showroom),
            Ok(None) => Err(self.state.fail(
                "Failed to open showroom",
                DomainError::NotFound(format!("showroom {}", id)),
            )),
            Err(e) => Err(self.state.fail("Failed to open showroom", e)),
        }
    }

    pub async fn create(&self, form: &ShowroomForm) -> Result<Showroom, DomainError> {
        let request = form
            .to_create_request()
            .map_err(|e| self.state.fail("Cannot create showroom", e))?;

        let showroom = self
            .showroom_repo
            .create(&request)
            .await
            .map_err(|e| self.state.fail("Failed to create showroom", e))?;

        info!("Showroom created: {}", showroom.id);
        self.state.with_view(|view| view.prepend(showroom.clone()));
        self.state
            .notify(Notice::success(format!("Showroom '{}' created", showroom.name)));
        Ok(showroom)
    }

    pub async fn update(&self, id: &str, form: &ShowroomForm) -> Result<Showroom, DomainError> {
        let request = form
            .to_update_request()
            .map_err(|e| self.state.fail("Cannot update showroom", e))?;

        let showroom = self
            .showroom_repo
            .update(id, &request)
            .await
            .map_err(|e| self.state.fail("Failed to update showroom", e))?;

        info!("Showroom updated: {}", showroom.id);
        self.state.with_view(|view| {
            if !view.replace(showroom.clone()) {
                view.prepend(showroom.clone());
            }
        });
        self.state
            .notify(Notice::success(format!("Showroom '{}' updated", showroom.name)));
        Ok(showroom)
    }

    /// Seeds a form from the stored showroom, applies `apply` and submits.
    pub async fn edit<F>(&self, id: &str, apply: F) -> Result<Showroom, DomainError>
    where
        F: FnOnce(ShowroomForm) -> Result<ShowroomForm, DomainError>,
    {
        let current = self.get(id).await?;
        let form = apply(ShowroomForm::from_showroom(&current))
            .map_err(|e| self.state.fail("Cannot update showroom", e))?;
        self.update(id, &form).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.showroom_repo
            .delete(id)
            .await
            .map_err(|e| self.state.fail("Failed to delete showroom", e))?;

        info!("Showroom deleted: {}", id);
        self.state.with_view(|view| view.remove_by_id(id));
        self.state.notify(Notice::success("Showroom deleted"));
        Ok(())
    }

    pub async fn assets(&self, showroom_id: &str) -> Result<Vec<Asset>, DomainError> {
        self.showroom_repo
            .list_assets(showroom_id)
            .await
            .map_err(|e| self.state.fail("Failed to load showroom assets", e))
    }

    /// The form's showroom id is ignored; the asset goes under `showroom_id`.
    pub async fn add_asset(&self, showroom_id: &str, form: &AssetForm) -> Result<Asset, DomainError> {
        let mut request = form
            .to_create_request()
            .map_err(|e| self.state.fail("Cannot add asset", e))?;
        request.showroom_id = Some(showroom_id.to_string());

        let asset = self
            .showroom_repo
            .create_asset(showroom_id, &request)
            .await
            .map_err(|e| self.state.fail("Failed to add asset", e))?;

        info!("Asset {} added to showroom {}", asset.id, showroom_id);
        self.state.notify(Notice::success(format!("Asset '{}' added", asset.name)));
        Ok(asset)
    }

    pub async fn update_asset(
        &self,
        showroom_id: &str,
        asset_id: &str,
        form: &AssetForm,
    ) -> Result<Asset, DomainError> {
        let request = form
            .to_update_request()
            .map_err(|e| self.state.fail("Cannot update asset", e))?;

        let asset = self
            .showroom_repo
            .update_asset(showroom_id, asset_id, &request)
            .await
            .map_err(|e| self.state.fail("Failed to update asset", e))?;
        self.state.notify(Notice::success(format!("Asset '{}' updated", asset.name)));
        Ok(asset)
    }

    /// Same as [`ShowroomService::edit`] for an asset placed in the showroom.
    pub async fn edit_asset<F>(
        &self,
        showroom_id: &str,
        asset_id: &str,
        apply: F,
    ) -> Result<Asset, DomainError>
    where
        F: FnOnce(AssetForm) -> Result<AssetForm, DomainError>,
    {
        let current = self
            .assets(showroom_id)
            .await?
            .into_iter()
            .find(|a| a.id == asset_id)
            .ok_or_else(|| {
                self.state.fail(
                    "Failed to open asset",
                    DomainError::NotFound(format!("asset {} in showroom {}", asset_id, showroom_id)),
                )
            })?;
        let form = apply(AssetForm::from_asset(&current))
            .map_err(|e| self.state.fail("Cannot update asset", e))?;
        self.update_asset(showroom_id, asset_id, &form).await
    }

    pub async fn remove_asset(&self, showroom_id: &str, asset_id: &str) -> Result<(), DomainError> {
        self.showroom_repo
            .delete_asset(showroom_id, asset_id)
            .await
            .map_err(|e| self.state.fail("Failed to remove asset", e))?;

        info!("Asset {} removed from showroom {}", asset_id, showroom_id);
        self.state.notify(Notice::success("Asset removed"));
        Ok(())
    }

    pub fn page(&self) -> Page<Showroom> {
        self.state.page()
    }

    pub fn search(&self, query: &str) {
        self.state.set_query(query);
    }

    pub fn go_to_page(&self, page: u32) {
        self.state.set_page(page);
    }

    pub fn drain_notices(&self) -> Vec<Notice> {
        self.state.drain_notices()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AssetField, FieldType, ShowroomSize};
    use crate::repositories::showroom_repository::MockShowroomRepository;
    use crate::views::NoticeLevel;
    use serde_json::json;

    fn showroom(id: &str, name: &str) -> Showroom {
        serde_json::from_value(json!({ "id": id, "name": name })).unwrap()
    }

    #[tokio::test]
    async fn test_create_sends_only_labelled_sizes() {
        let mut repo = MockShowroomRepository::new();
        repo.expect_create()
            .withf(|req| req.name == "Hall A" && req.sizes.len() == 1)
            .returning(|_| Ok(showroom("s1", "Hall A")));

        let service = ShowroomService::new(Arc::new(repo), Pagination::default());
        let mut form = ShowroomForm::new();
        form.name = "Hall A".into();
        form.sizes = form
            .sizes
            .append(ShowroomSize { label: "Main".into(), width: 10.0, height: 5.0, unit: "m".into() })
            .append_blank();

        service.create(&form).await.unwrap();
        assert_eq!(service.page().items.len(), 1);
    }

    #[tokio::test]
    async fn test_search_filters_loaded_rows() {
        let mut repo = MockShowroomRepository::new();
        repo.expect_list()
            .returning(|| Ok(vec![showroom("s1", "North Hall"), showroom("s2", "South Yard")]));

        let service = ShowroomService::new(Arc::new(repo), Pagination::default());
        service.refresh().await.unwrap();
        service.search("HALL");
        let page = service.page();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].id, "s1");
    }

    #[tokio::test]
    async fn test_add_asset_targets_showroom() {
        let mut repo = MockShowroomRepository::new();
        repo.expect_create_asset()
            .withf(|sid, req| sid == "s1" && req.showroom_id.as_deref() == Some("s1"))
            .returning(|_, _| {
                Ok(serde_json::from_value(json!({ "id": "a1", "name": "Key", "type": "credential" })).unwrap())
            });

        let service = ShowroomService::new(Arc::new(repo), Pagination::default());
        let mut form = AssetForm::default();
        form.name = "Key".into();
        form.fields = form
            .fields
            .update(0, "key", "code")
            .and_then(|f| f.update(0, "value", "1234"))
            .unwrap();
        form.fields = form.fields.append(AssetField::new("pin", FieldType::Password, "0000", true));

        let asset = service.add_asset("s1", &form).await.unwrap();
        assert_eq!(asset.id, "a1");
        assert_eq!(service.drain_notices()[0].level, NoticeLevel::Success);
    }

    #[tokio::test]
    async fn test_edit_keeps_sizes_meta_and_active_flag() {
        let mut repo = MockShowroomRepository::new();
        repo.expect_find_by_id().returning(|_| {
            Ok(Some(
                serde_json::from_value(json!({
                    "id": "s1",
                    "name": "North Hall",
                    "location": "Bandung",
                    "type": "virtual",
                    "isActive": false,
                    "sizes": [{ "label": "Main", "width": 10, "height": 5, "unit": "m" }],
                    "metaFields": [{ "key": "floor", "value": "2" }]
                }))
                .unwrap(),
            ))
        });
        repo.expect_update()
            .withf(|id, req| {
                id == "s1"
                    && req.name.as_deref() == Some("North Hall")
                    && req.location.as_deref() == Some("Jakarta")
                    && req.kind == Some(crate::domain::ShowroomKind::Virtual)
                    && req.is_active == Some(false)
                    && req.sizes.as_ref().map(|s| s.len()) == Some(1)
                    && req.meta_fields.as_ref().map(|m| m.len()) == Some(1)
            })
            .times(1)
            .returning(|_, _| Ok(showroom("s1", "North Hall")));

        let service = ShowroomService::new(Arc::new(repo), Pagination::default());
        service
            .edit("s1", |mut form| {
                form.location = "Jakarta".into();
                Ok(form)
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_edit_asset_seeds_from_showroom_listing() {
        let mut repo = MockShowroomRepository::new();
        repo.expect_list_assets().withf(|sid| sid == "s1").returning(|_| {
            Ok(vec![serde_json::from_value(json!({
                "id": "a1",
                "name": "Door code",
                "type": "credential",
                "fields": [{ "key": "pin", "type": "password", "value": "0000", "secret": true }]
            }))
            .unwrap()])
        });
        repo.expect_update_asset()
            .withf(|sid, aid, req| {
                sid == "s1"
                    && aid == "a1"
                    && req.name.as_deref() == Some("Back door")
                    && req.fields.as_ref().map(|f| f[0].key == "pin") == Some(true)
            })
            .times(1)
            .returning(|_, _, _| {
                Ok(serde_json::from_value(json!({ "id": "a1", "name": "Back door", "type": "credential" })).unwrap())
            });

        let service = ShowroomService::new(Arc::new(repo), Pagination::default());
        service
            .edit_asset("s1", "a1", |mut form| {
                form.name = "Back door".into();
                Ok(form)
            })
            .await
            .unwrap();

        let missing = service.edit_asset("s1", "zz", Ok).await;
        assert!(matches!(missing, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_missing_showroom_queues_error_notice() {
        let mut repo = MockShowroomRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = ShowroomService::new(Arc::new(repo), Pagination::default());
        assert!(service.get("nope").await.is_err());
        let notices = service.drain_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Error);
    }
}
