//! Wiring of configuration, adapters and services

use std::sync::Arc;

use anyhow::{anyhow, Context};
use tracing::{debug, info};

use console_core::domain::{Session, VisibilityOverride};
use console_core::services::{
    AssetService, AuthService, ClientService, NavigationService, NotificationStore,
    ShowroomService,
};
use console_infrastructure::{
    ApiClient, FileSessionStore, HttpAssetRepository, HttpAuthRepository, HttpClientRepository,
    HttpDashboardRepository, HttpNotificationRepository, HttpRoleRepository,
    HttpShowroomRepository,
};
use console_shared::config::AppConfig;
use console_shared::Pagination;

pub struct App {
    pub config: AppConfig,
    pub json: bool,
    api: Arc<ApiClient>,
    auth: AuthService<HttpAuthRepository, FileSessionStore>,
    navigation: NavigationService,
}

impl App {
    pub fn new(config: AppConfig, json: bool) -> anyhow::Result<Self> {
        let api = Arc::new(ApiClient::new(&config.api).context("Failed to build API client")?);
        let session_store = Arc::new(FileSessionStore::new(&config.session.path));
        let auth = AuthService::new(Arc::new(HttpAuthRepository::new(Arc::clone(&api))), session_store);

        let overrides = config
            .navigation
            .overrides
            .iter()
            .map(|o| VisibilityOverride {
                role: o.role.clone(),
                paths: o.paths.clone(),
            })
            .collect();

        info!("Using backend at {}", api.base_url());
        Ok(Self {
            config,
            json,
            api,
            auth,
            navigation: NavigationService::with_overrides(overrides),
        })
    }

    pub fn auth(&self) -> &AuthService<HttpAuthRepository, FileSessionStore> {
        &self.auth
    }

    pub fn navigation(&self) -> &NavigationService {
        &self.navigation
    }

    /// Loads the stored session, if any, and arms the bearer token.
    pub async fn session(&self) -> anyhow::Result<Option<Session>> {
        let session = self
            .auth
            .current()
            .await
            .map_err(|e| anyhow!("Failed to read the stored session: {}", e))?;
        if let Some(s) = &session {
            debug!("Restored session for user {}", s.user.id);
            self.api.set_token(Some(s.token.clone()));
        }
        Ok(session)
    }

    pub async fn require_session(&self) -> anyhow::Result<Session> {
        self.session()
            .await?
            .ok_or_else(|| anyhow!("Not signed in. Run `showroom-console login <email>` first."))
    }

    /// Rejects commands whose screen the sidebar would not offer.
    pub async fn require_access(&self, path: &str) -> anyhow::Result<Session> {
        let session = self.require_session().await?;
        if !self.navigation.can_access(&session.auth_context(), path) {
            return Err(anyhow!("Access denied: your role cannot open {}", path));
        }
        Ok(session)
    }

    fn pagination(&self, page: u32, per_page: u32) -> Pagination {
        Pagination::new(page, per_page)
    }

    pub fn assets(&self, page: u32, per_page: u32) -> AssetService<HttpAssetRepository> {
        AssetService::new(
            Arc::new(HttpAssetRepository::new(Arc::clone(&self.api))),
            self.pagination(page, per_page),
        )
    }

    pub fn showrooms(&self, page: u32, per_page: u32) -> ShowroomService<HttpShowroomRepository> {
        ShowroomService::new(
            Arc::new(HttpShowroomRepository::new(Arc::clone(&self.api))),
            self.pagination(page, per_page),
        )
    }

    pub fn clients(&self, page: u32, per_page: u32) -> ClientService<HttpClientRepository, HttpRoleRepository> {
        ClientService::new(
            Arc::new(HttpClientRepository::new(Arc::clone(&self.api))),
            Arc::new(HttpRoleRepository::new(Arc::clone(&self.api))),
            self.pagination(page, per_page),
        )
    }

    pub fn notifications(&self) -> Arc<NotificationStore<HttpNotificationRepository>> {
        Arc::new(NotificationStore::new(
            Arc::new(HttpNotificationRepository::new(Arc::clone(&self.api))),
            self.config.notifications.page_size,
        ))
    }

    pub fn dashboard(&self) -> HttpDashboardRepository {
        HttpDashboardRepository::new(Arc::clone(&self.api))
    }
}
