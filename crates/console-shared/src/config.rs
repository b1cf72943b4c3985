//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{
    DEFAULT_API_TIMEOUT_SECS, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_PAGE_SIZE,
    DEFAULT_POLL_INTERVAL_SECS, OWNER_ROLE_CODE,
};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ApiSettings,
    pub session: SessionSettings,
    pub notifications: NotificationSettings,
    pub uploads: UploadSettings,
    pub logging: LoggingSettings,
    #[serde(default)]
    pub navigation: NavigationSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionSettings {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NotificationSettings {
    pub poll_interval_secs: u64,
    pub page_size: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UploadSettings {
    pub max_file_bytes: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
    /// Daily rolling log files are written here when set.
    pub directory: Option<String>,
}

/// Role-based hiding rules applied before permission filtering.
#[derive(Debug, Deserialize, Clone)]
pub struct NavigationSettings {
    #[serde(default = "default_overrides")]
    pub overrides: Vec<OverrideSettings>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OverrideSettings {
    pub role: String,
    pub paths: Vec<String>,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self { overrides: default_overrides() }
    }
}

fn default_overrides() -> Vec<OverrideSettings> {
    vec![OverrideSettings {
        role: OWNER_ROLE_CODE.to_string(),
        paths: vec!["/clients".to_string()],
    }]
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.name", "showroom-console")?
            .set_default("api.base_url", "http://localhost:3000/api")?
            .set_default("api.timeout_secs", DEFAULT_API_TIMEOUT_SECS)?
            .set_default("session.path", ".showroom-console/session.json")?
            .set_default("notifications.poll_interval_secs", DEFAULT_POLL_INTERVAL_SECS)?
            .set_default("notifications.page_size", DEFAULT_PAGE_SIZE)?
            .set_default("uploads.max_file_bytes", DEFAULT_MAX_UPLOAD_BYTES)?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("CONSOLE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        config.try_deserialize()
    }

    pub fn is_production(&self) -> bool {
        self.app.env == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_defaults_hide_clients_for_owner() {
        let nav = NavigationSettings::default();
        assert_eq!(nav.overrides.len(), 1);
        assert_eq!(nav.overrides[0].role, OWNER_ROLE_CODE);
        assert_eq!(nav.overrides[0].paths, vec!["/clients".to_string()]);
    }

    #[test]
    fn test_missing_navigation_section_uses_defaults() {
        let raw = r#"{
            "app": { "env": "test", "name": "console" },
            "api": { "base_url": "http://localhost", "timeout_secs": 5 },
            "session": { "path": "/tmp/session.json" },
            "notifications": { "poll_interval_secs": 30, "page_size": 20 },
            "uploads": { "max_file_bytes": 1024 },
            "logging": { "level": "debug", "json": true }
        }"#;
        let cfg: AppConfig = serde_json::from_str(raw).unwrap();
        assert!(!cfg.is_production());
        assert!(cfg.logging.directory.is_none());
        assert_eq!(cfg.navigation.overrides[0].paths[0], "/clients");
    }
}
