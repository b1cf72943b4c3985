// ============================================================================
// Console Infrastructure - File Session Store
// File: crates/console-infrastructure/src/session/file_store.rs
// ============================================================================
//! Session persisted as a JSON file between CLI runs

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, error, warn};

use console_core::domain::Session;
use console_core::error::DomainError;
use console_core::repositories::SessionStore;

pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Result<Option<Session>, DomainError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                error!("Failed to read session file {}: {}", self.path.display(), e);
                return Err(DomainError::SessionError(e.to_string()));
            }
        };

        match serde_json::from_slice::<Session>(&raw) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                // A corrupt file is treated as signed out
                warn!("Ignoring unreadable session file {}: {}", self.path.display(), e);
                Ok(None)
            }
        }
    }

    async fn save(&self, session: &Session) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                error!("Failed to create session directory {}: {}", parent.display(), e);
                DomainError::SessionError(e.to_string())
            })?;
        }

        let raw = serde_json::to_vec_pretty(session)
            .map_err(|e| DomainError::SessionError(e.to_string()))?;
        tokio::fs::write(&self.path, raw).await.map_err(|e| {
            error!("Failed to write session file {}: {}", self.path.display(), e);
            DomainError::SessionError(e.to_string())
        })?;

        debug!("Session saved to {}", self.path.display());
        Ok(())
    }

    async fn clear(&self) -> Result<(), DomainError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => {
                error!("Failed to remove session file {}: {}", self.path.display(), e);
                Err(DomainError::SessionError(e.to_string()))
            }
        }
    }
}
