//! File attachment upload state machine.
//!
//! `Idle -> Ready -> Uploading -> Succeeded | Failed`. A failed upload keeps
//! its files so it can be retried; terminal states return to `Idle` on reset.

use std::fmt;

use tracing::{debug, warn};

use crate::domain::AssetFile;
use crate::error::DomainError;

/// File picked for upload, held in memory until sent.
#[derive(Clone, PartialEq, Eq)]
pub struct PendingFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl PendingFile {
    /// MIME type is guessed from the file extension.
    pub fn new(file_name: &str, bytes: Vec<u8>) -> Self {
        let mime_type = mime_guess::from_path(file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Self {
            file_name: file_name.to_string(),
            mime_type,
            bytes,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

impl fmt::Debug for PendingFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingFile")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UploadState {
    Idle,
    Ready(Vec<PendingFile>),
    Uploading(Vec<PendingFile>),
    Succeeded(Vec<AssetFile>),
    Failed { files: Vec<PendingFile>, error: String },
}

impl UploadState {
    pub fn name(&self) -> &'static str {
        match self {
            UploadState::Idle => "idle",
            UploadState::Ready(_) => "ready",
            UploadState::Uploading(_) => "uploading",
            UploadState::Succeeded(_) => "succeeded",
            UploadState::Failed { .. } => "failed",
        }
    }
}

#[derive(Debug, Clone)]
pub struct UploadQueue {
    state: UploadState,
    max_file_bytes: u64,
}

impl UploadQueue {
    pub fn new(max_file_bytes: u64) -> Self {
        Self { state: UploadState::Idle, max_file_bytes }
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    /// Files queued for the next upload attempt.
    pub fn pending(&self) -> &[PendingFile] {
        match &self.state {
            UploadState::Ready(files)
            | UploadState::Uploading(files)
            | UploadState::Failed { files, .. } => files,
            _ => &[],
        }
    }

    /// Adds files to the selection. Oversized files and names already
    /// queued are rejected individually; the rejections are returned.
    pub fn select(&mut self, files: Vec<PendingFile>) -> Result<Vec<DomainError>, DomainError> {
        let mut queued = match std::mem::replace(&mut self.state, UploadState::Idle) {
            UploadState::Idle | UploadState::Succeeded(_) => Vec::new(),
            UploadState::Ready(files) | UploadState::Failed { files, .. } => files,
            uploading @ UploadState::Uploading(_) => {
                self.state = uploading;
                return Err(DomainError::InvalidTransition {
                    action: "select files",
                    state: "uploading",
                });
            }
        };

        let mut rejected = Vec::new();
        for file in files {
            if file.size() > self.max_file_bytes {
                warn!("Rejecting {}: {} bytes over limit", file.file_name, file.size());
                rejected.push(DomainError::FileRejected(format!(
                    "{} exceeds the {} byte limit",
                    file.file_name, self.max_file_bytes
                )));
            } else if queued.iter().any(|q| q.file_name == file.file_name) {
                rejected.push(DomainError::FileRejected(format!(
                    "{} is already selected",
                    file.file_name
                )));
            } else {
                queued.push(file);
            }
        }

        self.state = if queued.is_empty() {
            UploadState::Idle
        } else {
            UploadState::Ready(queued)
        };
        debug!(state = self.state.name(), pending = self.pending().len(), "Upload selection changed");
        Ok(rejected)
    }

    /// Drops one selected file; an emptied selection returns to `Idle`.
    pub fn unselect(&mut self, index: usize) -> Result<(), DomainError> {
        match &mut self.state {
            UploadState::Ready(files) => {
                if index < files.len() {
                    files.remove(index);
                }
                if files.is_empty() {
                    self.state = UploadState::Idle;
                }
                Ok(())
            }
            other => Err(DomainError::InvalidTransition {
                action: "unselect a file",
                state: other.name(),
            }),
        }
    }

    /// Moves to `Uploading` and hands out the files to send. Allowed from
    /// `Ready` and, as a retry, from `Failed`.
    pub fn start(&mut self) -> Result<Vec<PendingFile>, DomainError> {
        match std::mem::replace(&mut self.state, UploadState::Idle) {
            UploadState::Ready(files) | UploadState::Failed { files, .. } => {
                self.state = UploadState::Uploading(files.clone());
                Ok(files)
            }
            other => {
                let state = other.name();
                self.state = other;
                Err(DomainError::InvalidTransition { action: "start upload", state })
            }
        }
    }

    pub fn finish(&mut self, uploaded: Vec<AssetFile>) -> Result<(), DomainError> {
        match &self.state {
            UploadState::Uploading(_) => {
                self.state = UploadState::Succeeded(uploaded);
                Ok(())
            }
            other => Err(DomainError::InvalidTransition {
                action: "finish upload",
                state: other.name(),
            }),
        }
    }

    pub fn fail(&mut self, error: &DomainError) -> Result<(), DomainError> {
        match std::mem::replace(&mut self.state, UploadState::Idle) {
            UploadState::Uploading(files) => {
                self.state = UploadState::Failed { files, error: error.user_message() };
                Ok(())
            }
            other => {
                let state = other.name();
                self.state = other;
                Err(DomainError::InvalidTransition { action: "fail upload", state })
            }
        }
    }

    /// Clears the queue. Not allowed while a request is in flight.
    pub fn reset(&mut self) -> Result<(), DomainError> {
        if let UploadState::Uploading(_) = self.state {
            return Err(DomainError::InvalidTransition { action: "reset", state: "uploading" });
        }
        self.state = UploadState::Idle;
        Ok(())
    }
}
