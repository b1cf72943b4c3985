// ============================================================================
// Console Infrastructure - REST API Client
// File: crates/console-infrastructure/src/http/client.rs
// ============================================================================
//! Thin JSON client over the console backend.
//!
//! Every request carries `Authorization: Bearer <token>` once a token is set.
//! Paths are given as segments and each one is percent-encoded, so an id
//! can never reach a different route. Bodies are returned as raw JSON so
//! the repositories can normalize the backend's varying response shapes.

use std::time::Duration;

use parking_lot::RwLock;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, warn};

use console_core::error::DomainError;
use console_core::normalize::extract_record;
use console_core::views::PendingFile;
use console_shared::config::ApiSettings;
use console_shared::constants::UPLOAD_FIELD_NAME;

pub struct ApiClient {
    http: Client,
    base_url: Url,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    pub fn new(settings: &ApiSettings) -> Result<Self, DomainError> {
        Self::with_base_url(&settings.base_url, Duration::from_secs(settings.timeout_secs))
    }

    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self, DomainError> {
        let http = Client::builder().timeout(timeout).build().map_err(|e| {
            error!("Failed to create HTTP client: {}", e);
            DomainError::InternalError(e.to_string())
        })?;

        let parsed = Url::parse(base_url.trim_end_matches('/')).map_err(|e| {
            error!("Invalid API base URL {}: {}", base_url, e);
            DomainError::InternalError(format!("invalid API base URL {}: {}", base_url, e))
        })?;
        if parsed.cannot_be_a_base() {
            return Err(DomainError::InternalError(format!(
                "API base URL {} cannot carry paths",
                base_url
            )));
        }

        Ok(Self {
            http,
            base_url: parsed,
            token: RwLock::new(None),
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    pub fn set_token(&self, token: Option<String>) {
        *self.token.write() = token.filter(|t| !t.is_empty());
    }

    pub fn has_token(&self) -> bool {
        self.token.read().is_some()
    }

    pub async fn get(&self, segments: &[&str]) -> Result<Value, DomainError> {
        self.get_with_query(segments, &[]).await
    }

    pub async fn get_with_query(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<Value, DomainError> {
        let mut url = self.endpoint(segments)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        self.send(self.request(Method::GET, url)).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, segments: &[&str], body: &B) -> Result<Value, DomainError> {
        let url = self.endpoint(segments)?;
        self.send(self.request(Method::POST, url).json(body)).await
    }

    pub async fn patch<B: Serialize + ?Sized>(&self, segments: &[&str], body: &B) -> Result<Value, DomainError> {
        let url = self.endpoint(segments)?;
        self.send(self.request(Method::PATCH, url).json(body)).await
    }

    pub async fn delete(&self, segments: &[&str]) -> Result<Value, DomainError> {
        let url = self.endpoint(segments)?;
        self.send(self.request(Method::DELETE, url)).await
    }

    /// Multipart `POST` with every file under the `files` field.
    pub async fn upload(&self, segments: &[&str], files: Vec<PendingFile>) -> Result<Value, DomainError> {
        let url = self.endpoint(segments)?;
        let mut form = Form::new();
        for file in files {
            let part = Part::bytes(file.bytes)
                .file_name(file.file_name.clone())
                .mime_str(&file.mime_type)
                .map_err(|e| {
                    warn!("Invalid MIME type {} for {}: {}", file.mime_type, file.file_name, e);
                    DomainError::FileRejected(format!("{}: {}", file.file_name, e))
                })?;
            form = form.part(UPLOAD_FIELD_NAME, part);
        }

        self.send(self.request(Method::POST, url).multipart(form)).await
    }

    /// Base URL with `segments` appended, each encoded as one path segment.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, DomainError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                DomainError::InternalError(format!("API base URL {} cannot carry paths", self.base_url))
            })?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!("{} {}", method, url);
        let builder = self.http.request(method, url);
        match self.token.read().as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Value, DomainError> {
        let (client, request) = request.build_split();
        let request = request.map_err(|e| {
            error!("Failed to build request: {}", e);
            DomainError::InternalError(e.to_string())
        })?;
        let path = request.url().path().to_string();

        let response = client.execute(request).await.map_err(|e| {
            error!("Request to {} failed: {}", path, e);
            DomainError::Network(e.to_string())
        })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| {
            error!("Failed to read response from {}: {}", path, e);
            DomainError::Network(e.to_string())
        })?;

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            match serde_json::from_slice::<Value>(&bytes) {
                Ok(value) => value,
                Err(e) if status.is_success() => {
                    error!("Invalid JSON from {}: {}", path, e);
                    return Err(DomainError::Decode(e.to_string()));
                }
                Err(_) => Value::String(String::from_utf8_lossy(&bytes).into_owned()),
            }
        };

        if status.is_success() {
            Ok(body)
        } else {
            let message = error_message(&body, status);
            warn!("{} responded {}: {}", path, status.as_u16(), message);
            Err(DomainError::Api { status: status.as_u16(), message })
        }
    }
}

/// Extracts a readable message from an error body (`message`, possibly a
/// list of messages, or `error`), falling back to the status reason.
fn error_message(body: &Value, status: StatusCode) -> String {
    let from_body = match body {
        Value::Object(map) => match (map.get("message"), map.get("error")) {
            (Some(Value::String(m)), _) => Some(m.clone()),
            (Some(Value::Array(items)), _) => {
                let parts: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
                (!parts.is_empty()).then(|| parts.join(", "))
            }
            (_, Some(Value::String(e))) => Some(e.clone()),
            _ => None,
        },
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    };

    from_body.unwrap_or_else(|| status.canonical_reason().unwrap_or("Request failed").to_string())
}

/// Decodes a single record out of a response envelope.
pub fn decode_record<T: DeserializeOwned>(body: &Value, key: &str) -> Result<T, DomainError> {
    let record = extract_record(body, key).ok_or_else(|| {
        error!("Response carries no {} record", key);
        DomainError::Decode(format!("missing {} record", key))
    })?;

    T::deserialize(record).map_err(|e| {
        error!("Malformed {} record: {}", key, e);
        DomainError::Decode(e.to_string())
    })
}

/// Maps a 404 to `None` for lookups by id.
pub fn not_found_as_none<T>(result: Result<T, DomainError>) -> Result<Option<T>, DomainError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(DomainError::Api { status: 404, .. }) => Ok(None),
        Err(e) => Err(e),
    }
}
