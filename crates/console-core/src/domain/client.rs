// ============================================================================
// Console Core - Client Entity
// File: crates/console-core/src/domain/client.rs
// Description: Tenant managed by the console
// ============================================================================

use serde::{Deserialize, Serialize};
use validator::Validate;

use console_shared::{EntityId, Timestamps};

/// Client (tenant) entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

fn default_active() -> bool {
    true
}

/// Body of `POST /clients`
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientRequest {
    #[validate(length(min = 2, max = 100, message = "Client name must be between 2 and 100 characters"))]
    pub name: String,

    #[validate(length(min = 2, max = 100, message = "Slug must be between 2 and 100 characters"))]
    pub slug: String,

    #[validate(email(message = "Invalid contact email"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl CreateClientRequest {
    /// Builds a request, deriving the slug from the name when none is given.
    pub fn new(name: &str, slug: Option<&str>, email: Option<&str>) -> Self {
        let name = name.trim().to_string();
        let slug = match slug {
            Some(s) if !s.trim().is_empty() => slugify(s),
            _ => slugify(&name),
        };
        Self {
            name,
            slug,
            email: email.map(|e| e.trim().to_string()),
        }
    }
}

/// Body of `PATCH /clients/:id`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClientRequest {
    #[validate(length(min = 2, max = 100, message = "Client name must be between 2 and 100 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[validate(email(message = "Invalid contact email"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    for c in input.trim().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}
