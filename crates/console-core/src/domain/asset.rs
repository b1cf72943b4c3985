// ============================================================================
// Console Core - Asset Entity
// File: crates/console-core/src/domain/asset.rs
// Description: Credential/text records, their typed fields and attachments
// ============================================================================

use serde::{Deserialize, Serialize};
use validator::Validate;

use console_shared::{EntityId, Timestamps};

/// Asset kind enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Credential,
    Text,
    File,
}

impl AssetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Credential => "credential",
            AssetKind::Text => "text",
            AssetKind::File => "file",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "credential" => Some(AssetKind::Credential),
            "text" => Some(AssetKind::Text),
            "file" => Some(AssetKind::File),
            _ => None,
        }
    }
}

impl Default for AssetKind {
    fn default() -> Self {
        AssetKind::Credential
    }
}

/// Input type of a single asset field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Password,
    Url,
    Email,
    Number,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Password => "password",
            FieldType::Url => "url",
            FieldType::Email => "email",
            FieldType::Number => "number",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(FieldType::Text),
            "password" => Some(FieldType::Password),
            "url" => Some(FieldType::Url),
            "email" => Some(FieldType::Email),
            "number" => Some(FieldType::Number),
            _ => None,
        }
    }
}

impl Default for FieldType {
    fn default() -> Self {
        FieldType::Text
    }
}

/// Key/type/value row of an asset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetField {
    pub key: String,
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
    #[serde(default)]
    pub value: String,
    #[serde(default, alias = "isSecret")]
    pub secret: bool,
}

impl AssetField {
    pub fn new(key: &str, field_type: FieldType, value: &str, secret: bool) -> Self {
        Self {
            key: key.to_string(),
            field_type,
            value: value.to_string(),
            secret,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.key.trim().is_empty()
    }

    /// Value as it may be shown on screen.
    pub fn display_value(&self) -> String {
        if self.secret || self.field_type == FieldType::Password {
            console_shared::utils::mask_secret(&self.value)
        } else {
            self.value.clone()
        }
    }
}

/// File attached to an asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetFile {
    pub id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<EntityId>,
    #[serde(alias = "originalName", alias = "name")]
    pub file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl AssetFile {
    pub fn is_image(&self) -> bool {
        match &self.mime_type {
            Some(mime) => mime.starts_with("image/"),
            None => mime_guess::from_path(&self.file_name)
                .first()
                .map(|m| m.type_().as_str() == "image")
                .unwrap_or(false),
        }
    }
}

/// Asset entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: EntityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: AssetKind,
    #[serde(default)]
    pub fields: Vec<AssetField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub showroom_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<EntityId>,
    #[serde(default)]
    pub files: Vec<AssetFile>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl Asset {
    pub fn field(&self, key: &str) -> Option<&AssetField> {
        self.fields.iter().find(|f| f.key == key)
    }
}

/// Body of `POST /assets` and `POST /showrooms/:id/assets`
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssetRequest {
    #[validate(length(min = 1, max = 200, message = "Asset name is required (max 200 characters)"))]
    pub name: String,

    #[validate(length(max = 2000, message = "Description too long"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "type")]
    pub kind: AssetKind,

    pub fields: Vec<AssetField>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub showroom_id: Option<EntityId>,
}

/// Body of `PATCH /assets/:id`; absent members are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssetRequest {
    #[validate(length(min = 1, max = 200, message = "Asset name cannot be empty (max 200 characters)"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[validate(length(max = 2000, message = "Description too long"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<AssetKind>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<AssetField>>,
}
