// ============================================================================
// Console Core - Showroom Entity
// File: crates/console-core/src/domain/showroom.rs
// Description: Physical/virtual locations with templates, sizes and meta fields
// ============================================================================

use serde::{Deserialize, Serialize};
use validator::Validate;

use console_shared::{EntityId, Timestamps};

/// Showroom kind enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShowroomKind {
    Physical,
    Virtual,
}

impl ShowroomKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShowroomKind::Physical => "physical",
            ShowroomKind::Virtual => "virtual",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "physical" => Some(ShowroomKind::Physical),
            "virtual" => Some(ShowroomKind::Virtual),
            _ => None,
        }
    }
}

impl Default for ShowroomKind {
    fn default() -> Self {
        ShowroomKind::Physical
    }
}

/// Named dimension set of a showroom
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShowroomSize {
    pub label: String,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default = "default_unit")]
    pub unit: String,
}

fn default_unit() -> String {
    "m".to_string()
}

impl ShowroomSize {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Free-form key/value attribute
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaField {
    pub key: String,
    #[serde(default)]
    pub value: String,
}

/// Showroom entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Showroom {
    pub id: EntityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: ShowroomKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(default)]
    pub sizes: Vec<ShowroomSize>,
    #[serde(default)]
    pub meta_fields: Vec<MetaField>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<EntityId>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

fn default_active() -> bool {
    true
}

/// Body of `POST /showrooms`
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateShowroomRequest {
    #[validate(length(min = 2, max = 120, message = "Showroom name must be between 2 and 120 characters"))]
    pub name: String,

    #[validate(length(max = 255, message = "Location too long"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(rename = "type")]
    pub kind: ShowroomKind,

    #[validate(length(max = 100, message = "Template name too long"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    pub sizes: Vec<ShowroomSize>,
    pub meta_fields: Vec<MetaField>,
}

/// Body of `PATCH /showrooms/:id`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShowroomRequest {
    #[validate(length(min = 2, max = 120, message = "Showroom name must be between 2 and 120 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[validate(length(max = 255, message = "Location too long"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ShowroomKind>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<ShowroomSize>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_fields: Option<Vec<MetaField>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_showroom_defaults() {
        let showroom: Showroom = serde_json::from_value(json!({
            "id": "s1",
            "name": "Jakarta Flagship",
            "sizes": [{ "label": "Main hall", "width": 12.5, "height": 8.0 }]
        }))
        .unwrap();

        assert_eq!(showroom.kind, ShowroomKind::Physical);
        assert!(showroom.is_active);
        assert_eq!(showroom.sizes[0].unit, "m");
        assert_eq!(showroom.sizes[0].area(), 100.0);
        assert!(showroom.meta_fields.is_empty());
    }

    #[test]
    fn test_update_request_skips_absent_members() {
        let req = UpdateShowroomRequest {
            is_active: Some(false),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({ "isActive": false }));
    }
}
