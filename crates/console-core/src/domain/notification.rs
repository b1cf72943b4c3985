//! Notification entity and dashboard counters

use serde::{Deserialize, Serialize};

use console_shared::{EntityId, Timestamps};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: EntityId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, alias = "read")]
    pub is_read: bool,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

/// Body of `GET /dashboard/stats`. Counters the backend omits are zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    #[serde(alias = "totalAssets")]
    pub assets: u64,
    #[serde(alias = "totalShowrooms")]
    pub showrooms: u64,
    #[serde(alias = "totalClients")]
    pub clients: u64,
    #[serde(alias = "unread")]
    pub unread_notifications: u64,
}
