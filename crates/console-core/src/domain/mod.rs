//! # Console Core - Domain Module
//!
//! Domain entities for the showroom console.

pub mod asset;
pub mod client;
pub mod navigation;
pub mod notification;
pub mod role;
pub mod session;
pub mod showroom;

// Re-export all entities and enums
pub use asset::{Asset, AssetField, AssetFile, AssetKind, CreateAssetRequest, FieldType, UpdateAssetRequest};
pub use client::{Client, CreateClientRequest, UpdateClientRequest};
pub use navigation::{default_navigation, NavGroup, NavItem, VisibilityOverride};
pub use notification::{DashboardStats, Notification};
pub use role::Role;
pub use session::{AuthContext, LoginRequest, OnboardRequest, RoleRef, Session, SessionUser};
pub use showroom::{
    CreateShowroomRequest, MetaField, Showroom, ShowroomKind, ShowroomSize, UpdateShowroomRequest,
};
