//! Application services driving the console screens

pub mod asset_service;
pub mod auth_service;
pub mod client_service;
pub mod navigation_service;
pub mod notification_store;
pub mod page_state;
pub mod showroom_service;

pub use asset_service::AssetService;
pub use auth_service::AuthService;
pub use client_service::ClientService;
pub use navigation_service::{NavigationFilter, NavigationService};
pub use notification_store::{NotificationSnapshot, NotificationStore};
pub use page_state::PageState;
pub use showroom_service::ShowroomService;
