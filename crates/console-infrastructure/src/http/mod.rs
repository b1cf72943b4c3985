//! REST adapters for the console backend

pub mod asset_repo_impl;
pub mod auth_repo_impl;
pub mod client;
pub mod client_repo_impl;
pub mod notification_repo_impl;
pub mod showroom_repo_impl;

pub use asset_repo_impl::HttpAssetRepository;
pub use auth_repo_impl::HttpAuthRepository;
pub use client::ApiClient;
pub use client_repo_impl::{HttpClientRepository, HttpRoleRepository};
pub use notification_repo_impl::{HttpDashboardRepository, HttpNotificationRepository};
pub use showroom_repo_impl::HttpShowroomRepository;
