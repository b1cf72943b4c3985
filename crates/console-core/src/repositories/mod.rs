//! Repository traits (ports)

pub mod asset_repository;
pub mod auth_repository;
pub mod client_repository;
pub mod notification_repository;
pub mod role_repository;
pub mod session_store;
pub mod showroom_repository;

pub use asset_repository::AssetRepository;
pub use auth_repository::AuthRepository;
pub use client_repository::ClientRepository;
pub use notification_repository::{DashboardRepository, NotificationRepository};
pub use role_repository::RoleRepository;
pub use session_store::SessionStore;
pub use showroom_repository::ShowroomRepository;
