//! # Console Infrastructure
//!
//! REST and file-system implementations (adapters) of the core ports.

pub mod http;
pub mod session;

pub use http::{
    ApiClient, HttpAssetRepository, HttpAuthRepository, HttpClientRepository,
    HttpDashboardRepository, HttpNotificationRepository, HttpRoleRepository,
    HttpShowroomRepository,
};
pub use session::FileSessionStore;
