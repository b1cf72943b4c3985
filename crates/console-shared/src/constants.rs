//! Application-wide constants

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;
pub const MAX_NOTICES: usize = 5;

/// Multipart field name expected by the file upload endpoints.
pub const UPLOAD_FIELD_NAME: &str = "files";

pub const SUPERADMIN_ROLE_CODE: &str = "SUPERADMIN";
pub const OWNER_ROLE_CODE: &str = "OWNER";
