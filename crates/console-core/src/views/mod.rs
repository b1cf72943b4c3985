//! View state shared by the console screens

pub mod gallery;
pub mod list_view;
pub mod notice;
pub mod upload;

pub use gallery::Gallery;
pub use list_view::{ListView, Listable, Page};
pub use notice::{Notice, NoticeLevel, NoticeQueue};
pub use upload::{PendingFile, UploadQueue, UploadState};
