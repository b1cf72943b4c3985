//! Transient user-facing notices (toasts)

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;

use console_shared::constants::MAX_NOTICES;

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub at: DateTime<Utc>,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    pub fn from_error(context: &str, error: &DomainError) -> Self {
        Self::error(format!("{}: {}", context, error.user_message()))
    }

    fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self { level, message: message.into(), at: Utc::now() }
    }
}

/// Bounded queue; the oldest notice is dropped when full.
#[derive(Debug, Clone)]
pub struct NoticeQueue {
    notices: VecDeque<Notice>,
    capacity: usize,
}

impl Default for NoticeQueue {
    fn default() -> Self {
        Self::with_capacity(MAX_NOTICES)
    }
}

impl NoticeQueue {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            notices: VecDeque::with_capacity(capacity.max(1)),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, notice: Notice) {
        if self.notices.len() == self.capacity {
            self.notices.pop_front();
        }
        self.notices.push_back(notice);
    }

    pub fn drain(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.notices.back()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_drops_oldest() {
        let mut queue = NoticeQueue::with_capacity(2);
        queue.push(Notice::info("one"));
        queue.push(Notice::info("two"));
        queue.push(Notice::success("three"));
        let messages: Vec<String> = queue.drain().into_iter().map(|n| n.message).collect();
        assert_eq!(messages, vec!["two", "three"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_error_notice_uses_user_message() {
        let notice = Notice::from_error(
            "Failed to load assets",
            &DomainError::Api { status: 500, message: "Boom".into() },
        );
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "Failed to load assets: Boom");
    }
}
