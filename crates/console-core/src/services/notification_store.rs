// ============================================================================
// Console Core - Notification Store
// File: crates/console-core/src/services/notification_store.rs
// ============================================================================
//! Polling store behind the notification bell.
//!
//! Every refresh replaces the snapshot with whatever response resolves last.
//! Ids absent from the previous page are reported as `fresh`; the very
//! first poll reports none. Only the latest page's ids are remembered, so
//! memory stays bounded by the page size however long polling runs.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, warn};

use console_shared::EntityId;

use crate::domain::Notification;
use crate::error::DomainError;
use crate::repositories::NotificationRepository;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationSnapshot {
    pub items: Vec<Notification>,
    pub unread: usize,
    pub fresh: Vec<EntityId>,
    pub last_synced: Option<DateTime<Utc>>,
    pub last_error: Option<String>,
}

#[derive(Debug, Default)]
struct Inner {
    snapshot: NotificationSnapshot,
    seen: HashSet<EntityId>,
    polled: bool,
}

impl Inner {
    fn recount(&mut self) {
        self.snapshot.unread = self.snapshot.items.iter().filter(|n| !n.is_read).count();
    }
}

pub struct NotificationStore<R: NotificationRepository> {
    notification_repo: Arc<R>,
    page_size: u32,
    inner: RwLock<Inner>,
}

impl<R: NotificationRepository + 'static> NotificationStore<R> {
    pub fn new(notification_repo: Arc<R>, page_size: u32) -> Self {
        Self {
            notification_repo,
            page_size,
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Fetches the latest page. A failure keeps the previous items and is
    /// recorded in `last_error`.
    pub async fn refresh(&self) -> Result<NotificationSnapshot, DomainError> {
        let result = self.notification_repo.list(self.page_size).await;

        let mut inner = self.inner.write();
        match result {
            Ok(items) => {
                let fresh: Vec<EntityId> = if inner.polled {
                    items
                        .iter()
                        .filter(|n| !inner.seen.contains(&n.id))
                        .map(|n| n.id.clone())
                        .collect()
                } else {
                    Vec::new()
                };
                inner.seen = items.iter().map(|n| n.id.clone()).collect();
                inner.polled = true;

                inner.snapshot.items = items;
                inner.snapshot.fresh = fresh;
                inner.snapshot.last_synced = Some(Utc::now());
                inner.snapshot.last_error = None;
                inner.recount();

                debug!(
                    unread = inner.snapshot.unread,
                    fresh = inner.snapshot.fresh.len(),
                    "Notifications refreshed"
                );
                Ok(inner.snapshot.clone())
            }
            Err(e) => {
                warn!("Notification poll failed: {}", e);
                inner.snapshot.fresh.clear();
                inner.snapshot.last_error = Some(e.user_message());
                Err(e)
            }
        }
    }

    pub async fn mark_read(&self, id: &str) -> Result<(), DomainError> {
        self.notification_repo.mark_read(id).await.map_err(|e| {
            error!("Failed to mark notification {} as read: {}", id, e);
            e
        })?;

        let mut inner = self.inner.write();
        if let Some(n) = inner.snapshot.items.iter_mut().find(|n| n.id == id) {
            n.is_read = true;
        }
        inner.recount();
        Ok(())
    }

    pub async fn mark_all_read(&self) -> Result<(), DomainError> {
        self.notification_repo.mark_all_read().await.map_err(|e| {
            error!("Failed to mark notifications as read: {}", e);
            e
        })?;

        let mut inner = self.inner.write();
        for n in inner.snapshot.items.iter_mut() {
            n.is_read = true;
        }
        inner.recount();
        info!("All notifications marked as read");
        Ok(())
    }

    pub fn unread_count(&self) -> usize {
        self.inner.read().snapshot.unread
    }

    pub fn snapshot(&self) -> NotificationSnapshot {
        self.inner.read().snapshot.clone()
    }

    /// Polls every `period` until the handle is aborted. The first tick
    /// fires immediately.
    pub fn spawn_polling(self: Arc<Self>, period: Duration) -> JoinHandle<()> {
        info!("Starting notification polling every {:?}", period);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                // errors are already recorded in the snapshot
                let _ = self.refresh().await;
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::notification_repository::MockNotificationRepository;
    use serde_json::json;

    fn note(id: &str, read: bool) -> Notification {
        serde_json::from_value(json!({ "id": id, "title": id, "isRead": read })).unwrap()
    }

    #[tokio::test]
    async fn test_fresh_ids_only_after_first_poll() {
        let mut repo = MockNotificationRepository::new();
        let mut polls = 0;
        repo.expect_list().with(mockall::predicate::eq(20)).returning(move |_| {
            polls += 1;
            if polls == 1 {
                Ok(vec![note("n1", false), note("n2", true)])
            } else {
                Ok(vec![note("n3", false), note("n1", false), note("n2", true)])
            }
        });

        let store = NotificationStore::new(Arc::new(repo), 20);
        let first = store.refresh().await.unwrap();
        assert!(first.fresh.is_empty());
        assert_eq!(first.unread, 1);

        let second = store.refresh().await.unwrap();
        assert_eq!(second.fresh, vec!["n3".to_string()]);
        assert_eq!(store.unread_count(), 2);
    }

    #[tokio::test]
    async fn test_remembered_ids_follow_latest_page() {
        let mut repo = MockNotificationRepository::new();
        let mut polls = 0;
        repo.expect_list().returning(move |_| {
            polls += 1;
            let start = (polls - 1) * 3;
            Ok((start..start + 3).map(|i| note(&format!("n{}", i), false)).collect())
        });

        let store = NotificationStore::new(Arc::new(repo), 3);
        for _ in 0..50 {
            store.refresh().await.unwrap();
        }

        let snapshot = store.snapshot();
        assert_eq!(snapshot.fresh.len(), 3);
        assert_eq!(store.inner.read().seen.len(), 3);
        assert!(store.inner.read().seen.contains("n149"));
    }

    #[tokio::test]
    async fn test_failed_poll_keeps_items() {
        let mut repo = MockNotificationRepository::new();
        let mut polls = 0;
        repo.expect_list().returning(move |_| {
            polls += 1;
            if polls == 1 {
                Ok(vec![note("n1", false)])
            } else {
                Err(DomainError::Network("down".into()))
            }
        });

        let store = NotificationStore::new(Arc::new(repo), 20);
        store.refresh().await.unwrap();
        assert!(store.refresh().await.is_err());

        let snapshot = store.snapshot();
        assert_eq!(snapshot.items.len(), 1);
        assert!(snapshot.last_error.is_some());
    }

    #[tokio::test]
    async fn test_mark_read_updates_count() {
        let mut repo = MockNotificationRepository::new();
        repo.expect_list()
            .returning(|_| Ok(vec![note("n1", false), note("n2", false)]));
        repo.expect_mark_read().withf(|id| id == "n1").returning(|_| Ok(()));
        repo.expect_mark_all_read().returning(|| Ok(()));

        let store = NotificationStore::new(Arc::new(repo), 20);
        store.refresh().await.unwrap();
        store.mark_read("n1").await.unwrap();
        assert_eq!(store.unread_count(), 1);
        store.mark_all_read().await.unwrap();
        assert_eq!(store.unread_count(), 0);
    }

    #[tokio::test]
    async fn test_mark_read_failure_changes_nothing() {
        let mut repo = MockNotificationRepository::new();
        repo.expect_list().returning(|_| Ok(vec![note("n1", false)]));
        repo.expect_mark_read()
            .returning(|_| Err(DomainError::Api { status: 500, message: "boom".into() }));

        let store = NotificationStore::new(Arc::new(repo), 20);
        store.refresh().await.unwrap();
        assert!(store.mark_read("n1").await.is_err());
        assert_eq!(store.unread_count(), 1);
    }

    #[tokio::test]
    async fn test_polling_task_refreshes() {
        let mut repo = MockNotificationRepository::new();
        repo.expect_list().returning(|_| Ok(vec![note("n1", false)]));

        let store = Arc::new(NotificationStore::new(Arc::new(repo), 20));
        let handle = Arc::clone(&store).spawn_polling(Duration::from_millis(10));
        tokio::time::sleep(Duration::from_millis(50)).await;
        handle.abort();

        assert!(store.snapshot().last_synced.is_some());
        assert_eq!(store.unread_count(), 1);
    }
}
