//! List view plus notice queue shared by the CRUD services.
//!
//! Locks are only taken for synchronous updates, never across an `.await`.

use parking_lot::{Mutex, RwLock};

use console_shared::Pagination;

use crate::error::DomainError;
use crate::views::{ListView, Listable, Notice, NoticeQueue, Page};

#[derive(Debug)]
pub struct PageState<T> {
    view: RwLock<ListView<T>>,
    notices: Mutex<NoticeQueue>,
}

impl<T: Listable> PageState<T> {
    pub fn new(pagination: Pagination) -> Self {
        Self {
            view: RwLock::new(ListView::new(pagination)),
            notices: Mutex::new(NoticeQueue::default()),
        }
    }

    pub fn begin_fetch(&self) {
        self.view.write().begin_fetch();
    }

    /// Stores a fetch result; on failure the notice is queued and the
    /// error handed back.
    pub fn finish_fetch(&self, result: Result<Vec<T>, DomainError>) -> Result<usize, DomainError> {
        let outcome = match &result {
            Ok(records) => Ok(records.len()),
            Err(e) => Err(e.clone()),
        };
        if let Some(notice) = self.view.write().apply_fetch(result) {
            self.notify(notice);
        }
        outcome
    }

    pub fn notify(&self, notice: Notice) {
        self.notices.lock().push(notice);
    }

    /// Queues an error notice and returns the error for propagation.
    pub fn fail(&self, context: &str, error: DomainError) -> DomainError {
        self.notify(Notice::from_error(context, &error));
        error
    }

    pub fn with_view<R>(&self, f: impl FnOnce(&mut ListView<T>) -> R) -> R {
        f(&mut self.view.write())
    }

    pub fn page(&self) -> Page<T> {
        self.view.read().visible()
    }

    pub fn find(&self, id: &str) -> Option<T> {
        self.view.read().find(id).cloned()
    }

    pub fn set_query(&self, query: &str) {
        self.view.write().set_query(query);
    }

    pub fn set_page(&self, page: u32) {
        self.view.write().set_page(page);
    }

    pub fn drain_notices(&self) -> Vec<Notice> {
        self.notices.lock().drain()
    }
}
