//! Record table state: last successful fetch wins, client-side search and
//! pagination.

use serde::Serialize;

use console_shared::Pagination;

use crate::domain::{Asset, Client, Notification, Role, Showroom};
use crate::error::DomainError;
use crate::views::notice::Notice;

/// Record that can be listed in a table.
pub trait Listable: Clone {
    fn id(&self) -> &str;

    /// Case-insensitive search against an already lowercased needle.
    fn matches(&self, needle: &str) -> bool;

    /// Label used in notices.
    fn noun() -> &'static str;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: usize,
    pub total_pages: u32,
}

#[derive(Debug, Clone)]
pub struct ListView<T> {
    records: Vec<T>,
    loading: bool,
    loaded: bool,
    query: String,
    pagination: Pagination,
}

impl<T: Listable> Default for ListView<T> {
    fn default() -> Self {
        Self::new(Pagination::default())
    }
}

impl<T: Listable> ListView<T> {
    pub fn new(pagination: Pagination) -> Self {
        Self {
            records: Vec::new(),
            loading: false,
            loaded: false,
            query: String::new(),
            pagination,
        }
    }

    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    /// Applies a fetch result. Failure keeps the current records and
    /// returns the notice to show.
    pub fn apply_fetch(&mut self, result: Result<Vec<T>, DomainError>) -> Option<Notice> {
        self.loading = false;
        match result {
            Ok(records) => {
                self.records = records;
                self.loaded = true;
                self.clamp_page();
                None
            }
            Err(e) => Some(Notice::from_error(&format!("Failed to load {}", T::noun()), &e)),
        }
    }

    /// Optimistically shows a freshly created record at the top.
    pub fn prepend(&mut self, record: T) {
        self.records.retain(|r| r.id() != record.id());
        self.records.insert(0, record);
    }

    /// Replaces the record with the same id, keeping its position.
    pub fn replace(&mut self, record: T) -> bool {
        match self.records.iter_mut().find(|r| r.id() == record.id()) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    pub fn remove_by_id(&mut self, id: &str) -> Option<T> {
        let index = self.records.iter().position(|r| r.id() == id)?;
        let removed = self.records.remove(index);
        self.clamp_page();
        Some(removed)
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Changing the query resets to the first page.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.trim().to_lowercase();
        self.pagination.page = 1;
    }

    pub fn set_page(&mut self, page: u32) {
        self.pagination = Pagination::new(page, self.pagination.per_page);
        self.clamp_page();
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    fn filtered(&self) -> Vec<&T> {
        if self.query.is_empty() {
            self.records.iter().collect()
        } else {
            self.records.iter().filter(|r| r.matches(&self.query)).collect()
        }
    }

    fn clamp_page(&mut self) {
        let total_pages = self.pagination.total_pages(self.filtered().len());
        if self.pagination.page > total_pages {
            self.pagination.page = total_pages;
        }
    }

    /// The current page after search filtering.
    pub fn visible(&self) -> Page<T> {
        let filtered = self.filtered();
        let total = filtered.len();
        let items = filtered
            .into_iter()
            .skip(self.pagination.offset())
            .take(self.pagination.per_page as usize)
            .cloned()
            .collect();

        Page {
            items,
            page: self.pagination.page,
            per_page: self.pagination.per_page,
            total,
            total_pages: self.pagination.total_pages(total),
        }
    }
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

impl Listable for Asset {
    fn id(&self) -> &str {
        &self.id
    }

    fn matches(&self, needle: &str) -> bool {
        contains(&self.name, needle)
            || self.description.as_deref().is_some_and(|d| contains(d, needle))
            || self.kind.as_str() == needle
            || self.fields.iter().any(|f| contains(&f.key, needle))
    }

    fn noun() -> &'static str {
        "assets"
    }
}

impl Listable for Showroom {
    fn id(&self) -> &str {
        &self.id
    }

    fn matches(&self, needle: &str) -> bool {
        contains(&self.name, needle)
            || self.location.as_deref().is_some_and(|l| contains(l, needle))
            || self.template.as_deref().is_some_and(|t| contains(t, needle))
    }

    fn noun() -> &'static str {
        "showrooms"
    }
}

impl Listable for Client {
    fn id(&self) -> &str {
        &self.id
    }

    fn matches(&self, needle: &str) -> bool {
        contains(&self.name, needle)
            || contains(&self.slug, needle)
            || self.email.as_deref().is_some_and(|e| contains(e, needle))
    }

    fn noun() -> &'static str {
        "clients"
    }
}

impl Listable for Role {
    fn id(&self) -> &str {
        &self.id
    }

    fn matches(&self, needle: &str) -> bool {
        contains(&self.code, needle) || contains(&self.name, needle)
    }

    fn noun() -> &'static str {
        "roles"
    }
}

impl Listable for Notification {
    fn id(&self) -> &str {
        &self.id
    }

    fn matches(&self, needle: &str) -> bool {
        contains(&self.title, needle) || contains(&self.message, needle)
    }

    fn noun() -> &'static str {
        "notifications"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn role(id: &str, code: &str) -> Role {
        serde_json::from_value(json!({ "id": id, "code": code, "name": code })).unwrap()
    }

    #[test]
    fn test_failed_fetch_keeps_records() {
        let mut view = ListView::<Role>::default();
        view.begin_fetch();
        assert!(view.apply_fetch(Ok(vec![role("1", "OWNER")])).is_none());

        view.begin_fetch();
        let notice = view
            .apply_fetch(Err(DomainError::Network("timeout".into())))
            .unwrap();
        assert!(notice.message.starts_with("Failed to load roles"));
        assert_eq!(view.records().len(), 1);
        assert!(!view.is_loading());
    }

    #[test]
    fn test_last_successful_fetch_wins() {
        let mut view = ListView::<Role>::default();
        view.apply_fetch(Ok(vec![role("1", "A")]));
        view.apply_fetch(Ok(vec![role("2", "B"), role("3", "C")]));
        assert_eq!(view.records().len(), 2);
        assert!(view.find("1").is_none());
    }

    #[test]
    fn test_prepend_replace_remove() {
        let mut view = ListView::<Role>::default();
        view.apply_fetch(Ok(vec![role("1", "A")]));
        view.prepend(role("2", "B"));
        assert_eq!(view.records()[0].id, "2");

        assert!(view.replace(role("1", "Z")));
        assert_eq!(view.find("1").unwrap().code, "Z");
        assert!(!view.replace(role("9", "X")));

        assert!(view.remove_by_id("2").is_some());
        assert!(view.remove_by_id("2").is_none());
    }

    #[test]
    fn test_search_and_pagination() {
        let mut view = ListView::<Role>::new(Pagination::new(1, 2));
        view.apply_fetch(Ok(vec![
            role("1", "OWNER"),
            role("2", "STAFF"),
            role("3", "STAFF_LEAD"),
            role("4", "VIEWER"),
        ]));

        let first = view.visible();
        assert_eq!(first.total, 4);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.items.len(), 2);

        view.set_page(2);
        assert_eq!(view.visible().items[0].id, "3");

        view.set_query("  Staff ");
        let page = view.visible();
        assert_eq!(page.page, 1);
        assert_eq!(page.total, 2);

        view.set_page(10);
        assert_eq!(view.visible().page, 1);
    }
}
