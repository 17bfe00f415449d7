//! Local view state for one page of contacts.
//!
//! Holds what a front end needs to render: the current page of contacts,
//! the server's total row count, and the pager derived from them.
//! Mutations are applied optimistically; [`crate::book::ContactBook`]
//! re-fetches afterwards so the view converges to server truth.

use rolodex_core::pagination::{self, clamp_page_size};
use rolodex_core::types::DbId;
use rolodex_db::models::contact::{Contact, ContactPage};

/// Local, optimistically updated view of one page of contacts.
#[derive(Debug, Clone)]
pub struct ContactListView {
    /// Contacts on the current page, in display order.
    pub contacts: Vec<Contact>,
    /// Total contacts across the whole store, per the last fetch.
    pub total: i64,
    /// Current 1-based page number.
    pub page: i64,
    /// Page size used for fetches and pager math.
    pub limit: i64,
}

impl ContactListView {
    /// Create an empty view positioned at page 1.
    pub fn new(limit: i64) -> Self {
        Self {
            contacts: Vec::new(),
            total: 0,
            page: pagination::DEFAULT_PAGE,
            limit: clamp_page_size(Some(limit)),
        }
    }

    /// Replace the view with a freshly fetched page.
    pub fn apply_page(&mut self, page_number: i64, page: ContactPage) {
        self.page = page_number;
        self.contacts = page.contacts;
        self.total = page.total;
    }

    /// Optimistically apply a confirmed create: prepend the new contact
    /// and bump the local total.
    pub fn apply_created(&mut self, contact: Contact) {
        self.contacts.insert(0, contact);
        self.total += 1;
    }

    /// Optimistically apply a confirmed delete: drop the matching contact
    /// and decrement the local total.
    ///
    /// Returns whether the id was on this page. The total is decremented
    /// either way, since the server confirmed a row was removed.
    pub fn apply_deleted(&mut self, id: DbId) -> bool {
        let before = self.contacts.len();
        self.contacts.retain(|c| c.id != id);
        let removed = self.contacts.len() < before;
        self.total = (self.total - 1).max(0);
        removed
    }

    /// Pages needed to show the current total at the current page size.
    pub fn total_pages(&self) -> i64 {
        pagination::total_pages(self.total, self.limit)
    }

    /// Whether the pager's "Prev" control is enabled.
    pub fn has_prev(&self) -> bool {
        pagination::has_prev(self.page)
    }

    /// Whether the pager's "Next" control is enabled.
    pub fn has_next(&self) -> bool {
        pagination::has_next(self.page, self.total_pages())
    }

    /// The page this view should land on if the current page has fallen
    /// past the end (e.g. the last row of the last page was deleted).
    pub fn reconciled_page(&self) -> i64 {
        let last = self.total_pages();
        if last > 0 && self.page > last {
            last
        } else {
            self.page.max(1)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
