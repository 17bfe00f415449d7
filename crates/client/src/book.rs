//! Contact book session: ties the API client to the local view.
//!
//! Mutations follow a confirm-then-reconcile flow: the request goes to the
//! server first, the optimistic update is applied only after the server
//! confirms, and the current page is then re-fetched so the view matches
//! server truth (including rows other than the mutated one).

use rolodex_core::contact::validate_contact_fields;
use rolodex_core::error::CoreError;
use rolodex_core::types::DbId;
use rolodex_db::models::contact::{Contact, CreateContact};

use crate::api::{ApiError, ContactsApi};
use crate::view::ContactListView;

/// Errors surfaced to the user by [`ContactBook`] operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Input failed the shared field rules; no request was sent.
    #[error(transparent)]
    Invalid(#[from] CoreError),

    /// The API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// A stateful contact-book session: one page of contacts plus the
/// operations a front end exposes.
pub struct ContactBook {
    api: ContactsApi,
    pub view: ContactListView,
}

impl ContactBook {
    /// Create a session with an empty view. Call [`Self::load_page`] to
    /// fetch the first page.
    pub fn new(api: ContactsApi, limit: i64) -> Self {
        Self {
            api,
            view: ContactListView::new(limit),
        }
    }

    /// Fetch `page` and replace the local view with the result.
    ///
    /// On failure the view is left untouched, so the prior page stays
    /// displayed; the caller decides how loudly to report the error.
    pub async fn load_page(&mut self, page: i64) -> Result<(), ApiError> {
        let page = page.max(1);
        let fetched = self.api.list_contacts(page, self.view.limit).await?;
        self.view.apply_page(page, fetched);
        Ok(())
    }

    /// Move to the next page. Returns `false` without a request if the
    /// pager is already on the last page.
    pub async fn next_page(&mut self) -> Result<bool, ApiError> {
        if !self.view.has_next() {
            return Ok(false);
        }
        self.load_page(self.view.page + 1).await?;
        Ok(true)
    }

    /// Move to the previous page. Returns `false` without a request if the
    /// pager is already on the first page.
    pub async fn prev_page(&mut self) -> Result<bool, ApiError> {
        if !self.view.has_prev() {
            return Ok(false);
        }
        self.load_page(self.view.page - 1).await?;
        Ok(true)
    }

    /// Validate and create a contact.
    ///
    /// The shared field rules run first, so invalid input never leaves the
    /// client. On success the new contact is applied to the local view
    /// immediately, then the current page is re-fetched.
    pub async fn add(&mut self, name: &str, email: &str, phone: &str) -> Result<Contact, ClientError> {
        validate_contact_fields(name, email, phone)?;

        let input = CreateContact {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        };
        let created = self.api.create_contact(&input).await?;
        self.view.apply_created(created.clone());
        self.refresh().await;
        Ok(created)
    }

    /// Delete a contact by id.
    ///
    /// The local view is only touched after the server confirms the
    /// delete; afterwards the current page is re-fetched, snapping back a
    /// page if the delete emptied the last one.
    pub async fn remove(&mut self, id: DbId) -> Result<(), ClientError> {
        self.api.delete_contact(id).await?;
        self.view.apply_deleted(id);
        self.refresh().await;
        Ok(())
    }

    /// Re-fetch the current page, snapping to the last page if the current
    /// one has fallen past the end.
    ///
    /// A failed re-fetch is logged, not surfaced: the mutation that
    /// triggered it already succeeded, and the optimistic view is a usable
    /// stand-in until the next successful read.
    async fn refresh(&mut self) {
        if let Err(err) = self.load_page(self.view.page).await {
            tracing::warn!(error = %err, "Page refresh failed, keeping optimistic view");
            return;
        }
        let snapped = self.view.reconciled_page();
        if snapped != self.view.page {
            if let Err(err) = self.load_page(snapped).await {
                tracing::warn!(error = %err, "Page snap-back failed, keeping fetched view");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
