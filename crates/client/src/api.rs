//! REST API client for the contacts HTTP endpoints.
//!
//! Wraps the contacts API (create, paginated list, delete) using
//! [`reqwest`].

use rolodex_core::types::DbId;
use rolodex_db::models::contact::{Contact, ContactPage, CreateContact};

/// HTTP client for a single Rolodex API server.
pub struct ContactsApi {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the contacts REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("server returned {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// The server's error message, taken from the `error` field of the
        /// JSON body when present, otherwise the raw body text.
        message: String,
    },
}

impl ApiError {
    /// Whether this is the server's 404 "not found" response.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Api { status: 404, .. })
    }
}

impl ContactsApi {
    /// Create a new API client.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `http://127.0.0.1:5000`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch one page of contacts.
    ///
    /// Sends a `GET /contacts?page=&limit=` request.
    pub async fn list_contacts(&self, page: i64, limit: i64) -> Result<ContactPage, ApiError> {
        let response = self
            .client
            .get(format!("{}/contacts", self.base_url))
            .query(&[("page", page), ("limit", limit)])
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Create a contact, returning the stored row with its assigned id.
    ///
    /// Sends a `POST /contacts` request.
    pub async fn create_contact(&self, input: &CreateContact) -> Result<Contact, ApiError> {
        let response = self
            .client
            .post(format!("{}/contacts", self.base_url))
            .json(input)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Delete a contact by id.
    ///
    /// Sends a `DELETE /contacts/{id}` request.
    pub async fn delete_contact(&self, id: DbId) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(format!("{}/contacts/{}", self.base_url, id))
            .send()
            .await?;

        Self::check_status(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or an [`ApiError::Api`] carrying the server's
    /// error message on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
                .unwrap_or(body);
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Assert the response has a success status code, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), ApiError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}
