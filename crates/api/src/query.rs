//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Pagination parameters (`?page=&limit=`), captured as raw strings.
///
/// Captured raw to keep the lenient contract: values that fail to parse as
/// integers fall back to the defaults instead of rejecting the request.
/// Resolution happens in `rolodex_core::pagination`.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}
