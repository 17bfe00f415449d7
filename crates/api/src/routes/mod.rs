pub mod contact;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (everything except `/health`).
///
/// Route hierarchy:
///
/// ```text
/// /contacts            list (GET), create (POST)
/// /contacts/{id}       delete (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/contacts", contact::router())
}
