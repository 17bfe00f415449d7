//! Handlers for the `/contacts` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use rolodex_core::contact::validate_contact_fields;
use rolodex_core::error::CoreError;
use rolodex_core::pagination::PageRequest;
use rolodex_core::types::DbId;
use rolodex_db::models::contact::{Contact, ContactPage, CreateContact};
use rolodex_db::repositories::ContactRepo;

use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::state::AppState;

/// POST /contacts
///
/// Validates fields (name, then email, then phone) before touching the
/// store; the first failing rule is reported and nothing is persisted.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateContact>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Contact>)> {
    // Malformed or wrongly-typed bodies are 400s, not 422s.
    let Json(input) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    validate_contact_fields(&input.name, &input.email, &input.phone)?;

    let contact = ContactRepo::create(&state.pool, &input).await?;
    tracing::info!(contact_id = contact.id, "Contact created");
    Ok((StatusCode::CREATED, Json(contact)))
}

/// GET /contacts?page=&limit=
///
/// Both parameters are optional; non-numeric values fall back to the
/// defaults and out-of-range values are clamped.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<ContactPage>> {
    let request = PageRequest::from_raw(params.page.as_deref(), params.limit.as_deref());
    let page = ContactRepo::list(&state.pool, request.limit, request.offset()).await?;
    Ok(Json(page))
}

/// DELETE /contacts/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ContactRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(contact_id = id, "Contact deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Contact",
            id,
        }))
    }
}
