//! HTTP-level integration tests for the contacts API.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, post_raw};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn contact_json(name: &str, email: &str, phone: &str) -> serde_json::Value {
    serde_json::json!({"name": name, "email": email, "phone": phone})
}

/// Seed `count` contacts through the API, named `Contact 0..count`.
async fn seed_contacts(pool: &SqlitePool, count: usize) {
    for i in 0..count {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            "/contacts",
            contact_json(
                &format!("Contact {i}"),
                &format!("contact{i}@example.com"),
                "5550000000",
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}

// ---------------------------------------------------------------------------
// POST /contacts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_contact_returns_201(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/contacts",
        contact_json("Ada Lovelace", "ada@example.com", "0123456789"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Ada Lovelace");
    assert_eq!(json["email"], "ada@example.com");
    assert_eq!(json["phone"], "0123456789");
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_with_empty_name_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/contacts", contact_json("", "x@y.z", "1234567890")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("Name"));

    // Nothing was persisted.
    let app = common::build_test_app(pool);
    let list = body_json(get(app, "/contacts").await).await;
    assert_eq!(list["total"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_with_invalid_email_returns_400(pool: SqlitePool) {
    for email in ["no-at-sign", "a@b", "a b@example.com", ""] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/contacts", contact_json("Ada", email, "1234567890")).await;

        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "email {email:?} should be rejected"
        );
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_with_invalid_phone_returns_400(pool: SqlitePool) {
    for phone in ["12345", "12345678901", "12345abcde", "123-456-7890"] {
        let app = common::build_test_app(pool.clone());
        let response =
            post_json(app, "/contacts", contact_json("Ada", "ada@example.com", phone)).await;

        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "phone {phone:?} should be rejected"
        );
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_with_missing_fields_reports_first_field(pool: SqlitePool) {
    // Absent fields deserialize as empty strings, so the name rule fires
    // first and the error names the field.
    let app = common::build_test_app(pool);
    let response = post_json(app, "/contacts", serde_json::json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("Name"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_with_malformed_json_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_raw(app, "/contacts", "{not json").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_with_wrong_typed_field_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/contacts",
        serde_json::json!({"name": 42, "email": "x@y.z", "phone": "1234567890"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// GET /contacts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_empty_store(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/contacts").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["contacts"].as_array().unwrap().len(), 0);
    assert_eq!(json["total"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_defaults_to_first_five(pool: SqlitePool) {
    seed_contacts(&pool, 7).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/contacts").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let contacts = json["contacts"].as_array().unwrap();
    assert_eq!(contacts.len(), 5);
    assert_eq!(json["total"], 7);
    assert_eq!(contacts[0]["name"], "Contact 0");
    assert_eq!(contacts[4]["name"], "Contact 4");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_pages_with_explicit_page_and_limit(pool: SqlitePool) {
    seed_contacts(&pool, 3).await;

    let app = common::build_test_app(pool.clone());
    let first = body_json(get(app, "/contacts?page=1&limit=2").await).await;
    let contacts = first["contacts"].as_array().unwrap();
    assert_eq!(contacts.len(), 2);
    assert_eq!(first["total"], 3);
    assert_eq!(contacts[0]["name"], "Contact 0");
    assert_eq!(contacts[1]["name"], "Contact 1");

    let app = common::build_test_app(pool);
    let second = body_json(get(app, "/contacts?page=2&limit=2").await).await;
    let contacts = second["contacts"].as_array().unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(second["total"], 3);
    assert_eq!(contacts[0]["name"], "Contact 2");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_with_non_numeric_params_uses_defaults(pool: SqlitePool) {
    seed_contacts(&pool, 7).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/contacts?page=abc&limit=xyz").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["contacts"].as_array().unwrap().len(), 5);
    assert_eq!(json["total"], 7);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_clamps_out_of_range_params(pool: SqlitePool) {
    seed_contacts(&pool, 3).await;

    // page=0 clamps to 1.
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/contacts?page=0&limit=2").await).await;
    assert_eq!(json["contacts"][0]["name"], "Contact 0");

    // limit=0 clamps to 1.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/contacts?limit=0").await).await;
    assert_eq!(json["contacts"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_page_past_the_end_is_empty(pool: SqlitePool) {
    seed_contacts(&pool, 3).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/contacts?page=5&limit=2").await).await;
    assert_eq!(json["contacts"].as_array().unwrap().len(), 0);
    assert_eq!(json["total"], 3);
}

// ---------------------------------------------------------------------------
// DELETE /contacts/{id}
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_contact_returns_204(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/contacts",
            contact_json("Delete Me", "del@example.com", "5551234567"),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/contacts/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The row is gone.
    let app = common::build_test_app(pool);
    let list = body_json(get(app, "/contacts").await).await;
    assert_eq!(list["total"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_same_contact_twice_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/contacts",
            contact_json("Once", "once@example.com", "5551234567"),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    assert_eq!(
        delete(app, &format!("/contacts/{id}")).await.status(),
        StatusCode::NO_CONTENT
    );

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/contacts/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_unknown_id_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/contacts/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_non_numeric_id_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/contacts/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Error payload shape
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_error_payload_has_error_and_code_fields(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/contacts", contact_json("", "", "")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].is_string());
    assert!(json["code"].is_string());
}
