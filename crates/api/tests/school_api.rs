//! Integration tests for school CRUD: slug handling, normalization,
//! soft delete and the filtered listing endpoint.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, build_test_app, get, request_empty, request_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: creating a school derives a slug and normalizes contacts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_school_derives_slug_and_normalizes(pool: PgPool) {
    let app = build_test_app(pool);

    let response = request_json(
        app,
        Method::POST,
        "/api/v1/schools",
        json!({
            "name_uz": "Cambridge School",
            "phone": " +998-90-123-45-67 ",
            "website": "cambridge.uz",
            "instagram": "https://instagram.com/cambridge_uz",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let school = body_json(response).await;
    assert_eq!(school["slug"], "cambridge-school");
    assert_eq!(school["phone"], "+998901234567");
    assert_eq!(school["website"], "https://cambridge.uz");
    assert_eq!(school["instagram"], "cambridge_uz");
    assert_eq!(school["status"], "draft");
}

// ---------------------------------------------------------------------------
// Test: slug collisions get numeric suffixes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_names_get_suffixed_slugs(pool: PgPool) {
    let payload = json!({ "name_uz": "Cambridge School", "phone": "+998901234567" });

    let first = request_json(
        build_test_app(pool.clone()),
        Method::POST,
        "/api/v1/schools",
        payload.clone(),
    )
    .await;
    let second = request_json(
        build_test_app(pool.clone()),
        Method::POST,
        "/api/v1/schools",
        payload.clone(),
    )
    .await;
    let third = request_json(
        build_test_app(pool),
        Method::POST,
        "/api/v1/schools",
        payload,
    )
    .await;

    assert_eq!(body_json(first).await["slug"], "cambridge-school");
    assert_eq!(body_json(second).await["slug"], "cambridge-school-2");
    assert_eq!(body_json(third).await["slug"], "cambridge-school-3");
}

// ---------------------------------------------------------------------------
// Test: explicit slugs also go through collision resolution
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn explicit_duplicate_slug_gets_suffix(pool: PgPool) {
    let first = request_json(
        build_test_app(pool.clone()),
        Method::POST,
        "/api/v1/schools",
        json!({ "name_uz": "First", "slug": "taken" }),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = request_json(
        build_test_app(pool),
        Method::POST,
        "/api/v1/schools",
        json!({ "name_uz": "Second", "slug": "taken" }),
    )
    .await;
    // Suffix resolution avoids the conflict.
    assert_eq!(second.status(), StatusCode::CREATED);
    assert_eq!(body_json(second).await["slug"], "taken-2");
}

// ---------------------------------------------------------------------------
// Test: lookup by id, slug, and 404 for missing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn get_by_id_and_slug(pool: PgPool) {
    let created = request_json(
        build_test_app(pool.clone()),
        Method::POST,
        "/api/v1/schools",
        json!({ "name_uz": "Lookup School" }),
    )
    .await;
    let school = body_json(created).await;
    let id = school["id"].as_i64().unwrap();

    let by_id = get(build_test_app(pool.clone()), &format!("/api/v1/schools/{id}")).await;
    assert_eq!(by_id.status(), StatusCode::OK);

    let by_slug = get(
        build_test_app(pool.clone()),
        "/api/v1/schools/slug/lookup-school",
    )
    .await;
    assert_eq!(by_slug.status(), StatusCode::OK);
    assert_eq!(body_json(by_slug).await["id"].as_i64(), Some(id));

    let missing = get(build_test_app(pool.clone()), "/api/v1/schools/999999").await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    let json = body_json(missing).await;
    assert_eq!(json["code"], "NOT_FOUND");

    // A miss by slug is a 404 too, not a malformed request.
    let missing_slug = get(build_test_app(pool), "/api/v1/schools/slug/no-such-school").await;
    assert_eq!(missing_slug.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(missing_slug).await["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Test: soft delete hides, restore brings back
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_and_restore_roundtrip(pool: PgPool) {
    let created = request_json(
        build_test_app(pool.clone()),
        Method::POST,
        "/api/v1/schools",
        json!({ "name_uz": "Transient" }),
    )
    .await;
    let id = body_json(created).await["id"].as_i64().unwrap();

    let deleted = request_empty(
        build_test_app(pool.clone()),
        Method::DELETE,
        &format!("/api/v1/schools/{id}"),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let hidden = get(build_test_app(pool.clone()), &format!("/api/v1/schools/{id}")).await;
    assert_eq!(hidden.status(), StatusCode::NOT_FOUND);

    let restored = request_empty(
        build_test_app(pool.clone()),
        Method::POST,
        &format!("/api/v1/schools/{id}/restore"),
    )
    .await;
    assert_eq!(restored.status(), StatusCode::NO_CONTENT);

    let visible = get(build_test_app(pool), &format!("/api/v1/schools/{id}")).await;
    assert_eq!(visible.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Test: invalid status value is rejected
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_status_is_rejected(pool: PgPool) {
    let created = request_json(
        build_test_app(pool.clone()),
        Method::POST,
        "/api/v1/schools",
        json!({ "name_uz": "Status School" }),
    )
    .await;
    let id = body_json(created).await["id"].as_i64().unwrap();

    let response = request_json(
        build_test_app(pool.clone()),
        Method::PUT,
        &format!("/api/v1/schools/{id}/status"),
        json!({ "status": "archived" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let ok = request_json(
        build_test_app(pool),
        Method::PUT,
        &format!("/api/v1/schools/{id}/status"),
        json!({ "status": "published" }),
    )
    .await;
    assert_eq!(ok.status(), StatusCode::OK);
    assert_eq!(body_json(ok).await["status"], "published");
}

// ---------------------------------------------------------------------------
// Test: listing applies query-string filters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn listing_filters_by_district(pool: PgPool) {
    for (name, district) in [("Chilonzor School", 2), ("Yunusobod School", 11)] {
        let created = request_json(
            build_test_app(pool.clone()),
            Method::POST,
            "/api/v1/schools",
            json!({ "name_uz": name, "region_id": 1, "district_id": district }),
        )
        .await;
        let id = body_json(created).await["id"].as_i64().unwrap();

        // Listing requires a details row and published status.
        request_json(
            build_test_app(pool.clone()),
            Method::PUT,
            &format!("/api/v1/schools/{id}/details"),
            json!({ "accepted_grades": [1, 2, 3] }),
        )
        .await;
        request_json(
            build_test_app(pool.clone()),
            Method::PUT,
            &format!("/api/v1/schools/{id}/status"),
            json!({ "status": "published" }),
        )
        .await;
    }

    let all = get(build_test_app(pool.clone()), "/api/v1/schools").await;
    let all = body_json(all).await;
    assert_eq!(all["data"].as_array().unwrap().len(), 2);

    let filtered = get(
        build_test_app(pool),
        "/api/v1/schools?region=1&districts=2",
    )
    .await;
    let filtered = body_json(filtered).await;
    let data = filtered["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name_uz"], "Chilonzor School");
}
