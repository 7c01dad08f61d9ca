//! Integration tests for the section save endpoint: validation gating,
//! normalization, per-section persistence and progress recording.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, build_test_app, get, request_json};
use serde_json::json;
use sqlx::PgPool;

async fn create_school(pool: &PgPool, name: &str) -> i64 {
    let response = request_json(
        build_test_app(pool.clone()),
        Method::POST,
        "/api/v1/schools",
        json!({ "name_uz": name }),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Test: a valid basic save persists and reports progress
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn valid_basic_save_persists_and_scores(pool: PgPool) {
    let id = create_school(&pool, "Editor School").await;

    let response = request_json(
        build_test_app(pool.clone()),
        Method::PATCH,
        &format!("/api/v1/schools/{id}/sections/basic"),
        json!({
            "name_uz": "Editor School",
            "phone": "+998 (90) 123-45-67",
            "address": "Chilonzor, Tashkent",
            "school_type": "private",
            "website": "editor.uz",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let saved = body_json(response).await;
    assert_eq!(saved["section"], "basic");
    assert!(saved["progress"].as_u64().unwrap() >= 55);
    assert!(saved["saved_at"].is_string());

    // The normalized values landed on the organization.
    let school = body_json(get(build_test_app(pool.clone()), &format!("/api/v1/schools/{id}")).await).await;
    assert_eq!(school["phone"], "+998901234567");
    assert_eq!(school["website"], "https://editor.uz");

    // The school type landed on the details record.
    let details =
        body_json(get(build_test_app(pool), &format!("/api/v1/schools/{id}/details")).await).await;
    assert_eq!(details["school_type"], "private");
}

// ---------------------------------------------------------------------------
// Test: an invalid form returns 422 with field errors, persisting nothing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_form_returns_422_and_persists_nothing(pool: PgPool) {
    let id = create_school(&pool, "Strict School").await;

    let response = request_json(
        build_test_app(pool.clone()),
        Method::PATCH,
        &format!("/api/v1/schools/{id}/sections/basic"),
        json!({ "school_type": "montessori" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    let errors = body["errors"].as_array().unwrap();
    let fields: Vec<&str> = errors.iter().map(|e| e["field"].as_str().unwrap()).collect();
    assert!(fields.contains(&"name_uz"));
    assert!(fields.contains(&"phone"));
    assert!(fields.contains(&"school_type"));

    // The failed save left the organization untouched.
    let school = body_json(get(build_test_app(pool.clone()), &format!("/api/v1/schools/{id}")).await).await;
    assert_eq!(school["name_uz"], "Strict School");

    // And recorded no progress.
    let progress =
        body_json(get(build_test_app(pool), &format!("/api/v1/schools/{id}/sections")).await).await;
    assert_eq!(progress.as_array().unwrap().len(), 0);
}

// ---------------------------------------------------------------------------
// Test: unknown section name is a 400
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_section_is_bad_request(pool: PgPool) {
    let id = create_school(&pool, "Section School").await;

    let response = request_json(
        build_test_app(pool),
        Method::PATCH,
        &format!("/api/v1/schools/{id}/sections/finances"),
        json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: education save writes details with derived projections
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn education_save_derives_projections(pool: PgPool) {
    let id = create_school(&pool, "Grades School").await;

    let response = request_json(
        build_test_app(pool.clone()),
        Method::PATCH,
        &format!("/api/v1/schools/{id}/sections/education"),
        json!({
            "accepted_grades": [0, 1, 2, 3, 4],
            "primary_languages": ["uzbek"],
            "specializations": ["mathematics"],
            "pricing_tiers": [
                { "grades": [0, 1, 2], "price": 2000000 },
                { "grades": [3, 4], "price": 2800000 }
            ],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let details =
        body_json(get(build_test_app(pool), &format!("/api/v1/schools/{id}/details")).await).await;
    assert_eq!(details["grade_from"], 0);
    assert_eq!(details["grade_to"], 4);
    assert_eq!(details["price_min"], 2000000);
    assert_eq!(details["price_max"], 2800000);
    assert_eq!(details["specializations"], json!(["mathematics"]));
}

// ---------------------------------------------------------------------------
// Test: tier referencing an unaccepted grade is rejected
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn tier_outside_accepted_grades_is_rejected(pool: PgPool) {
    let id = create_school(&pool, "Tier School").await;

    let response = request_json(
        build_test_app(pool),
        Method::PATCH,
        &format!("/api/v1/schools/{id}/sections/education"),
        json!({
            "accepted_grades": [1, 2, 3],
            "primary_languages": ["uzbek"],
            "pricing_tiers": [{ "grades": [5], "price": 2000000 }],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors[0]["field"], "pricing_tiers[0].grades");
}

// ---------------------------------------------------------------------------
// Test: teachers and media saves land in their child tables
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn teachers_and_media_saves_replace_children(pool: PgPool) {
    let id = create_school(&pool, "Full School").await;

    let teachers = request_json(
        build_test_app(pool.clone()),
        Method::PATCH,
        &format!("/api/v1/schools/{id}/sections/teachers"),
        json!({
            "teachers": [
                { "full_name": "Dilnoza Karimova", "position": "Director" },
                { "full_name": "Aziz Rahimov" }
            ]
        }),
    )
    .await;
    assert_eq!(teachers.status(), StatusCode::OK);

    let staff = body_json(get(build_test_app(pool.clone()), &format!("/api/v1/schools/{id}/staff")).await).await;
    assert_eq!(staff.as_array().unwrap().len(), 2);

    let media = request_json(
        build_test_app(pool.clone()),
        Method::PATCH,
        &format!("/api/v1/schools/{id}/sections/media"),
        json!({
            "photos": [{ "url": "/img/a.jpg", "is_cover": true }],
            "logo_url": "/img/logo.png"
        }),
    )
    .await;
    assert_eq!(media.status(), StatusCode::OK);

    let items = body_json(get(build_test_app(pool.clone()), &format!("/api/v1/schools/{id}/media")).await).await;
    assert_eq!(items.as_array().unwrap().len(), 2);

    // Both sections now have progress rows.
    let progress =
        body_json(get(build_test_app(pool), &format!("/api/v1/schools/{id}/sections")).await).await;
    let sections: Vec<&str> = progress
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["section"].as_str().unwrap())
        .collect();
    assert_eq!(sections, vec!["media", "teachers"]);
}
