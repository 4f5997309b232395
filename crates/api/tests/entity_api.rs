//! HTTP-level integration tests for the localized-entity endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, post_json, put_bytes, put_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Base-record CRUD
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_category_returns_201() {
    let app = build_test_app();
    let response = post_json(
        app,
        "/api/v1/categories",
        json!({"CategoryLink": "tech"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["category"]["CategoryLink"], "tech");
    assert!(body["category"]["CategoryID"].is_number());
    assert_eq!(body["message"], "Category created successfully");
}

#[tokio::test]
async fn test_duplicate_link_returns_409() {
    let app = build_test_app();
    post_json(app.clone(), "/api/v1/categories", json!({"CategoryLink": "tech"})).await;

    let response = post_json(app, "/api/v1/categories", json!({"CategoryLink": "tech"})).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["code"], "DUPLICATE");
}

#[tokio::test]
async fn test_invalid_link_format_returns_400() {
    let app = build_test_app();
    let response = post_json(
        app,
        "/api/v1/categories",
        json!({"CategoryLink": "tech news!"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "INVALID_FORMAT");
}

#[tokio::test]
async fn test_unknown_payload_field_returns_400() {
    let app = build_test_app();
    let response = post_json(
        app,
        "/api/v1/countries",
        json!({"CountryLink": "us", "CountryColor": "blue"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "INVALID_FIELD");
}

#[tokio::test]
async fn test_unknown_entity_slug_returns_404() {
    let app = build_test_app();
    let response = get(app, "/api/v1/widgets").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_get_nonexistent_category_returns_404() {
    let app = build_test_app();
    let response = get(app, "/api/v1/categories/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_reports_message() {
    let app = build_test_app();
    let empty = body_json(get(app.clone(), "/api/v1/industries").await).await;
    assert_eq!(empty["industries"].as_array().unwrap().len(), 0);
    assert_eq!(empty["message"], "No industries found");

    post_json(
        app.clone(),
        "/api/v1/industries",
        json!({"IndustryLink": "software"}),
    )
    .await;
    let listed = body_json(get(app, "/api/v1/industries").await).await;
    assert_eq!(listed["industries"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_link_revalidates() {
    let app = build_test_app();
    let created = body_json(
        post_json(app.clone(), "/api/v1/categories", json!({"CategoryLink": "tech"})).await,
    )
    .await;
    let id = created["category"]["CategoryID"].as_i64().unwrap();
    post_json(app.clone(), "/api/v1/categories", json!({"CategoryLink": "finance"})).await;

    let response = put_json(
        app.clone(),
        &format!("/api/v1/categories/{id}"),
        json!({"CategoryLink": "finance"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = put_json(
        app,
        &format!("/api/v1/categories/{id}"),
        json!({"CategoryLink": "technology"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["category"]["CategoryLink"], "technology");
}

// ---------------------------------------------------------------------------
// Translations
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_translation_lifecycle() {
    let app = build_test_app();
    let created = body_json(
        post_json(app.clone(), "/api/v1/categories", json!({"CategoryLink": "tech"})).await,
    )
    .await;
    let id = created["category"]["CategoryID"].as_i64().unwrap();

    // Create.
    let response = post_json(
        app.clone(),
        &format!("/api/v1/categories/{id}/translations"),
        json!({"CategoryName": "Technology", "LanguageID": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    let translation_id = body["translation"]["CategoryTranslationID"].as_i64().unwrap();

    // Same language again conflicts.
    let response = post_json(
        app.clone(),
        &format!("/api/v1/categories/{id}/translations"),
        json!({"CategoryName": "Technologie", "LanguageID": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "DUPLICATE_TRANSLATION");

    // A different language succeeds.
    let response = post_json(
        app.clone(),
        &format!("/api/v1/categories/{id}/translations"),
        json!({"CategoryName": "Technologie", "LanguageID": 2}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // LanguageID is immutable, even with the current value.
    let response = put_json(
        app.clone(),
        &format!("/api/v1/categories/{id}/translations/{translation_id}"),
        json!({"LanguageID": 1, "CategoryName": "Tech"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "IMMUTABLE_FIELD");

    // Plain rename works.
    let response = put_json(
        app.clone(),
        &format!("/api/v1/categories/{id}/translations/{translation_id}"),
        json!({"CategoryName": "Tech"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Delete one translation.
    let response = delete(
        app.clone(),
        &format!("/api/v1/categories/{id}/translations/{translation_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let read = body_json(get(app, &format!("/api/v1/categories/{id}")).await).await;
    assert_eq!(read["translations"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_category_cascades_translations() {
    let app = build_test_app();
    let created = body_json(
        post_json(app.clone(), "/api/v1/categories", json!({"CategoryLink": "tech"})).await,
    )
    .await;
    let id = created["category"]["CategoryID"].as_i64().unwrap();
    for (name, language) in [("Technology", 1), ("Technologie", 2)] {
        post_json(
            app.clone(),
            &format!("/api/v1/categories/{id}/translations"),
            json!({"CategoryName": name, "LanguageID": language}),
        )
        .await;
    }

    let response = delete(app.clone(), &format!("/api/v1/categories/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(app, &format!("/api/v1/categories/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_localized_view_uses_placeholders() {
    let app = build_test_app();
    let created = body_json(
        post_json(app.clone(), "/api/v1/categories", json!({"CategoryLink": "tech"})).await,
    )
    .await;
    let id = created["category"]["CategoryID"].as_i64().unwrap();

    let view = body_json(get(app, &format!("/api/v1/categories/{id}/localized/2")).await).await;
    assert_eq!(
        view["Category"]["Translation"],
        "Translation not available for the selected language"
    );
    assert_eq!(view["Category"]["Language"]["LanguageCode"], "de");
}

// ---------------------------------------------------------------------------
// OG images
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_og_image_upload() {
    let app = build_test_app();
    let created = body_json(
        post_json(app.clone(), "/api/v1/charities", json!({"CharityLink": "redcross"})).await,
    )
    .await;
    let id = created["charity"]["CharityID"].as_i64().unwrap();

    let response = put_bytes(
        app.clone(),
        &format!("/api/v1/charities/{id}/og-image"),
        "image/png",
        b"png-bytes",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["charity"]["OgImage"], format!("charities/{id}.png"));

    // Unsupported content type is rejected.
    let response = put_bytes(
        app,
        &format!("/api/v1/charities/{id}/og-image"),
        "text/plain",
        b"nope",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_og_image_rejected_for_unsupported_entity() {
    let app = build_test_app();
    let created = body_json(
        post_json(app.clone(), "/api/v1/countries", json!({"CountryLink": "us"})).await,
    )
    .await;
    let id = created["country"]["CountryID"].as_i64().unwrap();

    let response = put_bytes(
        app,
        &format!("/api/v1/countries/{id}/og-image"),
        "image/png",
        b"png-bytes",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Error response format / health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_error_response_has_code_and_error_fields() {
    let app = build_test_app();
    let response = get(app, "/api/v1/categories/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert!(body["error"].is_string(), "Error response should have 'error' field");
    assert!(body["code"].is_string(), "Error response should have 'code' field");
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = build_test_app();
    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db_healthy"], true);
}
