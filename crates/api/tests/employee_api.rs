//! HTTP-level integration tests for the employee endpoints and demo
//! seeding.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, build_test_app, delete, get, post_json, put_json};
use serde_json::{json, Value};

/// Seed demo data (categories, job titles, ...) and return the id of the
/// "tech" category.
async fn seed_and_tech_category(app: &Router) -> i64 {
    let response = post_json(app.clone(), "/api/v1/admin/seed", json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let listed = body_json(get(app.clone(), "/api/v1/categories").await).await;
    listed["categories"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["CategoryLink"] == "tech")
        .expect("seeded tech category")["CategoryID"]
        .as_i64()
        .unwrap()
}

/// Resolve a seeded job title id by code.
async fn job_title_id(app: &Router, code: &str) -> i64 {
    let listed = body_json(get(app.clone(), "/api/v1/employee-job-titles").await).await;
    listed["employeeJobTitles"]
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["EmployeeJobTitleCode"] == code)
        .expect("seeded job title")["EmployeeJobTitleID"]
        .as_i64()
        .unwrap()
}

fn employee_payload(category_id: i64) -> Value {
    json!({
        "EmployeeLink": "jane-doe",
        "LanguageID": 1,
        "CategoryID": category_id,
        "EmployeeName": "Jane Doe",
        "EmployeeLinkedIn": "in/jane-doe",
    })
}

#[tokio::test]
async fn test_create_employee_gets_hired_title() {
    let app = build_test_app();
    let category_id = seed_and_tech_category(&app).await;
    let hired = job_title_id(&app, "HIRED").await;

    let response = post_json(app, "/api/v1/employees", employee_payload(category_id)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["employee"]["EmployeeActive"], true);
    assert_eq!(body["employee"]["EmployeeJobTitleID"], hired);
}

#[tokio::test]
async fn test_create_employee_validates_category() {
    let app = build_test_app();
    seed_and_tech_category(&app).await;

    let response = post_json(app, "/api/v1/employees", employee_payload(999_999)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_toggle_status_reassigns_title() {
    let app = build_test_app();
    let category_id = seed_and_tech_category(&app).await;
    let fired = job_title_id(&app, "FIRED").await;

    let created = body_json(
        post_json(app.clone(), "/api/v1/employees", employee_payload(category_id)).await,
    )
    .await;
    let id = created["employee"]["EmployeeID"].as_i64().unwrap();

    let response = post_json(
        app.clone(),
        &format!("/api/v1/employees/{id}/toggle-status"),
        json!({"EmployeeActive": false}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["employee"]["EmployeeActive"], false);
    assert_eq!(body["employee"]["EmployeeJobTitleID"], fired);

    // The FIRED title cannot then be assigned by hand.
    let response = put_json(
        app.clone(),
        &format!("/api/v1/employees/{id}"),
        json!({"EmployeeJobTitleID": fired}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Extra fields in a toggle payload are rejected.
    let response = post_json(
        app,
        &format!("/api/v1/employees/{id}/toggle-status"),
        json!({"EmployeeActive": true, "EmployeeName": "J"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_FIELD");
}

#[tokio::test]
async fn test_employee_crud_roundtrip() {
    let app = build_test_app();
    let category_id = seed_and_tech_category(&app).await;

    let created = body_json(
        post_json(app.clone(), "/api/v1/employees", employee_payload(category_id)).await,
    )
    .await;
    let id = created["employee"]["EmployeeID"].as_i64().unwrap();

    let response = put_json(
        app.clone(),
        &format!("/api/v1/employees/{id}"),
        json!({"EmployeeName": "Jane A. Doe", "LanguageID": 2}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["employee"]["EmployeeName"], "Jane A. Doe");
    assert_eq!(body["employee"]["LanguageID"], 2);

    let response = delete(app.clone(), &format!("/api/v1/employees/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(app, &format!("/api/v1/employees/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_seeding_is_idempotent() {
    let app = build_test_app();

    let first = body_json(post_json(app.clone(), "/api/v1/admin/seed", json!({})).await).await;
    assert_eq!(first["categories"]["created"], 3);
    assert_eq!(first["employees"]["created"], 2);

    let second = body_json(post_json(app.clone(), "/api/v1/admin/seed", json!({})).await).await;
    assert_eq!(second["categories"]["created"], 0);
    assert_eq!(second["categories"]["skipped"], 3);
    assert_eq!(second["employees"]["created"], 0);
    assert_eq!(second["employees"]["skipped"], 2);

    // Seeded job titles include the system codes.
    job_title_id(&app, "HIRED").await;
    job_title_id(&app, "FIRED").await;
}
