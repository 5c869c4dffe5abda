//! Router tests driven through `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use hiring_api::{create_router, ApiConfig, AppState};
use hiring_store::{MemoryStore, SeedData};

const KEY: &str = "integration-key";

fn app() -> Router {
    let config = ApiConfig {
        api_key: KEY.to_string(),
        ..ApiConfig::default()
    };
    let store = Arc::new(MemoryStore::from_seed(SeedData::defaults()));
    create_router(AppState::with_store(config, store), None)
}

fn request(method: Method, uri: &str, key: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(key) = key {
        builder = builder.header("X-API-KEY", key);
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn position_body(title: &str, location: &str, recruiter: i64, department: i64) -> Value {
    json!({
        "title": title,
        "description": "Builds backend services",
        "location": location,
        "status": "OPEN",
        "recruiter": { "id": recruiter },
        "department": { "id": department },
        "budget": 100000.0,
        "closingDate": "2030-06-30"
    })
}

async fn create(app: &Router, body: Value) -> Value {
    let response = send(app, request(Method::POST, "/api/positions", Some(KEY), Some(body))).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[tokio::test]
async fn test_missing_key_is_rejected() {
    let app = app();
    let response = send(&app, request(Method::GET, "/api/positions", None, None)).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_bytes(response).await, b"Invalid API Key");
}

#[tokio::test]
async fn test_wrong_key_is_rejected() {
    let app = app();
    for uri in ["/api/positions", "/api/departments", "/api/recruiters/1"] {
        let response = send(&app, request(Method::GET, uri, Some("nope"), None)).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{}", uri);
        assert_eq!(body_bytes(response).await, b"Invalid API Key");
    }
}

#[tokio::test]
async fn test_rejected_create_writes_nothing() {
    let app = app();
    let response = send(
        &app,
        request(
            Method::POST,
            "/api/positions",
            None,
            Some(position_body("Engineer", "Remote", 1, 1)),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let page = body_json(send(&app, request(Method::GET, "/api/positions", Some(KEY), None)).await).await;
    assert_eq!(page["totalElements"], 0);
}

#[tokio::test]
async fn test_allowlisted_paths_need_no_key() {
    let app = app();

    let response = send(&app, request(Method::GET, "/health", None, None)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, request(Method::GET, "/ready", None, None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let readiness = body_json(response).await;
    assert_eq!(readiness["status"], "ready");
    assert_eq!(readiness["positions"], 0);

    let response = send(&app, request(Method::GET, "/v3/api-docs", Some("wrong"), None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let docs = body_json(response).await;
    assert!(docs["schemas"].get("PositionPayload").is_some());
}

#[tokio::test]
async fn test_create_then_get() {
    let app = app();
    let created = create(&app, position_body("Software Engineer", "Remote", 1, 1)).await;

    assert_eq!(created["id"], 1);
    assert_eq!(created["title"], "Software Engineer");
    assert_eq!(created["status"], "OPEN");
    assert_eq!(created["budget"], 100000.0);
    assert_eq!(created["closingDate"], "2030-06-30");
    assert_eq!(created["recruiter"]["name"], "Juan Perez");
    assert_eq!(created["department"]["code"], "ENG");

    let response = send(&app, request(Method::GET, "/api/positions/1", Some(KEY), None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
}

#[tokio::test]
async fn test_create_keeps_budget_digits() {
    let app = app();
    let mut body = position_body("Controller", "Remote", 1, 1);
    body["budget"] = serde_json::from_str("12345678.123456789").unwrap();

    let response = send(&app, request(Method::POST, "/api/positions", Some(KEY), Some(body))).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let raw = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(raw.contains(r#""budget":12345678.123456789"#), "{}", raw);

    let fetched = body_json(send(&app, request(Method::GET, "/api/positions/1", Some(KEY), None)).await).await;
    assert_eq!(fetched["budget"].to_string(), "12345678.123456789");
}

#[tokio::test]
async fn test_create_ignores_client_id() {
    let app = app();
    let mut body = position_body("Analyst", "Madrid", 2, 2);
    body["id"] = json!(77);

    let created = create(&app, body).await;
    assert_eq!(created["id"], 1);
}

#[tokio::test]
async fn test_create_with_unknown_references() {
    let app = app();

    let response = send(
        &app,
        request(Method::POST, "/api/positions", Some(KEY), Some(position_body("X", "Y", 99, 1))),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["detail"], "Recruiter not found with id: 99");

    let response = send(
        &app,
        request(Method::POST, "/api/positions", Some(KEY), Some(position_body("X", "Y", 1, 42))),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["detail"], "Department not found with id: 42");

    let page = body_json(send(&app, request(Method::GET, "/api/positions", Some(KEY), None)).await).await;
    assert_eq!(page["totalElements"], 0);
}

#[tokio::test]
async fn test_invalid_bodies_are_bad_requests() {
    let app = app();

    let mut blank_title = position_body("   ", "Remote", 1, 1);
    blank_title["budget"] = json!(10.0);
    let response = send(&app, request(Method::POST, "/api/positions", Some(KEY), Some(blank_title))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let mut zero_budget = position_body("Engineer", "Remote", 1, 1);
    zero_budget["budget"] = json!(0);
    let response = send(&app, request(Method::POST, "/api/positions", Some(KEY), Some(zero_budget))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let response = send(
        &app,
        Request::builder()
            .method(Method::POST)
            .uri("/api/positions")
            .header("X-API-KEY", KEY)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let mut bad_status = position_body("Engineer", "Remote", 1, 1);
    bad_status["status"] = json!("PAUSED");
    let response = send(&app, request(Method::POST, "/api/positions", Some(KEY), Some(bad_status))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_single_position() {
    let app = app();
    create(&app, position_body("Software Engineer", "Remote", 1, 1)).await;

    let response = send(
        &app,
        request(
            Method::GET,
            "/api/positions?page=0&size=10&sortBy=title&direction=asc",
            Some(KEY),
            None,
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_json(response).await;
    assert_eq!(page["totalElements"], 1);
    assert_eq!(page["totalPages"], 1);
    assert_eq!(page["size"], 10);
    assert_eq!(page["number"], 0);
    assert_eq!(page["content"][0]["title"], "Software Engineer");
}

#[tokio::test]
async fn test_list_sorting_and_paging() {
    let app = app();
    for title in ["Charlie", "Alpha", "Bravo"] {
        create(&app, position_body(title, "Remote", 1, 1)).await;
    }

    let page = body_json(
        send(
            &app,
            request(Method::GET, "/api/positions?size=2&sortBy=title&direction=desc", Some(KEY), None),
        )
        .await,
    )
    .await;
    assert_eq!(page["content"][0]["title"], "Charlie");
    assert_eq!(page["content"][1]["title"], "Bravo");
    assert_eq!(page["totalPages"], 2);
    assert_eq!(page["last"], false);

    let page = body_json(
        send(
            &app,
            request(Method::GET, "/api/positions?page=1&size=2&sortBy=title&direction=desc", Some(KEY), None),
        )
        .await,
    )
    .await;
    assert_eq!(page["numberOfElements"], 1);
    assert_eq!(page["content"][0]["title"], "Alpha");
    assert_eq!(page["last"], true);
}

#[tokio::test]
async fn test_list_rejects_bad_parameters() {
    let app = app();
    for uri in [
        "/api/positions?size=0",
        "/api/positions?size=500",
        "/api/positions?sortBy=salary",
        "/api/positions?page=-1",
    ] {
        let response = send(&app, request(Method::GET, uri, Some(KEY), None)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
    }
}

#[tokio::test]
async fn test_update_replaces_position() {
    let app = app();
    create(&app, position_body("Engineer", "Remote", 1, 1)).await;

    let mut body = position_body("Senior Engineer", "Stale Town", 2, 3);
    body["id"] = json!(500);
    body["status"] = json!("CLOSED");

    let response = send(&app, request(Method::PUT, "/api/positions/1", Some(KEY), Some(body))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["id"], 1);
    assert_eq!(updated["title"], "Senior Engineer");
    assert_eq!(updated["location"], "Stale Town");
    assert_eq!(updated["status"], "CLOSED");
    assert_eq!(updated["recruiter"]["id"], 2);
    assert_eq!(updated["department"]["name"], "Sales");

    let fetched = body_json(send(&app, request(Method::GET, "/api/positions/1", Some(KEY), None)).await).await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_update_missing_position_is_not_found() {
    let app = app();
    let response = send(
        &app,
        request(Method::PUT, "/api/positions/9", Some(KEY), Some(position_body("X", "Y", 99, 99))),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["detail"], "Position not found with id: 9");
}

#[tokio::test]
async fn test_delete_position() {
    let app = app();
    create(&app, position_body("Engineer", "Remote", 1, 1)).await;

    let response = send(&app, request(Method::DELETE, "/api/positions/1", Some(KEY), None)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app, request(Method::GET, "/api/positions/1", Some(KEY), None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, request(Method::DELETE, "/api/positions/1", Some(KEY), None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_reference_data_endpoints() {
    let app = app();

    let departments = body_json(send(&app, request(Method::GET, "/api/departments", Some(KEY), None)).await).await;
    assert_eq!(departments.as_array().unwrap().len(), 4);
    assert_eq!(departments[0]["code"], "ENG");

    let recruiters = body_json(send(&app, request(Method::GET, "/api/recruiters", Some(KEY), None)).await).await;
    assert_eq!(recruiters.as_array().unwrap().len(), 3);

    let response = send(&app, request(Method::GET, "/api/recruiters/2", Some(KEY), None)).await;
    assert_eq!(body_json(response).await["name"], "Maria Garcia");

    let response = send(&app, request(Method::GET, "/api/departments/10", Some(KEY), None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["detail"], "Department not found with id: 10");
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let app = app();
    let response = send(&app, request(Method::GET, "/api/positions/abc", Some(KEY), None)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
