// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use careerwatch::presentation::routes;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use super::helpers::{create_test_app, job_board, PageBehavior, TestApp};

const ACME: &str = "https://acme.test/careers";

fn router(app: &TestApp) -> Router {
    routes::routes(app.services.clone())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

fn json_body(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

#[tokio::test]
async fn health_check_works() {
    let app = create_test_app().await;
    let (status, body) = send(&router(&app), Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}

#[tokio::test]
async fn site_lifecycle_over_http() {
    let app = create_test_app().await;
    let api = router(&app);
    app.renderer.set(
        ACME,
        PageBehavior::Html(job_board(&["Backend Engineer", "Data Analyst"])),
    );

    let (status, body) = send(
        &api,
        Method::POST,
        "/api/sites",
        Some(json!({ "url": ACME, "companyName": "Acme" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let site = json_body(&body);
    assert_eq!(site["companyName"], "Acme");
    assert_eq!(site["jobCount"], 0);
    let id = site["id"].as_str().unwrap().to_string();

    let (status, body) = send(&api, Method::GET, "/api/sites", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body).as_array().unwrap().len(), 1);

    let (status, body) = send(&api, Method::POST, &format!("/api/sites/{}/refresh", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body)["jobCount"], 2);

    let (status, body) = send(&api, Method::GET, &format!("/api/sites/{}/jobs", id), None).await;
    assert_eq!(status, StatusCode::OK);
    let jobs = json_body(&body);
    assert_eq!(jobs.as_array().unwrap().len(), 2);
    assert_eq!(jobs[0]["siteId"], id.as_str());
    assert_eq!(jobs[0]["kind"], "posting");

    let (status, body) = send(&api, Method::POST, "/api/export", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body)["success"], true);

    let (status, body) = send(&api, Method::GET, "/api/export/download", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with(b"PK"));

    let (status, _) = send(&api, Method::DELETE, &format!("/api/sites/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&api, Method::GET, &format!("/api/sites/{}/jobs", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&api, Method::GET, "/api/jobs", None).await;
    assert!(json_body(&body).as_array().unwrap().is_empty());
}

#[tokio::test]
async fn invalid_site_url_is_rejected() {
    let app = create_test_app().await;
    let api = router(&app);

    for url in ["", "ftp://acme.test/jobs"] {
        let (status, body) = send(&api, Method::POST, "/api/sites", Some(json!({ "url": url }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json_body(&body)["error"].is_string());
    }
}

#[tokio::test]
async fn unknown_site_returns_not_found() {
    let app = create_test_app().await;
    let api = router(&app);
    let missing = uuid::Uuid::new_v4();

    let (status, _) = send(&api, Method::POST, &format!("/api/sites/{}/refresh", missing), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&api, Method::DELETE, &format!("/api/sites/{}", missing), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn export_without_jobs_reports_failure_and_download_is_missing() {
    let app = create_test_app().await;
    let api = router(&app);

    let (status, body) = send(&api, Method::POST, "/api/export", None).await;
    assert_eq!(status, StatusCode::OK);
    let result = json_body(&body);
    assert_eq!(result["success"], false);
    assert_eq!(result["message"], "No jobs to export");

    let (status, _) = send(&api, Method::GET, "/api/export/download", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn bulk_refresh_reports_per_site_results() {
    let app = create_test_app().await;
    let api = router(&app);
    app.renderer.set(ACME, PageBehavior::Panic);

    let (status, _) = send(
        &api,
        Method::POST,
        "/api/sites",
        Some(json!({ "url": ACME })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&api, Method::POST, "/api/refresh", None).await;
    assert_eq!(status, StatusCode::OK);
    let response = json_body(&body);
    assert_eq!(response["total"], 1);
    assert_eq!(response["failed"], 1);
    assert_eq!(response["results"][0]["success"], false);
    assert!(response["results"][0]["error"].is_string());
}
