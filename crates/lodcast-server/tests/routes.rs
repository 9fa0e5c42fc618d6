//! Integration tests for the HTTP boundary.

use std::path::Path;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use lodcast_core::{Decoder, LodTile};
use lodcast_server::server::app;
use serde_json::Value;
use tower::ServiceExt;

fn le_bytes(scalars: &[f32]) -> Vec<u8> {
    scalars.iter().flat_map(|s| s.to_le_bytes()).collect()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

fn test_app() -> axum::Router {
    app(Path::new("build"))
}

#[tokio::test]
async fn lod_endpoint_encodes_a_tile() {
    let body = le_bytes(&[0.0, 0.0, 1.0, 1.0, 0.5, 0.5]);
    let request = Request::builder()
        .method("POST")
        .uri("/lod/1")
        .body(Body::from(body))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/octet-stream");

    let blob = body_bytes(response).await;
    let tile = LodTile::decode(&blob).unwrap();
    assert_eq!(tile.points().len(), 3);
    assert_eq!(tile.offsets().as_slice(), &[0, 24, 24, 24]);
}

#[tokio::test]
async fn lod_endpoint_rejects_malformed_depth() {
    let request = Request::builder()
        .method("POST")
        .uri("/lod/abc")
        .body(Body::from(le_bytes(&[0.0, 0.0])))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body["success"], Value::Bool(false));
    assert!(body["error"].as_str().unwrap().contains("depth"));
}

#[tokio::test]
async fn lod_endpoint_rejects_ragged_body() {
    // 12 bytes is three scalars: one and a half points
    let request = Request::builder()
        .method("POST")
        .uri("/lod/1")
        .body(Body::from(vec![0u8; 12]))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body["success"], Value::Bool(false));
}

#[tokio::test]
async fn lod_endpoint_rejects_excessive_depth() {
    let request = Request::builder()
        .method("POST")
        .uri("/lod/40")
        .body(Body::from(le_bytes(&[0.0, 0.0])))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert!(body["error"].as_str().unwrap().contains("depth"));
}

#[tokio::test]
async fn mandelbrot_endpoint_renders_a_tile() {
    let request =
        Request::builder().method("GET").uri("/mandelbrot/0/0/0").body(Body::empty()).unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/octet-stream");

    let bytes = body_bytes(response).await;
    assert_eq!(bytes.len(), 256 * 256 * 4);
}

#[tokio::test]
async fn mandelbrot_endpoint_rejects_out_of_range_tile() {
    // x = 2 does not exist at zoom 1
    let request =
        Request::builder().method("GET").uri("/mandelbrot/1/2/0").body(Body::empty()).unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body["success"], Value::Bool(false));
    assert!(body["error"].as_str().unwrap().contains("out of range"));
}

#[tokio::test]
async fn mandelbrot_endpoint_rejects_malformed_params() {
    let request =
        Request::builder().method("GET").uri("/mandelbrot/1/-1/0").body(Body::empty()).unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body["success"], Value::Bool(false));
}
