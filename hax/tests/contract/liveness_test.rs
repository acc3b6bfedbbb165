//! Contract Test: GET / HEAD 生存確認

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use hax::api;
use hax::ingest::IngestPolicy;
use tower::ServiceExt;

use crate::support::sink::recording_state;

/// GET / - 固定メッセージを返す
#[tokio::test]
async fn test_get_returns_alive_message() {
    let (state, sink) = recording_state(IngestPolicy::default());
    let app = api::create_app(state);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "application/json");
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], br#"{"message": "I am alive"}"#);

    // 生存確認は通知先を呼ばない
    assert!(sink.calls().is_empty());
}

/// GET 任意パス - パスに関係なく同じ応答
#[tokio::test]
async fn test_get_on_any_path() {
    let (state, _sink) = recording_state(IngestPolicy::default());
    let app = api::create_app(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/health/state")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], br#"{"message": "I am alive"}"#);
}

/// HEAD / - 同じヘッダーで本文なし
#[tokio::test]
async fn test_head_returns_headers_only() {
    let (state, sink) = recording_state(IngestPolicy::default());
    let app = api::create_app(state);

    let response = app
        .oneshot(
            Request::builder()
                .method("HEAD")
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "application/json");
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(body.is_empty());
    assert!(sink.calls().is_empty());
}

/// GET / - 直前のPOSTの内容に影響されない
#[tokio::test]
async fn test_get_unaffected_by_prior_post() {
    let (state, _sink) = recording_state(IngestPolicy::default());
    let app = api::create_app(state);

    let post = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .body(Body::from("{broken"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(post.status(), StatusCode::OK);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], br#"{"message": "I am alive"}"#);
}
