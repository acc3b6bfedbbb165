//! REST APIハンドラー
//!
//! 単一エンドポイントをメソッドで振り分ける（GET/HEAD: 生存確認、POST: レポート取り込み）

pub mod error;
pub mod ingest;
pub mod liveness;

use crate::AppState;
use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::trace::TraceLayer;

/// JSONレスポンスのContent-Type
pub(crate) const CONTENT_TYPE_JSON: &str = "application/json";

/// APIルーターを作成
///
/// パスは区別せず、全てのパスで同じメソッド振り分けを行う。
pub fn create_app(state: AppState) -> Router {
    let body_limit = state.max_body_bytes;
    let endpoint = get(liveness::alive)
        .head(liveness::alive_head)
        .post(ingest::receive_health_reports);

    Router::new()
        .route("/", endpoint.clone())
        .route("/*path", endpoint)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
