//! 生存確認ハンドラー

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
};
use hax_common::protocol::LIVENESS_BODY;

use super::CONTENT_TYPE_JSON;

/// GET / - 固定の生存確認メッセージを返す
pub async fn alive() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, CONTENT_TYPE_JSON)],
        LIVENESS_BODY,
    )
}

/// HEAD / - GETと同じヘッダーを本文なしで返す
pub async fn alive_head() -> impl IntoResponse {
    (StatusCode::OK, [(header::CONTENT_TYPE, CONTENT_TYPE_JSON)])
}
