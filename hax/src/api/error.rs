//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング

use axum::{http::StatusCode, response::IntoResponse, Json};
use hax_common::error::HaxError;
use hax_common::protocol::ErrorResponse;

/// Axum用のエラーレスポンス型
#[derive(Debug)]
pub struct AppError(pub HaxError);

impl From<HaxError> for AppError {
    fn from(err: HaxError) -> Self {
        AppError(err)
    }
}

impl AppError {
    /// エラー種別に対応するHTTPステータス
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            HaxError::Common(_)
            | HaxError::Decode(_)
            | HaxError::MalformedReport { .. }
            | HaxError::InvalidServiceId { .. } => StatusCode::BAD_REQUEST,
            HaxError::Sink(_) | HaxError::Http(_) => StatusCode::BAD_GATEWAY,
            HaxError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            HaxError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // 詳細はログにのみ出力し、クライアントには external_message() を返す
        let status = self.status_code();
        let payload = ErrorResponse {
            error: self.0.external_message().to_string(),
        };

        (status, Json(payload)).into_response()
    }
}
