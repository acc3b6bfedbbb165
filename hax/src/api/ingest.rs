//! ヘルスチェックレポート受信ハンドラー

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use hax_common::types::HaStateEntry;
use tracing::{debug, error, info, warn};

use super::{error::AppError, CONTENT_TYPE_JSON};
use crate::ingest::{ingest, IngestOutcome};
use crate::AppState;

/// POST / - ヘルスチェックレポートを取り込み、HA状態を通知先へ渡す
///
/// デコード失敗・不正な要素・通知失敗のいずれでも200を返す。
/// 例外は `DecodeFailurePolicy::Reject` 設定時のデコード失敗（400）。
pub async fn receive_health_reports(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    debug!("POST request received: {}", String::from_utf8_lossy(&body));

    match ingest(&body, state.policy) {
        IngestOutcome::Forward(ingested) => {
            if let Some(err) = &ingested.decode_error {
                warn!(error = %err, "Invalid JSON object received");
            }
            for err in &ingested.skipped {
                warn!(error = %err, "Skipping malformed service report");
            }

            info!("HA states: [{}]", format_states(&ingested.states));
            if let Err(err) = state.sink.broadcast_ha_states(ingested.states).await {
                error!(error = %err, "Failed to broadcast HA states");
            }
        }
        IngestOutcome::Reject(err) => {
            warn!(error = %err, "Invalid JSON object received");
            return Err(err.into());
        }
        IngestOutcome::Abort(err) => {
            error!(error = %err, "Discarding health-check batch");
        }
    }

    Ok((StatusCode::OK, [(header::CONTENT_TYPE, CONTENT_TYPE_JSON)]))
}

fn format_states(states: &[HaStateEntry]) -> String {
    states
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
