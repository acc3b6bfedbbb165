//! ヘルスチェックレポート取り込み
//!
//! リクエストボディ → デコード → 集約 の変換パイプライン。
//! 状態を持たないため、複数ハンドラーから並行に呼び出してよい。

pub mod aggregator;
pub mod decoder;

pub use aggregator::{aggregate, to_ha_state, Aggregation};
pub use decoder::{decode_reports, RawReport};
pub use hax_common::config::{DecodeFailurePolicy, EntryFailurePolicy};

use hax_common::config::HaxConfig;
use hax_common::error::HaxError;
use hax_common::types::HaStateEntry;

/// 取り込み時のエラー処理ポリシー
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestPolicy {
    /// JSONデコード失敗時の扱い
    pub decode_failure: DecodeFailurePolicy,
    /// 不正なレポート要素の扱い
    pub entry_failure: EntryFailurePolicy,
}

impl From<&HaxConfig> for IngestPolicy {
    fn from(config: &HaxConfig) -> Self {
        Self {
            decode_failure: config.decode_failure_policy,
            entry_failure: config.entry_failure_policy,
        }
    }
}

/// 通知先へ転送する取り込み結果
#[derive(Debug, Default)]
pub struct Ingested {
    /// HA状態一覧（入力順）
    pub states: Vec<HaStateEntry>,
    /// `TreatAsEmpty` で握りつぶしたデコードエラー
    pub decode_error: Option<HaxError>,
    /// `SkipEntry` で読み飛ばした要素のエラー
    pub skipped: Vec<HaxError>,
}

/// 取り込み結果
#[derive(Debug)]
pub enum IngestOutcome {
    /// HA状態一覧を通知先へ転送する（空の場合も転送する）
    Forward(Ingested),
    /// デコード失敗（`DecodeFailurePolicy::Reject`）。何も転送しない
    Reject(HaxError),
    /// 不正な要素によりバッチ全体を破棄（`EntryFailurePolicy::AbortBatch`）。何も転送しない
    Abort(HaxError),
}

/// リクエストボディをHA状態一覧に変換する
pub fn ingest(body: &[u8], policy: IngestPolicy) -> IngestOutcome {
    let reports = match decode_reports(body) {
        Ok(reports) => reports,
        Err(err) => {
            return match policy.decode_failure {
                DecodeFailurePolicy::TreatAsEmpty => IngestOutcome::Forward(Ingested {
                    decode_error: Some(err),
                    ..Ingested::default()
                }),
                DecodeFailurePolicy::Reject => IngestOutcome::Reject(err),
            };
        }
    };

    match aggregate(reports, policy.entry_failure) {
        Ok(Aggregation { states, skipped }) => IngestOutcome::Forward(Ingested {
            states,
            decode_error: None,
            skipped,
        }),
        Err(err) => IngestOutcome::Abort(err),
    }
}
