//! HA状態集約
//!
//! レポート要素ごとにサービスIDをFidへパースし、チェック結果を
//! Online/Offline に集約する。I/O・ログ出力は行わない。

use hax_common::config::EntryFailurePolicy;
use hax_common::error::{CommonError, HaxError, HaxResult};
use hax_common::types::{AvailabilityState, HaStateEntry, ServiceReport};
use hax_common::Fid;

use super::decoder::RawReport;

/// 集約結果
#[derive(Debug, Default)]
pub struct Aggregation {
    /// HA状態一覧（入力順）
    pub states: Vec<HaStateEntry>,
    /// `SkipEntry` で読み飛ばした要素のエラー
    pub skipped: Vec<HaxError>,
}

/// 形状検証済みのレポートをHA状態に変換する
pub fn to_ha_state(report: &ServiceReport) -> Result<HaStateEntry, CommonError> {
    let fid = Fid::parse(report.service_id())?;
    Ok(HaStateEntry::new(
        fid,
        AvailabilityState::from_checks(&report.checks),
    ))
}

fn aggregate_entry(index: usize, raw: RawReport) -> HaxResult<HaStateEntry> {
    let report: ServiceReport =
        serde_json::from_value(raw).map_err(|err| HaxError::MalformedReport {
            index,
            reason: err.to_string(),
        })?;
    to_ha_state(&report).map_err(|source| HaxError::InvalidServiceId { index, source })
}

/// レポート要素一覧をHA状態一覧に集約する
///
/// 同一Fidの重複はそのまま出力する。不正な要素の扱いは `policy` に従う:
/// `AbortBatch` では最初のエラーを返し、`SkipEntry` では該当要素を除外して
/// `Aggregation::skipped` に記録する。
pub fn aggregate(reports: Vec<RawReport>, policy: EntryFailurePolicy) -> HaxResult<Aggregation> {
    let mut aggregation = Aggregation {
        states: Vec::with_capacity(reports.len()),
        skipped: Vec::new(),
    };

    for (index, raw) in reports.into_iter().enumerate() {
        match aggregate_entry(index, raw) {
            Ok(state) => aggregation.states.push(state),
            Err(err) => match policy {
                EntryFailurePolicy::AbortBatch => return Err(err),
                EntryFailurePolicy::SkipEntry => aggregation.skipped.push(err),
            },
        }
    }

    Ok(aggregation)
}
