//! 共通型定義
//!
//! ヘルスチェックレポートとHA状態の型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

use crate::fid::Fid;

/// 監視エージェントが「正常」を表すステータス文字列
pub const PASSING_STATUS: &str = "passing";

/// 単一ヘルスチェックの結果
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckResult {
    /// ステータス（文字列 "passing" 以外は型を問わず全て非正常として扱う）
    #[serde(rename = "Status", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Value>,
}

impl CheckResult {
    /// 指定ステータスのチェック結果を作成
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: Some(Value::String(status.into())),
        }
    }

    /// ステータスが厳密に "passing" か（大文字小文字を区別）
    pub fn is_passing(&self) -> bool {
        self.status.as_ref().and_then(Value::as_str) == Some(PASSING_STATUS)
    }
}

/// サービス情報（レポート中の `Service` オブジェクト）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceInfo {
    /// サービスID（Fid文字列）
    #[serde(rename = "ID")]
    pub id: String,
}

/// サービスインスタンス単位のヘルスレポート
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceReport {
    /// サービス情報
    #[serde(rename = "Service")]
    pub service: ServiceInfo,
    /// チェック結果一覧（空を許容）
    #[serde(rename = "Checks")]
    pub checks: Vec<CheckResult>,
}

impl ServiceReport {
    /// サービスIDとチェック結果からレポートを作成
    pub fn new(service_id: impl Into<String>, checks: Vec<CheckResult>) -> Self {
        Self {
            service: ServiceInfo {
                id: service_id.into(),
            },
            checks,
        }
    }

    /// サービスID文字列
    pub fn service_id(&self) -> &str {
        &self.service.id
    }
}

/// 可用性状態
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityState {
    /// 稼働中
    Online,
    /// 停止中
    Offline,
}

impl AvailabilityState {
    /// チェック結果一覧を集約する
    ///
    /// 全チェックが "passing" のときのみOnline。空の一覧はOnline。
    pub fn from_checks(checks: &[CheckResult]) -> Self {
        if checks.iter().all(CheckResult::is_passing) {
            Self::Online
        } else {
            Self::Offline
        }
    }

    /// 文字列表現
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
        }
    }
}

impl FromStr for AvailabilityState {
    type Err = crate::error::CommonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "online" => Ok(Self::Online),
            "offline" => Ok(Self::Offline),
            other => Err(crate::error::CommonError::Validation(format!(
                "unknown availability state: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for AvailabilityState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 通知先へ渡すHA状態
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct HaStateEntry {
    /// サービスFid
    pub fid: Fid,
    /// 可用性状態
    pub status: AvailabilityState,
}

impl HaStateEntry {
    /// 新しいHA状態を作成
    pub fn new(fid: Fid, status: AvailabilityState) -> Self {
        Self { fid, status }
    }
}

impl std::fmt::Display for HaStateEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.fid, self.status)
    }
}

/// 1リクエスト分のHA状態（受信時刻付き）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HaStateBatch {
    /// 受信時刻
    pub received_at: DateTime<Utc>,
    /// HA状態一覧（入力順）
    pub states: Vec<HaStateEntry>,
}

impl HaStateBatch {
    /// 現在時刻でバッチを作成
    pub fn now(states: Vec<HaStateEntry>) -> Self {
        Self {
            received_at: Utc::now(),
            states,
        }
    }
}
