//! 設定管理
//!
//! HaxConfig と取り込みポリシーの設定構造体

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CommonError;

/// JSONデコード失敗時の扱い
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DecodeFailurePolicy {
    /// 空のHA状態一覧として通知し、200を返す
    #[default]
    TreatAsEmpty,
    /// 何も通知せず、400を返す
    Reject,
}

impl FromStr for DecodeFailurePolicy {
    type Err = CommonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "treat_as_empty" | "empty" => Ok(Self::TreatAsEmpty),
            "reject" => Ok(Self::Reject),
            other => Err(CommonError::Config(format!(
                "unknown decode failure policy: {other}"
            ))),
        }
    }
}

/// 不正なレポート要素（Fidパース失敗・形状不一致）の扱い
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EntryFailurePolicy {
    /// リクエスト全体を破棄する
    #[default]
    AbortBatch,
    /// 該当要素のみ読み飛ばす
    SkipEntry,
}

impl FromStr for EntryFailurePolicy {
    type Err = CommonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "abort_batch" | "abort" => Ok(Self::AbortBatch),
            "skip_entry" | "skip" => Ok(Self::SkipEntry),
            other => Err(CommonError::Config(format!(
                "unknown entry failure policy: {other}"
            ))),
        }
    }
}

/// 取り込みサーバー設定
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HaxConfig {
    /// ホストアドレス (デフォルト: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// ポート番号 (デフォルト: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// HA状態の転送先URL（未設定時はプロセス内バスのみ）
    #[serde(default)]
    pub forward_url: Option<String>,

    /// 転送タイムアウト（秒）(デフォルト: 5)
    #[serde(default = "default_forward_timeout")]
    pub forward_timeout_secs: u64,

    /// リクエストボディ上限（バイト）(デフォルト: 2MiB)
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// JSONデコード失敗時の扱い
    #[serde(default)]
    pub decode_failure_policy: DecodeFailurePolicy,

    /// 不正なレポート要素の扱い
    #[serde(default)]
    pub entry_failure_policy: EntryFailurePolicy,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_forward_timeout() -> u64 {
    5
}

fn default_max_body_bytes() -> usize {
    2 * 1024 * 1024
}

impl HaxConfig {
    /// バインドアドレス ("host:port")
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for HaxConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            forward_url: None,
            forward_timeout_secs: default_forward_timeout(),
            max_body_bytes: default_max_body_bytes(),
            decode_failure_policy: DecodeFailurePolicy::default(),
            entry_failure_policy: EntryFailurePolicy::default(),
        }
    }
}
