//! ロギング初期化ユーティリティ
//!
//! 標準出力（人間向け）とJSONファイル（日次ローテーション）の2系統に出力する。

use chrono::Utc;
use hax_common::error::{HaxError, HaxResult};
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{data_dir, get_env_with_fallback};

/// ログファイル名の接頭辞
const LOG_FILE_PREFIX: &str = "hax.log";

/// ログレベル未指定時のフィルタ
const DEFAULT_FILTER: &str = "info";

/// ログディレクトリを取得（`<data_dir>/logs`）
pub fn log_dir() -> HaxResult<PathBuf> {
    data_dir()
        .map(|dir| dir.join("logs"))
        .ok_or_else(|| HaxError::Internal("Failed to resolve home directory".to_string()))
}

/// 現在書き込み中のログファイルパスを取得
///
/// tracing-appender の日次ローテーション（UTC日付の接尾辞）に合わせる。
pub fn log_file_path() -> HaxResult<PathBuf> {
    let date = Utc::now().format("%Y-%m-%d");
    Ok(log_dir()?.join(format!("{LOG_FILE_PREFIX}.{date}")))
}

/// ログフィルタ文字列を取得
///
/// `HAX_LOG_LEVEL`（旧: `RUST_LOG`）が優先され、未設定なら `info`。
pub fn filter_directive() -> String {
    get_env_with_fallback("HAX_LOG_LEVEL", "RUST_LOG").unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// グローバルなtracing subscriberを初期化
pub fn init() -> HaxResult<()> {
    let dir = log_dir()?;
    std::fs::create_dir_all(&dir).map_err(|err| {
        HaxError::Internal(format!(
            "Failed to create log directory {}: {err}",
            dir.display()
        ))
    })?;

    let filter = EnvFilter::try_new(filter_directive())
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .map_err(|err| HaxError::Internal(format!("Invalid log filter: {err}")))?;

    let file_appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .with(
            fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(file_appender),
        )
        .try_init()
        .map_err(|err| HaxError::Internal(format!("Failed to initialize logging: {err}")))
}
