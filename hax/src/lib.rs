//! ha ingestion server
//!
//! 監視エージェントのヘルスチェックレポートを受信し、HA状態に変換して通知する

#![warn(missing_docs)]

/// REST APIハンドラー
pub mod api;

/// CLIインターフェース
pub mod cli;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// ヘルスチェックレポート取り込み（デコード・集約）
pub mod ingest;

/// ロギング初期化ユーティリティ
pub mod logging;

/// axumサーバー起動・シャットダウン
pub mod server;

/// 協調シャットダウン
pub mod shutdown;

/// HA状態通知先
pub mod sink;

use hax_common::config::HaxConfig;
use hax_common::error::HaxResult;
use std::sync::Arc;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// HA状態通知先
    pub sink: sink::SharedSink,
    /// 取り込みポリシー
    pub policy: ingest::IngestPolicy,
    /// リクエストボディ上限（バイト）
    pub max_body_bytes: usize,
}

impl AppState {
    /// 通知先とポリシーを指定して作成
    pub fn new(sink: sink::SharedSink, policy: ingest::IngestPolicy) -> Self {
        Self {
            sink,
            policy,
            max_body_bytes: HaxConfig::default().max_body_bytes,
        }
    }

    /// 設定から作成
    ///
    /// `forward_url` が設定されていればHTTP転送、未設定ならプロセス内バスを通知先とする。
    pub fn from_config(config: &HaxConfig) -> HaxResult<Self> {
        let sink: sink::SharedSink = match &config.forward_url {
            Some(url) => Arc::new(sink::HttpForwardSink::new(
                url.clone(),
                crate::config::forward_timeout(config),
            )?),
            None => sink::create_shared_bus(),
        };

        Ok(Self {
            sink,
            policy: ingest::IngestPolicy::from(config),
            max_body_bytes: config.max_body_bytes,
        })
    }
}
