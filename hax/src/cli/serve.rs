//! serve サブコマンド
//!
//! 取り込みサーバーを起動します。

use clap::Args;
use hax_common::config::HaxConfig;
use hax_common::error::HaxResult;
use tracing::{info, warn};

use crate::shutdown::ShutdownController;
use crate::{config, server, AppState};

/// serve サブコマンドの引数
///
/// 未指定の項目は環境変数（`HAX_*`）と既定値から補完する。
#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Listen port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Bind address
    #[arg(short = 'H', long)]
    pub host: Option<String>,
}

impl ServeArgs {
    /// 環境変数由来の設定に引数を上書きする
    pub fn apply(&self, mut config: HaxConfig) -> HaxConfig {
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        config
    }
}

/// サーバーを起動し、シャットダウンまで待機する
pub async fn execute(args: &ServeArgs) -> HaxResult<()> {
    let config = args.apply(config::load_from_env());

    info!("hax v{}", env!("CARGO_PKG_VERSION"));
    match &config.forward_url {
        Some(url) => info!("Forwarding HA states to {}", url),
        None => warn!("HAX_FORWARD_URL is not set; HA states are published in-process only"),
    }
    info!(
        decode_failure_policy = ?config.decode_failure_policy,
        entry_failure_policy = ?config.entry_failure_policy,
        "Ingestion policies"
    );

    let state = AppState::from_config(&config)?;
    server::run(state, &config.bind_addr(), ShutdownController::default()).await
}
