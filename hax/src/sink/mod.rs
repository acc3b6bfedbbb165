//! HA状態通知先
//!
//! 取り込んだHA状態一覧を受け取り、クラスタ全体のHA判断へ伝播する。
//! 通知先は起動時に `AppState` へ注入される。

pub mod bus;
pub mod http;

pub use bus::{create_shared_bus, HaStateBus, SharedHaStateBus};
pub use http::HttpForwardSink;

use async_trait::async_trait;
use hax_common::error::HaxResult;
use hax_common::types::HaStateEntry;
use std::sync::Arc;

/// HA状態通知先
///
/// 複数のリクエストハンドラーから並行に呼び出される。
#[async_trait]
pub trait HaStateSink: Send + Sync {
    /// HA状態一覧を通知する（空の一覧も通知対象）
    async fn broadcast_ha_states(&self, states: Vec<HaStateEntry>) -> HaxResult<()>;
}

/// 共有可能な通知先
pub type SharedSink = Arc<dyn HaStateSink>;
