//! HA状態イベントバス
//!
//! 受信したHA状態をプロセス内の購読者にブロードキャストする

use async_trait::async_trait;
use hax_common::error::HaxResult;
use hax_common::types::{HaStateBatch, HaStateEntry};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::debug;

use super::HaStateSink;

/// イベントバスのチャネル容量
const HA_STATE_CHANNEL_CAPACITY: usize = 1024;

/// HA状態イベントバス
#[derive(Clone)]
pub struct HaStateBus {
    sender: broadcast::Sender<HaStateBatch>,
}

impl Default for HaStateBus {
    fn default() -> Self {
        Self::new()
    }
}

impl HaStateBus {
    /// 新しいイベントバスを作成
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(HA_STATE_CHANNEL_CAPACITY);
        Self { sender }
    }

    /// イベントバスを購読
    pub fn subscribe(&self) -> broadcast::Receiver<HaStateBatch> {
        self.sender.subscribe()
    }

    /// バッチを発行
    ///
    /// 購読者がいない場合でもエラーにはならない
    pub fn publish(&self, batch: HaStateBatch) {
        // 購読者がいない場合は送信に失敗するが、無視する
        let _ = self.sender.send(batch);
    }

    /// 現在の購読者数を取得
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

#[async_trait]
impl HaStateSink for HaStateBus {
    async fn broadcast_ha_states(&self, states: Vec<HaStateEntry>) -> HaxResult<()> {
        let count = states.len();
        self.publish(HaStateBatch::now(states));
        debug!(
            count,
            subscribers = self.subscriber_count(),
            "Published HA states"
        );
        Ok(())
    }
}

/// Arc でラップされたイベントバス
pub type SharedHaStateBus = Arc<HaStateBus>;

/// 共有可能なイベントバスを作成
pub fn create_shared_bus() -> SharedHaStateBus {
    Arc::new(HaStateBus::new())
}
