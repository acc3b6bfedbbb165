//! HTTP転送通知先
//!
//! HA状態一覧をJSON配列として下流サービスへPOSTする

use async_trait::async_trait;
use hax_common::error::{HaxError, HaxResult};
use hax_common::types::HaStateEntry;
use std::time::Duration;
use tracing::debug;

use super::HaStateSink;

/// HA状態をHTTPで転送する通知先
#[derive(Debug, Clone)]
pub struct HttpForwardSink {
    client: reqwest::Client,
    url: String,
}

impl HttpForwardSink {
    /// 転送先URLとタイムアウトを指定して作成
    pub fn new(url: impl Into<String>, timeout: Duration) -> HaxResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| HaxError::Internal(format!("Failed to build HTTP client: {err}")))?;
        Ok(Self::with_client(client, url))
    }

    /// 既存のHTTPクライアントを共有して作成
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// 転送先URL
    pub fn url(&self) -> &str {
        &self.url
    }
}

fn map_reqwest_error(err: reqwest::Error) -> HaxError {
    if err.is_timeout() {
        HaxError::Timeout(err.to_string())
    } else {
        HaxError::Http(err.to_string())
    }
}

#[async_trait]
impl HaStateSink for HttpForwardSink {
    async fn broadcast_ha_states(&self, states: Vec<HaStateEntry>) -> HaxResult<()> {
        let response = self
            .client
            .post(&self.url)
            .json(&states)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(HaxError::Sink(format!(
                "{} responded with {}",
                self.url, status
            )));
        }

        debug!(url = %self.url, count = states.len(), "Forwarded HA states");
        Ok(())
    }
}
