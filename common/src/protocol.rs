//! 通信プロトコル定義
//!
//! 監視エージェント↔取り込みサーバー間のメッセージ

use serde::{Deserialize, Serialize};

/// 生存確認レスポンスの本文（バイト単位で固定）
pub const LIVENESS_BODY: &str = r#"{"message": "I am alive"}"#;

/// エラーレスポンス
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// クライアント向けエラーメッセージ
    pub error: String,
}
