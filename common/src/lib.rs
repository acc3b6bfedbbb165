//! ha ingestion common
//!
//! 取り込みサーバーと通知先で共有する型定義

#![warn(missing_docs)]

/// 設定管理
pub mod config;

/// エラー型
pub mod error;

/// クラスタオブジェクト識別子
pub mod fid;

/// 通信プロトコル
pub mod protocol;

/// 共通型定義
pub mod types;

pub use fid::Fid;
