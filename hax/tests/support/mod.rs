//! テスト共通ユーティリティ

pub mod http;
