//! ペイロードデコーダー
//!
//! リクエストボディ（JSON配列）をレポート要素の一覧に変換する。
//! 要素の形状はここでは検証せず、集約時に検証する。

use hax_common::error::{HaxError, HaxResult};
use serde_json::Value;

/// デコード済みのレポート要素（形状未検証）
pub type RawReport = Value;

/// リクエストボディをデコードする
///
/// - 空ボディ（JSON空白のみを含む）・`null`・`[]` は空の一覧
/// - 不正なUTF-8 / 不正なJSON / 配列以外のトップレベル値は `HaxError::Decode`
pub fn decode_reports(body: &[u8]) -> HaxResult<Vec<RawReport>> {
    if body.iter().all(|byte| is_json_whitespace(*byte)) {
        return Ok(Vec::new());
    }

    let value: Value =
        serde_json::from_slice(body).map_err(|err| HaxError::Decode(err.to_string()))?;

    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(reports) => Ok(reports),
        other => Err(HaxError::Decode(format!(
            "expected a JSON array of service reports, got {}",
            json_kind(&other)
        ))),
    }
}

/// JSONの空白文字（RFC 8259: スペース・タブ・LF・CR のみ）
fn is_json_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
