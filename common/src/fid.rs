//! クラスタオブジェクト識別子（Fid）
//!
//! 監視エージェントのサービスIDは `<container>:<key>` 形式の
//! 16進数ペアで表現される（例: `0x7200000000000001:0x6`）。

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::CommonError;

/// クラスタオブジェクト識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fid {
    /// コンテナ部（上位8ビットがオブジェクト種別）
    pub container: u64,
    /// キー部
    pub key: u64,
}

impl Fid {
    /// 新しいFidを作成
    pub const fn new(container: u64, key: u64) -> Self {
        Self { container, key }
    }

    /// オブジェクト種別（コンテナの最上位バイト）
    pub const fn type_id(&self) -> u8 {
        (self.container >> 56) as u8
    }

    /// 文字列からFidをパース
    ///
    /// 各要素は `0x` 接頭辞付き/なしの16進数を受け付ける。前後の空白は許容しない。
    pub fn parse(value: &str) -> Result<Self, CommonError> {
        let invalid = |reason: &str| CommonError::InvalidFid {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        let (container, key) = value
            .split_once(':')
            .ok_or_else(|| invalid("missing ':' separator"))?;
        if key.contains(':') {
            return Err(invalid("too many ':' separators"));
        }

        let container = parse_hex_u64(container).map_err(invalid)?;
        let key = parse_hex_u64(key).map_err(invalid)?;
        Ok(Self { container, key })
    }
}

fn parse_hex_u64(part: &str) -> Result<u64, &'static str> {
    let digits = part
        .strip_prefix("0x")
        .or_else(|| part.strip_prefix("0X"))
        .unwrap_or(part);
    if digits.is_empty() {
        return Err("empty component");
    }
    // from_str_radix は先頭の '+' を受け付けてしまうため事前に弾く
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err("non-hexadecimal digit");
    }
    u64::from_str_radix(digits, 16).map_err(|_| "component overflows u64")
}

impl FromStr for Fid {
    type Err = CommonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Fid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}:{:#x}", self.container, self.key)
    }
}

impl Serialize for Fid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Fid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
