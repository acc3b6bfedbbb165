//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables with fallback
//! to deprecated variable names with warning logs.

use hax_common::config::{DecodeFailurePolicy, EntryFailurePolicy, HaxConfig};
use std::path::PathBuf;
use std::time::Duration;

/// Get an environment variable with fallback to a deprecated name
///
/// If the new variable name is set, returns its value.
/// If only the old (deprecated) variable name is set, returns its value
/// and logs a deprecation warning.
///
/// # Example
/// ```
/// use hax::config::get_env_with_fallback;
///
/// let port = get_env_with_fallback("HAX_PORT", "HA_PORT");
/// ```
pub fn get_env_with_fallback(new_name: &str, old_name: &str) -> Option<String> {
    if let Ok(val) = std::env::var(new_name) {
        return Some(val);
    }
    if let Ok(val) = std::env::var(old_name) {
        tracing::warn!(
            "Environment variable '{}' is deprecated, use '{}' instead",
            old_name,
            new_name
        );
        return Some(val);
    }
    None
}

/// Get an environment variable with fallback and default value
pub fn get_env_with_fallback_or(new_name: &str, old_name: &str, default: &str) -> String {
    get_env_with_fallback(new_name, old_name).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable with fallback, parsing to a specific type
///
/// Returns `default` if neither variable is set or parsing fails. A value that
/// is set but fails to parse is reported with a warning.
pub fn get_env_with_fallback_parse<T: std::str::FromStr>(
    new_name: &str,
    old_name: &str,
    default: T,
) -> T {
    match get_env_with_fallback(new_name, old_name) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "Ignoring invalid value '{}' for '{}', using default",
                raw,
                new_name
            );
            default
        }),
        None => default,
    }
}

/// 環境変数から取り込みサーバー設定を読み込む
///
/// 未設定・不正な値は `HaxConfig::default()` の値にフォールバックする。
pub fn load_from_env() -> HaxConfig {
    let defaults = HaxConfig::default();

    let forward_url = get_env_with_fallback("HAX_FORWARD_URL", "HA_FORWARD_URL")
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty());

    HaxConfig {
        host: get_env_with_fallback_or("HAX_HOST", "HA_HOST", &defaults.host),
        port: get_env_with_fallback_parse("HAX_PORT", "HA_PORT", defaults.port),
        forward_url,
        forward_timeout_secs: get_env_with_fallback_parse(
            "HAX_FORWARD_TIMEOUT_SECS",
            "HA_FORWARD_TIMEOUT_SECS",
            defaults.forward_timeout_secs,
        ),
        max_body_bytes: get_env_with_fallback_parse(
            "HAX_MAX_BODY_BYTES",
            "HA_MAX_BODY_BYTES",
            defaults.max_body_bytes,
        ),
        decode_failure_policy: get_env_with_fallback_parse::<DecodeFailurePolicy>(
            "HAX_DECODE_FAILURE_POLICY",
            "HA_DECODE_FAILURE_POLICY",
            defaults.decode_failure_policy,
        ),
        entry_failure_policy: get_env_with_fallback_parse::<EntryFailurePolicy>(
            "HAX_ENTRY_FAILURE_POLICY",
            "HA_ENTRY_FAILURE_POLICY",
            defaults.entry_failure_policy,
        ),
    }
}

/// 転送タイムアウトを取得
pub fn forward_timeout(config: &HaxConfig) -> Duration {
    Duration::from_secs(config.forward_timeout_secs)
}

/// データディレクトリを取得
///
/// 環境変数 `HAX_DATA_DIR` から取得し、未設定の場合は `~/.hax` を返す。
pub fn data_dir() -> Option<PathBuf> {
    if let Some(dir) = get_env_with_fallback("HAX_DATA_DIR", "HA_DATA_DIR") {
        return Some(PathBuf::from(dir));
    }
    dirs::home_dir().map(|home| home.join(".hax"))
}
