//! Logging setup.
//!
//! `RUST_LOG` があればそれを優先し、なければ `level` を使います。
//! ログは stderr に出すので、stdout はコマンドの出力だけになります。

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// 指定レベルの EnvFilter（`RUST_LOG` が優先）
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_lowercase()))
}

/// グローバルな tracing subscriber を登録する
///
/// 2 回目以降の呼び出しは `TryInitError` を返します。
pub fn init_tracing(level: &str, json: bool) -> Result<(), TryInitError> {
    let registry = tracing_subscriber::registry().with(env_filter(level));

    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_fails() {
        // 他のテストが先に登録している可能性があるので 1 回目の結果は問わない
        let _ = init_tracing("debug", false);
        assert!(init_tracing("debug", true).is_err());
    }

    #[test]
    fn level_is_case_insensitive() {
        if std::env::var_os("RUST_LOG").is_none() {
            assert_eq!(env_filter("WARN").to_string(), "warn");
        }
    }
}
