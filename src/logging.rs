// src/logging.rs
//! ログ出力の初期化
//!
//! `tracing-subscriber` を標準エラー出力に向けて設定します。ライブラリ側の
//! `log` レコードも同じ購読者へ流れます。既定では何も出力しません。

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `LEXACOUNT_LOG=debug`).
pub const LOG_ENV: &str = "LEXACOUNT_LOG";

/// Installs the global subscriber. Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(true)
        .without_time()
        .try_init();
}
