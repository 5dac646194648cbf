use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{}: {}", path.display(), os_message(source))]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {}", path.display(), os_message(source))]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {}", path.display(), os_message(source))]
    ListFileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {}", path.display(), os_message(source))]
    ListFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// リストファイル関連のエラーは対象一覧が不完全になるため致命的
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !matches!(self, Self::FileOpen { .. } | Self::FileRead { .. })
    }

    /// 下位の I/O エラー
    #[must_use]
    pub const fn io_error(&self) -> &std::io::Error {
        match self {
            Self::FileOpen { source, .. }
            | Self::FileRead { source, .. }
            | Self::ListFileOpen { source, .. }
            | Self::ListFileRead { source, .. }
            | Self::Io(source) => source,
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

/// OS のエラー文言のみ（`strerror` 相当、" (os error N)" を除く）
#[must_use]
pub fn os_message(err: &std::io::Error) -> String {
    let text = err.to_string();
    match err.raw_os_error() {
        Some(code) => match text.strip_suffix(&format!(" (os error {code})")) {
            Some(message) => message.to_string(),
            None => text,
        },
        None => text,
    }
}
