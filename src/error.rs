// src/error.rs
use lexacount_engine::error::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl AppError {
    /// プロセスの終了コード
    ///
    /// リストファイルを開けなかった場合は OS のエラー番号を負にした値（下位 8 ビット）。
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Engine(e @ (EngineError::ListFileOpen { .. } | EngineError::ListFileRead { .. })) => {
                e.io_error().raw_os_error().map_or(1, negated_os_code)
            }
            _ => 1,
        }
    }

    /// `-x` 指定時に表示を抑制すべきエラーか
    #[must_use]
    pub const fn is_list_file_error(&self) -> bool {
        matches!(
            self,
            Self::Engine(EngineError::ListFileOpen { .. } | EngineError::ListFileRead { .. })
        )
    }
}

fn negated_os_code(code: i32) -> u8 {
    match code.wrapping_neg().to_le_bytes()[0] {
        0 => 1,
        byte => byte,
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
