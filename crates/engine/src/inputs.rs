// crates/engine/src/inputs.rs
//! 対象ファイル一覧の解決
//!
//! コマンドライン引数で直接指定されたファイルの後に、各リストファイルの内容を
//! 指定順・行順に連結します。表形式出力の列幅を決めるため、出力開始前に
//! 全リストファイルを読み切ります。

use crate::error::{EngineError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// ファイル名列の最小幅（"Total lines" の長さ）
pub const MIN_NAME_WIDTH: usize = 11;

/// Ordered list of files to scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetList {
    targets: Vec<PathBuf>,
}

impl TargetList {
    /// Direct targets first, then every list file's entries in order.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ListFileOpen`] or [`EngineError::ListFileRead`] when a
    /// list file cannot be read; the target set would be incomplete.
    pub fn resolve(direct: &[PathBuf], list_files: &[PathBuf]) -> Result<Self> {
        let mut targets = direct.to_vec();
        for list in list_files {
            let entries = read_list_file(list)?;
            log::debug!(
                "list file {} contributed {} targets",
                list.display(),
                entries.len()
            );
            targets.extend(entries);
        }
        Ok(Self { targets })
    }

    #[must_use]
    pub const fn from_paths(targets: Vec<PathBuf>) -> Self {
        Self { targets }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.targets.iter()
    }

    /// 最長のファイル名の文字数（最小 [`MIN_NAME_WIDTH`]）
    #[must_use]
    pub fn name_width(&self) -> usize {
        self.targets
            .iter()
            .map(|p| display_name(p).chars().count())
            .max()
            .unwrap_or(0)
            .max(MIN_NAME_WIDTH)
    }
}

impl<'a> IntoIterator for &'a TargetList {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.targets.iter()
    }
}

/// 表示用のファイル名
#[must_use]
pub fn display_name(path: &Path) -> String {
    path.display().to_string()
}

/// Reads a list file: one target per line.
///
/// # Errors
///
/// Returns an error if the list file cannot be opened or read.
pub fn read_list_file(path: &Path) -> Result<Vec<PathBuf>> {
    let file = File::open(path).map_err(|e| EngineError::ListFileOpen {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_list(BufReader::new(file)).map_err(|e| EngineError::ListFileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

/// 行末の CR/LF を取り除き、空行を読み飛ばしてファイル名を集める
///
/// # Errors
///
/// Propagates read errors from `reader`.
pub fn parse_list<R: BufRead>(mut reader: R) -> std::io::Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    let mut line_buf = Vec::new();

    loop {
        line_buf.clear();
        if reader.read_until(b'\n', &mut line_buf)? == 0 {
            break;
        }
        let mut name: &[u8] = &line_buf;
        while let [rest @ .., b'\r' | b'\n'] = name {
            name = rest;
        }
        if name.is_empty() {
            continue;
        }
        let path = path_from_bytes(name);
        log::trace!("list entry: {}", path.display());
        entries.push(path);
    }

    Ok(entries)
}

#[cfg(unix)]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;
    PathBuf::from(OsStr::from_bytes(bytes))
}

// UTF-8 以外のファイル名は置換文字になる
#[cfg(not(unix))]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(bytes).into_owned())
}
