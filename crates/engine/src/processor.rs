use crate::error::{EngineError, Result};
use lexacount_core::{FileLineCounts, LineScanner, ScanConfig};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Opens `path` in raw byte mode and classifies every line.
///
/// The handle is dropped before returning on every path.
///
/// # Errors
///
/// [`EngineError::FileOpen`] if the file cannot be opened, [`EngineError::FileRead`]
/// if reading fails part-way.
pub fn count_file(path: &Path, config: &ScanConfig) -> Result<FileLineCounts> {
    let file = File::open(path).map_err(|e| EngineError::FileOpen {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut reader = BufReader::new(file);

    count_reader(&mut reader, config).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

/// ストリーミングで読み込みながらスキャナに渡す
///
/// # Errors
///
/// Propagates read errors from `reader`.
pub fn count_reader<R: BufRead>(reader: &mut R, config: &ScanConfig) -> std::io::Result<FileLineCounts> {
    let mut scanner = LineScanner::new(config);

    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() {
            break;
        }
        scanner.feed(buf);
        let len = buf.len();
        reader.consume(len);
    }

    Ok(scanner.finish())
}
