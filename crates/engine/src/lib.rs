// crates/engine/src/lib.rs
use lexacount_core::{FileLineCounts, RunTotals, accumulate};
use std::path::Path;

pub mod config;
pub mod error;
pub mod inputs;
pub mod options;
pub mod processor;

use crate::config::Config;
use crate::error::{EngineError, Result};
pub use crate::inputs::TargetList;

/// 1 ファイル処理ごとに呼び出し側へ通知されるイベント
#[derive(Debug, Clone, Copy)]
pub enum FileEvent<'a> {
    Counted {
        path: &'a Path,
        counts: &'a FileLineCounts,
    },
    Failed {
        path: &'a Path,
        error: &'a EngineError,
    },
}

/// Resolves the target list named by `config`.
///
/// # Errors
///
/// Fails when any list file cannot be read.
pub fn resolve_targets(config: &Config) -> Result<TargetList> {
    let targets = TargetList::resolve(&config.files, &config.list_files)?;
    log::debug!(
        "resolved {} targets ({} direct, {} list files)",
        targets.len(),
        config.files.len(),
        config.list_files.len()
    );
    Ok(targets)
}

/// Scans every target in order and returns the run totals.
///
/// Files that cannot be opened or read are reported through `on_event` and left
/// out of the totals; they never stop the run.
///
/// # Errors
///
/// Only errors returned by `on_event` (typically a failed write to stdout) abort
/// the run.
pub fn run<F>(config: &Config, targets: &TargetList, mut on_event: F) -> Result<RunTotals>
where
    F: FnMut(FileEvent<'_>) -> std::io::Result<()>,
{
    let mut totals = RunTotals::zero();

    for path in targets {
        match processor::count_file(path, &config.scan) {
            Ok(counts) => {
                log::debug!(
                    "{}: total={} blank={} comment={} bracket_only={}",
                    path.display(),
                    counts.total,
                    counts.blank,
                    counts.comment,
                    counts.bracket_only
                );
                totals = accumulate(totals, &counts);
                on_event(FileEvent::Counted {
                    path,
                    counts: &counts,
                })?;
            }
            Err(error) => {
                log::debug!("skipping {error}");
                on_event(FileEvent::Failed { path, error: &error })?;
            }
        }
    }

    Ok(totals)
}
