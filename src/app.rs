// src/app.rs
use crate::config::Config;
use crate::error::Result;
use crate::presentation::Presenter;
use lexacount_core::RunTotals;
use lexacount_engine::FileEvent;
use lexacount_engine::inputs::display_name;
use std::io::{self, Write};

/// Counts every target of `config`, printing to stdout and stderr.
///
/// # Errors
///
/// Fails when a list file cannot be read or stdout cannot be written.
pub fn run(config: &Config) -> Result<RunTotals> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    run_with(config, &mut stdout.lock(), &mut stderr.lock())
}

/// [`run`] with explicit output streams.
///
/// # Errors
///
/// Fails when a list file cannot be read or `out` cannot be written.
pub fn run_with<W: Write, E: Write>(config: &Config, out: &mut W, err: &mut E) -> Result<RunTotals> {
    // 列幅の確定にリストファイルの全内容が必要なので、出力より先に解決する
    let targets = lexacount_engine::resolve_targets(config)?;
    let name_width = targets.name_width();
    log::debug!("format={:?} name_width={name_width}", config.format);
    let presenter = Presenter::new(config.format, config.exclude_brackets(), name_width);

    presenter.write_header(out)?;

    let totals = lexacount_engine::run(config, &targets, |event| match event {
        FileEvent::Counted { path, counts } => {
            presenter.write_row(&mut *out, &display_name(path), counts)
        }
        FileEvent::Failed { error, .. } => {
            if config.exclude_unopenable {
                Ok(())
            } else {
                writeln!(err, "Error: {error}")
            }
        }
    })?;

    presenter.write_totals(out, &totals)?;
    out.flush()?;
    Ok(totals)
}
