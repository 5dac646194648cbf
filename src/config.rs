// src/config.rs
use crate::args::Args;
use crate::error::AppError;
pub use lexacount_engine::config::{Config, ConfigBuilder};
use lexacount_engine::options::OutputFormat;
use lexacount_core::ScanConfig;

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let scan = ScanConfig::new(
            args.comment.0.into_bytes(),
            args.quotes.0,
            args.brackets.0,
            args.bracket,
        );
        let format = if args.table {
            OutputFormat::Table
        } else {
            OutputFormat::Plain
        };

        ConfigBuilder::default()
            .scan(scan)
            .files(args.files)
            .list_files(args.list)
            .format(format)
            .exclude_unopenable(args.exclude)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))
    }
}
