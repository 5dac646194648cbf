use crate::options::OutputFormat;
use derive_builder::Builder;
use lexacount_core::ScanConfig;
use std::path::PathBuf;

/// Settings for one invocation, built once from the command line.
#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub scan: ScanConfig,
    /// コマンドラインで直接指定されたファイル
    #[builder(default)]
    pub files: Vec<PathBuf>,
    /// 対象ファイル名を 1 行ずつ列挙したリストファイル
    #[builder(default)]
    pub list_files: Vec<PathBuf>,
    #[builder(default)]
    pub format: OutputFormat,
    /// 開けなかったファイルのエラー表示を抑制する
    #[builder(default)]
    pub exclude_unopenable: bool,
}

impl Config {
    #[must_use]
    pub const fn exclude_brackets(&self) -> bool {
        self.scan.exclude_brackets()
    }
}
