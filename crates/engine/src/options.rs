/// 出力形式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// 1 ファイル 1 行の文章形式
    #[default]
    Plain,
    /// 罫線付きの表形式
    Table,
}
