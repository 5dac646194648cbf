use alloc::vec::Vec;

use crate::classifier::DelimiterSet;

/// 既定の行コメントマーカー
pub const DEFAULT_COMMENT_MARKER: &str = "//";
/// 既定の引用符集合
pub const DEFAULT_QUOTES: &str = "'\"";
/// 既定の括弧集合（セミコロンを含む）
pub const DEFAULT_BRACKETS: &str = "{}[]();";

/// Immutable scan settings shared by every file of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    comment_marker: Vec<u8>,
    quotes: DelimiterSet,
    brackets: DelimiterSet,
    exclude_brackets: bool,
}

impl ScanConfig {
    #[must_use]
    pub fn new(
        comment_marker: impl Into<Vec<u8>>,
        quotes: DelimiterSet,
        brackets: DelimiterSet,
        exclude_brackets: bool,
    ) -> Self {
        Self {
            comment_marker: comment_marker.into(),
            quotes,
            brackets,
            exclude_brackets,
        }
    }

    #[must_use]
    pub fn with_comment_marker(mut self, marker: impl Into<Vec<u8>>) -> Self {
        self.comment_marker = marker.into();
        self
    }

    #[must_use]
    pub fn with_quotes(mut self, quotes: DelimiterSet) -> Self {
        self.quotes = quotes;
        self
    }

    #[must_use]
    pub fn with_brackets(mut self, brackets: DelimiterSet) -> Self {
        self.brackets = brackets;
        self
    }

    #[must_use]
    pub fn with_exclude_brackets(mut self, exclude: bool) -> Self {
        self.exclude_brackets = exclude;
        self
    }

    /// 行コメントマーカー。空の場合コメント検出は行われない
    #[must_use]
    pub fn comment_marker(&self) -> &[u8] {
        &self.comment_marker
    }

    #[must_use]
    pub const fn exclude_brackets(&self) -> bool {
        self.exclude_brackets
    }

    #[inline]
    #[must_use]
    pub const fn is_quote(&self, byte: u8) -> bool {
        self.quotes.contains(byte)
    }

    #[inline]
    #[must_use]
    pub const fn is_bracket(&self, byte: u8) -> bool {
        self.brackets.contains(byte)
    }

    #[must_use]
    pub const fn quotes(&self) -> &DelimiterSet {
        &self.quotes
    }

    #[must_use]
    pub const fn brackets(&self) -> &DelimiterSet {
        &self.brackets
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_COMMENT_MARKER,
            DelimiterSet::from(DEFAULT_QUOTES),
            DelimiterSet::from(DEFAULT_BRACKETS),
            false,
        )
    }
}
