// crates/core/src/classifier.rs
//! 文字分類ユーティリティ
//!
//! 引用符・括弧といった区切り文字集合の判定と、C ロケール互換の空白判定を提供します。

use core::fmt;

/// バイト単位の区切り文字集合（256 エントリのルックアップテーブル）
#[derive(Clone, PartialEq, Eq)]
pub struct DelimiterSet {
    table: [bool; 256],
}

impl DelimiterSet {
    /// 空の集合
    #[must_use]
    pub const fn empty() -> Self {
        Self { table: [false; 256] }
    }

    /// バイト列に含まれる全てのバイトを要素とする集合を作る
    #[must_use]
    pub const fn from_bytes(bytes: &[u8]) -> Self {
        let mut table = [false; 256];
        let mut i = 0;
        while i < bytes.len() {
            table[bytes[i] as usize] = true;
            i += 1;
        }
        Self { table }
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, byte: u8) -> bool {
        self.table[byte as usize]
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.table.iter().any(|&b| b)
    }

    /// Members in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(|&b| self.contains(b))
    }
}

impl Default for DelimiterSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for DelimiterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter().map(char::from))
            .finish()
    }
}

impl From<&str> for DelimiterSet {
    fn from(value: &str) -> Self {
        Self::from_bytes(value.as_bytes())
    }
}

/// C ロケールの `isspace` と同じ判定（`\v` を含む点が `u8::is_ascii_whitespace` と異なる）
#[inline]
#[must_use]
pub const fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}
