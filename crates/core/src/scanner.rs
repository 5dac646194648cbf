// crates/core/src/scanner.rs
//! 行分類スキャナ
//!
//! バイト列を 1 パスで走査し、各行を blank / comment / bracket-only / code に分類します。
//!
//! - 引用符の内側ではコメントマーカーを検出しない
//! - コメントは行頭（空白のみが先行する位置）のマーカーだけを認識する
//! - 行をまたいで状態（引用符・マーカー照合位置）を持ち越さない
//!
//! 入力はチャンク単位で [`LineScanner::feed`] に渡せるため、ファイル全体を
//! メモリに載せる必要はありません。

use crate::classifier::is_space;
use crate::config::ScanConfig;
use crate::counts::FileLineCounts;

/// 行ごとにリセットされる状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineState {
    blank: bool,
    only_brackets: bool,
    quoted: bool,
    /// コメントマーカーの照合済みバイト数
    marker_pos: usize,
    comment: bool,
}

impl LineState {
    const fn fresh() -> Self {
        Self {
            blank: true,
            only_brackets: false,
            quoted: false,
            marker_pos: 0,
            comment: false,
        }
    }
}

/// Incremental line classifier for a single file.
///
/// ```
/// use lexacount_core::{LineScanner, ScanConfig};
///
/// let config = ScanConfig::default();
/// let mut scanner = LineScanner::new(&config);
/// scanner.feed(b"// header\nint x");
/// scanner.feed(b" = 1;\n\n");
/// let counts = scanner.finish();
/// assert_eq!((counts.total, counts.comment, counts.blank), (3, 1, 1));
/// ```
#[derive(Debug, Clone)]
pub struct LineScanner<'a> {
    config: &'a ScanConfig,
    counts: FileLineCounts,
    line: LineState,
    /// 最後の改行以降にバイトを読んだか
    line_open: bool,
}

impl<'a> LineScanner<'a> {
    #[must_use]
    pub const fn new(config: &'a ScanConfig) -> Self {
        Self {
            config,
            counts: FileLineCounts::zero(),
            line: LineState::fresh(),
            line_open: false,
        }
    }

    /// Scans the next chunk of the input.
    pub fn feed(&mut self, chunk: &[u8]) {
        for &byte in chunk {
            self.step(byte);
        }
    }

    /// 改行で終わった行だけを数えた途中経過
    #[must_use]
    pub const fn counts(&self) -> FileLineCounts {
        self.counts
    }

    /// 入力終端を処理して最終結果を返す
    ///
    /// 末尾に改行のない最終行も 1 行として分類されます。
    #[must_use]
    pub fn finish(mut self) -> FileLineCounts {
        if self.line_open {
            if !self.line.comment {
                self.flush_marker();
            }
            self.end_line();
        }
        self.counts
    }

    fn step(&mut self, byte: u8) {
        self.line_open = true;

        if !self.line.comment {
            if self.config.is_quote(byte) {
                self.line.quoted = !self.line.quoted;
            }
            if !self.match_marker(byte) {
                self.classify(byte);
            }
        }

        if byte == b'\n' {
            self.end_line();
        }
    }

    const fn comment_eligible(&self) -> bool {
        self.line.blank && !self.line.quoted
    }

    /// Advances the marker match. Returns `true` when `byte` was consumed by it.
    fn match_marker(&mut self, byte: u8) -> bool {
        let marker = self.config.comment_marker();

        if self.line.marker_pos > 0
            && (!self.comment_eligible() || marker[self.line.marker_pos] != byte)
        {
            self.flush_marker();
        }

        if marker.is_empty() || !self.comment_eligible() {
            return false;
        }

        if marker[self.line.marker_pos] != byte {
            return false;
        }

        self.line.marker_pos += 1;
        if self.line.marker_pos == marker.len() {
            self.line.comment = true;
            self.line.marker_pos = 0;
        }
        true
    }

    /// 照合途中で不一致になったマーカー接頭辞を通常の内容として扱う
    fn flush_marker(&mut self) {
        let config = self.config;
        let pending = self.line.marker_pos;
        self.line.marker_pos = 0;
        for &byte in &config.comment_marker()[..pending] {
            self.classify(byte);
        }
    }

    fn classify(&mut self, byte: u8) {
        if self.config.exclude_brackets() && self.config.is_bracket(byte) {
            self.line.only_brackets = true;
        } else if !is_space(byte) {
            self.line.blank = false;
            self.line.only_brackets = false;
        }
    }

    fn end_line(&mut self) {
        let line = self.line;
        if line.comment {
            self.counts.comment += 1;
        } else if line.only_brackets && line.blank {
            self.counts.bracket_only += 1;
        } else if line.blank {
            self.counts.blank += 1;
        }
        self.counts.total += 1;

        self.line = LineState::fresh();
        self.line_open = false;
    }
}

/// Classifies every line of an in-memory buffer.
#[must_use]
pub fn count_bytes(input: &[u8], config: &ScanConfig) -> FileLineCounts {
    let mut scanner = LineScanner::new(config);
    scanner.feed(input);
    scanner.finish()
}
