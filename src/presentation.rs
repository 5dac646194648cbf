// src/presentation.rs
//! 集計結果の表示
//!
//! 文章形式（1 ファイル 1 行）と表形式の 2 種類。どちらも最後に "Total lines" 行を出力します。

use lexacount_core::FileLineCounts;
use lexacount_engine::inputs::MIN_NAME_WIDTH;
use lexacount_engine::options::OutputFormat;
use std::io::{self, Write};

/// Label of the final totals row.
pub const TOTAL_LABEL: &str = "Total lines";

const CELL_WIDTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presenter {
    format: OutputFormat,
    show_brackets: bool,
    name_width: usize,
}

impl Presenter {
    #[must_use]
    pub fn new(format: OutputFormat, show_brackets: bool, name_width: usize) -> Self {
        Self {
            format,
            show_brackets,
            name_width: name_width.max(MIN_NAME_WIDTH),
        }
    }

    /// 表形式ではヘッダ行と区切り線を出力する
    ///
    /// # Errors
    ///
    /// Returns any error from `out`.
    pub fn write_header<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.format != OutputFormat::Table {
            return Ok(());
        }
        let mut header = format!(
            "| {:<width$} | {:<CELL_WIDTH$} | {:<CELL_WIDTH$} | {:<CELL_WIDTH$} |",
            "File",
            "Code lines",
            "Blank",
            "Comments",
            width = self.name_width
        );
        if self.show_brackets {
            header.push_str(&format!(" {:<CELL_WIDTH$} |", "Brackets"));
        }
        writeln!(out, "{header}")?;
        self.write_separator(out)
    }

    /// # Errors
    ///
    /// Returns any error from `out`.
    pub fn write_row<W: Write>(&self, out: &mut W, name: &str, counts: &FileLineCounts) -> io::Result<()> {
        let line = match self.format {
            OutputFormat::Plain => format_plain(name, counts, self.show_brackets),
            OutputFormat::Table => self.format_table_row(name, counts),
        };
        writeln!(out, "{line}")
    }

    /// 合計行（表形式では直前に区切り線）
    ///
    /// # Errors
    ///
    /// Returns any error from `out`.
    pub fn write_totals<W: Write>(&self, out: &mut W, totals: &FileLineCounts) -> io::Result<()> {
        if self.format == OutputFormat::Table {
            self.write_separator(out)?;
        }
        self.write_row(out, TOTAL_LABEL, totals)
    }

    fn write_separator<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let cell = "-".repeat(CELL_WIDTH + 2);
        let columns = if self.show_brackets { 4 } else { 3 };

        let mut rule = format!("|{}|", "-".repeat(self.name_width + 2));
        for _ in 0..columns {
            rule.push_str(&cell);
            rule.push('|');
        }
        writeln!(out, "{rule}")
    }

    fn format_table_row(&self, name: &str, counts: &FileLineCounts) -> String {
        let mut row = format!(
            "| {:<width$} | {:<CELL_WIDTH$} | {:<CELL_WIDTH$} | {:<CELL_WIDTH$} |",
            name,
            counts.code(),
            counts.blank,
            counts.comment,
            width = self.name_width
        );
        if self.show_brackets {
            row.push_str(&format!(" {:<CELL_WIDTH$} |", counts.bracket_only));
        }
        row
    }
}

/// `name: N code lines (and X blank lines and Y comments and Z lines with only brackets)`
#[must_use]
pub fn format_plain(name: &str, counts: &FileLineCounts, show_brackets: bool) -> String {
    let mut line = format!("{name}: {} code lines", counts.code());

    let mut parts = Vec::with_capacity(3);
    if counts.blank > 0 {
        parts.push(format!("{} blank {}", counts.blank, plural(counts.blank, "line", "lines")));
    }
    if counts.comment > 0 {
        parts.push(format!("{} {}", counts.comment, plural(counts.comment, "comment", "comments")));
    }
    if show_brackets && counts.bracket_only > 0 {
        parts.push(format!(
            "{} {} with only brackets",
            counts.bracket_only,
            plural(counts.bracket_only, "line", "lines")
        ));
    }

    if !parts.is_empty() {
        line.push_str(" (and ");
        line.push_str(&parts.join(" and "));
        line.push(')');
    }
    line
}

const fn plural(n: u64, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 { one } else { many }
}
