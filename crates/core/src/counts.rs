// crates/core/src/counts.rs
use core::iter::Sum;
use core::ops::{Add, AddAssign};

/// 1 ファイル分の行分類結果
///
/// 各行は blank / comment / bracket-only / code のいずれか 1 つにだけ分類されるため、
/// `total >= blank + comment + bracket_only` が常に成り立ちます。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileLineCounts {
    /// 全行数
    pub total: u64,
    /// 空行数
    pub blank: u64,
    /// 先頭コメント行数
    pub comment: u64,
    /// 括弧のみの行数（括弧除外が有効な場合のみ非ゼロ）
    pub bracket_only: u64,
}

/// Running totals across a whole run.
pub type RunTotals = FileLineCounts;

impl FileLineCounts {
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            total: 0,
            blank: 0,
            comment: 0,
            bracket_only: 0,
        }
    }

    /// コード行数 (`total - blank - comment - bracket_only`)
    #[inline]
    #[must_use]
    pub const fn code(&self) -> u64 {
        self.total
            .saturating_sub(self.blank)
            .saturating_sub(self.comment)
            .saturating_sub(self.bracket_only)
    }

    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.total == 0
    }
}

/// Field-wise sum of `totals` and `counts`.
#[inline]
#[must_use]
pub fn accumulate(totals: RunTotals, counts: &FileLineCounts) -> RunTotals {
    totals + *counts
}

impl Add for FileLineCounts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            total: self.total + rhs.total,
            blank: self.blank + rhs.blank,
            comment: self.comment + rhs.comment,
            bracket_only: self.bracket_only + rhs.bracket_only,
        }
    }
}

impl AddAssign for FileLineCounts {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<'a> AddAssign<&'a FileLineCounts> for FileLineCounts {
    fn add_assign(&mut self, rhs: &'a FileLineCounts) {
        *self = *self + *rhs;
    }
}

impl Sum for FileLineCounts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a FileLineCounts> for FileLineCounts {
    fn sum<I: Iterator<Item = &'a FileLineCounts>>(iter: I) -> Self {
        iter.fold(Self::zero(), accumulate)
    }
}
