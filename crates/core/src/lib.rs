#![no_std]
#![allow(clippy::cargo_common_metadata)]

extern crate alloc;

pub mod classifier;
pub mod config;
pub mod counts;
pub mod scanner;

pub use classifier::{DelimiterSet, is_space};
pub use config::ScanConfig;
pub use counts::{FileLineCounts, RunTotals, accumulate};
pub use scanner::{LineScanner, count_bytes};
