// src/lib.rs
pub mod app;
pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod parsers;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `--version` とヘルプの先頭に表示する 1 行
pub const BANNER: &str = concat!(
    "LexaCount v",
    env!("CARGO_PKG_VERSION"),
    " - Count source lines of code."
);

pub const COPYRIGHT: &str = "Copyright (c) 2025 anic17 Software";
