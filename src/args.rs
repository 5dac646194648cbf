// src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use crate::parsers::{BracketSet, CommentMarker, QuoteSet};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "lexacount",
    about = "Count source lines of code",
    before_help = crate::BANNER,
    after_help = crate::COPYRIGHT,
    disable_help_flag = true,
    disable_version_flag = true
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Do not count lines containing only brackets or parenthesis
    #[arg(short = 'b', long = "bracket")]
    pub bracket: bool,

    /// Print the output using tables
    #[arg(short = 't', long = "table")]
    pub table: bool,

    /// Load file names from a file (may be repeated)
    #[arg(
        short = 'l',
        long = "list",
        value_name = "LIST FILE",
        action = ArgAction::Append,
        allow_hyphen_values = true,
        value_hint = ValueHint::FilePath
    )]
    pub list: Vec<PathBuf>,

    /// Exclude files that failed to open
    #[arg(short = 'x', long = "exclude")]
    pub exclude: bool,

    /// Display program version
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Display this help menu
    #[arg(short = 'h', long = "help", action = ArgAction::Help)]
    #[allow(dead_code)]
    help: Option<bool>,

    /// Line comment marker
    #[arg(short = 'c', long = "comment", value_name = "MARKER", default_value = "//")]
    pub comment: CommentMarker,

    /// Characters that open and close string literals
    #[arg(long = "quotes", value_name = "CHARS", default_value = "'\"")]
    pub quotes: QuoteSet,

    /// Characters treated as brackets by --bracket
    #[arg(long = "brackets", value_name = "CHARS", default_value = "{}[]();")]
    pub brackets: BracketSet,

    /// Files to count
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub files: Vec<PathBuf>,
}
