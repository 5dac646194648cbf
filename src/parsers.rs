// src/parsers.rs
use lexacount_core::DelimiterSet;
use std::str::FromStr;

/// Non-empty line comment marker (e.g. `//`, `#`, `--`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentMarker(pub String);

impl CommentMarker {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl FromStr for CommentMarker {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("comment marker must not be empty".to_string());
        }
        if s.bytes().any(|b| b == b'\n') {
            return Err("comment marker must not contain a newline".to_string());
        }
        Ok(Self(s.to_string()))
    }
}

/// 引用符として扱う文字集合（空集合を許す）
#[derive(Debug, Clone)]
pub struct QuoteSet(pub DelimiterSet);

impl FromStr for QuoteSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_delimiters(s).map(Self)
    }
}

/// 括弧として扱う文字集合
#[derive(Debug, Clone)]
pub struct BracketSet(pub DelimiterSet);

impl FromStr for BracketSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("bracket set must not be empty".to_string());
        }
        parse_delimiters(s).map(Self)
    }
}

fn parse_delimiters(s: &str) -> Result<DelimiterSet, String> {
    if let Some(c) = s.chars().find(|c| !c.is_ascii()) {
        return Err(format!("Delimiter must be an ASCII character: {c}"));
    }
    if let Some(c) = s.chars().find(|c| c.is_ascii_whitespace() || c.is_ascii_control()) {
        return Err(format!("Delimiter must be printable: {:?}", c));
    }
    Ok(DelimiterSet::from(s))
}
