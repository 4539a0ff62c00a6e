use std::fmt;

use serde::Serialize;

/// Lexical class of a token. The set is closed; profile-specific refinements
/// (preprocessor directives, header names) are members rather than an open
/// extension point, so downstream matches stay exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Keyword,
    Identifier,
    Integer,
    Float,
    Operator,
    Delimiter,
    Comment,
    String,
    PreprocessorDirective,
    StandardHeader,
    UserHeader,
}

/// A classified, line-stamped span of source text.
///
/// `text` borrows from the scanned source, so tokens stay valid after the
/// scan that produced them for as long as the source does. `line` is the
/// 1-based line on which the match begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'src> {
    pub text: &'src str,
    pub category: Category,
    pub line: usize,
}

impl<'src> Token<'src> {
    pub fn new(text: &'src str, category: Category, line: usize) -> Self {
        Self {
            text,
            category,
            line,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {} -> {}", self.line, self.category, self.text)
    }
}
