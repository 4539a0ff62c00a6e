//! The matching loop: anchored, first-rule-wins, single pass.
//!
//! Priority strictly dominates match length. Each rule is greedy within its
//! own pattern, but once a rule fires no lower-priority rule is consulted,
//! even if it would have matched more text. Line accounting adds the number
//! of newlines inside each match, so multi-line comments and strings advance
//! the counter by exactly what they span.

use crate::error::LexicalError;
use crate::profile::Profile;
use crate::scanner::token::Token;

/// Cap on the reported offending text when the failure point has no
/// non-whitespace run to show.
const ERROR_CONTEXT_CHARS: usize = 20;

pub fn scan_all<'src>(
    source: &'src str,
    profile: &Profile,
) -> Result<Vec<Token<'src>>, LexicalError> {
    let mut tokens = Vec::new();
    let mut offset = 0;
    let mut line = 1;

    while offset < source.len() {
        let rest = &source[offset..];
        let fired = profile
            .rules()
            .iter()
            .find_map(|rule| rule.match_at(rest).map(|text| (rule, text)));

        let Some((rule, text)) = fired else {
            return Err(LexicalError::new(line, offending_text(rest), offset));
        };
        debug_assert!(!text.is_empty(), "a fired rule must consume input");

        if let Some(category) = rule.category() {
            tokens.push(Token::new(text, category, line));
        }
        line += text.bytes().filter(|&b| b == b'\n').count();
        offset += text.len();
    }

    Ok(tokens)
}

/// The longest run of non-whitespace characters at the failure point, or a
/// bounded prefix of the remaining input if the cursor sits on whitespace.
fn offending_text(rest: &str) -> &str {
    let run_end = rest
        .find(char::is_whitespace)
        .unwrap_or(rest.len());
    if run_end > 0 {
        return &rest[..run_end];
    }
    let bound = rest
        .char_indices()
        .nth(ERROR_CONTEXT_CHARS)
        .map_or(rest.len(), |(i, _)| i);
    &rest[..bound]
}
