//! First-definition check over the token stream.
//!
//! An identifier becomes defined at its first appearance as the target of a
//! plain `=` assignment; any other occurrence before that point is reported
//! once per name. This is a display-only diagnostic pass over tokens, not a
//! symbol table: scoping, types, and declarations are out of scope.

use std::collections::HashSet;

use crate::scanner::token::{Category, Token};

pub fn check<'src>(tokens: &[Token<'src>]) -> Vec<String> {
    let mut defined: HashSet<&'src str> = HashSet::new();
    let mut reported: HashSet<&'src str> = HashSet::new();
    let mut diagnostics = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        if token.category != Category::Identifier {
            continue;
        }
        let assigned = tokens
            .get(i + 1)
            .is_some_and(|next| next.category == Category::Operator && next.text == "=");
        if assigned {
            defined.insert(token.text);
        } else if !defined.contains(token.text) && reported.insert(token.text) {
            diagnostics.push(format!(
                "line {}: variable '{}' is used before it is defined",
                token.line, token.text
            ));
        }
    }

    diagnostics
}
