use crate::scanner::token::Token;

/// Render one `Line {n}: {CATEGORY} -> {text}` row per token.
pub fn render(tokens: &[Token]) -> String {
    let mut buf = String::new();
    for token in tokens {
        buf.push_str(&token.to_string());
        buf.push('\n');
    }
    buf
}

pub fn to_json(tokens: &[Token]) -> String {
    serde_json::to_string_pretty(tokens).expect("tokens are serializable")
}
