use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// The single failure mode of a scan: no rule matched at the cursor.
///
/// Carries the 1-based line and the offending text (the longest run of
/// non-whitespace characters at the failure point). Unterminated strings,
/// unterminated block comments, and stray characters all surface as this
/// one kind; the offending text is the diagnostic payload.
#[derive(Error, Debug, Diagnostic)]
#[error("lexical error on line {line}: unrecognized token '{offending}'")]
#[diagnostic(code(multilex::lex))]
pub struct LexicalError {
    pub line: usize,
    pub offending: String,
    #[label("no rule matches here")]
    pub span: SourceSpan,
    #[source_code]
    pub src: NamedSource<String>,
}

impl LexicalError {
    pub fn new(line: usize, offending: impl Into<String>, offset: usize) -> Self {
        let offending = offending.into();
        Self {
            line,
            span: SourceSpan::new(offset.into(), offending.len()),
            offending,
            src: NamedSource::new("input", String::new()),
        }
    }

    /// Attach source code for fancy miette diagnostics
    pub fn with_source_code(self, name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            src: NamedSource::new(name.into(), source.into()),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexical_error_implements_diagnostic() {
        let err = LexicalError::new(1, "@", 8);
        let diag: &dyn Diagnostic = &err;
        assert!(diag.code().is_some());
    }

    #[test]
    fn display_names_line_and_offending_text() {
        let err = LexicalError::new(3, "@@", 12);
        let message = err.to_string();
        assert!(message.contains("line 3"));
        assert!(message.contains("'@@'"));
    }

    #[test]
    fn with_source_code_preserves_fields() {
        let err = LexicalError::new(2, "$", 5).with_source_code("demo.c", "int x\n$\n");
        assert_eq!(err.line, 2);
        assert_eq!(err.offending, "$");
        assert_eq!(err.span, SourceSpan::new(5.into(), 1));
    }
}
