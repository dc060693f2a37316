use std::fmt;

use super::spanned::{span_snippet, Span};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScriptErrorKind {
    UnexpectedEndOfInput,
    ExpectedOpeningBrace,
    UnrecognizedOperand,
    UnterminatedScope,
    UnmatchedClosingBrace,
}

impl ScriptErrorKind {
    pub fn message(&self) -> &'static str {
        match self {
            ScriptErrorKind::UnexpectedEndOfInput => {
                "unexpected end of input while parsing a statement"
            }
            ScriptErrorKind::ExpectedOpeningBrace => "expected opening brace after scope",
            ScriptErrorKind::UnrecognizedOperand => "unrecognized operand, expected =",
            ScriptErrorKind::UnterminatedScope => "unterminated scope, closing brace expected",
            ScriptErrorKind::UnmatchedClosingBrace => "unmatched closing brace",
        }
    }
}

/// A malformed script. Always fatal to the run that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptError {
    pub kind: ScriptErrorKind,
    pub span: Option<Span>,
}

impl ScriptError {
    pub fn new(kind: ScriptErrorKind, span: Option<Span>) -> Self {
        Self { kind, span }
    }

    pub fn at(kind: ScriptErrorKind, span: Span) -> Self {
        Self::new(kind, Some(span))
    }

    pub fn end_of_input() -> Self {
        Self::new(ScriptErrorKind::UnexpectedEndOfInput, None)
    }

    /// Renders the message, followed by the offending line of `source` when
    /// the error points at a token.
    pub fn render(&self, source: &str) -> String {
        let located = self
            .span
            .and_then(|span| span_snippet(source, span).map(|snippet| (span, snippet)));

        let (span, snippet) = match located {
            Some(located) => located,
            None => return self.kind.message().to_string(),
        };

        let width = source
            .get(span.start..span.end)
            .map_or(1, |text| text.chars().count().max(1));

        format!(
            "{} (line {}, column {})\n{}\n{}{}",
            self.kind.message(),
            snippet.line,
            snippet.column,
            snippet.source_line,
            " ".repeat(snippet.column - 1),
            "^".repeat(width)
        )
    }
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.message())
    }
}

impl std::error::Error for ScriptError {}
