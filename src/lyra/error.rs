//! Errors raised while translating lyra source.
//!
//! Every failure is fatal to the whole translation: the first error aborts, no partial output
//! is produced. An [Error] carries a machine-checkable [ErrorKind], the offending token text
//! (when there is one) and its byte span. Line and column are filled in by
//! [Error::locate] once the source text is at hand.

use logos::Span;
use std::fmt;

/// Result type for the translator.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A character that starts no token.
    UnexpectedCharacter,
    /// A closer at depth 0, or one that does not match the innermost open scope.
    UnexpectedToken,
    /// A lone `"` outside a string literal.
    UnexpectedQuote,
    /// The token stream ended while a scope was still open.
    UnterminatedScope,
    /// A short map literal with an odd number of elements.
    UnpairedMapKey,
    /// Bracket nesting deeper than the parser allows.
    NestingTooDeep,
}

impl ErrorKind {
    /// Stable tag, suitable for matching in scripts and tests.
    pub fn tag(&self) -> &'static str {
        match self {
            ErrorKind::UnexpectedCharacter => "lex-error",
            ErrorKind::UnexpectedToken => "unexpected-token",
            ErrorKind::UnexpectedQuote => "unexpected-quote",
            ErrorKind::UnterminatedScope => "unterminated-scope",
            ErrorKind::UnpairedMapKey => "unpaired-map-key",
            ErrorKind::NestingTooDeep => "nesting-too-deep",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// 1-based line and column (in characters) of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub col: usize,
}

impl Location {
    /// Resolve a byte offset inside `source`.
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let offset = offset.min(source.len());
        let before = source.get(..offset).unwrap_or(source);
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let col = before[line_start..].chars().count() + 1;
        Self { line, col }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pub kind: ErrorKind,
    /// Source text of the offending token, or the expected closer for unterminated scopes.
    pub token: Option<String>,
    pub span: Option<Span>,
    pub location: Option<Location>,
}

impl Error {
    pub fn new(kind: ErrorKind, token: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            token: Some(token.into()),
            span: Some(span),
            location: None,
        }
    }

    pub fn unexpected_character(c: char, span: Span) -> Self {
        Self::new(ErrorKind::UnexpectedCharacter, c.to_string(), span)
    }

    pub fn unexpected_token(token: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorKind::UnexpectedToken, token, span)
    }

    pub fn unexpected_quote(span: Span) -> Self {
        Self::new(ErrorKind::UnexpectedQuote, "\"", span)
    }

    /// `expected` is the closer that never arrived, `span` points at its opener.
    pub fn unterminated_scope(expected: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorKind::UnterminatedScope, expected, span)
    }

    pub fn unpaired_map_key(key: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorKind::UnpairedMapKey, key, span)
    }

    pub fn nesting_too_deep(limit: usize, span: Span) -> Self {
        Self::new(ErrorKind::NestingTooDeep, limit.to_string(), span)
    }

    /// Fill in the line/column from the source the span refers to.
    pub fn locate(mut self, source: &str) -> Self {
        if let Some(span) = &self.span {
            self.location = Some(Location::from_offset(source, span.start));
        }
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(location) = &self.location {
            write!(f, "[{}] ", location)?;
        }
        let token = self.token.as_deref().unwrap_or("");
        match self.kind {
            ErrorKind::UnexpectedCharacter => write!(f, "unexpected character '{token}'"),
            ErrorKind::UnexpectedToken => write!(f, "unexpected '{token}'"),
            ErrorKind::UnexpectedQuote => write!(f, "unexpected '\"'"),
            ErrorKind::UnterminatedScope => {
                write!(f, "unterminated scope: expected '{token}', got EOF")
            }
            ErrorKind::UnpairedMapKey => write!(f, "map literal key '{token}' has no value"),
            ErrorKind::NestingTooDeep => write!(f, "nesting deeper than {token} scopes"),
        }?;
        write!(f, " ({})", self.kind.tag())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_counts_lines_and_chars() {
        let source = "ab\ncdé f";
        assert_eq!(Location::from_offset(source, 0), Location { line: 1, col: 1 });
        assert_eq!(Location::from_offset(source, 3), Location { line: 2, col: 1 });
        // 'é' is two bytes but one column
        assert_eq!(Location::from_offset(source, 8), Location { line: 2, col: 5 });
    }

    #[test]
    fn display_includes_token_location_and_tag() {
        let err = Error::unexpected_token(")", 5..6).locate("(a b))");
        assert_eq!(err.to_string(), "[1:6] unexpected ')' (unexpected-token)");
    }

    #[test]
    fn unterminated_names_expected_closer() {
        let err = Error::unterminated_scope(")", 0..1);
        assert_eq!(
            err.to_string(),
            "unterminated scope: expected ')', got EOF (unterminated-scope)"
        );
        assert_eq!(err.kind.tag(), "unterminated-scope");
    }
}
