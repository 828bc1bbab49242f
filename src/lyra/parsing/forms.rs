//! Parse results: forms, delimiters and scopes.

use crate::lyra::lexing::Token;
use std::fmt;
use std::ops::Range;

/// One element of a scope after rewriting.
///
/// A closed scope is always a single element of its parent, whatever it was rewritten to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Form {
    /// A single piece of text: a verbatim token or a fragment of host syntax.
    Atom(String),
    /// A closed scope, already rewritten.
    Group(Vec<Form>),
}

impl Form {
    pub fn atom(text: impl Into<String>) -> Self {
        Form::Atom(text.into())
    }

    pub fn as_atom(&self) -> Option<&str> {
        match self {
            Form::Atom(text) => Some(text),
            Form::Group(_) => None,
        }
    }

    /// Append the text of this form to `out`. Pieces are concatenated without separators.
    pub fn render_into(&self, out: &mut String) {
        match self {
            Form::Atom(text) => out.push_str(text),
            Form::Group(forms) => forms.iter().for_each(|f| f.render_into(out)),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// The opener of a scope. Decides which rewriter runs when the scope closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    Paren,
    Bracket,
    Brace,
    /// `\h{ ... }`
    ShortMap,
    /// `\a[ ... ]`
    ShortArray,
}

impl Delimiter {
    pub fn from_opener(token: &Token) -> Option<Self> {
        match token {
            Token::OpenParen => Some(Delimiter::Paren),
            Token::OpenBracket => Some(Delimiter::Bracket),
            Token::OpenBrace => Some(Delimiter::Brace),
            Token::MapOpen => Some(Delimiter::ShortMap),
            Token::ArrayOpen => Some(Delimiter::ShortArray),
            _ => None,
        }
    }

    /// `\h{` and `\a[`: scopes whose elements are separated in the output.
    pub fn is_short_literal(&self) -> bool {
        matches!(self, Delimiter::ShortMap | Delimiter::ShortArray)
    }

    /// The token that closes a scope opened by this delimiter.
    pub fn closer(&self) -> Token {
        match self {
            Delimiter::Paren => Token::CloseParen,
            Delimiter::Bracket | Delimiter::ShortArray => Token::CloseBracket,
            Delimiter::Brace | Delimiter::ShortMap => Token::CloseBrace,
        }
    }
}

/// A closed scope, recorded by index into the token stream the parser walked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    pub delimiter: Delimiter,
    /// Indices of the tokens strictly between the opener and its closer.
    pub tokens: Range<usize>,
    /// 1 for a scope opened at top level.
    pub depth: usize,
}
