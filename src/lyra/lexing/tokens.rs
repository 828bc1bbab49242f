//! Token definitions for lyra
//!
//! The tokens are defined using the logos derive macro. Alternatives are arranged so that
//! the most specific one wins at every position:
//!
//!     [\s,]+                  skipped (whitespace and commas)
//!     #.*                     skipped (line comment)
//!     \h{  \a[                short map / short array openers
//!     ->                      lambda arrow
//!     ( ) [ ] { }             brackets
//!     ** <=> << >> <= >= < >  compound and relational operators
//!     !~ == =~ =              match / equality / assignment
//!     ++ --                   postfix increment / decrement
//!     ! + - * / ^ & | % (=)   single operators, optionally followed by `=`
//!     "..."                   strings, backslash escapes, may be unterminated
//!     &:name                  bound method reference
//!     words                   identifiers, numbers, symbols
use logos::{Lexer, Logos};
use std::fmt;

fn text(lex: &mut Lexer<Token>) -> String {
    lex.slice().to_owned()
}

/// Check if `text` reads as a bare identifier. Only words can start with a letter or `_`.
pub fn is_symbol(text: &str) -> bool {
    text.chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
}

/// All possible tokens in lyra source
#[derive(Logos, Debug, PartialEq, Eq, Clone, Hash)]
#[logos(skip r"[\s,]+")]
#[logos(skip r"#[^\n]*")]
pub enum Token {
    // Prefixed openers
    #[token("\\h{")]
    MapOpen,
    #[token("\\a[")]
    ArrayOpen,

    #[token("->")]
    Arrow,

    // Brackets
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,

    #[token("++")]
    Increment,
    #[token("--")]
    Decrement,

    #[token("**", text)]
    #[token("<=>", text)]
    #[regex("[<>][<>=]?", text)]
    #[token("!~", text)]
    #[regex("=[=~]?", text)]
    #[regex(r"[!+\-*/^&|%]=?", text)]
    Operator(String),

    // Escapes may span lines; the closing quote is optional so an unterminated literal
    // still lexes as one token.
    #[regex(r#""([^"\\]|\\[\s\S])*"?"#, text)]
    Str(String),

    #[regex(r"&:[a-zA-Z0-9_?!]+", text)]
    MethodRef(String),

    // Cannot start with `!` or `&`: those begin operators.
    #[regex(r"[a-zA-Z0-9_.?:@$][a-zA-Z0-9_.?!&:@$]*", text)]
    Word(String),
}

impl Token {
    /// Check if this token closes a scope
    pub fn is_closer(&self) -> bool {
        matches!(
            self,
            Token::CloseParen | Token::CloseBracket | Token::CloseBrace
        )
    }

    /// Source text of the token
    pub fn as_str(&self) -> &str {
        match self {
            Token::MapOpen => "\\h{",
            Token::ArrayOpen => "\\a[",
            Token::Arrow => "->",
            Token::OpenParen => "(",
            Token::CloseParen => ")",
            Token::OpenBracket => "[",
            Token::CloseBracket => "]",
            Token::OpenBrace => "{",
            Token::CloseBrace => "}",
            Token::Increment => "++",
            Token::Decrement => "--",
            Token::Operator(s) | Token::Str(s) | Token::MethodRef(s) | Token::Word(s) => s,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
