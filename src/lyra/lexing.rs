//! Lexing for lyra source.
//!
//! Raw tokenization is done by the logos lexer (see [tokens]). Whitespace, commas and `#`
//! line comments never reach the token stream. Any character that cannot start a token is a
//! hard error: lyra does not silently drop input.

pub mod tokens;

pub use tokens::Token;

use crate::lyra::error::{Error, Result};
use logos::{Logos, Span};

/// A token paired with its byte range in the source.
pub type Spanned = (Token, Span);

/// Tokenize source text with location information.
///
/// Returns the tokens in source order, or the first lexical error.
pub fn tokenize(source: &str) -> Result<Vec<Spanned>> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                let span = lexer.span();
                let c = source[span.start..].chars().next().unwrap_or('\u{fffd}');
                return Err(Error::unexpected_character(c, span).locate(source));
            }
        }
    }

    tracing::trace!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}

/// Tokenize and drop the spans.
pub fn tokenize_plain(source: &str) -> Result<Vec<Token>> {
    Ok(tokenize(source)?.into_iter().map(|(t, _)| t).collect())
}
