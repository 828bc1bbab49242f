//! Serialization of token streams and parse results back into text.
//!
//!     detokenize      tokens ──► text   (concatenation of the token texts)
//!     render          forms  ──► text   (host text once any scope was rewritten)
//!
//! Both concatenate without separators. For a token stream with no sugar openers,
//! `detokenize(tokenize(s))` is `s` with whitespace, commas and comments removed.

use crate::lyra::lexing::Token;
use crate::lyra::parsing::Form;

/// Join tokens back into text.
pub fn detokenize<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = &'a Token>,
{
    tokens.into_iter().map(Token::as_str).collect()
}

/// Render parsed forms into output text.
pub fn render(forms: &[Form]) -> String {
    let mut out = String::new();
    for form in forms {
        form.render_into(&mut out);
    }
    out
}

/// Check if a token stream contains anything the parser would rewrite.
pub fn contains_sugar<'a, I>(tokens: I) -> bool
where
    I: IntoIterator<Item = &'a Token>,
{
    tokens.into_iter().any(|t| {
        matches!(
            t,
            Token::OpenParen
                | Token::OpenBrace
                | Token::MapOpen
                | Token::ArrayOpen
                | Token::Increment
                | Token::Decrement
        )
    })
}
