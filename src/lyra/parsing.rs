//! Parsing of lyra token streams.
//!
//!     The parser walks the token stream with a cursor and tracks bracket scopes. When a scope
//!     closes, its inner forms are handed to the rewriter for the delimiter that opened it
//!     (see [rewriting](crate::lyra::rewriting)) and the result is spliced into the parent
//!     scope as a single [Form].
//!
//!     Nesting is validated here, not in the lexer: a closer must match the innermost open
//!     scope, a closer at depth 0 is always an error, and running out of tokens with a scope
//!     still open is an error of its own.

pub mod forms;
pub mod parser;

pub use forms::{Delimiter, Form, Scope};
pub use parser::{ParseOptions, Parser, DEFAULT_MAX_DEPTH};

use crate::lyra::error::Result;
use crate::lyra::lexing::Spanned;

/// Parse and rewrite a whole token stream with the default options.
pub fn parse(tokens: &[Spanned]) -> Result<Vec<Form>> {
    Parser::new(tokens).parse_document()
}
