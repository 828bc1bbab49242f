//! # lyra
//!
//! A source-to-source translator for the lyra dialect.
//!
//! Lyra is a compact, bracket-heavy surface syntax layered on top of Ruby. The translator
//! tokenizes lyra source, walks the bracket scopes and rewrites the sugar forms (shorthand
//! lambdas, comma-less arrays, short maps, postfix increments) into plain Ruby.
//!
//!     source text ──► lexing ──► tokens ──► parsing + rewriting ──► forms ──► formats ──► Ruby text
//!
//! See [lyra::processor] for the entry points.

pub mod lyra;

pub use lyra::error::{Error, ErrorKind};
pub use lyra::processor::{translate, translate_file, ProcessingError};
