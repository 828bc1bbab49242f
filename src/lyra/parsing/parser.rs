//! Bracket-scope parser
//!
//! Recursive descent over an immutable token slice. The cursor is an index into the slice, so
//! a [Parser] can be driven one form at a time ([Parser::parse_form]) or over the whole
//! stream ([Parser::parse_document]), and the scopes it closed stay inspectable afterwards.
//!
//! Recursion depth follows bracket nesting and is capped by [ParseOptions::max_depth].

use super::forms::{Delimiter, Form, Scope};
use crate::lyra::error::{Error, Result};
use crate::lyra::lexing::{Spanned, Token};
use crate::lyra::rewriting;
use logos::Span;

pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Deepest bracket nesting accepted before failing with `NestingTooDeep`.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Consume until the scope's closer (or the end of input at top level).
    UntilCloser,
    /// Return as soon as one element has been accumulated.
    FirstElement,
}

/// The scope currently being filled: its delimiter and the span of its opener.
type OpenScope<'t> = Option<(Delimiter, &'t Span)>;

pub struct Parser<'t> {
    tokens: &'t [Spanned],
    pos: usize,
    options: ParseOptions,
    scopes: Vec<Scope>,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Spanned]) -> Self {
        Self::with_options(tokens, ParseOptions::default())
    }

    pub fn with_options(tokens: &'t [Spanned], options: ParseOptions) -> Self {
        Self {
            tokens,
            pos: 0,
            options,
            scopes: Vec::new(),
        }
    }

    /// Parse everything left in the stream at depth 0.
    pub fn parse_document(&mut self) -> Result<Vec<Form>> {
        self.parse_scope(0, None, Mode::UntilCloser)
    }

    /// Parse the next top-level form only. `None` once the stream is exhausted.
    pub fn parse_form(&mut self) -> Result<Option<Form>> {
        let mut forms = self.parse_scope(0, None, Mode::FirstElement)?;
        Ok(forms.pop())
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Index of the next token to be consumed.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Scopes closed so far, in closing order (inner scopes before their parents).
    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    fn parse_scope(&mut self, depth: usize, open: OpenScope<'t>, mode: Mode) -> Result<Vec<Form>> {
        let tokens = self.tokens;
        let mut forms = Vec::new();

        while let Some((token, span)) = tokens.get(self.pos) {
            self.pos += 1;
            match token {
                closer if closer.is_closer() => {
                    return match open {
                        Some((delimiter, _)) if delimiter.closer() == *closer => Ok(forms),
                        _ => Err(Error::unexpected_token(closer.as_str(), span.clone())),
                    };
                }
                Token::Str(s) if s == "\"" => return Err(Error::unexpected_quote(span.clone())),
                // Nothing to attach to: the call stands alone.
                Token::Increment | Token::Decrement => forms.push(rewriting::postfix(token)),
                _ => {
                    let form = match Delimiter::from_opener(token) {
                        Some(delimiter) => self.parse_delimited(delimiter, depth, span)?,
                        None => self.parse_atom(token, span, open),
                    };
                    forms.push(self.attach_postfix(form));
                }
            }
            if mode == Mode::FirstElement && !forms.is_empty() {
                return Ok(forms);
            }
        }

        match open {
            Some((delimiter, span)) => Err(Error::unterminated_scope(
                delimiter.closer().as_str(),
                span.clone(),
            )),
            None => Ok(forms),
        }
    }

    /// A token that is not an opener. Inside short literals a sign written directly against a
    /// number is part of that number, so `\a[-1 2]` has two elements.
    fn parse_atom(&mut self, token: &Token, span: &Span, open: OpenScope<'t>) -> Form {
        let in_literal = open.is_some_and(|(delimiter, _)| delimiter.is_short_literal());
        let tokens = self.tokens;
        match (token, tokens.get(self.pos)) {
            (Token::Operator(sign), Some((Token::Word(number), next)))
                if in_literal
                    && (sign == "-" || sign == "+")
                    && next.start == span.end
                    && number.starts_with(|c: char| c.is_ascii_digit()) =>
            {
                self.pos += 1;
                Form::atom(format!("{sign}{number}"))
            }
            _ => Form::atom(token.as_str()),
        }
    }

    /// `x++` / `x--` directly after an element become a method call on that element.
    fn attach_postfix(&mut self, mut form: Form) -> Form {
        let tokens = self.tokens;
        while let Some((token @ (Token::Increment | Token::Decrement), _)) = tokens.get(self.pos) {
            self.pos += 1;
            form = Form::Group(vec![form, rewriting::postfix(token)]);
        }
        form
    }

    fn parse_delimited(
        &mut self,
        delimiter: Delimiter,
        depth: usize,
        span: &'t Span,
    ) -> Result<Form> {
        let depth = depth + 1;
        if depth > self.options.max_depth {
            return Err(Error::nesting_too_deep(self.options.max_depth, span.clone()));
        }

        let start = self.pos;
        let inner = self.parse_scope(depth, Some((delimiter, span)), Mode::UntilCloser)?;
        // The closer was consumed last.
        let end = self.pos - 1;
        self.scopes.push(Scope {
            delimiter,
            tokens: start..end,
            depth,
        });

        tracing::trace!(?delimiter, depth, elements = inner.len(), "closing scope");
        rewriting::rewrite(delimiter, inner, span)
    }
}
