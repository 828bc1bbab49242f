//! Sugar rewriters.
//!
//! Each rewriter maps the inner forms of one closed scope to a single replacement form. They
//! are pure and local: a rewriter never sees forms from sibling or ancestor scopes.
//!
//!     ( ... )     lists       shorthand and arrow lambdas, otherwise a parenthesized expression
//!     { ... }     curlies     implicit-parameter lambdas
//!     \h{ ... }   maps        key/value pairs converted to a hash
//!     \a[ ... ]   arrays      comma-less array literals
//!     [ ... ]     kept as a nested sub-list
//!
//! The output is Ruby; the syntax pieces live in [host].

pub mod arrays;
pub mod curlies;
pub mod host;
pub mod lists;
pub mod maps;

use crate::lyra::error::Result;
use crate::lyra::lexing::Token;
use crate::lyra::parsing::{Delimiter, Form};
use logos::Span;

/// Rewrite a closed scope. `span` is the opener's span, used for error reporting.
pub fn rewrite(delimiter: Delimiter, forms: Vec<Form>, span: &Span) -> Result<Form> {
    match delimiter {
        Delimiter::Paren => Ok(lists::rewrite(forms)),
        Delimiter::Brace => Ok(curlies::rewrite(forms)),
        Delimiter::ShortMap => maps::rewrite(forms, span),
        Delimiter::ShortArray => Ok(arrays::rewrite(forms)),
        Delimiter::Bracket => Ok(host::wrap("[", forms, "]")),
    }
}

/// `x++` / `x--`: the operator becomes a method call on whatever precedes it.
pub fn postfix(token: &Token) -> Form {
    match token {
        Token::Decrement => Form::atom(host::PRED),
        _ => Form::atom(host::SUCC),
    }
}

/// Split at the first top-level arrow: the forms before it and the forms after it.
pub(crate) fn split_arrow(forms: &[Form]) -> Option<(&[Form], &[Form])> {
    let i = forms.iter().position(|f| f.as_atom() == Some(host::ARROW))?;
    Some((&forms[..i], &forms[i + 1..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atoms(items: &[&str]) -> Vec<Form> {
        items.iter().map(|s| Form::atom(*s)).collect()
    }

    #[test]
    fn split_arrow_uses_first_arrow() {
        let forms = atoms(&["a", "->", "b", "->", "c"]);
        let (params, body) = split_arrow(&forms).unwrap();
        assert_eq!(params, &atoms(&["a"])[..]);
        assert_eq!(body, &atoms(&["b", "->", "c"])[..]);
    }

    #[test]
    fn split_arrow_ignores_nested_arrows() {
        let forms = vec![Form::Group(atoms(&["x", "->", "y"])), Form::atom("z")];
        assert!(split_arrow(&forms).is_none());
    }

    #[test]
    fn plain_brackets_are_not_rewritten() {
        let form = rewrite(Delimiter::Bracket, atoms(&["1", "+", "2"]), &(0..1)).unwrap();
        assert_eq!(form.render(), "[1+2]");
    }

    #[test]
    fn postfix_forms() {
        assert_eq!(postfix(&Token::Increment), Form::atom(".succ"));
        assert_eq!(postfix(&Token::Decrement), Form::atom(".pred"));
    }
}
