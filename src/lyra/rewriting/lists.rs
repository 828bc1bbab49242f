//! Paren scopes.
//!
//!     (.m args)       {|it|it.m args}
//!     (&:m)           {|it|it.m}
//!     (a b -> body)   {|a, b|body}
//!     (...)           (...)
//!
//! Rules are tried in that order; the first that applies wins.

use super::host::{self, IMPLICIT_PARAM};
use super::split_arrow;
use crate::lyra::parsing::Form;

pub fn rewrite(forms: Vec<Form>) -> Form {
    if let Some(first) = forms.first().and_then(Form::as_atom) {
        if first.starts_with('.') {
            let mut body = Vec::with_capacity(forms.len() + 1);
            body.push(Form::atom(IMPLICIT_PARAM));
            body.extend(forms);
            return host::lambda(&[IMPLICIT_PARAM], body);
        }
    }

    if let [Form::Atom(only)] = forms.as_slice() {
        if let Some(method) = only.strip_prefix("&:") {
            let body = vec![Form::atom(format!("{IMPLICIT_PARAM}.{method}"))];
            return host::lambda(&[IMPLICIT_PARAM], body);
        }
    }

    if let Some((params, body)) = split_arrow(&forms) {
        let params: Vec<String> = params.iter().map(Form::render).collect();
        return host::lambda(params.as_slice(), body.to_vec());
    }

    host::wrap("(", forms, ")")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atoms(items: &[&str]) -> Vec<Form> {
        items.iter().map(|s| Form::atom(*s)).collect()
    }

    fn render(items: &[&str]) -> String {
        rewrite(atoms(items)).render()
    }

    #[test]
    fn member_access_becomes_implicit_lambda() {
        assert_eq!(render(&[".upcase"]), "{|it|it.upcase}");
        assert_eq!(render(&[".gsub", "a", "b"]), "{|it|it.gsubab}");
    }

    #[test]
    fn method_ref_becomes_implicit_lambda() {
        assert_eq!(render(&["&:strip"]), "{|it|it.strip}");
    }

    #[test]
    fn method_ref_needs_to_be_alone() {
        assert_eq!(render(&["&:strip", "x"]), "(&:stripx)");
    }

    #[test]
    fn arrow_splits_params_and_body() {
        assert_eq!(render(&["x", "->", "x"]), "{|x|x}");
        assert_eq!(render(&["a", "b", "->", "a", "+", "b"]), "{|a, b|a+b}");
        assert_eq!(render(&["->", "42"]), "{||42}");
    }

    #[test]
    fn member_access_takes_precedence_over_arrow() {
        assert_eq!(render(&[".map", "->", "x"]), "{|it|it.map->x}");
    }

    #[test]
    fn everything_else_is_parenthesized() {
        assert_eq!(render(&["a", "+", "b"]), "(a+b)");
        assert_eq!(render(&[]), "()");
    }

    #[test]
    fn leading_group_is_not_member_access() {
        let forms = vec![Form::Group(atoms(&[".x"])), Form::atom("y")];
        assert_eq!(rewrite(forms).render(), "(.xy)");
    }
}
