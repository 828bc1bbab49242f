//! Brace scopes. Every brace scope becomes a lambda whose first parameter is the implicit one.
//!
//!     {sym}           dispatch on the implicit parameter, see [host::dispatch]
//!     {a b -> body}   {|it, a, b|body}
//!     {...}           {|it|...}

use super::host::{self, IMPLICIT_PARAM};
use super::split_arrow;
use crate::lyra::lexing::tokens::is_symbol;
use crate::lyra::parsing::Form;

pub fn rewrite(forms: Vec<Form>) -> Form {
    if let [Form::Atom(name)] = forms.as_slice() {
        if is_symbol(name) {
            return host::lambda(&[IMPLICIT_PARAM], vec![Form::atom(host::dispatch(name))]);
        }
    }

    if let Some((extra, body)) = split_arrow(&forms) {
        let mut params = vec![IMPLICIT_PARAM.to_string()];
        params.extend(extra.iter().map(Form::render));
        return host::lambda(params.as_slice(), body.to_vec());
    }

    host::lambda(&[IMPLICIT_PARAM], forms)
}
