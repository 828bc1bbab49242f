//! Short map literals.
//!
//! Consecutive elements pair up as key and value, in source order:
//!
//!     \h{a 1 b 2}   [[a, 1], [b, 2]].to_h
//!     \h{}          [].to_h
//!
//! A key without a value is an error.

use super::host;
use crate::lyra::error::{Error, Result};
use crate::lyra::parsing::Form;
use logos::Span;

pub fn rewrite(forms: Vec<Form>, span: &Span) -> Result<Form> {
    let pairs = forms.chunks(2);
    let mut entries = Vec::with_capacity(pairs.len());
    for pair in pairs {
        match pair {
            [key, value] => {
                entries.push(format!("[{}]", host::join(&[key.clone(), value.clone()])));
            }
            _ => return Err(Error::unpaired_map_key(pair[0].render(), span.clone())),
        }
    }

    Ok(Form::Group(vec![
        Form::atom("["),
        Form::atom(entries.join(host::SEPARATOR)),
        Form::atom("].to_h"),
    ]))
}
