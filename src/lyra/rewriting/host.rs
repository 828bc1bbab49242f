//! Ruby syntax emitted by the rewriters.

use crate::lyra::parsing::Form;

/// Name bound by the shorthand lambda forms.
pub const IMPLICIT_PARAM: &str = "it";
pub const ARROW: &str = "->";
pub const SUCC: &str = ".succ";
pub const PRED: &str = ".pred";
pub const SEPARATOR: &str = ", ";

/// `open forms... close` as one form.
pub fn wrap(open: &str, forms: Vec<Form>, close: &str) -> Form {
    let mut pieces = Vec::with_capacity(forms.len() + 2);
    pieces.push(Form::atom(open));
    pieces.extend(forms);
    pieces.push(Form::atom(close));
    Form::Group(pieces)
}

/// `{|p1, p2|body}`
pub fn lambda<S: AsRef<str>>(params: &[S], body: Vec<Form>) -> Form {
    let params: Vec<&str> = params.iter().map(AsRef::as_ref).collect();
    wrap(&format!("{{|{}|", params.join(SEPARATOR)), body, "}")
}

/// Render each form and join the non-empty results with [SEPARATOR].
pub fn join(forms: &[Form]) -> String {
    forms
        .iter()
        .map(|f| f.render().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Runtime capability probe for `{sym}`: call the method when the value has one, otherwise
/// the free function of the same name.
pub fn dispatch(name: &str) -> String {
    format!(
        "{p}.respond_to?(:\"{name}\") ? {p}.send(:\"{name}\") : {name}({p})",
        p = IMPLICIT_PARAM
    )
}
