//! Short array literals: `\a[1 2 3]` becomes `[1, 2, 3]`.

use super::host;
use crate::lyra::parsing::Form;

pub fn rewrite(forms: Vec<Form>) -> Form {
    Form::Group(vec![
        Form::atom("["),
        Form::atom(host::join(&forms)),
        Form::atom("]"),
    ])
}
