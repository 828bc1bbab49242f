//! Translation entry points.
//!
//! [translate] maps lyra text to Ruby text. [translate_file] is the whole-file driver: read
//! the input, translate it, and write the result to the output path in a single write. There
//! is no partial output: on any error the output file is left untouched.

use crate::lyra::error::Error;
use crate::lyra::formats;
use crate::lyra::lexing::tokenize;
use crate::lyra::parsing::{ParseOptions, Parser};
use std::fmt;
use std::fs;
use std::path::Path;

/// Translate lyra source with the default parse options.
pub fn translate(source: &str) -> Result<String, Error> {
    translate_with_options(source, ParseOptions::default())
}

pub fn translate_with_options(source: &str, options: ParseOptions) -> Result<String, Error> {
    let tokens = tokenize(source)?;
    let forms = Parser::with_options(&tokens, options)
        .parse_document()
        .map_err(|e| e.locate(source))?;
    let output = formats::render(&forms);
    tracing::debug!(
        tokens = tokens.len(),
        forms = forms.len(),
        bytes = output.len(),
        "translated source"
    );
    Ok(output)
}

/// Errors that can occur while translating a file
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    Io { path: String, message: String },
    Translate { path: String, error: Error },
}

impl std::error::Error for ProcessingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessingError::Translate { error, .. } => Some(error),
            ProcessingError::Io { .. } => None,
        }
    }
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::Io { path, message } => write!(f, "{}: IO error: {}", path, message),
            ProcessingError::Translate { path, error } => write!(f, "{}: {}", path, error),
        }
    }
}

/// Translate the file at `input` and write the result to `output` (created or overwritten).
pub fn translate_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> Result<(), ProcessingError> {
    let input = input.as_ref();
    let output = output.as_ref();

    let source = fs::read_to_string(input).map_err(|e| ProcessingError::Io {
        path: input.display().to_string(),
        message: e.to_string(),
    })?;
    tracing::debug!(path = %input.display(), bytes = source.len(), "read source");

    let translated = translate(&source).map_err(|error| ProcessingError::Translate {
        path: input.display().to_string(),
        error,
    })?;

    fs::write(output, translated).map_err(|e| ProcessingError::Io {
        path: output.display().to_string(),
        message: e.to_string(),
    })?;
    tracing::debug!(path = %output.display(), "wrote translation");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lyra::error::{ErrorKind, Location};

    #[test]
    fn translates_sugar() {
        assert_eq!(translate("(x -> x)").unwrap(), "{|x|x}");
        assert_eq!(translate(r"\a[1 2 3]").unwrap(), "[1, 2, 3]");
    }

    #[test]
    fn parse_errors_carry_location() {
        let err = translate("foo\n  (a b))").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnexpectedToken);
        assert_eq!(err.location, Some(Location { line: 2, col: 8 }));
    }

    #[test]
    fn options_are_honored() {
        let options = ParseOptions { max_depth: 1 };
        assert!(translate_with_options("(a)", options).is_ok());
        let err = translate_with_options("((a))", options).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NestingTooDeep);
    }

    #[test]
    fn missing_input_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.rb");
        let err = translate_file(dir.path().join("nope.ly"), &output).unwrap_err();
        assert!(matches!(err, ProcessingError::Io { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn failed_translation_leaves_output_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.ly");
        let output = dir.path().join("out.rb");
        fs::write(&input, "(a (b").unwrap();
        fs::write(&output, "previous").unwrap();

        let err = translate_file(&input, &output).unwrap_err();
        match err {
            ProcessingError::Translate { error, .. } => {
                assert_eq!(error.kind, ErrorKind::UnterminatedScope)
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
    }
}
