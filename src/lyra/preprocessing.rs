//! Preprocessing driver.
//!
//! Lyra sources can carry C preprocessor directives. Only the lines inside a marked region
//! (`#pre` ... `#endpre` by default) are meant for the preprocessor; any other line starting
//! with `#` is a comment and is dropped before the preprocessor sees the file.
//!
//!     project files ──► filter ──► staging dir ──► external preprocessor ──► <output>.rb ──► (interpreter)
//!
//! This is process glue around the translator. It never looks inside lyra syntax.

pub mod driver;
pub mod filter;
pub mod staging;

pub use driver::{Driver, Invocation, Outcome};
pub use filter::{filter_lines, Markers};
pub use staging::Stager;

use std::fmt;

/// Errors raised while staging files or running external programs
#[derive(Debug, Clone, PartialEq)]
pub enum PrepError {
    Io { path: String, message: String },
    Spawn { program: String, message: String },
    ProcessFailed { program: String, code: Option<i32> },
}

impl PrepError {
    pub(crate) fn io(path: &std::path::Path, err: std::io::Error) -> Self {
        PrepError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

impl std::error::Error for PrepError {}

impl fmt::Display for PrepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrepError::Io { path, message } => write!(f, "{}: IO error: {}", path, message),
            PrepError::Spawn { program, message } => {
                write!(f, "failed to start '{}': {}", program, message)
            }
            PrepError::ProcessFailed { program, code: Some(code) } => {
                write!(f, "'{}' exited with status {}", program, code)
            }
            PrepError::ProcessFailed { program, code: None } => {
                write!(f, "'{}' was terminated by a signal", program)
            }
        }
    }
}
