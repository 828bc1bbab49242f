//! Marker-based line filter.

use crate::lyra::config::MarkerConfig;

/// The begin/end lines of the region forwarded to the preprocessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub begin: String,
    pub end: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            begin: "#pre".to_string(),
            end: "#endpre".to_string(),
        }
    }
}

impl From<&MarkerConfig> for Markers {
    fn from(config: &MarkerConfig) -> Self {
        Self {
            begin: config.begin.clone(),
            end: config.end.clone(),
        }
    }
}

/// Keep the lines meant for the next stage.
///
/// Marker lines toggle the selected region and are dropped. Outside the region, lines whose
/// trimmed text starts with `#` are dropped. Every other line passes through unchanged,
/// line ending included.
pub fn filter_lines(text: &str, markers: &Markers) -> String {
    let mut out = String::with_capacity(text.len());
    let mut selected = false;

    for line in text.split_inclusive('\n') {
        let trimmed = line.trim();
        if trimmed == markers.begin {
            selected = true;
        } else if trimmed == markers.end {
            selected = false;
        } else if !selected && trimmed.starts_with('#') {
            continue;
        } else {
            out.push_str(line);
        }
    }

    out
}
