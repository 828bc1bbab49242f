//! Staging of filtered sources into the working directory.

use super::filter::{filter_lines, Markers};
use super::PrepError;
use crate::lyra::config::StagingConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes the filtered form of every selected project file into a staging directory.
#[derive(Debug, Clone)]
pub struct Stager {
    dir: PathBuf,
    extensions: Vec<String>,
    exclude: Vec<String>,
    markers: Markers,
}

impl Stager {
    /// `dir` is resolved against the project root when relative.
    pub fn new(config: &StagingConfig, markers: Markers) -> Self {
        Self {
            dir: config.dir.clone(),
            extensions: config.extensions.clone(),
            exclude: config.exclude.clone(),
            markers,
        }
    }

    /// Add a file name that must never be staged.
    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.exclude.push(name.into());
        self
    }

    pub fn dir_in(&self, root: &Path) -> PathBuf {
        root.join(&self.dir)
    }

    fn is_selected(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        self.extensions.iter().any(|e| e == extension) && !self.exclude.iter().any(|x| x == name)
    }

    /// Empty (or create) the staging directory, then stage every selected file directly
    /// inside `root`. Returns the staged paths, sorted.
    pub fn stage(&self, root: &Path) -> Result<Vec<PathBuf>, PrepError> {
        let dir = self.dir_in(root);
        clear_dir(&dir)?;

        let mut sources = Vec::new();
        for entry in fs::read_dir(root).map_err(|e| PrepError::io(root, e))? {
            let path = entry.map_err(|e| PrepError::io(root, e))?.path();
            if path.is_file() && self.is_selected(&path) {
                sources.push(path);
            }
        }
        sources.sort();

        let mut staged = Vec::with_capacity(sources.len());
        for source in sources {
            let text = fs::read_to_string(&source).map_err(|e| PrepError::io(&source, e))?;
            // file_name() is Some: is_selected checked it.
            let target = dir.join(source.file_name().unwrap_or_default());
            fs::write(&target, filter_lines(&text, &self.markers))
                .map_err(|e| PrepError::io(&target, e))?;
            tracing::debug!(from = %source.display(), to = %target.display(), "staged file");
            staged.push(target);
        }

        tracing::info!(dir = %dir.display(), files = staged.len(), "staging complete");
        Ok(staged)
    }
}

/// Remove the files inside `dir`, creating it when it does not exist.
fn clear_dir(dir: &Path) -> Result<(), PrepError> {
    if !dir.exists() {
        return fs::create_dir_all(dir).map_err(|e| PrepError::io(dir, e));
    }
    for entry in fs::read_dir(dir).map_err(|e| PrepError::io(dir, e))? {
        let path = entry.map_err(|e| PrepError::io(dir, e))?.path();
        if path.is_file() {
            fs::remove_file(&path).map_err(|e| PrepError::io(&path, e))?;
        }
    }
    Ok(())
}
