//! Immutable source snippets flowing through the pipeline.

use crate::result::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use std::path::Path;

/// Number of lines in `text`, counting an empty text as one line.
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

/// One snippet of source text at a point in the pipeline.
///
/// A buffer is never edited in place: every operator borrows one and returns a
/// fresh one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceBuffer {
    text: String,
}

impl SourceBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Reads a snippet from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        std::fs::read_to_string(path)
            .map(Self::new)
            .map_err(|source| Error::FileRead {
                path: path.display().to_string(),
                source,
            })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of lines, see [`line_count`].
    pub fn line_count(&self) -> usize {
        line_count(&self.text)
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl Deref for SourceBuffer {
    type Target = str;

    fn deref(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for SourceBuffer {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<&str> for SourceBuffer {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for SourceBuffer {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for SourceBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
