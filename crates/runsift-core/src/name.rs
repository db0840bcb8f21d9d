//! Qualified job names.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The `/`-separated qualified name of a job, from namespace root to leaf.
///
/// Produced by the host's namespace listing (e.g. `folderA/job1`). The
/// framework treats the value as opaque: it is compared byte-for-byte or
/// matched against a pattern, never split into segments and never
/// normalized. Leading/trailing whitespace and separator inconsistencies
/// therefore denote distinct names.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QualifiedName(String);

impl QualifiedName {
    /// Create a qualified name from its serialized form.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The serialized form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the name, returning the serialized form.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QualifiedName {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for QualifiedName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for QualifiedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
