//! Diagnostic outcomes surfaced to the configuration layer.

use serde::{Deserialize, Serialize};

/// Severity of a [`Validation`] outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationKind {
    /// No problem found.
    Ok,
    /// Non-fatal advisory; the configuration can still be saved.
    Warning,
    /// Fatal; the configuration must not be persisted as-is.
    Error,
}

/// Outcome of a validation or preview check.
///
/// Messages are markup-safe: any text taken from user input or from an
/// external listing is passed through [`escape`] before being embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Validation {
    /// No problem found.
    Ok {
        /// Optional informational message.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Non-fatal advisory.
    Warning {
        /// Human-readable advisory text.
        message: String,
    },
    /// Fatal problem.
    Error {
        /// Human-readable failure text.
        message: String,
    },
}

impl Validation {
    /// A silent OK carrying no message.
    #[must_use]
    pub fn ok() -> Self {
        Self::Ok { message: None }
    }

    /// An OK carrying an informational message.
    #[must_use]
    pub fn ok_with_message(message: impl Into<String>) -> Self {
        Self::Ok {
            message: Some(message.into()),
        }
    }

    /// A non-fatal advisory.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::Warning {
            message: message.into(),
        }
    }

    /// A fatal problem.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// The severity of this outcome.
    #[must_use]
    pub fn kind(&self) -> ValidationKind {
        match self {
            Self::Ok { .. } => ValidationKind::Ok,
            Self::Warning { .. } => ValidationKind::Warning,
            Self::Error { .. } => ValidationKind::Error,
        }
    }

    /// The message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Ok { message } => message.as_deref(),
            Self::Warning { message } | Self::Error { message } => Some(message),
        }
    }

    /// Whether this outcome is OK, with or without a message.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }
}

/// Escape `text` for embedding in a validation message.
///
/// Covers the four characters with markup meaning: `&`, `<`, `>`, `"`.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
