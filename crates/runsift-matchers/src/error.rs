//! Matcher configuration errors.

use thiserror::Error;

/// Errors from validated matcher construction.
#[derive(Debug, Error)]
pub enum MatcherError {
    /// The pattern is not a valid regular expression.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The rejected pattern.
        pattern: String,
        /// The underlying compiler diagnostic.
        #[source]
        source: regex::Error,
    },
}
