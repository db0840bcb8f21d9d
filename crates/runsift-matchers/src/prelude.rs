//! Prelude module - commonly used types for convenient import.
//!
//! Use `use runsift_matchers::prelude::*;` to import all essential types.

// Family contracts
pub use crate::{DescriptorMatcher, RunMatcher};

// Built-in matchers
pub use crate::{ExactNameMatcher, RegexNameMatcher, TypeNameSetMatcher};

// Registry
pub use crate::MatcherRegistry;

// Diagnostics
pub use crate::{check_syntax, preview_matches};

// Errors
pub use crate::MatcherError;
