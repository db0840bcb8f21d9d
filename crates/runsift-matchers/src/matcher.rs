//! Matcher family contracts.

use std::fmt;

use runsift_core::{Descriptor, Run};

/// A named predicate over runs.
///
/// Implementations are immutable once configured and safe to call from
/// multiple threads; `test` never mutates matcher state. `test` must not
/// panic for a structurally valid candidate: a matcher whose own
/// configuration has not been set fails closed and returns `false`.
///
/// The built-in variants are registered by
/// [`MatcherRegistry::with_defaults`](crate::registry::MatcherRegistry::with_defaults);
/// external code may contribute more, so any enumeration of variants is a
/// possibly-incomplete snapshot.
pub trait RunMatcher: fmt::Debug + Send + Sync {
    /// Stable identifying name of this variant, used for serialization.
    fn kind(&self) -> &'static str;

    /// Human-readable variant label for configuration UIs.
    fn display_name(&self) -> &'static str;

    /// Whether `run` is selected by this matcher.
    fn test(&self, run: &dyn Run) -> bool;
}

/// A named predicate over registered implementation types.
///
/// Same contract as [`RunMatcher`], over the descriptor family.
pub trait DescriptorMatcher: fmt::Debug + Send + Sync {
    /// Stable identifying name of this variant, used for serialization.
    fn kind(&self) -> &'static str;

    /// Human-readable variant label for configuration UIs.
    fn display_name(&self) -> &'static str;

    /// Whether `descriptor` is selected by this matcher.
    fn test(&self, descriptor: &dyn Descriptor) -> bool;
}
