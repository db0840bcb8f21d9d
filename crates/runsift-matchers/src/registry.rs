//! Variant registry and host-extension queries.
//!
//! The registry is an explicit table constructed at process start: the
//! built-in variants are registered by [`MatcherRegistry::with_defaults`],
//! and embedders add their own with [`MatcherRegistry::register_run`] or
//! [`MatcherRegistry::register_descriptor`]. Enumerations are snapshots
//! with no completeness or ordering guarantee, suitable for UI listings
//! but not for correctness-critical logic.

use std::collections::HashMap;
use std::sync::Arc;

use runsift_core::{CapabilityId, Descriptor, ExtensionRegistry};

use crate::descriptor::TypeNameSetMatcher;
use crate::matcher::{DescriptorMatcher, RunMatcher};
use crate::run::{ExactNameMatcher, RegexNameMatcher};

/// One registered run-matcher variant: its identity plus a way to create an
/// unconfigured instance.
#[derive(Debug, Clone)]
pub struct RunMatcherFactory {
    /// Stable identifying name, used for serialization.
    pub kind: &'static str,
    /// Human-readable variant label for configuration UIs.
    pub display_name: &'static str,
    /// Create a fresh, unconfigured matcher of this variant.
    pub create: fn() -> Box<dyn RunMatcher>,
}

/// One registered descriptor-matcher variant.
#[derive(Debug, Clone)]
pub struct DescriptorMatcherFactory {
    /// Stable identifying name, used for serialization.
    pub kind: &'static str,
    /// Human-readable variant label for configuration UIs.
    pub display_name: &'static str,
    /// Create a fresh, unconfigured matcher of this variant.
    pub create: fn() -> Box<dyn DescriptorMatcher>,
}

/// Registry of matcher variants, grouped by candidate family.
#[derive(Debug, Default)]
pub struct MatcherRegistry {
    run: HashMap<&'static str, RunMatcherFactory>,
    descriptor: HashMap<&'static str, DescriptorMatcherFactory>,
}

impl MatcherRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in variants registered.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_run(RunMatcherFactory {
            kind: ExactNameMatcher::KIND,
            display_name: ExactNameMatcher::DISPLAY_NAME,
            create: || Box::new(ExactNameMatcher::new()),
        });
        registry.register_run(RunMatcherFactory {
            kind: RegexNameMatcher::KIND,
            display_name: RegexNameMatcher::DISPLAY_NAME,
            create: || Box::new(RegexNameMatcher::new()),
        });
        registry.register_descriptor(DescriptorMatcherFactory {
            kind: TypeNameSetMatcher::KIND,
            display_name: TypeNameSetMatcher::DISPLAY_NAME,
            create: || Box::new(TypeNameSetMatcher::new()),
        });
        registry
    }

    /// Register a run-matcher variant. A later registration with the same
    /// kind replaces the earlier one.
    pub fn register_run(&mut self, factory: RunMatcherFactory) {
        self.run.insert(factory.kind, factory);
    }

    /// Register a descriptor-matcher variant. A later registration with the
    /// same kind replaces the earlier one.
    pub fn register_descriptor(&mut self, factory: DescriptorMatcherFactory) {
        self.descriptor.insert(factory.kind, factory);
    }

    /// All known run-matcher variants.
    ///
    /// A possibly-incomplete snapshot with no stable order.
    pub fn run_matchers(&self) -> impl Iterator<Item = &RunMatcherFactory> {
        self.run.values()
    }

    /// All known descriptor-matcher variants.
    ///
    /// A possibly-incomplete snapshot with no stable order.
    pub fn descriptor_matchers(&self) -> impl Iterator<Item = &DescriptorMatcherFactory> {
        self.descriptor.values()
    }

    /// Look up a run-matcher variant by its stable kind.
    #[must_use]
    pub fn get_run(&self, kind: &str) -> Option<&RunMatcherFactory> {
        self.run.get(kind)
    }

    /// Look up a descriptor-matcher variant by its stable kind.
    #[must_use]
    pub fn get_descriptor(&self, kind: &str) -> Option<&DescriptorMatcherFactory> {
        self.descriptor.get(kind)
    }
}

/// Descriptors of every registered implementation type declaring `base`.
///
/// Delegates to the host registry. The result is best-effort: it may be
/// incomplete, and its order may change across restarts.
#[must_use]
pub fn filterable_descriptors(
    registry: &dyn ExtensionRegistry,
    base: &CapabilityId,
) -> Vec<Arc<dyn Descriptor>> {
    registry
        .descriptors()
        .into_iter()
        .filter(|descriptor| descriptor.implements(base))
        .collect()
}

/// Fully-qualified type names of every registered implementation declaring
/// `base`.
///
/// Same incompleteness caveat as [`filterable_descriptors`].
#[must_use]
pub fn filterable_type_names(registry: &dyn ExtensionRegistry, base: &CapabilityId) -> Vec<String> {
    filterable_descriptors(registry, base)
        .iter()
        .map(|descriptor| descriptor.type_name().to_owned())
        .collect()
}
