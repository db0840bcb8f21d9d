//! Descriptor and extension-registry seams supplied by the host.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Identifier of an external base capability that implementation types may
/// declare, e.g. "a build step whose environment can be filtered".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilityId(String);

impl CapabilityId {
    /// Create a capability identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CapabilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CapabilityId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// A registered implementation type, as seen by descriptor matchers.
///
/// Only two attributes cross this seam: the fully-qualified name of the
/// implementing type, and whether that type declares a given base
/// capability. No other attribute of the host's descriptor is interpreted.
pub trait Descriptor: Send + Sync {
    /// Fully-qualified name of the implementing type.
    fn type_name(&self) -> &str;

    /// Whether the implementing type declares the base capability `base`.
    fn implements(&self, base: &CapabilityId) -> bool;
}

/// Host-side registry of every known implementation type.
///
/// Snapshots are best-effort: implementations can be contributed by code not
/// visible to this framework, so the result may be incomplete and its order
/// may change across restarts.
pub trait ExtensionRegistry {
    /// A snapshot of all currently registered descriptors.
    fn descriptors(&self) -> Vec<Arc<dyn Descriptor>>;
}
