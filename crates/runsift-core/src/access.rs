//! Authorization seam consulted by the preview diagnostic.

use serde::{Deserialize, Serialize};

use crate::name::QualifiedName;

/// Rights a caller may hold when asking for a namespace preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Configure the specific item a rule is being edited on.
    Configure,
    /// Administer the whole installation.
    Administer,
}

/// Boolean capability query answered by the host.
///
/// Consulted only by the preview diagnostic, before it discloses anything
/// about the namespace. Matcher predicates never perform authorization.
pub trait AccessPolicy {
    /// Whether the caller holds `permission` on `context`, or globally when
    /// `context` is absent.
    fn has_permission(&self, context: Option<&QualifiedName>, permission: Permission) -> bool;
}
