//! Prelude module - commonly used types for convenient import.
//!
//! Use `use runsift_core::prelude::*;` to import all essential types.

// Names
pub use crate::QualifiedName;

// Host seams
pub use crate::{Descriptor, ExtensionRegistry, JobNamespace, Run};
pub use crate::{AccessPolicy, CapabilityId, Permission};

// Diagnostics
pub use crate::{Validation, ValidationKind};
