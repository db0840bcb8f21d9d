//! Runsift Core - foundation types and host seams for the matching framework.
//!
//! This crate provides:
//! - [`QualifiedName`], the `/`-separated name of a job in the host namespace
//! - The seam traits implemented by the embedding host: [`Run`],
//!   [`JobNamespace`], [`Descriptor`], [`ExtensionRegistry`] and
//!   [`AccessPolicy`]
//! - [`Validation`], the three-level diagnostic outcome surfaced to the
//!   configuration layer
//!
//! The matcher implementations themselves live in the `runsift-matchers`
//! crate; everything here is pure, synchronous and free of I/O.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]

pub mod prelude;

pub mod access;
pub mod descriptor;
pub mod name;
pub mod run;
pub mod validation;

pub use access::{AccessPolicy, Permission};
pub use descriptor::{CapabilityId, Descriptor, ExtensionRegistry};
pub use name::QualifiedName;
pub use run::{JobNamespace, Run};
pub use validation::{Validation, ValidationKind, escape};
