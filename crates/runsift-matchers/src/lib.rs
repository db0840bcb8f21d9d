//! Runsift Matchers - pluggable predicates over runs and descriptors.
//!
//! A matcher is a named predicate over one of two candidate families:
//!
//! - **Run matchers** select runs by the qualified name of their owning job:
//!   [`ExactNameMatcher`], [`RegexNameMatcher`].
//! - **Descriptor matchers** select registered implementation types:
//!   [`TypeNameSetMatcher`].
//!
//! Variants are enumerated through a [`MatcherRegistry`]; the diagnostics in
//! [`validate`] gate a pattern before the configuration layer persists it.
//! Matchers are immutable once configured and safe for concurrent use.
//!
//! # Example
//!
//! ```rust
//! use runsift_core::{QualifiedName, Run};
//! use runsift_matchers::prelude::*;
//!
//! struct DemoRun(&'static str);
//!
//! impl Run for DemoRun {
//!     fn job_name(&self) -> QualifiedName {
//!         QualifiedName::from(self.0)
//!     }
//! }
//!
//! let matcher = RegexNameMatcher::new().with_pattern("folderA/.*");
//! assert!(matcher.test(&DemoRun("folderA/job1")));
//! assert!(!matcher.test(&DemoRun("job1")));
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

pub mod descriptor;
pub mod error;
pub mod matcher;
pub mod registry;
pub mod run;
pub mod validate;

pub use descriptor::TypeNameSetMatcher;
pub use error::MatcherError;
pub use matcher::{DescriptorMatcher, RunMatcher};
pub use registry::{
    DescriptorMatcherFactory, MatcherRegistry, RunMatcherFactory, filterable_descriptors,
    filterable_type_names,
};
pub use run::{ExactNameMatcher, RegexNameMatcher};
pub use validate::{PREVIEW_MATCH_CAP, check_syntax, preview_matches};
