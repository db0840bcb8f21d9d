//! Descriptor matchers: select registered implementation types.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use runsift_core::Descriptor;

use crate::matcher::DescriptorMatcher;

/// Selects descriptors whose implementing type is one of a configured set
/// of fully-qualified type names.
///
/// Membership is exact-string, never prefix or pattern based. Duplicates in
/// the configured names collapse; an empty set selects nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TypeNameSetMatcher {
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    type_names: BTreeSet<String>,
}

impl TypeNameSetMatcher {
    /// Stable identifying name of this variant.
    pub const KIND: &'static str = "type_name_set";

    /// Variant label shown in configuration UIs.
    pub const DISPLAY_NAME: &'static str = "By implementation type";

    /// Create an empty matcher. It selects nothing until names are added.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a matcher selecting the given fully-qualified type names.
    #[must_use]
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            type_names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Add one type name to the set.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.type_names.insert(name.into());
        self
    }

    /// The configured type names.
    #[must_use]
    pub fn type_names(&self) -> &BTreeSet<String> {
        &self.type_names
    }
}

impl DescriptorMatcher for TypeNameSetMatcher {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn display_name(&self) -> &'static str {
        Self::DISPLAY_NAME
    }

    fn test(&self, descriptor: &dyn Descriptor) -> bool {
        if self.type_names.is_empty() {
            return false;
        }
        self.type_names.contains(descriptor.type_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runsift_core::CapabilityId;

    struct FakeDescriptor(&'static str);

    impl Descriptor for FakeDescriptor {
        fn type_name(&self) -> &str {
            self.0
        }

        fn implements(&self, _base: &CapabilityId) -> bool {
            false
        }
    }

    #[test]
    fn test_membership_is_exact() {
        let matcher = TypeNameSetMatcher::with_names(["pkg::StepA", "pkg::StepB"]);
        assert!(matcher.test(&FakeDescriptor("pkg::StepA")));
        assert!(matcher.test(&FakeDescriptor("pkg::StepB")));
        assert!(!matcher.test(&FakeDescriptor("pkg::StepC")));
        assert!(!matcher.test(&FakeDescriptor("pkg::Step")));
        assert!(!matcher.test(&FakeDescriptor("pkg::StepAB")));
    }

    #[test]
    fn test_empty_set_selects_nothing() {
        let matcher = TypeNameSetMatcher::new();
        assert!(!matcher.test(&FakeDescriptor("pkg::StepA")));
    }

    #[test]
    fn test_duplicates_collapse() {
        let matcher = TypeNameSetMatcher::with_names(["pkg::StepA", "pkg::StepA"]);
        assert_eq!(matcher.type_names().len(), 1);
    }

    #[test]
    fn test_config_round_trips() {
        let matcher = TypeNameSetMatcher::new()
            .with_name("pkg::StepB")
            .with_name("pkg::StepA");
        let json = serde_json::to_string(&matcher).unwrap();
        let back: TypeNameSetMatcher = serde_json::from_str(&json).unwrap();
        assert_eq!(back, matcher);

        let empty: TypeNameSetMatcher = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, TypeNameSetMatcher::new());
    }
}
