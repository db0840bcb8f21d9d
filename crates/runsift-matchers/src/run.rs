//! Run matchers: select runs by the qualified name of their owning job.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use runsift_core::{JobNamespace, Run, Validation, escape};

use crate::error::MatcherError;
use crate::matcher::RunMatcher;

/// Selects runs whose owning job has exactly the configured qualified name.
///
/// Comparison is ordinal and case-sensitive with no trimming: qualified
/// names come from a single authoritative namespace source, so syntactic
/// variation must not silently match. An unconfigured matcher selects
/// nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ExactNameMatcher {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl ExactNameMatcher {
    /// Stable identifying name of this variant.
    pub const KIND: &'static str = "exact_name";

    /// Variant label shown in configuration UIs.
    pub const DISPLAY_NAME: &'static str = "By exact job name";

    /// Create an unconfigured matcher. It selects nothing until a name is
    /// set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the expected qualified name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The configured name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Advisory check for a candidate name against the currently-known jobs.
    ///
    /// Warns when no job has exactly that name. An empty value imposes no
    /// constraint yet and passes.
    #[must_use]
    pub fn check_name(value: &str, namespace: &dyn JobNamespace) -> Validation {
        if value.is_empty() {
            return Validation::ok();
        }
        if namespace.names().any(|name| name.as_str() == value) {
            Validation::ok()
        } else {
            let value = escape(value);
            Validation::warning(format!("no job is currently named '{value}'"))
        }
    }
}

impl RunMatcher for ExactNameMatcher {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn display_name(&self) -> &'static str {
        Self::DISPLAY_NAME
    }

    fn test(&self, run: &dyn Run) -> bool {
        match &self.name {
            Some(name) => run.job_name().as_str() == name,
            None => false,
        }
    }
}

/// Selects runs whose owning job's qualified name matches the configured
/// pattern in full.
///
/// Matching is anchored: the entire qualified name must match, not merely
/// contain, the pattern. An unconfigured matcher selects nothing, and a
/// pattern that fails to compile selects nothing either — the checks in
/// [`crate::validate`] are expected to reject such a pattern before it is
/// persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RegexNameMatcher {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pattern: Option<String>,
}

impl RegexNameMatcher {
    /// Stable identifying name of this variant.
    pub const KIND: &'static str = "regex_name";

    /// Variant label shown in configuration UIs.
    pub const DISPLAY_NAME: &'static str = "By job name pattern";

    /// Create an unconfigured matcher. It selects nothing until a pattern
    /// is set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pattern without validating it; an invalid pattern selects
    /// nothing at match time. Use [`RegexNameMatcher::compiled`] to reject
    /// bad input at creation instead.
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Create a matcher from `pattern`, rejecting invalid input.
    ///
    /// # Errors
    ///
    /// Returns [`MatcherError::InvalidPattern`] when `pattern` is not a
    /// valid regular expression.
    pub fn compiled(pattern: impl Into<String>) -> Result<Self, MatcherError> {
        let pattern = pattern.into();
        match anchored(&pattern) {
            Ok(_) => Ok(Self {
                pattern: Some(pattern),
            }),
            Err(source) => Err(MatcherError::InvalidPattern { pattern, source }),
        }
    }

    /// The configured pattern, if any.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }
}

/// Compile `pattern` with full-string anchoring.
///
/// `Regex::is_match` reports a match anywhere in the candidate; selection
/// requires the entire qualified name to match, so the pattern is wrapped
/// as `^(?:pattern)$` before compiling.
pub(crate) fn anchored(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{pattern})$"))
}

impl RunMatcher for RegexNameMatcher {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn display_name(&self) -> &'static str {
        Self::DISPLAY_NAME
    }

    fn test(&self, run: &dyn Run) -> bool {
        let Some(pattern) = &self.pattern else {
            return false;
        };
        let name = run.job_name();
        match anchored(pattern) {
            Ok(re) => re.is_match(name.as_str()),
            Err(error) => {
                warn!(pattern = %pattern, %error, "unvalidated pattern reached matching; selecting nothing");
                false
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runsift_core::QualifiedName;

    struct Named(&'static str);

    impl Run for Named {
        fn job_name(&self) -> QualifiedName {
            QualifiedName::from(self.0)
        }
    }

    fn namespace(names: &[&str]) -> Vec<QualifiedName> {
        names.iter().copied().map(QualifiedName::from).collect()
    }

    #[test]
    fn test_exact_name_match() {
        let matcher = ExactNameMatcher::new().with_name("job-ok");
        assert!(matcher.test(&Named("job-ok")));
        assert!(!matcher.test(&Named("job-not-ok")));
    }

    #[test]
    fn test_exact_name_no_trimming() {
        let matcher = ExactNameMatcher::new().with_name("job-ok");
        assert!(!matcher.test(&Named("job-ok ")));
        assert!(!matcher.test(&Named(" job-ok")));
    }

    #[test]
    fn test_exact_name_with_space_and_comma() {
        let matcher = ExactNameMatcher::new().with_name("job with space, and comma");
        assert!(matcher.test(&Named("job with space, and comma")));
    }

    #[test]
    fn test_exact_name_unset_selects_nothing() {
        let matcher = ExactNameMatcher::new();
        assert!(!matcher.test(&Named("job-ok")));
        assert!(!matcher.test(&Named("")));
    }

    #[test]
    fn test_exact_name_within_folder() {
        let in_folder = ExactNameMatcher::new().with_name("folderA/job1");
        let at_root = ExactNameMatcher::new().with_name("job1");

        assert!(in_folder.test(&Named("folderA/job1")));
        assert!(!at_root.test(&Named("folderA/job1")));

        assert!(!in_folder.test(&Named("folderB/job2")));
        assert!(!at_root.test(&Named("folderB/job2")));

        assert!(!in_folder.test(&Named("job1")));
        assert!(at_root.test(&Named("job1")));
    }

    #[test]
    fn test_check_name_known_job() {
        let listing = namespace(&["folderA/job1", "job1"]);
        assert!(ExactNameMatcher::check_name("job1", &listing).is_ok());
    }

    #[test]
    fn test_check_name_unknown_job_warns() {
        let listing = namespace(&["folderA/job1"]);
        let result = ExactNameMatcher::check_name("job1", &listing);
        assert_eq!(result.kind(), runsift_core::ValidationKind::Warning);
        assert!(result.message().unwrap().contains("job1"));
    }

    #[test]
    fn test_check_name_empty_imposes_nothing() {
        let listing = namespace(&[]);
        assert_eq!(
            ExactNameMatcher::check_name("", &listing),
            Validation::ok()
        );
    }

    #[test]
    fn test_regex_is_anchored() {
        let matcher = RegexNameMatcher::new().with_pattern("job-[A-Z]");
        assert!(matcher.test(&Named("job-A")));
        assert!(!matcher.test(&Named("job-2")));
        assert!(!matcher.test(&Named("somewords_before_job-A")));
        assert!(!matcher.test(&Named("job-AB")));
    }

    #[test]
    fn test_regex_anchoring_handles_alternation() {
        // A find-based full-span check would stop at the leftmost "a" here.
        let matcher = RegexNameMatcher::new().with_pattern("a|ab");
        assert!(matcher.test(&Named("a")));
        assert!(matcher.test(&Named("ab")));
        assert!(!matcher.test(&Named("abc")));
    }

    #[test]
    fn test_regex_unset_selects_nothing() {
        let matcher = RegexNameMatcher::new();
        assert!(!matcher.test(&Named("anything")));
    }

    #[test]
    fn test_regex_invalid_pattern_selects_nothing() {
        let matcher = RegexNameMatcher::new().with_pattern("[");
        assert!(!matcher.test(&Named("anything")));
    }

    #[test]
    fn test_regex_within_folder() {
        let only_a = RegexNameMatcher::new().with_pattern("folderA/.*");
        let any_folder = RegexNameMatcher::new().with_pattern(".*/.*");
        let at_root = RegexNameMatcher::new().with_pattern("[^/]+");

        let first = Named("folderA/job inside first folder");
        assert!(only_a.test(&first));
        assert!(any_folder.test(&first));
        assert!(!at_root.test(&first));

        let second = Named("folderB/job inside second folder");
        assert!(!only_a.test(&second));
        assert!(any_folder.test(&second));
        assert!(!at_root.test(&second));

        let root = Named("job root level");
        assert!(!only_a.test(&root));
        assert!(!any_folder.test(&root));
        assert!(at_root.test(&root));
    }

    #[test]
    fn test_compiled_accepts_valid_pattern() {
        let matcher = RegexNameMatcher::compiled("folderA/.*").unwrap();
        assert_eq!(matcher.pattern(), Some("folderA/.*"));
        assert!(matcher.test(&Named("folderA/job1")));
    }

    #[test]
    fn test_compiled_rejects_invalid_pattern() {
        let error = RegexNameMatcher::compiled("[").unwrap_err();
        let MatcherError::InvalidPattern { pattern, .. } = error;
        assert_eq!(pattern, "[");
    }

    #[test]
    fn test_kind_and_display_name() {
        assert_eq!(ExactNameMatcher::new().kind(), "exact_name");
        assert_eq!(RegexNameMatcher::new().kind(), "regex_name");
        assert_ne!(
            ExactNameMatcher::new().display_name(),
            RegexNameMatcher::new().display_name()
        );
    }

    #[test]
    fn test_config_serializes_as_plain_state() {
        let exact = ExactNameMatcher::new().with_name("folderA/job1");
        assert_eq!(
            serde_json::to_value(&exact).unwrap(),
            serde_json::json!({"name": "folderA/job1"})
        );

        let regex = RegexNameMatcher::new().with_pattern("folderA/.*");
        let json = serde_json::to_string(&regex).unwrap();
        let back: RegexNameMatcher = serde_json::from_str(&json).unwrap();
        assert_eq!(back, regex);

        let unset: ExactNameMatcher = serde_json::from_str("{}").unwrap();
        assert_eq!(unset, ExactNameMatcher::new());
    }
}
