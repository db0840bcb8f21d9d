//! Pattern validation and live preview.
//!
//! Two independent checks gate a pattern before the configuration layer
//! persists it: a pure syntax check, and a preview enumerating which
//! currently-known jobs the pattern would select. Both are pure functions
//! of their inputs. The preview is additionally gated by an authorization
//! check so it cannot be used to enumerate the namespace without rights.

use regex::Regex;
use tracing::debug;

use runsift_core::{AccessPolicy, JobNamespace, Permission, QualifiedName, Validation, escape};

use crate::run::anchored;

/// Maximum number of matching names a preview reports.
///
/// Bounds the cost of one validation call against an arbitrarily large
/// namespace. When a further match exists the preview stops iterating and
/// reports the excess distinctly, so callers can tell "exactly N" from
/// "more than the cap".
pub const PREVIEW_MATCH_CAP: usize = 10;

/// Check whether `pattern` is a valid regular expression.
///
/// An empty pattern imposes no constraint yet and passes. A pattern that
/// fails to compile produces an ERROR embedding the compiler's diagnostic,
/// escaped, in a `<pre>` block so the operator can see which subexpression
/// is malformed.
#[must_use]
pub fn check_syntax(pattern: &str) -> Validation {
    if pattern.is_empty() {
        return Validation::ok();
    }
    match Regex::new(pattern) {
        Ok(_) => Validation::ok(),
        Err(error) => {
            let diagnostic = escape(&error.to_string());
            Validation::error(format!("<pre>{diagnostic}</pre>"))
        },
    }
}

/// Enumerate which currently-known jobs `pattern` would select.
///
/// `context` is the item the rule is being configured on, when there is
/// one. The caller must hold [`Permission::Configure`] on that context, or
/// [`Permission::Administer`] when there is none; otherwise a neutral OK is
/// returned and nothing about the namespace is disclosed.
///
/// At most [`PREVIEW_MATCH_CAP`] matching names are reported, in the
/// namespace's natural order. Zero matches produce a WARNING; more matches
/// than the cap produce a distinct message variant instead of a longer
/// list.
#[must_use]
pub fn preview_matches(
    pattern: &str,
    context: Option<&QualifiedName>,
    namespace: &dyn JobNamespace,
    policy: &dyn AccessPolicy,
) -> Validation {
    let required = if context.is_some() {
        Permission::Configure
    } else {
        Permission::Administer
    };
    if !policy.has_permission(context, required) {
        return Validation::ok();
    }

    if !check_syntax(pattern).is_ok() {
        return Validation::error("invalid regular expression");
    }
    let Ok(re) = anchored(pattern) else {
        // The raw pattern compiled but the anchored form did not; the
        // matcher would select nothing, so reject it the same way.
        return Validation::error("invalid regular expression");
    };

    let mut matching: Vec<QualifiedName> = Vec::new();
    let mut excess = false;
    for name in namespace.names() {
        if re.is_match(name.as_str()) {
            if matching.len() == PREVIEW_MATCH_CAP {
                excess = true;
                break;
            }
            matching.push(name);
        }
    }

    debug!(
        pattern = %pattern,
        matches = matching.len(),
        excess,
        "previewed pattern against namespace"
    );

    if matching.is_empty() {
        return Validation::warning("the expression does not match any known job");
    }

    let entries: String = matching
        .iter()
        .map(|name| {
            let name = escape(name.as_str());
            format!("<li>{name}</li>")
        })
        .collect();
    let pattern = escape(pattern);

    if excess {
        Validation::ok_with_message(format!(
            "more than {PREVIEW_MATCH_CAP} jobs match '{pattern}'; the first {PREVIEW_MATCH_CAP} are:<ul>{entries}</ul>"
        ))
    } else {
        Validation::ok_with_message(format!("jobs matching '{pattern}':<ul>{entries}</ul>"))
    }
}
