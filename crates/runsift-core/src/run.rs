//! Run and namespace seams supplied by the host.

use crate::name::QualifiedName;

/// A single execution of a job, as seen by run matchers.
pub trait Run {
    /// Qualified name of the job that owns this run.
    ///
    /// Derived from the run's owning container at call time; the framework
    /// never stores it.
    fn job_name(&self) -> QualifiedName;
}

/// Ordered listing of every job name the host currently knows about.
///
/// The enumeration may be large or effectively unbounded, so consumers must
/// bound how much of it they walk. It is consulted only by the diagnostics
/// in `runsift-matchers`, never by a matcher predicate.
pub trait JobNamespace {
    /// All known qualified names, in the namespace's natural order.
    fn names(&self) -> Box<dyn Iterator<Item = QualifiedName> + '_>;
}

impl JobNamespace for [QualifiedName] {
    fn names(&self) -> Box<dyn Iterator<Item = QualifiedName> + '_> {
        Box::new(self.iter().cloned())
    }
}

impl JobNamespace for Vec<QualifiedName> {
    fn names(&self) -> Box<dyn Iterator<Item = QualifiedName> + '_> {
        Box::new(self.iter().cloned())
    }
}
