//! Decomposition Checks
//!
//! Given a binary decomposition of a relation schema and the complete set of
//! functional dependencies, this module answers the two classical design
//! questions:
//! - **Lossless join**: does the natural join of the fragments reconstruct
//!   the original relation exactly?
//! - **Dependency preservation**: can every dependency be enforced without
//!   joining the fragments back together?
//!
//! ## Key Components
//!
//! - `check_lossless()`: the lossless-join predicate
//! - `check_dependency_preserving()`: the preservation predicate
//! - `analyze()`: both checks plus per-dependency diagnostics in one
//!   serializable report
//!
//! ## Example
//!
//! ```rust
//! use relnorm::{attrs, check_dependency_preserving, check_lossless, FunctionalDependency};
//!
//! // R(emp_id, name, dept) split on its key
//! let fds = vec![FunctionalDependency::from_names(["emp_id"], ["name", "dept"])?];
//! let t1 = attrs!["emp_id", "name"];
//! let t2 = attrs!["emp_id", "dept"];
//!
//! assert!(check_lossless(&t1, &t2, &fds));
//! assert!(check_dependency_preserving(&t1, &t2, &fds));
//! # Ok::<(), relnorm::NormError>(())
//! ```

pub mod lossless;
pub mod preservation;

pub use lossless::check_lossless;
pub use preservation::{check_dependency_preserving, is_dependency_preserved};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::NormResult;
use crate::schema::{AttributeSet, FunctionalDependency};

/// Diagnostic report for a binary decomposition.
///
/// Produced by [`analyze`]. Unlike the bare predicates, the report never
/// short-circuits: `unpreserved` lists every dependency that fails the
/// fragment-local test, which is what a caller repairing a schema wants to
/// see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecompositionAnalysis {
    pub lossless: bool,
    pub dependency_preserving: bool,
    pub common_attributes: AttributeSet,
    pub unpreserved: Vec<FunctionalDependency>,
}

impl DecompositionAnalysis {
    /// True if the decomposition is lossless and preserves every dependency
    pub fn is_sound(&self) -> bool {
        self.lossless && self.dependency_preserving
    }

    /// Render the report as a JSON value
    pub fn to_json(&self) -> NormResult<serde_json::Value> {
        let value = serde_json::to_value(self)?;
        Ok(value)
    }
}

/// Run both decomposition checks and collect diagnostics.
///
/// # Examples
///
/// ```rust
/// use relnorm::{attrs, analyze, FunctionalDependency};
///
/// // b -> c crosses the fragments and cannot be enforced locally
/// let fds = vec![
///     FunctionalDependency::from_names(["a"], ["b"])?,
///     FunctionalDependency::from_names(["b"], ["c"])?,
/// ];
/// let report = analyze(&attrs!["a", "b"], &attrs!["a", "c"], &fds);
///
/// assert!(report.lossless);
/// assert!(!report.dependency_preserving);
/// assert_eq!(report.unpreserved.len(), 1);
/// # Ok::<(), relnorm::NormError>(())
/// ```
pub fn analyze(
    t1: &AttributeSet,
    t2: &AttributeSet,
    fds: &[FunctionalDependency],
) -> DecompositionAnalysis {
    let unpreserved: Vec<FunctionalDependency> = fds
        .iter()
        .filter(|fd| !is_dependency_preserved(fd, t1, t2, fds))
        .cloned()
        .collect();

    let analysis = DecompositionAnalysis {
        lossless: check_lossless(t1, t2, fds),
        dependency_preserving: unpreserved.is_empty(),
        common_attributes: t1.intersection(t2),
        unpreserved,
    };

    debug!(
        lossless = analysis.lossless,
        dependency_preserving = analysis.dependency_preserving,
        "analyzed decomposition"
    );

    analysis
}
