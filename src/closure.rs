//! Attribute Closure Computation
//!
//! The closure of an attribute set under a collection of functional
//! dependencies is the full set of attributes those attributes determine.
//! Both decomposition checks reduce to closure queries, which makes this
//! the core algorithm of the crate.

use tracing::{debug, trace};

use crate::schema::{AttributeSet, FunctionalDependency};

/// Compute the closure of `attrs` under `fds`.
///
/// Returns the smallest superset of `attrs` such that for every dependency
/// `L -> R` whose determinant `L` is contained in the result, the dependent
/// `R` is contained as well.
///
/// ALGORITHM:
/// 1. Start from a copy of `attrs`
/// 2. Scan all dependencies; whenever a determinant is covered by the
///    result, add the dependent to it
/// 3. Repeat full scans until one adds nothing
///
/// Each pass either grows the result or ends the loop, and the result is
/// bounded by the attributes mentioned in `attrs` and `fds`, so the loop
/// terminates after at most that many passes.
///
/// The input set is never mutated. Dependencies over attributes that never
/// connect to `attrs` are inert, not an error.
///
/// # Examples
///
/// ```rust
/// use relnorm::{attrs, closure, FunctionalDependency};
///
/// let fds = vec![
///     FunctionalDependency::from_names(["isbn"], ["title"])?,
///     FunctionalDependency::from_names(["title"], ["shelf"])?,
/// ];
///
/// let reachable = closure(&attrs!["isbn"], &fds);
/// assert_eq!(reachable, attrs!["isbn", "title", "shelf"]);
/// # Ok::<(), relnorm::NormError>(())
/// ```
pub fn closure(attrs: &AttributeSet, fds: &[FunctionalDependency]) -> AttributeSet {
    let mut result = attrs.clone();

    let mut changed = true;
    while changed {
        changed = false;
        for fd in fds {
            // Short-circuit keeps the dependent out of the result unless the
            // determinant is fully covered
            if result.contains_all(fd.determinant()) && result.union_with(fd.dependent()) {
                trace!(dependency = %fd, "closure gained attributes");
                changed = true;
            }
        }
    }

    debug!(start = %attrs, result = %result, "computed attribute closure");
    result
}

/// True if `attrs` functionally determines every attribute of `schema`.
///
/// The textbook superkey test: the closure of `attrs` must cover the whole
/// schema. Supersets of a superkey are superkeys as well; minimality is not
/// checked here.
///
/// # Examples
///
/// ```rust
/// use relnorm::{attrs, is_superkey, FunctionalDependency};
///
/// let schema = attrs!["emp_id", "name", "dept"];
/// let fds = vec![FunctionalDependency::from_names(["emp_id"], ["name", "dept"])?];
///
/// assert!(is_superkey(&attrs!["emp_id"], &schema, &fds));
/// assert!(!is_superkey(&attrs!["name"], &schema, &fds));
/// # Ok::<(), relnorm::NormError>(())
/// ```
pub fn is_superkey(
    attrs: &AttributeSet,
    schema: &AttributeSet,
    fds: &[FunctionalDependency],
) -> bool {
    closure(attrs, fds).contains_all(schema)
}
