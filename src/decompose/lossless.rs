//! Lossless-Join Test
//!
//! A decomposition is lossless when the natural join of the fragments always
//! reconstructs the original relation, never inventing spurious rows. Under
//! a complete dependency set this reduces to a single closure query over the
//! shared attributes.

use tracing::debug;

use crate::closure::closure;
use crate::schema::{AttributeSet, FunctionalDependency};

/// Check whether splitting a schema into `t1` and `t2` has a lossless join
/// under `fds`.
///
/// ALGORITHM:
/// 1. `common = t1 ∩ t2`
/// 2. Close `common` under `fds`
/// 3. Lossless iff the closure covers all of `t1` or all of `t2`
///
/// In other words, the shared attributes must form a superkey of at least
/// one fragment. The test is symmetric in `t1` and `t2`.
///
/// Fragments that share nothing close to the empty set, so the answer is
/// `false` unless a fragment is itself empty.
///
/// # Examples
///
/// ```rust
/// use relnorm::{attrs, check_lossless, FunctionalDependency};
///
/// let fds = vec![FunctionalDependency::from_names(["isbn"], ["title", "year"])?];
///
/// // Split on the key: joining on isbn loses nothing
/// assert!(check_lossless(
///     &attrs!["isbn", "title"],
///     &attrs!["isbn", "year"],
///     &fds,
/// ));
///
/// // Split with no shared attributes: the join is meaningless
/// assert!(!check_lossless(&attrs!["isbn"], &attrs!["title"], &fds));
/// # Ok::<(), relnorm::NormError>(())
/// ```
pub fn check_lossless(t1: &AttributeSet, t2: &AttributeSet, fds: &[FunctionalDependency]) -> bool {
    let common = t1.intersection(t2);
    let determined = closure(&common, fds);

    let lossless = determined.contains_all(t1) || determined.contains_all(t2);
    debug!(common = %common, determined = %determined, lossless, "lossless-join test");

    lossless
}
