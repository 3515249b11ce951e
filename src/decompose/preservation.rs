//! Dependency-Preservation Test
//!
//! A decomposition preserves dependencies when every original dependency can
//! be enforced by constraints local to single fragments. A lost dependency
//! forces the database to re-join the fragments on every write to check it,
//! which defeats the point of decomposing.

use tracing::{debug, trace};

use crate::closure::closure;
use crate::schema::{AttributeSet, FunctionalDependency};

/// Check whether the decomposition into `t1` and `t2` preserves every
/// dependency in `fds`.
///
/// Returns `false` at the first lost dependency. Callers that want the full
/// list of offenders should use [`crate::decompose::analyze`], which runs
/// [`is_dependency_preserved`] for every dependency without stopping.
///
/// An empty dependency set is vacuously preserved.
///
/// # Examples
///
/// ```rust
/// use relnorm::{attrs, check_dependency_preserving, FunctionalDependency};
///
/// let fds = vec![
///     FunctionalDependency::from_names(["a"], ["b"])?,
///     FunctionalDependency::from_names(["b"], ["c"])?,
/// ];
///
/// // Each dependency fits inside one fragment
/// assert!(check_dependency_preserving(
///     &attrs!["a", "b"],
///     &attrs!["b", "c"],
///     &fds,
/// ));
///
/// // b -> c has no fragment to live in
/// assert!(!check_dependency_preserving(
///     &attrs!["a", "b"],
///     &attrs!["a", "c"],
///     &fds,
/// ));
/// # Ok::<(), relnorm::NormError>(())
/// ```
pub fn check_dependency_preserving(
    t1: &AttributeSet,
    t2: &AttributeSet,
    fds: &[FunctionalDependency],
) -> bool {
    for fd in fds {
        if !is_dependency_preserved(fd, t1, t2, fds) {
            debug!(dependency = %fd, "dependency lost by decomposition");
            return false;
        }
    }

    true
}

/// True if `fd` can be enforced using only fragment-local projections of
/// `fds`.
///
/// ALGORITHM (restricted closure of the determinant):
/// 1. `result = copy(fd.determinant())`
/// 2. For each fragment `t`: project `result` onto `t`, close the
///    projection under `fds`, cut the closure back down to `t`, and merge
///    what survives into `result`
/// 3. Repeat step 2 until a full pass adds nothing
/// 4. Preserved iff `result` covers `fd.dependent()`
///
/// Attribute knowledge only ever travels through one fragment at a time,
/// exactly what a constraint checker confined to single fragments can see.
/// The alternation matters: a projection into one fragment can unlock a
/// later step through the other, so a single pass is not enough.
pub fn is_dependency_preserved(
    fd: &FunctionalDependency,
    t1: &AttributeSet,
    t2: &AttributeSet,
    fds: &[FunctionalDependency],
) -> bool {
    let mut result = fd.determinant().clone();

    let mut changed = true;
    while changed {
        changed = false;
        for fragment in [t1, t2] {
            let visible = result.intersection(fragment);
            let step = closure(&visible, fds).intersection(fragment);
            if result.union_with(&step) {
                trace!(dependency = %fd, fragment = %fragment, "restricted closure grew");
                changed = true;
            }
        }
    }

    result.contains_all(fd.dependent())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;

    fn fd(left: &[&str], right: &[&str]) -> FunctionalDependency {
        FunctionalDependency::from_names(left.iter().copied(), right.iter().copied()).unwrap()
    }

    #[test]
    fn test_key_split_preserves_dependencies() {
        let fds = vec![fd(&["a"], &["b", "c"])];

        assert!(check_dependency_preserving(
            &attrs!["a", "b"],
            &attrs!["a", "c"],
            &fds,
        ));
    }

    #[test]
    fn test_fragment_local_dependencies_preserved() {
        let fds = vec![fd(&["a"], &["b"]), fd(&["b"], &["c"])];

        assert!(check_dependency_preserving(
            &attrs!["a", "b"],
            &attrs!["b", "c"],
            &fds,
        ));
    }

    #[test]
    fn test_cross_fragment_dependency_lost() {
        // Classic lossless-but-not-preserving split: b -> c is enforceable
        // in neither {a, b} nor {a, c}
        let fds = vec![fd(&["a"], &["b"]), fd(&["b"], &["c"])];
        let t1 = attrs!["a", "b"];
        let t2 = attrs!["a", "c"];

        assert!(!check_dependency_preserving(&t1, &t2, &fds));

        assert!(is_dependency_preserved(&fds[0], &t1, &t2, &fds));
        assert!(!is_dependency_preserved(&fds[1], &t1, &t2, &fds));
    }

    #[test]
    fn test_preservation_needs_repeated_passes() {
        // a -> c only emerges after a -> b lands in the second fragment and
        // b -> c lands in the first, in that order
        let fds = vec![fd(&["a"], &["c"]), fd(&["a"], &["b"]), fd(&["b"], &["c"])];

        assert!(check_dependency_preserving(
            &attrs!["b", "c"],
            &attrs!["a", "b"],
            &fds,
        ));
    }

    #[test]
    fn test_empty_dependency_set_vacuously_preserved() {
        assert!(check_dependency_preserving(
            &attrs!["a"],
            &attrs!["b"],
            &[],
        ));
    }

    #[test]
    fn test_dependency_outside_both_fragments_lost() {
        let fds = vec![fd(&["a"], &["b"])];

        assert!(!check_dependency_preserving(
            &attrs!["c"],
            &attrs!["d"],
            &fds,
        ));
    }

    #[test]
    fn test_trivial_dependency_always_preserved() {
        let fds = vec![fd(&["a", "b"], &["a"])];

        assert!(check_dependency_preserving(
            &attrs!["c"],
            &attrs!["d"],
            &fds,
        ));
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;
        use crate::schema::arbitrary::{attribute_set, fd_set, functional_dependency};

        proptest! {
            #[test]
            fn dependency_inside_a_fragment_is_preserved(
                t2 in attribute_set(5),
                fd in functional_dependency(),
                rest in fd_set(4),
            ) {
                // Make the first fragment exactly the dependency's attributes
                let t1 = fd.attributes();
                let mut fds = rest;
                fds.push(fd.clone());

                prop_assert!(is_dependency_preserved(&fd, &t1, &t2, &fds));
            }
        }
    }
}
