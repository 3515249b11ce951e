//! Schema Building Blocks: Attributes and Functional Dependencies
//!
//! This module holds the value types every analysis in this crate operates on:
//! - **Attribute Sets**: decomposition fragments, dependency sides, and
//!   closure results, with the usual set algebra
//! - **Functional Dependencies**: `determinant -> dependent` constraints
//!   with both sides guaranteed non-empty
//! - **Validated Construction**: the `from_names` constructors apply the
//!   identifier rules from [`crate::validation`]
//!
//! ## Key Components
//!
//! - `AttributeSet`: ordered set of attribute names
//! - `FunctionalDependency`: fixed pair of attribute sets
//! - `attrs!`: literal-style set construction for tests and examples
//!
//! ## Example
//!
//! ```rust
//! use relnorm::{AttributeSet, FunctionalDependency};
//!
//! let schema = AttributeSet::from_names(["emp_id", "name", "dept"])?;
//! let fd = FunctionalDependency::from_names(["emp_id"], ["name", "dept"])?;
//!
//! assert!(fd.attributes().is_subset_of(&schema));
//! # Ok::<(), relnorm::NormError>(())
//! ```

pub mod attribute_set;
pub mod functional_dependency;

pub use attribute_set::AttributeSet;
pub use functional_dependency::FunctionalDependency;

#[cfg(test)]
pub(crate) mod arbitrary {
    //! Proptest strategies shared by the algorithm test suites.
    //!
    //! Names are drawn from a small fixed universe so that independently
    //! generated sets and dependencies overlap often enough to exercise the
    //! fixed-point loops.

    use proptest::collection::{btree_set, vec};
    use proptest::prelude::*;

    use super::{AttributeSet, FunctionalDependency};

    pub fn attr_name() -> impl Strategy<Value = String> {
        prop::sample::select(vec!["a", "b", "c", "d", "e", "f", "g", "h"])
            .prop_map(|name| name.to_string())
    }

    pub fn attribute_set(max: usize) -> impl Strategy<Value = AttributeSet> {
        btree_set(attr_name(), 0..=max).prop_map(|names| names.into_iter().collect())
    }

    fn nonempty_attribute_set(max: usize) -> impl Strategy<Value = AttributeSet> {
        btree_set(attr_name(), 1..=max).prop_map(|names| names.into_iter().collect())
    }

    pub fn functional_dependency() -> impl Strategy<Value = FunctionalDependency> {
        (nonempty_attribute_set(3), nonempty_attribute_set(3)).prop_map(|(left, right)| {
            FunctionalDependency::new(left, right).expect("generated sides are non-empty")
        })
    }

    pub fn fd_set(max: usize) -> impl Strategy<Value = Vec<FunctionalDependency>> {
        vec(functional_dependency(), 0..=max)
    }
}
