//! Attribute sets with the set algebra the analysis algorithms need

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::NormResult;
use crate::validation::validate_attribute_name;

/// A set of attribute names from a relation schema.
///
/// Attribute sets are the working currency of every algorithm in this crate:
/// decomposition fragments, dependency sides, and closure results are all
/// `AttributeSet` values. The backing store is ordered, so iteration and
/// rendering are deterministic regardless of insertion order.
///
/// # Examples
///
/// ```rust
/// use relnorm::AttributeSet;
///
/// let employees = AttributeSet::from_names(["emp_id", "name", "dept"])?;
/// let payroll = AttributeSet::from_names(["emp_id", "salary"])?;
///
/// let shared = employees.intersection(&payroll);
/// assert!(shared.contains("emp_id"));
/// assert_eq!(shared.len(), 1);
/// # Ok::<(), relnorm::NormError>(())
/// ```
#[derive(
    Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AttributeSet {
    attributes: BTreeSet<String>,
}

impl AttributeSet {
    /// Create an empty attribute set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from attribute names, validating each one.
    ///
    /// Duplicates collapse silently. For trusted literals (tests, examples)
    /// the [`attrs!`](crate::attrs) macro skips validation.
    pub fn from_names<I, S>(names: I) -> NormResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut attributes = BTreeSet::new();
        for name in names {
            let name = name.into();
            validate_attribute_name(&name)?;
            attributes.insert(name);
        }
        Ok(Self { attributes })
    }

    /// Number of attributes in the set
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// True if the set has no attributes
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// True if `name` is in the set
    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains(name)
    }

    /// True if every attribute of `other` is in this set
    pub fn contains_all(&self, other: &AttributeSet) -> bool {
        other.attributes.is_subset(&self.attributes)
    }

    /// True if every attribute of this set is in `other`
    pub fn is_subset_of(&self, other: &AttributeSet) -> bool {
        self.attributes.is_subset(&other.attributes)
    }

    /// Add a single attribute. Returns `true` if it was not already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.attributes.insert(name.into())
    }

    /// Add every attribute of `other` to this set.
    ///
    /// Returns `true` if anything new was added; the fixed-point loops in
    /// the closure and preservation algorithms key off this flag.
    pub fn union_with(&mut self, other: &AttributeSet) -> bool {
        let before = self.attributes.len();
        self.attributes.extend(other.attributes.iter().cloned());
        self.attributes.len() > before
    }

    /// New set holding the attributes present in both sets
    pub fn intersection(&self, other: &AttributeSet) -> AttributeSet {
        AttributeSet {
            attributes: self
                .attributes
                .intersection(&other.attributes)
                .cloned()
                .collect(),
        }
    }

    /// New set holding the attributes present in either set
    pub fn union(&self, other: &AttributeSet) -> AttributeSet {
        AttributeSet {
            attributes: self.attributes.union(&other.attributes).cloned().collect(),
        }
    }

    /// Iterate the attribute names in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        AttributeSet {
            attributes: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, name) in self.attributes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}")?;
        }
        write!(f, "}}")
    }
}

/// Build an [`AttributeSet`] from a list of names.
///
/// Names are taken as-is without validation; use [`AttributeSet::from_names`]
/// when the input comes from outside the crate.
///
/// # Examples
///
/// ```rust
/// use relnorm::attrs;
///
/// let fragment = attrs!["employee_id", "department"];
/// assert_eq!(fragment.len(), 2);
/// assert!(attrs![].is_empty());
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::AttributeSet::new()
    };
    ($($name:expr),+ $(,)?) => {
        [$($name),+]
            .into_iter()
            .collect::<$crate::AttributeSet>()
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::testing::assert_error_code;

    #[test]
    fn test_new_is_empty() {
        let set = AttributeSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_insert_and_contains() {
        let mut set = AttributeSet::new();
        assert!(set.insert("a"));
        assert!(!set.insert("a"));
        assert!(set.contains("a"));
        assert!(!set.contains("b"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_from_names_validates() {
        assert!(AttributeSet::from_names(["employee_id", "name"]).is_ok());
        assert_error_code(
            AttributeSet::from_names(["employee id"]),
            "invalid-attribute-name",
        );
    }

    #[test]
    fn test_from_names_deduplicates() {
        let set = AttributeSet::from_names(["a", "b", "a"]).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_subset_and_contains_all() {
        let small = attrs!["a", "b"];
        let big = attrs!["a", "b", "c"];

        assert!(small.is_subset_of(&big));
        assert!(!big.is_subset_of(&small));
        assert!(big.contains_all(&small));
        assert!(!small.contains_all(&big));
        // every set contains the empty set
        assert!(small.contains_all(&AttributeSet::new()));
    }

    #[test]
    fn test_union_with_reports_growth() {
        let mut set = attrs!["a"];
        assert!(set.union_with(&attrs!["a", "b"]));
        assert!(!set.union_with(&attrs!["a", "b"]));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_intersection_and_union_allocate() {
        let left = attrs!["a", "b", "c"];
        let right = attrs!["b", "c", "d"];

        assert_eq!(left.intersection(&right), attrs!["b", "c"]);
        assert_eq!(left.union(&right), attrs!["a", "b", "c", "d"]);
        // inputs are untouched
        assert_eq!(left.len(), 3);
        assert_eq!(right.len(), 3);
    }

    #[test]
    fn test_iter_is_sorted() {
        let set = attrs!["c", "a", "b"];
        let names: Vec<&str> = set.iter().collect();

        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn test_display_sorted() {
        let set = attrs!["c", "a", "b"];
        assert_eq!(set.to_string(), "{a, b, c}");
        assert_eq!(AttributeSet::new().to_string(), "{}");
    }

    #[test]
    fn test_serializes_as_sorted_array() {
        let set = attrs!["b", "a"];
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json, serde_json::json!(["a", "b"]));
    }
}
