//! Functional dependency value objects

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{NormError, NormResult};
use crate::schema::AttributeSet;

/// A functional dependency `determinant -> dependent` over a relation schema.
///
/// Both sides are fixed at construction and guaranteed non-empty; decoded
/// values route through [`FunctionalDependency::new`], so the guarantee
/// survives deserialization as well. The value carries no reference to a
/// schema; attributes that appear nowhere else are inert during closure
/// computation rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFunctionalDependency")]
pub struct FunctionalDependency {
    determinant: AttributeSet,
    dependent: AttributeSet,
}

/// Wire shape for [`FunctionalDependency`]. Deserializing the raw pair and
/// converting keeps `new` the single place the non-empty invariant lives.
#[derive(Deserialize)]
struct RawFunctionalDependency {
    determinant: AttributeSet,
    dependent: AttributeSet,
}

impl TryFrom<RawFunctionalDependency> for FunctionalDependency {
    type Error = NormError;

    fn try_from(raw: RawFunctionalDependency) -> NormResult<Self> {
        Self::new(raw.determinant, raw.dependent)
    }
}

impl FunctionalDependency {
    /// Create a dependency from two attribute sets.
    ///
    /// An empty side is rejected: a dependency with nothing on the left or
    /// right has no meaning in the analyses built on top.
    pub fn new(determinant: AttributeSet, dependent: AttributeSet) -> NormResult<Self> {
        if determinant.is_empty() {
            return Err(NormError::EmptyDeterminant {
                dependent: dependent.to_string(),
            });
        }
        if dependent.is_empty() {
            return Err(NormError::EmptyDependent {
                determinant: determinant.to_string(),
            });
        }

        Ok(Self {
            determinant,
            dependent,
        })
    }

    /// Create a dependency from raw names, validating every identifier
    ///
    /// # Examples
    ///
    /// ```rust
    /// use relnorm::FunctionalDependency;
    ///
    /// let fd = FunctionalDependency::from_names(["isbn"], ["title", "year"])?;
    /// assert_eq!(fd.to_string(), "{isbn} -> {title, year}");
    /// # Ok::<(), relnorm::NormError>(())
    /// ```
    pub fn from_names<I, J, S, T>(determinant: I, dependent: J) -> NormResult<Self>
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self::new(
            AttributeSet::from_names(determinant)?,
            AttributeSet::from_names(dependent)?,
        )
    }

    /// Left side: the attributes that do the determining
    pub fn determinant(&self) -> &AttributeSet {
        &self.determinant
    }

    /// Right side: the attributes being determined
    pub fn dependent(&self) -> &AttributeSet {
        &self.dependent
    }

    /// Every attribute mentioned on either side
    pub fn attributes(&self) -> AttributeSet {
        self.determinant.union(&self.dependent)
    }

    /// True if the dependency is implied by reflexivity, i.e. the dependent
    /// is a subset of the determinant
    pub fn is_trivial(&self) -> bool {
        self.dependent.is_subset_of(&self.determinant)
    }
}

impl fmt::Display for FunctionalDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.determinant, self.dependent)
    }
}
