//! Decision procedures for binary relation-schema decompositions: attribute
//! closures under functional dependencies, the lossless-join test, and the
//! dependency-preservation test.

pub mod closure;
pub mod decompose;
pub mod error;
pub mod schema;
pub mod validation;

pub use closure::{closure, is_superkey};
pub use decompose::{
    analyze, check_dependency_preserving, check_lossless, is_dependency_preserved,
    DecompositionAnalysis,
};
pub use error::{NormError, NormResult};
pub use schema::{AttributeSet, FunctionalDependency};
