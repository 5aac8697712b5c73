//! Generic return-type resolution over caller-owned declaration snapshots.
//!
//! Given a type declaration hierarchy and a member whose declared return
//! type is a type parameter (possibly self-referential / F-bounded), this
//! crate computes the concrete type that parameter denotes when viewed from
//! a specific root type. It does so in two phases:
//!
//! - **Hierarchy path search** ([`hierarchy`]): a preorder depth-first walk
//!   that locates the ancestor declaring the member and returns the chain of
//!   instantiating edges back to the root.
//! - **Substitution walk** ([`substitute`]): follows each edge's positional
//!   argument, re-deriving the parameter position at every step and carrying
//!   the best upper bound found so far, until a concrete type (or, failing
//!   that, a declared bound) is reached.
//!
//! Two small query sets round out the interface the surrounding generator
//! depends on: exact signature matching ([`members`]) and annotation
//! inspection ([`annotations`]).
//!
//! The resolver is a pure query answered once per (root, member) pair. All
//! inputs are immutable for the duration of a call and are borrowed through
//! the [`TypeSystemQuery`] capability, so independent resolutions over the
//! same snapshot may run concurrently without locking.

pub mod annotations;
mod db;
mod error;
pub mod hierarchy;
pub mod members;
pub mod substitute;
pub mod types;

pub use annotations::{annotation_names, annotation_value, has_annotation_named};
pub use db::{TypeSnapshot, TypeSystemQuery, type_exists};
pub use error::ResolveError;
pub use hierarchy::{HierarchyEdge, HierarchyPath, find_declaring_path};
pub use members::{find_matching_abstract_method, find_matching_static_method};
pub use substitute::{resolve_in_path, resolve_return_type};
pub use types::{
    Annotation, AnnotationValue, DeclKind, Member, MemberModifiers, TypeDeclaration, TypeParam,
    TypeRef,
};

// Test modules: most are loaded by their source files via
// #[path = "../tests/..."] declarations. Only include modules here that
// aren't loaded elsewhere.
#[cfg(test)]
#[path = "../tests/fixtures.rs"]
mod test_fixtures;
#[cfg(test)]
#[path = "../tests/resolve_concurrency_tests.rs"]
mod resolve_concurrency_tests;
