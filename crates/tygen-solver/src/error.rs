//! Resolution failures.
//!
//! All resolver operations are pure and deterministic, so a failure on given
//! inputs will always recur; there is nothing to retry and no partial result
//! to salvage. Errors propagate immediately to the caller, which surfaces
//! them as build-time failures of the surrounding generator.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The target member is not declared anywhere in the hierarchy reachable
    /// from the given root. The caller is expected to pass members that came
    /// from an enumeration of the root's own-and-inherited member set, so
    /// this is a broken precondition rather than a recoverable lookup miss.
    #[error("member `{member}` not found in the hierarchy of `{root}`")]
    MemberNotFound { root: String, member: String },

    /// A type-variable name has no position in its owner's type-parameter
    /// list (also raised for an annotation attribute key that is not declared
    /// by the annotation kind). Indicates a malformed declaration graph.
    #[error("parameter `{name}` not found on `{owner}`")]
    ParameterNotFound { owner: String, name: String },

    /// The substitution walk finished with neither a concrete type nor a
    /// recorded fallback bound, or an edge carried a malformed instantiation.
    /// Unreachable on a well-formed graph.
    #[error("invariant violation: {detail}")]
    InvariantViolation { detail: String },

    /// The hierarchy search exceeded the recursion cap, which only happens
    /// when the snapshot contains an inheritance cycle the host type system
    /// should have rejected.
    #[error("hierarchy of `{decl}` exceeds the depth limit of {limit}")]
    DepthLimitExceeded { decl: String, limit: u32 },
}
