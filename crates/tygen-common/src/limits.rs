//! Centralized limits and thresholds for the resolver.
//!
//! This module provides shared constants for recursion depths used by the
//! resolver crates. Centralizing these values:
//! - Prevents duplicate definitions with inconsistent values
//! - Makes it easy to tune limits for different host type systems
//! - Documents the rationale for each limit

/// Maximum depth for the hierarchy path search.
///
/// The host type system forbids inheritance cycles, so a well-formed
/// declaration graph always terminates the search on its own. The cap exists
/// to protect against malformed snapshots: a graph that was assembled by hand
/// (or by a buggy front end) can contain a cycle, and without the cap the
/// depth-first search would overflow the call stack instead of reporting an
/// error.
///
/// Real declaration hierarchies are shallow; even pathological generated
/// code rarely exceeds a few dozen levels. Exceeding this limit yields
/// `DepthLimitExceeded` rather than aborting the process.
pub const MAX_HIERARCHY_DEPTH: u32 = 128;
