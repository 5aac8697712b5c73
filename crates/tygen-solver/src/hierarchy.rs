//! Hierarchy path search.
//!
//! Locates the ancestor that directly declares a target member and returns
//! the chain of instantiating edges from that ancestor back down to the
//! resolution root. The substitution walk consumes this path to turn a
//! declared type variable into a concrete type.
//!
//! The search is a preorder depth-first traversal that visits supertypes in
//! declared order (superclass first, then interfaces). In a diamond the
//! first path found in that fixed order wins; no attempt is made to detect
//! or disambiguate genuinely divergent resolutions, so determinism comes
//! entirely from traversal order.
//!
//! Paths are assembled while the recursion unwinds: every frame appends to
//! the owned path it received from the successful branch, never to a list
//! shared across backtracking attempts.

use crate::db::TypeSystemQuery;
use crate::error::ResolveError;
use crate::types::{Member, TypeDeclaration, TypeRef};
use smallvec::{SmallVec, smallvec};
use tygen_common::limits::MAX_HIERARCHY_DEPTH;

/// One step of a hierarchy path: a declaration paired with the
/// `Parameterized` reference it used to instantiate the supertype above it.
///
/// `instantiation` is `None` only for the first path element, which anchors
/// at the member's declaring type and has no incoming edge.
#[derive(Debug, Clone, Copy)]
pub struct HierarchyEdge<'a> {
    pub decl: &'a TypeDeclaration,
    pub instantiation: Option<&'a TypeRef>,
}

/// Ordered edge sequence from the member's declaring type (first) to the
/// resolution root (last). Never empty; length 1 means the member is
/// declared directly on the root.
pub type HierarchyPath<'a> = SmallVec<[HierarchyEdge<'a>; 4]>;

/// Find the path from the ancestor declaring `target` back to `root`.
///
/// `MemberNotFound` is a hard error: the member must originate from an
/// enumeration of the root's own-and-inherited members, so an unreachable
/// member means the caller's precondition is broken.
pub fn find_declaring_path<'a>(
    db: &'a dyn TypeSystemQuery,
    root: &'a TypeDeclaration,
    target: &Member,
) -> Result<HierarchyPath<'a>, ResolveError> {
    match search(db, root, target, 0)? {
        Some(path) => Ok(path),
        None => Err(ResolveError::MemberNotFound {
            root: root.name.clone(),
            member: target.name.clone(),
        }),
    }
}

fn search<'a>(
    db: &'a dyn TypeSystemQuery,
    decl: &'a TypeDeclaration,
    target: &Member,
    depth: u32,
) -> Result<Option<HierarchyPath<'a>>, ResolveError> {
    // The host type system forbids inheritance cycles, so this cap only
    // trips on malformed snapshots. Failing beats overflowing the stack.
    if depth > MAX_HIERARCHY_DEPTH {
        return Err(ResolveError::DepthLimitExceeded {
            decl: decl.name.clone(),
            limit: MAX_HIERARCHY_DEPTH,
        });
    }

    if db.own_members(&decl.name).iter().any(|m| m == target) {
        tracing::debug!(declaring = %decl.name, member = %target.name, "member located");
        return Ok(Some(smallvec![HierarchyEdge {
            decl,
            instantiation: None,
        }]));
    }

    for supertype in db.direct_supertypes(&decl.name) {
        // Supertypes outside the snapshot (platform types the host did not
        // materialize) terminate the branch without error.
        let Some(super_decl) = db.lookup_declaration(supertype.base_name()) else {
            continue;
        };
        if let Some(mut path) = search(db, super_decl, target, depth + 1)? {
            path.push(HierarchyEdge {
                decl,
                instantiation: Some(supertype),
            });
            return Ok(Some(path));
        }
    }

    Ok(None)
}

#[cfg(test)]
#[path = "../tests/hierarchy_tests.rs"]
mod tests;
