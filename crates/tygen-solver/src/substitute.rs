//! Substitution walk over a hierarchy path.
//!
//! Resolves a declared type variable to the concrete type it denotes when
//! viewed from the resolution root, or to the best available upper bound
//! when no concrete binding exists anywhere along the path. The walk never
//! returns an unresolved variable except in the raw/erased root-level case.
//!
//! The loop is open-ended and carries the best bound found so far; it never
//! assumes a fixed substitution depth. F-bounded parameters (a bound that
//! refers back to the declaration it parameterizes, `Base<T: Base<T>>`) fall
//! out of this naturally: each step only needs the argument at one position
//! and the bound of one variable, never a fixpoint computation. The position
//! is re-derived against the child's parameter list at every edge, which is
//! what makes chains that rebind the parameter across several generic
//! declarations resolve correctly.

use crate::db::TypeSystemQuery;
use crate::error::ResolveError;
use crate::hierarchy::{HierarchyPath, find_declaring_path};
use crate::types::{Member, TypeDeclaration, TypeRef};

/// Resolve the declared return type of `member` as seen from `root`.
///
/// Declared types that are already concrete short-circuit without touching
/// the hierarchy; only a type variable needs the path search and the
/// substitution walk.
pub fn resolve_return_type(
    db: &dyn TypeSystemQuery,
    root: &TypeDeclaration,
    member: &Member,
) -> Result<TypeRef, ResolveError> {
    if !member.return_type.is_variable() {
        return Ok(member.return_type.clone());
    }
    let path = find_declaring_path(db, root, member)?;
    resolve_in_path(db, &path, &member.return_type)
}

/// Resolve `declared` through the instantiating edges of `path`.
///
/// `path` runs from the declaring type (first, no incoming edge) to the
/// resolution root (last), as produced by
/// [`find_declaring_path`](crate::hierarchy::find_declaring_path).
pub fn resolve_in_path(
    db: &dyn TypeSystemQuery,
    path: &HierarchyPath<'_>,
    declared: &TypeRef,
) -> Result<TypeRef, ResolveError> {
    let TypeRef::Variable(var_name) = declared else {
        return Ok(declared.clone());
    };

    let anchor = path.first().ok_or_else(|| ResolveError::InvariantViolation {
        detail: "empty hierarchy path".to_string(),
    })?;

    let mut position = parameter_index(db, anchor.decl, var_name)?;

    // Member declared directly on the root: there is no instantiating edge
    // to substitute through. The declared upper bound is the best answer; a
    // raw variable is correct when no bound exists anywhere in scope.
    if path.len() == 1 {
        return Ok(match parameter_bound(db, anchor.decl, position) {
            Some(bound) => bound.clone(),
            None => declared.clone(),
        });
    }

    let mut fallback: Option<TypeRef> = None;

    for edge in &path[1..] {
        let instantiation =
            edge.instantiation
                .ok_or_else(|| ResolveError::InvariantViolation {
                    detail: format!("edge at `{}` carries no instantiation", edge.decl.name),
                })?;
        let arg = instantiation.args().get(position).ok_or_else(|| {
            ResolveError::InvariantViolation {
                detail: format!(
                    "`{}` has no argument at position {position} in `{instantiation}`",
                    edge.decl.name
                ),
            }
        })?;

        match arg {
            TypeRef::Variable(next) => {
                let child_index = parameter_index(db, edge.decl, next)?;
                if let Some(bound) = parameter_bound(db, edge.decl, child_index) {
                    fallback = Some(bound.clone());
                }
                tracing::trace!(
                    child = %edge.decl.name,
                    variable = %next,
                    position = child_index,
                    "substitution continues through variable"
                );
                position = child_index;
            }
            resolved => return Ok(resolved.clone()),
        }
    }

    // A well-formed path always ends in a concrete argument or passed at
    // least one bounded variable on the way up.
    fallback.ok_or_else(|| ResolveError::InvariantViolation {
        detail: format!("substitution for `{var_name}` ended without a concrete type or bound"),
    })
}

/// Position of `name` in the owner's ordered type-parameter list.
fn parameter_index(
    db: &dyn TypeSystemQuery,
    owner: &TypeDeclaration,
    name: &str,
) -> Result<usize, ResolveError> {
    db.type_parameters(&owner.name)
        .iter()
        .position(|param| param.name == name)
        .ok_or_else(|| ResolveError::ParameterNotFound {
            owner: owner.name.clone(),
            name: name.to_string(),
        })
}

fn parameter_bound<'a>(
    db: &'a dyn TypeSystemQuery,
    owner: &TypeDeclaration,
    index: usize,
) -> Option<&'a TypeRef> {
    db.type_parameters(&owner.name).get(index)?.bound.as_ref()
}

#[cfg(test)]
#[path = "../tests/substitute_tests.rs"]
mod tests;
