//! Read-only access to the caller's type-system snapshot.
//!
//! The resolver never owns declaration data. The host supplies a snapshot for
//! the duration of one resolution call and the resolver borrows it through
//! [`TypeSystemQuery`], so independent resolutions over the same snapshot can
//! run concurrently without coordination.

use crate::types::{Member, TypeDeclaration, TypeParam, TypeRef};
use rustc_hash::FxHashMap;

/// The capability the resolver requires from its caller.
///
/// Everything is keyed by declaration name. The default methods answer the
/// ordered-data queries out of the declaration itself; implementors only have
/// to provide the name lookup.
pub trait TypeSystemQuery {
    /// Look up a declaration by name. `None` for types outside the snapshot
    /// (for example platform types the host did not materialize).
    fn lookup_declaration(&self, name: &str) -> Option<&TypeDeclaration>;

    /// Ordered direct supertype edges of a declaration: superclass first,
    /// then implemented interfaces in declared order.
    fn direct_supertypes(&self, name: &str) -> &[TypeRef] {
        self.lookup_declaration(name)
            .map(|decl| decl.supertypes.as_slice())
            .unwrap_or(&[])
    }

    /// The non-inherited member set of a declaration.
    fn own_members(&self, name: &str) -> &[Member] {
        self.lookup_declaration(name)
            .map(|decl| decl.members.as_slice())
            .unwrap_or(&[])
    }

    /// The ordered type-parameter list of a declaration. Positions in this
    /// list are the substitution indices.
    fn type_parameters(&self, name: &str) -> &[TypeParam] {
        self.lookup_declaration(name)
            .map(|decl| decl.type_params.as_slice())
            .unwrap_or(&[])
    }
}

/// In-memory snapshot keyed by declaration name.
#[derive(Debug, Default)]
pub struct TypeSnapshot {
    declarations: FxHashMap<String, TypeDeclaration>,
}

impl TypeSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a declaration. A redefinition replaces the previous entry.
    pub fn add(&mut self, decl: TypeDeclaration) {
        self.declarations.insert(decl.name.clone(), decl);
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl FromIterator<TypeDeclaration> for TypeSnapshot {
    fn from_iter<I: IntoIterator<Item = TypeDeclaration>>(iter: I) -> Self {
        let mut snapshot = Self::new();
        for decl in iter {
            snapshot.add(decl);
        }
        snapshot
    }
}

impl TypeSystemQuery for TypeSnapshot {
    fn lookup_declaration(&self, name: &str) -> Option<&TypeDeclaration> {
        self.declarations.get(name)
    }
}

/// Whether a named type is present in the snapshot.
pub fn type_exists(db: &dyn TypeSystemQuery, name: &str) -> bool {
    db.lookup_declaration(name).is_some()
}

#[cfg(test)]
#[path = "../tests/db_tests.rs"]
mod tests;
