//! Core model for the caller-supplied type-declaration snapshot.
//!
//! These types mirror what a host type system hands the resolver for the
//! duration of one resolution call: named declarations with ordered type
//! parameters and ordered supertype edges, members with declared signatures,
//! and the annotations attached to those members. Everything here is plain
//! immutable data; the resolver never mutates a snapshot and never keeps
//! derived state across calls.
//!
//! Type references are an explicit tagged variant (`Concrete` / `Variable` /
//! `Parameterized`) that callers and the resolver pattern-match exhaustively,
//! instead of runtime "kind" inspection.

use bitflags::bitflags;
use indexmap::IndexMap;
use std::fmt;

/// A reference to a type as written in a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A fully resolved named type.
    Concrete(String),
    /// An unresolved type-parameter reference.
    Variable(String),
    /// An instantiation of a generic type with positional arguments.
    Parameterized { base: String, args: Vec<TypeRef> },
}

impl TypeRef {
    pub fn concrete(name: impl Into<String>) -> Self {
        TypeRef::Concrete(name.into())
    }

    pub fn variable(name: impl Into<String>) -> Self {
        TypeRef::Variable(name.into())
    }

    pub fn parameterized(base: impl Into<String>, args: Vec<TypeRef>) -> Self {
        TypeRef::Parameterized {
            base: base.into(),
            args,
        }
    }

    /// Whether this reference is an unresolved type variable.
    pub fn is_variable(&self) -> bool {
        matches!(self, TypeRef::Variable(_))
    }

    /// The named type this reference points at.
    ///
    /// For a `Variable` this is the parameter name, which is also how the
    /// variable is located in its owner's parameter list.
    pub fn base_name(&self) -> &str {
        match self {
            TypeRef::Concrete(name) | TypeRef::Variable(name) => name,
            TypeRef::Parameterized { base, .. } => base,
        }
    }

    /// Positional arguments of a `Parameterized` reference, empty otherwise.
    pub fn args(&self) -> &[TypeRef] {
        match self {
            TypeRef::Parameterized { args, .. } => args,
            _ => &[],
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Concrete(name) | TypeRef::Variable(name) => f.write_str(name),
            TypeRef::Parameterized { base, args } => {
                write!(f, "{base}<")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(">")
            }
        }
    }
}

/// A type parameter declared by a [`TypeDeclaration`], with an optional
/// upper bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeParam {
    pub name: String,
    pub bound: Option<TypeRef>,
}

impl TypeParam {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bound: None,
        }
    }

    pub fn bounded(name: impl Into<String>, bound: TypeRef) -> Self {
        Self {
            name: name.into(),
            bound: Some(bound),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Class,
    Interface,
}

/// A named type declaration in the caller's snapshot.
///
/// Ordering is significant in two places: `type_params` positions define the
/// substitution indices, and `supertypes` lists the superclass first followed
/// by implemented interfaces in declared order, which fixes the search order
/// of the hierarchy walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    pub name: String,
    pub kind: DeclKind,
    pub type_params: Vec<TypeParam>,
    /// Each entry is `Concrete` (raw supertype) or `Parameterized`.
    pub supertypes: Vec<TypeRef>,
    /// Members declared directly on this type, excluding inherited ones.
    pub members: Vec<Member>,
}

impl TypeDeclaration {
    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, DeclKind::Class)
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(name, DeclKind::Interface)
    }

    fn new(name: impl Into<String>, kind: DeclKind) -> Self {
        Self {
            name: name.into(),
            kind,
            type_params: Vec::new(),
            supertypes: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn with_type_param(mut self, param: TypeParam) -> Self {
        self.type_params.push(param);
        self
    }

    pub fn with_supertype(mut self, supertype: TypeRef) -> Self {
        self.supertypes.push(supertype);
        self
    }

    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }
}

bitflags! {
    /// Modifier set attached to a member.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MemberModifiers: u8 {
        const STATIC = 1 << 0;
        const ABSTRACT = 1 << 1;
        const FINAL = 1 << 2;
        const PRIVATE = 1 << 3;
    }
}

/// A method owned by exactly one declaring type.
///
/// Members carry no back-pointer to their owner; the hierarchy search locates
/// the declaring type by structural equality against each declaration's own
/// member list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub modifiers: MemberModifiers,
    pub params: Vec<TypeRef>,
    pub return_type: TypeRef,
    pub annotations: Vec<Annotation>,
}

impl Member {
    pub fn new(name: impl Into<String>, return_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            modifiers: MemberModifiers::empty(),
            params: Vec::new(),
            return_type,
            annotations: Vec::new(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: MemberModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_params(mut self, params: Vec<TypeRef>) -> Self {
        self.params = params;
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

/// A value carried by an annotation attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationValue {
    Str(String),
    Int(i64),
    Bool(bool),
    Type(TypeRef),
}

/// An annotation attached to a member.
///
/// The snapshot provider materializes every declared attribute of the
/// annotation kind (defaults included), so an attribute missing from
/// `values` means the key is not valid for that kind at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub name: String,
    pub values: IndexMap<String, AnnotationValue>,
}

impl Annotation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: IndexMap::new(),
        }
    }

    pub fn with_value(mut self, key: impl Into<String>, value: AnnotationValue) -> Self {
        self.values.insert(key.into(), value);
        self
    }
}
