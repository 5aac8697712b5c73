use super::*;
use crate::db::TypeSnapshot;
use crate::test_fixtures::*;
use crate::types::{TypeDeclaration, TypeParam};

#[test]
fn direct_binding_resolves_type_argument() {
    let m = method("value", variable("T"));
    let db: TypeSnapshot = snapshot([
        TypeDeclaration::class("Base")
            .with_type_param(TypeParam::new("T"))
            .with_member(m.clone()),
        TypeDeclaration::class("Leaf")
            .with_supertype(parameterized("Base", vec![concrete("String")])),
    ]);
    let root = db.lookup_declaration("Leaf").unwrap();

    assert_eq!(resolve_return_type(&db, root, &m), Ok(concrete("String")));
}

#[test]
fn concrete_return_type_short_circuits() {
    let m = method("name", concrete("String"));
    let db: TypeSnapshot = snapshot([TypeDeclaration::class("Widget").with_member(m.clone())]);
    let root = db.lookup_declaration("Widget").unwrap();

    assert_eq!(resolve_return_type(&db, root, &m), Ok(concrete("String")));
}

#[test]
fn root_level_variable_with_bound_returns_bound() {
    let m = method("value", variable("T"));
    let db: TypeSnapshot = snapshot([
        TypeDeclaration::class("Base")
            .with_type_param(TypeParam::bounded("T", concrete("Upper")))
            .with_member(m.clone()),
    ]);
    let root = db.lookup_declaration("Base").unwrap();

    assert_eq!(resolve_return_type(&db, root, &m), Ok(concrete("Upper")));
}

#[test]
fn root_level_variable_without_bound_stays_raw() {
    // No binding exists anywhere in scope; the raw/erased variable is the
    // correct answer.
    let m = method("value", variable("T"));
    let db: TypeSnapshot = snapshot([
        TypeDeclaration::class("Base")
            .with_type_param(TypeParam::new("T"))
            .with_member(m.clone()),
    ]);
    let root = db.lookup_declaration("Base").unwrap();

    assert_eq!(resolve_return_type(&db, root, &m), Ok(variable("T")));
}

#[test]
fn unknown_variable_reports_parameter_not_found() {
    let m = method("value", variable("X"));
    let db: TypeSnapshot = snapshot([TypeDeclaration::class("Base").with_member(m.clone())]);
    let root = db.lookup_declaration("Base").unwrap();

    assert_eq!(
        resolve_return_type(&db, root, &m),
        Err(ResolveError::ParameterNotFound {
            owner: "Base".to_string(),
            name: "X".to_string(),
        })
    );
}

#[test]
fn bound_narrows_through_one_level() {
    let m = method("value", variable("T"));
    let db: TypeSnapshot = snapshot([
        TypeDeclaration::class("Base")
            .with_type_param(TypeParam::new("T"))
            .with_member(m.clone()),
        TypeDeclaration::class("Mid")
            .with_type_param(TypeParam::bounded("T", concrete("Upper")))
            .with_supertype(parameterized("Base", vec![variable("T")])),
        TypeDeclaration::class("Narrow")
            .with_supertype(parameterized("Mid", vec![concrete("Lower")])),
    ]);

    // From the concrete leaf the argument wins over the bound.
    let narrow = db.lookup_declaration("Narrow").unwrap();
    assert_eq!(resolve_return_type(&db, narrow, &m), Ok(concrete("Lower")));

    // From Mid there is no concrete argument anywhere; the declared bound is
    // the best available answer.
    let mid = db.lookup_declaration("Mid").unwrap();
    assert_eq!(resolve_return_type(&db, mid, &m), Ok(concrete("Upper")));
}

#[test]
fn f_bounded_single_level_resolves_to_leaf() {
    let m = method("self_ref", variable("T"));
    let db: TypeSnapshot = snapshot([
        TypeDeclaration::class("Base")
            .with_type_param(TypeParam::bounded(
                "T",
                parameterized("Base", vec![variable("T")]),
            ))
            .with_member(m.clone()),
        TypeDeclaration::class("Leaf")
            .with_supertype(parameterized("Base", vec![concrete("Leaf")])),
    ]);
    let root = db.lookup_declaration("Leaf").unwrap();

    assert_eq!(resolve_return_type(&db, root, &m), Ok(concrete("Leaf")));
}

#[test]
fn multi_level_chain_rederives_position_per_edge() {
    // Three intermediate generic declarations, each rebinding the parameter
    // at a different position. Constant-position substitution would read the
    // wrong argument at M1 and M2.
    let m = method("value", variable("T"));
    let db: TypeSnapshot = snapshot([
        TypeDeclaration::class("Base")
            .with_type_param(TypeParam::new("T"))
            .with_member(m.clone()),
        TypeDeclaration::class("M1")
            .with_type_param(TypeParam::new("X"))
            .with_type_param(TypeParam::new("U"))
            .with_supertype(parameterized("Base", vec![variable("U")])),
        TypeDeclaration::class("M2")
            .with_type_param(TypeParam::new("V"))
            .with_type_param(TypeParam::new("Y"))
            .with_supertype(parameterized("M1", vec![variable("Y"), variable("V")])),
        TypeDeclaration::class("M3")
            .with_type_param(TypeParam::new("W"))
            .with_supertype(parameterized("M2", vec![variable("W"), concrete("Unused")])),
        TypeDeclaration::class("Leaf")
            .with_supertype(parameterized("M3", vec![concrete("Leaf")])),
    ]);
    let root = db.lookup_declaration("Leaf").unwrap();

    assert_eq!(resolve_return_type(&db, root, &m), Ok(concrete("Leaf")));
}

#[test]
fn interface_generics_resolve_like_class_generics() {
    let m = method("value", variable("T"));
    let db: TypeSnapshot = snapshot([
        TypeDeclaration::interface("IBase")
            .with_type_param(TypeParam::new("T"))
            .with_member(m.clone()),
        TypeDeclaration::class("Leaf")
            .with_supertype(parameterized("IBase", vec![concrete("String")])),
    ]);
    let root = db.lookup_declaration("Leaf").unwrap();

    assert_eq!(resolve_return_type(&db, root, &m), Ok(concrete("String")));
}

#[test]
fn superclass_and_two_interfaces_resolve_to_same_leaf() {
    let from_super = method("from_super", variable("S"));
    let from_a = method("from_a", variable("A"));
    let from_b = method("from_b", variable("B"));
    let db: TypeSnapshot = snapshot([
        TypeDeclaration::class("SuperBase")
            .with_type_param(TypeParam::bounded(
                "S",
                parameterized("SuperBase", vec![variable("S")]),
            ))
            .with_member(from_super.clone()),
        TypeDeclaration::interface("IfaceA")
            .with_type_param(TypeParam::bounded(
                "A",
                parameterized("IfaceA", vec![variable("A")]),
            ))
            .with_member(from_a.clone()),
        TypeDeclaration::interface("IfaceB")
            .with_type_param(TypeParam::bounded(
                "B",
                parameterized("IfaceB", vec![variable("B")]),
            ))
            .with_member(from_b.clone()),
        TypeDeclaration::class("Leaf")
            .with_supertype(parameterized("SuperBase", vec![concrete("Leaf")]))
            .with_supertype(parameterized("IfaceA", vec![concrete("Leaf")]))
            .with_supertype(parameterized("IfaceB", vec![concrete("Leaf")])),
    ]);
    let root = db.lookup_declaration("Leaf").unwrap();

    assert_eq!(resolve_return_type(&db, root, &from_super), Ok(concrete("Leaf")));
    assert_eq!(resolve_return_type(&db, root, &from_a), Ok(concrete("Leaf")));
    assert_eq!(resolve_return_type(&db, root, &from_b), Ok(concrete("Leaf")));
}

#[test]
fn resolution_is_idempotent() {
    let m = method("value", variable("T"));
    let db: TypeSnapshot = snapshot([
        TypeDeclaration::class("Base")
            .with_type_param(TypeParam::new("T"))
            .with_member(m.clone()),
        TypeDeclaration::class("Leaf")
            .with_supertype(parameterized("Base", vec![concrete("String")])),
    ]);
    let root = db.lookup_declaration("Leaf").unwrap();

    let first = resolve_return_type(&db, root, &m);
    let second = resolve_return_type(&db, root, &m);
    assert_eq!(first, second);
}

#[test]
fn short_argument_list_is_invariant_violation() {
    // A raw instantiation of a generic supertype leaves nothing to read at
    // the parameter's position; the walk must reject the malformed edge.
    let m = method("value", variable("T"));
    let db: TypeSnapshot = snapshot([
        TypeDeclaration::class("Base")
            .with_type_param(TypeParam::new("T"))
            .with_member(m.clone()),
        TypeDeclaration::class("Leaf").with_supertype(parameterized("Base", vec![])),
    ]);
    let root = db.lookup_declaration("Leaf").unwrap();

    assert!(matches!(
        resolve_return_type(&db, root, &m),
        Err(ResolveError::InvariantViolation { .. })
    ));
}

#[test]
fn exhausted_walk_without_bound_is_invariant_violation() {
    // Mid passes its own unbounded variable up to Base and the walk ends
    // there; no concrete type and no bound were ever seen.
    let m = method("value", variable("T"));
    let db: TypeSnapshot = snapshot([
        TypeDeclaration::class("Base")
            .with_type_param(TypeParam::new("T"))
            .with_member(m.clone()),
        TypeDeclaration::class("Mid")
            .with_type_param(TypeParam::new("U"))
            .with_supertype(parameterized("Base", vec![variable("U")])),
    ]);
    let root = db.lookup_declaration("Mid").unwrap();

    assert!(matches!(
        resolve_return_type(&db, root, &m),
        Err(ResolveError::InvariantViolation { .. })
    ));
}
