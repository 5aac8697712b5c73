use super::*;
use crate::test_fixtures::*;
use crate::types::TypeDeclaration;

#[test]
fn snapshot_lookup_and_existence() {
    let db: TypeSnapshot = snapshot([
        TypeDeclaration::class("Widget"),
        TypeDeclaration::interface("Renderable"),
    ]);

    assert_eq!(db.len(), 2);
    assert!(!db.is_empty());
    assert!(type_exists(&db, "Widget"));
    assert!(type_exists(&db, "Renderable"));
    assert!(!type_exists(&db, "Gadget"));
}

#[test]
fn redefinition_replaces_previous_entry() {
    let mut db = TypeSnapshot::new();
    db.add(TypeDeclaration::class("Widget"));
    db.add(TypeDeclaration::class("Widget").with_supertype(concrete("Base")));

    assert_eq!(db.len(), 1);
    let decl = db.lookup_declaration("Widget").unwrap();
    assert_eq!(decl.supertypes, vec![concrete("Base")]);
}

#[test]
fn queries_on_unknown_names_are_empty() {
    let db = TypeSnapshot::new();

    assert!(db.direct_supertypes("Ghost").is_empty());
    assert!(db.own_members("Ghost").is_empty());
    assert!(db.type_parameters("Ghost").is_empty());
}
