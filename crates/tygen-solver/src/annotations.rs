//! Presence and value lookup over a member's attached annotations.

use crate::error::ResolveError;
use crate::types::{AnnotationValue, Member};
use indexmap::IndexSet;

/// Whether `member` carries an annotation with the given simple name.
pub fn has_annotation_named(member: &Member, simple_name: &str) -> bool {
    member
        .annotations
        .iter()
        .any(|annotation| annotation.name == simple_name)
}

/// The names of all annotations attached to `member`, in declared order.
pub fn annotation_names(member: &Member) -> IndexSet<String> {
    member
        .annotations
        .iter()
        .map(|annotation| annotation.name.clone())
        .collect()
}

/// The value of attribute `key` on the annotation of kind `kind`.
///
/// An absent annotation yields `Ok(None)`. A present annotation whose kind
/// does not declare `key` at all is a `ParameterNotFound` error; the two
/// cases are deliberately distinct.
pub fn annotation_value<'a>(
    member: &'a Member,
    kind: &str,
    key: &str,
) -> Result<Option<&'a AnnotationValue>, ResolveError> {
    let Some(annotation) = member
        .annotations
        .iter()
        .find(|annotation| annotation.name == kind)
    else {
        return Ok(None);
    };

    match annotation.values.get(key) {
        Some(value) => Ok(Some(value)),
        None => Err(ResolveError::ParameterNotFound {
            owner: kind.to_string(),
            name: key.to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "../tests/annotations_tests.rs"]
mod tests;
