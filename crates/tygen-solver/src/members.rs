//! Exact signature matching over member sets.
//!
//! Matching is strict: the required modifier must be present, the parameter
//! list must have the exact length with pairwise type equality in order, and
//! the return type must be equal. No partial or contravariant matching.

use crate::types::{Member, MemberModifiers, TypeDeclaration, TypeRef};

/// First member of `decl` that is static and matches the signature exactly.
pub fn find_matching_static_method<'a>(
    decl: &'a TypeDeclaration,
    returns: &TypeRef,
    takes: &[TypeRef],
) -> Option<&'a Member> {
    decl.members
        .iter()
        .find(|member| method_matches(member, MemberModifiers::STATIC, returns, takes))
}

/// First member of `members` that is abstract and matches the signature
/// exactly.
pub fn find_matching_abstract_method<'a, I>(
    members: I,
    returns: &TypeRef,
    takes: &[TypeRef],
) -> Option<&'a Member>
where
    I: IntoIterator<Item = &'a Member>,
{
    members
        .into_iter()
        .find(|member| method_matches(member, MemberModifiers::ABSTRACT, returns, takes))
}

fn method_matches(
    member: &Member,
    modifier: MemberModifiers,
    returns: &TypeRef,
    takes: &[TypeRef],
) -> bool {
    has_modifier(member, modifier) && method_takes(member, takes) && method_returns(member, returns)
}

fn has_modifier(member: &Member, modifier: MemberModifiers) -> bool {
    member.modifiers.contains(modifier)
}

fn method_takes(member: &Member, takes: &[TypeRef]) -> bool {
    member.params.len() == takes.len()
        && member.params.iter().zip(takes).all(|(param, take)| param == take)
}

fn method_returns(member: &Member, returns: &TypeRef) -> bool {
    member.return_type == *returns
}

#[cfg(test)]
#[path = "../tests/members_tests.rs"]
mod tests;
