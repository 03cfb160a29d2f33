//! Sibling group resolution.
//!
//! A group is every open document whose identity has the same digest as a
//! reference document, sorted by identity. Groups are rebuilt from the live
//! document set on every call and never cached.

use namesake_digest::digest;

/// One document of a group together with its identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member<D> {
    identity: String,
    document: D,
}

impl<D> Member<D> {
    /// Create a member from an identity and its document handle.
    pub fn new(identity: impl Into<String>, document: D) -> Self {
        Self {
            identity: identity.into(),
            document,
        }
    }

    /// Identity string (sort and equality key).
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Document handle.
    pub fn document(&self) -> &D {
        &self.document
    }
}

/// Documents sharing one digest, in ascending identity order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<D> {
    digest: String,
    members: Vec<Member<D>>,
}

impl<D> Group<D> {
    /// Digest shared by every member.
    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// Members in ascending identity order.
    pub fn members(&self) -> &[Member<D>] {
        &self.members
    }

    /// Member identities in ascending order.
    pub fn identities(&self) -> impl Iterator<Item = &str> + '_ {
        self.members.iter().map(Member::identity)
    }

    /// Index of the member with the given identity.
    pub fn position(&self, identity: &str) -> Option<usize> {
        self.members
            .binary_search_by(|member| member.identity().cmp(identity))
            .ok()
    }

    /// Whether a member with the given identity exists.
    pub fn contains(&self, identity: &str) -> bool {
        self.position(identity).is_some()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the group has no members.
    ///
    /// A resolved group always contains its reference, so this only holds
    /// for groups built by hand.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Build a group from members that already share `digest`.
    ///
    /// Members are sorted by identity here; callers need not pre-sort.
    pub fn from_members(digest: impl Into<String>, mut members: Vec<Member<D>>) -> Self {
        members.sort_by(|a, b| a.identity.cmp(&b.identity));
        Self {
            digest: digest.into(),
            members,
        }
    }
}

/// Resolve the group of `reference` among the `open` documents.
///
/// `identity_of` maps a document to its identity string. The reference is
/// always a member of the result, even if the host did not list it among
/// the open documents.
pub fn resolve_group<D, I, F>(reference: &D, open: I, identity_of: F) -> Group<D>
where
    D: Clone,
    I: IntoIterator<Item = D>,
    F: Fn(&D) -> String,
{
    let reference_identity = identity_of(reference);
    let key = digest(&reference_identity);

    let members: Vec<Member<D>> = open
        .into_iter()
        .filter_map(|doc| {
            let identity = identity_of(&doc);
            (digest(&identity) == key).then(|| Member::new(identity, doc))
        })
        .collect();

    let mut group = Group::from_members(key, members);
    if let Err(index) = group
        .members
        .binary_search_by(|member| member.identity().cmp(&reference_identity))
    {
        group
            .members
            .insert(index, Member::new(reference_identity, reference.clone()));
    }
    group
}
