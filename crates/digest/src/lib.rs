//! Base-name digest for grouping sibling documents.
//!
//! Two documents are siblings when their identities reduce to the same
//! digest: the final path segment, with every extension stripped, keeping
//! only letters, lower-cased.
//!
//! ```text
//! /path/to/Foo2.txt.old → Foo2.txt.old → Foo2 → Foo → foo
//! ```

/// Characters that separate path segments in an identity string.
const PATH_SEPARATORS: [char; 2] = ['/', '\\'];

/// Compute the grouping digest of a document identity.
///
/// The identity is usually a file path, but display names such as
/// `*scratch*` work the same way. The result may be empty; an empty digest
/// is still a valid grouping key.
pub fn digest(identity: &str) -> String {
    strip_extensions(base_name(identity))
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Final path segment of an identity.
///
/// Returns the input unchanged when it contains no path separator.
pub fn base_name(identity: &str) -> &str {
    identity
        .rsplit(PATH_SEPARATORS)
        .next()
        .unwrap_or(identity)
}

/// Strip every trailing extension from a file name.
///
/// A dot at position 0 is not an extension boundary, so dotfiles keep
/// their name: `.bashrc.bak` becomes `.bashrc`, never an empty string.
pub fn strip_extensions(name: &str) -> &str {
    let mut stem = name;
    while let Some(shorter) = strip_extension(stem) {
        stem = shorter;
    }
    stem
}

/// Strip one trailing extension, or `None` if there is nothing to strip.
fn strip_extension(name: &str) -> Option<&str> {
    match name.rfind('.') {
        Some(dot) if dot > 0 => Some(&name[..dot]),
        _ => None,
    }
}
