//! Document host trait and an in-memory implementation.

use anyhow::{bail, Result};

/// Interface to the editor that owns the open documents.
///
/// Implementations are queried fresh on every navigation call, so documents
/// opened, closed or renamed between calls are always picked up.
pub trait DocumentHost {
    /// Opaque handle to an open document.
    type Document: Clone;

    /// Identity string of a document: its file path, or a display name
    /// for documents without one. Unique among open documents.
    fn identity(&self, doc: &Self::Document) -> String;

    /// All currently open documents, in any order.
    fn open_documents(&self) -> Result<Vec<Self::Document>>;

    /// The document that currently has focus, if any.
    fn current_document(&self) -> Option<Self::Document>;

    /// Make `doc` the current document.
    fn activate(&mut self, doc: &Self::Document) -> Result<()>;
}

/// Host that keeps documents as plain identity strings.
///
/// Used by the command line front end and by tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHost {
    documents: Vec<String>,
    current: Option<usize>,
}

impl InMemoryHost {
    /// Create a host with the given open documents and nothing focused.
    ///
    /// Repeated identities are opened once, keeping the first occurrence.
    pub fn new<I, S>(documents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut host = Self::default();
        for doc in documents {
            host.open(&doc.into());
        }
        host
    }

    /// Create a host and focus `current`, opening it if it is not open yet.
    pub fn with_current<I, S>(documents: I, current: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut host = Self::new(documents);
        host.open(current);
        host.current = host.index_of(current);
        host
    }

    /// Open a document. Opening an already open identity is a no-op.
    pub fn open(&mut self, identity: &str) {
        if self.index_of(identity).is_none() {
            self.documents.push(identity.to_string());
        }
    }

    /// Close a document. Closing the current document leaves nothing focused.
    pub fn close(&mut self, identity: &str) {
        let Some(index) = self.index_of(identity) else {
            return;
        };
        self.documents.remove(index);
        self.current = match self.current {
            Some(current) if current == index => None,
            Some(current) if current > index => Some(current - 1),
            other => other,
        };
    }

    /// Rename an open document in place, keeping focus on it.
    pub fn rename(&mut self, from: &str, to: &str) {
        if let Some(index) = self.index_of(from) {
            self.documents[index] = to.to_string();
        }
    }

    /// Identity of the current document.
    pub fn current(&self) -> Option<&str> {
        self.current
            .and_then(|index| self.documents.get(index))
            .map(String::as_str)
    }

    /// Identities of all open documents, in opening order.
    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    fn index_of(&self, identity: &str) -> Option<usize> {
        self.documents.iter().position(|doc| doc == identity)
    }
}

impl DocumentHost for InMemoryHost {
    type Document = String;

    fn identity(&self, doc: &String) -> String {
        doc.clone()
    }

    fn open_documents(&self) -> Result<Vec<String>> {
        Ok(self.documents.clone())
    }

    fn current_document(&self) -> Option<String> {
        self.current().map(str::to_string)
    }

    fn activate(&mut self, doc: &String) -> Result<()> {
        match self.index_of(doc) {
            Some(index) => {
                self.current = Some(index);
                Ok(())
            }
            None => bail!("Document is not open: {}", doc),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_current_opens_missing_document() {
        let host = InMemoryHost::with_current(["/a/foo.c"], "/a/foo.h");
        assert_eq!(host.documents(), ["/a/foo.c", "/a/foo.h"]);
        assert_eq!(host.current(), Some("/a/foo.h"));
    }

    #[test]
    fn test_repeated_identities_open_once() {
        let host = InMemoryHost::with_current(["/a/foo.c", "/a/foo.c", "/b/foo.h"], "/a/foo.c");
        assert_eq!(host.documents(), ["/a/foo.c", "/b/foo.h"]);
        assert_eq!(host.current(), Some("/a/foo.c"));
    }

    #[test]
    fn test_activate_open_document() {
        let mut host = InMemoryHost::with_current(["/a/foo.c", "/a/foo.h"], "/a/foo.c");
        host.activate(&"/a/foo.h".to_string()).unwrap();
        assert_eq!(host.current(), Some("/a/foo.h"));
    }

    #[test]
    fn test_activate_closed_document_fails() {
        let mut host = InMemoryHost::with_current(["/a/foo.c"], "/a/foo.c");
        let err = host.activate(&"/a/foo.h".to_string()).unwrap_err();
        assert!(err.to_string().contains("/a/foo.h"));
        assert_eq!(host.current(), Some("/a/foo.c"));
    }

    #[test]
    fn test_close_adjusts_focus() {
        let mut host = InMemoryHost::with_current(["/a", "/b", "/c"], "/c");
        host.close("/a");
        assert_eq!(host.current(), Some("/c"));
        host.close("/c");
        assert_eq!(host.current(), None);
        assert_eq!(host.documents(), ["/b"]);
    }

    #[test]
    fn test_rename_keeps_focus() {
        let mut host = InMemoryHost::with_current(["/a/foo.c"], "/a/foo.c");
        host.rename("/a/foo.c", "/a/bar.c");
        assert_eq!(host.current(), Some("/a/bar.c"));
    }
}
