//! Core types and traits for namesake.
//!
//! This crate defines the seam between the cycling logic and the editor
//! that hosts it. The editor owns the documents; namesake only reads the
//! open set and asks the editor to activate one of them.
//!
//! ```text
//! ┌──────────────────────────────┐        ┌──────────────────────────┐
//! │ editor (DocumentHost impl)   │ ◀────▶ │ namesake-cycle           │
//! │ open_documents / current     │        │ advance / retreat        │
//! │ activate                     │        │ digest → group → rotate  │
//! └──────────────────────────────┘        └──────────────────────────┘
//! ```

pub mod host;

pub use host::{DocumentHost, InMemoryHost};

/// Direction of travel through a group of sibling documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward the next identity in sort order, wrapping to the first.
    Forward,
    /// Toward the previous identity in sort order, wrapping to the last.
    Backward,
}

impl Direction {
    /// The opposite direction.
    pub fn reverse(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Result of one advance/retreat call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The host activated another document of the same group.
    Switched {
        /// Identity of the document that was current
        from: String,
        /// Identity of the document that was activated
        to: String,
    },

    /// Nothing to switch to (singleton group). The current document stays.
    Unchanged {
        /// Identity of the current document
        current: String,
    },

    /// The host reported no current document.
    NoCurrentDocument,
}

impl CycleOutcome {
    /// Identity of the document that is current after the call, if any.
    pub fn current(&self) -> Option<&str> {
        match self {
            CycleOutcome::Switched { to, .. } => Some(to),
            CycleOutcome::Unchanged { current } => Some(current),
            CycleOutcome::NoCurrentDocument => None,
        }
    }

    /// Whether the host was asked to activate a different document.
    pub fn switched(&self) -> bool {
        matches!(self, CycleOutcome::Switched { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_reverse() {
        assert_eq!(Direction::Forward.reverse(), Direction::Backward);
        assert_eq!(Direction::Backward.reverse(), Direction::Forward);
    }

    #[test]
    fn test_outcome_current() {
        let switched = CycleOutcome::Switched {
            from: "/a/foo.c".to_string(),
            to: "/a/foo.h".to_string(),
        };
        assert_eq!(switched.current(), Some("/a/foo.h"));
        assert!(switched.switched());

        let unchanged = CycleOutcome::Unchanged {
            current: "/a/bar.c".to_string(),
        };
        assert_eq!(unchanged.current(), Some("/a/bar.c"));
        assert!(!unchanged.switched());

        assert_eq!(CycleOutcome::NoCurrentDocument.current(), None);
    }
}
