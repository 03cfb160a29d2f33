//! Circular navigation through a sibling group.
//!
//! The group order is turned into a rotation (the order with its first
//! element repeated at the end), so the neighbour of the last member is
//! the first one.
//!
//! ```text
//! group     [a, b, c]
//! forward   [a, b, c, a]   next(c) = a
//! backward  [c, b, a, c]   next(a) = c
//! ```

use namesake_core::Direction;
use namesake_group::{Group, Member};

/// Group order for one direction with the first member repeated at the end.
#[derive(Debug, Clone)]
pub struct Rotation<'a, D> {
    order: Vec<&'a Member<D>>,
}

impl<'a, D> Rotation<'a, D> {
    /// Build the rotation of `group` for travel in `direction`.
    pub fn new(group: &'a Group<D>, direction: Direction) -> Self {
        let mut order: Vec<&'a Member<D>> = group.members().iter().collect();
        if direction == Direction::Backward {
            order.reverse();
        }
        if let Some(first) = order.first().copied() {
            order.push(first);
        }
        Self { order }
    }

    /// The element following the first occurrence of `identity`.
    ///
    /// For a singleton group this is the member itself. Returns `None` if
    /// `identity` does not occur.
    pub fn successor_of(&self, identity: &str) -> Option<&'a Member<D>> {
        let mut rest = self
            .order
            .iter()
            .copied()
            .skip_while(|member| member.identity() != identity);
        rest.next()?;
        rest.next()
    }

    /// Members in rotation order, first member repeated last.
    pub fn members(&self) -> &[&'a Member<D>] {
        &self.order
    }

    /// Rotation length: group size plus one, or zero for an empty group.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the rotation has no members (empty group).
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Neighbour of `reference` in `group` when travelling in `direction`.
///
/// A result equal to `reference` (singleton group) is a valid no-op.
pub fn next_document<'a, D>(
    reference: &str,
    group: &'a Group<D>,
    direction: Direction,
) -> Option<&'a Member<D>> {
    Rotation::new(group, direction).successor_of(reference)
}
