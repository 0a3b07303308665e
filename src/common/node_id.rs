//! Node identifier type.

use std::fmt;

/// Identifies a node in a skip-list index.
///
/// Nodes live in an arena and link to each other by id rather than by
/// reference, so a link can always be stored, copied and compared cheaply.
///
/// # Example
/// ```
/// use skipscan::NodeId;
///
/// let id = NodeId::new(42);
/// assert!(id.is_valid());
/// assert_eq!(id.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// "No link" sentinel.
    ///
    /// Stored in a link slot when there is no neighbor at that level
    /// (before the head, after the tail, or above the node's height).
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new NodeId.
    #[inline]
    pub fn new(id: u32) -> Self {
        NodeId(id)
    }

    /// Check if this id points at a node (is not [`NodeId::NONE`]).
    #[inline]
    pub fn is_valid(&self) -> bool {
        *self != Self::NONE
    }

    /// Arena slot index for this id.
    #[inline]
    pub(crate) fn slot(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::NONE {
            write!(f, "Node(NONE)")
        } else {
            write!(f, "Node({})", self.0)
        }
    }
}
