//! Index nodes and index metadata.

use crate::common::{NodeId, Order};
use crate::index::IndexKey;

/// Snapshot of one skip-list node.
///
/// A node of height `h` has `h` forward (`next`) and `h` backward (`prev`)
/// links. Level 0 is linked through every node in ascending key order, from
/// the head sentinel to the tail sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexNode {
    id: NodeId,
    key: IndexKey,
    data: u64,
    next: Vec<NodeId>,
    prev: Vec<NodeId>,
}

impl IndexNode {
    /// Create an unlinked node of the given height.
    pub(crate) fn new(id: NodeId, key: IndexKey, data: u64, levels: usize) -> Self {
        Self {
            id,
            key,
            data,
            next: vec![NodeId::NONE; levels],
            prev: vec![NodeId::NONE; levels],
        }
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn key(&self) -> &IndexKey {
        &self.key
    }

    /// Locator of the record this entry points at.
    #[inline]
    pub fn data(&self) -> u64 {
        self.data
    }

    /// Height of this node.
    #[inline]
    pub fn levels(&self) -> usize {
        self.next.len()
    }

    /// Neighbor at `level` when walking in `order`.
    ///
    /// Returns [`NodeId::NONE`] past either end of the list or above the
    /// node's height.
    #[inline]
    pub fn next_prev(&self, level: usize, order: Order) -> NodeId {
        let links = match order {
            Order::Ascending => &self.next,
            Order::Descending => &self.prev,
        };
        links.get(level).copied().unwrap_or(NodeId::NONE)
    }

    /// True for the head and tail nodes of the index.
    #[inline]
    pub fn is_sentinel(&self, metadata: &IndexMetadata) -> bool {
        self.id == metadata.head || self.id == metadata.tail
    }

    pub(crate) fn set_link(&mut self, level: usize, order: Order, id: NodeId) {
        let links = match order {
            Order::Ascending => &mut self.next,
            Order::Descending => &mut self.prev,
        };
        links[level] = id;
    }
}

/// Snapshot of an index's bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexMetadata {
    /// Approximate number of entries. Zero means "no statistics".
    pub key_count: u64,
    pub head: NodeId,
    pub tail: NodeId,
    pub unique: bool,
}
