//! In-memory skip-list index.
//!
//! The [`SkipListIndex`] provides:
//! - An arena of nodes addressed by [`NodeId`], with head/tail sentinels
//! - Insert and delete with randomly drawn node heights
//! - Positional search for [`IndexAccessor`]

use std::cmp::Ordering;
use std::sync::atomic::Ordering as AtomicOrdering;

use parking_lot::RwLock;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::common::config::{IndexOptions, LEVEL_PROBABILITY, MAX_LEVEL};
use crate::common::{Error, NodeId, Order, Result};
use crate::index::{AccessorStats, IndexAccessor, IndexKey, IndexMetadata, IndexNode};

/// Slot of the head sentinel.
const HEAD: NodeId = NodeId(0);

/// Slot of the tail sentinel.
const TAIL: NodeId = NodeId(1);

/// Node storage plus everything mutated on insert/delete.
struct Arena {
    /// `None` marks a freed slot.
    slots: Vec<Option<IndexNode>>,

    /// Freed slots, reused LIFO.
    free_list: Vec<NodeId>,

    /// Number of data nodes.
    len: u64,

    /// Source of node heights.
    rng: StdRng,
}

impl Arena {
    #[inline]
    fn get(&self, id: NodeId) -> Option<&IndexNode> {
        self.slots.get(id.slot()).and_then(Option::as_ref)
    }

    #[inline]
    fn get_mut(&mut self, id: NodeId) -> Option<&mut IndexNode> {
        self.slots.get_mut(id.slot()).and_then(Option::as_mut)
    }

    fn set_link(&mut self, id: NodeId, level: usize, order: Order, to: NodeId) {
        if let Some(node) = self.get_mut(id) {
            node.set_link(level, order, to);
        }
    }

    fn allocate(&mut self) -> NodeId {
        match self.free_list.pop() {
            Some(id) => id,
            None => {
                self.slots.push(None);
                NodeId::new((self.slots.len() - 1) as u32)
            }
        }
    }

    fn random_level(&mut self, max_level: usize) -> usize {
        let mut level = 1;
        while level < max_level && self.rng.gen_bool(LEVEL_PROBABILITY) {
            level += 1;
        }
        level
    }
}

/// A non-persistent skip-list index over [`IndexKey`]s.
///
/// # Architecture
/// ```text
///  level 2   HEAD ──────────────▶ [5] ─────────────────▶ TAIL
///  level 1   HEAD ──────▶ [3] ──▶ [5] ──────────▶ [9] ──▶ TAIL
///  level 0   HEAD ▶ [1] ▶ [3] ▶ [3] ▶ [5] ▶ [7] ▶ [9] ▶ TAIL
///            (MinValue)                             (MaxValue)
/// ```
/// Every level is doubly linked. Equal keys sit next to each other on
/// level 0, in insertion order.
///
/// # Thread Safety
/// The arena sits behind a `RwLock`: scans take short read locks per fetch
/// and get owned snapshots back; insert/delete take the write lock.
///
/// # Usage
/// ```
/// use skipscan::{IndexAccessor, IndexKey, IndexOptions, SkipListIndex};
///
/// let index = SkipListIndex::new("age", IndexOptions::default());
/// let id = index.insert(IndexKey::from(30), 1).unwrap();
///
/// let node = index.get_node(id).unwrap();
/// assert_eq!(node.key(), &IndexKey::from(30));
/// assert_eq!(index.metadata().key_count, 1);
/// ```
pub struct SkipListIndex {
    /// Index name, used in errors and logs.
    name: String,

    options: IndexOptions,

    arena: RwLock<Arena>,

    stats: AccessorStats,
}

impl SkipListIndex {
    /// Create an empty index: just the head and tail, linked on every level.
    ///
    /// `options.max_level` is clamped to `1..=MAX_LEVEL`.
    pub fn new(name: impl Into<String>, options: IndexOptions) -> Self {
        let options = IndexOptions {
            max_level: options.max_level.clamp(1, MAX_LEVEL),
            ..options
        };
        let levels = options.max_level;

        let mut head = IndexNode::new(HEAD, IndexKey::MinValue, 0, levels);
        let mut tail = IndexNode::new(TAIL, IndexKey::MaxValue, 0, levels);
        for level in 0..levels {
            head.set_link(level, Order::Ascending, TAIL);
            tail.set_link(level, Order::Descending, HEAD);
        }

        Self {
            name: name.into(),
            options,
            arena: RwLock::new(Arena {
                slots: vec![Some(head), Some(tail)],
                free_list: Vec::new(),
                len: 0,
                rng: StdRng::seed_from_u64(options.seed),
            }),
            stats: AccessorStats::new(),
        }
    }

    // ========================================================================
    // Public API: Maintenance
    // ========================================================================

    /// Add an entry.
    ///
    /// An entry whose key is already present goes after the existing run of
    /// equal keys.
    ///
    /// # Errors
    /// - `Error::ReservedKey` for `MinValue` / `MaxValue`
    /// - `Error::DuplicateKey` if the index is unique and the key exists
    pub fn insert(&self, key: IndexKey, data: u64) -> Result<NodeId> {
        if key.is_extreme() {
            return Err(Error::ReservedKey(key.to_string()));
        }

        let max_level = self.options.max_level;
        let mut arena = self.arena.write();

        // Rightmost node with key <= `key` on each level
        let mut update = vec![HEAD; max_level];
        let mut cur = HEAD;
        for level in (0..max_level).rev() {
            loop {
                let next = match arena.get(cur) {
                    Some(node) => node.next_prev(level, Order::Ascending),
                    None => break,
                };
                match arena.get(next) {
                    // The tail's MaxValue stops every walk
                    Some(node) if node.key() <= &key => cur = next,
                    _ => break,
                }
            }
            update[level] = cur;
        }

        if self.options.unique && cur != HEAD {
            if let Some(node) = arena.get(cur) {
                if node.key() == &key {
                    return Err(Error::DuplicateKey {
                        index: self.name.clone(),
                        key: key.to_string(),
                    });
                }
            }
        }

        let levels = arena.random_level(max_level);
        let id = arena.allocate();
        let mut node = IndexNode::new(id, key, data, levels);

        for (level, &prev) in update.iter().enumerate().take(levels) {
            let next = arena
                .get(prev)
                .map_or(TAIL, |p| p.next_prev(level, Order::Ascending));
            node.set_link(level, Order::Ascending, next);
            node.set_link(level, Order::Descending, prev);
            arena.set_link(prev, level, Order::Ascending, id);
            arena.set_link(next, level, Order::Descending, id);
        }

        debug!(index = %self.name, node = %id, levels, key = %node.key(), "insert");
        arena.slots[id.slot()] = Some(node);
        arena.len += 1;

        Ok(id)
    }

    /// Remove an entry and unlink it from every level.
    ///
    /// # Errors
    /// - `Error::SentinelNode` for the head or tail
    /// - `Error::NodeNotFound` if `id` is not a live node
    pub fn delete(&self, id: NodeId) -> Result<()> {
        if id == HEAD || id == TAIL {
            return Err(Error::SentinelNode(id));
        }

        let mut arena = self.arena.write();
        let node = arena
            .slots
            .get_mut(id.slot())
            .and_then(Option::take)
            .ok_or(Error::NodeNotFound(id))?;

        for level in 0..node.levels() {
            let prev = node.next_prev(level, Order::Descending);
            let next = node.next_prev(level, Order::Ascending);
            arena.set_link(prev, level, Order::Ascending, next);
            arena.set_link(next, level, Order::Descending, prev);
        }

        arena.free_list.push(id);
        arena.len -= 1;
        debug!(index = %self.name, node = %id, key = %node.key(), "delete");

        Ok(())
    }

    // ========================================================================
    // Public API: Stats and info
    // ========================================================================

    /// Snapshot of the index's bookkeeping.
    pub fn metadata(&self) -> IndexMetadata {
        IndexMetadata {
            key_count: self.arena.read().len,
            head: HEAD,
            tail: TAIL,
            unique: self.options.unique,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &IndexOptions {
        &self.options
    }

    /// Number of data nodes (sentinels excluded).
    pub fn len(&self) -> usize {
        self.arena.read().len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> &AccessorStats {
        &self.stats
    }
}

impl IndexAccessor for SkipListIndex {
    fn find(
        &self,
        metadata: &IndexMetadata,
        key: &IndexKey,
        sibling: bool,
        order: Order,
    ) -> Option<IndexNode> {
        self.stats.finds.fetch_add(1, AtomicOrdering::Relaxed);
        let arena = self.arena.read();

        let mut cur = match order {
            Order::Ascending => metadata.head,
            Order::Descending => metadata.tail,
        };

        for level in (0..self.options.max_level).rev() {
            loop {
                let next_id = arena.get(cur)?.next_prev(level, order);
                let next = match arena.get(next_id) {
                    Some(node) => node,
                    None => break,
                };

                match order.apply(next.key().cmp(key)) {
                    Ordering::Less => cur = next_id,
                    Ordering::Equal => {
                        trace!(index = %self.name, node = %next_id, lvl = level, "find: equal");
                        return Some(next.clone());
                    }
                    Ordering::Greater => {
                        if level == 0 && sibling && !next.is_sentinel(metadata) {
                            trace!(index = %self.name, node = %next_id, "find: sibling");
                            return Some(next.clone());
                        }
                        break;
                    }
                }
            }
        }

        None
    }

    fn get_node(&self, id: NodeId) -> Option<IndexNode> {
        if !id.is_valid() {
            return None;
        }
        self.stats.node_fetches.fetch_add(1, AtomicOrdering::Relaxed);

        let node = self.arena.read().get(id).cloned();
        if node.is_none() {
            self.stats.missing_nodes.fetch_add(1, AtomicOrdering::Relaxed);
        }
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level0_keys(index: &SkipListIndex) -> Vec<IndexKey> {
        let meta = index.metadata();
        let mut keys = vec![];
        let mut node = index.get_node(meta.head).unwrap();
        loop {
            node = index
                .get_node(node.next_prev(0, Order::Ascending))
                .unwrap();
            if node.is_sentinel(&meta) {
                break;
            }
            keys.push(node.key().clone());
        }
        keys
    }

    fn int_index(keys: &[i64]) -> SkipListIndex {
        let index = SkipListIndex::new("n", IndexOptions::default());
        for (i, &k) in keys.iter().enumerate() {
            index.insert(IndexKey::from(k), i as u64).unwrap();
        }
        index
    }

    #[test]
    fn test_empty_index_links_head_to_tail() {
        let index = SkipListIndex::new("n", IndexOptions::default());
        let meta = index.metadata();

        let head = index.get_node(meta.head).unwrap();
        let tail = index.get_node(meta.tail).unwrap();

        assert_eq!(head.next_prev(0, Order::Ascending), meta.tail);
        assert_eq!(tail.next_prev(0, Order::Descending), meta.head);
        assert_eq!(head.next_prev(0, Order::Descending), NodeId::NONE);
        assert!(index.is_empty());
        assert_eq!(meta.key_count, 0);
    }

    #[test]
    fn test_insert_keeps_level0_sorted() {
        let index = int_index(&[5, 1, 9, 3, 7, 3]);
        let expected: Vec<IndexKey> = [1, 3, 3, 5, 7, 9].iter().map(|&k| IndexKey::from(k)).collect();

        assert_eq!(level0_keys(&index), expected);
        assert_eq!(index.len(), 6);
    }

    #[test]
    fn test_duplicates_keep_insertion_order() {
        let index = SkipListIndex::new("n", IndexOptions::default());
        let first = index.insert(IndexKey::from(3), 100).unwrap();
        let second = index.insert(IndexKey::from(3), 200).unwrap();

        let node = index.get_node(first).unwrap();
        assert_eq!(node.next_prev(0, Order::Ascending), second);
    }

    #[test]
    fn test_every_level_is_doubly_linked() {
        let index = int_index(&(0..200).collect::<Vec<_>>());
        let meta = index.metadata();

        for level in 0..MAX_LEVEL {
            let mut cur = index.get_node(meta.head).unwrap();
            while cur.id() != meta.tail {
                let next = index
                    .get_node(cur.next_prev(level, Order::Ascending))
                    .unwrap();
                assert_eq!(next.next_prev(level, Order::Descending), cur.id());
                assert!(cur.key() <= next.key());
                cur = next;
            }
        }
    }

    #[test]
    fn test_reserved_keys_rejected() {
        let index = SkipListIndex::new("n", IndexOptions::default());

        assert!(matches!(
            index.insert(IndexKey::MinValue, 0),
            Err(Error::ReservedKey(_))
        ));
        assert!(matches!(
            index.insert(IndexKey::MaxValue, 0),
            Err(Error::ReservedKey(_))
        ));
    }

    #[test]
    fn test_unique_rejects_duplicates() {
        let opts = IndexOptions {
            unique: true,
            ..IndexOptions::default()
        };
        let index = SkipListIndex::new("email", opts);
        index.insert(IndexKey::from("a@x"), 1).unwrap();

        let err = index.insert(IndexKey::from("a@x"), 2).unwrap_err();
        assert_eq!(
            err,
            Error::DuplicateKey {
                index: "email".to_string(),
                key: "\"a@x\"".to_string()
            }
        );
        assert_eq!(index.len(), 1);
        assert!(index.metadata().unique);
    }

    #[test]
    fn test_delete_unlinks_and_recycles() {
        let index = SkipListIndex::new("n", IndexOptions::default());
        index.insert(IndexKey::from(1), 0).unwrap();
        let two = index.insert(IndexKey::from(2), 0).unwrap();
        index.insert(IndexKey::from(3), 0).unwrap();

        index.delete(two).unwrap();
        assert_eq!(level0_keys(&index), vec![IndexKey::from(1), IndexKey::from(3)]);
        assert!(index.get_node(two).is_none());

        // Freed slot is handed out again
        let reused = index.insert(IndexKey::from(4), 0).unwrap();
        assert_eq!(reused, two);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_delete_errors() {
        let index = SkipListIndex::new("n", IndexOptions::default());
        let meta = index.metadata();

        assert_eq!(index.delete(meta.head), Err(Error::SentinelNode(meta.head)));
        assert_eq!(index.delete(meta.tail), Err(Error::SentinelNode(meta.tail)));
        assert_eq!(
            index.delete(NodeId::new(99)),
            Err(Error::NodeNotFound(NodeId::new(99)))
        );
    }

    #[test]
    fn test_find_exact_and_sibling() {
        let index = int_index(&[10, 20, 30]);
        let meta = index.metadata();

        let hit = index
            .find(&meta, &IndexKey::from(20), false, Order::Ascending)
            .unwrap();
        assert_eq!(hit.key(), &IndexKey::from(20));

        assert!(index
            .find(&meta, &IndexKey::from(25), false, Order::Ascending)
            .is_none());

        let asc = index
            .find(&meta, &IndexKey::from(25), true, Order::Ascending)
            .unwrap();
        assert_eq!(asc.key(), &IndexKey::from(30));

        let desc = index
            .find(&meta, &IndexKey::from(25), true, Order::Descending)
            .unwrap();
        assert_eq!(desc.key(), &IndexKey::from(20));
    }

    #[test]
    fn test_find_sibling_never_returns_sentinel() {
        let index = int_index(&[10, 20]);
        let meta = index.metadata();

        assert!(index
            .find(&meta, &IndexKey::from(99), true, Order::Ascending)
            .is_none());
        assert!(index
            .find(&meta, &IndexKey::from(1), true, Order::Descending)
            .is_none());
    }

    #[test]
    fn test_max_level_is_clamped() {
        let opts = IndexOptions {
            max_level: 0,
            ..IndexOptions::default()
        };
        let index = SkipListIndex::new("n", opts);
        assert_eq!(index.options().max_level, 1);

        index.insert(IndexKey::from(1), 0).unwrap();
        let meta = index.metadata();
        let node = index
            .find(&meta, &IndexKey::from(1), false, Order::Ascending)
            .unwrap();
        assert_eq!(node.levels(), 1);
    }

    #[test]
    fn test_stats_count_fetches() {
        let index = int_index(&[1, 2]);
        index.stats().reset();

        let meta = index.metadata();
        index.get_node(meta.head);
        index.get_node(NodeId::new(77));
        index.get_node(NodeId::NONE);
        index.find(&meta, &IndexKey::from(2), false, Order::Ascending);

        let snapshot = index.stats().snapshot();
        assert_eq!(snapshot.node_fetches, 2);
        assert_eq!(snapshot.missing_nodes, 1);
        assert_eq!(snapshot.finds, 1);
    }
}
