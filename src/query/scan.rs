//! Lazy cursor over a bounded run of an index.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::common::Order;
use crate::index::{IndexAccessor, IndexKey, IndexMetadata, IndexNode};

/// One end of a scan, already oriented to the walk direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScanBound {
    pub key: IndexKey,
    pub inclusive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Entry point not located yet.
    Seek,
    /// Walking the run of keys equal to the start bound.
    StartRun,
    /// Walking towards the end bound.
    Range,
    Done,
}

/// Iterator returned by the access strategies' `execute`.
///
/// Nothing happens until the first `next()`. Each call then fetches at most
/// one node (locating the entry point may take a few more), and no accessor
/// state is held between calls: dropping the iterator is all the cleanup a
/// cancelled scan needs.
pub struct RangeScan<'a, A: IndexAccessor + ?Sized> {
    accessor: &'a A,
    metadata: &'a IndexMetadata,
    start: ScanBound,
    end: ScanBound,
    order: Order,
    phase: Phase,
    cursor: Option<IndexNode>,
    emitted: usize,
}

impl<'a, A: IndexAccessor + ?Sized> RangeScan<'a, A> {
    /// `start` and `end` are in walk order: for a descending scan `start`
    /// holds the logical upper bound.
    pub(crate) fn new(
        accessor: &'a A,
        metadata: &'a IndexMetadata,
        start: ScanBound,
        end: ScanBound,
        order: Order,
    ) -> Self {
        Self {
            accessor,
            metadata,
            start,
            end,
            order,
            phase: Phase::Seek,
            cursor: None,
            emitted: 0,
        }
    }

    pub fn order(&self) -> Order {
        self.order
    }

    /// Locate the first node of the walk.
    ///
    /// Positional search may land anywhere inside a run of keys equal to the
    /// start bound, so back up along level 0 until the run's first node. The
    /// rewind is a loop: runs can be arbitrarily long.
    fn seek(&self) -> Option<IndexNode> {
        let entry = if self.start.key.is_min_value() {
            self.accessor.get_node(self.metadata.head)
        } else if self.start.key.is_max_value() {
            self.accessor.get_node(self.metadata.tail)
        } else {
            self.accessor
                .find(self.metadata, &self.start.key, true, self.order)
        };

        let mut node = entry?;
        let backward = self.order.reverse();
        while let Some(prev) = self.accessor.get_node(node.next_prev(0, backward)) {
            if prev.is_sentinel(self.metadata) || prev.key() != &self.start.key {
                break;
            }
            node = prev;
        }

        debug!(entry = %node.id(), key = %node.key(), order = %self.order, "range scan: entry");
        Some(node)
    }

    #[inline]
    fn advance(&self, node: &IndexNode) -> Option<IndexNode> {
        self.accessor.get_node(node.next_prev(0, self.order))
    }

    /// Whether `node` still satisfies the end bound.
    ///
    /// Sentinels never do, so reaching the head or tail ends the scan.
    fn before_end(&self, node: &IndexNode) -> bool {
        if node.is_sentinel(self.metadata) {
            return false;
        }
        match self.order.apply(node.key().cmp(&self.end.key)) {
            Ordering::Less => true,
            Ordering::Equal => self.end.inclusive,
            Ordering::Greater => false,
        }
    }

    fn finish(&mut self) -> Option<IndexNode> {
        if self.phase != Phase::Done {
            debug!(emitted = self.emitted, "range scan: done");
        }
        self.phase = Phase::Done;
        self.cursor = None;
        None
    }

    fn emit(&mut self, node: IndexNode) -> Option<IndexNode> {
        self.emitted += 1;
        trace!(node = %node.id(), key = %node.key(), "range scan: emit");
        Some(node)
    }
}

impl<A: IndexAccessor + ?Sized> Iterator for RangeScan<'_, A> {
    type Item = IndexNode;

    fn next(&mut self) -> Option<IndexNode> {
        loop {
            match self.phase {
                Phase::Seek => {
                    self.cursor = self.seek();
                    self.phase = Phase::StartRun;
                }
                Phase::StartRun => {
                    let node = match self.cursor.take() {
                        Some(node) => node,
                        None => return self.finish(),
                    };
                    if node.key() != &self.start.key {
                        self.cursor = Some(node);
                        self.phase = Phase::Range;
                        continue;
                    }

                    // before_end also rejects sentinels and the empty `[k, k)`
                    self.cursor = self.advance(&node);
                    if self.start.inclusive && self.before_end(&node) {
                        return self.emit(node);
                    }
                }
                Phase::Range => {
                    let node = match self.cursor.take() {
                        Some(node) => node,
                        None => return self.finish(),
                    };
                    if !self.before_end(&node) {
                        return self.finish();
                    }

                    self.cursor = self.advance(&node);
                    return self.emit(node);
                }
                Phase::Done => return None,
            }
        }
    }
}

impl<A: IndexAccessor + ?Sized> std::iter::FusedIterator for RangeScan<'_, A> {}
