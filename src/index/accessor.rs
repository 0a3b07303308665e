//! The seam between access strategies and index storage.

use crate::common::{NodeId, Order};
use crate::index::{IndexKey, IndexMetadata, IndexNode};

/// Read access to a skip-list index.
///
/// Implementations hand out owned node snapshots, so a scan holds nothing
/// between two fetches. Callers rely on a single-writer discipline enforced
/// above this layer for the duration of a scan.
pub trait IndexAccessor {
    /// Positional search.
    ///
    /// Walks from the head (ascending) or tail (descending) and returns the
    /// first node found whose key equals `key`. On a non-unique index that
    /// node may sit anywhere inside its run of equal keys. When no key is
    /// equal and `sibling` is set, returns the first node past `key` in
    /// `order` instead, or `None` if that node is a sentinel.
    fn find(
        &self,
        metadata: &IndexMetadata,
        key: &IndexKey,
        sibling: bool,
        order: Order,
    ) -> Option<IndexNode>;

    /// Resolve a link. `NodeId::NONE` resolves to `None`.
    fn get_node(&self, id: NodeId) -> Option<IndexNode>;
}
