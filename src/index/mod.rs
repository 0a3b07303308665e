//! Skip-list index structures.
//!
//! The strategies in [`crate::query`] only see an index through these types:
//! - [`IndexAccessor`] - Positional search and link resolution
//! - [`IndexNode`] / [`IndexMetadata`] - Node and index snapshots
//! - [`IndexKey`] - Totally ordered keys with `MinValue` / `MaxValue` extremes
//!
//! [`SkipListIndex`] is an in-memory implementation of the accessor.

mod accessor;
mod key;
mod node;
mod skiplist;
mod stats;

pub use accessor::IndexAccessor;
pub use key::IndexKey;
pub use node::{IndexMetadata, IndexNode};
pub use skiplist::SkipListIndex;
pub use stats::{AccessorStats, StatsSnapshot};
