//! skipscan - Range-scan access strategies over a skip-list index.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Query planner (caller)                     │
//! │        estimate_cost ─▶ pick cheapest ─▶ execute / describe     │
//! └─────────────────────────────────────────────────────────────────┘
//!                                ↓
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 Access strategies (query/)                      │
//! │   AccessStrategy = Range | Equals | All   ─▶  RangeScan cursor   │
//! └─────────────────────────────────────────────────────────────────┘
//!                                ↓  IndexAccessor
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Skip-list index (index/)                     │
//! │   find / get_node ─▶ IndexNode snapshots, IndexMetadata         │
//! │   HEAD(MinValue) ⇄ ... level-0 ordered list ... ⇄ TAIL(MaxValue) │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (NodeId, Order, Error, config)
//! - [`index`] - Keys, nodes, the accessor seam and an in-memory skip list
//! - [`query`] - Access strategies and the range-scan cursor
//!
//! # Quick Start
//! ```
//! use skipscan::{IndexKey, IndexOptions, IndexRange, Order, SkipListIndex};
//!
//! let index = SkipListIndex::new("age", IndexOptions::default());
//! for (row, age) in [31, 18, 25, 18, 40].into_iter().enumerate() {
//!     index.insert(IndexKey::from(age), row as u64).unwrap();
//! }
//! let meta = index.metadata();
//!
//! let adults_under_30 = IndexRange::new("age", 18, 30, true, false, Order::Ascending);
//! let rows: Vec<u64> = adults_under_30.execute(&index, &meta).map(|n| n.data()).collect();
//! assert_eq!(rows, vec![1, 3, 2]);
//! ```

pub mod common;
pub mod index;
pub mod query;

pub use common::config::IndexOptions;
pub use common::{Error, NodeId, Order, Result};

pub use index::{
    AccessorStats, IndexAccessor, IndexKey, IndexMetadata, IndexNode, SkipListIndex,
    StatsSnapshot,
};
pub use query::{AccessStrategy, IndexAll, IndexEquals, IndexRange, RangeScan};
