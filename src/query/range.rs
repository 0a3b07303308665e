//! Range access strategy.
//!
//! [`IndexRange`] covers `<`, `<=`, `>`, `>=`, BETWEEN and full scans: open
//! ends are expressed with the `MinValue` / `MaxValue` extremes.

use std::fmt;

use tracing::debug;

use crate::common::config::{MAX_COST, RANGE_SELECTIVITY};
use crate::common::Order;
use crate::index::{IndexAccessor, IndexKey, IndexMetadata};
use crate::query::scan::{RangeScan, ScanBound};

/// Scan of every entry whose key lies between two bounds.
///
/// Bounds are stored low-to-high regardless of `order`; callers guarantee
/// `start <= end`. The strategy is immutable and can run any number of scans,
/// concurrently, each with its own cursor.
///
/// # Example
/// ```
/// use skipscan::{IndexKey, IndexOptions, IndexRange, Order, SkipListIndex};
///
/// let index = SkipListIndex::new("n", IndexOptions::default());
/// for k in [1, 3, 3, 3, 5, 7] {
///     index.insert(IndexKey::from(k), 0).unwrap();
/// }
/// let meta = index.metadata();
///
/// let range = IndexRange::new("n", 3, 7, true, false, Order::Descending);
/// let keys: Vec<_> = range.execute(&index, &meta).map(|n| n.key().clone()).collect();
/// assert_eq!(keys, [5, 3, 3, 3].map(IndexKey::from));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRange {
    name: String,
    start: IndexKey,
    end: IndexKey,
    start_inclusive: bool,
    end_inclusive: bool,
    order: Order,
}

impl IndexRange {
    pub fn new(
        name: impl Into<String>,
        start: impl Into<IndexKey>,
        end: impl Into<IndexKey>,
        start_inclusive: bool,
        end_inclusive: bool,
        order: Order,
    ) -> Self {
        Self {
            name: name.into(),
            start: start.into(),
            end: end.into(),
            start_inclusive,
            end_inclusive,
            order,
        }
    }

    /// `key < value`
    pub fn less_than(name: impl Into<String>, value: impl Into<IndexKey>, order: Order) -> Self {
        Self::new(name, IndexKey::MinValue, value, false, false, order)
    }

    /// `key <= value`
    pub fn less_than_or_equal(
        name: impl Into<String>,
        value: impl Into<IndexKey>,
        order: Order,
    ) -> Self {
        Self::new(name, IndexKey::MinValue, value, false, true, order)
    }

    /// `key > value`
    pub fn greater_than(name: impl Into<String>, value: impl Into<IndexKey>, order: Order) -> Self {
        Self::new(name, value, IndexKey::MaxValue, false, false, order)
    }

    /// `key >= value`
    pub fn greater_than_or_equal(
        name: impl Into<String>,
        value: impl Into<IndexKey>,
        order: Order,
    ) -> Self {
        Self::new(name, value, IndexKey::MaxValue, true, false, order)
    }

    /// `low <= key <= high`
    pub fn between(
        name: impl Into<String>,
        low: impl Into<IndexKey>,
        high: impl Into<IndexKey>,
        order: Order,
    ) -> Self {
        Self::new(name, low, high, true, true, order)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn start(&self) -> (&IndexKey, bool) {
        (&self.start, self.start_inclusive)
    }

    pub fn end(&self) -> (&IndexKey, bool) {
        (&self.end, self.end_inclusive)
    }

    /// Relative cost for the planner: a fifth of the index, or [`MAX_COST`]
    /// when the index reports no entries.
    pub fn estimate_cost(&self, metadata: &IndexMetadata) -> u64 {
        if metadata.key_count == 0 {
            return MAX_COST;
        }
        (metadata.key_count as f64 * RANGE_SELECTIVITY) as u64
    }

    /// Walk the index and yield matching nodes in `order`.
    pub fn execute<'a, A: IndexAccessor + ?Sized>(
        &self,
        accessor: &'a A,
        metadata: &'a IndexMetadata,
    ) -> RangeScan<'a, A> {
        let low = ScanBound {
            key: self.start.clone(),
            inclusive: self.start_inclusive,
        };
        let high = ScanBound {
            key: self.end.clone(),
            inclusive: self.end_inclusive,
        };

        // The list is linked low-to-high; a descending walk starts at the top
        let (start, end) = match self.order {
            Order::Ascending => (low, high),
            Order::Descending => (high, low),
        };

        debug!(plan = %self, "range scan: execute");
        RangeScan::new(accessor, metadata, start, end, self.order)
    }

    /// Plan text, e.g. `INDEX RANGE SCAN(age >= 18) ASC`.
    pub fn describe(&self) -> String {
        let predicate = match (self.start.is_min_value(), self.end.is_max_value()) {
            (true, true) => format!("{}: ALL", self.name),
            (true, false) => {
                let op = if self.end_inclusive { "<=" } else { "<" };
                format!("{} {} {}", self.name, op, self.end)
            }
            (false, true) => {
                let op = if self.start_inclusive { ">=" } else { ">" };
                format!("{} {} {}", self.name, op, self.start)
            }
            (false, false) if self.start_inclusive && self.end_inclusive => {
                format!("{} BETWEEN {} AND {}", self.name, self.start, self.end)
            }
            (false, false) => {
                let low = if self.start_inclusive { ">=" } else { ">" };
                let high = if self.end_inclusive { "<=" } else { "<" };
                format!(
                    "{name} {low} {} AND {name} {high} {}",
                    self.start,
                    self.end,
                    name = self.name
                )
            }
        };
        format!("INDEX RANGE SCAN({}) {}", predicate, self.order)
    }
}

impl fmt::Display for IndexRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
