//! The closed family of index access strategies.
//!
//! A planner holds candidates as [`AccessStrategy`] values, ranks them with
//! `estimate_cost`, runs the winner with `execute` and prints it with
//! `describe`.

use std::fmt;

use crate::common::config::MAX_COST;
use crate::common::Order;
use crate::index::{IndexAccessor, IndexKey, IndexMetadata};
use crate::query::{IndexRange, RangeScan};

/// Every entry whose key equals one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEquals {
    range: IndexRange,
}

impl IndexEquals {
    pub fn new(name: impl Into<String>, value: impl Into<IndexKey>, order: Order) -> Self {
        let value = value.into();
        Self {
            range: IndexRange::new(name, value.clone(), value, true, true, order),
        }
    }

    pub fn value(&self) -> &IndexKey {
        self.range.start().0
    }

    /// One entry on a unique index; otherwise priced like any range.
    pub fn estimate_cost(&self, metadata: &IndexMetadata) -> u64 {
        if metadata.unique {
            1
        } else {
            self.range.estimate_cost(metadata)
        }
    }

    pub fn execute<'a, A: IndexAccessor + ?Sized>(
        &self,
        accessor: &'a A,
        metadata: &'a IndexMetadata,
    ) -> RangeScan<'a, A> {
        self.range.execute(accessor, metadata)
    }

    pub fn describe(&self) -> String {
        format!(
            "INDEX SEEK({} = {}) {}",
            self.range.name(),
            self.value(),
            self.range.order()
        )
    }
}

/// Every entry of the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexAll {
    range: IndexRange,
}

impl IndexAll {
    pub fn new(name: impl Into<String>, order: Order) -> Self {
        Self {
            range: IndexRange::new(
                name,
                IndexKey::MinValue,
                IndexKey::MaxValue,
                false,
                false,
                order,
            ),
        }
    }

    /// Reads the whole index.
    pub fn estimate_cost(&self, metadata: &IndexMetadata) -> u64 {
        match metadata.key_count {
            0 => MAX_COST,
            n => n,
        }
    }

    pub fn execute<'a, A: IndexAccessor + ?Sized>(
        &self,
        accessor: &'a A,
        metadata: &'a IndexMetadata,
    ) -> RangeScan<'a, A> {
        self.range.execute(accessor, metadata)
    }

    pub fn describe(&self) -> String {
        format!("FULL INDEX SCAN({}) {}", self.range.name(), self.range.order())
    }
}

/// An index access strategy chosen by the planner.
///
/// # Example
/// ```
/// use skipscan::{AccessStrategy, IndexKey, IndexOptions, Order, SkipListIndex};
///
/// let index = SkipListIndex::new("age", IndexOptions::default());
/// for age in 0..100 {
///     index.insert(IndexKey::from(age), age as u64).unwrap();
/// }
/// let meta = index.metadata();
///
/// let candidates = [
///     AccessStrategy::all("age", Order::Ascending),
///     AccessStrategy::between("age", 18, 30, Order::Ascending),
/// ];
/// let best = candidates
///     .iter()
///     .min_by_key(|s| s.estimate_cost(&meta))
///     .unwrap();
///
/// assert_eq!(best.describe(), "INDEX RANGE SCAN(age BETWEEN 18 AND 30) ASC");
/// assert_eq!(best.execute(&index, &meta).count(), 13);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessStrategy {
    Range(IndexRange),
    Equals(IndexEquals),
    All(IndexAll),
}

impl AccessStrategy {
    pub fn range(
        name: impl Into<String>,
        start: impl Into<IndexKey>,
        end: impl Into<IndexKey>,
        start_inclusive: bool,
        end_inclusive: bool,
        order: Order,
    ) -> Self {
        AccessStrategy::Range(IndexRange::new(
            name,
            start,
            end,
            start_inclusive,
            end_inclusive,
            order,
        ))
    }

    pub fn between(
        name: impl Into<String>,
        low: impl Into<IndexKey>,
        high: impl Into<IndexKey>,
        order: Order,
    ) -> Self {
        AccessStrategy::Range(IndexRange::between(name, low, high, order))
    }

    pub fn equals(name: impl Into<String>, value: impl Into<IndexKey>, order: Order) -> Self {
        AccessStrategy::Equals(IndexEquals::new(name, value, order))
    }

    pub fn all(name: impl Into<String>, order: Order) -> Self {
        AccessStrategy::All(IndexAll::new(name, order))
    }

    fn inner(&self) -> &IndexRange {
        match self {
            AccessStrategy::Range(range) => range,
            AccessStrategy::Equals(equals) => &equals.range,
            AccessStrategy::All(all) => &all.range,
        }
    }

    /// Name of the index this strategy reads.
    pub fn name(&self) -> &str {
        self.inner().name()
    }

    pub fn order(&self) -> Order {
        self.inner().order()
    }

    pub fn estimate_cost(&self, metadata: &IndexMetadata) -> u64 {
        match self {
            AccessStrategy::Range(range) => range.estimate_cost(metadata),
            AccessStrategy::Equals(equals) => equals.estimate_cost(metadata),
            AccessStrategy::All(all) => all.estimate_cost(metadata),
        }
    }

    pub fn execute<'a, A: IndexAccessor + ?Sized>(
        &self,
        accessor: &'a A,
        metadata: &'a IndexMetadata,
    ) -> RangeScan<'a, A> {
        match self {
            AccessStrategy::Range(range) => range.execute(accessor, metadata),
            AccessStrategy::Equals(equals) => equals.execute(accessor, metadata),
            AccessStrategy::All(all) => all.execute(accessor, metadata),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            AccessStrategy::Range(range) => range.describe(),
            AccessStrategy::Equals(equals) => equals.describe(),
            AccessStrategy::All(all) => all.describe(),
        }
    }
}

impl From<IndexRange> for AccessStrategy {
    fn from(range: IndexRange) -> Self {
        AccessStrategy::Range(range)
    }
}

impl From<IndexEquals> for AccessStrategy {
    fn from(equals: IndexEquals) -> Self {
        AccessStrategy::Equals(equals)
    }
}

impl From<IndexAll> for AccessStrategy {
    fn from(all: IndexAll) -> Self {
        AccessStrategy::All(all)
    }
}

impl fmt::Display for AccessStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
