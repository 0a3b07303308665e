//! Scan direction.

use std::cmp::Ordering;
use std::fmt;

/// Direction of an index walk.
///
/// The skip list is always linked in ascending key order; `Order` picks which
/// of a node's two link arrays counts as "forward" for a given walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Order {
    /// Smallest key first (`+1`).
    #[default]
    Ascending,
    /// Largest key first (`-1`).
    Descending,
}

impl Order {
    /// `+1` for ascending, `-1` for descending.
    #[inline]
    pub fn sign(&self) -> i32 {
        match self {
            Order::Ascending => 1,
            Order::Descending => -1,
        }
    }

    /// The opposite direction.
    #[inline]
    pub fn reverse(&self) -> Order {
        match self {
            Order::Ascending => Order::Descending,
            Order::Descending => Order::Ascending,
        }
    }

    /// Re-orient a key comparison to this direction.
    ///
    /// `Less` then means "comes first when walking in this order".
    #[inline]
    pub fn apply(&self, ord: Ordering) -> Ordering {
        match self {
            Order::Ascending => ord,
            Order::Descending => ord.reverse(),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Ascending => write!(f, "ASC"),
            Order::Descending => write!(f, "DESC"),
        }
    }
}
