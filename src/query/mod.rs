//! Index access strategies.
//!
//! # Components
//! - [`AccessStrategy`] - The strategy family as one enum
//! - [`IndexRange`] - Bounded range scans (`<`, `<=`, `>`, `>=`, BETWEEN)
//! - [`IndexEquals`] / [`IndexAll`] - Point lookups and full scans
//! - [`RangeScan`] - The lazy cursor every strategy returns

mod range;
mod scan;
mod strategy;

pub use range::IndexRange;
pub use scan::RangeScan;
pub use strategy::{AccessStrategy, IndexAll, IndexEquals};
