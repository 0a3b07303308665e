//! Configuration constants and index options.

/// Maximum number of levels in a skip-list node.
///
/// With a promotion probability of 1/2, 32 levels comfortably cover 2^32
/// entries before the top level stops thinning the search.
pub const MAX_LEVEL: usize = 32;

/// Probability that a node is promoted to the next level.
pub const LEVEL_PROBABILITY: f64 = 0.5;

/// Fraction of the index a range predicate is assumed to read.
///
/// There are no histograms yet; this flat guess only has to rank strategies
/// against each other.
pub const RANGE_SELECTIVITY: f64 = 0.2;

/// Cost reported when nothing is known about the index.
pub const MAX_COST: u64 = u64::MAX;

/// Seed used by [`IndexOptions::default`].
pub const DEFAULT_SEED: u64 = 0x5eed_1dec;

/// Runtime options for a skip-list index.
///
/// # Example
/// ```
/// use skipscan::IndexOptions;
///
/// let opts = IndexOptions { unique: true, ..IndexOptions::default() };
/// assert_eq!(opts.max_level, skipscan::common::config::MAX_LEVEL);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOptions {
    /// Reject a second entry with an equal key.
    pub unique: bool,

    /// Cap on node height, `1..=MAX_LEVEL`.
    pub max_level: usize,

    /// Seed for level generation. Fixed seeds make layouts reproducible.
    pub seed: u64,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            unique: false,
            max_level: MAX_LEVEL,
            seed: DEFAULT_SEED,
        }
    }
}
