//! Error types for skipscan.
//!
//! Scanning an index never fails: an empty result is an empty iterator.
//! Errors only come out of index maintenance on the reference skip list.

use thiserror::Error;

use crate::common::NodeId;

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in skipscan.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// `MinValue` and `MaxValue` belong to the head and tail sentinels.
    #[error("key {0} is reserved for index sentinels")]
    ReservedKey(String),

    /// A unique index already holds an entry with this key.
    #[error("index '{index}' already contains key {key}")]
    DuplicateKey { index: String, key: String },

    /// The id does not refer to a live node.
    #[error("{0} not found")]
    NodeNotFound(NodeId),

    /// Head and tail cannot be removed.
    #[error("{0} is a sentinel node")]
    SentinelNode(NodeId),
}
