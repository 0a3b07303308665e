//! Common types and utilities shared across skipscan.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants and [`IndexOptions`](config::IndexOptions)
//! - Error types
//! - Identifiers ([`NodeId`]) and scan direction ([`Order`])

pub mod config;
pub mod error;
mod node_id;
mod order;

pub use error::{Error, Result};
pub use node_id::NodeId;
pub use order::Order;
