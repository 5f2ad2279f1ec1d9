//! Lamport clock range tree
//!
//! This crate provides a binary tree that keeps a compact digest of a growing set of
//! transaction references, indexed by the Lamport clock value at which each reference was
//! inserted. Two replicas holding the same structure can compare digests at decreasing
//! granularity to find the clock ranges where their sets differ.
//!
//! The tree supports:
//! - Whole-range digests ([`Tree::root`])
//! - Prefix digests aligned to the leaf size ([`Tree::zero_to`])
//! - Lazy growth in height and breadth as references are inserted
//! - Coarsening by dropping the lowest level ([`Tree::drop_leaves`])
//! - Pluggable invertible aggregates through the [`Aggregate`] trait

mod aggregate;
mod error;
mod tree;

pub use aggregate::{Aggregate, Bound, Clock, ThreadSafe, TxRef, XorDigest, TX_REF_SIZE};
pub use error::{AggregateError, TreeError};
pub use tree::{Node, Tree};

#[cfg(test)]
mod tests;
