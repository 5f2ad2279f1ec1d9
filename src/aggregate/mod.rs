mod digest;
mod tx_ref;

pub use digest::XorDigest;
pub use tx_ref::{TxRef, TX_REF_SIZE};

use crate::AggregateError;

/// Lamport clock value used to place references in the tree.
pub type Clock = u32;

/// Bound of a clock range. Wider than [`Clock`] so that a range can extend past
/// `Clock::MAX`.
pub type Bound = u64;

/// Thread safety marker trait
#[cfg(feature = "multi-thread")]
pub trait ThreadSafe: Send + Sync {}
#[cfg(feature = "multi-thread")]
impl<T: Send + Sync> ThreadSafe for T {}

#[cfg(not(feature = "multi-thread"))]
pub trait ThreadSafe {}
#[cfg(not(feature = "multi-thread"))]
impl<T> ThreadSafe for T {}

/// Commutative, invertible accumulator held by every node of the tree.
///
/// Implementations must satisfy, for any reference `r` and aggregates `a`, `b`:
/// * combining is commutative and associative, so the aggregate of a range does not
///   depend on insertion order;
/// * removing `b` from `a` undoes every `combine` that produced `b`.
///
/// The tree never assumes a specific combiner: prefix queries are answered by removing
/// the aggregates of the ranges past the requested boundary.
pub trait Aggregate: Clone + ThreadSafe {
    /// Reference type folded into the aggregate on insertion.
    type Ref: ?Sized;

    /// Folds `reference` into this aggregate in place.
    fn combine(&mut self, reference: &Self::Ref) -> Result<(), AggregateError>;

    /// Removes everything `other` accumulated from this aggregate in place.
    /// Fails with [`AggregateError::TypeMismatch`] when `other` has a different representation.
    fn remove(&mut self, other: &Self) -> Result<(), AggregateError>;

    /// Returns an independent copy of the aggregate.
    fn duplicate(&self) -> Self {
        self.clone()
    }
}
