//! Error types for the range tree and its aggregates

use std::error::Error;
use std::fmt::Display;

use crate::Bound;

/// Error raised by an [`crate::Aggregate`] implementation.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum AggregateError {
    /// The operand does not share the receiver's internal representation.
    TypeMismatch {
        /// Width in bytes of the receiver
        expected: usize,
        /// Width in bytes of the operand
        found: usize,
    },
}

impl Display for AggregateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AggregateError::TypeMismatch { expected, found } => write!(
                f,
                "Internal data structures do not match: expected {} bytes, found {}",
                expected, found
            ),
        }
    }
}

impl Error for AggregateError {}

/// Error type for tree operations
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TreeError {
    /// The leaf size must be at least one clock tick
    InvalidLeafSize,
    /// The aggregate of the node with the given split point failed
    Aggregate { split: Bound, source: AggregateError },
}

impl Display for TreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TreeError::InvalidLeafSize => write!(f, "Leaf size must be greater than zero"),
            TreeError::Aggregate { split, source } => {
                write!(f, "Aggregate failed for node with split {}: {}", split, source)
            }
        }
    }
}

impl Error for TreeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TreeError::Aggregate { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use std::error::Error;

    use super::{AggregateError, TreeError};

    #[test]
    fn test_aggregate_error_display() {
        let err = AggregateError::TypeMismatch {
            expected: 32,
            found: 20,
        };
        assert_eq!(
            format!("{}", err),
            "Internal data structures do not match: expected 32 bytes, found 20"
        );
    }

    #[test]
    fn test_tree_error_source() {
        let cause = AggregateError::TypeMismatch {
            expected: 32,
            found: 64,
        };
        let err = TreeError::Aggregate {
            split: 8,
            source: cause.clone(),
        };
        assert_eq!(
            format!("{}", err),
            "Aggregate failed for node with split 8: Internal data structures do not match: expected 32 bytes, found 64"
        );
        assert_eq!(err.source().map(|e| e.to_string()), Some(cause.to_string()));
        assert!(TreeError::InvalidLeafSize.source().is_none());
    }
}
