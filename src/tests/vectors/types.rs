use serde::{Deserialize, Serialize};

use crate::{Bound, Clock, TxRef};

/// A reference inserted at a clock value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestInsert {
    pub clock: Clock,
    pub tx_ref: String,
}

impl TestInsert {
    pub fn tx_ref(&self) -> Result<TxRef, hex::FromHexError> {
        self.tx_ref.parse()
    }
}

/// Expected prefix aggregate for a clock value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestPrefix {
    pub clock: Clock,
    pub aggregate: String,
}

impl TestPrefix {
    pub fn aggregate(&self) -> Result<TxRef, hex::FromHexError> {
        self.aggregate.parse()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidTestCase {
    pub comment: Option<String>,
    pub leaf_size: Clock,
    pub inserts: Vec<TestInsert>,
    pub root: String,
    pub upper_bound: Bound,
    pub zero_to: Vec<TestPrefix>,
    /// Number of times the leaves are dropped before checking `zero_to_after_drop`
    pub drop_leaves: usize,
    pub leaf_size_after_drop: Bound,
    pub zero_to_after_drop: Vec<TestPrefix>,
}

impl ValidTestCase {
    pub fn root(&self) -> Result<TxRef, hex::FromHexError> {
        self.root.parse()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestVectors {
    pub valid_test_cases: Vec<ValidTestCase>,
}
