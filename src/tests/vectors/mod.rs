mod types;

use std::{fs, path::PathBuf};

use crate::{tests::vectors::types::TestVectors, Tree, TxRef};

fn run_test_vectors(test_vectors: &TestVectors) {
    for valid_case in &test_vectors.valid_test_cases {
        let comment = valid_case.comment.as_deref().unwrap_or("unnamed test");
        println!("Running test case: {}", comment);

        let mut tree = Tree::<TxRef>::with_leaf_size(valid_case.leaf_size).unwrap();
        for insert in &valid_case.inserts {
            tree.insert(insert.clock, &insert.tx_ref().unwrap())
                .unwrap();
        }

        assert_eq!(tree.root(), valid_case.root().unwrap(), "{}", comment);
        assert_eq!(tree.upper_bound(), valid_case.upper_bound, "{}", comment);

        for prefix in &valid_case.zero_to {
            assert_eq!(
                tree.zero_to(prefix.clock).unwrap(),
                prefix.aggregate().unwrap(),
                "{}: zero_to({})",
                comment,
                prefix.clock
            );
        }

        for _ in 0..valid_case.drop_leaves {
            tree.drop_leaves();
        }
        assert_eq!(tree.leaf_size(), valid_case.leaf_size_after_drop, "{}", comment);
        assert_eq!(tree.root(), valid_case.root().unwrap(), "{}", comment);

        for prefix in &valid_case.zero_to_after_drop {
            assert_eq!(
                tree.zero_to(prefix.clock).unwrap(),
                prefix.aggregate().unwrap(),
                "{}: zero_to({}) after drop",
                comment,
                prefix.clock
            );
        }
    }
}

#[test]
fn test_range_tree_vectors() {
    let path = PathBuf::from("src/tests/vectors/testdata/range_tree.json");
    let json = fs::read_to_string(&path).unwrap();
    let test_vectors = serde_json::from_str::<TestVectors>(&json).unwrap();
    run_test_vectors(&test_vectors);
}
