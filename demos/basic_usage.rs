//! Basic example of using the range tree
//!
//! This example demonstrates:
//! - Creating a new tree
//! - Inserting references at Lamport clock values
//! - Comparing two replicas by their prefix digests
//! - Dropping leaves once fine-grained queries are no longer needed

use lc_tree::{Clock, Tree, TreeError, TxRef};

fn main() -> Result<(), TreeError> {
    // Two replicas with a leaf size of 4 clock values
    let mut alice = Tree::<TxRef>::with_leaf_size(4)?;
    let mut bob = Tree::<TxRef>::with_leaf_size(4)?;

    for clock in 0..32u32 {
        let tx_ref = TxRef::new([clock as u8; 32]);
        alice.insert(clock, &tx_ref)?;
        // bob missed the transaction at clock 21
        if clock != 21 {
            bob.insert(clock, &tx_ref)?;
        }
    }

    println!("Alice root: {}", alice.root());
    println!("Bob root:   {}", bob.root());

    // Find the first leaf where the prefixes diverge
    let leaf_size = alice.leaf_size();
    let mut start = 0;
    while start < alice.upper_bound() {
        if alice.zero_to(start as Clock)? != bob.zero_to(start as Clock)? {
            println!("Replicas diverge in [{}, {})", start, start + leaf_size);
            break;
        }
        start += leaf_size;
    }

    // Coarsen the tree once the fine detail is no longer needed
    println!("Nodes before dropping leaves: {}", alice.node_count());
    alice.drop_leaves();
    println!(
        "Nodes after dropping leaves: {}, leaf size: {}",
        alice.node_count(),
        alice.leaf_size()
    );
    Ok(())
}
