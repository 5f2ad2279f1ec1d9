use std::fmt::Display;

use tracing::trace;

use crate::{Aggregate, Bound};

/// A node of the range tree.
///
/// The node covers the clock range `[start, max)` where `start` is the split of its
/// parent (or 0 for the root), and holds the aggregate of every reference inserted in
/// that range. A node without a left child is a leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<A: Aggregate> {
    pub(super) split: Bound,
    pub(super) max: Bound,
    pub(super) aggregate: A,
    pub(super) left: Option<Box<Node<A>>>,
    pub(super) right: Option<Box<Node<A>>>,
}

impl<A: Aggregate> Node<A> {
    pub(super) fn new(split: Bound, max: Bound, aggregate: A) -> Self {
        Self {
            split,
            max,
            aggregate,
            left: None,
            right: None,
        }
    }

    /// Builds the branch covering `[start, stop)`: a string of left nodes all the way down
    /// to a leaf of `leaf_size`. Right children are created on demand.
    pub(super) fn new_branch(
        start: Bound,
        stop: Bound,
        leaf_size: Bound,
        init: &dyn Fn() -> A,
    ) -> Self {
        let split = start + (stop - start) / 2;
        let mut node = Self::new(split, stop, init());
        if stop - start > leaf_size {
            node.left = Some(Box::new(Self::new_branch(start, split, leaf_size, init)));
        }
        node
    }

    /// Returns the child covering `clock`, creating the right branch if it does not exist.
    /// Returns `None` on a leaf.
    pub(super) fn child_for(
        &mut self,
        clock: Bound,
        leaf_size: Bound,
        init: &dyn Fn() -> A,
    ) -> Option<&mut Node<A>> {
        if clock < self.split {
            return self.left.as_deref_mut();
        }
        if self.left.is_some() && self.right.is_none() {
            trace!(start = self.split, stop = self.max, "materializing branch");
            self.right = Some(Box::new(Self::new_branch(
                self.split, self.max, leaf_size, init,
            )));
        }
        self.right.as_deref_mut()
    }

    /// Turns every parent of a leaf into a leaf. A node that is itself a leaf is kept.
    pub(super) fn drop_leaves(&mut self) {
        if self.left.as_ref().is_some_and(|left| left.is_leaf()) {
            self.left = None;
            self.right = None;
            return;
        }
        if let Some(left) = self.left.as_deref_mut() {
            left.drop_leaves();
        }
        if let Some(right) = self.right.as_deref_mut() {
            right.drop_leaves();
        }
    }

    pub(super) fn count(&self) -> usize {
        1 + self.left.as_ref().map_or(0, |n| n.count())
            + self.right.as_ref().map_or(0, |n| n.count())
    }

    /// Split point between the left and right children.
    pub fn split(&self) -> Bound {
        self.split
    }

    /// Exclusive upper bound of the range covered by the node.
    pub fn max(&self) -> Bound {
        self.max
    }

    /// Aggregate of every reference inserted in the node's range.
    pub fn aggregate(&self) -> &A {
        &self.aggregate
    }

    /// Left child. `None` on a leaf.
    pub fn left(&self) -> Option<&Node<A>> {
        self.left.as_deref()
    }

    /// Right child. `None` until a reference lands in the right half.
    pub fn right(&self) -> Option<&Node<A>> {
        self.right.as_deref()
    }

    /// Whether the node is a leaf, i.e. has no left child.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none()
    }
}

impl<A: Aggregate + Display> Display for Node<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Node {{ split: {}, max: {}, aggregate: {} }}",
            self.split, self.max, self.aggregate
        )
    }
}

#[cfg(test)]
mod test {
    use super::Node;
    use crate::TxRef;

    fn zero() -> TxRef {
        TxRef::default()
    }

    #[test]
    fn test_new_branch_is_left_spine() {
        let branch = Node::new_branch(8, 16, 2, &zero);
        assert_eq!((branch.split(), branch.max()), (12, 16));
        let child = branch.left().unwrap();
        assert_eq!((child.split(), child.max()), (10, 12));
        let leaf = child.left().unwrap();
        assert_eq!((leaf.split(), leaf.max()), (9, 10));
        assert!(leaf.is_leaf());
        assert!(branch.right().is_none());
        assert!(child.right().is_none());
        assert_eq!(branch.count(), 3);
    }

    #[test]
    fn test_new_branch_of_leaf_size() {
        let branch = Node::new_branch(4, 8, 4, &zero);
        assert!(branch.is_leaf());
        assert_eq!(branch.max(), 8);
    }

    #[test]
    fn test_child_for_materializes_right() {
        let mut node = Node::new_branch(0, 8, 4, &zero);
        assert!(node.right().is_none());
        let right = node.child_for(5, 4, &zero).unwrap();
        assert_eq!((right.split(), right.max()), (6, 8));
        assert!(node.right().is_some());
        assert_eq!(node.child_for(3, 4, &zero).unwrap().max(), 4);
    }

    #[test]
    fn test_child_for_leaf() {
        let mut leaf = Node::new_branch(0, 4, 4, &zero);
        assert!(leaf.child_for(3, 4, &zero).is_none());
        assert!(leaf.right().is_none());
    }

    #[test]
    fn test_node_display() {
        let node = Node::new(4, 8, zero());
        assert_eq!(
            format!("{}", node),
            "Node { split: 4, max: 8, aggregate: 0000000000000000000000000000000000000000000000000000000000000000 }"
        );
    }
}
