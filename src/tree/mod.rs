//! Range tree over Lamport clock values

mod node;

use std::fmt::Debug;

use tracing::debug;

pub use node::Node;

use crate::{Aggregate, Bound, Clock, ThreadSafe, TreeError};

#[cfg(feature = "multi-thread")]
type InitFn<A> = Box<dyn Fn() -> A + Send + Sync>;
#[cfg(not(feature = "multi-thread"))]
type InitFn<A> = Box<dyn Fn() -> A>;

/// Binary tree whose leaves hold the aggregate of the references inserted over a fixed
/// range of clock values. The aggregate of a parent is the combination of those of its
/// children, so the root holds the aggregate of every reference in the tree.
///
/// Since the leaves are of fixed size, a new root is created when a reference is
/// inserted at a clock outside of the current root range. Whenever a new branch is
/// needed, a string of left nodes is created all the way to the leaf; right children
/// only exist once a reference lands in their range.
///
/// Ranges are tracked as [`Bound`] so that every [`Clock`] value fits, whatever the leaf
/// size.
///
/// The tree is not synchronized internally: wrap it in a lock to share it.
pub struct Tree<A: Aggregate> {
    root: Node<A>,
    upper_bound: Bound,
    leaf_size: Bound,
    /// Produces the identity aggregate for newly created nodes.
    init: InitFn<A>,
}

impl<A: Aggregate + Default + 'static> Tree<A> {
    /// Creates an empty tree using [`Default`] as the identity aggregate.
    pub fn with_leaf_size(leaf_size: Clock) -> Result<Self, TreeError> {
        Self::new(leaf_size, A::default)
    }
}

impl<A: Aggregate> Tree<A> {
    /// Creates an empty tree covering `[0, leaf_size)`.
    /// * `leaf_size` - range of clock values held by a leaf. Must be non-zero.
    /// * `init` - produces the identity value of the aggregate.
    pub fn new<F>(leaf_size: Clock, init: F) -> Result<Self, TreeError>
    where
        F: Fn() -> A + ThreadSafe + 'static,
    {
        if leaf_size == 0 {
            return Err(TreeError::InvalidLeafSize);
        }
        let leaf_size = Bound::from(leaf_size);
        Ok(Self {
            root: Node::new(leaf_size, leaf_size, init()),
            upper_bound: leaf_size,
            leaf_size,
            init: Box::new(init),
        })
    }

    /// Inserts a reference at the given clock value.
    ///
    /// The tree grows as needed and the reference is combined into every node from the
    /// root down to the leaf covering `clock`.
    pub fn insert(&mut self, clock: Clock, reference: &A::Ref) -> Result<(), TreeError> {
        let clock = Bound::from(clock);
        // upper_bound never exceeds 2 * Clock::MAX, doubling cannot overflow
        while clock >= self.upper_bound {
            self.re_root();
        }

        let leaf_size = self.leaf_size;
        let init = self.init.as_ref();
        let mut next = Some(&mut self.root);
        while let Some(current) = next {
            current
                .aggregate
                .combine(reference)
                .map_err(|source| TreeError::Aggregate {
                    split: current.split,
                    source,
                })?;
            next = current.child_for(clock, leaf_size, init);
        }
        Ok(())
    }

    /// Creates a new root with the aggregate of the current root and adds the current
    /// root as its left branch. The right half of the new root is empty.
    fn re_root(&mut self) {
        let max = self.upper_bound * 2;
        let new_root = Node::new(self.upper_bound, max, self.root.aggregate.duplicate());
        let old_root = std::mem::replace(&mut self.root, new_root);
        self.root.left = Some(Box::new(old_root));
        self.upper_bound = max;
        debug!(upper_bound = max, "re-rooted tree");
    }

    /// Returns the aggregate of the entire tree.
    pub fn root(&self) -> A {
        self.root.aggregate.duplicate()
    }

    /// Returns the aggregate over `[0, (clock / leaf_size + 1) * leaf_size)`, i.e. up to
    /// and including the leaf that contains `clock`.
    ///
    /// Starts from the root aggregate and removes the right sibling of every step that
    /// goes left.
    pub fn zero_to(&self, clock: Clock) -> Result<A, TreeError> {
        let clock = Bound::from(clock);
        let mut aggregate = self.root.aggregate.duplicate();
        let mut current = &self.root;
        while let Some(left) = current.left.as_deref() {
            if clock < current.split {
                if let Some(right) = current.right.as_deref() {
                    aggregate
                        .remove(&right.aggregate)
                        .map_err(|source| TreeError::Aggregate {
                            split: current.split,
                            source,
                        })?;
                }
                current = left;
            } else {
                match current.right.as_deref() {
                    Some(right) => current = right,
                    None => break,
                }
            }
        }
        Ok(aggregate)
    }

    /// Shrinks the tree by dropping all leaves. The parent of a leaf becomes the new leaf
    /// and the leaf size doubles. A tree made of a single leaf is left untouched.
    pub fn drop_leaves(&mut self) {
        if self.root.is_leaf() {
            return;
        }
        self.root.drop_leaves();
        self.leaf_size *= 2;
        debug!(leaf_size = self.leaf_size, "dropped leaves");
    }

    /// Returns the range of clock values held by a leaf.
    pub fn leaf_size(&self) -> Bound {
        self.leaf_size
    }

    /// Returns the exclusive upper bound of the clock range covered by the tree.
    pub fn upper_bound(&self) -> Bound {
        self.upper_bound
    }

    /// Number of levels below the root.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut current = &self.root;
        while let Some(left) = current.left() {
            height += 1;
            current = left;
        }
        height
    }

    /// Number of nodes currently allocated.
    pub fn node_count(&self) -> usize {
        self.root.count()
    }

    /// Returns the root node, for walking the tree level by level.
    pub fn root_node(&self) -> &Node<A> {
        &self.root
    }
}

impl<A: Aggregate + Debug> Debug for Tree<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tree")
            .field("upper_bound", &self.upper_bound)
            .field("leaf_size", &self.leaf_size)
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}
