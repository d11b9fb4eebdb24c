//! A height-balanced (AVL) binary search tree used as an ordered set.
//!
//! Every node owns its children directly, there are no parent pointers, and
//! each node caches its height so balance factors are `O(1)` to read.
//! Insertion and removal rebalance on the way back up from the modified leaf
//! with single or double rotations.
//!
//! The tree relies on `T: Ord` being a total order. An `Ord` impl that is not
//! one is a logic error: no panic or undefined behaviour follows, but the
//! results of later operations are unspecified. Mutation needs `&mut self`, so
//! sharing a tree across threads requires an external lock.
//!
//! Operations log through the [`log`] facade: rotations at `trace`, rejected
//! inserts and removals of absent values at `debug`.

mod avltree;
mod check;
mod iter;
mod node;
mod print;

pub use avltree::AvlTree;
pub use check::InvariantViolation;
pub use iter::Iter;
pub use node::Node;
