//! Structural verification of an [`AvlTree`].

use std::cmp::max;

use displaydoc::Display;

use crate::avltree::AvlTree;
use crate::node::Node;

/// A broken tree invariant, located by the offending node's in-order position.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InvariantViolation {
    /// value at in-order position `{position}` is not greater than its predecessor
    Unordered { position: usize },
    /// node at in-order position `{position}` stores height `{stored}`, its subtrees give `{expected}`
    HeightMismatch {
        position: usize,
        stored: usize,
        expected: usize,
    },
    /// node at in-order position `{position}` has balance factor `{balance}`
    Unbalanced { position: usize, balance: isize },
    /// tree records `{recorded}` values but holds `{actual}`
    LengthMismatch { recorded: usize, actual: usize },
}

impl std::error::Error for InvariantViolation {}

impl<T: Ord> AvlTree<T> {
    /// Walks the whole tree checking ordering, stored heights, balance factors
    /// and the element count. `O(n)`.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if let Some(i) = self.iter().zip(self.iter().skip(1)).position(|(a, b)| a >= b) {
            return Err(InvariantViolation::Unordered { position: i + 1 });
        }

        let mut position = 0;
        check_node(self.root(), &mut position)?;
        if position != self.len {
            return Err(InvariantViolation::LengthMismatch {
                recorded: self.len,
                actual: position,
            });
        }
        Ok(())
    }
}

// Returns the subtree height recomputed from its leaves.
fn check_node<T>(node: Option<&Node<T>>, position: &mut usize) -> Result<usize, InvariantViolation> {
    let Some(node) = node else {
        return Ok(0);
    };

    let left = check_node(node.left(), position)?;
    let here = *position;
    *position += 1;
    let right = check_node(node.right(), position)?;

    let expected = 1 + max(left, right);
    if node.height() != expected {
        return Err(InvariantViolation::HeightMismatch {
            position: here,
            stored: node.height(),
            expected,
        });
    }

    let balance = left as isize - right as isize;
    if balance.abs() > 1 {
        return Err(InvariantViolation::Unbalanced { position: here, balance });
    }
    Ok(expected)
}
