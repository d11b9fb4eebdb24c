use std::cmp::max;

use log::trace;

pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single tree node. Owned by its parent's child slot, or by the tree root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) height: usize,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn leaf(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            height: 1,
            left: None,
            right: None,
        })
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Node count on the longest path down to a leaf; a leaf has height 1.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// `height(left) - height(right)`.
    pub fn balance(&self) -> isize {
        height_of(self.left()) as isize - height_of(self.right()) as isize
    }

    /// Leftmost node of this subtree. Called on a right subtree, this is the
    /// in-order successor that replaces a removed node with two children.
    pub fn min_node(&self) -> &Node<T> {
        let mut current = self;
        while let Some(left) = current.left() {
            current = left;
        }
        current
    }

    pub fn max_node(&self) -> &Node<T> {
        let mut current = self;
        while let Some(right) = current.right() {
            current = right;
        }
        current
    }

    pub(crate) fn update_height(&mut self) {
        self.height = 1 + max(height_of(self.left()), height_of(self.right()));
    }
}

pub(crate) fn height_of<T>(node: Option<&Node<T>>) -> usize {
    node.map_or(0, |n| n.height)
}

pub(crate) fn balance_of<T>(node: Option<&Node<T>>) -> isize {
    node.map_or(0, Node::balance)
}

//       z               y
//      / \             / \
//     y   T4   =>     x   z
//    / \                 / \
//   x   T3             T3   T4
pub(crate) fn rotate_right<T>(mut z: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut y) = z.left.take() else {
        return z;
    };
    trace!("rotate right: promoting left child (height {})", y.height);
    z.left = y.right.take();
    z.update_height();
    y.right = Some(z);
    y.update_height();
    y
}

pub(crate) fn rotate_left<T>(mut z: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut y) = z.right.take() else {
        return z;
    };
    trace!("rotate left: promoting right child (height {})", y.height);
    z.right = y.left.take();
    z.update_height();
    y.left = Some(z);
    y.update_height();
    y
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(value: u32, left: Link<u32>, right: Link<u32>) -> Link<u32> {
        let mut n = Box::new(Node {
            value,
            height: 0,
            left,
            right,
        });
        n.update_height();
        Some(n)
    }

    fn leaf(value: u32) -> Link<u32> {
        Some(Node::leaf(value))
    }

    fn values(n: Option<&Node<u32>>, out: &mut Vec<u32>) {
        if let Some(n) = n {
            values(n.left(), out);
            out.push(n.value);
            values(n.right(), out);
        }
    }

    #[test]
    fn absent_node_has_zero_height_and_balance() {
        assert_eq!(height_of::<u32>(None), 0);
        assert_eq!(balance_of::<u32>(None), 0);
    }

    #[test]
    fn leaf_has_height_one() {
        let n = Node::leaf(5u32);
        assert_eq!(n.height(), 1);
        assert_eq!(n.balance(), 0);
        assert!(n.is_leaf());
    }

    #[test]
    fn rotate_right_promotes_left_child() {
        // 3 -> 2 -> 1 on the left spine
        let z = node(3, node(2, leaf(1), None), None).unwrap();
        assert_eq!(z.balance(), 2);

        let y = rotate_right(z);
        assert_eq!(y.value, 2);
        assert_eq!(y.height, 2);
        assert_eq!(y.left().map(Node::value), Some(&1));
        assert_eq!(y.right().map(Node::value), Some(&3));
        assert_eq!(y.right().map(Node::height), Some(1));
        assert_eq!(y.balance(), 0);
    }

    #[test]
    fn rotate_left_reparents_inner_grandchild() {
        //   2
        //  / \
        // 1   4
        //    / \
        //   3   5
        let z = node(2, leaf(1), node(4, leaf(3), leaf(5))).unwrap();
        let y = rotate_left(z);

        assert_eq!(y.value, 4);
        let new_left = y.left().unwrap();
        assert_eq!(new_left.value, 2);
        assert_eq!(new_left.right().map(Node::value), Some(&3));
        assert_eq!(new_left.height, 2);
        assert_eq!(y.height, 3);

        let mut out = Vec::new();
        values(Some(&y), &mut out);
        assert_eq!(out, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn rotation_without_child_is_identity() {
        let z = Node::leaf(7u32);
        let z = rotate_left(rotate_right(z));
        assert_eq!(*z, *Node::leaf(7u32));
    }

    #[test]
    fn min_and_max_node_follow_the_spines() {
        let n = node(4, node(2, leaf(1), leaf(3)), node(6, None, leaf(7))).unwrap();
        assert_eq!(n.min_node().value, 1);
        assert_eq!(n.max_node().value, 7);
        assert_eq!(n.right().unwrap().min_node().value, 6);
    }
}
