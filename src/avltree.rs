use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::mem;

use log::debug;

use crate::iter::Iter;
use crate::node::{Link, Node, balance_of, height_of, rotate_left, rotate_right};

/// An ordered set kept height-balanced: for every node the heights of its two
/// subtrees differ by at most one, so `search`, `insert` and `remove` are all
/// `O(log n)` in the worst case.
///
/// Values equal to one already stored are rejected, keeping the ordering
/// strict: everything left of a node is smaller, everything right is larger.
#[derive(Clone)]
pub struct AvlTree<T> {
    pub(crate) root: Link<T>,
    pub(crate) len: usize,
}

// Side of a node the inserted value descended to. `Here` is the new leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Descent {
    Here,
    Left,
    Right,
}

impl<T> AvlTree<T> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the root, 0 for an empty tree.
    pub fn height(&self) -> usize {
        height_of(self.root())
    }

    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    pub fn first(&self) -> Option<&T> {
        self.root().map(|root| root.min_node().value())
    }

    pub fn last(&self) -> Option<&T> {
        self.root().map(|root| root.max_node().value())
    }

    /// Values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root(), self.len)
    }
}

impl<T: Ord> AvlTree<T> {
    pub fn search<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(node.value.borrow()) {
                Ordering::Equal => return Some(&node.value),
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(value).is_some()
    }

    /// Adds `value`, returning `false` (and leaving the tree untouched) if an
    /// equal value is already present.
    pub fn insert(&mut self, value: T) -> bool {
        let (root, descent) = insert_node(self.root.take(), value);
        self.root = Some(root);
        match descent {
            Some(_) => {
                self.len += 1;
                true
            }
            None => {
                debug!("insert: equal value already stored, tree unchanged");
                false
            }
        }
    }

    /// Removes the value equal to `value` and returns it. Removing an absent
    /// value is a no-op.
    pub fn remove<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (root, removed) = remove_node(self.root.take(), value);
        self.root = root;
        if removed.is_some() {
            self.len -= 1;
        } else {
            debug!("remove: value not found, tree unchanged");
        }
        removed
    }
}

fn insert_node<T: Ord>(link: Link<T>, value: T) -> (Box<Node<T>>, Option<Descent>) {
    let Some(mut node) = link else {
        return (Node::leaf(value), Some(Descent::Here));
    };

    let side = match value.cmp(&node.value) {
        Ordering::Less => Descent::Left,
        Ordering::Greater => Descent::Right,
        Ordering::Equal => return (node, None),
    };

    let below = if side == Descent::Left {
        let (child, below) = insert_node(node.left.take(), value);
        node.left = Some(child);
        below
    } else {
        let (child, below) = insert_node(node.right.take(), value);
        node.right = Some(child);
        below
    };

    match below {
        Some(below) => (rebalance_after_insert(node, below), Some(side)),
        None => (node, None),
    }
}

// `below` is the side the new value took under the heavy child, which picks
// between the single and the double rotation.
fn rebalance_after_insert<T>(mut node: Box<Node<T>>, below: Descent) -> Box<Node<T>> {
    node.update_height();
    let balance = node.balance();

    if balance > 1 {
        if below == Descent::Left {
            return rotate_right(node);
        }
        node.left = node.left.take().map(rotate_left);
        return rotate_right(node);
    }

    if balance < -1 {
        if below == Descent::Right {
            return rotate_left(node);
        }
        node.right = node.right.take().map(rotate_right);
        return rotate_left(node);
    }

    node
}

// A matched node with two children takes the value of its in-order
// successor, `Node::min_node` of the right subtree, which `remove_min`
// unlinks while rebalancing the path down to it.
fn remove_node<T, Q>(link: Link<T>, value: &Q) -> (Link<T>, Option<T>)
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let Some(mut node) = link else {
        return (None, None);
    };

    let removed = match value.cmp(node.value.borrow()) {
        Ordering::Less => {
            let (left, removed) = remove_node(node.left.take(), value);
            node.left = left;
            removed
        }
        Ordering::Greater => {
            let (right, removed) = remove_node(node.right.take(), value);
            node.right = right;
            removed
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, None) => return (None, Some(node.value)),
            (Some(child), None) | (None, Some(child)) => return (Some(child), Some(node.value)),
            (Some(left), Some(right)) => {
                // in-order successor takes this node's place
                let (right, successor) = remove_min(right);
                node.left = Some(left);
                node.right = right;
                Some(mem::replace(&mut node.value, successor))
            }
        },
    };

    if removed.is_none() {
        return (Some(node), None);
    }
    (Some(rebalance_after_remove(node)), removed)
}

fn remove_min<T>(mut node: Box<Node<T>>) -> (Link<T>, T) {
    match node.left.take() {
        None => {
            let Node { value, right, .. } = *node;
            (right, value)
        }
        Some(left) => {
            let (left, min) = remove_min(left);
            node.left = left;
            (Some(rebalance_after_remove(node)), min)
        }
    }
}

// Deletion may shorten either side, so the heavy child's own balance decides
// the rotation. Runs at every level of the unwind.
fn rebalance_after_remove<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.update_height();
    let balance = node.balance();

    if balance > 1 {
        if balance_of(node.left()) < 0 {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }

    if balance < -1 {
        if balance_of(node.right()) > 0 {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }

    node
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for AvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for AvlTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a AvlTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for AvlTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for AvlTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}
