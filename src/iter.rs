use std::iter::FusedIterator;

use crate::node::Node;

/// In-order iterator over an [`AvlTree`](crate::AvlTree), yielding values in
/// ascending order. Holds at most one stack entry per tree level.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::AvlTree;

    #[test]
    fn yields_ascending_values() {
        let tree: AvlTree<i64> = [50, -3, 17, 8, 99, 0].into_iter().collect();
        let got: Vec<i64> = tree.iter().copied().collect();
        assert_eq!(got, vec![-3, 0, 8, 17, 50, 99]);
    }

    #[test]
    fn exact_size_tracks_progress() {
        let tree: AvlTree<u8> = (0..10).collect();
        let mut iter = tree.iter();
        assert_eq!(iter.len(), 10);
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 8);
        assert_eq!(iter.count(), 8);
    }

    #[test]
    fn clone_restarts_from_current_position() {
        let tree: AvlTree<u8> = (1..=5).collect();
        let mut iter = tree.iter();
        iter.next();
        let rest: Vec<u8> = iter.clone().copied().collect();
        assert_eq!(rest, vec![2, 3, 4, 5]);
        assert_eq!(iter.next(), Some(&2));
        // a fresh traversal starts over
        assert_eq!(tree.iter().next(), Some(&1));
    }

    #[test]
    fn fused_after_exhaustion() {
        let tree: AvlTree<u8> = [1].into_iter().collect();
        let mut iter = tree.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn borrowed_tree_into_iterator() {
        let tree: AvlTree<u8> = [3, 1, 2].into_iter().collect();
        let mut sum = 0;
        for v in &tree {
            sum += *v;
        }
        assert_eq!(sum, 6);
    }
}
