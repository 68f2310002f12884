use std::iter::FusedIterator;

use crate::node::Node;

/// A depth-first iterator yielding each node's element before those of its
/// left and then right subtrees.
///
/// Created by [`AvlSet::pre_order()`].
///
/// [`AvlSet::pre_order()`]: crate::AvlSet::pre_order
#[derive(Debug, Clone)]
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        // Push the right child first so the left subtree is visited first.
        self.stack.extend(v.right().into_iter().chain(v.left()));

        Some(v.element())
    }
}

impl<T> FusedIterator for PreOrder<'_, T> {}
