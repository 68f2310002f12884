use std::iter::FusedIterator;

use crate::node::Node;

/// A depth-first iterator yielding the elements of a node's left and then
/// right subtrees before its own.
///
/// Created by [`AvlSet::post_order()`].
///
/// [`AvlSet::post_order()`]: crate::AvlSet::post_order
#[derive(Debug, Clone)]
pub struct PostOrder<'a, T> {
    /// Nodes to visit, paired with whether their children have already been
    /// pushed.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().map(|v| (v, false)).collect(),
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (v, expanded) = self.stack.pop()?;

            if expanded {
                return Some(v.element());
            }

            // Revisit this node once both subtrees have been yielded, visiting
            // the left subtree first.
            self.stack.push((v, true));
            self.stack.extend(
                v.right()
                    .into_iter()
                    .chain(v.left())
                    .map(|child| (child, false)),
            );
        }
    }
}

impl<T> FusedIterator for PostOrder<'_, T> {}
