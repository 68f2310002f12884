use std::{collections::VecDeque, iter::FusedIterator};

use crate::node::Node;

/// A breadth-first iterator yielding elements one tree level at a time, each
/// level from left to right.
///
/// Created by [`AvlSet::level_order()`].
///
/// [`AvlSet::level_order()`]: crate::AvlSet::level_order
#[derive(Debug, Clone)]
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.queue.pop_front()?;
        self.queue.extend(v.left().into_iter().chain(v.right()));
        Some(v.element())
    }
}

impl<T> FusedIterator for LevelOrder<'_, T> {}
