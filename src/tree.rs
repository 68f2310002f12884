use std::{
    cmp::Ordering,
    fmt::{self, Debug},
    hash::{Hash, Hasher},
};

use log::{debug, trace};

use crate::{
    error::Underflow,
    iter::{IntoIter, Iter, LevelOrder, PostOrder, PreOrder},
    node::{self, Node},
};

/// An ordered set of unique elements, backed by an AVL tree.
///
/// All mutations keep the tree height-balanced, bounding [`insert()`],
/// [`remove()`] and [`contains()`] to `O(log n)` comparisons. Inserting an
/// element already in the set, or removing one that is not, leaves the set
/// unchanged.
///
/// Cloning an [`AvlSet`] produces a structural deep copy that shares no nodes
/// with the original.
///
/// [`insert()`]: AvlSet::insert
/// [`remove()`]: AvlSet::remove
/// [`contains()`]: AvlSet::contains
pub struct AvlSet<T> {
    root: Option<Box<Node<T>>>,

    /// The number of elements in the tree, maintained by every mutation.
    len: usize,
}

impl<T> Default for AvlSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AvlSet<T> {
    /// Construct an empty set.
    ///
    /// No memory is allocated until the first element is inserted.
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns true if the set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the height of the tree, where a single element has a height of
    /// 0 and an empty set has a height of -1.
    pub fn height(&self) -> i32 {
        self.root
            .as_deref()
            .map(|v| v.height() as i32)
            .unwrap_or(-1)
    }

    /// Returns the smallest element in the set, if any.
    pub fn first(&self) -> Option<&T> {
        let mut ptr = self.root.as_deref()?;
        while let Some(left) = ptr.left() {
            ptr = left;
        }
        Some(ptr.element())
    }

    /// Returns the largest element in the set, if any.
    pub fn last(&self) -> Option<&T> {
        let mut ptr = self.root.as_deref()?;
        while let Some(right) = ptr.right() {
            ptr = right;
        }
        Some(ptr.element())
    }

    /// Returns the smallest element in the set.
    ///
    /// # Errors
    ///
    /// Returns [`Underflow`] if the set is empty.
    pub fn find_min(&self) -> Result<&T, Underflow> {
        self.first().ok_or(Underflow)
    }

    /// Returns the largest element in the set.
    ///
    /// # Errors
    ///
    /// Returns [`Underflow`] if the set is empty.
    pub fn find_max(&self) -> Result<&T, Underflow> {
        self.last().ok_or(Underflow)
    }

    /// Remove all elements from the set, releasing every node.
    pub fn clear(&mut self) {
        if self.root.take().is_some() {
            debug!("cleared set of {} elements", self.len);
        }
        self.len = 0;
    }

    /// Iterate over the elements of the set in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Iterate over the elements in order (left subtree, node, right subtree),
    /// which is always ascending.
    ///
    /// Equivalent to [`AvlSet::iter()`].
    pub fn in_order(&self) -> Iter<'_, T> {
        self.iter()
    }

    /// Iterate over the elements in pre-order (node, left subtree, right
    /// subtree).
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.root.as_deref())
    }

    /// Iterate over the elements in post-order (left subtree, right subtree,
    /// node).
    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder::new(self.root.as_deref())
    }

    /// Iterate over the elements breadth-first, one tree level at a time from
    /// the root down.
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(self.root.as_deref())
    }
}

impl<T> AvlSet<T>
where
    T: Ord,
{
    /// Insert `element` into the set.
    ///
    /// Returns true if the element was added, or false if an equal element was
    /// already present (in which case the set is unchanged and `element` is
    /// dropped).
    pub fn insert(&mut self, element: T) -> bool {
        let inserted = match self.root {
            Some(ref mut v) => v.insert(element),
            None => {
                self.root = Some(Box::new(Node::new(element)));
                true
            }
        };

        if inserted {
            self.len += 1;
        } else {
            trace!("ignoring duplicate insert");
        }

        inserted
    }

    /// Insert each element yielded by `elements`, in order, ignoring any that
    /// are already present.
    ///
    /// Returns the number of elements added.
    pub fn insert_all<I>(&mut self, elements: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        elements
            .into_iter()
            .map(|v| self.insert(v))
            .filter(|&inserted| inserted)
            .count()
    }

    /// Returns true if the set contains an element equal to `element`.
    pub fn contains(&self, element: &T) -> bool {
        self.get(element).is_some()
    }

    /// Returns a reference to the element in the set equal to `element`, if
    /// any.
    pub fn get(&self, element: &T) -> Option<&T> {
        let mut ptr = self.root.as_deref();

        while let Some(v) = ptr {
            ptr = match element.cmp(v.element()) {
                Ordering::Less => v.left(),
                Ordering::Equal => return Some(v.element()),
                Ordering::Greater => v.right(),
            };
        }

        None
    }

    /// Remove `element` from the set.
    ///
    /// Returns true if the element was present.
    pub fn remove(&mut self, element: &T) -> bool {
        self.take(element).is_some()
    }

    /// Remove `element` from the set, returning the stored element equal to
    /// it, if any.
    pub fn take(&mut self, element: &T) -> Option<T> {
        let Some(v) = node::remove(&mut self.root, element) else {
            trace!("ignoring remove of absent element");
            return None;
        };

        self.len -= 1;
        Some(v)
    }

    /// Walk the entire tree, asserting the BST ordering, cached height, AVL
    /// balance and element count invariants hold.
    ///
    /// # Panics
    ///
    /// Panics if any invariant is violated.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self)
    where
        T: Debug,
    {
        assert_eq!(self.is_empty(), self.len == 0);

        let root = match self.root.as_deref() {
            Some(v) => v,
            None => return,
        };

        // Perform a pre-order traversal of the tree.
        let mut n_nodes = 0;
        let mut stack = vec![root];
        while let Some(n) = stack.pop() {
            n_nodes += 1;

            // Prepare to visit the children
            stack.extend(n.left().iter().chain(n.right().iter()));

            // Invariant 1: the left child always contains a value strictly
            // less than this node.
            assert!(n
                .left()
                .map(|v| v.element() < n.element())
                .unwrap_or(true));

            // Invariant 2: the right child always contains a value strictly
            // greater than this node.
            assert!(n
                .right()
                .map(|v| v.element() > n.element())
                .unwrap_or(true));

            // Invariant 3: the height of this node is always +1 of the
            // maximum child height.
            let left_height = n.left().map(|v| v.height());
            let right_height = n.right().map(|v| v.height());
            let want_height = left_height
                .max(right_height)
                .map(|v| v + 1) // This node is +1 of the child, if any
                .unwrap_or_default(); // Otherwise it is at height 0

            assert_eq!(
                n.height(),
                want_height,
                "expect node with element {:?} to have height {}, has {}",
                n.element(),
                want_height,
                n.height(),
            );

            // Invariant 4: the absolute height difference between the left
            // subtree and right subtree (the "balance factor") cannot
            // exceed 1, counting an absent subtree as height -1.
            let balance = node::balance(n);
            assert!(
                balance.abs() <= 1,
                "balance={balance}, element={:?}",
                n.element()
            );
        }

        // Invariant 5: the cached length matches the number of nodes.
        assert_eq!(n_nodes, self.len);

        // Invariant 6: an in-order walk is strictly ascending across the whole
        // tree, not only between parent and child.
        for window in self.iter().collect::<Vec<_>>().windows(2) {
            assert!(window[0] < window[1], "{:?} >= {:?}", window[0], window[1]);
        }
    }
}

impl<T> Clone for AvlSet<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.root.clone_from(&source.root);
        self.len = source.len;
    }
}

impl<T> Debug for AvlSet<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> PartialEq for AvlSet<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for AvlSet<T> where T: Eq {}

impl<T> Hash for AvlSet<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for v in self {
            v.hash(state);
        }
    }
}

impl<T> FromIterator<T> for AvlSet<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut t = Self::new();
        t.insert_all(iter);
        t
    }
}

impl<T, const N: usize> From<[T; N]> for AvlSet<T>
where
    T: Ord,
{
    fn from(values: [T; N]) -> Self {
        Self::from_iter(values)
    }
}

impl<T> Extend<T> for AvlSet<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<T> IntoIterator for AvlSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.root, self.len)
    }
}

impl<'a, T> IntoIterator for &'a AvlSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
