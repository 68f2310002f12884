use std::cmp::Ordering;

use log::trace;

#[derive(Debug)]
pub(crate) struct Node<T> {
    /// Child nodes pointers.
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,

    /// The node's AVL height.
    ///
    /// A leaf has a height of 0, and an absent subtree is treated as -1 when
    /// computing balance factors.
    ///
    /// A u8 holds a maximum value of 255, meaning it can represent the height
    /// of a balanced tree of up to 5.78*10⁷⁶ entries.
    height: u8,

    element: T,
}

impl<T> Node<T> {
    pub(crate) fn new(element: T) -> Self {
        Self {
            element,
            left: None,
            right: None,
            height: 0,
        }
    }

    /// Insert `element` into the subtree rooted at `self`, returning true if
    /// it was not already present.
    ///
    /// Every node on the path back up from the new leaf has its height
    /// recomputed and is rebalanced before returning.
    pub(crate) fn insert(self: &mut Box<Self>, element: T) -> bool
    where
        T: Ord,
    {
        let child = match element.cmp(&self.element) {
            Ordering::Less => &mut self.left,
            Ordering::Equal => return false,
            Ordering::Greater => &mut self.right,
        };

        let inserted = match child {
            Some(v) => v.insert(element),
            None => {
                // Insert the value as a new immediate descendent of self.
                *child = Some(Box::new(Self::new(element)));

                // Inserting this new leaf cannot skew the tree in the
                // direction of the new addition such that it requires the tree
                // be rebalanced as, at most, it creates an absolute difference
                // of 1 in this direction (from balanced, or slightly skewed in
                // the opposite direction).
                //
                // Update this node and skip the rebalancing checks.
                update_height(self);
                return true;
            }
        };

        if !inserted {
            // The tree structure has not been modified, so it does not require
            // rebalancing.
            return false;
        }

        rebalance(self);
        true
    }

    pub(crate) fn element(&self) -> &T {
        &self.element
    }

    pub(crate) fn height(&self) -> u8 {
        self.height
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn left_mut(&mut self) -> Option<&mut Box<Self>> {
        self.left.as_mut()
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Option<Box<Self>> {
        self.left.take()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn right_mut(&mut self) -> Option<&mut Box<Self>> {
        self.right.as_mut()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Option<Box<Self>> {
        self.right.take()
    }

    /// Consume this [`Node`], returning the element it holds.
    pub(crate) fn into_element(self) -> T {
        self.element
    }
}

impl<T> Clone for Node<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            left: self.left.clone(),
            right: self.right.clone(),
            height: self.height,
            element: self.element.clone(),
        }
    }

    /// Overwrite `self` with a structural copy of `source`, reusing the
    /// allocations of every node present at the same position in both trees.
    fn clone_from(&mut self, source: &Self) {
        self.element.clone_from(&source.element);
        self.height = source.height;
        self.left.clone_from(&source.left);
        self.right.clone_from(&source.right);
    }
}

/// Return the height of `n`, or -1 for an absent subtree.
fn height<T>(n: Option<&Node<T>>) -> i16 {
    n.map(|v| v.height() as i16).unwrap_or(-1)
}

fn update_height<T>(n: &mut Node<T>) {
    n.height = n
        .left()
        .map(|v| v.height() + 1)
        .max(n.right().map(|v| v.height() + 1))
        .unwrap_or_default()
}

/// Compute the "balance factor" of the subtree rooted at `n`.
///
/// Returns the subtree height skew / magnitude, which is a positive number when
/// left heavy, and a negative number when right heavy.
pub(crate) fn balance<T>(n: &Node<T>) -> i16 {
    height(n.left()) - height(n.right())
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`
/// ("rotate with right child").
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// The heights of `x` and then `P` are recomputed from their new children.
/// A no-op if `x` has no right child.
fn rotate_left<T>(x: &mut Box<Node<T>>) {
    let Some(mut p) = x.right.take() else {
        return;
    };
    std::mem::swap(x, &mut p);

    p.right = x.left.take();
    update_height(&mut p);

    x.left = Some(p);
    update_height(x);
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`
/// ("rotate with left child").
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// The heights of `y` and then `P` are recomputed from their new children.
/// A no-op if `y` has no left child.
fn rotate_right<T>(y: &mut Box<Node<T>>) {
    let Some(mut p) = y.left.take() else {
        return;
    };
    std::mem::swap(y, &mut p);

    p.left = y.right.take();
    update_height(&mut p);

    y.right = Some(p);
    update_height(y);
}

/// Recompute the height of `v` and restore the AVL balance of the subtree
/// rooted at it, which must be skewed by at most 2 in either direction.
pub(crate) fn rebalance<T>(v: &mut Box<Node<T>>) {
    update_height(v);

    match balance(v) {
        // Left-heavy, outer grandchild at least as tall as the inner one.
        (2..) if v.left().map(balance).unwrap_or_default() >= 0 => {
            trace!("single right rotation at height {}", v.height);
            rotate_right(v);
        }
        // Left-heavy zig-zag: lift the left child's right child up twice.
        (2..) => {
            trace!("left-right double rotation at height {}", v.height);
            if let Some(l) = v.left_mut() {
                rotate_left(l);
            }
            rotate_right(v);
        }
        (..=-2) if v.right().map(balance).unwrap_or_default() <= 0 => {
            trace!("single left rotation at height {}", v.height);
            rotate_left(v);
        }
        (..=-2) => {
            trace!("right-left double rotation at height {}", v.height);
            if let Some(r) = v.right_mut() {
                rotate_right(r);
            }
            rotate_left(v);
        }

        #[allow(clippy::manual_range_patterns)]
        -1 | 0 | 1 => { /* balanced */ }
    }

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1 after a single insert or remove.
    debug_assert!(balance(v).abs() <= 1);
}

/// Remove `element` from the subtree owned by `slot`, returning it if it was
/// present.
///
/// The subtree root held in `slot` is replaced whenever the removal or a
/// rotation changes it, and every ancestor of the removed node is
/// rebalanced on the way back up. No node is touched after it has been
/// unlinked.
pub(crate) fn remove<T>(slot: &mut Option<Box<Node<T>>>, element: &T) -> Option<T>
where
    T: Ord,
{
    let node = slot.as_mut()?;

    let removed = match element.cmp(&node.element) {
        Ordering::Less => remove(&mut node.left, element)?,
        Ordering::Greater => remove(&mut node.right, element)?,
        Ordering::Equal if node.left.is_some() && node.right.is_some() => {
            // Two children: the in-order successor (the minimum of the right
            // subtree) replaces the removed element in this node, and is
            // itself unlinked from the right subtree.
            let successor = remove_min(&mut node.right)?;
            std::mem::replace(&mut node.element, successor)
        }
        Ordering::Equal => {
            // Zero or one child: splice the only child (if any) into the slot
            // this node occupied.
            let mut old = slot.take()?;
            *slot = old.left.take().or_else(|| old.right.take());

            // Invariant: the node being unlinked contains no subtree.
            debug_assert!(old.left.is_none());
            debug_assert!(old.right.is_none());

            // The spliced-in subtree is unchanged and already balanced; the
            // parent performs the height fixup.
            return Some(old.element);
        }
    };

    rebalance(node);
    Some(removed)
}

/// Unlink the node holding the minimum element in the subtree owned by
/// `slot`, returning its element and linking its right subtree (if any) in
/// its place.
///
/// Returns [`None`] if `slot` is empty.
pub(crate) fn remove_min<T>(slot: &mut Option<Box<Node<T>>>) -> Option<T> {
    let node = slot.as_mut()?;

    if node.left.is_some() {
        // Descend left to the end of the left edge.
        let min = remove_min(&mut node.left);
        rebalance(node);
        return min;
    }

    // This node is the end of the left edge.
    //
    // ```text
    //                 6
    //                / \
    //    here ->   <4>   7
    //                \
    //                 5
    // ```
    let mut old = slot.take()?;
    *slot = old.right.take();
    Some(old.element)
}
