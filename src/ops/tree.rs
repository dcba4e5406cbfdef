//! An unbalanced [binary search tree] of integers.
//!
//! The structural mutators are recursive: each call frame returns the
//! (possibly newly created) root of the subtree it worked on, and the caller
//! re-attaches it. That is how new nodes get linked into an existing tree
//! without parent back-references. The tree never rebalances itself; its
//! shape is a function of insertion order alone.
//!
//! [binary search tree]: https://en.wikipedia.org/wiki/Binary_search_tree

use core::cmp::Ordering;

/// Creates a binary search tree by inserting the arguments in order.
///
/// # Examples
///
/// ```
/// use dsa_ops::prelude::*;
/// use dsa_ops::ops::tree;
///
/// let root = bst![50, 30, 70, 20, 40];
/// let sorted: Vec<i32> = tree::traverse(root.as_deref(), Order::InOrder).collect();
/// assert_eq!(sorted, [20, 30, 40, 50, 70]);
/// ```
#[macro_export]
macro_rules! bst {
    ($($value:expr),* $(,)?) => {{
        let mut root: $crate::ops::tree::Tree = None;
        $(root = $crate::ops::tree::insert(root, $value);)*
        root
    }};
}

/// An owned handle to the root of a subtree, or [`None`] for the empty tree.
pub type Tree = Option<Box<TreeNode>>;

/// A single tree node: a value plus ownership of its two optional subtrees.
///
/// Invariant: every value in `left` is strictly less than `value`, and every
/// value in `right` is strictly greater. Duplicates are never stored.
#[derive(Debug, PartialEq, Eq)]
pub struct TreeNode {
    /// Data the node holds.
    pub value: i32,
    /// Subtree of strictly smaller values.
    pub left: Tree,
    /// Subtree of strictly greater values.
    pub right: Tree,
}

impl TreeNode {
    /// Creates a leaf node holding `value`.
    #[inline]
    pub fn new(value: i32) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

/// The three depth-first traversal orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Left subtree, node, right subtree. Yields sorted order on a BST.
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
}

/// Inserts `value` into the subtree rooted at `root`, returning the new
/// root.
///
/// An empty subtree becomes a single leaf. Otherwise the value descends
/// left or right per the BST invariant. Inserting a value already present
/// is a silent no-op: the tree comes back unchanged.
///
/// # Time Complexity
///
/// Takes *O*(*h*) time, where *h* is the height of the tree. With no
/// balancing, *h* is *O*(*n*) in the worst case of sorted insertions.
///
/// # Examples
///
/// ```
/// use dsa_ops::prelude::*;
/// use dsa_ops::ops::tree;
///
/// let root = tree::insert(None, 50);
/// let root = tree::insert(root, 30);
/// let root = tree::insert(root, 70);
///
/// // Duplicates are dropped.
/// let root = tree::insert(root, 30);
///
/// let values: Vec<i32> = tree::traverse(root.as_deref(), Order::InOrder).collect();
/// assert_eq!(values, [30, 50, 70]);
/// ```
pub fn insert(root: Tree, value: i32) -> Tree {
    match root {
        None => Some(Box::new(TreeNode::new(value))),
        Some(mut node) => {
            match value.cmp(&node.value) {
                Ordering::Less => node.left = insert(node.left.take(), value),
                Ordering::Greater => node.right = insert(node.right.take(), value),
                // Duplicate: leave the subtree as it is.
                Ordering::Equal => {}
            }
            Some(node)
        }
    }
}

/// Deletes `value` from the subtree rooted at `root`, returning the new
/// root.
///
/// Deleting from an empty subtree, or deleting a value that is not present,
/// is a silent no-op. On a match:
///
/// - no left child: the right child takes the node's place (this covers
///   both the leaf and right-only cases),
/// - no right child: the left child takes its place,
/// - two children: the node's value is overwritten with its in-order
///   successor (the minimum of the right subtree), and that value is then
///   deleted from the right subtree.
///
/// # Time Complexity
///
/// Takes *O*(*h*) time, where *h* is the height of the tree.
///
/// # Examples
///
/// ```
/// use dsa_ops::prelude::*;
/// use dsa_ops::ops::tree;
///
/// let root = bst![50, 30, 70, 20, 40];
///
/// // 30 has two children; its successor 40 moves up.
/// let root = tree::delete(root, 30);
/// let values: Vec<i32> = tree::traverse(root.as_deref(), Order::InOrder).collect();
/// assert_eq!(values, [20, 40, 50, 70]);
///
/// // Deleting an absent value changes nothing.
/// let root = tree::delete(root, 99);
/// let values: Vec<i32> = tree::traverse(root.as_deref(), Order::InOrder).collect();
/// assert_eq!(values, [20, 40, 50, 70]);
/// ```
pub fn delete(root: Tree, value: i32) -> Tree {
    let mut node = match root {
        None => return None,
        Some(node) => node,
    };

    match value.cmp(&node.value) {
        Ordering::Less => {
            node.left = delete(node.left.take(), value);
            Some(node)
        }
        Ordering::Greater => {
            node.right = delete(node.right.take(), value);
            Some(node)
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, right) => right,
            (left, None) => left,
            (left, Some(right)) => {
                // Two children: promote the in-order successor's value and
                // remove it from where it came from.
                node.value = min_value(&right);
                node.left = left;
                node.right = delete(Some(right), node.value);
                Some(node)
            }
        },
    }
}

/// Returns a reference to the node holding `value`, or [`None`] if no such
/// node exists. A miss is not an error.
///
/// # Time Complexity
///
/// Takes *O*(*h*) time, where *h* is the height of the tree. Each
/// comparison discards one subtree.
///
/// # Examples
///
/// ```
/// use dsa_ops::prelude::*;
/// use dsa_ops::ops::tree;
///
/// let root = bst![50, 30, 70, 20, 40];
///
/// let found = tree::search(root.as_deref(), 40);
/// assert_eq!(found.map(|node| node.value), Some(40));
///
/// assert!(tree::search(root.as_deref(), 99).is_none());
/// assert!(tree::search(None, 1).is_none());
/// ```
pub fn search(root: Option<&TreeNode>, value: i32) -> Option<&TreeNode> {
    let node = root?;
    match value.cmp(&node.value) {
        Ordering::Less => search(node.left.as_deref(), value),
        Ordering::Greater => search(node.right.as_deref(), value),
        Ordering::Equal => Some(node),
    }
}

/// Returns a lazy iterator over the subtree's values in the given `order`.
///
/// The traversal borrows the tree and has no side effects, so it can be
/// restarted by calling `traverse` again on the same root. It runs on an
/// explicit stack bounded by the tree's height, so even a fully skewed tree
/// cannot overflow the call stack.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time to drain: every node is visited exactly once.
///
/// # Examples
///
/// ```
/// use dsa_ops::prelude::*;
/// use dsa_ops::ops::tree;
///
/// let root = bst![50, 30, 70, 20, 40];
///
/// let in_order: Vec<i32> = tree::traverse(root.as_deref(), Order::InOrder).collect();
/// assert_eq!(in_order, [20, 30, 40, 50, 70]);
///
/// let pre_order: Vec<i32> = tree::traverse(root.as_deref(), Order::PreOrder).collect();
/// assert_eq!(pre_order, [50, 30, 20, 40, 70]);
///
/// let post_order: Vec<i32> = tree::traverse(root.as_deref(), Order::PostOrder).collect();
/// assert_eq!(post_order, [20, 40, 30, 70, 50]);
/// ```
pub fn traverse(root: Option<&TreeNode>, order: Order) -> Traversal<'_> {
    Traversal {
        order,
        stack: root.map(Frame::Visit).into_iter().collect(),
    }
}

/// Lazy depth-first traversal over a borrowed tree. Created by [`traverse`].
#[derive(Debug)]
pub struct Traversal<'a> {
    order: Order,
    stack: Vec<Frame<'a>>,
}

#[derive(Debug)]
enum Frame<'a> {
    /// A subtree still to be expanded.
    Visit(&'a TreeNode),
    /// A value whose turn has come.
    Emit(i32),
}

impl Iterator for Traversal<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        while let Some(frame) = self.stack.pop() {
            let node = match frame {
                Frame::Emit(value) => return Some(value),
                Frame::Visit(node) => node,
            };

            // Push the node's parts in reverse of the order they should
            // come out, since the stack pops last-in first.
            match self.order {
                Order::InOrder => {
                    if let Some(right) = node.right.as_deref() {
                        self.stack.push(Frame::Visit(right));
                    }
                    self.stack.push(Frame::Emit(node.value));
                    if let Some(left) = node.left.as_deref() {
                        self.stack.push(Frame::Visit(left));
                    }
                }
                Order::PreOrder => {
                    if let Some(right) = node.right.as_deref() {
                        self.stack.push(Frame::Visit(right));
                    }
                    if let Some(left) = node.left.as_deref() {
                        self.stack.push(Frame::Visit(left));
                    }
                    self.stack.push(Frame::Emit(node.value));
                }
                Order::PostOrder => {
                    self.stack.push(Frame::Emit(node.value));
                    if let Some(right) = node.right.as_deref() {
                        self.stack.push(Frame::Visit(right));
                    }
                    if let Some(left) = node.left.as_deref() {
                        self.stack.push(Frame::Visit(left));
                    }
                }
            }
        }

        None
    }
}

/// Returns the minimum value in the subtree rooted at `node`: the leftmost
/// node's value.
fn min_value(node: &TreeNode) -> i32 {
    let mut cur = node;
    while let Some(left) = cur.left.as_deref() {
        cur = left;
    }
    cur.value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_order(root: &Tree) -> Vec<i32> {
        traverse(root.as_deref(), Order::InOrder).collect()
    }

    #[test]
    fn test_insert_into_empty() {
        let root = insert(None, 50);
        assert_eq!(in_order(&root), [50]);
    }

    #[test]
    fn test_insert_keeps_order() {
        let root = bst![50, 30, 70, 20, 40];
        assert_eq!(in_order(&root), [20, 30, 40, 50, 70]);
    }

    #[test]
    fn test_insert_duplicate_is_a_no_op() {
        let root = bst![50, 30, 70];
        let before = in_order(&root);
        let root = insert(root, 30);
        assert_eq!(in_order(&root), before);
    }

    #[test]
    fn test_delete_leaf() {
        let root = bst![50, 30, 70];
        let root = delete(root, 30);
        assert_eq!(in_order(&root), [50, 70]);
    }

    #[test]
    fn test_delete_node_with_one_child() {
        // 30 has only a left child (20).
        let root = bst![50, 30, 20];
        let root = delete(root, 30);
        assert_eq!(in_order(&root), [20, 50]);

        // 70 has only a right child (80).
        let root = bst![50, 70, 80];
        let root = delete(root, 70);
        assert_eq!(in_order(&root), [50, 80]);
    }

    #[test]
    fn test_delete_node_with_two_children() {
        let root = bst![50, 30, 70, 20, 40];
        // 30's in-order successor is 40.
        let root = delete(root, 30);
        assert_eq!(in_order(&root), [20, 40, 50, 70]);

        // 40 took 30's place.
        let node = search(root.as_deref(), 40).unwrap();
        assert_eq!(node.left.as_deref().map(|n| n.value), Some(20));
    }

    #[test]
    fn test_delete_root_with_two_children() {
        let root = bst![50, 30, 70, 60, 80];
        let root = delete(root, 50);
        assert_eq!(in_order(&root), [30, 60, 70, 80]);
        assert_eq!(root.as_deref().map(|n| n.value), Some(60));
    }

    #[test]
    fn test_delete_absent_value_is_identity() {
        let root = bst![50, 30, 70, 20, 40];
        let copy = bst![50, 30, 70, 20, 40];
        let root = delete(root, 99);
        assert_eq!(root, copy);
    }

    #[test]
    fn test_delete_from_empty() {
        assert_eq!(delete(None, 1), None);
    }

    #[test]
    fn test_search_hits_and_misses() {
        let root = bst![50, 30, 70, 20, 40];
        assert_eq!(search(root.as_deref(), 20).map(|n| n.value), Some(20));
        assert_eq!(search(root.as_deref(), 50).map(|n| n.value), Some(50));
        assert!(search(root.as_deref(), 35).is_none());
        assert!(search(None, 50).is_none());
    }

    #[test]
    fn test_traversal_orders() {
        let root = bst![50, 30, 70, 20, 40];
        let pre: Vec<i32> = traverse(root.as_deref(), Order::PreOrder).collect();
        let post: Vec<i32> = traverse(root.as_deref(), Order::PostOrder).collect();
        assert_eq!(pre, [50, 30, 20, 40, 70]);
        assert_eq!(post, [20, 40, 30, 70, 50]);
    }

    #[test]
    fn test_traversal_is_restartable() {
        let root = bst![2, 1, 3];
        let first: Vec<i32> = traverse(root.as_deref(), Order::InOrder).collect();
        let second: Vec<i32> = traverse(root.as_deref(), Order::InOrder).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_traversal_of_empty_tree() {
        assert_eq!(traverse(None, Order::InOrder).next(), None);
    }

    #[test]
    fn test_traversal_of_skewed_tree_stays_on_the_heap() {
        // Sorted inserts produce a fully right-skewed tree. The iterator
        // walks it on its own stack, so this must not overflow.
        let mut root = None;
        for value in 0..2_000 {
            root = insert(root, value);
        }
        let values: Vec<i32> = traverse(root.as_deref(), Order::InOrder).collect();
        assert_eq!(values.len(), 2_000);
        assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_demo_scenario() {
        let root = bst![50, 30, 70, 20, 40];
        assert_eq!(in_order(&root), [20, 30, 40, 50, 70]);

        let root = delete(root, 30);
        assert_eq!(in_order(&root), [20, 40, 50, 70]);
    }
}
