//! An unbalanced, owning BST. Every node exclusively owns its children through a `Box` so the
//! whole tree is released when the root goes away. No rotations ever happen: the shape of the
//! tree is decided entirely by the order in which values were inserted.
//!
//! All operations walk the tree with loops and explicit stacks rather than recursion. Inserting
//! sorted input produces a tree that is really a linked list, and that must not be able to blow
//! the call stack on traversal or drop.
//!
//! # Examples
//!
//! ```
//! use datetree::ordered::{Order, OrderedTree};
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.search(&1));
//!
//! // Inserting a value that is already present does nothing.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! tree.insert(0);
//! let mut seen = Vec::new();
//! tree.traverse(Order::InOrder, |x| seen.push(*x));
//! assert_eq!(seen, [0, 1]);
//! ```

use std::cmp::Ordering;
use std::fmt;

type Link<T> = Option<Box<Node<T>>>;

/// The depth-first order in which [`OrderedTree::traverse`] visits elements.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Left subtree, then the node, then the right subtree. Yields ascending order.
    InOrder,
    /// The node, then the left subtree, then the right subtree.
    PreOrder,
    /// Left subtree, then right subtree, then the node.
    PostOrder,
}

/// A Binary Search Tree holding unique values of `T`. This can be used for inserting values,
/// checking membership and walking the values in any of the three depth-first orders.
///
/// `T`'s `Ord` implementation must be a consistent total order. If it isn't, the tree won't
/// crash but searches and in-order traversal stop meaning anything.
pub struct OrderedTree<T> {
    root: Link<T>,
    len: usize,
}

/// A single value and the two subtrees it owns.
struct Node<T> {
    data: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(data: T) -> Box<Self> {
        Box::new(Self {
            data,
            left: None,
            right: None,
        })
    }
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> fmt::Debug for OrderedTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        self.traverse(Order::InOrder, |value| {
            set.entry(value);
        });
        set.finish()
    }
}

impl<T> OrderedTree<T> {
    /// Generate a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// How many values are stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `value` into the tree. Returns `true` if a new node was created and `false` if an
    /// equal value was already present, in which case the tree is left untouched and `value` is
    /// dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use datetree::ordered::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// assert!(tree.insert(5));
    /// assert!(!tree.insert(5));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match value.cmp(&node.data) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }

        *link = Some(Node::new_boxed(value));
        self.len += 1;
        true
    }

    /// Returns whether some value in the tree is equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use datetree::ordered::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.search(&1));
    /// assert!(!tree.search(&42));
    /// ```
    pub fn search(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.data) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }

        false
    }

    /// Removes every value from the tree. The tree can be used again afterwards.
    ///
    /// Nodes are released bottom-up: a node is only dropped once both of its children are gone.
    pub fn clear(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(top) = stack.last_mut() {
            if let Some(left) = top.left.take() {
                stack.push(left);
            } else if let Some(right) = top.right.take() {
                stack.push(right);
            } else {
                stack.pop();
            }
        }
        self.len = 0;
    }

    /// Calls `visit` once for every value in the tree, in the given `order`.
    ///
    /// # Examples
    ///
    /// ```
    /// use datetree::ordered::{Order, OrderedTree};
    ///
    /// let mut tree = OrderedTree::new();
    /// for x in [2, 1, 3] {
    ///     tree.insert(x);
    /// }
    ///
    /// let mut seen = Vec::new();
    /// tree.traverse(Order::PostOrder, |x| seen.push(*x));
    /// assert_eq!(seen, [1, 3, 2]);
    /// ```
    pub fn traverse<F>(&self, order: Order, visit: F)
    where
        F: FnMut(&T),
    {
        match order {
            Order::InOrder => self.in_order(visit),
            Order::PreOrder => self.pre_order(visit),
            Order::PostOrder => self.post_order(visit),
        }
    }

    /// Number of nodes on the longest path from the root down to a leaf. An empty tree has a
    /// height of 0 and a single node has a height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<T>, usize)> =
            self.root.as_deref().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|left| (left, depth + 1)));
            stack.extend(node.right.as_deref().map(|right| (right, depth + 1)));
        }

        height
    }

    fn in_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        let mut stack = Vec::new();
        let mut current = self.root.as_deref();
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }
            match stack.pop() {
                Some(node) => {
                    visit(&node.data);
                    current = node.right.as_deref();
                }
                None => break,
            }
        }
    }

    fn pre_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            visit(&node.data);
            // Right goes on first so that left comes off first.
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
    }

    fn post_order<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        // A node, right, left walk is exactly post-order backwards.
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        let mut reversed = Vec::with_capacity(self.len);
        while let Some(node) = stack.pop() {
            reversed.push(&node.data);
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }

        reversed.into_iter().rev().for_each(visit);
    }
}
