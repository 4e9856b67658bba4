//! This crate stores dates in an unbalanced Binary Search Tree (BST) and walks
//! them back out in sorted, root-first, or root-last order.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the value that
//! was inserted and may have child `Node`s. The most important invariants of
//! a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value takes `O(height)` (where `height` is defined as the
//! longest path from the root `Node` to a leaf `Node`). The tree in
//! [`ordered`] never rebalances, so its height depends entirely on insertion
//! order: random input gives `O(lg N)` on average, sorted input gives `N`.
//! BSTs also naturally support sorted iteration by visiting the left subtree,
//! then the subtree root, then the right subtree.
//!
//! ## Layout
//!
//! - [`ordered`] holds the tree itself.
//! - [`date`] is the value type the `datetree` binary stores.
//! - [`loader`] reads records from files into a tree.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod date;
pub mod loader;
pub mod ordered;
