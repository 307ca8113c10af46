//! This crate exposes an unbalanced Binary Search Tree (BST) along with a
//! small "crypto square" transposition cipher and a bowling scorer, mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored keys. BSTs are typically defined recursively
//! using the notion of a `Node`. A `Node` stores the key that was inserted
//! and will sometimes have child `Node`s. The most important invariants of
//! the BST in this crate are:
//!
//! 1. For every `Node` in the tree, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in the tree, all the `Node`s in its right subtree have a
//!    key greater than or equal to its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is defined as
//! the longest path from the root `Node` to a leaf `Node`). The tree in
//! [`unbalanced`] does no rebalancing, so inserting keys in sorted order
//! produces a tree that is really a linked list with `height == N`.
//!
//! ## Bowling
//!
//! [`bowling`] keeps a running score for a game of two-roll frames where a
//! spare earns the first roll of the following frame as a bonus.
//!
//! ## Crypto Square
//!
//! [`crypto_square`] writes normalized text into a square-ish grid row by row
//! and reads it back out column by column.

#![deny(missing_docs)]

pub mod bowling;
pub mod crypto_square;
mod error;
pub mod unbalanced;
mod util;

#[cfg(test)]
mod test;

pub use error::{BowlingError, Error};
pub use util::Insertion;
