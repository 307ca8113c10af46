//! An unbalanced BST. Keys are inserted where they belong and the tree
//! never reshapes itself, so the insertion order alone decides its height.
//! Inserting a key that is already present is rejected and reported rather
//! than stored twice.
//!
//! # Examples
//!
//! ```
//! use bst::{unbalanced::Tree, Insertion};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&1));
//!
//! assert_eq!(tree.insert(5), Insertion::Inserted);
//! assert_eq!(tree.insert(4), Insertion::Inserted);
//! assert!(tree.search(&4));
//!
//! // Inserting the same key again leaves the tree alone.
//! assert_eq!(tree.insert(4), Insertion::AlreadyPresent);
//! assert_eq!(tree.len(), 2);
//!
//! // Smaller keys go left.
//! let root = tree.root().unwrap();
//! assert_eq!(root.left().map(|n| *n.key()), Some(4));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use crate::Insertion;

type Link<K> = Option<Box<Node<K>>>;

/// A Binary Search Tree without any balancing. This can be used for
/// inserting keys and checking whether a key is present.
///
/// `Clone`, `PartialEq`, `Debug` and `Drop` all walk the tree with an explicit
/// stack, so a degenerate tree of any height is safe to use with them.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    // A degenerate tree is one long chain of boxes. Unlink the nodes onto a
    // stack so dropping doesn't recurse once per level.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K> Clone for Tree<K>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        // Visit root, then right subtree, then left subtree. Reversed, that is
        // a post-order walk, so both children are built before their parent.
        let mut order = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<K>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            order.push(node);
            stack.extend(node.left());
            stack.extend(node.right());
        }

        let mut built: Vec<Box<Node<K>>> = Vec::new();
        for node in order.into_iter().rev() {
            let right = node.right.as_ref().and_then(|_| built.pop());
            let left = node.left.as_ref().and_then(|_| built.pop());
            built.push(Box::new(Node {
                key: node.key.clone(),
                left,
                right,
            }));
        }

        Self {
            root: built.pop(),
            len: self.len,
        }
    }
}

/// Two trees are equal when they have the same shape with the same key in every node.
impl<K> PartialEq for Tree<K>
where
    K: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }

        let mut stack = vec![(self.root(), other.root())];
        while let Some(pair) = stack.pop() {
            match pair {
                (None, None) => {}
                (Some(a), Some(b)) if a.key == b.key => {
                    stack.push((a.left(), b.left()));
                    stack.push((a.right(), b.right()));
                }
                _ => return false,
            }
        }

        true
    }
}

impl<K> Eq for Tree<K> where K: Eq {}

/// Prints the keys in ascending order.
impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Inserts the given key into the tree.
    ///
    /// Keys strictly less than a node's key go into its left subtree, all
    /// others into its right subtree. If the key is already in the tree
    /// nothing changes and [`Insertion::AlreadyPresent`] is returned. Use
    /// [`Insertion::into_result`] to get an error naming the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::{unbalanced::Tree, Insertion};
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.insert(1), Insertion::Inserted);
    /// assert!(tree.search(&1));
    ///
    /// assert_eq!(tree.insert(1), Insertion::AlreadyPresent);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> Insertion
    where
        K: Ord,
    {
        // Until an equal key turns up, this is exactly the path `search` takes.
        let mut depth = 0;
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match key.cmp(&node.key) {
                Ordering::Equal => {
                    log::info!("rejected a duplicate key found at depth {}", depth);
                    return Insertion::AlreadyPresent;
                }
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
            };
            depth += 1;
        }

        log::trace!("inserting a new node at depth {}", depth);
        *slot = Some(Box::new(Node::new(key)));
        self.len += 1;
        Insertion::Inserted
    }

    /// Inserts the given key and hands the tree back so inserts can be chained.
    /// A duplicate key is logged and otherwise ignored, just like [`Tree::insert`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::unbalanced::Tree;
    ///
    /// let tree = Tree::new().with(5).with(4).with(3).with(6);
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.right().map(|n| *n.key()), Some(6));
    /// assert_eq!(root.left().and_then(|n| n.left()).map(|n| *n.key()), Some(3));
    /// ```
    pub fn with(mut self, key: K) -> Self
    where
        K: Ord,
    {
        let _ = self.insert(key);
        self
    }

    /// Returns whether the given key is somewhere in this tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::unbalanced::Tree;
    ///
    /// let tree = Tree::new().with(5).with(6);
    ///
    /// assert!(tree.search(&6));
    /// assert!(!tree.search(&4));
    /// ```
    pub fn search(&self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Equal => return true,
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
            };
        }

        false
    }

    /// The root of the tree, if anything has been inserted. Along with
    /// [`Node::left`] and [`Node::right`] this allows inspecting the shape
    /// of the tree.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// How many keys are in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// How many levels are in the tree. An empty tree has a height of 0 and a
    /// tree with only a root has a height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<K>, usize)> = self.root().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, level)) = stack.pop() {
            height = height.max(level);
            stack.extend(node.left().map(|n| (n, level + 1)));
            stack.extend(node.right().map(|n| (n, level + 1)));
        }

        height
    }

    /// Iterates over the keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::unbalanced::Tree;
    ///
    /// let tree: Tree<_> = vec![5, 2, 3, 10, 7].into_iter().collect();
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![2, 3, 5, 7, 10]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left_spine(self.root());
        iter
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            let _ = self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A `Node` holds one inserted key and up to two children.
pub struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The subtree of keys less than this node's key.
    pub fn left(&self) -> Option<&Node<K>> {
        self.left.as_deref()
    }

    /// The subtree of keys greater than or equal to this node's key.
    pub fn right(&self) -> Option<&Node<K>> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Only shows the keys of the children, not whole subtrees.
impl<K> fmt::Debug for Node<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("left", &self.left().map(Node::key))
            .field("right", &self.right().map(Node::key))
            .finish()
    }
}

/// An in-order iterator over the keys of a [`Tree`]. Created by [`Tree::iter`].
pub struct Iter<'a, K> {
    /// Nodes whose key hasn't been yielded yet but whose left subtree is
    /// already on the stack above them (or done).
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}
