use bst::unbalanced::{Node, Tree};
use bst::Insertion;

use quickcheck_macros::quickcheck;
use std::collections::HashSet;

/// Counts the nodes reachable from the root by walking the public shape API.
fn count_nodes<K>(node: Option<&Node<K>>) -> usize {
    node.map_or(0, |n| 1 + count_nodes(n.left()) + count_nodes(n.right()))
}

/// Every key reachable through a node's left child is smaller than the node's key.
fn left_is_smaller<K: Ord>(node: Option<&Node<K>>) -> bool {
    fn all_below<K: Ord>(node: Option<&Node<K>>, bound: &K) -> bool {
        node.map_or(true, |n| {
            n.key() < bound && all_below(n.left(), bound) && all_below(n.right(), bound)
        })
    }

    node.map_or(true, |n| {
        all_below(n.left(), n.key()) && left_is_smaller(n.left()) && left_is_smaller(n.right())
    })
}

/// Every key reachable through a node's right child is at least the node's key.
fn right_is_not_smaller<K: Ord>(node: Option<&Node<K>>) -> bool {
    fn all_at_least<K: Ord>(node: Option<&Node<K>>, bound: &K) -> bool {
        node.map_or(true, |n| {
            n.key() >= bound && all_at_least(n.left(), bound) && all_at_least(n.right(), bound)
        })
    }

    node.map_or(true, |n| {
        all_at_least(n.right(), n.key())
            && right_is_not_smaller(n.left())
            && right_is_not_smaller(n.right())
    })
}

#[test]
fn duplicate_after_chain_keeps_grandchild_slot_empty() {
    let tree = Tree::new().with(5).with(2).with(3).with(2);
    let left_right = tree
        .root()
        .and_then(Node::left)
        .and_then(Node::right)
        .unwrap();

    assert_eq!(*left_right.key(), 3);
    assert!(left_right.left().is_none());
    assert_eq!(count_nodes(tree.root()), 3);
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        let _ = tree.insert(*x);
    }

    xs.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(x))
}

#[quickcheck]
fn empty_tree_finds_nothing(x: i64) -> bool {
    !Tree::<i64>::new().search(&x)
}

#[quickcheck]
fn child_invariants(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    left_is_smaller(tree.root()) && right_is_not_smaller(tree.root())
}

#[quickcheck]
fn reinsert_is_rejected(xs: Vec<u8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let shape = tree.clone();
    let size = count_nodes(tree.root());

    xs.into_iter()
        .all(|x| tree.insert(x) == Insertion::AlreadyPresent)
        && tree == shape
        && count_nodes(tree.root()) == size
        && tree.len() == size
}

#[quickcheck]
fn iterates_sorted_distinct(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let mut expected = xs;
    expected.sort_unstable();
    expected.dedup();

    tree.iter().copied().eq(expected.into_iter())
}
