//! Recursive insert/remove/search over the shared node model.
//!
//! Subtrees travel by value: every mutating function consumes the old
//! subtree root and returns the new one, and the caller reattaches it.
//! The bool in each return reports whether the tree actually changed, so
//! the public surface can signal duplicate inserts and missing deletes as
//! no-ops rather than failures.

use crate::balance::BalancePolicy;
use crate::node::{min_key, Node};

/// Insert `key` into the subtree. Returns the new subtree root and whether
/// a node was created; an existing key leaves the subtree untouched.
pub fn insert<P: BalancePolicy>(node: Option<Box<Node>>, key: i64) -> (Box<Node>, bool) {
    let Some(mut node) = node else {
        return (Box::new(Node::leaf(key)), true);
    };

    let inserted = if key < node.key {
        let (child, inserted) = insert::<P>(node.left.take(), key);
        node.left = Some(child);
        inserted
    } else if key > node.key {
        let (child, inserted) = insert::<P>(node.right.take(), key);
        node.right = Some(child);
        inserted
    } else {
        return (node, false);
    };

    let (node, _) = P::rebalance_insert(node, key);
    (node, inserted)
}

/// Remove `key` from the subtree. A leaf or single-child node is spliced
/// out directly; a two-child node takes its in-order successor's key and
/// the successor is removed from the right subtree.
pub fn remove<P: BalancePolicy>(node: Option<Box<Node>>, key: i64) -> (Option<Box<Node>>, bool) {
    let Some(mut node) = node else {
        return (None, false);
    };

    let removed = if key < node.key {
        let (child, removed) = remove::<P>(node.left.take(), key);
        node.left = child;
        removed
    } else if key > node.key {
        let (child, removed) = remove::<P>(node.right.take(), key);
        node.right = child;
        removed
    } else if node.left.is_none() {
        return (node.right.take(), true);
    } else if node.right.is_none() {
        return (node.left.take(), true);
    } else {
        let successor = min_key(node.right.as_deref().expect("right child exists"));
        node.key = successor;
        let (child, _) = remove::<P>(node.right.take(), successor);
        node.right = child;
        true
    };

    let (node, _) = P::rebalance_delete(node);
    (Some(node), removed)
}

/// Membership test by plain descent. Never mutates, never fails.
pub fn contains(mut node: Option<&Node>, key: i64) -> bool {
    while let Some(n) = node {
        if key == n.key {
            return true;
        }
        node = if key < n.key {
            n.left.as_deref()
        } else {
            n.right.as_deref()
        };
    }
    false
}

/// Root-to-match key path of a search, empty when the key is absent.
pub fn search_path(mut node: Option<&Node>, key: i64) -> Vec<i64> {
    let mut path = Vec::new();
    while let Some(n) = node {
        path.push(n.key);
        if key == n.key {
            return path;
        }
        node = if key < n.key {
            n.left.as_deref()
        } else {
            n.right.as_deref()
        };
    }
    Vec::new()
}
