//! Rebalance policies.
//!
//! The engine is generic over a [`BalancePolicy`] so the self-balancing tree
//! and its plain-BST collaborator share one insert/remove/search
//! implementation instead of duplicating it per structure kind. Policies are
//! stateless; the hooks run on the unwind of each recursive mutation and
//! return the (possibly restructured) subtree root together with the
//! rotation they performed, which the trace layer records.

use crate::node::Node;
use crate::rotate::{apply_rotation, Rotation};

pub trait BalancePolicy {
    /// Runs at every ancestor on the way back up from an insertion.
    /// `key` is the inserted key, used to tell the outer case from the
    /// inner one at the child below.
    fn rebalance_insert(node: Box<Node>, key: i64) -> (Box<Node>, Option<Rotation>);

    /// Runs at every ancestor on the way back up from a deletion. The
    /// rotation choice keys off the taller child's own balance factor.
    fn rebalance_delete(node: Box<Node>) -> (Box<Node>, Option<Rotation>);

    /// Per-node balance check used by tree validation.
    fn is_balanced(node: &Node) -> bool;
}

/// AVL policy: keeps every node's balance factor within `[-1, 1]`.
pub struct AvlBalance;

impl BalancePolicy for AvlBalance {
    fn rebalance_insert(mut node: Box<Node>, key: i64) -> (Box<Node>, Option<Rotation>) {
        node.update_height();
        let bf = node.balance_factor();

        if bf > 1 {
            let left = node.left.as_deref().expect("left child exists");
            let kind = if key < left.key {
                Rotation::Right
            } else {
                Rotation::LeftRight
            };
            return (apply_rotation(node, kind), Some(kind));
        }
        if bf < -1 {
            let right = node.right.as_deref().expect("right child exists");
            let kind = if key > right.key {
                Rotation::Left
            } else {
                Rotation::RightLeft
            };
            return (apply_rotation(node, kind), Some(kind));
        }
        (node, None)
    }

    fn rebalance_delete(mut node: Box<Node>) -> (Box<Node>, Option<Rotation>) {
        node.update_height();
        let bf = node.balance_factor();

        if bf > 1 {
            let left = node.left.as_deref().expect("left child exists");
            let kind = if left.balance_factor() >= 0 {
                Rotation::Right
            } else {
                Rotation::LeftRight
            };
            return (apply_rotation(node, kind), Some(kind));
        }
        if bf < -1 {
            let right = node.right.as_deref().expect("right child exists");
            let kind = if right.balance_factor() <= 0 {
                Rotation::Left
            } else {
                Rotation::RightLeft
            };
            return (apply_rotation(node, kind), Some(kind));
        }
        (node, None)
    }

    fn is_balanced(node: &Node) -> bool {
        (-1..=1).contains(&node.balance_factor())
    }
}

/// Plain-BST policy: keeps heights current but never rotates.
pub struct NoRebalance;

impl BalancePolicy for NoRebalance {
    fn rebalance_insert(mut node: Box<Node>, _key: i64) -> (Box<Node>, Option<Rotation>) {
        node.update_height();
        (node, None)
    }

    fn rebalance_delete(mut node: Box<Node>) -> (Box<Node>, Option<Rotation>) {
        node.update_height();
        (node, None)
    }

    fn is_balanced(_node: &Node) -> bool {
        true
    }
}
