//! Ordered key list ⇄ tree conversion.
//!
//! Snapshots are **pre-order** (node, left, right): reinserting a pre-order
//! sequence through the ordinary insert path reproduces the original
//! node-by-node shape, not just the key set. An in-order sequence must never
//! be used here: it is always ascending, so a rebuild degenerates the shape
//! toward a chain (or, under rebalancing, silently forgets it). Sorting the
//! keys has the same effect and is equally wrong.
//!
//! [`in_order_keys`] exists for validation and ordered listings only.

use crate::balance::BalancePolicy;
use crate::node::Node;
use crate::tree::Tree;

/// Keys in pre-order: the snapshot contract.
pub fn pre_order_keys(node: Option<&Node>, out: &mut Vec<i64>) {
    let Some(n) = node else {
        return;
    };
    out.push(n.key);
    pre_order_keys(n.left.as_deref(), out);
    pre_order_keys(n.right.as_deref(), out);
}

/// Keys in ascending order. Not a snapshot input.
pub fn in_order_keys(node: Option<&Node>, out: &mut Vec<i64>) {
    let Some(n) = node else {
        return;
    };
    in_order_keys(n.left.as_deref(), out);
    out.push(n.key);
    in_order_keys(n.right.as_deref(), out);
}

/// Rebuild a tree by inserting `keys` in the given sequence through the
/// ordinary insert operation. Duplicates are skipped.
pub fn from_keys<P: BalancePolicy>(keys: &[i64]) -> Tree<P> {
    let mut tree = Tree::new();
    tree.extend(keys.iter().copied());
    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balance::AvlBalance;

    #[test]
    fn pre_order_walks_node_left_right() {
        let tree: Tree<AvlBalance> = from_keys(&[20, 10, 30]);
        let mut keys = Vec::new();
        pre_order_keys(tree.root.as_deref(), &mut keys);
        assert_eq!(keys, vec![20, 10, 30]);

        let mut ordered = Vec::new();
        in_order_keys(tree.root.as_deref(), &mut ordered);
        assert_eq!(ordered, vec![10, 20, 30]);
    }
}
