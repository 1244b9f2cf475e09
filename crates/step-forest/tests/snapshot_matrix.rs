use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use step_forest::{from_keys, AvlTree, BstTree};

fn tree_of(keys: &[i64]) -> AvlTree {
    let mut tree = AvlTree::new();
    tree.extend(keys.iter().copied());
    tree
}

#[test]
fn rotated_tree_snapshots_in_pre_order() {
    let tree = tree_of(&[10, 20, 30]);
    assert_eq!(tree.pre_order_keys(), vec![20, 10, 30]);

    let reloaded: AvlTree = from_keys(&[20, 10, 30]);
    assert_eq!(reloaded, tree);
}

#[test]
fn round_trip_preserves_shape_not_just_membership() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(0xfeed);
    let mut tree = AvlTree::new();
    for _ in 0..120 {
        let _ = tree.insert(rng.gen_range(0..500));
    }

    let keys = tree.pre_order_keys();
    let reloaded: AvlTree = from_keys(&keys);

    assert_eq!(reloaded, tree);
    assert_eq!(reloaded.pre_order_keys(), keys);
    assert_eq!(reloaded.height(), tree.height());
}

#[test]
fn round_trip_survives_deletions() {
    let mut tree = tree_of(&[50, 30, 70, 20, 40, 60, 80, 10, 45]);
    tree.delete(70).unwrap();
    tree.delete(20).unwrap();

    let reloaded: AvlTree = from_keys(&tree.pre_order_keys());
    assert_eq!(reloaded, tree);
}

#[test]
fn in_order_reload_degenerates_the_shape() {
    // The documented pitfall: an ascending key list rebuilds a plain BST
    // into a chain, so in-order output must never feed a snapshot reload.
    let source = tree_of(&[50, 30, 70, 20, 40, 60, 80]);

    let chain: BstTree = from_keys(&source.in_order_keys());
    assert_eq!(chain.height() as usize, chain.len());

    let faithful: BstTree = from_keys(&source.pre_order_keys());
    assert_eq!(faithful.height(), source.height());
}

#[test]
fn reload_replaces_previous_contents() {
    let mut tree = tree_of(&[1, 2, 3]);
    assert_eq!(tree.reload(&[20, 10, 30]), 3);
    assert_eq!(tree.pre_order_keys(), vec![20, 10, 30]);
    assert!(!tree.contains(1));
}

#[test]
fn rebuild_skips_duplicate_keys() {
    let tree: AvlTree = from_keys(&[5, 5, 5, 3]);
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.in_order_keys(), vec![3, 5]);
}

#[test]
fn empty_tree_round_trips() {
    let tree = AvlTree::new();
    assert!(tree.pre_order_keys().is_empty());
    let reloaded: AvlTree = from_keys(&tree.pre_order_keys());
    assert!(reloaded.is_empty());
}

#[test]
fn plain_bst_shares_the_snapshot_contract() {
    let mut tree = BstTree::new();
    tree.extend([40, 60, 20, 50, 10, 30, 70]);

    let reloaded: BstTree = from_keys(&tree.pre_order_keys());
    assert_eq!(reloaded, tree);
}
