//! Public tree surface over the recursive engine.

use std::fmt;
use std::marker::PhantomData;

use crate::balance::{AvlBalance, BalancePolicy, NoRebalance};
use crate::engine;
use crate::error::TreeError;
use crate::node::{height, Node};
use crate::snapshot;
use crate::step::{Step, TreeOp};
use crate::trace;

/// An owned search tree parameterized by its rebalance policy.
///
/// The tree is the sole owner of its root; every public operation runs to
/// completion synchronously and leaves the structure valid. Embedders that
/// share a tree across threads must serialize access themselves, since the
/// tree has no internal locking.
pub struct Tree<P: BalancePolicy = AvlBalance> {
    pub root: Option<Box<Node>>,
    pub(crate) len: usize,
    _policy: PhantomData<fn() -> P>,
}

/// The self-balancing tree.
pub type AvlTree = Tree<AvlBalance>;

/// The plain-BST collaborator: same engine, same snapshot contract,
/// no rotations.
pub type BstTree = Tree<NoRebalance>;

impl<P: BalancePolicy> Tree<P> {
    pub fn new() -> Self {
        Self {
            root: None,
            len: 0,
            _policy: PhantomData,
        }
    }

    /// Insert `key`. An existing key is a reported no-op, not a failure:
    /// the tree is unchanged and `DuplicateKey` says so.
    pub fn insert(&mut self, key: i64) -> Result<(), TreeError> {
        let (root, inserted) = engine::insert::<P>(self.root.take(), key);
        self.root = Some(root);
        if inserted {
            self.len += 1;
            Ok(())
        } else {
            Err(TreeError::DuplicateKey(key))
        }
    }

    /// Delete `key`. An absent key is a reported no-op with no mutation.
    pub fn delete(&mut self, key: i64) -> Result<(), TreeError> {
        let (root, removed) = engine::remove::<P>(self.root.take(), key);
        self.root = root;
        if removed {
            self.len -= 1;
            Ok(())
        } else {
            Err(TreeError::KeyNotFound(key))
        }
    }

    pub fn contains(&self, key: i64) -> bool {
        engine::contains(self.root.as_deref(), key)
    }

    /// Root-to-match key path of a search; empty when `key` is absent.
    pub fn search_path(&self, key: i64) -> Vec<i64> {
        engine::search_path(self.root.as_deref(), key)
    }

    /// Insert every key in sequence, skipping duplicates silently.
    /// Returns how many keys were actually added.
    pub fn extend<I: IntoIterator<Item = i64>>(&mut self, keys: I) -> usize {
        let mut added = 0;
        for key in keys {
            if self.insert(key).is_ok() {
                added += 1;
            }
        }
        added
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn height(&self) -> i32 {
        height(&self.root)
    }

    /// Keys in pre-order, the shape-preserving snapshot sequence.
    pub fn pre_order_keys(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.len);
        snapshot::pre_order_keys(self.root.as_deref(), &mut out);
        out
    }

    /// Keys in ascending order. For listings and validation, never for
    /// snapshots.
    pub fn in_order_keys(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.len);
        snapshot::in_order_keys(self.root.as_deref(), &mut out);
        out
    }

    /// Drop the current contents and rebuild from `keys` via repeated
    /// insert, skipping duplicates. Feeding back [`Self::pre_order_keys`]
    /// output reproduces the exact shape.
    pub fn reload(&mut self, keys: &[i64]) -> usize {
        self.clear();
        self.extend(keys.iter().copied())
    }

    /// Build the full, eagerly-recorded step list for one operation
    /// without touching this tree. See [`crate::trace`].
    pub fn prepare(&self, op: TreeOp, key: i64) -> Vec<Step> {
        trace::prepare(self, op, key)
    }

    /// Apply exactly one recorded step's fragment of mutation.
    pub fn apply_step(&mut self, step: &Step) {
        trace::apply(self, step)
    }

    /// Structural self-check: strict in-order key ordering, cached heights
    /// matching recomputed heights, and the policy's balance bound at every
    /// node.
    pub fn assert_valid(&self) -> Result<(), String> {
        fn check<P: BalancePolicy>(node: &Node) -> Result<i32, String> {
            let lh = node.left.as_deref().map(check::<P>).transpose()?.unwrap_or(0);
            let rh = node
                .right
                .as_deref()
                .map(check::<P>)
                .transpose()?
                .unwrap_or(0);

            let expected = 1 + lh.max(rh);
            if node.height != expected {
                return Err(format!(
                    "height mismatch at {}: expected {expected}, got {}",
                    node.key, node.height
                ));
            }
            if !P::is_balanced(node) {
                return Err(format!(
                    "balance violated at {}: bf={}",
                    node.key,
                    node.balance_factor()
                ));
            }
            Ok(expected)
        }

        if let Some(root) = self.root.as_deref() {
            check::<P>(root)?;
        }

        let ordered = self.in_order_keys();
        if ordered.len() != self.len {
            return Err(format!(
                "size mismatch: tracked {}, counted {}",
                self.len,
                ordered.len()
            ));
        }
        for pair in ordered.windows(2) {
            if pair[0] >= pair[1] {
                return Err(format!("key order violated: {} before {}", pair[0], pair[1]));
            }
        }
        Ok(())
    }
}

impl<P: BalancePolicy> Default for Tree<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: BalancePolicy> Clone for Tree<P> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
            _policy: PhantomData,
        }
    }
}

impl<P: BalancePolicy> PartialEq for Tree<P> {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl<P: BalancePolicy> fmt::Debug for Tree<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}
