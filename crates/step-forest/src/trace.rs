//! Step-by-step operation traces.
//!
//! [`prepare`] runs the instrumented algorithm against a scratch clone and
//! records every fragment of work as a [`Step`]; the source tree is not
//! touched. [`apply`] later performs one fragment's mutation on the live
//! tree. The split exists because the algorithm mutates destructively as it
//! runs: a consumer that wants to show the still-unmodified tree between
//! fragments needs the recording and the mutation decoupled.
//!
//! Steps are sequentially dependent. Applying the whole list in order ends
//! on a tree node-for-node identical to the direct engine call; applying a
//! prefix leaves a well-ordered tree that is in general neither the pre-
//! nor the post-operation state, so a caller that abandons a sequence
//! mid-way should drain the remaining steps promptly rather than leave the
//! tail uncommitted.
//!
//! Replay never re-decides anything: `CreateLeaf` and `Splice` perform the
//! rebalance-free structural change with height upkeep, and each recorded
//! `Rotate` re-locates its pivot by key and applies exactly the recorded
//! kind. Rotation decisions made at preparation time stay correct at
//! replay time because every earlier step has already reproduced the state
//! the decision was made on.

use crate::balance::BalancePolicy;
use crate::node::{min_key, Node};
use crate::rotate::{apply_rotation, Rotation};
use crate::step::{Side, Step, StepKind, TreeOp};
use crate::tree::Tree;

/// Build the full step list for one operation without mutating `tree`.
///
/// A no-op operation (duplicate insert, missing-key delete) yields a single
/// terminal step. Preparing again from the same pre-state yields an
/// equivalent sequence.
pub fn prepare<P: BalancePolicy>(tree: &Tree<P>, op: TreeOp, key: i64) -> Vec<Step> {
    let mut steps = Vec::new();
    match op {
        TreeOp::Insert => {
            if tree.contains(key) {
                steps.push(Step::new(
                    key,
                    StepKind::DuplicateIgnored,
                    format!("key {key} already present, insert ignored"),
                ));
                return steps;
            }
            let _ = trace_insert::<P>(tree.root.clone(), key, &mut steps);
            steps.push(Step::new(
                key,
                StepKind::Commit,
                format!("insert of {key} committed"),
            ));
        }
        TreeOp::Delete => {
            if !tree.contains(key) {
                steps.push(Step::new(
                    key,
                    StepKind::NotFound,
                    format!("key {key} not found, nothing to delete"),
                ));
                return steps;
            }
            let _ = trace_remove::<P>(tree.root.clone(), key, &mut steps, true);
            steps.push(Step::new(
                key,
                StepKind::Commit,
                format!("delete of {key} committed"),
            ));
        }
        TreeOp::Search => {
            let mut node = tree.root.as_deref();
            while let Some(n) = node {
                steps.push(compare(key, n.key));
                if key == n.key {
                    steps.push(Step::new(key, StepKind::Commit, format!("found {key}")));
                    return steps;
                }
                let side = if key < n.key { Side::Left } else { Side::Right };
                steps.push(descend(key, n.key, side));
                node = match side {
                    Side::Left => n.left.as_deref(),
                    Side::Right => n.right.as_deref(),
                };
            }
            steps.push(Step::new(
                key,
                StepKind::NotFound,
                format!("key {key} not found"),
            ));
        }
    }
    steps
}

/// Perform exactly one step's fragment of mutation. Passive steps
/// (comparisons, descents, terminals) leave the tree untouched.
pub fn apply<P: BalancePolicy>(tree: &mut Tree<P>, step: &Step) {
    match step.kind {
        StepKind::CreateLeaf => {
            tree.root = Some(attach_leaf(tree.root.take(), step.subject));
            tree.len += 1;
        }
        StepKind::Splice => {
            tree.root = splice_key(tree.root.take(), step.subject);
            tree.len -= 1;
        }
        StepKind::Rotate { pivot, kind } => {
            tree.root = rotate_at(tree.root.take(), pivot, kind);
        }
        StepKind::Compare { .. }
        | StepKind::Descend { .. }
        | StepKind::Commit
        | StepKind::NotFound
        | StepKind::DuplicateIgnored => {}
    }
}

fn compare(subject: i64, at: i64) -> Step {
    Step::new(
        subject,
        StepKind::Compare { at },
        format!("compare {subject} with {at}"),
    )
}

fn descend(subject: i64, from: i64, side: Side) -> Step {
    Step::new(
        subject,
        StepKind::Descend { from, side },
        format!("go {} of {from}", side.as_str()),
    )
}

/// Instrumented mirror of `engine::insert`. The caller guarantees `key` is
/// absent, so the equal branch never runs.
fn trace_insert<P: BalancePolicy>(
    node: Option<Box<Node>>,
    key: i64,
    steps: &mut Vec<Step>,
) -> Box<Node> {
    let Some(mut node) = node else {
        steps.push(Step::new(
            key,
            StepKind::CreateLeaf,
            format!("create leaf {key}"),
        ));
        return Box::new(Node::leaf(key));
    };

    steps.push(compare(key, node.key));
    if key < node.key {
        steps.push(descend(key, node.key, Side::Left));
        node.left = Some(trace_insert::<P>(node.left.take(), key, steps));
    } else {
        steps.push(descend(key, node.key, Side::Right));
        node.right = Some(trace_insert::<P>(node.right.take(), key, steps));
    }

    let pivot = node.key;
    let (node, rotation) = P::rebalance_insert(node, key);
    if let Some(kind) = rotation {
        steps.push(rotate_step(key, pivot, kind));
    }
    node
}

/// Instrumented mirror of `engine::remove`. The caller guarantees `key` is
/// present. `narrate` is cleared for the inner successor removal so the
/// list carries a single `Splice` and only the rotations of the inner
/// unwind.
fn trace_remove<P: BalancePolicy>(
    node: Option<Box<Node>>,
    key: i64,
    steps: &mut Vec<Step>,
    narrate: bool,
) -> Option<Box<Node>> {
    let mut node = node?;

    if narrate {
        steps.push(compare(key, node.key));
    }
    if key < node.key {
        if narrate {
            steps.push(descend(key, node.key, Side::Left));
        }
        node.left = trace_remove::<P>(node.left.take(), key, steps, narrate);
    } else if key > node.key {
        if narrate {
            steps.push(descend(key, node.key, Side::Right));
        }
        node.right = trace_remove::<P>(node.right.take(), key, steps, narrate);
    } else if node.left.is_none() || node.right.is_none() {
        if narrate {
            let note = match (&node.left, &node.right) {
                (None, None) => format!("remove leaf {key}"),
                _ => format!("splice out {key}, its child takes its place"),
            };
            steps.push(Step::new(key, StepKind::Splice, note));
        }
        return node.left.take().or_else(|| node.right.take());
    } else {
        let successor = min_key(node.right.as_deref().expect("right child exists"));
        if narrate {
            steps.push(Step::new(
                key,
                StepKind::Splice,
                format!("replace {key} with in-order successor {successor}"),
            ));
        }
        node.key = successor;
        node.right = trace_remove::<P>(node.right.take(), successor, steps, false);
    }

    let pivot = node.key;
    let (node, rotation) = P::rebalance_delete(node);
    if let Some(kind) = rotation {
        steps.push(rotate_step(key, pivot, kind));
    }
    Some(node)
}

fn rotate_step(subject: i64, pivot: i64, kind: Rotation) -> Step {
    Step::new(
        subject,
        StepKind::Rotate { pivot, kind },
        format!("{} rotation at {pivot}", kind.as_str()),
    )
}

/// BST attach with height recompute on the unwind, no rebalancing.
fn attach_leaf(node: Option<Box<Node>>, key: i64) -> Box<Node> {
    let Some(mut node) = node else {
        return Box::new(Node::leaf(key));
    };
    if key < node.key {
        node.left = Some(attach_leaf(node.left.take(), key));
    } else if key > node.key {
        node.right = Some(attach_leaf(node.right.take(), key));
    }
    node.update_height();
    node
}

/// BST unlink (direct splice or successor promotion) with height recompute
/// on the unwind, no rebalancing.
fn splice_key(node: Option<Box<Node>>, key: i64) -> Option<Box<Node>> {
    let mut node = node?;
    if key < node.key {
        node.left = splice_key(node.left.take(), key);
    } else if key > node.key {
        node.right = splice_key(node.right.take(), key);
    } else if node.left.is_none() || node.right.is_none() {
        return node.left.take().or_else(|| node.right.take());
    } else {
        let successor = min_key(node.right.as_deref().expect("right child exists"));
        node.key = successor;
        node.right = splice_key(node.right.take(), successor);
    }
    node.update_height();
    Some(node)
}

/// Descend to the node currently holding `pivot`, rotate it as recorded,
/// and recompute heights back up the descent path.
fn rotate_at(node: Option<Box<Node>>, pivot: i64, kind: Rotation) -> Option<Box<Node>> {
    let mut node = node?;
    if pivot < node.key {
        node.left = rotate_at(node.left.take(), pivot, kind);
    } else if pivot > node.key {
        node.right = rotate_at(node.right.take(), pivot, kind);
    } else {
        return Some(apply_rotation(node, kind));
    }
    node.update_height();
    Some(node)
}
