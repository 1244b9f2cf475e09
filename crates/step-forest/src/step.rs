//! Recorded operation steps as plain, inspectable data.
//!
//! A step is a tagged variant plus a human-readable note, never a captured
//! closure: the whole list can be examined, stored, or handed across a
//! boundary before anything mutates. Mutation happens only when a step is
//! applied, and only the `CreateLeaf`, `Splice`, and `Rotate` variants
//! mutate at all.

use crate::rotate::Rotation;

/// Which engine operation a step list was prepared for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreeOp {
    Insert,
    Delete,
    Search,
}

/// Descent direction out of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// One fragment of an operation's work.
///
/// Steps in a prepared list are sequentially dependent: each one is valid
/// exactly on the tree state produced by applying its predecessors, and
/// applying the whole list in order reproduces the direct engine call
/// node for node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepKind {
    /// The subject key was compared against the key at `at`. No mutation.
    Compare { at: i64 },
    /// The descent left `from` toward the given side. No mutation.
    Descend { from: i64, side: Side },
    /// Attach the subject key as a new leaf at its comparison-determined
    /// slot, recomputing ancestor heights. No rebalancing.
    CreateLeaf,
    /// Unlink the subject key: direct splice for at most one child, or
    /// in-order-successor promotion followed by removing the successor
    /// node from the right subtree. Recomputes heights, no rebalancing.
    Splice,
    /// One (possibly double) rotation at the node currently holding
    /// `pivot`. Applied exactly once; heights along the root path are
    /// recomputed.
    Rotate { pivot: i64, kind: Rotation },
    /// Terminal: the operation finished and the tree now matches the
    /// direct engine result. No mutation.
    Commit,
    /// Terminal: the key was absent, nothing was or will be mutated.
    NotFound,
    /// Terminal: insert of an existing key, reported and ignored.
    DuplicateIgnored,
}

/// A recorded step: the operation's subject key, the step's kind, and a
/// short narration of what this fragment does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub subject: i64,
    pub kind: StepKind,
    pub note: String,
}

impl Step {
    pub fn new(subject: i64, kind: StepKind, note: String) -> Self {
        Self {
            subject,
            kind,
            note,
        }
    }

    /// True for the variants that perform no mutation when applied.
    pub fn is_passive(&self) -> bool {
        !matches!(
            self.kind,
            StepKind::CreateLeaf | StepKind::Splice | StepKind::Rotate { .. }
        )
    }
}
