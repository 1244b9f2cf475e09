//! Self-balancing search-tree engine with replayable operation traces.
//!
//! The crate has three layers:
//!
//! - **Engine**: recursive insert/delete/search over an owned node model,
//!   generic over a rebalance policy. [`AvlTree`] keeps every balance
//!   factor within `[-1, 1]`; [`BstTree`] is the plain collaborator that
//!   shares the engine and the snapshot contract but never rotates.
//! - **Trace**: [`trace::prepare`] records the discrete fragments of one
//!   operation (comparisons, descents, leaf creation, splices, rotations)
//!   as inspectable [`Step`] data; [`trace::apply`] replays one fragment at
//!   a time. Applying the whole list reproduces the direct call exactly.
//! - **Snapshot**: pre-order key lists that round-trip tree *shape*, not
//!   just membership, by rebuilding through the ordinary insert path.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`node`] | [`Node`]: key, cached height, owned children |
//! | [`balance`] | [`BalancePolicy`], [`AvlBalance`], [`NoRebalance`] |
//! | [`rotate`] | [`Rotation`] kinds and the ownership-passing primitives |
//! | [`engine`] | recursive insert / remove / contains / search_path |
//! | [`tree`] | [`Tree`] public surface and `assert_valid` |
//! | [`step`] | [`Step`], [`StepKind`], [`Side`], [`TreeOp`] |
//! | [`trace`] | `prepare` / `apply` step recording and replay |
//! | [`snapshot`] | pre-order / in-order key lists, rebuild |
//! | [`print`] | debug subtree printer |
//! | [`error`] | [`TreeError`] reported no-ops |

pub mod balance;
pub mod engine;
pub mod error;
pub mod node;
pub mod print;
pub mod rotate;
pub mod snapshot;
pub mod step;
pub mod trace;
pub mod tree;

pub use balance::{AvlBalance, BalancePolicy, NoRebalance};
pub use error::TreeError;
pub use node::Node;
pub use rotate::Rotation;
pub use snapshot::from_keys;
pub use step::{Side, Step, StepKind, TreeOp};
pub use tree::{AvlTree, BstTree, Tree};
