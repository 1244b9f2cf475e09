use thiserror::Error;

/// Reported no-ops of the tree surface. Nothing here is fatal: the tree is
/// unchanged and still valid whenever one of these is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    #[error("duplicate key ignored: {0}")]
    DuplicateKey(i64),

    #[error("key not found: {0}")]
    KeyNotFound(i64),
}
