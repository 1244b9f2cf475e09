use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PersistError {
    #[error("unknown structure tag: {0}")]
    UnknownStructure(String),

    #[error("missing structure tag on line {0}")]
    MissingTag(usize),
}
