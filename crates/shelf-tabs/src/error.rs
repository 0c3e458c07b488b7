//! Tab error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TabError {
    #[error("Tab not found: {0}")]
    NotFound(String),

    #[error("Duplicate tab id: {0}")]
    DuplicateId(String),

    #[error("Tab index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Cannot remove the last tab of a sequence")]
    LastTab,

    #[error("A tab sequence cannot be empty")]
    Empty,
}
