use thiserror::Error;

/// A command was issued with context that cannot apply to the current document.
///
/// The document is never touched when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreconditionViolation {
    #[error("line {index} is out of range (document has {len} lines)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("selection start {start} is after selection end {end}")]
    InvertedSelection { start: usize, end: usize },
}

#[derive(Error, Debug)]
pub enum SenkError {
    #[error("Rejected command: {0}")]
    Precondition(#[from] PreconditionViolation),

    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("Invalid note id: {0:?}")]
    InvalidNoteId(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Unknown key: {0}")]
    UnknownKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, SenkError>;
