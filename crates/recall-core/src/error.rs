//! Load-time failures. Everything else in the core degrades to a no-op.

use thiserror::Error;

/// Why a brick partition was rejected.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum PartitionFault {
    #[error("partition has no bricks")]
    NoBricks,
    #[error("first brick starts at {start}, expected 0")]
    FirstNotAtZero { start: usize },
    #[error("brick {rank} starts at {start}, not after the previous brick")]
    OutOfOrder { rank: usize, start: usize },
    #[error("brick {rank} starts at {start}, past the end of the text ({text_len})")]
    PastEnd {
        rank: usize,
        start: usize,
        text_len: usize,
    },
    #[error("brick {rank} starts at {start}, inside a character")]
    NotCharBoundary { rank: usize, start: usize },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum PassageError {
    /// The passage has no text; a learning session cannot start.
    #[error("passage text is empty")]
    EmptyPassage,
    /// A persisted or supplied partition does not tile the text.
    #[error("invalid brick partition: {0}")]
    InvalidPartition(#[from] PartitionFault),
}
