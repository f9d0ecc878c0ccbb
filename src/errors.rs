//! Error taxonomy for the triage queue and its intake collaborator.

use std::io;

use thiserror::Error;

/// The single core-level failure: removing from a queue with no patients.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueueError {
    /// `dequeue` was called out of turn on an empty queue.
    #[error("priority queue is empty")]
    Empty,
}

/// Failures while reading patient records from the intake stream.
///
/// Invalid age or priority lines are not errors; the intake loop re-prompts
/// until a valid value arrives.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// The input stream ended in the middle of a record.
    #[error("intake stream ended before the record was complete")]
    UnexpectedEof,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A `Result` that fails with a [`QueueError`].
pub type QueueResult<T> = Result<T, QueueError>;

/// A `Result` that fails with an [`IntakeError`].
pub type IntakeResult<T> = Result<T, IntakeError>;
