//! Explorer error types

use thiserror::Error;

/// Failures surfaced to the search caller.
///
/// Clone because in-flight fetches are shared between coalesced callers, and
/// every awaiter receives the same outcome.
#[derive(Debug, Clone, Error)]
pub enum ExplorerError {
    /// The caller supplied a key that is not a well-formed move sequence.
    /// Surfaced immediately, never retried.
    #[error(transparent)]
    InvalidSequence(#[from] go_core::SequenceFormatError),

    /// The statistics service could not be reached within the retry budget.
    /// Recoverable: the caller may try again.
    #[error("next-move service unavailable after {attempts} attempt(s): {reason}")]
    QueryUnavailable { attempts: u32, reason: String },

    /// The service answered with something outside the documented contract.
    /// Never coerced into an empty result.
    #[error("malformed next-move response: {0}")]
    MalformedResponse(String),
}
